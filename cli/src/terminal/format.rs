use chrono::NaiveDate;
use colored::*;
use handset_common::phone::{Brand, Smartphone};
use handset_core::inventory::Entry;
use handset_core::intake::DATE_FORMAT;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

const IN_BASKET: &str = "[in basket]";

pub fn table_header() -> String {
    let header: String = format!(
        "{:<3} {:<25} {:<10} {:<5} {:<7} {:<10} {}",
        "#", "Model", "Brand", "RAM", "Storage", "Price", "Status"
    );
    format!("{}", header.color(colors::SEPARATOR))
}

pub fn phone_row(entry: &Entry<'_>) -> String {
    let phone: &Smartphone = entry.phone;
    let status: ColoredString = match phone.in_basket() {
        true => IN_BASKET.color(colors::BASKET),
        false => "".normal(),
    };

    format!(
        "{:<3} {} {} {:<5} {:<7} {} {}",
        entry.position,
        format!("{:<25}", phone.model_name()).color(colors::PRIMARY),
        format!("{:<10}", phone.brand()).color(colors::BRAND),
        phone.ram(),
        phone.storage(),
        format!("{:<10}", price(phone)).color(colors::PRICE),
        status
    )
    .trim_end()
    .to_owned()
}

/// One line of the pick list: model plus memory figures.
pub fn choice_line(entry: &Entry<'_>) -> String {
    format!(
        "{} - {} ({} GB RAM, {} GB storage)",
        entry.position.to_string().color(colors::ACCENT),
        entry.phone.model_name(),
        entry.phone.ram(),
        entry.phone.storage()
    )
}

pub fn phone_to_detail(phone: &Smartphone) -> Vec<Detail> {
    let basket: ColoredString = match phone.in_basket() {
        true => "yes".color(colors::BASKET),
        false => "no".normal(),
    };

    vec![
        ("Brand".to_string(), phone.brand().to_string().color(colors::BRAND)),
        ("CPU".to_string(), format!("{} GHz", phone.cpu_frequency()).normal()),
        ("RAM".to_string(), format!("{} GB", phone.ram()).normal()),
        ("Storage".to_string(), format!("{} GB", phone.storage()).normal()),
        ("Battery".to_string(), format!("{} mAh", phone.battery_capacity()).normal()),
        ("Release".to_string(), release(phone.release_date()).normal()),
        ("Price".to_string(), price(phone).color(colors::PRICE)),
        ("Basket".to_string(), basket),
    ]
}

pub fn brand_choices() -> String {
    Brand::ALL
        .iter()
        .enumerate()
        .map(|(idx, brand)| format!("{idx}-{brand}"))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn inventory_summary(total: usize, in_basket: usize) -> String {
    let unit: &str = if total == 1 { "smartphone" } else { "smartphones" };
    format!(
        "{} {unit}, {} in the basket",
        total.to_string().bold().green(),
        in_basket.to_string().bold().yellow()
    )
}

fn price(phone: &Smartphone) -> String {
    format!("{}$", phone.launch_price())
}

fn release(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
