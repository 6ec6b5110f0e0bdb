#![cfg(test)]
use chrono::{Datelike, NaiveDate};
use handset_common::error::InvalidInput;
use handset_common::phone::{BasketChange, Brand, Smartphone, SmartphoneBuilder};
use handset_common::utils::clock;
use handset_core::intake::Field;
use handset_core::inventory::{Inventory, InventoryError};
use rust_decimal::Decimal;

/// Fills the add form the same way the interactive session does.
fn from_form(answers: [&str; 8]) -> Result<Smartphone, InvalidInput> {
    let mut builder = SmartphoneBuilder::new();
    for (field, raw) in Field::ORDER.into_iter().zip(answers) {
        field.apply(&mut builder, raw)?;
    }
    builder.build()
}

fn phone(name: &str, brand: &str) -> Smartphone {
    from_form([name, brand, "2.8", "8", "128", "4500", "2022-03-01", "499.99"]).unwrap()
}

fn seeded() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add(phone("Galaxy S22", "Samsung"));
    inventory.add(phone("iPhone 13 mini", "Apple"));
    inventory.add(phone("Galaxy A53", "samsung"));
    inventory.add(phone("Redmi Note 11", "Xiaomi"));
    inventory.add(phone("Galaxy Z Fold4", "1"));
    inventory
}

fn names(inventory: &Inventory) -> Vec<String> {
    inventory
        .entries()
        .map(|e| e.phone.model_name().to_owned())
        .collect()
}

#[test]
fn valid_values_round_trip_at_every_bound() {
    for (cpu, ram, storage, battery) in [("1.0", "2", "32", "2000"), ("4.0", "24", "1024", "8000")] {
        let phone = from_form([
            "Moto G Power", "3", cpu, ram, storage, battery, "2020-01-01", "0.01",
        ])
        .unwrap();

        assert_eq!(phone.cpu_frequency().to_string(), cpu.trim_end_matches(".0"));
        assert_eq!(phone.ram().to_string(), ram);
        assert_eq!(phone.storage().to_string(), storage);
        assert_eq!(phone.battery_capacity().to_string(), battery);
        assert_eq!(phone.launch_price(), Decimal::new(1, 2));
    }
}

#[test]
fn out_of_range_values_never_reach_the_inventory() {
    let mut inventory = seeded();
    let before = names(&inventory);

    let rejected = [
        ["Mini", "0", "2.0", "4", "64", "3000", "2020-01-01", "100"],
        ["Valid Name", "9", "2.0", "4", "64", "3000", "2020-01-01", "100"],
        ["Valid Name", "0", "0.5", "4", "64", "3000", "2020-01-01", "100"],
        ["Valid Name", "0", "2.0", "1", "64", "3000", "2020-01-01", "100"],
        ["Valid Name", "0", "2.0", "4", "2048", "3000", "2020-01-01", "100"],
        ["Valid Name", "0", "2.0", "4", "64", "9000", "2020-01-01", "100"],
        ["Valid Name", "0", "2.0", "4", "64", "3000", "2999-01-01", "100"],
        ["Valid Name", "0", "2.0", "4", "64", "3000", "2020-01-01", "-1"],
    ];

    for answers in rejected {
        if let Ok(phone) = from_form(answers) {
            inventory.add(phone);
        }
    }

    assert_eq!(names(&inventory), before);
}

#[test]
fn setter_failure_keeps_entry_unchanged() {
    let mut inventory = seeded();
    let before = inventory.get(2).unwrap().clone();

    let phone = inventory.get_mut(2).unwrap();
    assert_eq!(phone.set_ram(32), Err(InvalidInput::Ram(32)));
    assert_eq!(phone.set_model_name("iPhone_13"), Err(InvalidInput::ModelNameCharset));

    assert_eq!(inventory.get(2).unwrap(), &before);
}

#[test]
fn added_entry_lands_after_existing_ones() {
    let mut inventory = seeded();
    let size_before = inventory.len();

    let position = inventory.add(phone("Pixel 7a", "Google"));

    assert_eq!(position, size_before + 1);
    let last = inventory.entries().last().unwrap();
    assert_eq!(last.position, size_before + 1);
    assert_eq!(last.phone.model_name(), "Pixel 7a");
}

#[test]
fn delete_shifts_later_positions_down() {
    let mut inventory = seeded();

    inventory.remove(2).unwrap();

    assert_eq!(
        names(&inventory),
        vec!["Galaxy S22", "Galaxy A53", "Redmi Note 11", "Galaxy Z Fold4"]
    );
    assert_eq!(inventory.get(2).unwrap().model_name(), "Galaxy A53");
}

#[test]
fn delete_out_of_range_is_rejected() {
    let mut inventory = seeded();
    let before = names(&inventory);

    for position in [0, 6, 100] {
        assert_eq!(
            inventory.remove(position).unwrap_err(),
            InventoryError::PositionOutOfRange { position, len: 5 }
        );
    }

    assert_eq!(names(&inventory), before);
}

#[test]
fn add_to_basket_twice_is_idempotent() {
    let mut inventory = seeded();
    let phone = inventory.get_mut(4).unwrap();

    assert_eq!(phone.add_to_basket(), BasketChange::Added);
    assert_eq!(phone.add_to_basket(), BasketChange::AlreadyInBasket);
    assert!(phone.in_basket());
    assert_eq!(inventory.basket_count(), 1);
}

#[test]
fn search_reports_original_positions() {
    let inventory = seeded();

    let samsung: Vec<usize> = inventory.find_by_brand("sAmSuNg").map(|e| e.position).collect();
    assert_eq!(samsung, vec![1, 3, 5]);

    assert!(inventory.find_by_brand("Google").next().is_none());
    assert!(inventory.find_by_brand("Nokia").next().is_none());
}

#[test]
fn years_since_release_uses_calendar_years() {
    let inventory = seeded();
    let phone = inventory.get(1).unwrap();
    let today = clock::today();

    assert_eq!(phone.years_since_release(today), today.year() - 2022);
    assert_eq!(
        phone.years_since_release(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        3
    );
    assert_eq!(phone.brand(), Brand::Samsung);
}
