use std::io::BufRead;

use handset_common::config::Config;
use handset_common::phone::{BasketChange, Smartphone};
use handset_common::utils::clock;
use handset_common::{notice, success};
use handset_core::intake;
use handset_core::inventory::Inventory;

use crate::menu::{self, BehaviorAction};
use crate::terminal::prompt::{Prompt, is_unreadable_line};
use crate::terminal::{format, print};

/// Picks one smartphone and runs the basket submenu on it until the user goes back.
pub fn behavior<R: BufRead>(
    inventory: &mut Inventory,
    prompt: &mut Prompt<R>,
    cfg: &Config,
) -> anyhow::Result<()> {
    if inventory.is_empty() {
        notice!("There are no smartphones to pick from.");
        return Ok(());
    }

    print::header("pick a smartphone", cfg.quiet);
    for entry in inventory.entries() {
        print::print_status(format::choice_line(&entry));
    }

    let raw: String = prompt.require("Your choice (position)")?;
    let Some(position) = intake::parse_position(&raw) else {
        anyhow::bail!("'{raw}' is not a position");
    };
    let phone: &mut Smartphone = inventory.get_mut(position)?;

    print::tree_head(position, phone.model_name());
    print::as_tree_one_level(format::phone_to_detail(phone));
    crate::mprint!();

    let heading: String = format!("{} behaviour", phone.model_name());
    loop {
        menu::show::<BehaviorAction>(&heading, cfg);
        let line: String = match prompt.ask("Your choice") {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(()),
            Err(err) if is_unreadable_line(&err) => {
                notice!("{err:#}");
                continue;
            }
            Err(err) => return Err(err),
        };

        match line.parse::<BehaviorAction>() {
            Ok(BehaviorAction::AddToBasket) => {
                let change: BasketChange = phone.add_to_basket();
                report_basket(phone.model_name(), change);
            }
            Ok(BehaviorAction::RemoveFromBasket) => {
                let change: BasketChange = phone.remove_from_basket();
                report_basket(phone.model_name(), change);
            }
            Ok(BehaviorAction::YearsSinceRelease) => {
                let years: i32 = phone.years_since_release(clock::today());
                print::print_status(format!("{}: {years} years since release", phone.model_name()));
            }
            Ok(BehaviorAction::Back) => return Ok(()),
            Err(e) => notice!("{e}"),
        }
    }
}

fn report_basket(name: &str, change: BasketChange) {
    match change {
        BasketChange::Added => success!("{name} added to the basket"),
        BasketChange::AlreadyInBasket => notice!("{name} is already in the basket"),
        BasketChange::Removed => success!("{name} removed from the basket"),
        BasketChange::NotInBasket => notice!("{name} was not in the basket"),
    }
}
