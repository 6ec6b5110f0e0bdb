use std::io::BufRead;

use anyhow::Context;
use handset_common::phone::{Smartphone, SmartphoneBuilder};
use handset_common::success;
use handset_core::intake::Field;
use handset_core::inventory::Inventory;

use crate::terminal::{format, print, prompt::Prompt};

/// Asks for every field in order and appends the result.
///
/// The first unreadable or out-of-range answer aborts the whole add.
pub fn add<R: BufRead>(inventory: &mut Inventory, prompt: &mut Prompt<R>) -> anyhow::Result<()> {
    let phone: Smartphone = read_phone(prompt).context("smartphone was not added")?;
    let name: String = phone.model_name().to_owned();
    let position: usize = inventory.add(phone);
    success!("{name} added at position {position}");
    Ok(())
}

fn read_phone<R: BufRead>(prompt: &mut Prompt<R>) -> anyhow::Result<Smartphone> {
    let mut builder: SmartphoneBuilder = SmartphoneBuilder::new();

    for field in Field::ORDER {
        if field == Field::Brand {
            print::print_status(format::brand_choices());
        }
        let raw: String = prompt.require(field.label())?;
        field.apply(&mut builder, &raw)?;
    }

    Ok(builder.build()?)
}
