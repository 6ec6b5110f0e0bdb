use std::io::BufRead;

use handset_common::{notice, success};
use handset_core::intake;
use handset_core::inventory::Inventory;

use crate::terminal::prompt::Prompt;

/// Removes one smartphone by position, without confirmation.
pub fn delete<R: BufRead>(inventory: &mut Inventory, prompt: &mut Prompt<R>) -> anyhow::Result<()> {
    if inventory.is_empty() {
        notice!("The inventory is empty.");
        return Ok(());
    }

    let raw: String = prompt.require("Position to delete")?;
    let Some(position) = intake::parse_position(&raw) else {
        anyhow::bail!("'{raw}' is not a position");
    };

    let removed = inventory.remove(position)?;
    success!("{} removed from the inventory", removed.model_name());
    Ok(())
}
