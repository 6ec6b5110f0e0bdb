use std::io::BufRead;

use handset_common::config::Config;
use handset_common::notice;
use handset_core::inventory::{Entry, Inventory};

use crate::terminal::{format, print, prompt::Prompt};

pub fn find<R: BufRead>(
    inventory: &Inventory,
    prompt: &mut Prompt<R>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let query: String = prompt.require("Brand to search for")?;
    let matches: Vec<Entry<'_>> = inventory.find_by_brand(&query).collect();

    if matches.is_empty() {
        notice!("No smartphones found for brand '{query}'.");
        return Ok(());
    }

    let unit: &str = if matches.len() == 1 { "match" } else { "matches" };
    print::header(&format!("{} {unit}", matches.len()), cfg.quiet);
    print::print(&format::table_header());
    for entry in &matches {
        print::print(&format::phone_row(entry));
    }
    Ok(())
}
