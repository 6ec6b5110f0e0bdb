use handset_common::config::Config;
use handset_common::notice;
use handset_core::inventory::Inventory;

use crate::terminal::{format, print};

pub fn list(inventory: &Inventory, cfg: &Config) {
    if inventory.is_empty() {
        notice!("The inventory is empty.");
        return;
    }

    print::header("inventory", cfg.quiet);
    print::print(&format::table_header());
    for entry in inventory.entries() {
        print::print(&format::phone_row(&entry));
    }
    print::fat_separator();
    print::centerln(&format::inventory_summary(
        inventory.len(),
        inventory.basket_count(),
    ));
}
