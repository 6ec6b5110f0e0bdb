//! # Inventory
//!
//! The single ordered collection of smartphones kept for the lifetime of the process.
//!
//! Users address entries by **position**, a 1-based index in insertion order.
//! Removing an entry shifts every later position down by one.

use handset_common::phone::Smartphone;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no smartphone at position {position}, the inventory holds {len}")]
    PositionOutOfRange { position: usize, len: usize },
}

/// A smartphone together with the position it is shown at.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub position: usize,
    pub phone: &'a Smartphone,
}

#[derive(Debug, Default, Clone)]
pub struct Inventory {
    phones: Vec<Smartphone>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Appends a smartphone and returns the position it now occupies.
    pub fn add(&mut self, phone: Smartphone) -> usize {
        debug!("adding '{}' at position {}", phone.model_name(), self.phones.len() + 1);
        self.phones.push(phone);
        self.phones.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.phones
            .iter()
            .enumerate()
            .map(|(idx, phone)| Entry { position: idx + 1, phone })
    }

    /// Entries whose brand name equals `query`, ignoring ASCII case.
    pub fn find_by_brand<'a>(&'a self, query: &'a str) -> impl Iterator<Item = Entry<'a>> {
        self.entries()
            .filter(move |entry| entry.phone.brand().matches_name(query))
    }

    pub fn basket_count(&self) -> usize {
        self.phones.iter().filter(|phone| phone.in_basket()).count()
    }

    pub fn get(&self, position: usize) -> Result<&Smartphone, InventoryError> {
        let idx: usize = self.index_of(position)?;
        Ok(&self.phones[idx])
    }

    pub fn get_mut(&mut self, position: usize) -> Result<&mut Smartphone, InventoryError> {
        let idx: usize = self.index_of(position)?;
        Ok(&mut self.phones[idx])
    }

    /// Removes the smartphone at `position`; nothing changes when the position is invalid.
    pub fn remove(&mut self, position: usize) -> Result<Smartphone, InventoryError> {
        let idx: usize = self.index_of(position)?;
        let phone: Smartphone = self.phones.remove(idx);
        debug!("removed '{}' from position {position}", phone.model_name());
        Ok(phone)
    }

    fn index_of(&self, position: usize) -> Result<usize, InventoryError> {
        match position {
            p if p >= 1 && p <= self.phones.len() => Ok(p - 1),
            _ => Err(InventoryError::PositionOutOfRange {
                position,
                len: self.phones.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use handset_common::phone::{Brand, SmartphoneBuilder};
    use rust_decimal::Decimal;

    fn phone(name: &str, brand: Brand) -> Smartphone {
        let mut builder = SmartphoneBuilder::new();
        builder.model_name(name).unwrap();
        builder.brand(brand);
        builder.cpu_frequency(3.0).unwrap();
        builder.ram(8).unwrap();
        builder.storage(256).unwrap();
        builder.battery_capacity(4500).unwrap();
        builder.release_date(NaiveDate::from_ymd_opt(2022, 9, 16).unwrap()).unwrap();
        builder.launch_price(Decimal::new(799, 0)).unwrap();
        builder.build().unwrap()
    }

    fn names(inventory: &Inventory) -> Vec<&str> {
        inventory.entries().map(|e| e.phone.model_name()).collect()
    }

    #[test]
    fn test_add_returns_next_position() {
        let mut inventory = Inventory::new();
        assert!(inventory.is_empty());

        assert_eq!(inventory.add(phone("iPhone 14", Brand::Apple)), 1);
        assert_eq!(inventory.add(phone("Galaxy S23", Brand::Samsung)), 2);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_entries_are_one_based_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(phone("iPhone 14", Brand::Apple));
        inventory.add(phone("Galaxy S23", Brand::Samsung));

        let positions: Vec<usize> = inventory.entries().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(names(&inventory), vec!["iPhone 14", "Galaxy S23"]);
    }

    #[test]
    fn test_find_by_brand_keeps_original_positions() {
        let mut inventory = Inventory::new();
        inventory.add(phone("Galaxy S23", Brand::Samsung));
        inventory.add(phone("iPhone 14", Brand::Apple));
        inventory.add(phone("Galaxy A54", Brand::Samsung));

        let found: Vec<usize> = inventory.find_by_brand("SAMSUNG").map(|e| e.position).collect();
        assert_eq!(found, vec![1, 3]);
        assert_eq!(inventory.find_by_brand("Google").count(), 0);
    }

    #[test]
    fn test_remove_shifts_later_positions() {
        let mut inventory = Inventory::new();
        inventory.add(phone("iPhone 14", Brand::Apple));
        inventory.add(phone("Galaxy S23", Brand::Samsung));
        inventory.add(phone("Pixel 7a", Brand::Google));

        let removed = inventory.remove(2).unwrap();
        assert_eq!(removed.model_name(), "Galaxy S23");
        assert_eq!(names(&inventory), vec!["iPhone 14", "Pixel 7a"]);
        assert_eq!(inventory.get(2).unwrap().model_name(), "Pixel 7a");
    }

    #[test]
    fn test_remove_out_of_range_leaves_inventory_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add(phone("iPhone 14", Brand::Apple));

        assert_eq!(
            inventory.remove(0).unwrap_err(),
            InventoryError::PositionOutOfRange { position: 0, len: 1 }
        );
        assert_eq!(
            inventory.remove(2).unwrap_err(),
            InventoryError::PositionOutOfRange { position: 2, len: 1 }
        );
        assert_eq!(names(&inventory), vec!["iPhone 14"]);
    }

    #[test]
    fn test_get_mut_and_basket_count() {
        let mut inventory = Inventory::new();
        inventory.add(phone("iPhone 14", Brand::Apple));
        inventory.add(phone("Pixel 7a", Brand::Google));

        inventory.get_mut(2).unwrap().add_to_basket();
        assert_eq!(inventory.basket_count(), 1);
        assert!(inventory.get(2).unwrap().in_basket());
        assert!(inventory.get_mut(3).is_err());
    }

    #[test]
    fn test_position_error_message() {
        let err = InventoryError::PositionOutOfRange { position: 7, len: 2 };
        assert_eq!(err.to_string(), "no smartphone at position 7, the inventory holds 2");
    }
}
