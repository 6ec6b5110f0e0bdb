use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::InvalidInput;
use crate::phone::brand::Brand;
use crate::phone::rules;
use crate::utils::clock;

/// Outcome of a basket toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketChange {
    Added,
    AlreadyInBasket,
    Removed,
    NotInBasket,
}

impl BasketChange {
    /// Whether the basket flag actually flipped.
    pub fn changed(&self) -> bool {
        matches!(self, BasketChange::Added | BasketChange::Removed)
    }
}

/// A smartphone record whose fields always satisfy [`rules`].
///
/// Instances come from [`crate::phone::SmartphoneBuilder`]; afterwards every setter
/// re-checks its rule and leaves the old value in place when the check fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Smartphone {
    pub(crate) model_name: String,
    pub(crate) brand: Brand,
    pub(crate) cpu_frequency: f64,
    pub(crate) ram: u32,
    pub(crate) storage: u32,
    pub(crate) release_date: NaiveDate,
    pub(crate) battery_capacity: u32,
    pub(crate) launch_price: Decimal,
    pub(crate) in_basket: bool,
}

impl Smartphone {
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn cpu_frequency(&self) -> f64 {
        self.cpu_frequency
    }

    pub fn ram(&self) -> u32 {
        self.ram
    }

    pub fn storage(&self) -> u32 {
        self.storage
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn battery_capacity(&self) -> u32 {
        self.battery_capacity
    }

    pub fn launch_price(&self) -> Decimal {
        self.launch_price
    }

    pub fn in_basket(&self) -> bool {
        self.in_basket
    }

    pub fn set_model_name(&mut self, name: impl Into<String>) -> Result<(), InvalidInput> {
        let name: String = name.into();
        rules::model_name(&name)?;
        self.model_name = name;
        Ok(())
    }

    pub fn set_brand(&mut self, brand: Brand) {
        self.brand = brand;
    }

    pub fn set_cpu_frequency(&mut self, ghz: f64) -> Result<(), InvalidInput> {
        rules::cpu_frequency(ghz)?;
        self.cpu_frequency = ghz;
        Ok(())
    }

    pub fn set_ram(&mut self, gb: u32) -> Result<(), InvalidInput> {
        rules::ram(gb)?;
        self.ram = gb;
        Ok(())
    }

    pub fn set_storage(&mut self, gb: u32) -> Result<(), InvalidInput> {
        rules::storage(gb)?;
        self.storage = gb;
        Ok(())
    }

    pub fn set_release_date(&mut self, date: NaiveDate) -> Result<(), InvalidInput> {
        self.set_release_date_at(date, clock::today())
    }

    pub fn set_release_date_at(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), InvalidInput> {
        rules::release_date(date, today)?;
        self.release_date = date;
        Ok(())
    }

    pub fn set_battery_capacity(&mut self, mah: u32) -> Result<(), InvalidInput> {
        rules::battery_capacity(mah)?;
        self.battery_capacity = mah;
        Ok(())
    }

    pub fn set_launch_price(&mut self, price: Decimal) -> Result<(), InvalidInput> {
        rules::launch_price(price)?;
        self.launch_price = price;
        Ok(())
    }

    pub fn add_to_basket(&mut self) -> BasketChange {
        if self.in_basket {
            return BasketChange::AlreadyInBasket;
        }
        self.in_basket = true;
        BasketChange::Added
    }

    pub fn remove_from_basket(&mut self) -> BasketChange {
        if !self.in_basket {
            return BasketChange::NotInBasket;
        }
        self.in_basket = false;
        BasketChange::Removed
    }

    /// Current year minus release year.
    pub fn years_since_release(&self, today: NaiveDate) -> i32 {
        clock::calendar_years_between(self.release_date, today)
    }
}
