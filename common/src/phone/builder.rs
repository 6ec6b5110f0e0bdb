use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::InvalidInput;
use crate::phone::brand::Brand;
use crate::phone::rules;
use crate::phone::smartphone::Smartphone;
use crate::utils::clock;

/// Collects smartphone fields one at a time.
///
/// Each setter checks its rule immediately, so a caller reading fields from a
/// user can stop at the first bad value. [`SmartphoneBuilder::build`] only
/// succeeds once every field has been assigned.
#[derive(Debug, Default, Clone)]
pub struct SmartphoneBuilder {
    model_name: Option<String>,
    brand: Option<Brand>,
    cpu_frequency: Option<f64>,
    ram: Option<u32>,
    storage: Option<u32>,
    release_date: Option<NaiveDate>,
    battery_capacity: Option<u32>,
    launch_price: Option<Decimal>,
}

impl SmartphoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_name(&mut self, name: impl Into<String>) -> Result<(), InvalidInput> {
        let name: String = name.into();
        rules::model_name(&name)?;
        self.model_name = Some(name);
        Ok(())
    }

    pub fn brand(&mut self, brand: Brand) {
        self.brand = Some(brand);
    }

    pub fn cpu_frequency(&mut self, ghz: f64) -> Result<(), InvalidInput> {
        rules::cpu_frequency(ghz)?;
        self.cpu_frequency = Some(ghz);
        Ok(())
    }

    pub fn ram(&mut self, gb: u32) -> Result<(), InvalidInput> {
        rules::ram(gb)?;
        self.ram = Some(gb);
        Ok(())
    }

    pub fn storage(&mut self, gb: u32) -> Result<(), InvalidInput> {
        rules::storage(gb)?;
        self.storage = Some(gb);
        Ok(())
    }

    pub fn release_date(&mut self, date: NaiveDate) -> Result<(), InvalidInput> {
        self.release_date_at(date, clock::today())
    }

    pub fn release_date_at(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), InvalidInput> {
        rules::release_date(date, today)?;
        self.release_date = Some(date);
        Ok(())
    }

    pub fn battery_capacity(&mut self, mah: u32) -> Result<(), InvalidInput> {
        rules::battery_capacity(mah)?;
        self.battery_capacity = Some(mah);
        Ok(())
    }

    pub fn launch_price(&mut self, price: Decimal) -> Result<(), InvalidInput> {
        rules::launch_price(price)?;
        self.launch_price = Some(price);
        Ok(())
    }

    pub fn build(self) -> Result<Smartphone, InvalidInput> {
        Ok(Smartphone {
            model_name: self.model_name.ok_or(InvalidInput::MissingField("model name"))?,
            brand: self.brand.ok_or(InvalidInput::MissingField("brand"))?,
            cpu_frequency: self
                .cpu_frequency
                .ok_or(InvalidInput::MissingField("cpu frequency"))?,
            ram: self.ram.ok_or(InvalidInput::MissingField("RAM"))?,
            storage: self.storage.ok_or(InvalidInput::MissingField("storage"))?,
            release_date: self
                .release_date
                .ok_or(InvalidInput::MissingField("release date"))?,
            battery_capacity: self
                .battery_capacity
                .ok_or(InvalidInput::MissingField("battery capacity"))?,
            launch_price: self
                .launch_price
                .ok_or(InvalidInput::MissingField("launch price"))?,
            in_basket: false,
        })
    }
}
