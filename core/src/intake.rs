//! # Field Intake
//!
//! Reads the fields of a new smartphone from raw user text, one field at a time,
//! in the order the add form asks for them.
//!
//! Text is trimmed before parsing. Decimal fields accept `,` as well as `.` as
//! the decimal separator; dates use `yyyy-mm-dd`.

use std::str::FromStr;

use chrono::NaiveDate;
use handset_common::error::InvalidInput;
use handset_common::phone::{Brand, SmartphoneBuilder};
use rust_decimal::Decimal;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ModelName,
    Brand,
    CpuFrequency,
    Ram,
    Storage,
    BatteryCapacity,
    ReleaseDate,
    LaunchPrice,
}

impl Field {
    /// The order the add form walks through.
    pub const ORDER: [Field; 8] = [
        Field::ModelName,
        Field::Brand,
        Field::CpuFrequency,
        Field::Ram,
        Field::Storage,
        Field::BatteryCapacity,
        Field::ReleaseDate,
        Field::LaunchPrice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::ModelName => "Model",
            Field::Brand => "Brand",
            Field::CpuFrequency => "CPU (GHz)",
            Field::Ram => "RAM (GB)",
            Field::Storage => "Storage (GB)",
            Field::BatteryCapacity => "Battery (mAh)",
            Field::ReleaseDate => "Release date (yyyy-mm-dd)",
            Field::LaunchPrice => "Launch price",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Field::ModelName => "model name",
            Field::Brand => "brand",
            Field::CpuFrequency => "cpu frequency",
            Field::Ram => "RAM",
            Field::Storage => "storage",
            Field::BatteryCapacity => "battery capacity",
            Field::ReleaseDate => "release date",
            Field::LaunchPrice => "launch price",
        }
    }

    /// Parses `raw` and assigns it to the matching builder field.
    pub fn apply(self, builder: &mut SmartphoneBuilder, raw: &str) -> Result<(), InvalidInput> {
        let raw: &str = raw.trim();
        match self {
            Field::ModelName => builder.model_name(raw),
            Field::Brand => {
                builder.brand(raw.parse::<Brand>()?);
                Ok(())
            }
            Field::CpuFrequency => builder.cpu_frequency(self.parse_decimal_text::<f64>(raw)?),
            Field::Ram => builder.ram(self.parse_whole(raw)?),
            Field::Storage => builder.storage(self.parse_whole(raw)?),
            Field::BatteryCapacity => builder.battery_capacity(self.parse_whole(raw)?),
            Field::ReleaseDate => builder.release_date(self.parse_date(raw)?),
            Field::LaunchPrice => builder.launch_price(self.parse_decimal_text::<Decimal>(raw)?),
        }
    }

    fn malformed(&self, raw: &str) -> InvalidInput {
        InvalidInput::Malformed {
            field: self.noun(),
            value: raw.to_owned(),
        }
    }

    fn parse_whole(&self, raw: &str) -> Result<u32, InvalidInput> {
        raw.parse::<u32>().map_err(|_| self.malformed(raw))
    }

    fn parse_decimal_text<T: FromStr>(&self, raw: &str) -> Result<T, InvalidInput> {
        raw.replace(',', ".")
            .parse::<T>()
            .map_err(|_| self.malformed(raw))
    }

    fn parse_date(&self, raw: &str) -> Result<NaiveDate, InvalidInput> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| self.malformed(raw))
    }
}

/// Parses a 1-based position typed by the user.
pub fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}
