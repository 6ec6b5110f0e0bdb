//! Field constraints of a smartphone record.
//!
//! Each check returns `Ok(())` or the [`InvalidInput`] variant naming the broken rule.
//! Ranges are inclusive on both ends.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::InvalidInput;

pub const MODEL_NAME_CHARS: RangeInclusive<usize> = 5..=40;
pub const CPU_GHZ: RangeInclusive<f64> = 1.0..=4.0;
pub const RAM_GB: RangeInclusive<u32> = 2..=24;
pub const STORAGE_GB: RangeInclusive<u32> = 32..=1024;
pub const BATTERY_MAH: RangeInclusive<u32> = 2000..=8000;

static MODEL_NAME_CHARSET: OnceLock<Regex> = OnceLock::new();

fn model_name_charset() -> &'static Regex {
    MODEL_NAME_CHARSET.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9\s]+$").expect("model name pattern is valid")
    })
}

pub fn model_name(name: &str) -> Result<(), InvalidInput> {
    if name.trim().is_empty() {
        return Err(InvalidInput::EmptyModelName);
    }

    let len: usize = name.chars().count();
    if !MODEL_NAME_CHARS.contains(&len) {
        return Err(InvalidInput::ModelNameLength(len));
    }

    if !model_name_charset().is_match(name) {
        return Err(InvalidInput::ModelNameCharset);
    }

    Ok(())
}

/// NaN never satisfies the range and is rejected too.
pub fn cpu_frequency(ghz: f64) -> Result<(), InvalidInput> {
    match CPU_GHZ.contains(&ghz) {
        true => Ok(()),
        false => Err(InvalidInput::CpuFrequency(ghz)),
    }
}

pub fn ram(gb: u32) -> Result<(), InvalidInput> {
    match RAM_GB.contains(&gb) {
        true => Ok(()),
        false => Err(InvalidInput::Ram(gb)),
    }
}

pub fn storage(gb: u32) -> Result<(), InvalidInput> {
    match STORAGE_GB.contains(&gb) {
        true => Ok(()),
        false => Err(InvalidInput::Storage(gb)),
    }
}

pub fn battery_capacity(mah: u32) -> Result<(), InvalidInput> {
    match BATTERY_MAH.contains(&mah) {
        true => Ok(()),
        false => Err(InvalidInput::BatteryCapacity(mah)),
    }
}

/// A release date may be today but never later than `today`.
pub fn release_date(date: NaiveDate, today: NaiveDate) -> Result<(), InvalidInput> {
    if date > today {
        return Err(InvalidInput::ReleaseDateInFuture(date));
    }
    Ok(())
}

pub fn launch_price(price: Decimal) -> Result<(), InvalidInput> {
    if price <= Decimal::ZERO {
        return Err(InvalidInput::LaunchPrice(price));
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
