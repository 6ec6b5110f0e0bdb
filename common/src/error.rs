//! # Invalid Input
//!
//! Every rule on a smartphone field reports through one error kind, so the
//! add operation can abort on the first problem with a readable message.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("model name must not be empty")]
    EmptyModelName,

    #[error("model name must be 5-40 characters long, got {0}")]
    ModelNameLength(usize),

    #[error("model name may only contain latin letters, digits and spaces")]
    ModelNameCharset,

    #[error("unknown brand '{0}', expected one of Apple, Samsung, Xiaomi, Google, OnePlus or 0-4")]
    UnknownBrand(String),

    #[error("cpu frequency must be between 1.0 and 4.0 GHz, got {0}")]
    CpuFrequency(f64),

    #[error("RAM must be between 2 and 24 GB, got {0}")]
    Ram(u32),

    #[error("storage must be between 32 and 1024 GB, got {0}")]
    Storage(u32),

    #[error("battery capacity must be between 2000 and 8000 mAh, got {0}")]
    BatteryCapacity(u32),

    #[error("release date {0} is in the future")]
    ReleaseDateInFuture(NaiveDate),

    #[error("launch price must be greater than 0, got {0}")]
    LaunchPrice(Decimal),

    #[error("could not read {field} from '{value}'")]
    Malformed { field: &'static str, value: String },

    #[error("{0} was never set")]
    MissingField(&'static str),
}
