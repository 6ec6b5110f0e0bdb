//! Shared building blocks of the handset workspace.
//!
//! * [`phone`]: the smartphone entity, its brand enum and the field rules.
//! * [`error`]: the single [`error::InvalidInput`] error kind raised by those rules.
//! * [`config`]: runtime switches collected from the command line.
//! * [`utils`]: small helpers that do not belong to the model itself.

pub mod config;
pub mod error;
pub mod macros;
pub mod phone;
pub mod utils;

#[doc(hidden)]
pub use tracing;
