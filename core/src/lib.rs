//! Operations over the in-memory smartphone collection.
//!
//! * [`inventory`]: the ordered collection and its 1-based positions.
//! * [`intake`]: turning typed user text into validated smartphone fields.

pub mod intake;
pub mod inventory;
