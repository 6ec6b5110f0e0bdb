//! # Smartphone Model
//!
//! * [`brand::Brand`]: the closed set of manufacturers.
//! * [`smartphone::Smartphone`]: the validated record kept in the inventory.
//! * [`builder::SmartphoneBuilder`]: sequential field assignment used while adding.
//! * [`rules`]: the per-field constraints shared by the two above.

pub mod brand;
pub mod builder;
pub mod rules;
pub mod smartphone;

pub use brand::Brand;
pub use builder::SmartphoneBuilder;
pub use smartphone::{BasketChange, Smartphone};
