//! Document types, builders, validation and the money engines.
//!
//! Rounding, discounts and totals are plain functions over
//! [`rust_decimal::Decimal`] and can be used without any rendering context.

mod builder;
pub mod countries;
pub mod currencies;
mod discount;
mod error;
mod rounding;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub use currencies::Currency;
pub use discount::*;
pub use error::*;
pub use rounding::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
