//! Money types used across the application.

pub mod currency;
pub mod money;
pub mod rounding;

#[cfg(test)]
mod money_props;

pub use currency::{CURRENCIES, CurrencyConfig};
pub use money::MonetaryValue;
