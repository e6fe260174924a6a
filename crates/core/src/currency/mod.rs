//! Money services: display formatting, allocation, and tax breakdown.

pub mod allocation;
pub mod format;
pub mod locale;
pub mod tax;

#[cfg(test)]
mod props;

pub use allocation::AllocationService;
pub use format::{FormatMoney, MoneyFormatter, format_money};
pub use locale::LocaleConventions;
pub use tax::{TaxBreakdown, TaxComponent, TaxKind};
