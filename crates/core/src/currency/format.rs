//! Locale-aware display formatting.
//!
//! The fraction digit count is pinned to the currency's `decimal_places` from
//! the registry; the locale decides symbol, placement, separators, digit
//! grouping and the minus sign.

use num_format::ToFormattedString;
use tillpoint_shared::config::{DEFAULT_LOCALE, FormattingConfig};
use tillpoint_shared::{MonetaryValue, MoneyResult};

use super::locale::{self, LocaleConventions, SymbolPlacement};

/// Formats monetary values for display.
#[derive(Debug, Clone, Copy)]
pub struct MoneyFormatter {
    default_locale: LocaleConventions,
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self {
            default_locale: builtin_default(),
        }
    }
}

fn builtin_default() -> LocaleConventions {
    // DEFAULT_LOCALE is always curated.
    locale::find(DEFAULT_LOCALE).unwrap_or(locale::CURATED[0])
}

impl MoneyFormatter {
    /// Creates a formatter whose default locale comes from configuration.
    ///
    /// An unsupported configured locale falls back to `en-IN`.
    #[must_use]
    pub fn new(config: &FormattingConfig) -> Self {
        let default_locale = locale::find(&config.default_locale).unwrap_or_else(|| {
            tracing::warn!(
                configured = %config.default_locale,
                fallback = DEFAULT_LOCALE,
                "Unsupported default locale in configuration"
            );
            builtin_default()
        });
        Self { default_locale }
    }

    /// Tag of the locale used when none is given.
    #[must_use]
    pub fn default_locale(&self) -> &'static str {
        self.default_locale.tag
    }

    /// Formats `value` in the default locale.
    ///
    /// # Errors
    ///
    /// Returns any validation error raised by `value`.
    pub fn format(&self, value: &MonetaryValue) -> MoneyResult<String> {
        render(value, &self.default_locale)
    }

    /// Formats `value` in the locale `tag`, falling back to the default locale
    /// when `tag` is not supported.
    ///
    /// # Errors
    ///
    /// Returns any validation error raised by `value`.
    pub fn format_in(&self, value: &MonetaryValue, tag: &str) -> MoneyResult<String> {
        let conventions = locale::find(tag).unwrap_or_else(|| {
            tracing::debug!(
                requested = tag,
                fallback = self.default_locale.tag,
                "Unsupported locale, using default"
            );
            self.default_locale
        });
        render(value, &conventions)
    }
}

/// Formats `value` in `locale` (`"en-IN"` when in doubt).
///
/// # Example
///
/// ```
/// use tillpoint_core::currency::format_money;
/// use tillpoint_shared::MonetaryValue;
///
/// let price = MonetaryValue::from_minor_units(10000, "USD").unwrap();
/// assert_eq!(format_money(&price, "en-IN").unwrap(), "$100.00");
/// assert_eq!(format_money(&price, "en-DE").unwrap(), "US$100.00");
/// ```
///
/// # Errors
///
/// Returns any validation error raised by `value`.
pub fn format_money(value: &MonetaryValue, locale: &str) -> MoneyResult<String> {
    MoneyFormatter::default().format_in(value, locale)
}

/// Display formatting on `MonetaryValue`.
pub trait FormatMoney {
    /// Formats in the default locale (`en-IN`).
    fn format(&self) -> MoneyResult<String>;

    /// Formats in the given locale.
    fn format_in(&self, locale: &str) -> MoneyResult<String>;
}

impl FormatMoney for MonetaryValue {
    fn format(&self) -> MoneyResult<String> {
        MoneyFormatter::default().format(self)
    }

    fn format_in(&self, locale: &str) -> MoneyResult<String> {
        MoneyFormatter::default().format_in(self, locale)
    }
}

fn render(value: &MonetaryValue, conventions: &LocaleConventions) -> MoneyResult<String> {
    let currency = value.currency()?;
    let per_unit = currency.minor_units_per_unit();
    let magnitude = value.amount().unsigned_abs();
    let numbers = &conventions.numbers;

    let mut number = (magnitude / per_unit).to_formatted_string(numbers);
    if currency.decimal_places > 0 {
        let fraction = magnitude % per_unit;
        let width = currency.decimal_places as usize;
        number.push_str(numbers.decimal());
        number.push_str(&format!("{fraction:0width$}"));
    }

    let symbol = conventions.symbol_for(currency.code);
    let body = match conventions.placement {
        SymbolPlacement::Before => format!("{symbol}{number}"),
        SymbolPlacement::AfterWithSpace => format!("{number}\u{a0}{symbol}"),
    };

    Ok(if value.is_negative() {
        format!("{}{body}", numbers.minus_sign())
    } else {
        body
    })
}
