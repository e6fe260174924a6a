//! Locale display conventions for currency amounts.
//!
//! Digit grouping, separators and the minus sign come from CLDR data via
//! `num_format::Locale`. This module only adds what that data lacks: the
//! symbol used for each registered currency and where the symbol goes.
//! Decimal places are NOT taken from here; they always come from the currency
//! registry.

use num_format::Locale;

/// Where the currency symbol goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$100.00`
    Before,
    /// `100,00 $` (no-break space between)
    AfterWithSpace,
}

/// Display conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    /// Canonical BCP 47 tag (e.g. "en-IN").
    pub tag: &'static str,
    /// CLDR number symbols and grouping.
    pub numbers: Locale,
    /// Symbol placement.
    pub placement: SymbolPlacement,
    symbols: &'static [(&'static str, &'static str)],
}

impl LocaleConventions {
    /// Symbol this locale uses for `code`; the code itself when unknown.
    #[must_use]
    pub fn symbol_for<'a>(&self, code: &'a str) -> &'a str {
        self.symbols
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(code, |&(_, symbol)| symbol)
    }

    /// The language subtag (e.g. "en").
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

const LOCAL_SYMBOLS: &[(&str, &str)] = &[("INR", "₹"), ("USD", "$"), ("EUR", "€")];
const INTERNATIONAL_SYMBOLS: &[(&str, &str)] = &[("INR", "₹"), ("USD", "US$"), ("EUR", "€")];

/// Languages that write the symbol after the amount.
const SUFFIX_LANGUAGES: [&str; 8] = ["de", "fr", "es", "it", "pt", "pl", "sv", "fi"];

/// Locales with pinned conventions. Any other tag known to CLDR takes its
/// numbers from CLDR and its symbols from the first entry here with the same
/// language, if any.
pub static CURATED: [LocaleConventions; 6] = [
    LocaleConventions {
        tag: "en-IN",
        numbers: Locale::en_IN,
        placement: SymbolPlacement::Before,
        symbols: LOCAL_SYMBOLS,
    },
    LocaleConventions {
        tag: "en-US",
        numbers: Locale::en,
        placement: SymbolPlacement::Before,
        symbols: LOCAL_SYMBOLS,
    },
    LocaleConventions {
        tag: "en-GB",
        numbers: Locale::en_GB,
        placement: SymbolPlacement::Before,
        symbols: INTERNATIONAL_SYMBOLS,
    },
    // English number style for receipts printed in Germany.
    LocaleConventions {
        tag: "en-DE",
        numbers: Locale::en,
        placement: SymbolPlacement::Before,
        symbols: INTERNATIONAL_SYMBOLS,
    },
    LocaleConventions {
        tag: "de-DE",
        numbers: Locale::de,
        placement: SymbolPlacement::AfterWithSpace,
        symbols: LOCAL_SYMBOLS,
    },
    LocaleConventions {
        tag: "hi-IN",
        numbers: Locale::hi,
        placement: SymbolPlacement::Before,
        symbols: LOCAL_SYMBOLS,
    },
];

/// Canonicalizes a locale tag: `en_in` → `en-IN`, `EN` → `en`.
#[must_use]
pub fn canonicalize(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .enumerate()
        .map(|(i, subtag)| {
            if i == 0 {
                subtag.to_ascii_lowercase()
            } else if subtag.len() == 2 {
                subtag.to_ascii_uppercase()
            } else if subtag.len() == 4 {
                let mut script = subtag.to_ascii_lowercase();
                if let Some(first) = script.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                script
            } else {
                subtag.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Finds conventions for `tag`.
///
/// Curated locales match exactly. Otherwise the number data is the CLDR
/// locale for the full tag, or for its language alone; `None` when CLDR
/// knows neither.
#[must_use]
pub fn find(tag: &str) -> Option<LocaleConventions> {
    let canonical = canonicalize(tag);
    if let Some(exact) = CURATED.iter().find(|l| l.tag == canonical) {
        return Some(*exact);
    }

    let language = canonical.split('-').next().unwrap_or_default();
    let numbers = Locale::from_name(canonical.as_str())
        .or_else(|_| Locale::from_name(language))
        .ok()?;

    let conventions = match CURATED.iter().find(|l| l.language() == language) {
        Some(sibling) => LocaleConventions {
            tag: numbers.name(),
            numbers,
            ..*sibling
        },
        None => LocaleConventions {
            tag: numbers.name(),
            numbers,
            placement: if SUFFIX_LANGUAGES.contains(&language) {
                SymbolPlacement::AfterWithSpace
            } else {
                SymbolPlacement::Before
            },
            symbols: INTERNATIONAL_SYMBOLS,
        },
    };
    Some(conventions)
}
