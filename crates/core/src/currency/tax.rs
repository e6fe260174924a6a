//! GST breakdown for a net amount.
//!
//! Intra-state sales carry two components (central and state), each computed
//! and rounded on its own. Inter-state sales carry a single integrated
//! component. Rounding each component separately means a 2.5% + 2.5% split can
//! differ by a unit from a single 5% charge: on 69.00 it is 1.73 + 1.73 = 3.46,
//! not 3.45.

use tillpoint_shared::{MonetaryValue, MoneyResult};

/// Kind of GST component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxKind {
    /// Central GST (intra-state).
    Central,
    /// State GST (intra-state).
    State,
    /// Integrated GST (inter-state).
    Integrated,
}

impl std::fmt::Display for TaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Central => write!(f, "CGST"),
            Self::State => write!(f, "SGST"),
            Self::Integrated => write!(f, "IGST"),
        }
    }
}

/// One rounded tax component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxComponent {
    /// Which component this is.
    pub kind: TaxKind,
    /// Rounded tax amount.
    pub amount: MonetaryValue,
}

/// Net amount, its tax components, and the resulting gross.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBreakdown {
    /// Amount before tax.
    pub net: MonetaryValue,
    /// Tax components, each rounded independently.
    pub components: Vec<TaxComponent>,
    /// Sum of all components.
    pub total_tax: MonetaryValue,
    /// `net + total_tax`.
    pub gross: MonetaryValue,
}

impl TaxBreakdown {
    /// Intra-state breakdown: central and state components, each at
    /// `component_rate` (e.g. `0.025` for 5% GST).
    ///
    /// # Example
    ///
    /// ```
    /// use tillpoint_core::currency::TaxBreakdown;
    /// use tillpoint_shared::MonetaryValue;
    ///
    /// let net = MonetaryValue::from_minor_units(6900, "INR").unwrap();
    /// let breakdown = TaxBreakdown::intra_state(&net, 0.025).unwrap();
    /// assert_eq!(breakdown.total_tax.amount(), 346);
    /// assert_eq!(breakdown.gross.amount(), 7246);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any error raised by `multiply` or `add`.
    pub fn intra_state(net: &MonetaryValue, component_rate: f64) -> MoneyResult<Self> {
        let component = net.multiply(component_rate)?;
        Self::from_components(
            net,
            vec![
                TaxComponent {
                    kind: TaxKind::Central,
                    amount: component,
                },
                TaxComponent {
                    kind: TaxKind::State,
                    amount: component,
                },
            ],
        )
    }

    /// Inter-state breakdown: a single integrated component at `rate`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `multiply` or `add`.
    pub fn inter_state(net: &MonetaryValue, rate: f64) -> MoneyResult<Self> {
        let component = TaxComponent {
            kind: TaxKind::Integrated,
            amount: net.multiply(rate)?,
        };
        Self::from_components(net, vec![component])
    }

    fn from_components(net: &MonetaryValue, components: Vec<TaxComponent>) -> MoneyResult<Self> {
        let total_tax =
            MonetaryValue::sum(components.iter().map(|c| &c.amount), net.currency_code())?;
        let gross = net.add(&total_tax)?;
        Ok(Self {
            net: *net,
            components,
            total_tax,
            gross,
        })
    }

    /// Returns the component of the given kind, if present.
    #[must_use]
    pub fn component(&self, kind: TaxKind) -> Option<&MonetaryValue> {
        self.components
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| &c.amount)
    }
}
