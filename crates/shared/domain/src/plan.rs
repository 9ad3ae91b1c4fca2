use serde::Serialize;
use std::fmt;

/// Price of a plan: either a monthly amount or an opaque display label.
///
/// Serializes untagged, so a monthly price is a bare number and a label is a
/// bare string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    /// Amount charged per month, in dollars.
    Monthly(f64),
    /// Free-form text shown as-is (e.g. `"Custom"`).
    Label(&'static str),
}

impl Price {
    /// Returns the display form of the price.
    ///
    /// ```rust
    /// # use flexiforms_domain::Price;
    /// assert_eq!(Price::Monthly(12.0).formatted(), "$12 / month");
    /// assert_eq!(Price::Label("Custom").formatted(), "Custom");
    /// ```
    #[must_use]
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

/// Amounts print in their shortest form (`12`, `9.5`). Negative zero prints as
/// `0` and infinities as `Infinity`/`-Infinity`. Very large or very small
/// amounts print every digit rather than in exponent form (`1e21` prints as
/// `1000000000000000000000`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Monthly(amount) if amount == 0.0 => f.write_str("$0 / month"),
            Self::Monthly(amount) if amount.is_infinite() => {
                let sign = if amount.is_sign_negative() { "-" } else { "" };
                write!(f, "${sign}Infinity / month")
            }
            Self::Monthly(amount) => write!(f, "${amount} / month"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self::Monthly(amount)
    }
}

impl From<&'static str> for Price {
    fn from(label: &'static str) -> Self {
        Self::Label(label)
    }
}

/// Display data of a single pricing tier.
///
/// Values are compiled in and never mutated. Nothing is validated: an empty
/// feature list or a negative amount renders as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique within a catalog; used as list key and for the call-to-action choice.
    pub id: &'static str,
    pub title: &'static str,
    pub price: Price,
    /// Rendered in order.
    pub features: &'static [&'static str],
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_price_drops_trailing_zero_fraction() {
        assert_eq!(Price::Monthly(25.0).to_string(), "$25 / month");
        assert_eq!(Price::Monthly(9.5).to_string(), "$9.5 / month");
    }

    #[test]
    fn negative_amount_is_rendered_unvalidated() {
        assert_eq!(Price::Monthly(-5.0).to_string(), "$-5 / month");
    }

    #[test]
    fn label_is_verbatim() {
        let price = Price::Label("Custom");
        assert_eq!(price.formatted(), "Custom");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(Price::Monthly(-0.0).to_string(), "$0 / month");
        assert_eq!(Price::Monthly(0.0).to_string(), "$0 / month");
    }

    #[test]
    fn infinite_amounts_print_as_words() {
        assert_eq!(Price::Monthly(f64::INFINITY).to_string(), "$Infinity / month");
        assert_eq!(Price::Monthly(f64::NEG_INFINITY).to_string(), "$-Infinity / month");
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Price::from(12.0), Price::Monthly(12.0));
        assert_eq!(Price::from("Custom"), Price::Label("Custom"));
    }
}
