//! Rupee display formatting and movement classification.
//!
//! Monetary values are abbreviated with the Indian numbering tiers:
//! crore (`Cr`, 1e7), lakh (`L`, 1e5) and thousand (`K`, 1e3). Two
//! precisions exist: a compact form for KPI tiles and a precise form for
//! drill-down amounts, which below one lakh falls through to the full
//! amount with Indian digit grouping (last three digits, then pairs).
//!
//! Every function here is total. Formatting never fails for any `f64`
//! input, and classification maps values that do not compare (NaN) to
//! [`Trend::Neutral`].
//!
//! # Examples
//!
//! ```
//! use dash_core::format::{classify_trend, format_compact_currency, Trend};
//!
//! assert_eq!(format_compact_currency(45_675_000.0), "₹4.6 Cr");
//! assert_eq!(format_compact_currency(8_750_000.0), "₹87.5L");
//! assert_eq!(classify_trend(5.2), Trend::Positive);
//! ```

/// Lower bound of the crore display tier, in rupees.
pub const CRORE: f64 = 10_000_000.0;

/// Lower bound of the lakh display tier, in rupees.
pub const LAKH: f64 = 100_000.0;

/// Direction of a percentage movement, as shown on KPI tiles.
///
/// Obtained from [`classify_trend`]; view layers map it onto colour via
/// [`Trend::style_class`] and onto a glyph via [`Trend::arrow`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Strictly positive movement.
    Positive,
    /// Strictly negative movement.
    Negative,
    /// Zero movement, or a value that does not compare (NaN).
    Neutral,
}

impl Trend {
    /// Returns the style class token consumed by view layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use dash_core::format::Trend;
    ///
    /// assert_eq!(Trend::Positive.style_class(), "positive");
    /// assert_eq!(Trend::Negative.style_class(), "negative");
    /// assert_eq!(Trend::Neutral.style_class(), "neutral");
    /// ```
    pub fn style_class(&self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
            Trend::Neutral => "neutral",
        }
    }

    /// Returns the arrow glyph shown beside a movement percentage.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Positive => "↗",
            Trend::Negative => "↘",
            Trend::Neutral => "→",
        }
    }
}

/// Classifies a percentage movement for display.
///
/// Values greater than zero are [`Trend::Positive`], values less than
/// zero are [`Trend::Negative`], and everything else (zero, negative
/// zero, NaN) is [`Trend::Neutral`].
///
/// # Examples
///
/// ```
/// use dash_core::format::{classify_trend, Trend};
///
/// assert_eq!(classify_trend(0.1), Trend::Positive);
/// assert_eq!(classify_trend(-0.1), Trend::Negative);
/// assert_eq!(classify_trend(0.0), Trend::Neutral);
/// assert_eq!(classify_trend(f64::NAN), Trend::Neutral);
/// ```
pub fn classify_trend(value: f64) -> Trend {
    if value > 0.0 {
        Trend::Positive
    } else if value < 0.0 {
        Trend::Negative
    } else {
        Trend::Neutral
    }
}

/// Formats a rupee amount compactly for KPI tiles.
///
/// Amounts of one crore and above render as `₹{n.1} Cr`, amounts of one
/// lakh and above as `₹{n.1}L`, everything below as `₹{n}K` with the
/// thousands value rounded to a whole number.
///
/// # Examples
///
/// ```
/// use dash_core::format::format_compact_currency;
///
/// assert_eq!(format_compact_currency(125_000_000.0), "₹12.5 Cr");
/// assert_eq!(format_compact_currency(8_750_000.0), "₹87.5L");
/// assert_eq!(format_compact_currency(2_850.0), "₹3K");
/// ```
pub fn format_compact_currency(value: f64) -> String {
    if value >= CRORE {
        format!("₹{:.1} Cr", value / CRORE)
    } else if value >= LAKH {
        format!("₹{:.1}L", value / LAKH)
    } else {
        format!("₹{:.0}K", value / 1_000.0)
    }
}

/// Formats a rupee amount precisely for drill-down views.
///
/// The crore and lakh tiers carry two decimals; below one lakh the full
/// amount is shown with Indian digit grouping instead of a thousands
/// abbreviation.
///
/// # Examples
///
/// ```
/// use dash_core::format::format_precise_amount;
///
/// assert_eq!(format_precise_amount(15_986_250.0), "₹1.60 Cr");
/// assert_eq!(format_precise_amount(483_750.0), "₹4.84L");
/// assert_eq!(format_precise_amount(45_675.0), "₹45,675");
/// ```
pub fn format_precise_amount(value: f64) -> String {
    if value >= CRORE {
        format!("₹{:.2} Cr", value / CRORE)
    } else if value >= LAKH {
        format!("₹{:.2}L", value / LAKH)
    } else {
        // Saturating cast: NaN maps to 0, never panics
        format!("₹{}", group_indian(value.round() as i64))
    }
}

/// Groups an integer with Indian digit separators.
///
/// The last three digits form one group, every pair before them another:
/// `12,50,00,000` for twelve and a half crore.
///
/// # Examples
///
/// ```
/// use dash_core::format::group_indian;
///
/// assert_eq!(group_indian(125_000_000), "12,50,00,000");
/// assert_eq!(group_indian(45_675), "45,675");
/// assert_eq!(group_indian(850), "850");
/// assert_eq!(group_indian(-5_000), "-5,000");
/// ```
pub fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut i = head.len() % 2;
        if i == 1 {
            parts.push(&head[..1]);
        }
        while i < head.len() {
            parts.push(&head[i..i + 2]);
            i += 2;
        }
        parts.push(tail);
        parts.join(",")
    };
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Groups an unsigned integer with western thousands separators.
///
/// Used for patient counts, which are conventionally shown with
/// three-digit grouping rather than the lakh/crore pairs.
///
/// # Examples
///
/// ```
/// use dash_core::format::group_thousands;
///
/// assert_eq!(group_thousands(4_850), "4,850");
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(1_234_567), "1,234,567");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compact_tier_boundaries() {
        // Just below one lakh stays in the thousands tier
        assert_eq!(format_compact_currency(99_999.0), "₹100K");
        assert_eq!(format_compact_currency(100_000.0), "₹1.0L");
        assert_eq!(format_compact_currency(9_999_999.0), "₹100.0L");
        assert_eq!(format_compact_currency(10_000_000.0), "₹1.0 Cr");
    }

    #[test]
    fn test_compact_known_amounts() {
        assert_eq!(format_compact_currency(45_675_000.0), "₹4.6 Cr");
        assert_eq!(format_compact_currency(32_450_000.0), "₹3.2 Cr");
        assert_eq!(format_compact_currency(13_225_000.0), "₹1.3 Cr");
        assert_eq!(format_compact_currency(8_750_000.0), "₹87.5L");
        assert_eq!(format_compact_currency(125_000_000.0), "₹12.5 Cr");
        assert_eq!(format_compact_currency(2_850.0), "₹3K");
        assert_eq!(format_compact_currency(0.0), "₹0K");
    }

    #[test]
    fn test_precise_tier_boundaries() {
        assert_eq!(format_precise_amount(99_999.0), "₹99,999");
        assert_eq!(format_precise_amount(100_000.0), "₹1.00L");
        assert_eq!(format_precise_amount(10_000_000.0), "₹1.00 Cr");
    }

    #[test]
    fn test_precise_known_amounts() {
        assert_eq!(format_precise_amount(15_986_250.0), "₹1.60 Cr");
        assert_eq!(format_precise_amount(27_405_000.0), "₹2.74 Cr");
        assert_eq!(format_precise_amount(2_283_750.0), "₹22.84L");
        assert_eq!(format_precise_amount(2_500_000.0), "₹25.00L");
        assert_eq!(format_precise_amount(45_675.0), "₹45,675");
    }

    #[test]
    fn test_formatters_are_idempotent_per_input() {
        let v = 48_900_000.0;
        assert_eq!(format_compact_currency(v), format_compact_currency(v));
        assert_eq!(format_precise_amount(v), format_precise_amount(v));
    }

    #[test]
    fn test_classify_trend() {
        assert_eq!(classify_trend(0.1), Trend::Positive);
        assert_eq!(classify_trend(18.5), Trend::Positive);
        assert_eq!(classify_trend(-0.1), Trend::Negative);
        assert_eq!(classify_trend(-2.3), Trend::Negative);
        assert_eq!(classify_trend(0.0), Trend::Neutral);
        assert_eq!(classify_trend(-0.0), Trend::Neutral);
        assert_eq!(classify_trend(f64::NAN), Trend::Neutral);
    }

    #[test]
    fn test_trend_tokens() {
        assert_eq!(Trend::Positive.style_class(), "positive");
        assert_eq!(Trend::Negative.style_class(), "negative");
        assert_eq!(Trend::Neutral.style_class(), "neutral");
        assert_eq!(Trend::Positive.arrow(), "↗");
        assert_eq!(Trend::Negative.arrow(), "↘");
        assert_eq!(Trend::Neutral.arrow(), "→");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(850), "850");
        assert_eq!(group_indian(2_850), "2,850");
        assert_eq!(group_indian(45_675), "45,675");
        assert_eq!(group_indian(1_234_567), "12,34,567");
        assert_eq!(group_indian(125_000_000), "12,50,00,000");
        assert_eq!(group_indian(-45_675), "-45,675");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(4_850), "4,850");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    proptest! {
        #[test]
        fn prop_compact_never_panics(value in proptest::num::f64::ANY) {
            let s = format_compact_currency(value);
            prop_assert!(s.starts_with('₹'));
        }

        #[test]
        fn prop_precise_never_panics(value in proptest::num::f64::ANY) {
            let s = format_precise_amount(value);
            prop_assert!(s.starts_with('₹'));
        }

        #[test]
        fn prop_group_indian_digits_preserved(value in any::<i64>()) {
            let grouped = group_indian(value);
            let stripped: String = grouped.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, value.to_string());
        }
    }
}
