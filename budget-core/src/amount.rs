//! Currency cell normalization.
//!
//! Budget exports mix plain numbers with Indian-grouped strings such as
//! `₹ 1,23,456 cr`. Everything that does not reduce to a finite float is
//! treated as "not a number" and reported as `None`.

use serde::Serializer;

const RUPEE: &str = "₹";

/// Unit suffixes removed from amounts, longest first so `crore` is not left as `ore`.
const UNIT_TOKENS: &[&str] = &["crore", "cr"];

/// One cell of the raw input table.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Missing,
    Text(String),
    Number(f64),
}

impl RawCell {
    /// Text form of the cell, `None` when missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Missing => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Number(v) => Some(format_decimal(*v)),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<f64> for RawCell {
    fn from(v: f64) -> Self {
        RawCell::Number(v)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(RawCell::Missing)
    }
}

/// Convert a raw cell into a finite amount.
pub fn normalize_amount(cell: &RawCell) -> Option<f64> {
    match cell {
        RawCell::Missing => None,
        RawCell::Number(v) => v.is_finite().then_some(*v),
        RawCell::Text(s) => normalize_amount_str(s),
    }
}

/// Strip the rupee symbol, grouping commas and crore units, then parse.
///
/// Unit stripping is case-sensitive: `CR` survives and fails the parse.
pub fn normalize_amount_str(raw: &str) -> Option<f64> {
    let mut s = raw.trim().replace(RUPEE, "").replace(',', "");
    for unit in UNIT_TOKENS {
        s = s.replace(unit, "");
    }

    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to two decimals, ties to even (`42.125` becomes `42.12`).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Decimal exponents rendered positionally; outside this range amounts use
/// exponent form (`1e+16`, `1.5e-05`).
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Render a float the way the published tables expect: integral values keep
/// one decimal (`1500.0`), very large or very small magnitudes use exponent
/// form with a signed two-digit exponent, everything else uses the shortest
/// round-trip form.
pub fn format_decimal(v: f64) -> String {
    // `{:e}` yields the shortest round-trip mantissa, e.g. `1.5e-5`
    let sci = format!("{:e}", v);
    if let Some((mantissa, exp)) = sci.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if v != 0.0 && !POSITIONAL_EXPONENTS.contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
    }

    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// serde helper for amount columns
pub fn serialize_decimal<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*v))
}
