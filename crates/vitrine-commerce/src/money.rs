//! Money and price types.
//!
//! Amounts are euro cents held in an `i64`, which keeps cart totals exact.
//! Prices read from markup may fail to parse; those become [`Price::NaN`],
//! which is carried through arithmetic instead of being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrow no-break space, the French thousands separator.
const GROUP_SEPARATOR: char = '\u{202f}';

/// No-break space placed between the amount and the currency sign.
const SIGN_SEPARATOR: char = '\u{a0}';

/// The storefront's single currency.
pub const CURRENCY_SYMBOL: &str = "\u{20ac}";

/// A euro amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the cent.
    ///
    /// Returns `None` when the amount is not finite or does not fit in cents.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64))
    }

    /// Zero euros.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Try to add another Money value.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Money::new)
    }

    /// Try to multiply by a quantity.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Format for display in the French locale (e.g. "1 234,50 €").
    pub fn display(&self) -> String {
        let mut out = String::new();
        if self.amount_cents < 0 {
            out.push('-');
        }
        let abs = self.amount_cents.unsigned_abs();
        out.push_str(&group_thousands(abs / 100));
        out.push(',');
        out.push_str(&format!("{:02}", abs % 100));
        out.push(SIGN_SEPARATOR);
        out.push_str(CURRENCY_SYMBOL);
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// A unit price as read from the listing.
///
/// `NaN` stands for a price attribute that did not parse. It orders after
/// every amount, satisfies no upper bound, and absorbs any arithmetic it
/// takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Price {
    /// A valid amount.
    Amount(Money),
    /// Not a number.
    NaN,
}

impl Price {
    /// Build a price from cents.
    pub fn cents(amount_cents: i64) -> Self {
        Price::Amount(Money::new(amount_cents))
    }

    /// Parse a raw attribute value. Missing or malformed input gives `NaN`.
    ///
    /// ```
    /// use vitrine_commerce::money::Price;
    /// assert_eq!(Price::parse(Some("499.99")), Price::cents(49999));
    /// assert_eq!(Price::parse(Some("abc")), Price::NaN);
    /// assert_eq!(Price::parse(None), Price::NaN);
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(parse_decimal_prefix)
            .and_then(Money::from_decimal)
            .map_or(Price::NaN, Price::Amount)
    }

    /// The amount, if this is a number.
    pub fn amount(&self) -> Option<Money> {
        match self {
            Price::Amount(m) => Some(*m),
            Price::NaN => None,
        }
    }

    /// Check if this price failed to parse.
    pub fn is_nan(&self) -> bool {
        matches!(self, Price::NaN)
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Price {
        self.amount()
            .and_then(|m| m.try_multiply(i64::from(quantity)))
            .map_or(Price::NaN, Price::Amount)
    }

    /// Add another price.
    pub fn plus(&self, other: &Price) -> Price {
        match (self, other) {
            (Price::Amount(a), Price::Amount(b)) => a.try_add(b).map_or(Price::NaN, Price::Amount),
            _ => Price::NaN,
        }
    }

    /// Sum an iterator of prices, starting from zero.
    pub fn sum(iter: impl Iterator<Item = Price>) -> Price {
        iter.fold(Price::Amount(Money::zero()), |acc, p| acc.plus(&p))
    }

    /// Format for display in the French locale.
    pub fn display(&self) -> String {
        match self {
            Price::Amount(m) => m.display(),
            Price::NaN => format!("NaN{}{}", SIGN_SEPARATOR, CURRENCY_SYMBOL),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(Money::zero())
    }
}

impl From<Money> for Price {
    fn from(m: Money) -> Self {
        Price::Amount(m)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Parse the longest leading decimal literal of `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `" 12.5€"`
/// reads as `12.5`. Returns `None` when no digits lead the input.
pub fn parse_decimal_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99), Some(Money::new(4999)));
        assert_eq!(Money::from_decimal(19.999), Some(Money::new(2000)));
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
    }

    #[test]
    fn test_money_display_french_locale() {
        assert_eq!(Money::new(4999).display(), "49,99\u{a0}\u{20ac}");
        assert_eq!(Money::new(0).display(), "0,00\u{a0}\u{20ac}");
        assert_eq!(Money::new(123_456).display(), "1\u{202f}234,56\u{a0}\u{20ac}");
        assert_eq!(
            Money::new(123_456_789).display(),
            "1\u{202f}234\u{202f}567,89\u{a0}\u{20ac}"
        );
        assert_eq!(Money::new(-500).display(), "-5,00\u{a0}\u{20ac}");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::new(1000);
        assert_eq!(a.try_add(&Money::new(500)), Some(Money::new(1500)));
        assert_eq!(a.try_multiply(3), Some(Money::new(3000)));
        assert_eq!(Money::new(i64::MAX).try_add(&Money::new(1)), None);
    }

    #[test]
    fn test_price_parse() {
        assert_eq!(Price::parse(Some("59.90")), Price::cents(5990));
        assert_eq!(Price::parse(Some("  12abc")), Price::cents(1200));
        assert_eq!(Price::parse(Some("")), Price::NaN);
        assert_eq!(Price::parse(Some("Infinity")), Price::NaN);
        assert_eq!(Price::parse(None), Price::NaN);
    }

    #[test]
    fn test_nan_propagates() {
        let total = Price::sum([Price::cents(1000), Price::NaN, Price::cents(1)].into_iter());
        assert!(total.is_nan());
        assert!(Price::NaN.times(2).is_nan());
        assert_eq!(Price::NaN.display(), "NaN\u{a0}\u{20ac}");
    }

    #[test]
    fn test_price_ordering_puts_nan_last() {
        let mut prices = vec![Price::NaN, Price::cents(300), Price::cents(100)];
        prices.sort();
        assert_eq!(prices, vec![Price::cents(100), Price::cents(300), Price::NaN]);
    }

    #[test]
    fn test_decimal_prefix() {
        assert_eq!(parse_decimal_prefix("500"), Some(500.0));
        assert_eq!(parse_decimal_prefix("-2.5e2x"), Some(-250.0));
        assert_eq!(parse_decimal_prefix(".5"), Some(0.5));
        assert_eq!(parse_decimal_prefix("5."), Some(5.0));
        assert_eq!(parse_decimal_prefix("1e"), Some(1.0));
        assert_eq!(parse_decimal_prefix("."), None);
        assert_eq!(parse_decimal_prefix("eur 5"), None);
        assert_eq!(parse_decimal_prefix("-Infinity"), Some(f64::NEG_INFINITY));
    }
}
