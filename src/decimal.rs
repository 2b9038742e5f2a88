use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money type with 6 decimal places precision, enough headroom for
/// installment arithmetic while settling to cents at the display boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(6))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(6)))
    }

    /// create from whole currency units (namibian dollars)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from cents
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::from(cents) / Decimal::from(100))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// round to whole currency units, half-up
    pub fn round_whole(&self) -> Self {
        Money(self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// round to cents, half-up
    pub fn round_cents(&self) -> Self {
        Money(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// display form used by listing pages: integer-rounded, grouped
    /// thousands, e.g. "N$4,512"
    pub fn format_nad(&self) -> String {
        let whole = self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = whole.abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if whole.is_sign_negative() && !whole.is_zero() {
            format!("-N${grouped}")
        } else {
            format!("N${grouped}")
        }
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(6))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(6);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(6))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(6);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(6))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(6))
    }
}

/// rate type for interest rates and deposit ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.115 for 11.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 11.5 for 11.5%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::from(100))
    }

    /// create from basis points (e.g., 1150 for 11.5%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10000))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// monthly periodic rate from nominal annual rate
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }

    /// effective annual rate for the given compounding frequency,
    /// (1 + r/n)^n - 1 by repeated multiplication
    pub fn effective_annual(&self, periods: u32) -> Rate {
        let n = Decimal::from(periods);
        let base = Decimal::ONE + self.0 / n;

        let mut compound = Decimal::ONE;
        for _ in 0..periods {
            compound *= base;
        }

        Rate(compound - Decimal::ONE)
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.1234567").unwrap();
        assert_eq!(m.to_string(), "100.123457"); // rounded to 6 places
    }

    #[test]
    fn test_cents_construction() {
        assert_eq!(Money::from_cents(451_250), Money::from_str_exact("4512.50").unwrap());
        assert_eq!(Money::from_cents(100), Money::from_major(1));
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(Money::from_str_exact("4512.50").unwrap().round_whole(), Money::from_major(4513));
        assert_eq!(Money::from_str_exact("4512.49").unwrap().round_whole(), Money::from_major(4512));
        assert_eq!(Money::from_str_exact("0.125").unwrap().round_cents(), Money::from_cents(13));
    }

    #[test]
    fn test_nad_formatting() {
        assert_eq!(Money::from_str_exact("4512.3").unwrap().format_nad(), "N$4,512");
        assert_eq!(Money::from_major(250_000).format_nad(), "N$250,000");
        assert_eq!(Money::from_major(1_263_400).format_nad(), "N$1,263,400");
        assert_eq!(Money::from_major(999).format_nad(), "N$999");
        assert_eq!(Money::ZERO.format_nad(), "N$0");
        assert_eq!(Money::from_major(-63_400).format_nad(), "-N$63,400");
    }

    #[test]
    fn test_rate_construction() {
        let rate = Rate::from_percentage(dec!(11.5));
        assert_eq!(rate.as_decimal(), dec!(0.115));
        assert_eq!(rate.as_percentage(), dec!(11.5));
        assert_eq!(Rate::from_bps(1150), rate);
    }

    #[test]
    fn test_monthly_rate() {
        let monthly = Rate::from_percentage(dec!(12)).monthly_rate();
        assert_eq!(monthly.as_decimal(), dec!(0.01));
    }

    #[test]
    fn test_effective_annual_rate() {
        let apr = Rate::from_percentage(dec!(18));

        let monthly_apy = apr.effective_annual(12);
        assert!(monthly_apy.as_percentage() > dec!(19.5));
        assert!(monthly_apy.as_percentage() < dec!(19.6));

        // zero rate compounds to zero
        assert_eq!(Rate::ZERO.effective_annual(12), Rate::ZERO);
    }
}
