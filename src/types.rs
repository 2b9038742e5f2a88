use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};

/// loan terms offered by the term selector, in months
pub const TERM_OPTIONS_MONTHS: [u32; 7] = [12, 24, 36, 48, 60, 72, 84];

/// a lender's standing vehicle-finance offer
///
/// static reference data: a named rate-and-terms tuple used to compute
/// comparable quotes for the same request. no lifecycle, no mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lender {
    pub name: String,
    pub annual_rate: Rate,
    pub max_term_months: u32,
    /// minimum deposit as a fraction of the vehicle price
    pub min_deposit: Rate,
}

impl Lender {
    pub fn new(
        name: impl Into<String>,
        annual_rate: Rate,
        max_term_months: u32,
        min_deposit: Rate,
    ) -> Self {
        Self {
            name: name.into(),
            annual_rate,
            max_term_months,
            min_deposit,
        }
    }

    /// whether this lender writes loans at the requested term
    pub fn supports_term(&self, term_months: u32) -> bool {
        term_months <= self.max_term_months
    }

    /// whether the deposit meets this lender's floor
    ///
    /// a zero vehicle price satisfies any floor: nothing is financed
    pub fn deposit_satisfied(&self, vehicle_price: Money, deposit: Money) -> bool {
        if vehicle_price.is_zero() {
            return true;
        }
        deposit.as_decimal() / vehicle_price.as_decimal() >= self.min_deposit.as_decimal()
    }

    /// effective annual rate with monthly compounding
    pub fn effective_annual_rate(&self) -> Rate {
        self.annual_rate.effective_annual(12)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(QuoteError::InvalidLender {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }

        if self.annual_rate.is_negative() || self.annual_rate.is_zero() {
            return Err(QuoteError::InvalidLender {
                name: self.name.clone(),
                message: format!("annual rate must be positive, got {}", self.annual_rate),
            });
        }

        if self.max_term_months == 0 {
            return Err(QuoteError::InvalidLender {
                name: self.name.clone(),
                message: "maximum term must be at least one month".to_string(),
            });
        }

        if self.min_deposit.is_negative() || self.min_deposit > Rate::ONE {
            return Err(QuoteError::InvalidLender {
                name: self.name.clone(),
                message: format!("minimum deposit must be within [0%, 100%], got {}", self.min_deposit),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lender() -> Lender {
        Lender::new(
            "Bank Windhoek",
            Rate::from_percentage(dec!(11.25)),
            72,
            Rate::from_percentage(dec!(10)),
        )
    }

    #[test]
    fn test_term_support() {
        let lender = lender();
        assert!(lender.supports_term(60));
        assert!(lender.supports_term(72));
        assert!(!lender.supports_term(84));
    }

    #[test]
    fn test_deposit_floor() {
        let lender = lender();
        let price = Money::from_major(250_000);

        // exactly 10% qualifies
        assert!(lender.deposit_satisfied(price, Money::from_major(25_000)));
        assert!(lender.deposit_satisfied(price, Money::from_major(50_000)));
        assert!(!lender.deposit_satisfied(price, Money::from_major(24_999)));

        // zero price: nothing financed, floor is moot
        assert!(lender.deposit_satisfied(Money::ZERO, Money::ZERO));
    }

    #[test]
    fn test_lender_validation() {
        assert!(lender().validate().is_ok());

        let mut unnamed = lender();
        unnamed.name = "  ".to_string();
        assert!(unnamed.validate().is_err());

        let mut free_money = lender();
        free_money.annual_rate = Rate::ZERO;
        assert!(free_money.validate().is_err());

        let mut no_terms = lender();
        no_terms.max_term_months = 0;
        assert!(no_terms.validate().is_err());

        let mut absurd_deposit = lender();
        absurd_deposit.min_deposit = Rate::from_percentage(dec!(120));
        assert!(absurd_deposit.validate().is_err());
    }

    #[test]
    fn test_effective_annual_rate_exceeds_nominal() {
        let lender = lender();
        assert!(lender.effective_annual_rate() > lender.annual_rate);
    }
}
