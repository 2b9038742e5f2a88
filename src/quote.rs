use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{QuoteError, Result};
use crate::types::Lender;

/// lender-independent half of a quote request
///
/// the ui owns the input lifecycle; a fresh value is passed in on every
/// change and the engine holds no state between calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub vehicle_price: Money,
    pub deposit: Money,
    pub term_months: u32,
    /// optional residual value due with the final installment
    pub balloon: Option<Money>,
}

impl LoanTerms {
    pub fn new(vehicle_price: Money, deposit: Money, term_months: u32) -> Self {
        Self {
            vehicle_price,
            deposit,
            term_months,
            balloon: None,
        }
    }

    pub fn with_balloon(mut self, balloon: Money) -> Self {
        self.balloon = Some(balloon);
        self
    }

    /// amount financed
    pub fn principal(&self) -> Money {
        self.vehicle_price - self.deposit
    }

    pub fn validate(&self) -> Result<()> {
        if self.vehicle_price.is_negative() {
            return Err(QuoteError::NegativeVehiclePrice {
                price: self.vehicle_price,
            });
        }

        if self.deposit.is_negative() {
            return Err(QuoteError::NegativeDeposit {
                deposit: self.deposit,
            });
        }

        if self.deposit > self.vehicle_price {
            return Err(QuoteError::DepositExceedsPrice {
                price: self.vehicle_price,
                deposit: self.deposit,
            });
        }

        if self.term_months == 0 {
            return Err(QuoteError::ZeroTerm);
        }

        if let Some(balloon) = self.balloon {
            if balloon.is_negative() {
                return Err(QuoteError::NegativeBalloon { balloon });
            }
            if balloon.is_positive() && balloon >= self.principal() {
                return Err(QuoteError::BalloonExceedsPrincipal {
                    balloon,
                    principal: self.principal(),
                });
            }
        }

        Ok(())
    }
}

/// a complete quote request against one lender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteRequest {
    pub terms: LoanTerms,
    pub lender: Lender,
}

impl LoanQuoteRequest {
    pub fn new(terms: LoanTerms, lender: Lender) -> Self {
        Self { terms, lender }
    }
}

/// summary figures for one offer, derived on every call and never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteResult {
    pub principal: Money,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub balloon: Money,
}

impl LoanQuoteResult {
    fn zero() -> Self {
        Self {
            principal: Money::ZERO,
            monthly_payment: Money::ZERO,
            total_payment: Money::ZERO,
            total_interest: Money::ZERO,
            balloon: Money::ZERO,
        }
    }
}

/// compute summary figures for a single lender offer
pub fn compute_quote(request: &LoanQuoteRequest) -> Result<LoanQuoteResult> {
    compute_quote_at_rate(&request.terms, request.lender.annual_rate)
}

/// compute summary figures at an explicit annual rate
///
/// a zero rate is accepted (promotional finance); a deposit equal to the
/// price is a valid request and quotes all-zero, nothing is financed
pub fn compute_quote_at_rate(terms: &LoanTerms, annual_rate: Rate) -> Result<LoanQuoteResult> {
    terms.validate()?;

    if annual_rate.is_negative() {
        return Err(QuoteError::NegativeRate { rate: annual_rate });
    }

    let principal = terms.principal();
    if principal.is_zero() {
        return Ok(LoanQuoteResult::zero());
    }

    let balloon = terms.balloon.unwrap_or(Money::ZERO);
    let monthly_payment = installment_amount(principal, annual_rate, terms.term_months, balloon);
    let total_payment = monthly_payment * Decimal::from(terms.term_months) + balloon;
    let total_interest = total_payment - principal;

    Ok(LoanQuoteResult {
        principal,
        monthly_payment,
        total_payment,
        total_interest,
        balloon,
    })
}

/// fixed installment for an equal-payment loan, balloon settled alongside
/// the final installment
fn installment_amount(principal: Money, annual_rate: Rate, term_months: u32, balloon: Money) -> Money {
    let monthly_rate = annual_rate.monthly_rate().as_decimal();

    if monthly_rate.is_zero() {
        return (principal - balloon) / Decimal::from(term_months);
    }

    // EMI = (P * (1 + r)^n - B) * r / ((1 + r)^n - 1)
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..term_months {
        compound *= base;
    }

    let numerator = (principal.as_decimal() * compound - balloon.as_decimal()) * monthly_rate;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn quote(price: i64, deposit: i64, rate: Decimal, term: u32) -> LoanQuoteResult {
        compute_quote_at_rate(
            &LoanTerms::new(Money::from_major(price), Money::from_major(deposit), term),
            Rate::from_percentage(rate),
        )
        .unwrap()
    }

    #[test]
    fn test_reference_quote() {
        // N$250,000 vehicle, N$50,000 down, 11.5% over 60 months
        let quote = quote(250_000, 50_000, dec!(11.5), 60);

        assert_eq!(quote.principal, Money::from_major(200_000));
        assert!(quote.monthly_payment > Money::from_major(4398));
        assert!(quote.monthly_payment < Money::from_major(4399));
        assert_eq!(quote.monthly_payment.format_nad(), "N$4,399");
        assert!(quote.total_interest > Money::from_major(63_900));
        assert!(quote.total_interest < Money::from_major(63_930));
    }

    #[test]
    fn test_zero_interest() {
        let quote = quote(120_000, 0, dec!(0), 48);

        assert_eq!(quote.monthly_payment, Money::from_major(2_500));
        assert_eq!(quote.total_payment, Money::from_major(120_000));
        assert_eq!(quote.total_interest, Money::ZERO);
    }

    #[test]
    fn test_full_deposit_quotes_zero() {
        let quote = quote(250_000, 250_000, dec!(11.5), 60);

        assert_eq!(quote.principal, Money::ZERO);
        assert_eq!(quote.monthly_payment, Money::ZERO);
        assert_eq!(quote.total_payment, Money::ZERO);
        assert_eq!(quote.total_interest, Money::ZERO);
    }

    #[test]
    fn test_conservation_identity() {
        for (price, deposit, rate, term) in [
            (250_000, 50_000, dec!(11.5), 60),
            (180_000, 0, dec!(9.75), 72),
            (95_000, 30_000, dec!(14.25), 36),
            (500_000, 125_000, dec!(0), 84),
        ] {
            let quote = quote(price, deposit, rate, term);
            let rebuilt_total = quote.monthly_payment * Decimal::from(term);
            assert_eq!(quote.total_payment, rebuilt_total);
            assert_eq!(quote.total_interest, quote.total_payment - quote.principal);
        }
    }

    #[test]
    fn test_monthly_payment_increases_with_rate() {
        let mut previous = Money::ZERO;
        for rate in [dec!(5), dec!(8.5), dec!(11.5), dec!(15), dec!(21.25)] {
            let quote = quote(250_000, 50_000, rate, 60);
            assert!(quote.monthly_payment > previous);
            previous = quote.monthly_payment;
        }
    }

    #[test]
    fn test_monthly_payment_decreases_with_term() {
        let mut previous = Money::from_major(i64::MAX / 2);
        for term in crate::types::TERM_OPTIONS_MONTHS {
            let quote = quote(250_000, 50_000, dec!(11.5), term);
            assert!(quote.monthly_payment < previous);
            previous = quote.monthly_payment;
        }
    }

    #[test]
    fn test_total_interest_grows_with_term() {
        let short = quote(250_000, 50_000, dec!(11.5), 36);
        let long = quote(250_000, 50_000, dec!(11.5), 72);
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn test_balloon_lowers_installment() {
        let terms = LoanTerms::new(Money::from_major(250_000), Money::from_major(50_000), 60);
        let rate = Rate::from_percentage(dec!(11.5));

        let flat = compute_quote_at_rate(&terms, rate).unwrap();
        let with_balloon = compute_quote_at_rate(
            &terms.clone().with_balloon(Money::from_major(60_000)),
            rate,
        )
        .unwrap();

        assert!(with_balloon.monthly_payment < flat.monthly_payment);
        // deferring principal costs more interest overall
        assert!(with_balloon.total_interest > flat.total_interest);
        assert_eq!(
            with_balloon.total_payment,
            with_balloon.monthly_payment * Decimal::from(60u32) + Money::from_major(60_000),
        );
    }

    #[test]
    fn test_zero_rate_balloon_conserves_principal() {
        let terms = LoanTerms::new(Money::from_major(120_000), Money::ZERO, 48)
            .with_balloon(Money::from_major(24_000));
        let quote = compute_quote_at_rate(&terms, Rate::ZERO).unwrap();

        assert_eq!(quote.monthly_payment, Money::from_major(2_000));
        assert_eq!(quote.total_payment, Money::from_major(120_000));
        assert_eq!(quote.total_interest, Money::ZERO);
    }

    #[test]
    fn test_validation_rejects_degenerate_input() {
        let rate = Rate::from_percentage(dec!(11.5));

        let negative_price = LoanTerms::new(Money::from_major(-1), Money::ZERO, 60);
        assert!(matches!(
            compute_quote_at_rate(&negative_price, rate),
            Err(QuoteError::NegativeVehiclePrice { .. })
        ));

        let negative_deposit = LoanTerms::new(Money::from_major(100_000), Money::from_major(-500), 60);
        assert!(matches!(
            compute_quote_at_rate(&negative_deposit, rate),
            Err(QuoteError::NegativeDeposit { .. })
        ));

        let oversized_deposit = LoanTerms::new(Money::from_major(100_000), Money::from_major(100_001), 60);
        assert!(matches!(
            compute_quote_at_rate(&oversized_deposit, rate),
            Err(QuoteError::DepositExceedsPrice { .. })
        ));

        let no_term = LoanTerms::new(Money::from_major(100_000), Money::ZERO, 0);
        assert!(matches!(
            compute_quote_at_rate(&no_term, rate),
            Err(QuoteError::ZeroTerm)
        ));

        let negative_rate = LoanTerms::new(Money::from_major(100_000), Money::ZERO, 60);
        assert!(matches!(
            compute_quote_at_rate(&negative_rate, Rate::from_percentage(dec!(-1))),
            Err(QuoteError::NegativeRate { .. })
        ));

        let balloon_too_big = LoanTerms::new(Money::from_major(100_000), Money::from_major(50_000), 60)
            .with_balloon(Money::from_major(50_000));
        assert!(matches!(
            compute_quote_at_rate(&balloon_too_big, rate),
            Err(QuoteError::BalloonExceedsPrincipal { .. })
        ));
    }
}
