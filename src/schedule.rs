use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::quote::{compute_quote, LoanQuoteRequest};

/// one row of a repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInstallment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub opening_balance: Money,
    pub installment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub closing_balance: Money,
    pub cumulative_interest: Money,
}

/// month-by-month repayment breakdown for a quoted loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub lender_name: String,
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub first_due: NaiveDate,
    pub installments: Vec<ScheduledInstallment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl RepaymentSchedule {
    /// build the full schedule for a request
    ///
    /// the final row settles the remaining balance exactly: sub-cent drift
    /// from per-row rounding and the balloon, when present, are folded into
    /// the last installment
    pub fn generate(request: &LoanQuoteRequest, first_due: NaiveDate) -> Result<Self> {
        let quote = compute_quote(request)?;
        let annual_rate = request.lender.annual_rate;
        let monthly_rate = annual_rate.monthly_rate().as_decimal();
        let term_months = request.terms.term_months;

        let mut installments = Vec::new();

        if quote.principal.is_positive() {
            installments.reserve(term_months as usize);
            let mut balance = quote.principal;
            let mut cumulative_interest = Money::ZERO;

            for number in 1..=term_months {
                let due_date = add_months(first_due, number - 1);
                let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);

                let is_last = number == term_months;
                let (installment, principal_portion) = if is_last {
                    (balance + interest_portion, balance)
                } else {
                    (
                        quote.monthly_payment,
                        quote.monthly_payment - interest_portion,
                    )
                };

                cumulative_interest += interest_portion;
                let closing_balance = (balance - principal_portion).max(Money::ZERO);

                installments.push(ScheduledInstallment {
                    number,
                    due_date,
                    opening_balance: balance,
                    installment,
                    interest_portion,
                    principal_portion,
                    closing_balance,
                    cumulative_interest,
                });

                balance = closing_balance;
            }
        }

        let total_interest = installments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = installments
            .iter()
            .map(|p| p.installment)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            lender_name: request.lender.name.clone(),
            principal: quote.principal,
            annual_rate,
            term_months,
            first_due,
            installments,
            total_interest,
            total_payment,
        })
    }

    /// get row for a specific installment number
    pub fn installment(&self, number: u32) -> Option<&ScheduledInstallment> {
        if number == 0 {
            return None;
        }
        self.installments.get((number - 1) as usize)
    }

    /// remaining balance after an installment is paid
    pub fn balance_after(&self, number: u32) -> Money {
        self.installment(number)
            .map(|p| p.closing_balance)
            .unwrap_or(self.principal)
    }
}

/// advance by calendar months, clamping to month end
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}
