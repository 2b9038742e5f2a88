use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::quote::{compute_quote_at_rate, LoanQuoteResult, LoanTerms};
use crate::types::Lender;

/// one lender's offer paired with its computed quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderQuote {
    pub lender: Lender,
    pub quote: LoanQuoteResult,
}

/// rank eligible lenders for the same terms, cheapest installment first
///
/// lenders that do not write the requested term, or whose deposit floor is
/// not met, are excluded rather than zero-filled. ties resolve by lowest
/// total interest, then lender name, so repeated calls order identically.
/// no eligible lender yields an empty ranking, not an error.
pub fn rank_lenders(terms: &LoanTerms, lenders: &[Lender]) -> Result<Vec<LenderQuote>> {
    terms.validate()?;

    let mut ranked = Vec::with_capacity(lenders.len());
    for lender in lenders {
        if !lender.supports_term(terms.term_months) {
            continue;
        }
        if !lender.deposit_satisfied(terms.vehicle_price, terms.deposit) {
            continue;
        }

        let quote = compute_quote_at_rate(terms, lender.annual_rate)?;
        ranked.push(LenderQuote {
            lender: lender.clone(),
            quote,
        });
    }

    ranked.sort_by(|a, b| {
        a.quote
            .monthly_payment
            .cmp(&b.quote.monthly_payment)
            .then_with(|| a.quote.total_interest.cmp(&b.quote.total_interest))
            .then_with(|| a.lender.name.cmp(&b.lender.name))
    });

    Ok(ranked)
}

/// cheapest eligible offer, if any
pub fn best_offer(terms: &LoanTerms, lenders: &[Lender]) -> Result<Option<LenderQuote>> {
    Ok(rank_lenders(terms, lenders)?.into_iter().next())
}
