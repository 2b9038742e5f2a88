/// compare every eligible lender for the same loan terms
use vehicle_finance_rs::{rank_lenders, LenderPanel, LoanTerms, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let panel = LenderPanel::namibian_default();
    panel.validate()?;

    let terms = LoanTerms::new(Money::from_major(250_000), Money::from_major(50_000), 60);
    let ranked = rank_lenders(&terms, &panel.lenders)?;

    if ranked.is_empty() {
        println!("no offers available for these terms");
        return Ok(());
    }

    println!("offers for {} over {} months, cheapest first:", terms.principal().format_nad(), terms.term_months);
    for offer in &ranked {
        println!(
            "  {:<22} {:>6}  {}/month  (total interest {})",
            offer.lender.name,
            offer.lender.annual_rate.to_string(),
            offer.quote.monthly_payment.format_nad(),
            offer.quote.total_interest.format_nad(),
        );
    }

    Ok(())
}
