/// quick start - quote a single vehicle loan
use vehicle_finance_rs::{compute_quote, Lender, LoanQuoteRequest, LoanTerms, Money, Rate};

use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // N$250,000 vehicle, N$50,000 deposit, 60 months at 11.5%
    let request = LoanQuoteRequest::new(
        LoanTerms::new(Money::from_major(250_000), Money::from_major(50_000), 60),
        Lender::new(
            "Bank Windhoek",
            Rate::from_percentage(dec!(11.5)),
            72,
            Rate::from_percentage(dec!(10)),
        ),
    );

    let quote = compute_quote(&request)?;

    println!("financed:       {}", quote.principal.format_nad());
    println!("monthly:        {}/month", quote.monthly_payment.format_nad());
    println!("total repaid:   {}", quote.total_payment.format_nad());
    println!("total interest: {}", quote.total_interest.format_nad());

    Ok(())
}
