/// load a lender panel from json configuration and rank against it
use vehicle_finance_rs::{best_offer, LenderPanel, LoanTerms, Money};

const PANEL_JSON: &str = r#"{
    "lenders": [
        {
            "name": "Trustco Finance",
            "annual_rate": "0.1295",
            "max_term_months": 60,
            "min_deposit": "0.1"
        },
        {
            "name": "Atlas Auto Credit",
            "annual_rate": "0.1175",
            "max_term_months": 72,
            "min_deposit": "0"
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let panel = LenderPanel::from_json(PANEL_JSON)?;
    panel.validate()?;

    let terms = LoanTerms::new(Money::from_major(180_000), Money::from_major(20_000), 72);

    match best_offer(&terms, &panel.lenders)? {
        Some(offer) => println!(
            "best offer: {} at {}, {}/month",
            offer.lender.name,
            offer.lender.annual_rate,
            offer.quote.monthly_payment.format_nad(),
        ),
        None => println!("no offers available"),
    }

    // round-trip the panel back out
    println!("{}", panel.to_json_pretty()?);

    Ok(())
}
