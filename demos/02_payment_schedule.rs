/// print the month-by-month repayment schedule for one offer
use vehicle_finance_rs::chrono::NaiveDate;
use vehicle_finance_rs::{LenderPanel, LoanQuoteRequest, LoanTerms, Money, RepaymentSchedule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let panel = LenderPanel::namibian_default();
    let lender = panel
        .get("Bank Windhoek")
        .ok_or("lender missing from panel")?
        .clone();

    // balloon finance: N$60,000 residual due with the final installment
    let terms = LoanTerms::new(Money::from_major(250_000), Money::from_major(50_000), 60)
        .with_balloon(Money::from_major(60_000));
    let request = LoanQuoteRequest::new(terms, lender);

    let first_due = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or("bad date")?;
    let schedule = RepaymentSchedule::generate(&request, first_due)?;

    println!(
        "{} for {} at {} over {} months",
        schedule.lender_name,
        schedule.principal.format_nad(),
        schedule.annual_rate,
        schedule.term_months,
    );

    for row in &schedule.installments {
        println!(
            "  #{:<3} {}  pay {:>10}  interest {:>9}  balance {:>11}",
            row.number,
            row.due_date,
            row.installment.format_nad(),
            row.interest_portion.format_nad(),
            row.closing_balance.format_nad(),
        );
    }

    println!("total repaid {}, of which interest {}", schedule.total_payment.format_nad(), schedule.total_interest.format_nad());

    Ok(())
}
