pub mod decimal;
pub mod errors;
pub mod panel;
pub mod quote;
pub mod ranking;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{QuoteError, Result};
pub use panel::LenderPanel;
pub use quote::{
    compute_quote, compute_quote_at_rate, LoanQuoteRequest, LoanQuoteResult, LoanTerms,
};
pub use ranking::{best_offer, rank_lenders, LenderQuote};
pub use schedule::{RepaymentSchedule, ScheduledInstallment};
pub use types::{Lender, TERM_OPTIONS_MONTHS};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
