use thiserror::Error;

use crate::decimal::{Money, Rate};

/// rejected loan parameters, raised at the call boundary before any
/// arithmetic runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("negative vehicle price: {price}")]
    NegativeVehiclePrice {
        price: Money,
    },

    #[error("negative deposit: {deposit}")]
    NegativeDeposit {
        deposit: Money,
    },

    #[error("deposit exceeds vehicle price: price {price}, deposit {deposit}")]
    DepositExceedsPrice {
        price: Money,
        deposit: Money,
    },

    #[error("loan term must be at least one month")]
    ZeroTerm,

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("negative balloon: {balloon}")]
    NegativeBalloon {
        balloon: Money,
    },

    #[error("balloon must be below the financed amount: balloon {balloon}, principal {principal}")]
    BalloonExceedsPrincipal {
        balloon: Money,
        principal: Money,
    },

    #[error("invalid lender {name}: {message}")]
    InvalidLender {
        name: String,
        message: String,
    },

    #[error("duplicate lender name: {name}")]
    DuplicateLender {
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
