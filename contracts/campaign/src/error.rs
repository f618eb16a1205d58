use cosmwasm_std::{DivideByZeroError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("unauthorized")]
    Unauthorized {},

    #[error("operation not permitted while campaign is {state}")]
    InvalidPhase { state: String },

    #[error("cannot move campaign from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("participant {index} not registered")]
    NotRegistered { index: u64 },

    #[error("wallet {wallet} not registered")]
    WalletNotRegistered { wallet: String },

    #[error("wallet {wallet} already registered")]
    AlreadyRegistered { wallet: String },

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("amount {amount} below minimum {minimum}")]
    BelowMinimumAmount { amount: Uint128, minimum: Uint128 },

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Uint128,
        available: Uint128,
    },

    #[error("reward cap exceeded: requested {requested}, remaining {remaining}")]
    RewardCapExceeded {
        requested: Uint128,
        remaining: Uint128,
    },
}
