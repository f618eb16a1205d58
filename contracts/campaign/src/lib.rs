pub mod access;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod state;
pub mod treasury;



pub use crate::error::ContractError;
