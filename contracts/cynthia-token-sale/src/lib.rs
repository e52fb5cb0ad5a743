#![no_std]

mod config;
mod contract;
mod error;
mod event;
mod ledger;
mod rate;
mod storage_types;


pub use crate::config::SaleConfig;
pub use crate::contract::{CynthiaTokenSale, CynthiaTokenSaleClient};
pub use crate::error::SaleError;
pub use crate::rate::tokens_for_payment;
