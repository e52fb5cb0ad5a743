#![no_std]

mod admin;
mod allowance;
mod balance;
mod config;
mod contract;
mod error;
mod event;
mod metadata;
mod storage_types;


pub use crate::config::{DECIMALS, NAME, SYMBOL, WHOLE_SUPPLY};
pub use crate::contract::{CynthiaToken, CynthiaTokenClient, null_account};
pub use crate::error::LedgerError;
