use crate::error::LedgerError;
use crate::storage_types::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, DataKey};
use soroban_sdk::{Address, Env};

pub fn read_balance(e: &Env, addr: Address) -> u128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = e.storage().persistent().get::<DataKey, u128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(e: &Env, addr: Address, amount: u128) {
    let key = DataKey::Balance(addr);
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(e: &Env, addr: Address, amount: u128) -> Result<(), LedgerError> {
    let balance = read_balance(e, addr.clone());
    let updated = balance
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    write_balance(e, addr, updated);
    Ok(())
}

pub fn spend_balance(e: &Env, addr: Address, amount: u128) -> Result<(), LedgerError> {
    let balance = read_balance(e, addr.clone());
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
    Ok(())
}

pub fn read_total_supply(e: &Env) -> u128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(e: &Env, amount: u128) {
    e.storage().instance().set(&DataKey::TotalSupply, &amount);
}
