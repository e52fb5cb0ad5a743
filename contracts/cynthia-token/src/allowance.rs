use crate::error::LedgerError;
use crate::storage_types::{
    AllowanceDataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, DataKey,
};
use soroban_sdk::{Address, Env};

pub fn read_allowance(e: &Env, from: Address, spender: Address) -> u128 {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    if let Some(amount) = e.storage().persistent().get::<DataKey, u128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        amount
    } else {
        0
    }
}

/// Overwrites the allowance. A zero amount drops the entry.
pub fn write_allowance(e: &Env, from: Address, spender: Address, amount: u128) {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn spend_allowance(
    e: &Env,
    from: Address,
    spender: Address,
    amount: u128,
) -> Result<(), LedgerError> {
    let allowance = read_allowance(e, from.clone(), spender.clone());
    if allowance < amount {
        return Err(LedgerError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(e, from, spender, allowance - amount);
    }
    Ok(())
}
