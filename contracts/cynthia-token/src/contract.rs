use crate::admin::{read_owner, write_owner};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{
    read_balance, read_total_supply, receive_balance, spend_balance, write_total_supply,
};
use crate::config::{DECIMALS, NAME, SYMBOL, total_supply_units};
use crate::error::LedgerError;
use crate::event;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env, String, contract, contractimpl, log, panic_with_error};
use soroban_token_sdk::metadata::TokenMetadata;

/// Strkey of the all-zero ed25519 account. Nobody holds its key, so it stands
/// in for the null account: it can neither send, receive, own nor spend.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_account(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ACCOUNT))
}

fn is_null(e: &Env, addr: &Address) -> bool {
    *addr == null_account(e)
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Debits `from` and credits `to`. Callers have already checked authorization
/// and, for delegated transfers, consumed the allowance.
fn move_balance(e: &Env, from: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
    if is_null(e, &from) {
        return Err(LedgerError::InvalidSender);
    }
    if is_null(e, &to) {
        return Err(LedgerError::InvalidReceiver);
    }

    spend_balance(e, from.clone(), amount)?;
    receive_balance(e, to.clone(), amount)?;

    log!(e, "transfer", from, to, amount);
    event::transfer(e, from, to, amount);
    Ok(())
}

#[contract]
pub struct CynthiaToken;

#[contractimpl]
impl CynthiaToken {
    /// Mints the whole fixed supply to `owner`, who also becomes the ledger owner.
    pub fn __constructor(e: Env, owner: Address) {
        if is_null(&e, &owner) {
            panic_with_error!(&e, LedgerError::InvalidNewOwner);
        }
        let supply = match total_supply_units() {
            Ok(supply) => supply,
            Err(err) => panic_with_error!(&e, err),
        };

        write_metadata(
            &e,
            TokenMetadata {
                decimal: DECIMALS,
                name: String::from_str(&e, NAME),
                symbol: String::from_str(&e, SYMBOL),
            },
        );
        write_owner(&e, &owner);
        write_total_supply(&e, supply);
        if let Err(err) = receive_balance(&e, owner.clone(), supply) {
            panic_with_error!(&e, err);
        }

        event::transfer(&e, null_account(&e), owner, supply);
    }

    pub fn name(e: Env) -> String {
        bump_instance(&e);
        read_name(&e)
    }

    pub fn symbol(e: Env) -> String {
        bump_instance(&e);
        read_symbol(&e)
    }

    pub fn decimals(e: Env) -> u32 {
        bump_instance(&e);
        read_decimal(&e)
    }

    pub fn total_supply(e: Env) -> u128 {
        bump_instance(&e);
        read_total_supply(&e)
    }

    pub fn balance_of(e: Env, account: Address) -> u128 {
        bump_instance(&e);
        read_balance(&e, account)
    }

    pub fn allowance(e: Env, owner: Address, spender: Address) -> u128 {
        bump_instance(&e);
        read_allowance(&e, owner, spender)
    }

    pub fn owner(e: Env) -> Address {
        bump_instance(&e);
        read_owner(&e)
    }

    /// Moves `amount` from `from` to `to`. A zero amount is a valid transfer
    /// and still emits the event.
    pub fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        from.require_auth();
        bump_instance(&e);

        move_balance(&e, from, to, amount)
    }

    /// Sets, not adds to, the amount `spender` may move out of `owner`.
    pub fn approve(
        e: Env,
        owner: Address,
        spender: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        owner.require_auth();
        bump_instance(&e);

        if is_null(&e, &spender) {
            return Err(LedgerError::InvalidSpender);
        }

        write_allowance(&e, owner.clone(), spender.clone(), amount);

        log!(&e, "approve", owner, spender, amount);
        event::approval(&e, owner, spender, amount);
        Ok(())
    }

    /// Allowance is checked and consumed before any balance check, so an
    /// insufficient allowance is reported even when the balance is short too.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount)?;
        move_balance(&e, from, to, amount)
    }

    pub fn transfer_ownership(
        e: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        bump_instance(&e);

        let previous_owner = read_owner(&e);
        if caller != previous_owner {
            return Err(LedgerError::UnauthorizedCaller);
        }
        if is_null(&e, &new_owner) {
            return Err(LedgerError::InvalidNewOwner);
        }

        write_owner(&e, &new_owner);

        log!(&e, "ownership transferred", previous_owner, new_owner);
        event::ownership_transferred(&e, previous_owner, new_owner);
        Ok(())
    }
}
