use crate::config::{SaleConfig, read_config, write_config};
use crate::error::SaleError;
use crate::event;
use crate::ledger::LedgerClient;
use crate::rate::tokens_for_payment;
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{
    Address, Env, String, contract, contractimpl, log, panic_with_error, token,
};

/// Same null account the Cynthia token refuses as an owner.
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contract]
pub struct CynthiaTokenSale;

#[contractimpl]
impl CynthiaTokenSale {
    /// The sale starts without inventory; the token owner funds it with an
    /// ordinary ledger transfer to this contract's address.
    pub fn __constructor(
        e: Env,
        owner: Address,
        cynthia_token: Address,
        settlement_asset: Address,
    ) {
        if owner == Address::from_string(&String::from_str(&e, NULL_ACCOUNT)) {
            panic_with_error!(&e, SaleError::InvalidOwner);
        }
        write_config(
            &e,
            &SaleConfig {
                owner,
                cynthia_token,
                settlement_asset,
            },
        );
    }

    pub fn owner(e: Env) -> Address {
        bump_instance(&e);
        read_config(&e).owner
    }

    pub fn cynthia_token(e: Env) -> Address {
        bump_instance(&e);
        read_config(&e).cynthia_token
    }

    pub fn settlement_asset(e: Env) -> Address {
        bump_instance(&e);
        read_config(&e).settlement_asset
    }

    /// Sells tokens for `payment` units of the settlement asset and returns
    /// the amount of token units delivered to `buyer`.
    pub fn buy_tokens(e: Env, buyer: Address, payment: i128) -> Result<u128, SaleError> {
        buyer.require_auth();
        bump_instance(&e);

        if payment <= 0 {
            return Err(SaleError::InsufficientPayment);
        }

        let config = read_config(&e);
        let ledger = LedgerClient::new(&e, &config.cynthia_token);
        let asset = token::TokenClient::new(&e, &config.settlement_asset);
        let sale = e.current_contract_address();

        let token_amount = tokens_for_payment(payment, asset.decimals(), ledger.decimals())?;
        if ledger.balance_of(&sale) < token_amount {
            return Err(SaleError::InsufficientInventory);
        }

        asset.transfer(&buyer, &sale, &payment);
        ledger.transfer(&sale, &buyer, &token_amount);

        log!(&e, "tokens purchased", buyer, payment, token_amount);
        event::tokens_purchased(&e, buyer, token_amount);
        Ok(token_amount)
    }

    /// Sends the whole settlement-asset balance held by the sale to the owner
    /// and returns the amount sent. An empty balance is a successful no-op.
    pub fn withdraw_ether(e: Env, caller: Address) -> Result<i128, SaleError> {
        caller.require_auth();
        bump_instance(&e);

        let config = read_config(&e);
        if caller != config.owner {
            return Err(SaleError::UnauthorizedCaller);
        }

        let asset = token::TokenClient::new(&e, &config.settlement_asset);
        let sale = e.current_contract_address();
        let balance = asset.balance(&sale);
        if balance == 0 {
            return Ok(0);
        }

        // One transfer of the full balance: custody drops to zero in the same
        // step that pays the owner, leaving nothing for a nested call to take.
        asset.transfer(&sale, &config.owner, &balance);

        log!(&e, "ether withdrawn", config.owner, balance);
        event::ether_withdrawn(&e, config.owner, balance);
        Ok(balance)
    }

    pub fn get_contract_token_balance(e: Env) -> u128 {
        bump_instance(&e);
        let config = read_config(&e);
        LedgerClient::new(&e, &config.cynthia_token).balance_of(&e.current_contract_address())
    }
}
