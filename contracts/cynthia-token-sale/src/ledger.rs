use soroban_sdk::{Address, Env, contractclient};

// The subset of the Cynthia token surface the sale calls into.
#[allow(unused)]
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn decimals(env: Env) -> u32;
    fn balance_of(env: Env, account: Address) -> u128;
    fn transfer(env: Env, from: Address, to: Address, amount: u128);
}
