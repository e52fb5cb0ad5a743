use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env, contracttype};

/// Written once at construction and never changed afterwards. The proceeds
/// are not part of it: they are whatever the settlement asset reports as
/// this contract's balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub owner: Address,
    pub cynthia_token: Address,
    pub settlement_asset: Address,
}

pub fn read_config(e: &Env) -> SaleConfig {
    e.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn write_config(e: &Env, config: &SaleConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}
