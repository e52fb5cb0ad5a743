use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn read_owner(e: &Env) -> Address {
    // Written by the constructor, so present for every deployed instance.
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}
