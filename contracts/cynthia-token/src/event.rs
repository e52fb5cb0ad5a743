use soroban_sdk::{Address, Env, Symbol, symbol_short};

pub fn transfer(e: &Env, from: Address, to: Address, amount: u128) {
    let topics = (symbol_short!("transfer"), from, to);
    e.events().publish(topics, amount);
}

pub fn approval(e: &Env, owner: Address, spender: Address, amount: u128) {
    let topics = (symbol_short!("approval"), owner, spender);
    e.events().publish(topics, amount);
}

pub fn ownership_transferred(e: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (Symbol::new(e, "ownership_transferred"), previous_owner);
    e.events().publish(topics, new_owner);
}
