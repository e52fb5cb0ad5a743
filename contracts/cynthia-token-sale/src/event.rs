use soroban_sdk::{Address, Env, Symbol};

pub fn tokens_purchased(e: &Env, buyer: Address, amount: u128) {
    let topics = (Symbol::new(e, "tokens_purchased"), buyer);
    e.events().publish(topics, amount);
}

pub fn ether_withdrawn(e: &Env, owner: Address, amount: i128) {
    let topics = (Symbol::new(e, "ether_withdrawn"), owner);
    e.events().publish(topics, amount);
}
