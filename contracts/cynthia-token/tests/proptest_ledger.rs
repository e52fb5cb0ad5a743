use cynthia_token::{CynthiaToken, CynthiaTokenClient, LedgerError};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

const ONE: u128 = 1_000_000_000_000_000_000;
const SUPPLY: u128 = 100_000_000 * ONE;
const ACCOUNTS: usize = 4;

fn setup(env: &Env) -> (CynthiaTokenClient<'_>, [Address; ACCOUNTS]) {
    env.mock_all_auths();
    let accounts: [Address; ACCOUNTS] = core::array::from_fn(|_| Address::generate(env));
    let contract_id = env.register(CynthiaToken, (accounts[0].clone(),));
    (CynthiaTokenClient::new(env, &contract_id), accounts)
}

fn sum_of_balances(client: &CynthiaTokenClient<'_>, accounts: &[Address]) -> u128 {
    accounts.iter().map(|a| client.balance_of(a)).sum()
}

// ── Supply conservation ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: balances always add up to the fixed supply, whether a
    /// transfer succeeds or is rejected.
    #[test]
    fn prop_transfers_conserve_supply(
        moves in prop::collection::vec((0..ACCOUNTS, 0..ACCOUNTS, 0u128..=SUPPLY), 1..12),
    ) {
        let env = Env::default();
        let (client, accounts) = setup(&env);

        for (from, to, amount) in moves {
            let before_from = client.balance_of(&accounts[from]);
            let result = client.try_transfer(&accounts[from], &accounts[to], &amount);

            if before_from < amount {
                prop_assert_eq!(result, Err(Ok(LedgerError::InsufficientBalance)));
                prop_assert_eq!(client.balance_of(&accounts[from]), before_from);
            } else {
                prop_assert!(result.is_ok());
            }

            prop_assert_eq!(sum_of_balances(&client, &accounts), SUPPLY);
            prop_assert_eq!(client.total_supply(), SUPPLY);
        }
    }

    /// Property: an allowance only shrinks by what `transfer_from` actually
    /// moved, and never below zero.
    #[test]
    fn prop_allowance_tracks_spending(
        approved in 0u128..=1_000 * ONE,
        spends in prop::collection::vec(0u128..=400 * ONE, 1..8),
    ) {
        let env = Env::default();
        let (client, accounts) = setup(&env);
        let (owner, spender, receiver) = (&accounts[0], &accounts[1], &accounts[2]);

        client.approve(owner, spender, &approved);
        let mut remaining = approved;
        let mut received = 0u128;

        for amount in spends {
            let result = client.try_transfer_from(spender, owner, receiver, &amount);
            if amount > remaining {
                prop_assert_eq!(result, Err(Ok(LedgerError::InsufficientAllowance)));
            } else {
                prop_assert!(result.is_ok());
                remaining -= amount;
                received += amount;
            }
            prop_assert_eq!(client.allowance(owner, spender), remaining);
        }

        prop_assert_eq!(client.balance_of(receiver), received);
        prop_assert_eq!(sum_of_balances(&client, &accounts), SUPPLY);
    }
}
