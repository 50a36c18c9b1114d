#![cfg(test)]

// ---------------------------------------------------------------------------
// Ledger token test suite
//
// Structure
// ─────────
// initialize  — construction, metadata, double-init and pre-init guards
// transfer    — direct transfers, self/zero transfers, balance rejection
// allowance   — approve overwrite semantics and delegated transfers
// ledger      — white-box tests of the accounting core inside as_contract
// events      — topics and data of transfer / approve / mint
// invariants  — supply conservation across operation sequences
// ---------------------------------------------------------------------------


use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{LedgerToken, LedgerTokenClient};

/// One whole token at 18 decimals.
pub const ONE: i128 = 1_000_000_000_000_000_000;
pub const INITIAL_SUPPLY: i128 = 1_000 * ONE;

/// Registers and initializes a token with `INITIAL_SUPPLY` minted to a fresh
/// deployer. All auths are mocked.
pub fn setup<'a>() -> (Env, LedgerTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, LedgerToken);
    let client = LedgerTokenClient::new(&env, &contract_id);
    let deployer = Address::generate(&env);

    client.initialize(
        &deployer,
        &INITIAL_SUPPLY,
        &18,
        &String::from_str(&env, "Ledger Token"),
        &String::from_str(&env, "LDG"),
    );

    (env, client, deployer)
}

/// Registers a token without initializing it.
pub fn setup_uninitialized<'a>() -> (Env, LedgerTokenClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, LedgerToken);
    let client = LedgerTokenClient::new(&env, &contract_id);
    (env, client)
}
