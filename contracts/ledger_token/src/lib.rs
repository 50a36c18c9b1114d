#![no_std]

mod errors;
mod events;
mod ledger;
mod metadata;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the contract itself is no_std.

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use errors::LedgerError;
use events::LedgerEvents;

/// Fixed-supply fungible token.
///
/// The whole supply is minted to the deployer by `initialize`; afterwards
/// tokens only move through `transfer` and `transfer_from`, so the sum of all
/// balances always equals `total_supply`.
#[contract]
pub struct LedgerToken;

#[contractimpl]
impl LedgerToken {
    pub fn initialize(
        env: Env,
        deployer: Address,
        initial_supply: i128,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        if storage::has_deployer(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        deployer.require_auth();
        ledger::check_nonnegative_amount(initial_supply)?;

        metadata::write_metadata(&env, decimals, name, symbol)?;
        storage::set_deployer(&env, &deployer);
        storage::set_total_supply(&env, initial_supply);
        storage::write_balance(&env, &deployer, initial_supply);
        storage::extend_instance_ttl(&env);

        LedgerEvents::mint(&env, &deployer, initial_supply);
        log!(&env, "initialized: deployer, supply", deployer, initial_supply);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ledger::check_nonnegative_amount(amount)?;
        require_initialized(&env)?;

        ledger::move_balance(&env, &from, &to, amount)?;

        LedgerEvents::transfer(&env, &from, &to, amount);
        Ok(())
    }

    /// Sets the allowance of `spender` over `owner`'s balance to exactly
    /// `amount`. The previous allowance is overwritten, never added to.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        owner.require_auth();
        ledger::check_nonnegative_amount(amount)?;
        require_initialized(&env)?;

        storage::write_allowance(&env, &owner, &spender, amount);

        LedgerEvents::approve(&env, &owner, &spender, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        ledger::check_nonnegative_amount(amount)?;
        require_initialized(&env)?;

        ledger::spend_from(&env, &spender, &owner, &to, amount)?;

        LedgerEvents::transfer(&env, &owner, &to, amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> Result<i128, LedgerError> {
        storage::get_total_supply(&env).ok_or(LedgerError::NotInitialized)
    }

    pub fn deployer(env: Env) -> Option<Address> {
        storage::get_deployer(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, LedgerError> {
        Ok(metadata::read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, LedgerError> {
        Ok(metadata::read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, LedgerError> {
        Ok(metadata::read_metadata(&env)?.symbol)
    }
}

fn require_initialized(env: &Env) -> Result<(), LedgerError> {
    if !storage::has_deployer(env) {
        return Err(LedgerError::NotInitialized);
    }
    storage::extend_instance_ttl(env);
    Ok(())
}
