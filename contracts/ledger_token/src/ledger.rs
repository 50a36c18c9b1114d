//! Accounting core: balance moves and allowance consumption.
//!
//! Every helper here validates all of its preconditions before its first
//! storage write, so an `Err` never leaves a half-applied debit, credit or
//! allowance update behind, even outside the host's invocation rollback.

use soroban_sdk::{log, Address, Env};

use crate::{
    errors::LedgerError,
    storage::{read_allowance, read_balance, write_allowance, write_balance},
};

pub fn check_nonnegative_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount);
    }
    Ok(())
}

/// Debits `from` and credits `to` by `amount`.
///
/// A self-transfer only verifies the balance covers `amount`; the debit and
/// credit cancel so nothing is written.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        log!(env, "insufficient balance: who, balance, needed", from, from_balance, amount);
        return Err(LedgerError::InsufficientBalance);
    }

    if amount == 0 || from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    let from_balance = from_balance
        .checked_sub(amount)
        .ok_or(LedgerError::Overflow)?;

    write_balance(env, from, from_balance);
    write_balance(env, to, to_balance);
    Ok(())
}

/// Returns what the `(owner, spender)` allowance would become after spending
/// `amount`, without writing it.
pub fn remaining_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    let allowance = read_allowance(env, owner, spender);
    if allowance < amount {
        log!(
            env,
            "insufficient allowance: owner, spender, allowance, needed",
            owner,
            spender,
            allowance,
            amount
        );
        return Err(LedgerError::InsufficientAllowance);
    }
    allowance.checked_sub(amount).ok_or(LedgerError::Overflow)
}

/// Delegated transfer: `spender` moves `amount` out of `owner` into `to`.
///
/// The allowance is checked first, then the owner's balance; the allowance is
/// only decremented once the balance move has gone through.
pub fn spend_from(
    env: &Env,
    spender: &Address,
    owner: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    let remaining = remaining_allowance(env, owner, spender, amount)?;
    move_balance(env, owner, to, amount)?;
    if amount > 0 {
        write_allowance(env, owner, spender, remaining);
    }
    Ok(())
}
