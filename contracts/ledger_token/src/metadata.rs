use soroban_sdk::{Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{errors::LedgerError, storage};

/// Highest decimals value accepted at construction.
pub const MAX_DECIMALS: u32 = 18;

pub fn write_metadata(
    env: &Env,
    decimal: u32,
    name: String,
    symbol: String,
) -> Result<(), LedgerError> {
    if decimal > MAX_DECIMALS {
        return Err(LedgerError::InvalidDecimals);
    }
    TokenUtils::new(env)
        .metadata()
        .set_metadata(&TokenMetadata { decimal, name, symbol });
    Ok(())
}

/// Metadata is written in the same call that stores the deployer, so the
/// deployer check is enough to know `get_metadata` will find an entry.
pub fn read_metadata(env: &Env) -> Result<TokenMetadata, LedgerError> {
    if !storage::has_deployer(env) {
        return Err(LedgerError::NotInitialized);
    }
    Ok(TokenUtils::new(env).metadata().get_metadata())
}
