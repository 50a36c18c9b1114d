use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Deployer,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

/// Extend instance storage TTL to keep metadata and supply alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// The deployer doubles as the initialization marker.
pub fn has_deployer(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Deployer)
}

pub fn get_deployer(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Deployer)
}

pub fn set_deployer(env: &Env, deployer: &Address) {
    env.storage().instance().set(&DataKey::Deployer, deployer);
}

pub fn get_total_supply(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::TotalSupply)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Reads a holder's balance; a missing entry is a zero balance.
pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

/// Writes a holder's balance. Zero balances are removed rather than stored.
pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(AllowanceKey { owner: owner.clone(), spender: spender.clone() });
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(allowance) => {
            extend_persistent(env, &key);
            allowance
        }
        None => 0,
    }
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceKey { owner: owner.clone(), spender: spender.clone() });
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}
