use soroban_sdk::{symbol_short, Address, Env};

pub struct LedgerEvents;

impl LedgerEvents {
    /// Emits a `transfer` event after a successful `transfer` or `transfer_from`.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    ///
    /// For delegated transfers `from` is the owner whose balance was debited,
    /// not the spender that signed the call.
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
    }

    /// Topics: `("approve", owner, spender)`
    /// Data:   `amount` (the new allowance, not a delta)
    pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("approve"), owner.clone(), spender.clone()), amount);
    }

    /// Published once, when the fixed supply is minted to the deployer.
    pub fn mint(env: &Env, to: &Address, amount: i128) {
        env.events().publish((symbol_short!("mint"), to.clone()), amount);
    }
}
