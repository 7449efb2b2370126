//! Interfaces toward the bank module.
//!
//! The flows that drain module-account funds (shutdown and the one-time
//! upgrade migration) live outside this crate; these are the only two
//! capabilities they need. The genesis validator implements
//! [`BalanceReader`] over the genesis balance set.

use crate::error::Error;
use crate::types::address::AccountId;
use crate::types::coin::Coin;

/// Read-only access to an account's balances.
pub trait BalanceReader {
    fn all_balances(&self, address: &AccountId) -> Result<Vec<Coin>, Error>;
}

/// A directed transfer of coins between two accounts.
pub trait CoinSender {
    fn send_coins(&mut self, from: &AccountId, to: &AccountId, amount: &[Coin])
        -> Result<(), Error>;
}
