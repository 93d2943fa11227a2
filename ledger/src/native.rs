//! # Native-Coin Balance Book
//!
//! The simplest sub-ledger: one `u64` balance per account, in smallest
//! units. Native value has no contract, no allowances, and no metadata.
//! A transfer either moves the coins or it doesn't.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::LedgerError;

/// Balance book for the ledger's native coin.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NativeLedger {
    balances: HashMap<AccountId, u64>,
}

impl NativeLedger {
    /// Creates an empty balance book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits freshly created coins to an account. Genesis/test fixture;
    /// a real host funds accounts through its own issuance rules.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the credit would exceed `u64::MAX`.
    pub fn mint(&mut self, to: &AccountId, amount: u64) -> Result<u64, LedgerError> {
        let balance = self.balances.entry(to.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow {
                account: to.clone(),
                current: *balance,
                credit: amount,
            })?;
        Ok(*balance)
    }

    /// Moves `amount` from one account to another, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ZeroAmount`] for zero transfers,
    /// [`LedgerError::InsufficientBalance`] if `from` holds less than
    /// `amount`, and [`LedgerError::Overflow`] if crediting `to` would
    /// overflow. Nothing moves on error.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.clone(),
                available,
                requested: amount,
            });
        }

        // Self-transfers pass the checks above and change nothing.
        if from == to {
            return Ok(());
        }

        let to_balance = self.balance_of(to);
        let credited = to_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow {
                account: to.clone(),
                current: to_balance,
                credit: amount,
            })?;

        self.balances.insert(from.clone(), available - amount);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }

    /// Returns the balance of an account; accounts never seen hold zero.
    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}
