//! # Fungible-Token Contracts
//!
//! A [`TokenLedger`] is one deployed fungible-token contract: per-account
//! balances plus the owner→spender allowance table that makes delegated
//! pulls possible. The escrow engine never debits a token holder directly;
//! the holder first authorizes the escrow vault for an amount, and the
//! engine then moves exactly that amount with [`TokenLedger::transfer_from`].
//!
//! Allowances are *set*, not accumulated: approving 100 twice authorizes
//! 100, not 200. Every delegated transfer consumes the amount it moves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::LedgerError;

/// One deployed fungible-token contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenLedger {
    /// Human-readable token name.
    pub name: String,

    /// Ticker symbol.
    pub symbol: String,

    /// Display decimal places. The ledger never divides; this is purely
    /// for UI rendering.
    pub decimals: u8,

    /// Total supply in smallest units, fixed at deployment.
    pub total_supply: u64,

    /// The account the initial supply was credited to.
    pub issuer: AccountId,

    balances: HashMap<AccountId, u64>,

    /// owner → (spender → authorized amount).
    allowances: HashMap<AccountId, HashMap<AccountId, u64>>,
}

impl TokenLedger {
    /// Deploys a token contract, crediting the full initial supply to the
    /// issuer.
    pub fn new(
        name: &str,
        symbol: &str,
        decimals: u8,
        issuer: AccountId,
        initial_supply: u64,
    ) -> Self {
        let mut balances = HashMap::new();
        balances.insert(issuer.clone(), initial_supply);
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            total_supply: initial_supply,
            issuer,
            balances,
            allowances: HashMap::new(),
        }
    }

    /// Returns the balance of an account; accounts never seen hold zero.
    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Sets the amount `spender` may move out of `owner`'s balance.
    ///
    /// Overwrites any previous allowance for the pair; approving zero
    /// revokes it.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: u64) {
        if amount == 0 {
            if let Some(per_owner) = self.allowances.get_mut(owner) {
                per_owner.remove(spender);
            }
            return;
        }
        self.allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), amount);
    }

    /// Returns the remaining amount `spender` may move out of `owner`'s
    /// balance.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> u64 {
        self.allowances
            .get(owner)
            .and_then(|per_owner| per_owner.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Moves `amount` from one account to another, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ZeroAmount`], [`LedgerError::InsufficientBalance`],
    /// or [`LedgerError::Overflow`]. Nothing moves on error.
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

    /// Delegated transfer: `spender` moves `amount` from `owner` to `to`,
    /// consuming that much of its allowance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`] if the spender is not
    /// authorized for at least `amount`, plus every error [`Self::transfer`]
    /// can return. The allowance is only consumed if the transfer succeeds.
    pub fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }

        let allowance = self.allowance(owner, spender);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner: owner.clone(),
                spender: spender.clone(),
                allowance,
                requested: amount,
            });
        }

        self.transfer(owner, to, amount)?;
        self.approve(owner, spender, allowance - amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::new("hashlock:alice")
    }

    fn bob() -> AccountId {
        AccountId::new("hashlock:bob")
    }

    fn vault() -> AccountId {
        AccountId::escrow_vault()
    }

    fn token() -> TokenLedger {
        TokenLedger::new("Test Token", "TST", 8, alice(), 1_000_000)
    }

    #[test]
    fn deploy_credits_issuer_with_supply() {
        let t = token();
        assert_eq!(t.total_supply, 1_000_000);
        assert_eq!(t.balance_of(&alice()), 1_000_000);
        assert_eq!(t.balance_of(&bob()), 0);
    }

    #[test]
    fn transfer_moves_balance() {
        let mut t = token();
        t.transfer(&alice(), &bob(), 250).unwrap();
        assert_eq!(t.balance_of(&alice()), 999_750);
        assert_eq!(t.balance_of(&bob()), 250);
    }

    #[test]
    fn approve_sets_rather_than_accumulates() {
        let mut t = token();
        t.approve(&alice(), &vault(), 100);
        t.approve(&alice(), &vault(), 100);
        assert_eq!(t.allowance(&alice(), &vault()), 100);
    }

    #[test]
    fn approve_zero_revokes() {
        let mut t = token();
        t.approve(&alice(), &vault(), 100);
        t.approve(&alice(), &vault(), 0);
        assert_eq!(t.allowance(&alice(), &vault()), 0);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut t = token();
        t.approve(&alice(), &vault(), 300);
        t.transfer_from(&vault(), &alice(), &vault(), 200).unwrap();
        assert_eq!(t.balance_of(&vault()), 200);
        assert_eq!(t.allowance(&alice(), &vault()), 100);
    }

    #[test]
    fn transfer_from_without_allowance_rejected() {
        let mut t = token();
        let err = t
            .transfer_from(&vault(), &alice(), &vault(), 100)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { .. }));
        assert_eq!(t.balance_of(&alice()), 1_000_000);
    }

    #[test]
    fn failed_transfer_from_preserves_allowance() {
        let mut t = token();
        t.transfer(&alice(), &bob(), 1_000_000).unwrap();
        // Alice authorized the vault but no longer holds the funds.
        t.approve(&alice(), &vault(), 500);
        let err = t.transfer_from(&vault(), &alice(), &vault(), 500).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(t.allowance(&alice(), &vault()), 500);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut t = token();
        t.approve(&alice(), &vault(), 42);
        let json = serde_json::to_string(&t).unwrap();
        let recovered: TokenLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.balance_of(&alice()), 1_000_000);
        assert_eq!(recovered.allowance(&alice(), &vault()), 42);
    }
}
