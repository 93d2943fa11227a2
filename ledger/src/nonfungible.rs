//! # Non-Fungible-Token Contracts
//!
//! An [`NftLedger`] is one deployed NFT contract: a map from token ID to
//! owner, plus one optional approved operator per token. Tokens are minted
//! sequentially starting at 0. A delegated transfer requires the spender
//! to be the owner or the token's approved operator, and always clears the
//! approval; an operator authorization is good for exactly one move.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::contract::ContractId;
use crate::error::LedgerError;

/// One deployed non-fungible-token contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NftLedger {
    /// Human-readable collection name.
    pub name: String,

    /// Ticker symbol.
    pub symbol: String,

    /// The contract's own identifier, kept here so errors can name it.
    pub contract: ContractId,

    owners: HashMap<u64, AccountId>,

    approvals: HashMap<u64, AccountId>,

    next_id: u64,
}

impl NftLedger {
    /// Deploys an empty NFT contract.
    pub fn new(name: &str, symbol: &str, contract: ContractId) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            contract,
            owners: HashMap::new(),
            approvals: HashMap::new(),
            next_id: 0,
        }
    }

    /// Mints the next token to `to` and returns its ID. The first minted
    /// token is ID 0.
    pub fn mint(&mut self, to: &AccountId) -> u64 {
        let token_id = self.next_id;
        self.next_id += 1;
        self.owners.insert(token_id, to.clone());
        token_id
    }

    /// Returns the owner of a token.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownToken`] if the token was never minted.
    pub fn owner_of(&self, token_id: u64) -> Result<&AccountId, LedgerError> {
        self.owners.get(&token_id).ok_or(LedgerError::UnknownToken {
            contract: self.contract,
            token_id,
        })
    }

    /// Authorizes `spender` to move one specific token. Only the current
    /// owner may approve.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownToken`] or [`LedgerError::NotOwner`].
    pub fn approve(
        &mut self,
        owner: &AccountId,
        token_id: u64,
        spender: &AccountId,
    ) -> Result<(), LedgerError> {
        let actual = self.owner_of(token_id)?;
        if actual != owner {
            return Err(LedgerError::NotOwner {
                token_id,
                owner: actual.clone(),
                claimed: owner.clone(),
            });
        }
        self.approvals.insert(token_id, spender.clone());
        Ok(())
    }

    /// Returns the approved operator for a token, if any.
    pub fn get_approved(&self, token_id: u64) -> Option<&AccountId> {
        self.approvals.get(&token_id)
    }

    /// Moves a token from `from` to `to` on behalf of `spender`.
    ///
    /// The spender must be the owner or the token's approved operator, and
    /// `from` must actually own the token. Any approval on the token is
    /// cleared by the transfer.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownToken`], [`LedgerError::NotOwner`],
    /// or [`LedgerError::NotApproved`]. Ownership is unchanged on error.
    pub fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token_id: u64,
    ) -> Result<(), LedgerError> {
        let owner = self.owner_of(token_id)?.clone();
        if &owner != from {
            return Err(LedgerError::NotOwner {
                token_id,
                owner,
                claimed: from.clone(),
            });
        }

        let approved = self.get_approved(token_id) == Some(spender);
        if spender != &owner && !approved {
            return Err(LedgerError::NotApproved {
                token_id,
                spender: spender.clone(),
            });
        }

        self.approvals.remove(&token_id);
        self.owners.insert(token_id, to.clone());
        Ok(())
    }

    /// Returns how many tokens on this contract `account` owns.
    pub fn balance_of(&self, account: &AccountId) -> usize {
        self.owners.values().filter(|owner| *owner == account).count()
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

    fn collection() -> NftLedger {
        let id = ContractId::derive("Test NFT", "TNFT", "hashlock:alice");
        NftLedger::new("Test NFT", "TNFT", id)
    }

    #[test]
    fn mint_assigns_sequential_ids_from_zero() {
        let mut nft = collection();
        assert_eq!(nft.mint(&alice()), 0);
        assert_eq!(nft.mint(&bob()), 1);
        assert_eq!(nft.owner_of(0).unwrap(), &alice());
        assert_eq!(nft.owner_of(1).unwrap(), &bob());
        assert_eq!(nft.balance_of(&alice()), 1);
    }

    #[test]
    fn owner_of_unminted_token_rejected() {
        let nft = collection();
        assert!(matches!(
            nft.owner_of(7),
            Err(LedgerError::UnknownToken { token_id: 7, .. })
        ));
    }

    #[test]
    fn only_owner_may_approve() {
        let mut nft = collection();
        nft.mint(&alice());
        let err = nft.approve(&bob(), 0, &vault()).unwrap_err();
        assert!(matches!(err, LedgerError::NotOwner { .. }));
        nft.approve(&alice(), 0, &vault()).unwrap();
        assert_eq!(nft.get_approved(0), Some(&vault()));
    }

    #[test]
    fn approved_spender_can_move_token() {
        let mut nft = collection();
        nft.mint(&alice());
        nft.approve(&alice(), 0, &vault()).unwrap();
        nft.transfer_from(&vault(), &alice(), &vault(), 0).unwrap();
        assert_eq!(nft.owner_of(0).unwrap(), &vault());
        // Approval was consumed by the move.
        assert_eq!(nft.get_approved(0), None);
    }

    #[test]
    fn unapproved_spender_rejected() {
        let mut nft = collection();
        nft.mint(&alice());
        let err = nft.transfer_from(&vault(), &alice(), &vault(), 0).unwrap_err();
        assert!(matches!(err, LedgerError::NotApproved { .. }));
        assert_eq!(nft.owner_of(0).unwrap(), &alice());
    }

    #[test]
    fn wrong_from_rejected_even_with_approval() {
        let mut nft = collection();
        nft.mint(&alice());
        nft.approve(&alice(), 0, &vault()).unwrap();
        let err = nft.transfer_from(&vault(), &bob(), &vault(), 0).unwrap_err();
        assert!(matches!(err, LedgerError::NotOwner { .. }));
    }

    #[test]
    fn owner_can_move_own_token_without_approval() {
        let mut nft = collection();
        nft.mint(&alice());
        nft.transfer_from(&alice(), &alice(), &bob(), 0).unwrap();
        assert_eq!(nft.owner_of(0).unwrap(), &bob());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut nft = collection();
        nft.mint(&alice());
        nft.approve(&alice(), 0, &vault()).unwrap();
        let json = serde_json::to_string(&nft).unwrap();
        let recovered: NftLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.owner_of(0).unwrap(), &alice());
        assert_eq!(recovered.get_approved(0), Some(&vault()));
    }
}
