//! # The Aggregate Ledger
//!
//! A [`Ledger`] bundles the native balance book with every deployed token
//! and NFT contract, keyed by [`ContractId`]. It is the single mutable
//! resource an engine operation touches: callers hand the engine a
//! `&mut Ledger` for exactly the duration of one atomic operation, which
//! is how the serialized-execution model of the host is expressed in the
//! type system.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::contract::ContractId;
use crate::error::LedgerError;
use crate::fungible::TokenLedger;
use crate::native::NativeLedger;
use crate::nonfungible::NftLedger;

/// The complete asset state of the execution environment.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    native: NativeLedger,
    tokens: HashMap<ContractId, TokenLedger>,
    nfts: HashMap<ContractId, NftLedger>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the native balance book.
    pub fn native(&self) -> &NativeLedger {
        &self.native
    }

    /// Returns the native balance book for mutation.
    pub fn native_mut(&mut self) -> &mut NativeLedger {
        &mut self.native
    }

    /// Deploys a fungible-token contract and credits the initial supply to
    /// the issuer.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ContractExists`] if a contract with the same
    /// canonical properties (and therefore the same derived ID) is already
    /// deployed.
    pub fn deploy_token(
        &mut self,
        name: &str,
        symbol: &str,
        decimals: u8,
        issuer: &AccountId,
        initial_supply: u64,
    ) -> Result<ContractId, LedgerError> {
        let id = ContractId::derive(name, symbol, issuer.as_str());
        if self.tokens.contains_key(&id) || self.nfts.contains_key(&id) {
            return Err(LedgerError::ContractExists(id));
        }
        self.tokens.insert(
            id,
            TokenLedger::new(name, symbol, decimals, issuer.clone(), initial_supply),
        );
        Ok(id)
    }

    /// Deploys an empty NFT contract.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ContractExists`] on a duplicate deployment.
    pub fn deploy_nft(
        &mut self,
        name: &str,
        symbol: &str,
        issuer: &AccountId,
    ) -> Result<ContractId, LedgerError> {
        let id = ContractId::derive(name, symbol, issuer.as_str());
        if self.tokens.contains_key(&id) || self.nfts.contains_key(&id) {
            return Err(LedgerError::ContractExists(id));
        }
        self.nfts.insert(id, NftLedger::new(name, symbol, id));
        Ok(id)
    }

    /// Looks up a fungible-token contract.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownContract`] if nothing is deployed
    /// under `id`.
    pub fn token(&self, id: &ContractId) -> Result<&TokenLedger, LedgerError> {
        self.tokens.get(id).ok_or(LedgerError::UnknownContract(*id))
    }

    /// Looks up a fungible-token contract for mutation.
    pub fn token_mut(&mut self, id: &ContractId) -> Result<&mut TokenLedger, LedgerError> {
        self.tokens
            .get_mut(id)
            .ok_or(LedgerError::UnknownContract(*id))
    }

    /// Looks up an NFT contract.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownContract`] if nothing is deployed
    /// under `id`.
    pub fn nft(&self, id: &ContractId) -> Result<&NftLedger, LedgerError> {
        self.nfts.get(id).ok_or(LedgerError::UnknownContract(*id))
    }

    /// Looks up an NFT contract for mutation.
    pub fn nft_mut(&mut self, id: &ContractId) -> Result<&mut NftLedger, LedgerError> {
        self.nfts
            .get_mut(id)
            .ok_or(LedgerError::UnknownContract(*id))
    }
}
