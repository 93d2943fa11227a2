//! # Account Identities
//!
//! An [`AccountId`] is an opaque address string. The ledger does not care
//! how the host derives addresses (public-key hash, bech32, whatever),
//! only that they compare equal when they refer to the same account.
//!
//! One address is special: the **escrow vault**, the account under which
//! the escrow engine holds custody of locked assets between creation and
//! resolution. It is a well-known system address with no keypair behind
//! it; nothing but the engine may move funds out of it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The well-known custody address for escrowed assets.
///
/// Not backed by a real keypair — funds held here move only through the
/// escrow engine's pull/push adapter.
const ESCROW_VAULT: &str = "hashlock:0000000000000000000000000000000000000000000000000000000000000000";

/// An opaque account identity on the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account identity from an address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the well-known escrow custody account.
    pub fn escrow_vault() -> Self {
        Self(ESCROW_VAULT.to_string())
    }

    /// Returns `true` if this is the escrow custody account.
    pub fn is_escrow_vault(&self) -> bool {
        self.0 == ESCROW_VAULT
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
