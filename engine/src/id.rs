//! # Lock Identifiers
//!
//! A [`LockId`] is the BLAKE3 hash of a lock's defining parameters under a
//! fixed derive-key context: sender, receiver, asset, hashlock, timelock.
//! The same creation call always produces the same id, so an id can be
//! recomputed by anyone who knows the terms. It is collision-resistant
//! against accidental reuse but it is *not* a commitment; hiding the
//! secret is the hashlock's job, not the id's.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use hashlock_ledger::AccountId;

use crate::record::AssetSpec;

/// Derive-key context for lock IDs. Part of the persisted format; must
/// never change.
const LOCK_ID_CONTEXT: &str = "hashlock-engine lock id v1";

/// A unique identifier for one escrow lock.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LockId([u8; 32]);

impl LockId {
    /// Creates a `LockId` from a raw 32-byte hash.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the hex-encoded identifier.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a hex-encoded identifier.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(arr))
    }

    /// Derives the identifier for a lock from its defining parameters.
    ///
    /// The hash input is, with `0x00` separators between fields:
    ///
    /// ```text
    /// sender || receiver || asset discriminant || contract id (if any)
    ///        || amount-or-token-id (LE) || hashlock || timelock (LE)
    /// ```
    ///
    /// under the fixed derive-key context. Integers are encoded
    /// little-endian at fixed width, so no two distinct parameter sets
    /// can serialize to the same byte stream.
    pub fn derive(
        sender: &AccountId,
        receiver: &AccountId,
        hashlock: &[u8; 32],
        timelock: u64,
        asset: &AssetSpec,
    ) -> Self {
        let mut hasher = blake3::Hasher::new_derive_key(LOCK_ID_CONTEXT);
        hasher.update(sender.as_str().as_bytes());
        hasher.update(&[0x00]);
        hasher.update(receiver.as_str().as_bytes());
        hasher.update(&[0x00]);
        hasher.update(&[asset.discriminant()]);
        if let Some(contract) = asset.contract() {
            hasher.update(contract.as_bytes());
        }
        hasher.update(&asset.amount_or_token_id().to_le_bytes());
        hasher.update(&[0x00]);
        hasher.update(hashlock);
        hasher.update(&[0x00]);
        hasher.update(&timelock.to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Debug for LockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LockId({}...)", &self.to_hex()[..12])
    }
}

impl fmt::Display for LockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for LockId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Hex-string serde, matching ContractId, so ids read naturally in JSON
// and work as map keys.
impl Serialize for LockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for LockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
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

    fn asset() -> AssetSpec {
        AssetSpec::Native { amount: 1_000 }
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = LockId::derive(&alice(), &bob(), &[7; 32], 500, &asset());
        let b = LockId::derive(&alice(), &bob(), &[7; 32], 500, &asset());
        assert_eq!(a, b);
    }

    #[test]
    fn every_parameter_changes_the_id() {
        let base = LockId::derive(&alice(), &bob(), &[7; 32], 500, &asset());
        assert_ne!(base, LockId::derive(&bob(), &bob(), &[7; 32], 500, &asset()));
        assert_ne!(base, LockId::derive(&alice(), &alice(), &[7; 32], 500, &asset()));
        assert_ne!(base, LockId::derive(&alice(), &bob(), &[8; 32], 500, &asset()));
        assert_ne!(base, LockId::derive(&alice(), &bob(), &[7; 32], 501, &asset()));
        assert_ne!(
            base,
            LockId::derive(&alice(), &bob(), &[7; 32], 500, &AssetSpec::Native { amount: 1_001 })
        );
    }

    #[test]
    fn asset_kind_changes_the_id_even_with_equal_numbers() {
        let contract = hashlock_ledger::ContractId::derive("T", "T", "hashlock:alice");
        let fungible = AssetSpec::Fungible { contract, amount: 7 };
        let nft = AssetSpec::NonFungible { contract, token_id: 7 };
        let a = LockId::derive(&alice(), &bob(), &[7; 32], 500, &fungible);
        let b = LockId::derive(&alice(), &bob(), &[7; 32], 500, &nft);
        assert_ne!(a, b);
    }

    #[test]
    fn hex_and_serde_roundtrip() {
        let id = LockId::derive(&alice(), &bob(), &[7; 32], 500, &asset());
        assert_eq!(LockId::from_hex(&id.to_hex()).unwrap(), id);
        let json = serde_json::to_string(&id).unwrap();
        let recovered: LockId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, recovered);
    }
}
