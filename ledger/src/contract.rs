//! # Contract Identifiers
//!
//! A [`ContractId`] names one deployed token or NFT contract on the
//! ledger. IDs are content-addressed: the BLAKE3 hash of the contract's
//! canonical properties (name, symbol, issuer) under a fixed derive-key
//! context. The same deployment parameters always produce the same ID,
//! which makes duplicate deployments trivially detectable and keeps the
//! ID independent of deployment order.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Derive-key context for contract IDs. Part of the persisted format;
/// must never change.
const CONTRACT_ID_CONTEXT: &str = "hashlock-ledger contract id v1";

/// A unique, content-addressed identifier for a deployed contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractId([u8; 32]);

impl ContractId {
    /// Creates a `ContractId` from a raw 32-byte hash.
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

    /// Derives a `ContractId` from the contract's canonical properties.
    ///
    /// The hash input is `name || 0x00 || symbol || 0x00 || issuer` under
    /// the fixed derive-key context. The separator bytes prevent ambiguity
    /// when one field's suffix matches another field's prefix.
    pub fn derive(name: &str, symbol: &str, issuer: &str) -> Self {
        let mut hasher = blake3::Hasher::new_derive_key(CONTRACT_ID_CONTEXT);
        hasher.update(name.as_bytes());
        hasher.update(&[0x00]);
        hasher.update(symbol.as_bytes());
        hasher.update(&[0x00]);
        hasher.update(issuer.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractId({}...)", &self.to_hex()[..12])
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for ContractId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Hex-string serde so that maps keyed by ContractId serialize as
// ordinary JSON objects.
impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = ContractId::derive("Test Token", "TST", "hashlock:issuer");
        let b = ContractId::derive("Test Token", "TST", "hashlock:issuer");
        assert_eq!(a, b);
    }

    #[test]
    fn every_field_changes_the_id() {
        let base = ContractId::derive("Token", "TKN", "hashlock:alice");
        assert_ne!(base, ContractId::derive("Other", "TKN", "hashlock:alice"));
        assert_ne!(base, ContractId::derive("Token", "OTH", "hashlock:alice"));
        assert_ne!(base, ContractId::derive("Token", "TKN", "hashlock:bob"));
    }

    #[test]
    fn separators_prevent_field_smearing() {
        // "ab" + "c" must not hash like "a" + "bc".
        let a = ContractId::derive("ab", "c", "i");
        let b = ContractId::derive("a", "bc", "i");
        assert_ne!(a, b);
    }

    #[test]
    fn hex_roundtrip() {
        let id = ContractId::derive("Test", "TST", "hashlock:issuer");
        let recovered = ContractId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let id = ContractId::derive("Test", "TST", "hashlock:issuer");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_hex()));
        let recovered: ContractId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(ContractId::from_hex("deadbeef").is_err());
    }
}
