//! # Asset Descriptions and Lock Records
//!
//! An [`AssetSpec`] says *what* is locked; a [`LockRecord`] is the durable
//! entity tracking one escrow instance from creation to resolution. Records
//! are never deleted: a resolved lock stays queryable forever as an audit
//! trail, with the revealed preimage preserved on withdrawal.

use serde::{Deserialize, Serialize};
use std::fmt;

use hashlock_ledger::{AccountId, ContractId};

use crate::id::LockId;

/// The three kinds of value the engine can hold in escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// The ledger's native coin.
    Native,
    /// A fungible-token balance on some contract.
    Fungible,
    /// A single non-fungible token on some contract.
    NonFungible,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Native => write!(f, "native"),
            AssetKind::Fungible => write!(f, "fungible"),
            AssetKind::NonFungible => write!(f, "non-fungible"),
        }
    }
}

/// Exactly which asset a lock holds.
///
/// Immutable after creation. The quantity field doubles as the token ID
/// for NFTs, which lock exactly one unit by definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetSpec {
    /// Native coin, in smallest units.
    Native {
        /// Quantity locked; must be positive.
        amount: u64,
    },
    /// A fungible-token balance.
    Fungible {
        /// The token contract.
        contract: ContractId,
        /// Quantity locked; must be positive.
        amount: u64,
    },
    /// One non-fungible token.
    NonFungible {
        /// The NFT contract.
        contract: ContractId,
        /// The token's identifier (ID 0 is a perfectly valid token).
        token_id: u64,
    },
}

impl AssetSpec {
    /// Returns which of the three asset kinds this is.
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetSpec::Native { .. } => AssetKind::Native,
            AssetSpec::Fungible { .. } => AssetKind::Fungible,
            AssetSpec::NonFungible { .. } => AssetKind::NonFungible,
        }
    }

    /// Returns the external contract backing the asset, if any. Native
    /// value has none.
    pub fn contract(&self) -> Option<&ContractId> {
        match self {
            AssetSpec::Native { .. } => None,
            AssetSpec::Fungible { contract, .. } | AssetSpec::NonFungible { contract, .. } => {
                Some(contract)
            }
        }
    }

    /// Returns the quantity for native/fungible locks, or the token ID for
    /// NFT locks.
    pub fn amount_or_token_id(&self) -> u64 {
        match self {
            AssetSpec::Native { amount } | AssetSpec::Fungible { amount, .. } => *amount,
            AssetSpec::NonFungible { token_id, .. } => *token_id,
        }
    }

    /// A single-byte discriminant mixed into lock-id derivation. Part of
    /// the persisted format; must never change.
    pub(crate) fn discriminant(&self) -> u8 {
        match self {
            AssetSpec::Native { .. } => 0x01,
            AssetSpec::Fungible { .. } => 0x02,
            AssetSpec::NonFungible { .. } => 0x03,
        }
    }
}

impl fmt::Display for AssetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSpec::Native { amount } => write!(f, "native[{}]", amount),
            AssetSpec::Fungible { contract, amount } => {
                write!(f, "fungible[{} @{}]", amount, contract)
            }
            AssetSpec::NonFungible { contract, token_id } => {
                write!(f, "nft[#{} @{}]", token_id, contract)
            }
        }
    }
}

/// The durable record of one escrow instance.
///
/// Created in the Active state (both flags false). Mutated exactly once,
/// by either a withdrawal or a refund, after which it is terminal. The two
/// flags are never both true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Identifier derived from the creation parameters. Primary key.
    pub id: LockId,

    /// Who funded the lock. The only party allowed to refund.
    pub sender: AccountId,

    /// The only party who benefits from a withdrawal.
    pub receiver: AccountId,

    /// What is locked. Immutable after creation.
    pub asset: AssetSpec,

    /// SHA-256 commitment gating withdrawal.
    #[serde(with = "hex::serde")]
    pub hashlock: [u8; 32],

    /// Expiry boundary in ledger seconds: withdrawal is allowed strictly
    /// before it, refund at or after it.
    pub timelock: u64,

    /// Set exactly once, on successful withdrawal.
    pub withdrawn: bool,

    /// Set exactly once, on successful refund.
    pub refunded: bool,

    /// The revealed secret. Empty until a successful withdrawal stores it
    /// for auditability.
    #[serde(with = "hex::serde")]
    pub preimage: Vec<u8>,

    /// Ledger time at creation.
    pub created_at: u64,
}

impl LockRecord {
    /// Returns `true` once the lock has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        self.withdrawn || self.refunded
    }
}
