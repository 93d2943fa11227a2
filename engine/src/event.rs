//! Notifications emitted on every successful state transition. The lock
//! id is the correlation key throughout: a host that indexes events by id
//! can reconstruct any lock's history without reading the registry.

use serde::{Deserialize, Serialize};

use hashlock_ledger::AccountId;

use crate::id::LockId;
use crate::record::AssetSpec;

/// One emitted notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LockEvent {
    /// A lock was created and the asset pulled into escrow custody.
    Created {
        /// The new lock's identifier.
        id: LockId,
        /// Who funded it.
        sender: AccountId,
        /// Who may withdraw it.
        receiver: AccountId,
        /// What was locked.
        asset: AssetSpec,
        /// The hash commitment gating withdrawal.
        #[serde(with = "hex::serde")]
        hashlock: [u8; 32],
        /// The expiry boundary.
        timelock: u64,
    },

    /// The receiver revealed the preimage and took the asset.
    Withdrawn {
        /// The resolved lock.
        id: LockId,
    },

    /// The sender reclaimed the asset after expiry.
    Refunded {
        /// The resolved lock.
        id: LockId,
    },
}

impl LockEvent {
    /// Returns the lock this event refers to.
    pub fn lock_id(&self) -> &LockId {
        match self {
            LockEvent::Created { id, .. }
            | LockEvent::Withdrawn { id }
            | LockEvent::Refunded { id } => id,
        }
    }
}
