//! Rejection taxonomy for escrow operations.
//!
//! Every variant aborts the whole operation atomically: no partial
//! registry write, no partial asset movement. Nothing is retried
//! internally; each error is surfaced verbatim for the caller to decide.
//! On an already-resolved lock, "already withdrawn" wins over "already
//! refunded" in every check chain.

use thiserror::Error;

use hashlock_ledger::LedgerError;

use crate::id::LockId;

/// Errors that can reject a create, withdraw, or refund.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HtlcError {
    /// Native and fungible locks must hold a positive quantity.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// Locks must be created with the expiry still ahead of the clock.
    #[error("timelock time must be in the future (timelock {timelock}, now {now})")]
    TimelockNotFuture {
        /// The rejected expiry.
        timelock: u64,
        /// Ledger time at the call.
        now: u64,
    },

    /// A lock with this identifier or hashlock already exists. Resolved
    /// locks block re-creation too, since a hashlock is single-use. Carries
    /// the id of the registered lock, so a hashlock collision names the
    /// lock that burned the hashlock, not the rejected attempt.
    #[error("lock {0} already exists")]
    AlreadyExists(LockId),

    /// No lock is registered under this identifier.
    #[error("lock {0} does not exist")]
    NotFound(LockId),

    /// The lock was already paid out to the receiver.
    #[error("already withdrawn")]
    AlreadyWithdrawn,

    /// The lock was already returned to the sender.
    #[error("already refunded")]
    AlreadyRefunded,

    /// Withdrawal attempted at or after expiry. The receiver's claim
    /// window has closed; only a refund can resolve the lock now.
    #[error("withdrawable: timelock time must be in the future (timelock {timelock}, now {now})")]
    WithdrawExpired {
        /// The lock's expiry.
        timelock: u64,
        /// Ledger time at the call.
        now: u64,
    },

    /// Refund attempted before expiry. The receiver still has first claim.
    #[error("refundable: timelock not yet passed (timelock {timelock}, now {now})")]
    RefundTooEarly {
        /// The lock's expiry.
        timelock: u64,
        /// Ledger time at the call.
        now: u64,
    },

    /// The revealed preimage does not hash to the stored commitment.
    #[error("hashlock hash does not match")]
    HashMismatch,

    /// Only the original sender may refund a lock.
    #[error("refundable: caller is not the sender")]
    NotSender,

    /// The external asset movement failed; the whole operation unwound.
    #[error("transfer failed: {0}")]
    Transfer(#[from] LedgerError),
}
