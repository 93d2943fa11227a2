//! # Call Context
//!
//! A [`CallContext`] carries the two pieces of ambient state a ledger host
//! normally provides implicitly: the identity of the caller and the current
//! ledger timestamp. The escrow engine takes a context as an explicit
//! parameter on every operation instead of reading globals, so the same
//! operation replayed with the same context always produces the same
//! result.

use serde::{Deserialize, Serialize};

use crate::account::AccountId;

/// Explicit per-call execution environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The externally-authenticated identity invoking the operation.
    pub caller: AccountId,

    /// Current ledger time in seconds. Monotonic across calls within one
    /// host; the engine only ever reads it point-in-time, never waits on it.
    pub now: u64,
}

impl CallContext {
    /// Creates a context for `caller` at ledger time `now`.
    pub fn new(caller: AccountId, now: u64) -> Self {
        Self { caller, now }
    }

    /// Returns the same caller at a different ledger time. Handy in tests
    /// that walk a lock across its expiry boundary.
    pub fn at(&self, now: u64) -> Self {
        Self {
            caller: self.caller.clone(),
            now,
        }
    }
}
