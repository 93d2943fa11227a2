//! # Lock Lifecycle Controller
//!
//! The state machine: `Active → {Withdrawn, Refunded}`, both terminal, no
//! way back. One controller instance owns the registry and the event log;
//! every operation takes the ledger and an explicit [`CallContext`], runs
//! as one atomic unit, and either commits completely or leaves no trace.
//!
//! ## Check ordering
//!
//! Rejections are checked in a fixed order so callers see stable errors:
//! resolution state first ("already withdrawn" before "already refunded"),
//! then the time window, then the preimage. A reentrant or racing call
//! against a lock mid-resolution is cut off by the state check: the
//! terminal flag flips *before* the external push runs.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::info;

use hashlock_ledger::{AccountId, CallContext, Ledger};

use crate::adapter;
use crate::error::HtlcError;
use crate::event::LockEvent;
use crate::id::LockId;
use crate::record::{AssetSpec, LockRecord};
use crate::registry::LockRegistry;

/// The hashed-timelock escrow engine.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct HtlcEngine {
    registry: LockRegistry,
    events: Vec<LockEvent>,
}

impl HtlcEngine {
    /// Creates an engine with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lock: validates the terms, pulls the asset into escrow
    /// custody, and registers an Active record. The caller is the sender.
    ///
    /// Returns the new lock's identifier, also carried by the emitted
    /// [`LockEvent::Created`].
    ///
    /// # Errors
    ///
    /// - [`HtlcError::ZeroAmount`] for a native/fungible lock over nothing.
    /// - [`HtlcError::TimelockNotFuture`] unless `timelock > ctx.now`.
    /// - [`HtlcError::AlreadyExists`] if the derived id or the hashlock is
    ///   already registered, resolved or not; hashlocks are single-use.
    ///   The error always carries the id of the lock already registered.
    /// - [`HtlcError::Transfer`] if the pull fails, in which case no
    ///   record is created.
    pub fn create(
        &mut self,
        ledger: &mut Ledger,
        ctx: &CallContext,
        receiver: AccountId,
        hashlock: [u8; 32],
        timelock: u64,
        asset: AssetSpec,
    ) -> Result<LockId, HtlcError> {
        match asset {
            AssetSpec::Native { amount } | AssetSpec::Fungible { amount, .. } if amount == 0 => {
                return Err(HtlcError::ZeroAmount);
            }
            _ => {}
        }
        if timelock <= ctx.now {
            return Err(HtlcError::TimelockNotFuture {
                timelock,
                now: ctx.now,
            });
        }

        let id = LockId::derive(&ctx.caller, &receiver, &hashlock, timelock, &asset);
        if self.registry.contains_id(&id) {
            return Err(HtlcError::AlreadyExists(id));
        }
        // A reused hashlock under different terms derives a fresh id; the
        // error names the registered lock that burned the hashlock.
        if let Some(existing) = self.registry.get_by_hashlock(&hashlock) {
            return Err(HtlcError::AlreadyExists(existing.id));
        }

        // Custody first: a failed pull must leave no record behind.
        adapter::pull_into_escrow(ledger, &ctx.caller, &asset)?;

        self.registry.insert(LockRecord {
            id,
            sender: ctx.caller.clone(),
            receiver: receiver.clone(),
            asset: asset.clone(),
            hashlock,
            timelock,
            withdrawn: false,
            refunded: false,
            preimage: Vec::new(),
            created_at: ctx.now,
        });
        self.events.push(LockEvent::Created {
            id,
            sender: ctx.caller.clone(),
            receiver,
            asset,
            hashlock,
            timelock,
        });

        info!(id = %id, timelock, "lock created");
        Ok(id)
    }

    /// Withdraws a lock: the receiver claims the asset by revealing the
    /// preimage, strictly before expiry.
    ///
    /// On success the preimage is stored on the record for auditability
    /// and [`LockEvent::Withdrawn`] is emitted.
    ///
    /// # Errors
    ///
    /// In check order: [`HtlcError::NotFound`],
    /// [`HtlcError::AlreadyWithdrawn`], [`HtlcError::AlreadyRefunded`],
    /// [`HtlcError::WithdrawExpired`] once `ctx.now >= timelock`, and
    /// [`HtlcError::HashMismatch`] if `SHA-256(preimage)` is not the
    /// stored hashlock. A failed push unwinds the record untouched.
    pub fn withdraw(
        &mut self,
        ledger: &mut Ledger,
        ctx: &CallContext,
        id: LockId,
        preimage: &[u8],
    ) -> Result<LockId, HtlcError> {
        let record = self.registry.get_mut(&id).ok_or(HtlcError::NotFound(id))?;
        if record.withdrawn {
            return Err(HtlcError::AlreadyWithdrawn);
        }
        if record.refunded {
            return Err(HtlcError::AlreadyRefunded);
        }
        if ctx.now >= record.timelock {
            return Err(HtlcError::WithdrawExpired {
                timelock: record.timelock,
                now: ctx.now,
            });
        }
        let digest: [u8; 32] = Sha256::digest(preimage).into();
        if !bool::from(digest.as_slice().ct_eq(record.hashlock.as_slice())) {
            return Err(HtlcError::HashMismatch);
        }

        // Resolve before the external push so that any reentrant call
        // observes the terminal state and is rejected above.
        record.withdrawn = true;
        record.preimage = preimage.to_vec();
        let receiver = record.receiver.clone();
        let asset = record.asset.clone();

        if let Err(err) = adapter::push_from_escrow(ledger, &receiver, &asset) {
            record.withdrawn = false;
            record.preimage.clear();
            return Err(err.into());
        }

        self.events.push(LockEvent::Withdrawn { id });
        info!(id = %id, "lock withdrawn");
        Ok(id)
    }

    /// Refunds a lock: the original sender reclaims the asset once the
    /// timelock has been reached.
    ///
    /// # Errors
    ///
    /// In check order: [`HtlcError::NotFound`], [`HtlcError::NotSender`]
    /// unless `ctx.caller` is the recorded sender,
    /// [`HtlcError::AlreadyWithdrawn`] (checked before "already refunded";
    /// the funds are gone), [`HtlcError::AlreadyRefunded`], and
    /// [`HtlcError::RefundTooEarly`] while `ctx.now < timelock`. A failed
    /// push unwinds the record untouched.
    pub fn refund(
        &mut self,
        ledger: &mut Ledger,
        ctx: &CallContext,
        id: LockId,
    ) -> Result<LockId, HtlcError> {
        let record = self.registry.get_mut(&id).ok_or(HtlcError::NotFound(id))?;
        if record.sender != ctx.caller {
            return Err(HtlcError::NotSender);
        }
        if record.withdrawn {
            return Err(HtlcError::AlreadyWithdrawn);
        }
        if record.refunded {
            return Err(HtlcError::AlreadyRefunded);
        }
        if ctx.now < record.timelock {
            return Err(HtlcError::RefundTooEarly {
                timelock: record.timelock,
                now: ctx.now,
            });
        }

        record.refunded = true;
        let sender = record.sender.clone();
        let asset = record.asset.clone();

        if let Err(err) = adapter::push_from_escrow(ledger, &sender, &asset) {
            record.refunded = false;
            return Err(err.into());
        }

        self.events.push(LockEvent::Refunded { id });
        info!(id = %id, "lock refunded");
        Ok(id)
    }

    /// Returns the record registered under `id`, if any.
    pub fn get_record(&self, id: &LockId) -> Option<&LockRecord> {
        self.registry.get(id)
    }

    /// Returns the record whose commitment is `hashlock`, if any.
    pub fn get_by_hashlock(&self, hashlock: &[u8; 32]) -> Option<&LockRecord> {
        self.registry.get_by_hashlock(hashlock)
    }

    /// All notifications emitted so far, in order.
    pub fn events(&self) -> &[LockEvent] {
        &self.events
    }

    /// How many locks have ever been created.
    pub fn lock_count(&self) -> usize {
        self.registry.len()
    }
}
