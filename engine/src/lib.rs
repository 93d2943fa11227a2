//! # Hashlock Engine
//!
//! Hashed-timelock escrow: locks a unit of value (native coin, a
//! fungible-token balance, or a single NFT) under two release conditions,
//! reveal of a SHA-256 preimage before a deadline or expiry of the
//! deadline. Exactly one of two parties ends up with the asset, exactly
//! once.
//!
//! The release window is strict in both directions: the **receiver** may
//! withdraw only while the clock is still running (strictly before the
//! timelock), and the **sender** may refund only once it has lapsed (at or
//! after the timelock). The receiver has first claim during the window;
//! when it closes unclaimed, the funds default back to the sender. At the
//! boundary instant only refund is possible.
//!
//! ## Architecture
//!
//! ```text
//! id.rs          lock identifiers derived from creation parameters
//! record.rs      asset descriptions and the per-lock audit record
//! registry.rs    append-only arena of records, indexed by id and hashlock
//! adapter.rs     pull/push custody transfers, one per asset kind
//! controller.rs  the state machine: create / withdraw / refund / query
//! event.rs       notifications emitted on every state transition
//! error.rs       the rejection taxonomy
//! ```
//!
//! Every operation takes a `&mut Ledger` and an explicit
//! [`CallContext`](hashlock_ledger::CallContext) — caller identity and
//! ledger time are parameters, never ambient state. Operations are atomic:
//! any rejection leaves both the registry and the ledger exactly as they
//! were.

pub mod adapter;
pub mod controller;
pub mod error;
pub mod event;
pub mod id;
pub mod record;
pub mod registry;

pub use controller::HtlcEngine;
pub use error::HtlcError;
pub use event::LockEvent;
pub use id::LockId;
pub use record::{AssetKind, AssetSpec, LockRecord};
pub use registry::LockRegistry;
