//! # Hashlock Ledger
//!
//! An in-memory model of the ledger environment the escrow engine runs
//! against: accounts, native-coin balances, fungible-token contracts, and
//! non-fungible-token contracts. Everything the engine needs from its host
//! (caller identity, ledger time, asset custody) is explicit state in this
//! crate, never ambient globals. That is what makes the engine
//! deterministically testable outside any particular chain.
//!
//! ## Architecture
//!
//! ```text
//! account.rs      — Account identities and the well-known escrow vault
//! context.rs      — Per-call execution context (caller, ledger time)
//! contract.rs     — Content-addressed contract identifiers
//! native.rs       — Native-coin balance book
//! fungible.rs     — Fungible tokens: balances + spender allowances
//! nonfungible.rs  — Non-fungible tokens: per-token ownership + approval
//! ledger.rs       — The aggregate: one native book, many contracts
//! ```
//!
//! ## Design Principles
//!
//! 1. **All amounts are `u64` in smallest-unit denomination.** No floating
//!    point, no decimals in arithmetic; the `decimals` field on a token
//!    is display-only.
//! 2. **Checked arithmetic everywhere.** Wrapping arithmetic and money do
//!    not mix; overflow is an error, never a wrap.
//! 3. **Every operation is atomic.** A failed transfer mutates nothing.
//! 4. **Serializable state.** Every public type derives serde so a ledger
//!    can be snapshotted, persisted, or shipped to a test harness.

pub mod account;
pub mod context;
pub mod contract;
pub mod error;
pub mod fungible;
pub mod ledger;
pub mod native;
pub mod nonfungible;

pub use account::AccountId;
pub use context::CallContext;
pub use contract::ContractId;
pub use error::LedgerError;
pub use fungible::TokenLedger;
pub use ledger::Ledger;
pub use native::NativeLedger;
pub use nonfungible::NftLedger;
