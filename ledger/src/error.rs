//! Error taxonomy for ledger operations.
//!
//! Every variant names the exact resource and amounts involved so that a
//! rejected transfer can be diagnosed without replaying it. All errors
//! leave the ledger untouched; there are no partial transfers.

use thiserror::Error;

use crate::account::AccountId;
use crate::contract::ContractId;

/// Errors that can occur while moving assets on the ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Zero-amount transfers are no-ops and almost always a caller bug.
    #[error("zero-amount operations are not permitted")]
    ZeroAmount,

    /// Attempted to debit more than the account holds.
    #[error("insufficient balance: account {account} has {available}, requested {requested}")]
    InsufficientBalance {
        /// The account being debited.
        account: AccountId,
        /// What the account actually holds.
        available: u64,
        /// What the caller tried to move.
        requested: u64,
    },

    /// A credit would exceed `u64::MAX`. Either a bug or an attack.
    #[error("balance overflow: account {account} holds {current}, credit {credit}")]
    Overflow {
        /// The account being credited.
        account: AccountId,
        /// Balance before the failed credit.
        current: u64,
        /// The amount that caused the overflow.
        credit: u64,
    },

    /// A delegated transfer exceeds what the owner authorized the spender
    /// to move.
    #[error(
        "insufficient allowance: {owner} authorized {spender} for {allowance}, requested {requested}"
    )]
    InsufficientAllowance {
        /// The account whose funds would move.
        owner: AccountId,
        /// The account attempting the delegated transfer.
        spender: AccountId,
        /// The currently authorized amount.
        allowance: u64,
        /// What the spender tried to move.
        requested: u64,
    },

    /// No contract is deployed under this identifier.
    #[error("unknown contract {0}")]
    UnknownContract(ContractId),

    /// A contract with this identifier is already deployed. Contract IDs
    /// are content-derived, so this means identical deployment parameters.
    #[error("contract {0} already deployed")]
    ContractExists(ContractId),

    /// The token has never been minted on this contract.
    #[error("unknown token {token_id} on contract {contract}")]
    UnknownToken {
        /// The NFT contract queried.
        contract: ContractId,
        /// The missing token.
        token_id: u64,
    },

    /// The claimed owner does not own the token.
    #[error("token {token_id} is owned by {owner}, not {claimed}")]
    NotOwner {
        /// The token in question.
        token_id: u64,
        /// Who actually owns it.
        owner: AccountId,
        /// Who the caller claimed owns it.
        claimed: AccountId,
    },

    /// The spender is neither the token's owner nor its approved operator.
    #[error("{spender} is not approved to move token {token_id}")]
    NotApproved {
        /// The token in question.
        token_id: u64,
        /// The unauthorized spender.
        spender: AccountId,
    },
}
