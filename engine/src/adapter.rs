//! # Asset Transfer Adapter
//!
//! One surface for moving any of the three asset kinds in and out of
//! escrow custody. Everything asset-specific (allowance consumption,
//! ownership and approval checks) lives here, one small function per
//! direction, so the lifecycle controller can stay a pure state machine.
//!
//! Custody is the well-known escrow vault account. A pull moves the asset
//! from the lock's funder into the vault; a push moves it from the vault
//! to whichever party the state machine resolved in favor of. Both
//! directions are atomic: on error the ledger is untouched.

use hashlock_ledger::{AccountId, Ledger, LedgerError};

use crate::record::AssetSpec;

/// Moves the asset from `from` into escrow custody.
///
/// - **Native**: a direct balance transfer; the funds accompany the
///   creation call, so no prior authorization exists or is needed.
/// - **Fungible**: a delegated transfer with the vault as spender; the
///   funder must have approved the vault for at least the locked amount.
/// - **Non-fungible**: a delegated transfer of the single token; the
///   funder must own it and have approved the vault for it.
///
/// # Errors
///
/// Propagates the underlying [`LedgerError`] (insufficient balance or
/// allowance, wrong owner, unknown contract, ...). Nothing moves on error.
pub fn pull_into_escrow(
    ledger: &mut Ledger,
    from: &AccountId,
    asset: &AssetSpec,
) -> Result<(), LedgerError> {
    let vault = AccountId::escrow_vault();
    match asset {
        AssetSpec::Native { amount } => ledger.native_mut().transfer(from, &vault, *amount),
        AssetSpec::Fungible { contract, amount } => ledger
            .token_mut(contract)?
            .transfer_from(&vault, from, &vault, *amount),
        AssetSpec::NonFungible { contract, token_id } => ledger
            .nft_mut(contract)?
            .transfer_from(&vault, from, &vault, *token_id),
    }
}

/// Moves the asset from escrow custody to `to`.
///
/// The vault owns the asset between pull and push, so no allowance or
/// approval is involved on the way out.
///
/// # Errors
///
/// Propagates the underlying [`LedgerError`]. Nothing moves on error.
pub fn push_from_escrow(
    ledger: &mut Ledger,
    to: &AccountId,
    asset: &AssetSpec,
) -> Result<(), LedgerError> {
    let vault = AccountId::escrow_vault();
    match asset {
        AssetSpec::Native { amount } => ledger.native_mut().transfer(&vault, to, *amount),
        AssetSpec::Fungible { contract, amount } => {
            ledger.token_mut(contract)?.transfer(&vault, to, *amount)
        }
        AssetSpec::NonFungible { contract, token_id } => ledger
            .nft_mut(contract)?
            .transfer_from(&vault, &vault, to, *token_id),
    }
}
