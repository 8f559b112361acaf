//! The header validation pipeline.
//!
//! Checks run in a fixed order and the first failure aborts the header;
//! nothing is mutated on any path, so re-validating against an unchanged
//! chain view gives the same answer.

use tracing::debug;

use damson_state::{epoch, prelude::*};

use crate::{
    context::ValidationContext,
    epoch_transition, errors::HeaderError,
    seal, vrf,
};

/// Validates a candidate header for import.
///
/// Order: slot ordering, parent linkage, winners-mark structure, epoch-mark
/// structure + commitment, VRF signature, seal signature.
pub fn validate_header(
    signed: &SealedBlockHeader,
    ctx: &ValidationContext<'_>,
) -> Result<(), HeaderError> {
    let params = ctx.params.consensus();

    // 1. The candidate must advance the chain.  Wall-clock bounds are the
    // arrival layer's business, not ours.
    let latest = ctx.clock.latest_timeslot();
    if signed.slot() <= latest {
        return Err(HeaderError::SlotNotAdvancing(signed.slot(), latest));
    }

    // Phase is derived from chain time, not from the candidate's own slot;
    // the candidate is unverified and doesn't get to pick its phase rules.
    let phase = epoch::slot_phase(latest + 1, params);

    // 2. Parent linkage.
    check_parent_linkage(signed, ctx)?;

    // 3. Winners mark: only after the contest closed, one winner per slot.
    if let Some(mark) = signed.winners_mark() {
        if !epoch::contest_closed(phase, params) {
            return Err(HeaderError::WinnersMarkPremature(
                phase,
                params.contest_duration,
            ));
        }
        if mark.len() as u64 != params.epoch_length {
            return Err(HeaderError::WinnersMarkWrongLength(
                mark.len(),
                params.epoch_length,
            ));
        }
    }

    // 4. Epoch mark: first slot of an epoch only, and it must match the
    // pending set commitment.
    if let Some(mark) = signed.epoch_mark() {
        if phase != 0 {
            return Err(HeaderError::EpochMarkUnexpected(phase));
        }
        epoch_transition::check_epoch_mark(mark, ctx.validators, ctx.verifier, params)?;
    }

    // 5. VRF signature.  On an epoch-transition block the pending set is
    // about to become active, so the author is looked up there.
    let author_set = if signed.epoch_mark().is_some() {
        ctx.validators.pending_set()
    } else {
        ctx.validators.active_set()
    };
    vrf::validate_vrf_signature(signed, author_set, ctx.verifier)?;

    // 6. Seal signature.
    seal::validate_seal_signature(signed, ctx)?;

    debug!(slot = signed.slot(), id = %signed.get_headerid(), "header validated");
    Ok(())
}

fn check_parent_linkage(
    signed: &SealedBlockHeader,
    ctx: &ValidationContext<'_>,
) -> Result<(), HeaderError> {
    let parent = *signed.parent();

    // Zero parent is the genesis sentinel itself.
    if parent.is_zero() {
        return Ok(());
    }

    if !ctx.recent.is_empty() {
        return if ctx.recent.get_block(&parent).is_some() {
            Ok(())
        } else {
            Err(HeaderError::ParentUnresolvable(parent))
        };
    }

    // No history: the only acceptable parent is the genesis header.
    match ctx.genesis {
        Some(genesis) => {
            let genesis_id = genesis.genesis_header_id()?;
            if parent == genesis_id {
                Ok(())
            } else {
                Err(HeaderError::GenesisMismatch(parent, genesis_id))
            }
        }
        // Snapshot-bootstrapped nodes carry no genesis record; accepting
        // here is an explicit configuration choice, never a silent default.
        None if ctx.params.run().allow_missing_genesis => Ok(()),
        None => Err(HeaderError::ParentUnresolvable(parent)),
    }
}
