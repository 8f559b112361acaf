//! Seal signature check, ticket mode and fallback mode.

use tracing::warn;

use damson_crypto::context;
use damson_state::prelude::*;

use crate::{context::ValidationContext, errors::HeaderError};

/// Verifies the header's seal signature under the seal key derived for its
/// slot.
///
/// Safe to call on its own: the author index is bounds-checked here even
/// though the full pipeline has already done so during VRF verification.
pub fn validate_seal_signature(
    signed: &SealedBlockHeader,
    ctx: &ValidationContext<'_>,
) -> Result<(), HeaderError> {
    let slot = signed.slot();
    let seal_key = ctx
        .seal_keys
        .seal_key_for_slot(slot)
        .map_err(|_| HeaderError::SealKeyUnavailable(slot))?;

    let active = ctx.validators.active_set();
    let idx = signed.author_idx();
    let author = active
        .get(idx as usize)
        .ok_or(HeaderError::AuthorIndexOutOfRange(idx, active.len()))?;

    let message = signed.seal_message();
    let entropy = ctx.entropy.entropy_third_prior();

    match seal_key {
        SealKey::Ticket(ticket) => {
            // Every valid ticket was submitted with an attempt index below
            // the per-validator cap; anything above it never entered the
            // contest.
            let cap = ctx.params.consensus().ticket_attempts;
            if ticket.attempt() >= cap {
                warn!(slot, attempt = ticket.attempt(), cap, "ticket attempt out of range");
                return Err(HeaderError::TicketSealInvalid);
            }

            let seal_context = context::ticket_seal(&entropy, ticket.attempt());
            match ctx
                .verifier
                .verify_vrf(author.bandersnatch(), &seal_context, &message, signed.seal())
            {
                Ok(true) => {}
                Ok(false) => return Err(HeaderError::TicketSealInvalid),
                Err(err) => {
                    warn!(%err, slot, "ticket seal unverifiable");
                    return Err(HeaderError::TicketSealInvalid);
                }
            }

            // The winning ticket's id is the output of the very VRF that
            // sealed the block; a seal that verifies but commits to a
            // different output was made for some other ticket.
            let output = ctx
                .verifier
                .seal_output(signed.seal())
                .map_err(HeaderError::SealOutputExtraction)?;
            if output != *ticket.id() {
                warn!(slot, "seal output does not match winning ticket id");
                return Err(HeaderError::TicketSealInvalid);
            }

            Ok(())
        }

        SealKey::Fallback(key) => {
            // The fallback sequence is derived from our own state at the
            // last epoch boundary; a mismatch here means that bookkeeping
            // diverged, not that the author cheated.
            if key != *author.bandersnatch() {
                warn!(slot, idx, "fallback seal key does not match author");
                return Err(HeaderError::FallbackKeyMismatch);
            }

            let seal_context = context::fallback_seal(&entropy);
            match ctx
                .verifier
                .verify_vrf(&key, &seal_context, &message, signed.seal())
            {
                Ok(true) => Ok(()),
                Ok(false) => Err(HeaderError::FallbackSealInvalid),
                Err(err) => {
                    warn!(%err, slot, "fallback seal unverifiable");
                    Err(HeaderError::FallbackSealInvalid)
                }
            }
        }
    }
}
