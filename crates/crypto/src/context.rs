//! Builders for the VRF input contexts.
//!
//! Each context is a domain tag followed by the values it binds; changing
//! any byte here is a consensus break.

use damson_primitives::buf::Buf32;

use crate::{ENTROPY_DOMAIN, FALLBACK_SEAL_DOMAIN, TICKET_SEAL_DOMAIN};

/// Context for a ticket-mode seal: tag, epochal entropy, ticket attempt.
pub fn ticket_seal(entropy: &Buf32, attempt: u8) -> Vec<u8> {
    let mut ctx = Vec::with_capacity(TICKET_SEAL_DOMAIN.len() + Buf32::LEN + 1);
    ctx.extend_from_slice(TICKET_SEAL_DOMAIN);
    ctx.extend_from_slice(entropy.as_slice());
    ctx.push(attempt);
    ctx
}

/// Context for a fallback-mode seal: tag, epochal entropy.
pub fn fallback_seal(entropy: &Buf32) -> Vec<u8> {
    let mut ctx = Vec::with_capacity(FALLBACK_SEAL_DOMAIN.len() + Buf32::LEN);
    ctx.extend_from_slice(FALLBACK_SEAL_DOMAIN);
    ctx.extend_from_slice(entropy.as_slice());
    ctx
}

/// Context for the entropy VRF: tag, output extracted from the seal.
pub fn entropy(seal_output: &Buf32) -> Vec<u8> {
    let mut ctx = Vec::with_capacity(ENTROPY_DOMAIN.len() + Buf32::LEN);
    ctx.extend_from_slice(ENTROPY_DOMAIN);
    ctx.extend_from_slice(seal_output.as_slice());
    ctx
}
