//! Verification interface for the bandersnatch VRF primitives the consensus
//! layer relies on.
//!
//! The curve arithmetic itself lives behind [`BandersnatchVerifier`]; this
//! crate only fixes the domain-separation tags and the context layouts so
//! that every caller builds byte-identical inputs.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use damson_primitives::buf::{Buf32, Buf64, Buf144};

pub mod context;

/// Domain tag for ticket-mode seal signatures.
pub const TICKET_SEAL_DOMAIN: &[u8] = b"jam_ticket_seal";

/// Domain tag for fallback-mode seal signatures.
pub const FALLBACK_SEAL_DOMAIN: &[u8] = b"jam_fallback_seal";

/// Domain tag for the entropy-contributing VRF signature.
pub const ENTROPY_DOMAIN: &[u8] = b"jam_entropy";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("malformed signature")]
    MalformedSignature,

    #[error("malformed public key")]
    MalformedKey,

    #[error("malformed ring commitment")]
    MalformedCommitment,

    #[error("could not extract VRF output")]
    OutputExtraction,
}

/// Commitment to a validator set's bandersnatch keys, aka the epoch root.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct RingCommitment(Buf144);

impl RingCommitment {
    pub fn inner(&self) -> &Buf144 {
        &self.0
    }
}

impl From<Buf144> for RingCommitment {
    fn from(value: Buf144) -> Self {
        Self(value)
    }
}

/// Verification-side bandersnatch operations.
///
/// Implementations must be pure: same inputs, same answer, no I/O.  A
/// `Result<bool, _>` return distinguishes "the inputs didn't parse" from
/// "the signature doesn't verify"; callers typically treat both as a
/// rejection but want to log them differently.
pub trait BandersnatchVerifier: Send + Sync {
    /// Extracts the 32-byte VRF output committed to by a seal signature
    /// ("banderout" in graypaper terms).
    fn seal_output(&self, sig: &Buf64) -> Result<Buf32, CryptoError>;

    /// Verifies an IETF VRF signature by `key` over the domain-separated
    /// `context`, with `message` as auxiliary signed data.
    fn verify_vrf(
        &self,
        key: &Buf32,
        context: &[u8],
        message: &[u8],
        sig: &Buf64,
    ) -> Result<bool, CryptoError>;

    /// Checks that `commitment` commits to exactly `keys`, in order.
    fn verify_ring_commitment(
        &self,
        keys: &[Buf32],
        commitment: &RingCommitment,
    ) -> Result<bool, CryptoError>;
}
