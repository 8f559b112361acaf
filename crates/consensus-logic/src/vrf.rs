//! Entropy-contributing VRF signature check.

use tracing::warn;

use damson_crypto::{context, BandersnatchVerifier};
use damson_state::prelude::*;

use crate::errors::HeaderError;

/// Verifies the header's VRF signature against the author's bandersnatch
/// key.
///
/// The signed context is the entropy domain tag followed by the output
/// extracted from the seal signature; the message itself is empty.  Callers
/// pass the pending set for an epoch-transition block (the pending set
/// becomes active at the boundary) and the active set otherwise.
pub fn validate_vrf_signature(
    signed: &SealedBlockHeader,
    set: &[ValidatorKeys],
    verifier: &dyn BandersnatchVerifier,
) -> Result<(), HeaderError> {
    let idx = signed.author_idx();
    let author = set
        .get(idx as usize)
        .ok_or(HeaderError::UnknownAuthor(idx))?;

    let seal_output = verifier
        .seal_output(signed.seal())
        .map_err(HeaderError::SealOutputExtraction)?;

    let vrf_context = context::entropy(&seal_output);
    match verifier.verify_vrf(author.bandersnatch(), &vrf_context, &[], signed.vrf_sig()) {
        Ok(true) => Ok(()),
        Ok(false) => Err(HeaderError::VrfSignatureInvalid),
        Err(err) => {
            warn!(%err, slot = signed.slot(), "VRF signature unverifiable");
            Err(HeaderError::VrfSignatureInvalid)
        }
    }
}
