//! Epoch-mark validation against the pending validator set.

use tracing::warn;

use damson_crypto::BandersnatchVerifier;
use damson_primitives::params::ConsensusParams;
use damson_state::safrole::EpochMark;

use crate::{context::ValidatorSetProvider, errors::HeaderError};

/// Checks that an epoch mark declares the right number of validators and
/// that its bandersnatch keys are exactly what the pending set's epoch root
/// commits to.
pub fn check_epoch_mark(
    mark: &EpochMark,
    validators: &dyn ValidatorSetProvider,
    verifier: &dyn BandersnatchVerifier,
    params: &ConsensusParams,
) -> Result<(), HeaderError> {
    let declared = mark.validators().len();
    if declared != params.validator_count as usize {
        return Err(HeaderError::EpochMarkWrongValidatorCount(
            declared,
            params.validator_count,
        ));
    }

    // Only the bandersnatch component enters the commitment; the other key
    // fields play no part in the root.
    let ring_keys = mark.bandersnatch_keys();
    let epoch_root = validators.epoch_root();

    match verifier.verify_ring_commitment(&ring_keys, &epoch_root) {
        Ok(true) => Ok(()),
        Ok(false) => Err(HeaderError::EpochRootMismatch),
        Err(err) => {
            warn!(%err, "epoch root unverifiable");
            Err(HeaderError::EpochRootMismatch)
        }
    }
}
