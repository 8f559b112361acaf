//! Utils for reasoning about slots, epochs and phases.

use damson_primitives::params::ConsensusParams;

/// Position of a slot within its epoch, in `[0, epoch_length)`.
pub fn slot_phase(slot: u64, params: &ConsensusParams) -> u64 {
    slot % params.epoch_length
}

/// Epoch a slot belongs to.
pub fn slot_epoch(slot: u64, params: &ConsensusParams) -> u64 {
    slot / params.epoch_length
}

/// Is this the first slot of an epoch?
pub fn is_epoch_boundary(slot: u64, params: &ConsensusParams) -> bool {
    slot_phase(slot, params) == 0
}

/// Has the ticket contest closed by this phase?  Winners may only be
/// declared once it has.
pub fn contest_closed(phase: u64, params: &ConsensusParams) -> bool {
    phase >= params.contest_duration
}
