//! Global consensus parameters for the chain.
//!
//! These are passed explicitly everywhere they're needed instead of living in
//! some ambient global, so that tests and tools can run several
//! configurations side by side.

/// Consensus parameters that don't change for the lifetime of the network
/// (unless there's some weird hard fork).
#[derive(Clone, Debug)]
pub struct ConsensusParams {
    /// Number of timeslots in an epoch (production chains use 600).
    pub epoch_length: u64,

    /// Phase at which the ticket contest closes and winners may be declared
    /// (production chains use 500).
    pub contest_duration: u64,

    /// Size of the validator set (production chains use 1023).
    pub validator_count: u16,

    /// Number of ticket entries each validator may submit per epoch.
    pub ticket_attempts: u8,
}

/// Node-local parameters that don't have to be pre-agreed across the network.
#[derive(Clone, Debug, Default)]
pub struct RunParams {
    /// Accept headers whose parent can't be resolved to genesis because the
    /// node was bootstrapped from a state snapshot and carries no genesis
    /// record.  Off by default.
    pub allow_missing_genesis: bool,
}

/// Combined set of parameters across all the consensus logic.
#[derive(Clone, Debug)]
pub struct Params {
    pub consensus: ConsensusParams,
    pub run: RunParams,
}

impl Params {
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn run(&self) -> &RunParams {
        &self.run
    }
}
