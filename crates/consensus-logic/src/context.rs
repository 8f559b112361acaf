//! Interfaces to expose the chain context a candidate header is validated
//! against.
//!
//! All of these are fast local-state reads.  Implementations must expose
//! read-only snapshots for a given chain state so different fork candidates
//! can be validated concurrently; nothing here is written to.

use thiserror::Error;

use damson_crypto::{BandersnatchVerifier, RingCommitment};
use damson_primitives::{buf::Buf32, params::Params};
use damson_state::{id::HeaderId, safrole::SealKey, validator::ValidatorKeys};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error from a context read.  Distinct from a validation failure: the
/// header may be fine, we just couldn't look something up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("state not materialized")]
    StateUnavailable,

    #[error("no seal key derived for slot {0}")]
    MissingSealKey(u64),

    #[error("no genesis record")]
    MissingGenesis,
}

/// Chain time as observed by this node.
pub trait ChainClock {
    /// Timeslot of the most recently accepted block.
    fn latest_timeslot(&self) -> u64;
}

/// Queries against the locally materialized state.
pub trait StateProvider {
    /// Root of the state the next block would execute against.
    fn current_state_root(&self) -> ProviderResult<Buf32>;
}

/// Access to the genesis record.
///
/// Passed around as `Option<&dyn GenesisProvider>` since a node bootstrapped
/// from a snapshot legitimately has none.
pub trait GenesisProvider {
    fn genesis_header_id(&self) -> ProviderResult<HeaderId>;
}

/// Reference to a recently imported block.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BlockRef {
    pub id: HeaderId,
    pub slot: u64,
}

/// Lookups into the recent-history window used for parent resolution.
pub trait RecentBlocks {
    fn is_empty(&self) -> bool;

    fn get_block(&self, id: &HeaderId) -> Option<BlockRef>;
}

/// Read-only snapshots of the validator sets and the pending-set commitment.
pub trait ValidatorSetProvider {
    /// Validators eligible to author in the current epoch.
    fn active_set(&self) -> &[ValidatorKeys];

    /// Validators that become active at the next epoch boundary.
    fn pending_set(&self) -> &[ValidatorKeys];

    /// Ring commitment over the pending set's bandersnatch keys.
    fn epoch_root(&self) -> RingCommitment;
}

/// Deterministic per-slot sealing keys for the current epoch.
pub trait SealKeyProvider {
    fn seal_key_for_slot(&self, slot: u64) -> ProviderResult<SealKey>;
}

/// Rotating entropy accumulator snapshots.
pub trait EntropyProvider {
    /// The third-most-recent snapshot, rotated into place at the last epoch
    /// transition.  Seal contexts are built over this one.
    fn entropy_third_prior(&self) -> Buf32;
}

/// Everything a header is validated against, bundled so the pipeline and the
/// sub-validators take one argument.
pub struct ValidationContext<'c> {
    pub params: &'c Params,
    pub clock: &'c dyn ChainClock,
    pub state: &'c dyn StateProvider,
    pub genesis: Option<&'c dyn GenesisProvider>,
    pub recent: &'c dyn RecentBlocks,
    pub validators: &'c dyn ValidatorSetProvider,
    pub seal_keys: &'c dyn SealKeyProvider,
    pub entropy: &'c dyn EntropyProvider,
    pub verifier: &'c dyn BandersnatchVerifier,
}
