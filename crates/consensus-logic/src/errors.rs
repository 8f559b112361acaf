use thiserror::Error;

use damson_crypto::CryptoError;
use damson_primitives::buf::Buf32;
use damson_state::id::HeaderId;

use crate::context::ProviderError;

/// Reasons a candidate header is rejected.
///
/// Validation is deterministic over fixed inputs, so none of these are
/// retryable; the import pipeline surfaces them verbatim and drops the
/// block.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("slot {0} does not advance chain tip at slot {1}")]
    SlotNotAdvancing(u64, u64),

    #[error("parent {0:?} not resolvable")]
    ParentUnresolvable(HeaderId),

    #[error("parent {0:?} does not match genesis {1:?}")]
    GenesisMismatch(HeaderId, HeaderId),

    #[error("winners mark at phase {0}, contest closes at {1}")]
    WinnersMarkPremature(u64, u64),

    #[error("winners mark has {0} tickets, expected {1}")]
    WinnersMarkWrongLength(usize, u64),

    #[error("epoch mark at phase {0}, only legal at phase 0")]
    EpochMarkUnexpected(u64),

    #[error("epoch mark declares {0} validators, expected {1}")]
    EpochMarkWrongValidatorCount(usize, u16),

    #[error("epoch mark keys do not match the pending set commitment")]
    EpochRootMismatch,

    #[error("unknown author index {0}")]
    UnknownAuthor(u16),

    #[error("author index {0} out of range for set of {1}")]
    AuthorIndexOutOfRange(u16, usize),

    #[error("no seal key for slot {0}")]
    SealKeyUnavailable(u64),

    #[error("seal output extraction: {0}")]
    SealOutputExtraction(#[source] CryptoError),

    #[error("VRF signature invalid")]
    VrfSignatureInvalid,

    #[error("ticket seal invalid")]
    TicketSealInvalid,

    #[error("fallback seal invalid")]
    FallbackSealInvalid,

    // This one is diagnostic: it means our own epoch-transition bookkeeping
    // derived a different fallback sequence than the sealer's, not that an
    // attacker forged anything.
    #[error("fallback seal key does not match author's bandersnatch key")]
    FallbackKeyMismatch,

    #[error("state root mismatch (computed {computed:?}, header {expected:?})")]
    StateRootMismatch { computed: Buf32, expected: Buf32 },

    #[error("provider: {0}")]
    Provider(#[from] ProviderError),
}
