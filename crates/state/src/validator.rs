//! Validator key records as they appear in the active/pending sets.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use damson_primitives::buf::{Buf128, Buf144, Buf32};

/// Public keys and metadata of a single validator, indexed by its ordinal
/// position in the set.
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
pub struct ValidatorKeys {
    /// Ring VRF key, used for sealing and ticket submission.
    bandersnatch: Buf32,

    /// Regular signing key, used for guarantees/assurances elsewhere.
    ed25519: Buf32,

    /// Aggregatable key used by the availability layer.
    bls: Buf144,

    /// Opaque network metadata (addresses etc.), not interpreted here.
    metadata: Buf128,
}

impl ValidatorKeys {
    pub fn new(bandersnatch: Buf32, ed25519: Buf32, bls: Buf144, metadata: Buf128) -> Self {
        Self {
            bandersnatch,
            ed25519,
            bls,
            metadata,
        }
    }

    pub fn bandersnatch(&self) -> &Buf32 {
        &self.bandersnatch
    }

    pub fn ed25519(&self) -> &Buf32 {
        &self.ed25519
    }

    pub fn bls(&self) -> &Buf144 {
        &self.bls
    }

    pub fn metadata(&self) -> &Buf128 {
        &self.metadata
    }
}
