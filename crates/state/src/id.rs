use core::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use damson_primitives::buf::Buf32;

/// ID of a block header, the hash of its unsigned encoding.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
    Deserialize,
    Serialize,
)]
pub struct HeaderId(Buf32);

impl HeaderId {
    /// The zero sentinel, used as the parent of the genesis header.
    pub fn zero() -> Self {
        Self(Buf32::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Buf32> for HeaderId {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl From<HeaderId> for Buf32 {
    fn from(value: HeaderId) -> Self {
        value.0
    }
}

impl AsRef<[u8; 32]> for HeaderId {
    fn as_ref(&self) -> &[u8; 32] {
        self.0.as_ref()
    }
}

impl fmt::Debug for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
