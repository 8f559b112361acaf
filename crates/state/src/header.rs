use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use damson_primitives::{
    buf::{Buf32, Buf64},
    hash,
};

use crate::{
    id::HeaderId,
    safrole::{EpochMark, WinnersMark},
};

/// Accessors common to the unsigned and sealed header forms.
pub trait Header {
    fn slot(&self) -> u64;
    fn parent(&self) -> &HeaderId;
    fn state_root(&self) -> &Buf32;
    fn extrinsics_hash(&self) -> &Buf32;
    fn epoch_mark(&self) -> Option<&EpochMark>;
    fn winners_mark(&self) -> Option<&WinnersMark>;
    fn offenders(&self) -> &[Buf32];
    fn author_idx(&self) -> u16;
    fn vrf_sig(&self) -> &Buf64;
    fn get_headerid(&self) -> HeaderId;
}

/// Unsigned block header.
///
/// This is the exact structure the seal signature signs; its borsh encoding
/// is the seal message and must be reconstructible bit-for-bit from the
/// sealed form.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct BlockHeader {
    /// Hash of the parent header, zero for genesis.
    pub(crate) parent: HeaderId,

    /// Root of the chain state *prior* to this block's execution.
    pub(crate) state_root: Buf32,

    /// Hash of the block's extrinsic data.
    pub(crate) extrinsics_hash: Buf32,

    /// Timeslot the block was produced for.  Slots may be skipped.
    pub(crate) slot: u64,

    /// Present on the first block of an epoch.
    pub(crate) epoch_mark: Option<EpochMark>,

    /// Present once the contest has closed and winners are known.
    pub(crate) winners_mark: Option<WinnersMark>,

    /// Ed25519 keys of validators judged offending.
    pub(crate) offenders: Vec<Buf32>,

    /// Ordinal of the author in the active validator set.
    pub(crate) author_idx: u16,

    /// Entropy-contributing VRF signature.
    pub(crate) vrf_sig: Buf64,
}

impl BlockHeader {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        parent: HeaderId,
        state_root: Buf32,
        extrinsics_hash: Buf32,
        slot: u64,
        epoch_mark: Option<EpochMark>,
        winners_mark: Option<WinnersMark>,
        offenders: Vec<Buf32>,
        author_idx: u16,
        vrf_sig: Buf64,
    ) -> Self {
        Self {
            parent,
            state_root,
            extrinsics_hash,
            slot,
            epoch_mark,
            winners_mark,
            offenders,
            author_idx,
            vrf_sig,
        }
    }

    /// The byte message the seal signature signs.
    pub fn seal_message(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("hdr: enc unsigned header")
    }

    pub fn set_parent(&mut self, parent: HeaderId) {
        self.parent = parent;
    }

    pub fn set_state_root(&mut self, state_root: Buf32) {
        self.state_root = state_root;
    }

    pub fn set_slot(&mut self, slot: u64) {
        self.slot = slot;
    }

    pub fn set_epoch_mark(&mut self, mark: Option<EpochMark>) {
        self.epoch_mark = mark;
    }

    pub fn set_winners_mark(&mut self, mark: Option<WinnersMark>) {
        self.winners_mark = mark;
    }

    pub fn set_author_idx(&mut self, author_idx: u16) {
        self.author_idx = author_idx;
    }

    pub fn set_vrf_sig(&mut self, vrf_sig: Buf64) {
        self.vrf_sig = vrf_sig;
    }
}

impl Header for BlockHeader {
    fn slot(&self) -> u64 {
        self.slot
    }

    fn parent(&self) -> &HeaderId {
        &self.parent
    }

    fn state_root(&self) -> &Buf32 {
        &self.state_root
    }

    fn extrinsics_hash(&self) -> &Buf32 {
        &self.extrinsics_hash
    }

    fn epoch_mark(&self) -> Option<&EpochMark> {
        self.epoch_mark.as_ref()
    }

    fn winners_mark(&self) -> Option<&WinnersMark> {
        self.winners_mark.as_ref()
    }

    fn offenders(&self) -> &[Buf32] {
        &self.offenders
    }

    fn author_idx(&self) -> u16 {
        self.author_idx
    }

    fn vrf_sig(&self) -> &Buf64 {
        &self.vrf_sig
    }

    fn get_headerid(&self) -> HeaderId {
        hash::compute_borsh_hash(self).into()
    }
}

/// A header together with its seal signature, as received off the wire.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct SealedBlockHeader {
    pub(crate) header: BlockHeader,

    /// Seal signature proving the author's right to this slot.
    pub(crate) seal: Buf64,
}

impl SealedBlockHeader {
    pub fn new(header: BlockHeader, seal: Buf64) -> Self {
        Self { header, seal }
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn seal(&self) -> &Buf64 {
        &self.seal
    }

    pub fn header_mut(&mut self) -> &mut BlockHeader {
        &mut self.header
    }

    pub fn set_seal(&mut self, seal: Buf64) {
        self.seal = seal;
    }

    /// Reconstructs the exact message the seal signed.
    pub fn seal_message(&self) -> Vec<u8> {
        self.header.seal_message()
    }
}

impl From<SealedBlockHeader> for BlockHeader {
    fn from(sealed: SealedBlockHeader) -> Self {
        sealed.header
    }
}

impl Header for SealedBlockHeader {
    fn slot(&self) -> u64 {
        self.header.slot()
    }

    fn parent(&self) -> &HeaderId {
        self.header.parent()
    }

    fn state_root(&self) -> &Buf32 {
        self.header.state_root()
    }

    fn extrinsics_hash(&self) -> &Buf32 {
        self.header.extrinsics_hash()
    }

    fn epoch_mark(&self) -> Option<&EpochMark> {
        self.header.epoch_mark()
    }

    fn winners_mark(&self) -> Option<&WinnersMark> {
        self.header.winners_mark()
    }

    fn offenders(&self) -> &[Buf32] {
        self.header.offenders()
    }

    fn author_idx(&self) -> u16 {
        self.header.author_idx()
    }

    fn vrf_sig(&self) -> &Buf64 {
        self.header.vrf_sig()
    }

    fn get_headerid(&self) -> HeaderId {
        self.header.get_headerid()
    }
}
