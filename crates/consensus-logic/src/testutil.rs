//! Stub collaborators and a programmable VRF backend for tests.
//!
//! The stub backend mimics the structure of a real VRF: the output depends
//! only on the key and the input context, while the signature also binds the
//! auxiliary message.  Tests forge signatures with [`StubVerifier::forge`]
//! and tamper with any byte to get rejections.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use damson_crypto::{context, BandersnatchVerifier, CryptoError, RingCommitment};
use damson_primitives::{
    buf::{Buf144, Buf32, Buf64},
    hash,
    params::{ConsensusParams, Params, RunParams},
};
use damson_state::prelude::*;

use crate::context::{
    BlockRef, ChainClock, EntropyProvider, GenesisProvider, ProviderError, ProviderResult,
    RecentBlocks, SealKeyProvider, StateProvider, ValidationContext, ValidatorSetProvider,
};

pub(crate) struct StubVerifier;

impl StubVerifier {
    fn prefix(key: &Buf32, vrf_context: &[u8]) -> Buf32 {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"vrf_pre");
        buf.extend_from_slice(key.as_slice());
        buf.extend_from_slice(vrf_context);
        hash::raw(&buf)
    }

    fn aux(key: &Buf32, vrf_context: &[u8], message: &[u8]) -> Buf32 {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"vrf_aux");
        buf.extend_from_slice(key.as_slice());
        buf.extend_from_slice(vrf_context);
        buf.extend_from_slice(message);
        hash::raw(&buf)
    }

    fn output_of(prefix: &Buf32) -> Buf32 {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"vrf_out");
        buf.extend_from_slice(prefix.as_slice());
        hash::raw(&buf)
    }

    /// The output the VRF keyed by `key` yields for `vrf_context`, known to
    /// the signer before any message is signed.
    pub(crate) fn output(key: &Buf32, vrf_context: &[u8]) -> Buf32 {
        Self::output_of(&Self::prefix(key, vrf_context))
    }

    /// Builds the unique signature the stub backend accepts for these
    /// inputs.
    pub(crate) fn forge(key: &Buf32, vrf_context: &[u8], message: &[u8]) -> Buf64 {
        let prefix = Self::prefix(key, vrf_context);
        let aux = Self::aux(key, vrf_context, message);
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(prefix.as_slice());
        raw[32..].copy_from_slice(aux.as_slice());
        Buf64::from(raw)
    }

    /// The commitment the stub backend accepts for this key sequence.
    pub(crate) fn commit(keys: &[Buf32]) -> RingCommitment {
        let mut buf = Vec::new();
        for key in keys {
            buf.extend_from_slice(key.as_slice());
        }
        let digest = hash::raw(&buf);
        let mut raw = [0u8; 144];
        raw[..32].copy_from_slice(digest.as_slice());
        RingCommitment::from(Buf144::from(raw))
    }
}

impl BandersnatchVerifier for StubVerifier {
    fn seal_output(&self, sig: &Buf64) -> Result<Buf32, CryptoError> {
        if sig.is_zero() {
            return Err(CryptoError::OutputExtraction);
        }
        let mut prefix = [0u8; 32];
        prefix.copy_from_slice(&sig.as_slice()[..32]);
        Ok(Self::output_of(&Buf32::from(prefix)))
    }

    fn verify_vrf(
        &self,
        key: &Buf32,
        vrf_context: &[u8],
        message: &[u8],
        sig: &Buf64,
    ) -> Result<bool, CryptoError> {
        Ok(*sig == Self::forge(key, vrf_context, message))
    }

    fn verify_ring_commitment(
        &self,
        keys: &[Buf32],
        commitment: &RingCommitment,
    ) -> Result<bool, CryptoError> {
        Ok(*commitment == Self::commit(keys))
    }
}

/// In-memory chain view implementing every collaborator trait.
pub(crate) struct StubChain {
    latest_slot: Cell<u64>,
    state_root: Buf32,
    entropy: Buf32,
    active: Vec<ValidatorKeys>,
    pending: Vec<ValidatorKeys>,
    epoch_root: Cell<RingCommitment>,
    recent: RefCell<HashMap<HeaderId, BlockRef>>,
    seal_keys: RefCell<HashMap<u64, SealKey>>,
}

impl StubChain {
    pub(crate) fn active_set(&self) -> &[ValidatorKeys] {
        &self.active
    }

    pub(crate) fn set_latest_slot(&self, slot: u64) {
        self.latest_slot.set(slot);
    }

    pub(crate) fn clear_history(&self) {
        self.recent.borrow_mut().clear();
    }

    pub(crate) fn seal_key(&self, slot: u64) -> Option<SealKey> {
        self.seal_keys.borrow().get(&slot).cloned()
    }

    pub(crate) fn set_seal_key(&self, slot: u64, key: SealKey) {
        self.seal_keys.borrow_mut().insert(slot, key);
    }

    pub(crate) fn clear_seal_key(&self, slot: u64) {
        self.seal_keys.borrow_mut().remove(&slot);
    }

    pub(crate) fn copy_seal_key(&self, from: u64, to: u64) {
        let key = self.seal_key(from).expect("test: no seal key to copy");
        self.set_seal_key(to, key);
    }
}

impl ChainClock for StubChain {
    fn latest_timeslot(&self) -> u64 {
        self.latest_slot.get()
    }
}

impl StateProvider for StubChain {
    fn current_state_root(&self) -> ProviderResult<Buf32> {
        Ok(self.state_root)
    }
}

impl RecentBlocks for StubChain {
    fn is_empty(&self) -> bool {
        self.recent.borrow().is_empty()
    }

    fn get_block(&self, id: &HeaderId) -> Option<BlockRef> {
        self.recent.borrow().get(id).copied()
    }
}

impl ValidatorSetProvider for StubChain {
    fn active_set(&self) -> &[ValidatorKeys] {
        &self.active
    }

    fn pending_set(&self) -> &[ValidatorKeys] {
        &self.pending
    }

    fn epoch_root(&self) -> RingCommitment {
        self.epoch_root.get()
    }
}

impl SealKeyProvider for StubChain {
    fn seal_key_for_slot(&self, slot: u64) -> ProviderResult<SealKey> {
        self.seal_keys
            .borrow()
            .get(&slot)
            .cloned()
            .ok_or(ProviderError::MissingSealKey(slot))
    }
}

impl EntropyProvider for StubChain {
    fn entropy_third_prior(&self) -> Buf32 {
        self.entropy
    }
}

pub(crate) struct StubGenesis(pub(crate) HeaderId);

impl GenesisProvider for StubGenesis {
    fn genesis_header_id(&self) -> ProviderResult<HeaderId> {
        Ok(self.0)
    }
}

fn make_validator(seed: u8) -> ValidatorKeys {
    let bandersnatch = hash::raw(&[b'b', seed]);
    let ed25519 = hash::raw(&[b'e', seed]);
    ValidatorKeys::new(bandersnatch, ed25519, [seed; 144].into(), [seed; 128].into())
}

/// A small chain fixture: 4 validators, 12-slot epochs, contest closing at
/// phase 10, tip at slot 25.
pub(crate) struct Harness {
    pub(crate) params: Params,
    pub(crate) chain: StubChain,
    pub(crate) verifier: StubVerifier,
    pub(crate) genesis: Option<StubGenesis>,
    tip: BlockRef,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let validators: Vec<_> = (0..4).map(make_validator).collect();
        let ring_keys: Vec<_> = validators.iter().map(|v| *v.bandersnatch()).collect();

        let params = Params {
            consensus: ConsensusParams {
                epoch_length: 12,
                contest_duration: 10,
                validator_count: validators.len() as u16,
                ticket_attempts: 2,
            },
            run: RunParams::default(),
        };

        let tip = BlockRef {
            id: HeaderId::from(hash::raw(b"tip")),
            slot: 25,
        };
        let mut recent = HashMap::new();
        recent.insert(tip.id, tip);

        let chain = StubChain {
            latest_slot: Cell::new(tip.slot),
            state_root: hash::raw(b"state"),
            entropy: hash::raw(b"eta3"),
            active: validators.clone(),
            pending: validators,
            epoch_root: Cell::new(StubVerifier::commit(&ring_keys)),
            recent: RefCell::new(recent),
            seal_keys: RefCell::new(HashMap::new()),
        };

        Self {
            params,
            chain,
            verifier: StubVerifier,
            genesis: Some(StubGenesis(HeaderId::from(hash::raw(b"genesis")))),
            tip,
        }
    }

    /// Like [`Harness::new`] but mid-rotation: the pending set is disjoint
    /// from the active one and the epoch root commits to the pending keys.
    pub(crate) fn with_distinct_pending() -> Self {
        let mut harness = Self::new();
        let pending: Vec<_> = (10..14).map(make_validator).collect();
        let ring_keys: Vec<_> = pending.iter().map(|v| *v.bandersnatch()).collect();
        harness.chain.pending = pending;
        harness.chain.epoch_root.set(StubVerifier::commit(&ring_keys));
        harness
    }

    pub(crate) fn ctx(&self) -> ValidationContext<'_> {
        ValidationContext {
            params: &self.params,
            clock: &self.chain,
            state: &self.chain,
            genesis: self.genesis.as_ref().map(|g| g as &dyn GenesisProvider),
            recent: &self.chain,
            validators: &self.chain,
            seal_keys: &self.chain,
            entropy: &self.chain,
            verifier: &self.verifier,
        }
    }

    pub(crate) fn tip_slot(&self) -> u64 {
        self.chain.latest_slot.get()
    }

    pub(crate) fn tip_id(&self) -> HeaderId {
        self.tip.id
    }

    pub(crate) fn state_root(&self) -> Buf32 {
        self.chain.state_root
    }

    pub(crate) fn genesis_id(&self) -> HeaderId {
        HeaderId::from(hash::raw(b"genesis"))
    }

    /// Unsigned header extending the tip, no marks.
    pub(crate) fn make_header(&self, slot: u64, author_idx: u16) -> BlockHeader {
        BlockHeader::new(
            self.tip_id(),
            self.state_root(),
            hash::raw(b"extrinsics"),
            slot,
            None,
            None,
            Vec::new(),
            author_idx,
            Buf64::zero(),
        )
    }

    /// Seals `header` in ticket mode and registers the matching winning
    /// ticket as the slot's seal key.
    pub(crate) fn seal_ticket(&self, header: BlockHeader, attempt: u8) -> SealedBlockHeader {
        let key = *self.chain.active[header.author_idx() as usize].bandersnatch();
        self.seal_ticket_with_vrf_key(header, attempt, &key)
    }

    /// Ticket-mode sealing with the entropy VRF made under a different key
    /// than the seal, as on an epoch-transition block where the author is
    /// looked up in the pending set.
    pub(crate) fn seal_ticket_with_vrf_key(
        &self,
        mut header: BlockHeader,
        attempt: u8,
        vrf_key: &Buf32,
    ) -> SealedBlockHeader {
        let key = *self.chain.active[header.author_idx() as usize].bandersnatch();
        let seal_context = context::ticket_seal(&self.chain.entropy, attempt);

        // The signer knows the seal output before signing anything.
        let output = StubVerifier::output(&key, &seal_context);
        header.set_vrf_sig(StubVerifier::forge(vrf_key, &context::entropy(&output), &[]));

        let seal = StubVerifier::forge(&key, &seal_context, &header.seal_message());
        self.chain
            .set_seal_key(header.slot(), SealKey::Ticket(Ticket::new(output, attempt)));
        SealedBlockHeader::new(header, seal)
    }

    /// Seals `header` in fallback mode and registers the author's key as the
    /// slot's fallback seal key.
    pub(crate) fn seal_fallback(&self, mut header: BlockHeader) -> SealedBlockHeader {
        let key = *self.chain.active[header.author_idx() as usize].bandersnatch();
        let seal_context = context::fallback_seal(&self.chain.entropy);

        let output = StubVerifier::output(&key, &seal_context);
        header.set_vrf_sig(StubVerifier::forge(&key, &context::entropy(&output), &[]));

        let seal = StubVerifier::forge(&key, &seal_context, &header.seal_message());
        self.chain
            .set_seal_key(header.slot(), SealKey::Fallback(key));
        SealedBlockHeader::new(header, seal)
    }

    pub(crate) fn make_ticket_sealed(&self, slot: u64, author_idx: u16) -> SealedBlockHeader {
        self.seal_ticket(self.make_header(slot, author_idx), 1)
    }

    pub(crate) fn make_fallback_sealed(&self, slot: u64, author_idx: u16) -> SealedBlockHeader {
        self.seal_fallback(self.make_header(slot, author_idx))
    }
}
