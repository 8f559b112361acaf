//! Safrole lottery types: tickets, epoch/winners marks and the per-slot seal
//! key.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use damson_primitives::buf::Buf32;

/// A lottery entry: the VRF output that scored it and the attempt index it
/// was submitted under.
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
pub struct Ticket {
    id: Buf32,
    attempt: u8,
}

impl Ticket {
    pub fn new(id: Buf32, attempt: u8) -> Self {
        Self { id, attempt }
    }

    pub fn id(&self) -> &Buf32 {
        &self.id
    }

    pub fn attempt(&self) -> u8 {
        self.attempt
    }
}

/// Key pair a validator is declared under in an epoch mark.
///
/// Only the bandersnatch key enters the ring commitment; the ed25519 key
/// rides along so peers can address the validator without a state lookup.
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
pub struct EpochValidatorKeys {
    pub bandersnatch: Buf32,
    pub ed25519: Buf32,
}

/// Header annotation present on the first block of an epoch, declaring the
/// entropy snapshots and the next epoch's validator keys.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct EpochMark {
    entropy: Buf32,
    tickets_entropy: Buf32,
    validators: Vec<EpochValidatorKeys>,
}

impl EpochMark {
    pub fn new(entropy: Buf32, tickets_entropy: Buf32, validators: Vec<EpochValidatorKeys>) -> Self {
        Self {
            entropy,
            tickets_entropy,
            validators,
        }
    }

    pub fn entropy(&self) -> &Buf32 {
        &self.entropy
    }

    pub fn tickets_entropy(&self) -> &Buf32 {
        &self.tickets_entropy
    }

    pub fn validators(&self) -> &[EpochValidatorKeys] {
        &self.validators
    }

    /// The bandersnatch component of each declared validator, in order.
    /// This is exactly what the epoch's ring commitment commits to.
    pub fn bandersnatch_keys(&self) -> Vec<Buf32> {
        self.validators.iter().map(|v| v.bandersnatch).collect()
    }
}

/// Header annotation declaring the outcome of the ticket contest, one winner
/// per slot of the next epoch.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct WinnersMark {
    tickets: Vec<Ticket>,
}

impl WinnersMark {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// The key a slot must be sealed under.
///
/// Constructed once at the seal-key-service boundary so the validation code
/// can dispatch on the variant instead of sniffing shapes.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub enum SealKey {
    /// A winning lottery ticket; the sealer proves ownership via ring VRF.
    Ticket(Ticket),

    /// Deterministic fallback assignment, a raw bandersnatch key.
    Fallback(Buf32),
}

impl SealKey {
    pub fn is_ticket(&self) -> bool {
        matches!(self, SealKey::Ticket(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SealKey::Fallback(_))
    }
}
