pub use crate::{
    header::{BlockHeader, Header, SealedBlockHeader},
    id::HeaderId,
    safrole::{EpochMark, EpochValidatorKeys, SealKey, Ticket, WinnersMark},
    validator::ValidatorKeys,
};
