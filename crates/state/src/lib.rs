//! Consensus-layer chain types: block headers, Safrole marks, seal keys and
//! validator key records, plus the epoch/phase arithmetic they obey.

pub mod epoch;
pub mod header;
pub mod id;
pub mod safrole;
pub mod validator;

pub mod prelude;
