//! Header validation and Safrole consensus verification.
//!
//! This is the gate every candidate block passes before its body is
//! executed.  [`header_validation::validate_header`] runs the full
//! fixed-order pipeline; the sub-validators are independently callable for
//! targeted checks (conformance harnesses validate one failure mode at a
//! time).

pub mod context;
pub mod epoch_transition;
pub mod errors;
pub mod header_validation;
pub mod pre_state;
pub mod seal;
pub mod vrf;

pub use header_validation::validate_header;
pub use pre_state::validate_pre_state_root;
pub use seal::validate_seal_signature;
pub use vrf::validate_vrf_signature;

#[cfg(test)]
mod testutil;
