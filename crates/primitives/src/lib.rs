//! Common primitive types shared across the consensus layer.
//!
//! Kept free of any chain-state or validation logic so that every other
//! crate can depend on it without cycles.

pub mod buf;
pub mod hash;
pub mod params;
