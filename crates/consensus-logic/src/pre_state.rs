//! Prior-state-root check, run before any epoch-transition side effects are
//! applied.
//!
//! This is deliberately the only read it performs: one state query, one byte
//! comparison, nothing else.

use tracing::warn;

use damson_state::header::Header;

use crate::{context::StateProvider, errors::HeaderError};

/// Checks that the header's declared prior state root matches the root we
/// computed locally.
pub fn validate_pre_state_root(
    header: &impl Header,
    state: &dyn StateProvider,
) -> Result<(), HeaderError> {
    let computed = state.current_state_root()?;
    let expected = *header.state_root();

    if computed != expected {
        warn!(%computed, %expected, "header prior state root mismatch");
        return Err(HeaderError::StateRootMismatch { computed, expected });
    }

    Ok(())
}
