//! Registry error types.

use crate::registry::SessionId;
use derive_more::{Display, Error};

/// Errors returned by [`SessionRegistry`](crate::SessionRegistry) operations.
///
/// All registry operations are synchronous and deterministic, so none of
/// these are transient; retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// The guess was empty or longer than one character. Rejected before any
    /// mutation takes place.
    #[display("guess must be exactly one character")]
    InvalidLetter,

    /// No session is registered under the given ID.
    #[display("session {id} not found")]
    NotFound {
        /// The ID that was looked up.
        id: SessionId,
    },

    /// A freshly allocated session ID was already registered. Signals an
    /// internal inconsistency; surfaced rather than silently dropping the
    /// allocated ID.
    #[display("session {id} was already registered during creation")]
    Registration {
        /// The ID that collided.
        id: SessionId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::InvalidLetter.to_string(),
            "guess must be exactly one character"
        );
        assert_eq!(
            RegistryError::NotFound { id: 7 }.to_string(),
            "session 7 not found"
        );
    }
}
