//! Error types for chemnet_core.
//!
//! Only caller contract violations are errors; numerical trouble inside a
//! step is clamped and logged instead.

use thiserror::Error;

/// Contract violations reported at the network API boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The caller passed a different number of sensor values than input roles.
    #[error("expected {expected} input values, got {actual}")]
    InputArity { expected: usize, actual: usize },

    /// The role layout reserves more slots than there are chemicals.
    #[error("role layout needs {required} chemicals, network has {available}")]
    RoleOutOfBounds { required: usize, available: usize },

    /// A reaction refers to a chemical outside the arena.
    #[error("reaction references chemical {index}, arena holds {len}")]
    UnknownChemical { index: usize, len: usize },

    /// A reaction has an empty side.
    #[error("reaction {index} has an empty side")]
    EmptySide { index: usize },
}

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
