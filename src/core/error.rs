//! Error types for engine construction and content registration.
//!
//! Out-of-bounds cells and unknown material names are not errors: the grid
//! treats its border as a wall and lookups return `None`.

use std::fmt;

/// Errors raised while building a world or registering materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid dimensions must both be positive.
    InvalidDimensions {
        /// Requested width in cells.
        width: u32,
        /// Requested height in cells.
        height: u32,
    },
    /// A material with this name is already registered.
    DuplicateName(String),
    /// The registry already holds every id an `ElementId` can express.
    RegistryFull {
        /// Number of definitions already registered.
        count: usize,
    },
    /// The empty material must be registered first, and only at id 0.
    EmptyNotFirst {
        /// Name of the offending definition.
        name: String,
    },
    /// A content bundle could not be parsed.
    InvalidBundle(String),
    /// A bundle element used a physical class name we do not know.
    UnknownClass(String),
    /// A bundle element asked for a behavior we do not provide.
    UnknownBehavior(String),
    /// An engine config document could not be parsed or is inconsistent.
    InvalidConfig(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}: both must be positive")
            }
            Self::DuplicateName(name) => write!(f, "element '{name}' is already registered"),
            Self::RegistryFull { count } => {
                write!(f, "element registry is full ({count} definitions)")
            }
            Self::EmptyNotFirst { name } => write!(
                f,
                "element '{name}': the empty material must be registered first and only once"
            ),
            Self::InvalidBundle(reason) => write!(f, "invalid content bundle: {reason}"),
            Self::UnknownClass(class) => write!(f, "unknown element class: {class}"),
            Self::UnknownBehavior(kind) => write!(f, "unknown behavior kind: {kind}"),
            Self::InvalidConfig(reason) => write!(f, "invalid engine config: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidBundle(e.to_string())
    }
}
