//! Core - errors, host logging and randomness shared by every layer

pub mod console;
pub mod error;
pub mod random;

pub use error::EngineError;
pub use random::{shade_hash, SimRng};
