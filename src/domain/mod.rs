//! Domain - material definitions and the registry that owns them

pub mod content;
pub mod elements;
