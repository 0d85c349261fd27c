//! Spatial - grid storage

pub mod grid;
