//! Systems - the rules that move material around

pub mod behaviors;
