//! Shared machinery for puzzle solutions.

pub mod memo;
pub mod point;
pub mod search;
