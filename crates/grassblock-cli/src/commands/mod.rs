//! Command implementations.

pub mod generate;
pub mod json_output;
