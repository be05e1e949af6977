//! Input document parsing and output document serialization (spec §6).

pub mod input;
pub mod output;
