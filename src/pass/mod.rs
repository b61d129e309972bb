//! Password generation: candidate pool building and assembly.

pub mod charset;
mod generate;

pub use generate::{DEFAULT_LENGTH, generate};
