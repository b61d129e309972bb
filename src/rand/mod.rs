//! Cryptographically secure randomness: OS entropy source and unbiased
//! integer sampling.

mod os;
mod uniform;

pub use os::{EntropyError, OsEntropy};
pub use uniform::{EntropySource, random_index};
