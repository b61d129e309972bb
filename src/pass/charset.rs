//! Character class alphabets and candidate pool construction.

pub const LOWERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes contribute to the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classes {
    pub lower: bool,
    pub upper: bool,
    pub number: bool,
    pub symbol: bool,
}

impl Default for Classes {
    fn default() -> Self {
        Classes {
            lower: true,
            upper: true,
            number: true,
            symbol: false,
        }
    }
}

/// Build the candidate pool by concatenating the enabled classes in
/// canonical order: lower, upper, number, symbol. No deduplication.
///
/// All classes disabled yields an empty pool, which the caller must
/// reject before sampling.
pub fn build(classes: Classes) -> Vec<u8> {
    let mut chars = Vec::new();

    if classes.lower {
        chars.extend_from_slice(LOWERS);
    }
    if classes.upper {
        chars.extend_from_slice(UPPERS);
    }
    if classes.number {
        chars.extend_from_slice(NUMBERS);
    }
    if classes.symbol {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}
