//! Unbiased integer sampling over an arbitrary limit.

use super::EntropyError;

/// A source of cryptographically secure machine words.
///
/// Production code uses [`super::OsEntropy`]; tests substitute scripted
/// sources to pin down the sampling behavior.
pub trait EntropySource {
    /// Fill one 64-bit word with fresh random bytes.
    fn next_word(&mut self) -> Result<u64, EntropyError>;
}

/// Return an integer uniformly distributed over `[0, limit)`.
///
/// Reducing a raw word modulo `limit` skews toward low residues whenever
/// `limit` does not divide the word range evenly. Rejection sampling fixes
/// that: words above the largest multiple of `limit` that fits in a word
/// are discarded and redrawn, so every residue is equally represented in
/// the accepted region. The rejection band holds fewer than `limit` values
/// out of 2^64, so redraws are vanishingly rare for realistic limits.
///
/// # Panics
///
/// Panics if `limit` is zero. Callers validate the alphabet before
/// sampling begins.
pub fn random_index<S: EntropySource>(source: &mut S, limit: u64) -> Result<u64, EntropyError> {
    assert!(limit > 0, "random_index requires a non-zero limit");

    let threshold = u64::MAX / limit * limit;

    loop {
        let word = source.next_word()?;
        if word > threshold {
            continue;
        }
        return Ok(word % limit);
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::rand::OsEntropy;

    /// Feeds a fixed script of words, then errors out.
    struct Scripted(Vec<u64>);

    impl EntropySource for Scripted {
        fn next_word(&mut self) -> Result<u64, EntropyError> {
            if self.0.is_empty() {
                return Err(EntropyError::from(io::Error::other("script exhausted")));
            }
            Ok(self.0.remove(0))
        }
    }

    struct Broken;

    impl EntropySource for Broken {
        fn next_word(&mut self) -> Result<u64, EntropyError> {
            Err(EntropyError::from(io::Error::from_raw_os_error(libc::ENOSYS)))
        }
    }

    #[test]
    fn stays_in_range() {
        let mut src = OsEntropy;
        for limit in [1, 2, 7, 62, 94, 1000, u64::MAX] {
            for _ in 0..100 {
                let r = random_index(&mut src, limit).unwrap();
                assert!(r < limit, "{r} out of range for limit {limit}");
            }
        }
    }

    #[test]
    fn limit_one_is_always_zero() {
        let mut src = OsEntropy;
        assert_eq!(random_index(&mut src, 1).unwrap(), 0);
    }

    #[test]
    fn rejects_biased_tail() {
        // limit 10: threshold is the largest multiple of 10 <= u64::MAX.
        // Words above it would map to residues 0..=5 only, so they must be
        // discarded in favor of the next draw.
        let limit = 10;
        let threshold = u64::MAX / limit * limit;
        let mut src = Scripted(vec![threshold + 1, u64::MAX, 42]);

        assert_eq!(random_index(&mut src, limit).unwrap(), 2);
        // Both tail words were consumed before the accepted draw.
        assert!(src.0.is_empty());
    }

    #[test]
    fn accepts_threshold_itself() {
        let limit = 10;
        let threshold = u64::MAX / limit * limit;
        let mut src = Scripted(vec![threshold]);
        assert_eq!(random_index(&mut src, limit).unwrap(), 0);
    }

    #[test]
    fn hard_error_propagates() {
        assert!(random_index(&mut Broken, 7).is_err());
    }

    #[test]
    #[should_panic(expected = "non-zero limit")]
    fn zero_limit_panics() {
        let _ = random_index(&mut OsEntropy, 0);
    }

    /// Chi-square goodness of fit over 10,000 real draws with limit 7.
    /// With 6 degrees of freedom the statistic exceeds 35 with probability
    /// below 1e-5, so a failure here means the sampler is broken, not
    /// unlucky.
    #[test]
    fn residues_are_uniform() {
        const DRAWS: usize = 10_000;
        const LIMIT: u64 = 7;

        let mut src = OsEntropy;
        let mut counts = [0usize; LIMIT as usize];
        for _ in 0..DRAWS {
            counts[random_index(&mut src, LIMIT).unwrap() as usize] += 1;
        }

        let expected = DRAWS as f64 / LIMIT as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        assert!(chi2 < 35.0, "chi-square {chi2:.2}, counts {counts:?}");
    }
}
