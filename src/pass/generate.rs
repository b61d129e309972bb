//! Password assembly from a candidate pool.

use zeroize::Zeroizing;

use crate::rand::{EntropyError, EntropySource, random_index};

/// Default password length, matching the reference generator.
pub const DEFAULT_LENGTH: usize = 22;

/// Generate a password of `length` bytes, each drawn independently and
/// uniformly from `chars`.
///
/// On an entropy failure nothing is returned: the partially filled buffer
/// is dropped (and scrubbed by `Zeroizing`) rather than ever reaching the
/// caller. The happy-path buffer is likewise scrubbed when the caller
/// releases it.
///
/// `chars` must be non-empty; see [`random_index`].
pub fn generate<S: EntropySource>(
    source: &mut S,
    chars: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>, EntropyError> {
    let mut password = Zeroizing::new(Vec::with_capacity(length));

    for _ in 0..length {
        let r = random_index(source, chars.len() as u64)?;
        password.push(chars[r as usize]);
    }

    Ok(password)
}
