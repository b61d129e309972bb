//! OS entropy via the getrandom(2) syscall.

use std::io;

use super::EntropySource;

/// The kernel CSPRNG could not produce bytes.
///
/// Raised only for hard, non-retryable syscall failures; transient
/// interruptions are retried internally and never surface here.
#[derive(Debug, thiserror::Error)]
#[error("random source unavailable: {0}")]
pub struct EntropyError(#[from] io::Error);

/// Entropy source backed by `getrandom(2)` with no flags, so it blocks
/// until the kernel pool is initialized. Stateless; every draw is an
/// independent request for fresh bytes.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_word(&mut self) -> Result<u64, EntropyError> {
        let mut buf = [0u8; 8];
        let mut filled = 0;

        // EINTR and short reads are transient: keep going until the word
        // is full. Anything else aborts the draw.
        while filled < buf.len() {
            let n = unsafe {
                libc::getrandom(
                    buf[filled..].as_mut_ptr() as *mut libc::c_void,
                    buf.len() - filled,
                    0,
                )
            };

            if n < 0 {
                let err = io::Error::last_os_error();
                if err.raw_os_error() == Some(libc::EINTR) {
                    continue;
                }
                return Err(EntropyError(err));
            }

            filled += n as usize;
        }

        Ok(u64::from_ne_bytes(buf))
    }
}
