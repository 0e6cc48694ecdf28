//! Integration with [`std::io::Read`] types.

use std::io::{self, Read};

use super::{EntropySource, SourceReadError};
use crate::V4Generator;

/// An adapter that implements [`EntropySource`] for a factory of [`Read`] types.
///
/// The factory is invoked once per [`fill`](EntropySource::fill) and the returned reader is read
/// until the buffer is full. Running out of data is reported as
/// [`SourceReadError::ShortRead`]; other I/O errors as [`SourceReadError::Io`].
#[derive(Clone, Debug)]
pub struct ReaderSource<F>(F);

impl<F> ReaderSource<F> {
    /// Wraps `factory`.
    pub const fn new(factory: F) -> Self {
        Self(factory)
    }
}

impl<F, R> EntropySource for ReaderSource<F>
where
    F: Fn() -> R,
    R: Read,
{
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        let mut reader = (self.0)();
        let mut filled = 0;
        while filled < dest.len() {
            match reader.read(&mut dest[filled..]) {
                Ok(0) => {
                    log::trace!("reader exhausted after {} of {} bytes", filled, dest.len());
                    return Err(SourceReadError::ShortRead {
                        expected: dest.len(),
                        actual: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

impl<F, R> V4Generator<ReaderSource<F>>
where
    F: Fn() -> R,
    R: Read,
{
    /// Creates a generator object that reads from a new reader returned by `factory` for each
    /// UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::{fs, io};
    /// use uuid4::V4Generator;
    ///
    /// let g = V4Generator::with_reader(|| io::repeat(0x5a));
    /// assert_eq!(g.new_uuid()?.to_string(), "5a5a5a5a-5a5a-4a5a-9a5a-5a5a5a5a5a5a");
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let g = V4Generator::with_reader(|| fs::File::open("/dev/urandom").unwrap());
    /// assert!(g.new_uuid()?.is_v4());
    /// # }
    /// # Ok::<(), uuid4::SourceReadError>(())
    /// ```
    pub const fn with_reader(factory: F) -> Self {
        Self::new(ReaderSource::new(factory))
    }
}
