//! Entropy sources for the UUIDv4 generator.

use std::{io, sync::Arc};

use rand::{rngs::OsRng, RngCore};

pub mod with_rand08;
pub mod with_reader;

/// The string representation of the UUID generated from the default [`FixedSource`].
pub const FIXED_UUID: &str = "00010203-0405-4607-8809-0a0b0c0d0e0f";

/// A trait that defines the minimum entropy source interface for [`V4Generator`].
///
/// An implementation either fills the whole buffer or fails; the contents of `dest` are
/// unspecified after an error and must be discarded by the caller.
///
/// [`V4Generator`]: crate::V4Generator
pub trait EntropySource {
    /// Fills `dest` entirely with data.
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        (**self).fill(dest)
    }
}

/// Error reading from an entropy source.
#[derive(Debug, thiserror::Error)]
pub enum SourceReadError {
    /// The source ran out of data before filling the buffer.
    #[error("short read from entropy source: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// The number of bytes requested.
        expected: usize,
        /// The number of bytes the source supplied.
        actual: usize,
    },

    /// The underlying reader failed.
    #[error("entropy source I/O error: {0}")]
    Io(#[from] io::Error),

    /// The underlying random number generator failed.
    #[error("random number generator error: {0}")]
    Rng(#[from] rand::Error),
}

/// The cryptographically secure entropy source backed by the operating system.
///
/// Reads are delegated to [`OsRng`], which is safe for concurrent use.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SecureSource;

impl EntropySource for SecureSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// An entropy source that supplies the same 16 bytes on every read.
///
/// This is useful only for testing. The generator built on [`FixedSource::default()`] always
/// produces [`FIXED_UUID`].
///
/// # Examples
///
/// ```rust
/// use uuid4::{source::FIXED_UUID, V4Generator};
///
/// let g = V4Generator::fixed();
/// assert_eq!(g.new_uuid()?.to_string(), FIXED_UUID);
/// assert_eq!(g.new_uuid()?, g.new_uuid()?);
/// # Ok::<(), uuid4::SourceReadError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FixedSource([u8; 16]);

impl FixedSource {
    /// Creates a source that supplies `bytes`.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl Default for FixedSource {
    fn default() -> Self {
        Self::new([
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ])
    }
}

impl EntropySource for FixedSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        if dest.len() > self.0.len() {
            return Err(SourceReadError::ShortRead {
                expected: dest.len(),
                actual: self.0.len(),
            });
        }
        dest.copy_from_slice(&self.0[..dest.len()]);
        Ok(())
    }
}

/// An entropy source that fails on every read as if it had reached the end of its data.
///
/// This is useful only for testing error paths.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct FailingSource;

impl EntropySource for FailingSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        Err(SourceReadError::ShortRead {
            expected: dest.len(),
            actual: 0,
        })
    }
}
