//! UUIDv4 generator and related types.

use crate::source::{EntropySource, FailingSource, FixedSource, SecureSource, SourceReadError};
use crate::Uuid;

/// A trait for types that produce a new UUID on each call.
pub trait Generator {
    /// Generates a new UUID object, or returns the error that prevented it.
    fn new_uuid(&self) -> Result<Uuid, SourceReadError>;
}

/// Represents a UUIDv4 generator that draws 16 bytes from an [`EntropySource`] for each UUID.
///
/// The generator holds no state other than its source, so it can be shared between threads
/// whenever the source can. Each call makes exactly one read attempt; retrying on failure is up to
/// the caller.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid4::V4Generator;
///
/// let g = sync::Arc::new(V4Generator::secure());
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.new_uuid().unwrap(), i);
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<S> {
    /// The entropy source used by the generator.
    source: S,
}

impl<S> V4Generator<S> {
    /// Creates a generator instance.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the entropy source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning the entropy source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: EntropySource> V4Generator<S> {
    /// Generates a new UUIDv4 object.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the entropy source if it could not supply 16 bytes. No
    /// partially filled UUID is ever returned.
    pub fn new_uuid(&self) -> Result<Uuid, SourceReadError> {
        let mut bytes = [0u8; 16];
        if let Err(err) = self.source.fill(&mut bytes) {
            log::debug!("could not read entropy for UUIDv4: {}", err);
            return Err(err);
        }
        Ok(Uuid::from(stamp_v4(bytes)))
    }
}

impl V4Generator<SecureSource> {
    /// Creates a generator backed by the operating system's secure random number generator.
    pub const fn secure() -> Self {
        Self::new(SecureSource)
    }
}

impl V4Generator<FixedSource> {
    /// Creates a generator that always produces
    /// [`FIXED_UUID`](crate::source::FIXED_UUID). This is useful only for testing.
    pub fn fixed() -> Self {
        Self::new(FixedSource::default())
    }
}

impl V4Generator<FailingSource> {
    /// Creates a generator that always fails. This is useful only for testing.
    pub const fn failing() -> Self {
        Self::new(FailingSource)
    }
}

impl<S: EntropySource> Generator for V4Generator<S> {
    fn new_uuid(&self) -> Result<Uuid, SourceReadError> {
        V4Generator::new_uuid(self)
    }
}

/// Sets the version bits to `0100` and the variant bits to `10`, keeping the other bits.
const fn stamp_v4(mut bytes: [u8; 16]) -> [u8; 16] {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}
