//! Integration with `rand` (v0.8) crate.

use std::sync::{Mutex, PoisonError};

use super::{EntropySource, SourceReadError};
use crate::V4Generator;
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
///
/// The wrapped generator is guarded by a mutex, so the adapter can be shared between threads
/// whenever the generator is [`Send`].
#[derive(Debug, Default)]
pub struct Adapter<T>(Mutex<T>);

impl<T> Adapter<T> {
    /// Wraps `rng`.
    pub const fn new(rng: T) -> Self {
        Self(Mutex::new(rng))
    }

    /// Consumes the adapter, returning the wrapped generator.
    pub fn into_inner(self) -> T {
        self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: RngCore> EntropySource for Adapter<T> {
    fn fill(&self, dest: &mut [u8]) -> Result<(), SourceReadError> {
        // poisoning does not invalidate the RNG state
        let mut rng = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use uuid4::V4Generator;
    ///
    /// let g = V4Generator::with_rand08(StdRng::seed_from_u64(42));
    /// assert!(g.new_uuid()?.is_v4());
    /// # Ok::<(), uuid4::SourceReadError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter::new(rng))
    }
}
