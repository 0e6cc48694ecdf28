//! Default generator and entry point function.

#![cfg(feature = "default_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "default_gen")))]

use crate::source::{SecureSource, SourceReadError};
use crate::{Uuid, V4Generator};

/// The generator behind [`uuid4()`], built at compile time and never mutated.
static DEFAULT_GENERATOR: V4Generator<SecureSource> = V4Generator::secure();

/// Returns the generator used by [`uuid4()`].
///
/// Prefer holding a [`V4Generator`] of your own where the entropy source should be replaceable,
/// e.g. in tests.
pub fn default_generator() -> &'static V4Generator<SecureSource> {
    &DEFAULT_GENERATOR
}

/// Generates a UUIDv4 object using the operating system's secure random number generator.
///
/// # Errors
///
/// Returns [`SourceReadError`] if the operating system could not supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid4::uuid4()?.to_string();
/// # Ok::<(), uuid4::SourceReadError>(())
/// ```
pub fn uuid4() -> Result<Uuid, SourceReadError> {
    DEFAULT_GENERATOR.new_uuid()
}
