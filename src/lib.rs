//! An implementation of RFC 4122 UUID version 4
//!
//! ```rust
//! use uuid4::uuid4;
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid4::SourceReadError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 `random` bits are taken from the entropy source as they are.
//!
//! # Entropy sources
//!
//! [`V4Generator`] draws its bytes from any [`EntropySource`]. The operating system's secure
//! random number generator backs [`uuid4()`], while [`FixedSource`](source::FixedSource) and
//! [`FailingSource`](source::FailingSource) make the success and error paths reproducible in
//! tests:
//!
//! ```rust
//! use uuid4::{source::FIXED_UUID, V4Generator};
//!
//! let g = V4Generator::fixed();
//! assert_eq!(g.new_uuid()?.to_string(), FIXED_UUID);
//!
//! let g = V4Generator::failing();
//! assert!(g.new_uuid().is_err());
//! # Ok::<(), uuid4::SourceReadError>(())
//! ```
//!
//! # Parsing and validation
//!
//! Any 8-4-4-4-12 hexadecimal string parses regardless of its version; [`Uuid::is_v4`] checks the
//! version and variant fields. The Nil UUID counts as a valid UUIDv4.
//!
//! ```rust
//! use uuid4::Uuid;
//!
//! let x: Uuid = "00010203-0405-4607-8809-0A0B0C0D0E0F".parse()?;
//! assert_eq!(x.to_string(), "00010203-0405-4607-8809-0a0b0c0d0e0f");
//! assert!(x.is_v4());
//! assert!(Uuid::NIL.is_v4());
//! # Ok::<(), uuid4::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `default_gen` enables the [`uuid4()`] entry point function backed by a secure default
//!   generator.
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables conversion from and into [`uuid::Uuid`].

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod source;
#[doc(no_inline)]
pub use source::{EntropySource, SourceReadError};

pub mod generator;
#[doc(no_inline)]
pub use generator::{Generator, V4Generator};

mod default_gen;
#[cfg(feature = "default_gen")]
pub use default_gen::{default_generator, uuid4};
