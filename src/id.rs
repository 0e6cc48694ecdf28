use std::{fmt, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Lower-case hexadecimal digits used by the encoder.
const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Positions of the four hyphens in the 8-4-4-4-12 representation.
const SEPARATORS: [usize; 4] = [8, 13, 18, 23];

/// Position of the first of the two hex digits of each byte in the 8-4-4-4-12 representation.
///
/// ```text
/// aabbccdd-eeff-gghh-iijj-kkllmmnnoopp
/// ```
const HEX_OFFSETS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Marker for bytes that are not hexadecimal digits in [`HEX_VALUES`].
const INVALID: u8 = 0xff;

/// Maps every byte value to its hexadecimal digit value, or to [`INVALID`].
const HEX_VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `0b10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns `true` if the UUID carries the version 4 and variant `0b10` bit patterns.
    ///
    /// The Nil UUID is also accepted, as it is the sentinel for an absent identifier. The check
    /// only looks at the two fields and says nothing about the randomness of the other bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// assert!(Uuid::NIL.is_v4());
    /// assert!("2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse::<Uuid>()?.is_v4());
    /// assert!(!"01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?.is_v4());
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub const fn is_v4(&self) -> bool {
        self.is_nil() || (self.0[6] >> 4 == 0b0100 && self.0[8] >> 6 == 0b10)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12 canonical hexadecimal string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::Uuid;
    ///
    /// let x = "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// assert_eq!(format!("{}", y), "2ca4b2ce-6c13-40d4-bccf-37d222820f6f");
    /// # Ok::<(), uuid4::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [b'-'; 36];
        for (e, &offset) in self.0.iter().zip(HEX_OFFSETS.iter()) {
            buffer[offset] = DIGITS[(e >> 4) as usize];
            buffer[offset + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Both lower-case and upper-case digits are accepted. The version and variant fields are not
    /// checked; use [`Uuid::is_v4`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] describing the first violation found, checking the length first,
    /// then the hyphens, then the digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4::{ParseError, Uuid};
    ///
    /// let x = Uuid::parse_str("00010203-0405-4607-8809-0a0b0c0d0e0f")?;
    /// assert_eq!(x.as_bytes()[15], 0x0f);
    ///
    /// let e = Uuid::parse_str("00010203-0405-4607-8809_0a0b0c0d0e0f");
    /// assert_eq!(e, Err(ParseError::MissingSeparator(23)));
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError::InvalidLength(src.len()));
        }

        if let Some(&pos) = SEPARATORS.iter().find(|&&pos| src[pos] != b'-') {
            return Err(ParseError::MissingSeparator(pos));
        }

        let mut dst = [0u8; 16];
        for (e, &offset) in dst.iter_mut().zip(HEX_OFFSETS.iter()) {
            let hi = HEX_VALUES[src[offset] as usize];
            let lo = HEX_VALUES[src[offset + 1] as usize];
            if hi == INVALID {
                return Err(ParseError::InvalidHexDigit(offset));
            } else if lo == INVALID {
                return Err(ParseError::InvalidHexDigit(offset + 1));
            }
            *e = (hi << 4) | lo;
        }
        Ok(Self(dst))
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse_str(&src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

/// UUID variant field values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0b0xxx`, reserved for NCS backward compatibility.
    Var0,
    /// `0b10xx`, the variant of RFC 4122 UUIDs.
    Var10,
    /// `0b110x`, reserved for Microsoft backward compatibility.
    Var110,
    /// `0b111x`, reserved for future definition.
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
///
/// Each variant carries the byte offset (or the length) that violated the 8-4-4-4-12 format.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not 36 bytes long.
    #[error("invalid length: expected 36 bytes, found {0}")]
    InvalidLength(usize),

    /// The byte at the offset is not the expected hyphen.
    #[error("missing separator: expected '-' at position {0}")]
    MissingSeparator(usize),

    /// The byte at the offset is not a hexadecimal digit.
    #[error("invalid hex digit at position {0}")]
    InvalidHexDigit(usize),
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{ParseError, Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u8; 16], &'static str)] {
        &[
            ([0x00; 16], "00000000-0000-0000-0000-000000000000"),
            ([0xff; 16], "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                [
                    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x46, 0x07, 0x88, 0x09, 0x0a, 0x0b, 0x0c,
                    0x0d, 0x0e, 0x0f,
                ],
                "00010203-0405-4607-8809-0a0b0c0d0e0f",
            ),
            (
                [
                    0x2c, 0xa4, 0xb2, 0xce, 0x6c, 0x13, 0x40, 0xd4, 0xbc, 0xcf, 0x37, 0xd2, 0x22,
                    0x82, 0x0f, 0x6f,
                ],
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            ),
            (
                [
                    0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c, 0x0c,
                    0x07, 0x39, 0x8f,
                ],
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (bytes, text) in prepare_cases() {
            let from_bytes = Uuid::from_bytes(*bytes);
            assert_eq!(Ok(from_bytes), text.parse());
            assert_eq!(Ok(from_bytes), text.to_uppercase().parse());
            assert_eq!(&from_bytes.encode() as &str, *text);
            assert_eq!(&from_bytes.to_string(), text);
            assert_eq!(&from_bytes.encode().to_string(), text);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_bytes).to_string(), text);
        }
    }

    /// Encodes to canonical lower-case format
    #[test]
    fn encodes_to_canonical_lower_case_format() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        let mut x = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210u128;
        for _ in 0..1_000 {
            let e = Uuid::from(x);
            assert!(re.is_match(&e.encode()));
            assert_eq!(e.to_string().parse(), Ok(e));
            x = x.rotate_left(7).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            ("", ParseError::InvalidLength(0)),
            (
                "12345678-1234-1234-1234-1234567890",
                ParseError::InvalidLength(34),
            ),
            (
                "12345678-1234-1234-1234-12345678901",
                ParseError::InvalidLength(35),
            ),
            (
                "12345678-1234-1234-1234-1234567890123",
                ParseError::InvalidLength(37),
            ),
            (
                "12345678-1234-1234-1234-12345678901g",
                ParseError::InvalidHexDigit(35),
            ),
            (
                "12345678-1234-1234-1234-g23456789012",
                ParseError::InvalidHexDigit(24),
            ),
            (
                "------------------------------------",
                ParseError::InvalidHexDigit(0),
            ),
            (
                "123456781234-1234-1234-1234567890120",
                ParseError::MissingSeparator(8),
            ),
            (
                "-12345678-1234-1234-12341234567890120",
                ParseError::InvalidLength(37),
            ),
            (
                "12345678-1234-1234-12341-23456789012",
                ParseError::MissingSeparator(23),
            ),
            (
                "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                ParseError::MissingSeparator(8),
            ),
            (
                " 0180a8f0-5b82-75b4-9fef-ecad657c30b",
                ParseError::MissingSeparator(8),
            ),
            (
                "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
                ParseError::InvalidHexDigit(16),
            ),
            (
                "{0180a8f0-5b84-7438-ab50-f06ac2e5e08}",
                ParseError::InvalidLength(37),
            ),
            (
                "0180a8f0+5b84-7438-ab50-f06d3ea24429",
                ParseError::MissingSeparator(8),
            ),
            // multi-byte characters count by bytes
            (
                "0180a8f0-5b84-7438-ab50-f06d3ea2442é",
                ParseError::InvalidLength(37),
            ),
            (
                "0180a8f0-5b84-7438-ab50-f06d3ea244é",
                ParseError::InvalidHexDigit(34),
            ),
        ];

        for (text, err) in cases {
            assert_eq!(text.parse::<Uuid>(), Err(err), "{:?}", text);
            assert_eq!(Uuid::try_from(text.to_owned()), Err(err), "{:?}", text);
        }
    }

    /// Describes each parse failure distinctly
    #[test]
    fn describes_each_parse_failure_distinctly() {
        assert_eq!(
            ParseError::InvalidLength(35).to_string(),
            "invalid length: expected 36 bytes, found 35"
        );
        assert_eq!(
            ParseError::MissingSeparator(13).to_string(),
            "missing separator: expected '-' at position 13"
        );
        assert_eq!(
            ParseError::InvalidHexDigit(2).to_string(),
            "invalid hex digit at position 2"
        );
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Accepts Nil UUID as vacuously valid v4
    #[test]
    fn accepts_nil_uuid_as_vacuously_valid_v4() {
        assert!(Uuid::NIL.is_v4());
        assert_eq!(Uuid::NIL.version(), None);
    }

    /// Checks version and variant bits of v4
    #[test]
    fn checks_version_and_variant_bits_of_v4() {
        let mut bytes = [0u8; 16];

        bytes[6] = 0x30;
        assert!(!Uuid::from(bytes).is_v4());

        bytes[6] = 0x40;
        bytes[8] = 0x70;
        assert!(!Uuid::from(bytes).is_v4());

        bytes[8] = 0xc0;
        assert!(!Uuid::from(bytes).is_v4());

        for b8 in [0x80, 0x9f, 0xa5, 0xbf] {
            bytes[6] = 0x4f;
            bytes[8] = b8;
            assert!(Uuid::from(bytes).is_v4());
        }

        assert!(!Uuid::MAX.is_v4());
        assert!("2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
            .parse::<Uuid>()
            .unwrap()
            .is_v4());
        assert!(!"017f22e2-79b0-7cc3-98c4-dc0c0c07398f"
            .parse::<Uuid>()
            .unwrap()
            .is_v4());
    }

    /// Reports variant and version fields
    #[test]
    fn reports_variant_and_version_fields() {
        let cases = [
            ("00000000-0000-4000-0000-000000000000", Variant::Var0, None),
            ("00000000-0000-4000-7fff-000000000000", Variant::Var0, None),
            ("00000000-0000-4000-8000-000000000000", Variant::Var10, Some(4)),
            ("00000000-0000-7000-bfff-000000000000", Variant::Var10, Some(7)),
            ("00000000-0000-4000-c000-000000000000", Variant::Var110, None),
            ("00000000-0000-4000-dfff-000000000000", Variant::Var110, None),
            ("00000000-0000-4000-e000-000000000000", Variant::VarReserved, None),
            ("ffffffff-ffff-ffff-ffff-ffffffffffff", Variant::VarReserved, None),
        ];

        for (text, variant, version) in cases {
            let e = text.parse::<Uuid>().unwrap();
            assert_eq!(e.variant(), variant, "{}", text);
            assert_eq!(e.version(), version, "{}", text);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (bytes, _) in prepare_cases() {
            let e = Uuid::from(*bytes);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(AsRef::<[u8]>::as_ref(&e), &bytes[..]);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(String::from(e)), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);

            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
