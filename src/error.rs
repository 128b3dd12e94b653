//! # Error Types
//!
//! This module defines the error types used throughout the AIS NMEA parsing library.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while parsing an AIS NMEA line.
///
/// Every variant is a hard rejection of the whole line: no partially parsed
/// record or tag block is ever handed back alongside an error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// Splitting the line on `\` produced neither one segment (plain sentence)
    /// nor three segments (tag block framing).
    #[error("expected 1 or 3 backslash-separated segments, found {found}")]
    SegmentCount {
        /// Number of segments found
        found: usize,
    },

    /// The line had three backslash-separated segments, but the first one was
    /// not empty, so the tag block was not at the start of the line.
    #[error("tag block must open the line, found {0:?} before it")]
    MissingTagblockFraming(I),

    /// The segment did not contain exactly one `*` checksum delimiter.
    #[error("expected a single '*' checksum delimiter in {0:?}")]
    ChecksumDelimiter(I),

    /// The sentence body did not have the expected number of comma-separated columns.
    #[error("expected {expected} columns, found {found}")]
    ColumnCount {
        /// The number of columns an AIS sentence carries
        expected: usize,
        /// The number of columns found in the sentence
        found: usize,
    },

    /// A column of the sentence body could not be interpreted.
    ///
    /// Contains the offending column.
    #[error("invalid field {0:?}")]
    InvalidField(I),

    /// The transmitted checksum is not a hexadecimal number.
    #[error("invalid hexadecimal checksum {0:?}")]
    InvalidHex(I),

    /// The checksum of the sentence or tag block was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the content)
    /// and the checksum found after the `*` delimiter.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the content
        expected: u8,
        /// The checksum transmitted with the content
        found: u32,
    },

    /// A tag block entry was not a `key:value` pair with a non-empty key and value.
    #[error("invalid tag block entry {0:?}")]
    InvalidTagblock(I),

    /// The same key appeared twice within one tag block.
    #[error("duplicate tag block key {0:?}")]
    DuplicateKey(I),

    /// A low-level nom parser failed.
    ///
    /// This wraps nom's standard parsing errors.
    #[error("parsing error: {0:?}")]
    ParsingError(E),
}

impl Error<&str> {
    /// Converts an error borrowing the parsed line into one that owns its input.
    ///
    /// Useful whenever the error has to outlive the line it was produced from,
    /// e.g. when parsing through [`FromStr`](std::str::FromStr).
    pub fn into_owned(self) -> Error<String> {
        match self {
            Error::SegmentCount { found } => Error::SegmentCount { found },
            Error::MissingTagblockFraming(i) => Error::MissingTagblockFraming(i.to_owned()),
            Error::ChecksumDelimiter(i) => Error::ChecksumDelimiter(i.to_owned()),
            Error::ColumnCount { expected, found } => Error::ColumnCount { expected, found },
            Error::InvalidField(i) => Error::InvalidField(i.to_owned()),
            Error::InvalidHex(i) => Error::InvalidHex(i.to_owned()),
            Error::ChecksumMismatch { expected, found } => {
                Error::ChecksumMismatch { expected, found }
            }
            Error::InvalidTagblock(i) => Error::InvalidTagblock(i.to_owned()),
            Error::DuplicateKey(i) => Error::DuplicateKey(i.to_owned()),
            Error::ParsingError(e) => {
                Error::ParsingError(nom::error::Error::new(e.input.to_owned(), e.code))
            }
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let err: Error<&str> = Error::ChecksumMismatch {
            expected: 0x13,
            found: 0x19,
        };
        assert_eq!(err.to_string(), "checksum mismatch: calculated 13, found 19");

        let err: Error<&str> = Error::ColumnCount {
            expected: 7,
            found: 8,
        };
        assert_eq!(err.to_string(), "expected 7 columns, found 8");
    }

    #[test]
    fn test_into_owned() {
        let err: Error<&str> = Error::InvalidField("x");
        assert_eq!(err.into_owned(), Error::InvalidField(String::from("x")));
    }
}
