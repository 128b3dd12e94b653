//! # Parsing Utilities
//!
//! Building blocks shared by the tag block and sentence body parsers: the NMEA
//! checksum, the delimited-string splitter, and parsers for single numeric
//! fields that must consume their whole column.

use nom::{
    AsBytes, Err, Input, Mode, OutputMode, PResult, Parser,
    character::complete::{hex_digit1, u32},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{Error, IResult};

/// Splits `input` on every occurrence of `delim`.
///
/// Empty fields are preserved, including leading and trailing ones, so the
/// number of fields is always one more than the number of delimiters. The one
/// exception is the empty string, which yields no fields at all: "nothing" is
/// distinct from "one empty column".
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::parsing::split;
///
/// assert_eq!(split(",aaa,,b,", ','), vec!["", "aaa", "", "b", ""]);
/// assert_eq!(split("", ','), Vec::<&str>::new());
/// ```
pub fn split(input: &str, delim: char) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }

    input.split(delim).collect()
}

/// Calculates the NMEA 0183 checksum for the given content.
///
/// The checksum is the XOR of every byte in the content. A leading `!` or `$`
/// sentence marker is not part of the checksummed data and is skipped, so the
/// same function serves both a full sentence body and a tag block body.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::parsing::checksum;
///
/// assert_eq!(checksum(""), 0);
/// assert_eq!(checksum("g:1-2-73874,n:157036,s:r003669945,c:1241544035"), 0x4A);
/// assert_eq!(checksum("!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0"), 0x13);
/// ```
pub fn checksum<I>(input: I) -> u8
where
    I: AsBytes,
{
    let bytes = input.as_bytes();
    let bytes = match bytes.first() {
        Some(b'!' | b'$') => &bytes[1..],
        _ => bytes,
    };

    bytes
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::parsing::format_checksum;
///
/// assert_eq!(format_checksum(0x4A), "4A");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Parses a transmitted checksum column as a hexadecimal number.
///
/// Either case is accepted and the whole column must be made of hex digits.
/// Anything else fails with [`Error::InvalidHex`].
pub fn hex_field(field: &str) -> IResult<&str, u32> {
    let invalid = |_: Err<Error<&str>>| Err::Error(Error::InvalidHex(field));

    // hex_u32 silently stops after eight digits
    if field.len() > 8 {
        return Err(Err::Error(Error::InvalidHex(field)));
    }

    let (_, digits) = consumed(hex_digit1, ErrorKind::IsA)
        .parse(field)
        .map_err(invalid)?;

    hex_u32.parse(digits).map_err(invalid)
}

/// Parses a base-10 column that must consist of digits only.
///
/// Fails with [`Error::InvalidField`] on an empty column, a sign, or any
/// trailing non-digit content.
pub fn decimal_field(field: &str) -> IResult<&str, u32> {
    consumed(u32, ErrorKind::Digit)
        .parse(field)
        .map_err(|_: Err<Error<&str>>| Err::Error(Error::InvalidField(field)))
}

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with error kind `e` if any input remains afterwards.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
