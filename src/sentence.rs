//! # Sentence Body
//!
//! Parser for the AIS sentence itself, i.e. the part of the line after any tag block:
//!
//! ```text
//!         1      2 3 4 5 6                            7
//!         |      | | | | |                            |
//!         !AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13
//! ```
//!
//! 1. Sentence identifier (head), e.g. `!AIVDM`
//! 2. Number of fragments of the whole message
//! 3. Number of this fragment, starting at 1
//! 4. Sequential message ID for multi-fragment messages, may be empty
//! 5. Radio channel, `A` or `B`, may be empty
//! 6. Armored AIS payload
//! 7. Number of fill bits appended to the payload

use nom::Err;
use tracing::debug;

use crate::{
    ChecksumMode, Error, IResult,
    parsing::{checksum, decimal_field, hex_field, split},
};

/// Number of comma-separated columns in an AIS sentence body.
pub const COLUMNS: usize = 7;

/// Zero-copy view of a parsed sentence body, borrowing from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceBody<'a> {
    /// Sentence identifier, including its leading `!` or `$`
    pub head: &'a str,
    /// Number of fragments of the whole message
    pub fragcount: u32,
    /// Number of this fragment, starting at 1
    pub fragnum: u32,
    /// [`None`] when the column is empty
    pub messageid: Option<u32>,
    /// [`None`] when the column is empty
    pub channel: Option<char>,
    /// Armored AIS payload
    pub payload: &'a str,
    /// Number of fill bits appended to the payload
    pub fillbits: u32,
    /// The verified checksum, [`None`] only when it was optional and absent
    pub checksum: Option<u8>,
}

/// Parses a sentence body and verifies its checksum.
///
/// With [`ChecksumMode::Required`] the input must end in `*` and a hexadecimal
/// checksum. With [`ChecksumMode::Optional`] a body without any `*` is also
/// accepted. A checksum that is present is always verified against the XOR of
/// the body, excluding its leading `!` or `$`.
///
/// # Errors
///
/// - [`Error::ChecksumDelimiter`] if the `*` delimiter is missing or repeated
/// - [`Error::ColumnCount`] unless the body has exactly seven columns
/// - [`Error::InvalidField`] for an empty head, a non-numeric count or fill bits
///   column, a non-numeric message ID, or a channel longer than one character
/// - [`Error::InvalidHex`] if the checksum is not hexadecimal
/// - [`Error::ChecksumMismatch`] if the checksum does not match the body
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::{ChecksumMode, sentence::sentence_body};
///
/// let line = "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E";
/// let (_, body) = sentence_body(line, ChecksumMode::Required).unwrap();
///
/// assert_eq!(body.head, "!AIVDM");
/// assert_eq!(body.fragcount, 2);
/// assert_eq!(body.messageid, Some(3));
/// assert_eq!(body.checksum, Some(0x3E));
/// ```
pub fn sentence_body(i: &str, cc: ChecksumMode) -> IResult<&str, SentenceBody<'_>> {
    let parts = split(i, '*');
    let (data, cc) = match (parts.as_slice(), cc) {
        (&[data, cc], _) => (data, Some(cc)),
        (&[data], ChecksumMode::Optional) => (data, None),
        _ => return Err(Err::Error(Error::ChecksumDelimiter(i))),
    };

    let cols = split(data, ',');
    let &[head, fragcount, fragnum, messageid, channel, payload, fillbits] = cols.as_slice()
    else {
        return Err(Err::Error(Error::ColumnCount {
            expected: COLUMNS,
            found: cols.len(),
        }));
    };

    if head.is_empty() {
        return Err(Err::Error(Error::InvalidField(head)));
    }
    let (_, fragcount) = decimal_field(fragcount)?;
    let (_, fragnum) = decimal_field(fragnum)?;
    let messageid = match messageid {
        "" => None,
        messageid => Some(decimal_field(messageid)?.1),
    };
    let channel = match channel.as_bytes() {
        [] => None,
        &[channel] => Some(char::from(channel)),
        _ => return Err(Err::Error(Error::InvalidField(channel))),
    };
    let (_, fillbits) = decimal_field(fillbits)?;

    let checksum = match cc {
        Some(cc) => {
            let (_, found) = hex_field(cc)?;
            let expected = checksum(data);
            if found != u32::from(expected) {
                debug!(sentence = i, expected, found, "sentence checksum mismatch");
                return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
            }
            Some(expected)
        }
        None => None,
    };

    Ok((
        "",
        SentenceBody {
            head,
            fragcount,
            fragnum,
            messageid,
            channel,
            payload,
            fillbits,
            checksum,
        },
    ))
}
