//! # Tag Blocks
//!
//! A tag block is the optional metadata segment that some AIS receivers and
//! networks prepend to a sentence, framed by backslashes:
//!
//! ```text
//! \g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\!AIVDM,...
//!  |<------------- key:value pairs ------------->|cc|
//! ```
//!
//! The pairs carry their own checksum, computed the same way as the sentence one.

#[cfg(feature = "tag-fields")]
mod fields;

#[cfg(feature = "tag-fields")]
pub use fields::SentenceGrouping;

use std::fmt;

use nom::Err;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, IResult,
    parsing::{checksum, format_checksum, hex_field, split},
};

/// The `key:value` entries of a parsed tag block.
///
/// Entries are kept in the order they appeared on the line. Keys are unique
/// and neither keys nor values are ever empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBlock {
    entries: Vec<(String, String)>,
}

impl TagBlock {
    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in line order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn data(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Builds a tag block from owned entries, checking them like the parser does.
///
/// Keys must be unique, and neither keys nor values may be empty or contain
/// any of the `,`, `:`, `*` or `\` framing characters.
impl TryFrom<Vec<(String, String)>> for TagBlock {
    type Error = Error<String>;

    fn try_from(entries: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut tb = TagBlock::default();
        for (key, value) in entries {
            if !is_entry(&key, &value) {
                return Err(Error::InvalidTagblock(format!("{key}:{value}")));
            }
            if tb.contains_key(&key) {
                return Err(Error::DuplicateKey(key));
            }
            tb.entries.push((key, value));
        }
        Ok(tb)
    }
}

impl From<TagBlock> for Vec<(String, String)> {
    fn from(tb: TagBlock) -> Self {
        tb.entries
    }
}

fn is_entry(key: &str, value: &str) -> bool {
    let framing = [',', ':', '*', '\\'];
    !key.is_empty() && !value.is_empty() && !key.contains(framing) && !value.contains(framing)
}

/// Writes the tag block without its framing backslashes, e.g. `c:1241544035*53`.
///
/// The checksum is recomputed from the written entries.
impl fmt::Display for TagBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        write!(f, "{data}*{}", format_checksum(checksum(data.as_str())))
    }
}

/// Parses the content between the framing backslashes of a tag block.
///
/// The input must be `key:value` pairs separated by commas, followed by `*` and
/// the hexadecimal checksum of everything before the `*`. An empty list of pairs
/// is accepted as long as its checksum (`00`) is present.
///
/// # Errors
///
/// - [`Error::ChecksumDelimiter`] unless there is exactly one `*`
/// - [`Error::InvalidHex`] if the checksum is not hexadecimal
/// - [`Error::ChecksumMismatch`] if the checksum does not match the pairs
/// - [`Error::InvalidTagblock`] for an entry that is not `key:value` with both sides non-empty
/// - [`Error::DuplicateKey`] if a key is repeated
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::tagblock::tagblock;
///
/// let (_, tb) = tagblock("aa:bb,c:d,eeeeee:ffff*3D").unwrap();
/// assert_eq!(tb.len(), 3);
/// assert_eq!(tb.get("eeeeee"), Some("ffff"));
///
/// assert!(tagblock("asdf,").is_err());
/// ```
pub fn tagblock(i: &str) -> IResult<&str, TagBlock> {
    let parts = split(i, '*');
    let &[data, cc] = parts.as_slice() else {
        return Err(Err::Error(Error::ChecksumDelimiter(i)));
    };

    let (_, found) = hex_field(cc)?;
    let expected = checksum(data);
    if found != u32::from(expected) {
        debug!(tagblock = i, expected, found, "tag block checksum mismatch");
        return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
    }

    let mut tb = TagBlock::default();
    for pair in split(data, ',') {
        let (key, value) = match split(pair, ':').as_slice() {
            &[key, value] if is_entry(key, value) => (key, value),
            _ => return Err(Err::Error(Error::InvalidTagblock(pair))),
        };

        if tb.contains_key(key) {
            return Err(Err::Error(Error::DuplicateKey(key)));
        }

        tb.entries.push((key.to_owned(), value.to_owned()));
    }

    Ok(("", tb))
}
