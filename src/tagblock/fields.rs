//! Typed views of the tag codes defined by NMEA 0183 4.10.
//!
//! None of these affect whether a line parses: a malformed or missing value
//! simply reads as [`None`].

use nom::{
    Parser,
    character::complete::{char, u32, u64},
    error::ErrorKind,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::TagBlock;
use crate::{IResult, parsing::consumed};

/// Longest destination or text value the standard allows.
const MAX_TEXT_LEN: usize = 15;

/// Sentence grouping (`g` code), e.g. `1-2-73874`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceGrouping {
    /// Position of this sentence in the group, starting at 1
    pub sentence_number: u32,
    /// Number of sentences in the group
    pub total_sentences: u32,
    /// Identifier shared by all sentences of the group
    pub group_id: u32,
}

fn grouping(i: &str) -> IResult<&str, SentenceGrouping> {
    let (i, (sentence_number, _, total_sentences, _, group_id)) =
        (u32, char('-'), u32, char('-'), u32).parse(i)?;

    Ok((
        i,
        SentenceGrouping {
            sentence_number,
            total_sentences,
            group_id,
        },
    ))
}

fn bounded(value: &str) -> Option<heapless::String<MAX_TEXT_LEN>> {
    let mut text = heapless::String::new();
    text.push_str(value).ok()?;
    Some(text)
}

impl TagBlock {
    /// Receiver timestamp (`c` code).
    ///
    /// The value is UNIX time in seconds. Some sources send milliseconds instead;
    /// anything beyond the 32-bit seconds range is read as milliseconds.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        let (_, value) = consumed(u64::<_, nom::error::Error<&str>>, ErrorKind::Digit)
            .parse(self.get("c")?)
            .ok()?;

        if value > u64::from(u32::MAX) {
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(value) * 1_000_000).ok()
        } else {
            OffsetDateTime::from_unix_timestamp(value as i64).ok()
        }
    }

    /// Sentence grouping (`g` code).
    pub fn grouping(&self) -> Option<SentenceGrouping> {
        consumed(grouping, ErrorKind::Eof)
            .parse(self.get("g")?)
            .ok()
            .map(|(_, grouping)| grouping)
    }

    /// Line count (`n` code).
    pub fn line_count(&self) -> Option<u32> {
        self.number("n")
    }

    /// Relative time (`r` code).
    pub fn relative_time(&self) -> Option<u32> {
        self.number("r")
    }

    /// Source station (`s` code).
    pub fn source(&self) -> Option<&str> {
        self.get("s")
    }

    /// Destination station (`d` code), at most 15 characters.
    pub fn destination(&self) -> Option<heapless::String<MAX_TEXT_LEN>> {
        bounded(self.get("d")?)
    }

    /// Free text (`t` code, or `i` for information), at most 15 characters.
    pub fn text(&self) -> Option<heapless::String<MAX_TEXT_LEN>> {
        bounded(self.get("t").or_else(|| self.get("i"))?)
    }

    fn number(&self, key: &str) -> Option<u32> {
        consumed(u32::<_, nom::error::Error<&str>>, ErrorKind::Digit)
            .parse(self.get(key)?)
            .ok()
            .map(|(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::SentenceGrouping;
    use crate::tagblock::tagblock;

    #[test]
    fn test_standard_codes() {
        let (_, tb) = tagblock("g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A").unwrap();

        assert_eq!(tb.timestamp(), Some(datetime!(2009-05-05 17:20:35 UTC)));
        assert_eq!(
            tb.grouping(),
            Some(SentenceGrouping {
                sentence_number: 1,
                total_sentences: 2,
                group_id: 73874,
            })
        );
        assert_eq!(tb.line_count(), Some(157036));
        assert_eq!(tb.source(), Some("r003669945"));
        assert_eq!(tb.relative_time(), None);
        assert_eq!(tb.destination(), None);
        assert_eq!(tb.text(), None);
    }

    #[test]
    fn test_millisecond_timestamp() {
        let (_, tb) = tagblock("c:1241544035000*6C").unwrap();
        assert_eq!(tb.timestamp(), Some(datetime!(2009-05-05 17:20:35 UTC)));
    }

    #[test]
    fn test_malformed_values_read_as_none() {
        let (_, tb) = tagblock("g:1-2,s:x*6E").unwrap();
        assert_eq!(tb.grouping(), None);
        assert_eq!(tb.source(), Some("x"));

        let (_, tb) = tagblock("d:ABCDEFGHIJKLMNOP,t:hello*4E").unwrap();
        assert_eq!(tb.destination(), None);
        assert_eq!(tb.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_information_text() {
        let (_, tb) = tagblock("r:42,i:note,d:dest*55").unwrap();
        assert_eq!(tb.relative_time(), Some(42));
        assert_eq!(tb.text().as_deref(), Some("note"));
        assert_eq!(tb.destination().as_deref(), Some("dest"));
    }
}
