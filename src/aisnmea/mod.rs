//! # AIS NMEA Records
//!
//! [`AisNmea`] owns everything parsed from one line: the optional tag block and
//! the seven sentence columns with their checksum.

mod parser;

pub use parser::{AisNmeaParser, AisNmeaParserBuilder, ChecksumMode, LineEndingMode};

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, ais_msgtype,
    parsing::{checksum, format_checksum},
    sentence::SentenceBody,
    tagblock::TagBlock,
};

/// A parsed AIS NMEA sentence, with its tag block if the line had one.
///
/// A default record holds no data and exists only to be parsed into with
/// [`AisNmea::parse`]. Cloning produces a fully independent copy.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::AisNmea;
///
/// let msg = AisNmea::new(
///     "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13",
/// )
/// .unwrap();
///
/// assert_eq!(msg.tagblock_value("g"), Some("1-2-73874"));
/// assert_eq!(msg.head(), "!AIVDM");
/// assert_eq!(msg.messageid(), None);
/// assert_eq!(msg.channel(), Some('B'));
/// assert_eq!(msg.ais_msgtype(), Some(1));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AisNmea {
    tagblock: Option<TagBlock>,
    head: String,
    fragcount: u32,
    fragnum: u32,
    messageid: Option<u32>,
    channel: Option<char>,
    payload: String,
    fillbits: u32,
    checksum: Option<u8>,
}

impl AisNmea {
    /// Parses a line with the default parser settings.
    ///
    /// See [`AisNmeaParser::parse_into`] for the accepted shapes.
    pub fn new(line: &str) -> Result<Self, Error<&str>> {
        AisNmeaParser::default().parse(line)
    }

    /// Re-parses this record from `line` with the default parser settings.
    ///
    /// Any previous tag block is discarded. If parsing fails, the record's
    /// contents are unspecified and it should be parsed again or dropped.
    pub fn parse<'a>(&mut self, line: &'a str) -> Result<(), Error<&'a str>> {
        AisNmeaParser::default().parse_into(self, line)
    }

    /// Returns an independent copy of this record.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub(crate) fn set_body(&mut self, body: SentenceBody<'_>) {
        self.head.clear();
        self.head.push_str(body.head);
        self.fragcount = body.fragcount;
        self.fragnum = body.fragnum;
        self.messageid = body.messageid;
        self.channel = body.channel;
        self.payload.clear();
        self.payload.push_str(body.payload);
        self.fillbits = body.fillbits;
        self.checksum = body.checksum;
    }

    /// The tag block, if the line had one.
    pub fn tagblock(&self) -> Option<&TagBlock> {
        self.tagblock.as_ref()
    }

    /// Looks up a tag block value. Always [`None`] when there is no tag block.
    pub fn tagblock_value(&self, key: &str) -> Option<&str> {
        self.tagblock.as_ref()?.get(key)
    }

    /// Sentence identifier, including its leading `!` or `$`.
    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn fragcount(&self) -> u32 {
        self.fragcount
    }

    pub fn fragnum(&self) -> u32 {
        self.fragnum
    }

    pub fn messageid(&self) -> Option<u32> {
        self.messageid
    }

    pub fn channel(&self) -> Option<char> {
        self.channel
    }

    /// The armored AIS payload, left undecoded.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn fillbits(&self) -> u32 {
        self.fillbits
    }

    /// The transmitted checksum, already verified against the sentence.
    ///
    /// Only [`None`] when parsed with [`ChecksumMode::Optional`] from a sentence
    /// that carried no checksum.
    pub fn checksum(&self) -> Option<u8> {
        self.checksum
    }

    /// AIS message type, read from the first payload character.
    ///
    /// [`None`] for an unknown type or an empty payload.
    pub fn ais_msgtype(&self) -> Option<u8> {
        self.payload.chars().next().and_then(ais_msgtype)
    }
}

/// Writes the record back as a line, tag block first.
///
/// Numbers are written without leading zeros and both checksums are
/// recomputed from the written text, so the sentence checksum may differ from
/// the one that was parsed. Only a record filled by a successful parse
/// re-encodes to a line that parses again; a default record does not.
impl fmt::Display for AisNmea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tagblock) = &self.tagblock {
            write!(f, "\\{tagblock}\\")?;
        }

        let messageid = self.messageid.map(|id| id.to_string()).unwrap_or_default();
        let channel = self.channel.map(String::from).unwrap_or_default();
        let body = format!(
            "{},{},{},{},{},{},{}",
            self.head, self.fragcount, self.fragnum, messageid, channel, self.payload, self.fillbits
        );

        write!(f, "{body}*{}", format_checksum(checksum(body.as_str())))
    }
}

impl FromStr for AisNmea {
    type Err = Error<String>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AisNmea::new(s).map_err(|e| e.into_owned())
    }
}
