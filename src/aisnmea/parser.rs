use nom::{Finish, error::ErrorKind, error::ParseError};
use tracing::{debug, trace};

use crate::{
    AisNmea, Error,
    parsing::split,
    sentence::sentence_body,
    tagblock::tagblock,
};

/// Defines how the parser should handle the sentence checksum.
///
/// Tag blocks always carry a checksum; this only governs the `*CC` suffix of the
/// sentence body itself.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    #[default]
    /// Checksum is required and must be present.
    ///
    /// The parser will fail if no `*CC` checksum is found at the end of the sentence.
    /// This is the standard behavior for AIS receivers.
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode for sources that strip checksums, such as some logging tools.
    Optional,
}

/// Defines how the parser should handle CRLF line endings.
///
/// Lines are expected to be isolated by the caller, so by default a trailing
/// `\r\n` is rejected rather than stripped.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    /// CRLF line ending is required and must be present.
    ///
    /// The parser will fail if the line does not end with `\r\n`.
    /// Use this mode when feeding raw lines read from a serial port or log file.
    Required,

    /// CRLF line ending is stripped if present.
    Optional,

    #[default]
    /// CRLF line ending is forbidden and must not be present.
    ///
    /// The parser will fail if the line ends with `\r\n`.
    Forbidden,
}

/// Configures an [`AisNmeaParser`].
///
/// It uses the builder pattern; the defaults ([`ChecksumMode::Required`] and
/// [`LineEndingMode::Forbidden`]) are what [`AisNmea::new`] and [`AisNmea::parse`] use.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::{AisNmeaParserBuilder, ChecksumMode, LineEndingMode};
///
/// let parser = AisNmeaParserBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
///
/// let msg = parser.parse("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0\r\n").unwrap();
/// assert_eq!(msg.checksum(), None);
/// assert_eq!(msg.ais_msgtype(), Some(1));
///
/// // a present checksum is still verified
/// assert!(parser.parse("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5D\r\n").is_err());
/// // and the line ending is mandatory
/// assert!(parser.parse("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").is_err());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct AisNmeaParserBuilder {
    /// Checksum mode for the parser.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl AisNmeaParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Line ending mode: [`LineEndingMode::Forbidden`]
    pub fn new() -> Self {
        AisNmeaParserBuilder {
            checksum_mode: ChecksumMode::Required,
            line_ending_mode: LineEndingMode::Forbidden,
        }
    }

    /// Sets the checksum mode for the sentence body.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    pub fn build(self) -> AisNmeaParser {
        AisNmeaParser {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
        }
    }
}

/// A configured AIS NMEA line parser.
///
/// Cheap to copy and holds no state between lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct AisNmeaParser {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
}

impl AisNmeaParser {
    /// Parses `line` into a new record.
    ///
    /// On failure no record is produced.
    pub fn parse<'a>(&self, line: &'a str) -> Result<AisNmea, Error<&'a str>> {
        let mut msg = AisNmea::default();
        self.parse_into(&mut msg, line)?;
        Ok(msg)
    }

    /// Parses `line` into an existing record, replacing everything it held.
    ///
    /// The line is split on `\`: a single segment is a plain sentence, while three
    /// segments are an empty framing segment, a tag block and the sentence. On
    /// failure the record's contents are unspecified and must not be relied upon.
    pub fn parse_into<'a>(&self, msg: &mut AisNmea, line: &'a str) -> Result<(), Error<&'a str>> {
        let result = self.dispatch(msg, line);

        match &result {
            Ok(()) => trace!(
                head = msg.head(),
                fragnum = msg.fragnum(),
                fragcount = msg.fragcount(),
                tagblock = msg.tagblock().is_some(),
                "parsed AIS NMEA line"
            ),
            Err(e) => debug!(line, error = %e, "rejected AIS NMEA line"),
        }

        result
    }

    fn dispatch<'a>(&self, msg: &mut AisNmea, line: &'a str) -> Result<(), Error<&'a str>> {
        msg.tagblock = None;

        let line = self.line_ending(line)?;
        let segments = split(line, '\\');

        let sentence = match segments.as_slice() {
            &[sentence] => sentence,
            &["", tb, sentence] => {
                let (_, tb) = tagblock(tb).finish()?;
                msg.tagblock = Some(tb);
                sentence
            }
            &[framing, _, _] => return Err(Error::MissingTagblockFraming(framing)),
            segments => {
                return Err(Error::SegmentCount {
                    found: segments.len(),
                });
            }
        };

        let (_, body) = sentence_body(sentence, self.checksum_mode).finish()?;
        msg.set_body(body);

        Ok(())
    }

    fn line_ending<'a>(&self, line: &'a str) -> Result<&'a str, Error<&'a str>> {
        match (self.line_ending_mode, line.strip_suffix("\r\n")) {
            (LineEndingMode::Required | LineEndingMode::Optional, Some(stripped)) => Ok(stripped),
            (LineEndingMode::Optional | LineEndingMode::Forbidden, None) => Ok(line),
            _ => Err(Error::from_error_kind(line, ErrorKind::CrLf)),
        }
    }
}
