//! # AIS NMEA Parser
//!
//! This library parses AIS sentences carried in NMEA 0183 lines, optionally
//! preceded by a tag block:
//!
//! ```text
//! !AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13
//! \g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13
//! ```
//!
//! Both the tag block and the sentence checksums are verified. The AIS payload
//! is left armored for a downstream decoder; only its message type is exposed.
//! Multi-fragment messages are not reassembled.
//!
//! ## Usage
//!
//! ```rust
//! use aisnmea_parser::AisNmea;
//!
//! let mut msg = AisNmea::new("!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E")
//!     .unwrap();
//! assert_eq!(msg.fragcount(), 2);
//! assert_eq!(msg.messageid(), Some(3));
//! assert_eq!(msg.ais_msgtype(), Some(5));
//! assert!(msg.tagblock().is_none());
//!
//! // records can be reused for the next line
//! msg.parse("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").unwrap();
//! assert_eq!(msg.payload(), "177KQJ5000G?tO`K>RA1wUbN0TKH");
//! ```
//!
//! ## Cargo Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for records and tag blocks.
//! - `tag-fields`: typed accessors for the standard tag block codes
//!   (timestamp, grouping, line count, ...).

mod ais_type;
mod aisnmea;
pub mod error;
pub mod parsing;
pub mod sentence;
pub mod tagblock;

pub use ais_type::ais_msgtype;
pub use aisnmea::*;
pub use error::{Error, IResult};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
