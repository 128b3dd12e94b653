//! # AIS Message Types
//!
//! The first character of an AIS payload is the six-bit armored value of the
//! message type, so the type can be read without decoding the payload.

/// Armored payload characters and the AIS message type they encode.
#[rustfmt::skip]
static AIS_TYPES: [(char, u8); 28] = [
    ('1', 1), ('2', 2), ('3', 3), ('4', 4), ('5', 5), ('6', 6), ('7', 7),
    ('8', 8), ('9', 9), (':', 10), (';', 11), ('<', 12), ('=', 13), ('>', 14),
    ('?', 15), ('@', 16), ('A', 17), ('B', 18), ('C', 19), ('D', 20), ('E', 21),
    ('F', 22), ('G', 23), ('H', 24), ('I', 25), ('J', 26), ('K', 27), ('L', 28),
];

/// Maps the first character of an AIS payload to its message type (1 to 28).
///
/// Returns [`None`] for characters that do not start any known message type.
///
/// # Examples
///
/// ```rust
/// use aisnmea_parser::ais_msgtype;
///
/// assert_eq!(ais_msgtype('3'), Some(3));
/// assert_eq!(ais_msgtype('I'), Some(25));
/// assert_eq!(ais_msgtype('}'), None);
/// ```
pub fn ais_msgtype(first: char) -> Option<u8> {
    AIS_TYPES
        .iter()
        .find(|(armored, _)| *armored == first)
        .map(|&(_, msgtype)| msgtype)
}
