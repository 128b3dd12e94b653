use crate::{AisNmea, Error};

#[test]
fn test_rejections() {
    let lines = [
        "",
        "asdfasdfasdf",
        "\\aaa\\bbb",
        "\\\\",
        "a,b,c,d,e,f,g,h*CC",
        "*",
        // bad checksum in tag block
        "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*40\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13",
        // bad checksum in body
        "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*19",
        "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*8E",
    ];

    for line in lines {
        assert!(AisNmea::new(line).is_err(), "{line:?}");
    }
}

#[test]
fn test_segment_count() {
    assert_eq!(AisNmea::new(""), Err(Error::SegmentCount { found: 0 }));
    assert_eq!(AisNmea::new("a\\b"), Err(Error::SegmentCount { found: 2 }));
    assert_eq!(
        AisNmea::new("\\a\\b\\c"),
        Err(Error::SegmentCount { found: 4 })
    );
}

#[test]
fn test_tagblock_must_lead() {
    assert_eq!(
        AisNmea::new("x\\c:1241544035*53\\!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C"),
        Err(Error::MissingTagblockFraming("x"))
    );
}

#[test]
fn test_error_stages() {
    assert_eq!(
        AisNmea::new("\\aaa\\bbb"),
        Err(Error::ChecksumDelimiter("aaa"))
    );
    assert_eq!(AisNmea::new("\\\\"), Err(Error::ChecksumDelimiter("")));
    assert_eq!(
        AisNmea::new("a,b,c,d,e,f,g,h*CC"),
        Err(Error::ColumnCount {
            expected: 7,
            found: 8,
        })
    );
    assert_eq!(
        AisNmea::new(
            "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*8E"
        ),
        Err(Error::ChecksumMismatch {
            expected: 0x3E,
            found: 0x8E,
        })
    );
}

#[test]
fn test_empty_tagblock() {
    let msg = AisNmea::new("\\*00\\!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").unwrap();
    assert!(msg.tagblock().is_some_and(|tb| tb.is_empty()));
    assert_eq!(msg.tagblock_value("c"), None);
}

#[test]
fn test_checksum_trailing_junk() {
    let line = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";

    for (line, cc) in [
        (format!("{line} "), "5C "),
        (format!("{line}\r"), "5C\r"),
        (format!("{line}\n"), "5C\n"),
    ] {
        assert_eq!(AisNmea::new(&line), Err(Error::InvalidHex(cc)), "{line:?}");
    }
}
