use crate::AisNmea;

#[test]
fn test_duplicate_with_tagblock() {
    let original = AisNmea::new(
        "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13",
    )
    .unwrap();

    let dup = original.duplicate();
    let expected = original.clone();
    drop(original);

    assert_eq!(dup, expected);
    assert_eq!(dup.tagblock_value("g"), Some("1-2-73874"));
    assert_eq!(dup.tagblock_value("n"), Some("157036"));
    assert_eq!(dup.tagblock_value("s"), Some("r003669945"));
    assert_eq!(dup.tagblock_value("c"), Some("1241544035"));
    assert_eq!(dup.head(), "!AIVDM");
    assert_eq!(dup.fragcount(), 1);
    assert_eq!(dup.fragnum(), 1);
    assert_eq!(dup.messageid(), None);
    assert_eq!(dup.channel(), Some('B'));
    assert_eq!(dup.payload(), "15N4cJ`005Jrek0H@9n`DW5608EP");
    assert_eq!(dup.fillbits(), 0);
    assert_eq!(dup.checksum(), Some(0x13));
    assert_eq!(dup.ais_msgtype(), Some(1));
}

#[test]
fn test_duplicate_without_tagblock() {
    let original = AisNmea::new("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").unwrap();
    let dup = original.duplicate();
    drop(original);

    assert_eq!(dup.tagblock_value("ABC"), None);
    assert_eq!(dup.channel(), Some('B'));
    assert_eq!(dup.payload(), "177KQJ5000G?tO`K>RA1wUbN0TKH");
}

#[test]
fn test_duplicate_is_independent() {
    let mut original = AisNmea::new(
        "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13",
    )
    .unwrap();
    let dup = original.duplicate();

    original
        .parse("!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E")
        .unwrap();

    assert_eq!(dup.tagblock_value("g"), Some("1-2-73874"));
    assert_eq!(dup.payload(), "15N4cJ`005Jrek0H@9n`DW5608EP");
    assert_ne!(dup, original);
}

#[test]
fn test_reparse_is_idempotent() {
    let line = "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13";
    let mut msg = AisNmea::default();

    msg.parse(line).unwrap();
    let first = msg.clone();
    msg.parse(line).unwrap();

    assert_eq!(msg, first);
}
