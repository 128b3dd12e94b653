use crate::{AisNmea, tagblock::TagBlock};

const LINE: &str = "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13";

#[test]
fn test_record_round_trip() {
    let msg = AisNmea::new(LINE).unwrap();

    let json = serde_json::to_string(&msg).unwrap();
    let back: AisNmea = serde_json::from_str(&json).unwrap();

    assert_eq!(back, msg);
    assert_eq!(back.tagblock_value("s"), Some("r003669945"));
}

#[test]
fn test_tagblock_entries_in_line_order() {
    let msg = AisNmea::new(LINE).unwrap();
    let tb = msg.tagblock().unwrap();

    assert_eq!(
        serde_json::to_string(tb).unwrap(),
        r#"[["g","1-2-73874"],["n","157036"],["s","r003669945"],["c","1241544035"]]"#
    );
}

#[test]
fn test_tagblock_rejects_invalid_entries() {
    let err = serde_json::from_str::<TagBlock>(r#"[["a","1"],["a","2"]]"#).unwrap_err();
    assert!(err.to_string().starts_with(r#"duplicate tag block key "a""#), "{err}");

    let err = serde_json::from_str::<TagBlock>(r#"[["","1"]]"#).unwrap_err();
    assert!(err.to_string().starts_with(r#"invalid tag block entry ":1""#), "{err}");

    let json = serde_json::to_string(&AisNmea::new(LINE).unwrap()).unwrap();
    let json = json.replace(r#"["n","157036"]"#, r#"["g","157036"]"#);
    assert!(serde_json::from_str::<AisNmea>(&json).is_err());
}
