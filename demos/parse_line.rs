use aisnmea_parser::{AisNmeaParserBuilder, LineEndingMode};
use tracing_subscriber::EnvFilter;

const LINES: &[&str] = &[
    "\\g:1-2-73874,n:157036,s:r003669945,c:1241544035*4A\\!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13\r\n",
    "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E\r\n",
    "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*8E\r\n",
    "\\aaa\\bbb\r\n",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let parser = AisNmeaParserBuilder::new()
        .line_ending_mode(LineEndingMode::Required)
        .build();

    for line in LINES {
        match parser.parse(line) {
            Ok(msg) => {
                println!(
                    "{} fragment {}/{} type {:?} source {:?}",
                    msg.head(),
                    msg.fragnum(),
                    msg.fragcount(),
                    msg.ais_msgtype(),
                    msg.tagblock_value("s"),
                );
            }
            Err(e) => {
                println!("Parsing error occurred: {e}");
            }
        }
    }
}
