#![no_main]

use handling_meta_editor::{parse_handling_meta, write_handling_meta};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Alles, was geparst wird, muss sich verlustfrei wieder schreiben lassen
    if let Ok(records) = parse_handling_meta(text) {
        let written = write_handling_meta(&records);
        let reparsed = parse_handling_meta(&written).expect("Export muss wieder parsen");
        assert_eq!(records, reparsed);
    }
});
