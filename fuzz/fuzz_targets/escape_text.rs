#![no_main]
use libfuzzer_sys::fuzz_target;
use lwdom::escape_text;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let escaped = escape_text(s);
        let stripped = ["&amp;", "&quot;", "&apos;", "&lt;", "&gt;"]
            .iter()
            .fold(escaped.to_string(), |acc, entity| acc.replace(entity, ""));
        assert!(!stripped.contains(['&', '"', '\'', '<', '>']));
    }
});
