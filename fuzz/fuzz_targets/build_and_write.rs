#![no_main]
use libfuzzer_sys::fuzz_target;
use lwdom::{is_valid_identifier, new_element, FormatConfig};

// Each line becomes either an element name, an attribute (`key=value`) on
// the current element, or a text child.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(root) = new_element("root") else {
        return;
    };
    let mut current = root.clone();
    for line in s.lines() {
        if let Some((key, value)) = line.split_once('=') {
            assert_eq!(current.set_attribute(key, value).is_ok(), is_valid_identifier(key));
        } else if let Ok(element) = new_element(line) {
            current.append_child(&element);
            current = element;
        } else {
            current.append_text(line);
        }
    }
    let first = root.write_to_string();
    assert_eq!(first, root.write_to_string());
    let _ = root.write_to_string_with(&FormatConfig::default().without_indent());
});
