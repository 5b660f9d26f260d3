//! Fuzz target for file loading.
//!
//! Tests that TextBuffer::load rejects invalid UTF-8 without panicking and
//! that accepted input survives a serialize/load cycle.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textcore::TextBuffer;

fuzz_target!(|data: &[u8]| {
    let Ok(buffer) = TextBuffer::load(data) else {
        assert!(std::str::from_utf8(data).is_err());
        return;
    };
    assert!(buffer.line_count() >= 1);

    let reloaded = TextBuffer::load(&buffer.serialize()).expect("serialized text is UTF-8");
    assert!(reloaded.lines().eq(buffer.lines()));
});
