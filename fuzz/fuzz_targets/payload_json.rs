//! Arbitrary bytes through the payload parser must never panic: either a
//! validated payload or a typed shape error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use traitdex::payload::FragmentPayload;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = FragmentPayload::from_json(raw);
    }
});
