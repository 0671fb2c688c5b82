#![no_main]

use libfuzzer_sys::fuzz_target;
use nos_crypto_data::Record;

fuzz_target!(|data: &str| {
    // Arbitrary text must parse or fail cleanly - never panic
    if let Ok(record) = Record::try_from(data) {
        // Anything that parsed must serialize again
        let _ = nos_crypto_data::to_text(&record);
    }
});
