#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = zahlref::PaymentAccount::parse(s);
        let _ = zahlref::is_valid_iban_structure(s);
    }
});
