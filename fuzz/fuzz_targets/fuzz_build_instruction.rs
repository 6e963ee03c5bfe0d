#![no_main]

use libfuzzer_sys::fuzz_target;
use zahlref::{InstructionDraft, build_instruction};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Split the input into the draft's fields; short inputs leave fields empty.
    let mut parts = s.split('\n');
    let draft = InstructionDraft {
        amount_text: parts.next().unwrap_or("").to_string(),
        currency: parts.next().unwrap_or("").to_string(),
        scheme: parts.next().unwrap_or("").to_string(),
        account: parts.next().unwrap_or("").to_string(),
        preset_reference: parts.next().map(str::to_string),
        document_id: parts.next().unwrap_or("").to_string(),
        remittance: parts.next().map(str::to_string),
    };

    // Must not panic — errors are fine, panics are bugs.
    let _ = build_instruction(&draft);
});
