//! Check-digit arithmetic for structured payment references.
//!
//! Both functions are pure and deterministic. They expect pre-validated
//! digit/alphanumeric input; callers own that contract (debug-asserted
//! here, not recovered from).

/// Lookup table for the recursive modulo-10 algorithm used by ESR/QRR
/// references (Swiss Payment Standards, annex B).
const MOD10_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Compute the recursive modulo-10 check digit over a digit string.
///
/// Digits are consumed in original left-to-right order with a running
/// carry; each step replaces the carry with `table[(carry + digit) % 10]`.
/// The check digit is `(10 - carry) % 10`.
///
/// ```rust
/// assert_eq!(zahlref::mod10_check_digit("21000000000313947143000901"), 7);
/// ```
pub fn mod10_check_digit(digits: &str) -> u8 {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "mod10 payload must be digits only"
    );
    let carry = digits.bytes().filter(|b| b.is_ascii_digit()).fold(0u8, |carry, b| {
        MOD10_TABLE[usize::from((carry + (b - b'0')) % 10)]
    });
    (10 - carry) % 10
}

/// Compute the two ISO 7064 MOD 97-10 check digits for an `RF` creditor
/// reference (ISO 11649).
///
/// The payload is extended with `271500` — the digit mapping of the
/// rearranged prefix `RF00` (R=27, F=15, placeholder check digits 00) —
/// and reduced modulo 97 digit by digit, so no big-integer arithmetic is
/// needed. The check value is `98 - remainder`, zero-padded to two digits;
/// it is always in 1..=98, never 0 or 99.
///
/// Letters in the payload map to two digits each (A=10 .. Z=35), so
/// alphanumeric payloads are supported.
///
/// ```rust
/// // Published ISO 11649 example: RF18 5390 0754 7034.
/// assert_eq!(zahlref::mod97_check_digits("539007547034"), "18");
/// ```
pub fn mod97_check_digits(payload: &str) -> String {
    let mut remainder: u32 = 0;
    // The trailing "RF00" runs through the same mapping as payload letters.
    for b in payload.bytes().chain(*b"RF00") {
        match b {
            b'0'..=b'9' => remainder = (remainder * 10 + u32::from(b - b'0')) % 97,
            b'A'..=b'Z' => {
                let value = u32::from(b - b'A') + 10;
                remainder = (remainder * 10 + value / 10) % 97;
                remainder = (remainder * 10 + value % 10) % 97;
            }
            _ => debug_assert!(false, "mod97 payload must be alphanumeric"),
        }
    }
    format!("{:02}", 98 - remainder)
}
