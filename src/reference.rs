//! Structured payment references — QRR, SCOR, and unreferenced payments.

use serde::{Deserialize, Serialize};

use crate::checksum::{mod10_check_digit, mod97_check_digits};

/// Total length of a QR reference: 26 payload digits + 1 check digit.
pub const QRR_LEN: usize = 27;

/// Maximum length of a creditor reference: `RF` + 2 check digits + 21
/// alphanumeric payload characters.
pub const SCOR_MAX_LEN: usize = 25;

/// Payload width used when deriving a SCOR reference from a document id.
const SCOR_PAYLOAD_WIDTH: usize = 8;

/// Reference scheme selector, as configured on the billing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceScheme {
    /// Swiss 27-digit QR reference; requires a QR-IBAN.
    Qrr,
    /// ISO 11649 structured creditor reference.
    Scor,
    /// No structured reference.
    Non,
}

impl ReferenceScheme {
    /// Scheme code as it appears on the payment part.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Qrr => "QRR",
            Self::Scor => "SCOR",
            Self::Non => "NON",
        }
    }

    /// Parse from a scheme code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "QRR" => Some(Self::Qrr),
            "SCOR" => Some(Self::Scor),
            "NON" => Some(Self::Non),
            _ => None,
        }
    }
}

/// A resolved payment reference.
///
/// A closed variant type: a QRR variant can only exist with a 27-digit
/// payload produced by derivation or a format-checked preset, so invalid
/// scheme/payload combinations are unrepresentable downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentReference {
    /// 27-digit QR reference; the last digit checksums the first 26.
    Qrr(String),
    /// Creditor reference: `RF`, two check digits, alphanumeric payload.
    Scor(String),
    /// No reference; the payment part carries an empty reference field.
    None,
}

impl PaymentReference {
    /// Literal string form as placed on the payment part.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Qrr(reference) | Self::Scor(reference) => reference,
            Self::None => "",
        }
    }

    /// The scheme this reference belongs to.
    pub fn scheme(&self) -> ReferenceScheme {
        match self {
            Self::Qrr(_) => ReferenceScheme::Qrr,
            Self::Scor(_) => ReferenceScheme::Scor,
            Self::None => ReferenceScheme::Non,
        }
    }
}

/// Derive a reference for `document_id` under the given scheme.
///
/// The numeric digits of the document identifier form the payload:
/// left-zero-padded to 26 for QRR (the appended check digit brings the
/// total to [`QRR_LEN`]) and to 8 for SCOR. Identifiers with more digits
/// than the payload width keep their rightmost digits.
pub fn derive_reference(scheme: ReferenceScheme, document_id: &str) -> PaymentReference {
    match scheme {
        ReferenceScheme::Non => PaymentReference::None,
        ReferenceScheme::Qrr => {
            let payload = numeric_payload(document_id, QRR_LEN - 1);
            let check = mod10_check_digit(&payload);
            PaymentReference::Qrr(format!("{payload}{check}"))
        }
        ReferenceScheme::Scor => {
            let payload = numeric_payload(document_id, SCOR_PAYLOAD_WIDTH);
            let check = mod97_check_digits(&payload);
            PaymentReference::Scor(format!("RF{check}{payload}"))
        }
    }
}

/// Digits of `document_id`, left-zero-padded (or right-truncated) to `width`.
fn numeric_payload(document_id: &str, width: usize) -> String {
    let digits: String = document_id.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > width {
        digits[digits.len() - width..].to_string()
    } else {
        format!("{digits:0>width$}")
    }
}

/// Whether `reference` has the QR reference shape: exactly 27 digits.
pub fn is_qrr_format(reference: &str) -> bool {
    reference.len() == QRR_LEN && reference.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `reference` has the creditor reference shape: `RF`, two check
/// digits, then at least one alphanumeric character, 25 characters at most.
pub fn is_scor_format(reference: &str) -> bool {
    let b = reference.as_bytes();
    (5..=SCOR_MAX_LEN).contains(&b.len())
        && b.starts_with(b"RF")
        && b[2].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4..].iter().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_code_round_trip() {
        for scheme in [ReferenceScheme::Qrr, ReferenceScheme::Scor, ReferenceScheme::Non] {
            assert_eq!(ReferenceScheme::from_code(scheme.code()), Some(scheme));
        }
        assert_eq!(ReferenceScheme::from_code("INVALID"), None);
        assert_eq!(ReferenceScheme::from_code("qrr"), None);
    }

    #[test]
    fn derives_27_digit_qrr() {
        let reference = derive_reference(ReferenceScheme::Qrr, "RE-2024-017");
        let PaymentReference::Qrr(digits) = &reference else {
            panic!("expected QRR, got {reference:?}");
        };
        assert_eq!(digits.len(), QRR_LEN);
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        // Payload is the id's digits, left-padded; check digit appended.
        assert!(digits.starts_with("000000000000000000"));
        assert!(digits[..QRR_LEN - 1].ends_with("2024017"));
        let expected = mod10_check_digit(&digits[..QRR_LEN - 1]);
        assert_eq!(digits.as_bytes()[QRR_LEN - 1] - b'0', expected);
    }

    #[test]
    fn derives_scor_with_padded_payload() {
        let reference = derive_reference(ReferenceScheme::Scor, "Invoice 421");
        let PaymentReference::Scor(code) = &reference else {
            panic!("expected SCOR, got {reference:?}");
        };
        assert_eq!(code.len(), 2 + 2 + 8);
        assert!(code.starts_with("RF"));
        assert!(code.ends_with("00000421"));
        assert!(is_scor_format(code));
    }

    #[test]
    fn derives_empty_for_non() {
        let reference = derive_reference(ReferenceScheme::Non, "RE-2024-017");
        assert_eq!(reference, PaymentReference::None);
        assert_eq!(reference.as_str(), "");
        assert_eq!(reference.scheme(), ReferenceScheme::Non);
    }

    #[test]
    fn oversized_document_id_keeps_rightmost_digits() {
        let id = "9".repeat(30);
        let reference = derive_reference(ReferenceScheme::Qrr, &id);
        assert_eq!(reference.as_str().len(), QRR_LEN);

        let reference = derive_reference(ReferenceScheme::Scor, "123456789012");
        assert!(reference.as_str().ends_with("56789012"));
        assert_eq!(reference.as_str().len(), 12);
    }

    #[test]
    fn qrr_format_predicate() {
        assert!(is_qrr_format("210000000003139471430009017"));
        assert!(!is_qrr_format("21000000000313947143000901")); // 26 digits
        assert!(!is_qrr_format("21000000000313947143000901X"));
        assert!(!is_qrr_format(""));
    }

    #[test]
    fn scor_format_predicate() {
        assert!(is_scor_format("RF18539007547034"));
        assert!(is_scor_format("RF0000000421"));
        assert!(!is_scor_format("RF18")); // no payload
        assert!(!is_scor_format("XX18539007547034"));
        assert!(!is_scor_format("RFXX539007547034"));
        assert!(!is_scor_format("RF18539007547034 "));
        assert!(!is_scor_format(&format!("RF18{}", "1".repeat(22))));
    }
}
