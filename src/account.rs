//! Swiss account classification — plain IBAN vs QR-IBAN.
//!
//! A QR-IBAN is recognized purely by its embedded institution identifier:
//! if the five-digit IID falls in the reserved range the account may carry
//! QRR references. No external lookup is involved.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Total length of a Swiss account number: CH + 2 check digits + 17 body.
const ACCOUNT_LEN: usize = 21;

/// Offset and width of the institution identifier within the account.
const IID_OFFSET: usize = 4;
const IID_LEN: usize = 5;

/// IID range reserved for QR-IBANs (Swiss Payment Standards).
const QR_IID_RANGE: std::ops::RangeInclusive<u32> = 30000..=31999;

/// Category of a Swiss payment account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Ordinary IBAN; accepts SCOR references or none.
    Standard,
    /// QR-IBAN; required for QRR references.
    QrCapable,
}

/// A structurally validated Swiss payment account.
///
/// Holds the raw input alongside the whitespace-stripped normalized form
/// the rendering layer serializes verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccount {
    raw: String,
    normalized: String,
    kind: AccountKind,
}

impl PaymentAccount {
    /// Parse and classify an account number.
    ///
    /// Enforces the fixed-length Swiss grammar (21 characters: `CH`, two
    /// numeric check digits, 17 alphanumeric body characters) and derives
    /// the category from the institution identifier. The IID range test is
    /// stricter than a leading-digit prefix check: an account starting
    /// with `3` but an out-of-range IID is Standard, not QrCapable.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let normalized: String = raw.split_whitespace().collect();

        if normalized.chars().count() != ACCOUNT_LEN {
            return Err(FormatError::AccountLength(normalized.chars().count()));
        }
        if !normalized.is_ascii() {
            return Err(FormatError::AccountBody);
        }
        if !normalized.starts_with("CH") {
            return Err(FormatError::CountryCode);
        }
        let check_digits = &normalized[2..4];
        if !check_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::CheckDigits(check_digits.to_string()));
        }
        if !normalized[4..].bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(FormatError::AccountBody);
        }

        let iid_str = &normalized[IID_OFFSET..IID_OFFSET + IID_LEN];
        let iid: u32 = iid_str
            .parse()
            .map_err(|_| FormatError::InstitutionId(iid_str.to_string()))?;

        let kind = if QR_IID_RANGE.contains(&iid) {
            AccountKind::QrCapable
        } else {
            AccountKind::Standard
        };

        Ok(Self {
            raw: raw.to_string(),
            normalized,
            kind,
        })
    }

    /// The account exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whitespace-stripped form.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Derived category.
    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Whether the account may carry QRR references.
    pub fn is_qr_capable(&self) -> bool {
        self.kind == AccountKind::QrCapable
    }
}

/// Shape-only IBAN check: two letters, two digits, alphanumeric body of
/// plausible length.
///
/// This is the weaker predicate used for generic format acceptance. It
/// deliberately does *not* verify the ISO 7064 mod-97 IBAN checksum —
/// upstream account data is trusted as-is (see DESIGN.md).
pub fn is_valid_iban_structure(iban: &str) -> bool {
    let stripped: String = iban.split_whitespace().collect();
    let b = stripped.as_bytes();
    if !(15..=34).contains(&b.len()) {
        return false;
    }
    b[0].is_ascii_uppercase()
        && b[1].is_ascii_uppercase()
        && b[2].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4..].iter().all(|c| c.is_ascii_alphanumeric())
}
