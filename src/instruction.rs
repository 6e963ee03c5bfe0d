//! Cross-field validation and assembly of payment instructions.
//!
//! [`build_instruction`] is the composite gate the leaf components cannot
//! express alone: it ties the account category to the declared reference
//! scheme and to the reference string, then hands rendering a bundle it
//! can serialize verbatim.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::account::{AccountKind, PaymentAccount};
use crate::error::{InstructionError, ValidationError};
use crate::money::{Currency, MonetaryAmount};
use crate::reference::{derive_reference, is_scor_format, PaymentReference, ReferenceScheme, QRR_LEN};

/// Longest remittance text carried on a payment part.
pub const REMITTANCE_MAX_CHARS: usize = 140;

/// Smallest payable amount.
const AMOUNT_MIN: Decimal = dec!(0.01);
/// Largest payable amount.
const AMOUNT_MAX: Decimal = dec!(999999999.99);

/// Unvalidated inbound record, as handed over by the data-mapping layer.
///
/// Currency and scheme arrive as raw code strings: this is the boundary
/// where out-of-enumeration values are caught and reported by kind.
#[derive(Debug, Clone, Default)]
pub struct InstructionDraft {
    /// Free-text amount, e.g. `"CHF 1'234.56"`.
    pub amount_text: String,
    /// Configured ISO 4217 currency code.
    pub currency: String,
    /// Configured reference scheme code (QRR, SCOR or NON).
    pub scheme: String,
    /// Configured creditor account number.
    pub account: String,
    /// Pre-assigned reference, if the upstream system issued one.
    pub preset_reference: Option<String>,
    /// Document identifier the reference payload is derived from.
    pub document_id: String,
    /// Free-text remittance information; truncated, never rejected.
    pub remittance: Option<String>,
}

/// The validated aggregate handed to the rendering collaborator.
///
/// Constructed once per outbound document and never mutated. The renderer
/// must serialize the reference verbatim, never re-derive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstruction {
    /// Canonical rounded amount.
    pub amount: MonetaryAmount,
    /// Classified account with its normalized form.
    pub account: PaymentAccount,
    /// Resolved reference variant.
    pub reference: PaymentReference,
    /// Remittance text, at most 140 characters.
    pub remittance: String,
}

/// Validate a draft against the cross-field rules and assemble the
/// instruction.
///
/// Rules run in a fixed order and the first failure wins, so every error
/// names exactly one violated rule:
///
/// 1. account missing
/// 2. currency not in {CHF, EUR}
/// 3. scheme not in {QRR, SCOR, NON}
/// 4. QRR needs a QR-IBAN; a preset QRR reference must be 27 digits
/// 5. a preset SCOR reference must match the RF grammar
/// 6. amount in 0.01..=999_999_999.99 after canonical rounding
///
/// No checksum is recomputed here: derived references are correct by
/// construction, preset references are only format-checked (see
/// DESIGN.md).
pub fn build_instruction(draft: &InstructionDraft) -> Result<PaymentInstruction, InstructionError> {
    if draft.account.trim().is_empty() {
        return Err(ValidationError::MissingAccount.into());
    }

    let currency = Currency::from_code(draft.currency.trim())
        .ok_or_else(|| ValidationError::UnsupportedCurrency(draft.currency.clone()))?;

    let scheme = ReferenceScheme::from_code(draft.scheme.trim())
        .ok_or_else(|| ValidationError::UnsupportedScheme(draft.scheme.clone()))?;

    let account = PaymentAccount::parse(&draft.account)?;

    let preset = draft
        .preset_reference
        .as_deref()
        .map(str::trim)
        .filter(|reference| !reference.is_empty());

    match scheme {
        ReferenceScheme::Qrr => {
            if account.kind() != AccountKind::QrCapable {
                return Err(ValidationError::SchemeAccountMismatch.into());
            }
            if let Some(reference) = preset {
                if reference.chars().count() != QRR_LEN {
                    return Err(
                        ValidationError::BadReferenceLength(reference.chars().count()).into()
                    );
                }
                if !reference.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::BadReferenceFormat.into());
                }
            }
        }
        ReferenceScheme::Scor => {
            // Absence is fine: the reference is derived below.
            if let Some(reference) = preset {
                if !is_scor_format(reference) {
                    return Err(ValidationError::BadReferenceFormat.into());
                }
            }
        }
        ReferenceScheme::Non => {}
    }

    let amount = MonetaryAmount::parse(&draft.amount_text, currency);
    if amount.value() < AMOUNT_MIN || amount.value() > AMOUNT_MAX {
        return Err(ValidationError::AmountOutOfRange(amount.value()).into());
    }

    let reference = match (scheme, preset) {
        (ReferenceScheme::Non, _) => PaymentReference::None,
        (ReferenceScheme::Qrr, Some(reference)) => PaymentReference::Qrr(reference.to_string()),
        (ReferenceScheme::Scor, Some(reference)) => PaymentReference::Scor(reference.to_string()),
        (_, None) => derive_reference(scheme, &draft.document_id),
    };

    Ok(PaymentInstruction {
        amount,
        account,
        reference,
        remittance: truncate_remittance(draft.remittance.as_deref().unwrap_or("")),
    })
}

/// Bound remittance text to [`REMITTANCE_MAX_CHARS`], truncating rather
/// than failing.
fn truncate_remittance(text: &str) -> String {
    text.chars().take(REMITTANCE_MAX_CHARS).collect()
}
