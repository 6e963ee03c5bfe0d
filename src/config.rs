//! Billing profile configuration.
//!
//! Configuration is an explicit value threaded into every call — there is
//! no process-wide state — so the codec stays reentrant and independently
//! testable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::instruction::InstructionDraft;
use crate::money::Currency;
use crate::reference::ReferenceScheme;

/// Recognized billing options, resolved before any document is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Currency every document under this profile is billed in.
    pub currency: Currency,
    /// Reference scheme every document under this profile uses.
    pub scheme: ReferenceScheme,
    /// Creditor account number.
    pub account: String,
    /// Fixed reference to stamp on every document instead of deriving one.
    pub preset_reference: Option<String>,
}

impl BillingConfig {
    /// Resolve raw option strings into a configuration.
    ///
    /// Unknown currency or scheme codes are a configuration error, raised
    /// up front rather than once per document. The account is carried
    /// through as-is; its grammar is enforced per document by
    /// [`crate::build_instruction`].
    pub fn from_options(
        currency: &str,
        scheme: &str,
        account: &str,
        preset_reference: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let currency = Currency::from_code(currency.trim())
            .ok_or_else(|| ConfigError::UnknownCurrency(currency.to_string()))?;
        let scheme = ReferenceScheme::from_code(scheme.trim())
            .ok_or_else(|| ConfigError::UnknownScheme(scheme.to_string()))?;
        Ok(Self {
            currency,
            scheme,
            account: account.trim().to_string(),
            preset_reference: preset_reference.map(str::to_string),
        })
    }

    /// Assemble the draft for one document under this configuration.
    pub fn draft(
        &self,
        amount_text: &str,
        document_id: &str,
        remittance: Option<&str>,
    ) -> InstructionDraft {
        InstructionDraft {
            amount_text: amount_text.to_string(),
            currency: self.currency.code().to_string(),
            scheme: self.scheme.code().to_string(),
            account: self.account.clone(),
            preset_reference: self.preset_reference.clone(),
            document_id: document_id.to_string(),
            remittance: remittance.map(str::to_string),
        }
    }
}
