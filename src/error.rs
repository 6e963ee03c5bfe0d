use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building or validating a payment instruction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstructionError {
    /// Account or reference fails a structural grammar.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A cross-field validation rule failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Billing options outside the recognized enumerations.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Structural grammar violations of the Swiss account format.
///
/// These are always raised, never recovered locally — only the lenient
/// amount-parse path in [`crate::parse_amount`] degrades silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Account is not 21 characters after whitespace removal.
    #[error("account must be 21 characters, got {0}")]
    AccountLength(usize),

    /// Account does not carry the country code CH.
    #[error("account must start with country code CH")]
    CountryCode,

    /// Positions 3-4 of the account are not digits.
    #[error("account check digits must be numeric, got '{0}'")]
    CheckDigits(String),

    /// Account body contains non-alphanumeric characters.
    #[error("account body must be alphanumeric")]
    AccountBody,

    /// The five-digit institution identifier is not numeric.
    #[error("institution identifier must be numeric, got '{0}'")]
    InstitutionId(String),
}

/// Cross-field validation failures, one variant per rule.
///
/// Rules are evaluated in declaration order by
/// [`crate::build_instruction`]; the first failure wins. Each variant is
/// distinguishable so callers can present a precise remediation message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// No payment account was configured.
    #[error("payment account is missing")]
    MissingAccount,

    /// Currency outside the {CHF, EUR} set.
    #[error("currency '{0}' is not supported (expected CHF or EUR)")]
    UnsupportedCurrency(String),

    /// Reference scheme outside the {QRR, SCOR, NON} set.
    #[error("reference scheme '{0}' is not recognized (expected QRR, SCOR or NON)")]
    UnsupportedScheme(String),

    /// A QRR reference was requested for an account that is not a QR-IBAN.
    #[error("QRR references require a QR-IBAN account")]
    SchemeAccountMismatch,

    /// A supplied QRR reference is not exactly 27 characters.
    #[error("QRR reference must be exactly 27 digits, got {0} characters")]
    BadReferenceLength(usize),

    /// A supplied reference does not match its scheme's grammar.
    #[error("reference does not match the scheme's format")]
    BadReferenceFormat,

    /// Amount outside the payable range after canonical rounding.
    #[error("amount {0} is outside the payable range 0.01..=999999999.99")]
    AmountOutOfRange(Decimal),
}

/// Billing configuration outside the recognized option enumerations.
///
/// Raised when the configuration is resolved, before any document is
/// processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Configured currency code is not CHF or EUR.
    #[error("unknown currency '{0}' (expected CHF or EUR)")]
    UnknownCurrency(String),

    /// Configured reference scheme is not QRR, SCOR or NON.
    #[error("unknown reference scheme '{0}' (expected QRR, SCOR or NON)")]
    UnknownScheme(String),
}
