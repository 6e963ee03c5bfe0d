//! # zahlref
//!
//! Swiss payment reference codec: generation and validation of the three
//! reference schemes carried on Swiss/European structured payment documents
//! (QRR, SCOR/ISO 11649, NON), QR-IBAN classification, and the CHF/EUR
//! monetary arithmetic that feeds them.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The reference algorithms follow the Swiss Payment Standards (recursive
//! modulo-10 for QRR) and ISO 7064 MOD 97-10 (for SCOR).
//!
//! This crate covers only the *data* that must be correct before a payment
//! part is rendered. Fetching invoice records, templating, and PDF output
//! belong to the surrounding application.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use zahlref::*;
//!
//! let config = BillingConfig::from_options(
//!     "CHF",
//!     "QRR",
//!     "CH44 3100 0123 4567 8901 2",
//!     None,
//! )
//! .unwrap();
//!
//! let draft = config.draft("CHF 1'234.56", "RE-2024-017", Some("Beratung Juni"));
//! let instruction = build_instruction(&draft).unwrap();
//!
//! assert_eq!(instruction.amount.value(), dec!(1234.56));
//! assert_eq!(instruction.account.kind(), AccountKind::QrCapable);
//! assert_eq!(instruction.reference.as_str().len(), 27);
//! ```

mod account;
mod checksum;
mod config;
mod error;
mod instruction;
mod money;
mod reference;

pub use account::*;
pub use checksum::*;
pub use config::*;
pub use error::*;
pub use instruction::*;
pub use money::*;
pub use reference::*;
