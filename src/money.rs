//! Monetary parsing, rounding, and tax arithmetic for CHF/EUR amounts.
//!
//! Amount fields on upstream invoice records are free text ("CHF 1'234.56",
//! "€ 1 234,56"), so parsing is deliberately lenient: anything that does not
//! clean up to a number is the neutral value zero, not an error. Structural
//! data (accounts, references) gets the opposite treatment — see
//! [`crate::account`] and [`crate::instruction`].

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// ISO 4217 currencies accepted on Swiss payment parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// CHF — Swiss Franc.
    Chf,
    /// EUR — Euro.
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
        }
    }

    /// Parse from an ISO 4217 code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }
}

/// A currency amount in canonical two-decimal form.
///
/// Constructed once at ingestion time and immutable thereafter; every
/// constructor rounds, so the value is always an exact integer number of
/// minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    value: Decimal,
    currency: Currency,
}

impl MonetaryAmount {
    /// Create an amount from a numeric value, rounding to the cent.
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self {
            value: round_currency(value),
            currency,
        }
    }

    /// Parse a free-text amount. Unparsable text degrades to zero.
    pub fn parse(text: &str, currency: Currency) -> Self {
        Self::new(parse_amount(text), currency)
    }

    /// Canonical decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Associated currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.2}", self.currency.code(), self.value)
    }
}

/// Parse a heterogeneous textual amount into an exact decimal value.
///
/// Every character that is not a digit, dot, comma, apostrophe or minus
/// sign is discarded — this drops currency symbols and whitespace without
/// a locale table. The rightmost of `.` and `,` is the decimal separator;
/// all occurrences of the other symbol and all apostrophes are thousands
/// separators and are stripped.
///
/// Empty or non-numeric-after-cleaning input parses as zero: an empty
/// amount field upstream means "no amount", not an error.
pub fn parse_amount(input: &str) -> Decimal {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '\'' | '-'))
        .collect();

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => strip_separators(&cleaned, ','),
        (Some(_), _) => strip_separators(&cleaned, '.'),
        (None, Some(_)) => strip_separators(&cleaned, ','),
        (None, None) => cleaned.chars().filter(|c| *c != '\'').collect(),
    };

    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

/// Lenient parse over an optional field; an absent field is zero.
pub fn parse_amount_opt(input: Option<&str>) -> Decimal {
    input.map(parse_amount).unwrap_or(Decimal::ZERO)
}

/// Keep the final occurrence of `decimal_sep` (rewritten as `.`); every
/// other separator symbol is a thousands separator and is dropped.
fn strip_separators(cleaned: &str, decimal_sep: char) -> String {
    let decimal_pos = cleaned.rfind(decimal_sep);
    cleaned
        .char_indices()
        .filter_map(|(i, c)| {
            if Some(i) == decimal_pos {
                Some('.')
            } else if matches!(c, '.' | ',' | '\'') {
                None
            } else {
                Some(c)
            }
        })
        .collect()
}

/// Round to two decimal places, half away from zero (commercial rounding).
///
/// Idempotent: rounding a rounded value is a no-op.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest 0.05 (Swiss cash rounding, "Rappenrundung").
pub fn round_swiss_cash(value: Decimal) -> Decimal {
    let scaled = (value * dec!(20)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    scaled / dec!(20)
}

/// VAT on a net amount at `rate` percent, rounded to the cent.
pub fn calculate_tax(net: Decimal, rate: Decimal) -> Decimal {
    round_currency(net * rate / dec!(100))
}

/// Gross amount: net plus VAT at `rate` percent.
pub fn gross_amount(net: Decimal, rate: Decimal) -> Decimal {
    round_currency(net + calculate_tax(net, rate))
}

/// Net amount recovered from a gross amount at `rate` percent.
///
/// Not an exact inverse of [`gross_amount`]: rounding is lossy at the cent
/// level, so round trips agree only to within one cent.
pub fn net_amount(gross: Decimal, rate: Decimal) -> Decimal {
    round_currency(gross / (Decimal::ONE + rate / dec!(100)))
}

/// Sum a list of amounts and round once, on the total.
///
/// Rounding each addend first would let per-item rounding error accumulate
/// across large itemizations.
pub fn sum_amounts(amounts: &[Decimal]) -> Decimal {
    round_currency(amounts.iter().copied().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_swiss_apostrophe_format() {
        assert_eq!(parse_amount("1'234.56 CHF"), dec!(1234.56));
        assert_eq!(parse_amount("CHF 12'345'678.90"), dec!(12345678.90));
    }

    #[test]
    fn parse_english_format() {
        assert_eq!(parse_amount("CHF 1,234.56"), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89"), dec!(1234567.89));
    }

    #[test]
    fn parse_continental_format() {
        assert_eq!(parse_amount("€ 1 234,56"), dec!(1234.56));
        assert_eq!(parse_amount("1.234.567,89"), dec!(1234567.89));
    }

    #[test]
    fn parse_stray_symbol_dot() {
        // "Fr." leaves a leading dot behind after symbol stripping; only
        // the final dot is the decimal separator.
        assert_eq!(parse_amount("Fr. 99.90"), dec!(99.90));
    }

    #[test]
    fn parse_plain_and_negative() {
        assert_eq!(parse_amount("42"), dec!(42));
        assert_eq!(parse_amount("-12.50"), dec!(-12.50));
        assert_eq!(parse_amount("0.05"), dec!(0.05));
    }

    #[test]
    fn parse_degrades_to_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("gratis"), Decimal::ZERO);
        assert_eq!(parse_amount_opt(None), Decimal::ZERO);
        assert_eq!(parse_amount_opt(Some("7.70")), dec!(7.70));
    }

    #[test]
    fn round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec!(123.455)), dec!(123.46));
        assert_eq!(round_currency(dec!(-123.455)), dec!(-123.46));
        assert_eq!(round_currency(dec!(2.444)), dec!(2.44));
    }

    #[test]
    fn round_currency_idempotent() {
        let once = round_currency(dec!(19.995));
        assert_eq!(round_currency(once), once);
    }

    #[test]
    fn swiss_cash_rounding() {
        assert_eq!(round_swiss_cash(dec!(1.23)), dec!(1.25));
        assert_eq!(round_swiss_cash(dec!(1.22)), dec!(1.20));
        assert_eq!(round_swiss_cash(dec!(1.25)), dec!(1.25));
        assert_eq!(round_swiss_cash(dec!(1.02)), dec!(1.00));
        assert_eq!(round_swiss_cash(dec!(1.03)), dec!(1.05));
    }

    #[test]
    fn tax_helpers() {
        // 7.7% was the Swiss standard VAT rate until 2024; 8.1% since.
        assert_eq!(calculate_tax(dec!(100), dec!(7.7)), dec!(7.70));
        assert_eq!(gross_amount(dec!(100), dec!(7.7)), dec!(107.70));
        assert_eq!(net_amount(dec!(107.70), dec!(7.7)), dec!(100.00));
        assert_eq!(calculate_tax(dec!(0), dec!(8.1)), dec!(0));
    }

    #[test]
    fn gross_net_round_trip_within_one_cent() {
        for (net, rate) in [
            (dec!(33.33), dec!(8.1)),
            (dec!(0.01), dec!(2.6)),
            (dec!(999.99), dec!(7.7)),
            (dec!(123456.78), dec!(19)),
        ] {
            let recovered = net_amount(gross_amount(net, rate), rate);
            assert!(
                (recovered - net).abs() < dec!(0.01),
                "net {net} rate {rate}: recovered {recovered}"
            );
        }
    }

    #[test]
    fn sum_rounds_once_on_total() {
        assert_eq!(sum_amounts(&[dec!(1.11), dec!(2.22), dec!(3.33)]), dec!(6.66));
        assert_eq!(sum_amounts(&[]), Decimal::ZERO);
        // Per-addend rounding would give 0.01 + 0.01 + 0.01 = 0.03.
        assert_eq!(
            sum_amounts(&[dec!(0.005), dec!(0.005), dec!(0.005)]),
            dec!(0.02)
        );
    }

    #[test]
    fn monetary_amount_canonical_form() {
        let a = MonetaryAmount::new(dec!(9.999), Currency::Chf);
        assert_eq!(a.value(), dec!(10.00));
        assert_eq!(a.currency(), Currency::Chf);
        assert_eq!(a.to_string(), "CHF 10.00");

        let b = MonetaryAmount::parse("EUR 1.234,50", Currency::Eur);
        assert_eq!(b.value(), dec!(1234.50));
    }

    #[test]
    fn currency_code_round_trip() {
        assert_eq!(Currency::from_code("CHF"), Some(Currency::Chf));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::Eur));
        assert_eq!(Currency::from_code("USD"), None);
        assert_eq!(Currency::Chf.code(), "CHF");
    }
}
