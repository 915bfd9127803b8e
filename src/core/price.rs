use crate::domain::model::PriceFormat;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("price text '{raw}' does not contain a parsable amount")]
pub struct PriceParseError {
    pub raw: String,
}

fn symbol_prefixed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\s*([0-9][0-9,]*(?:\.[0-9]+)?)").unwrap())
}

/// Parses untrusted scraped price text into a canonical decimal amount.
///
/// For [`PriceFormat::SymbolPrefixed`] the first currency-prefixed number in
/// the text wins, so trailing noise like "was $49.99" in the same node does
/// not poison the result. Never defaults: text without a parsable,
/// non-negative amount is an error, and the caller drops the record.
pub fn normalize_price(raw: &str, format: PriceFormat) -> Result<Decimal, PriceParseError> {
    let err = || PriceParseError {
        raw: raw.to_string(),
    };

    let digits = match format {
        PriceFormat::SymbolPrefixed => symbol_prefixed_pattern()
            .captures(raw)
            .and_then(|c| c.get(1))
            .ok_or_else(err)?
            .as_str()
            .replace(',', ""),
        PriceFormat::Plain => raw.trim().replace(',', ""),
    };

    let mut amount: Decimal = digits.parse().map_err(|_| err())?;
    if amount.is_sign_negative() {
        return Err(err());
    }
    amount.rescale(2);
    Ok(amount)
}
