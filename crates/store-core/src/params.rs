//! # Product Parameters
//!
//! Untyped, query-string form of a product and the lenient parsers used to
//! turn it into a [`Product`]. A value that fails to parse becomes the zero
//! value of its field instead of rejecting the request.

use crate::product::Product;
use chrono::{DateTime, FixedOffset, Utc};

/// Seconds from the Unix epoch back to `0001-01-01T00:00:00Z`
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// Raw product fields as received from a query string
#[derive(Debug, Clone, Default)]
pub struct ProductParams {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub code_value: String,
    pub is_published: String,
    pub expiration: String,
    pub price: String,
}

impl ProductParams {
    /// Collect params from decoded query pairs.
    ///
    /// The first occurrence of a key wins; later repeats and unknown keys
    /// are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        let mut seen: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let slot = match key {
                "id" => &mut params.id,
                "name" => &mut params.name,
                "quantity" => &mut params.quantity,
                "code_value" => &mut params.code_value,
                "is_published" => &mut params.is_published,
                "expiration" => &mut params.expiration,
                "price" => &mut params.price,
                _ => continue,
            };
            if seen.iter().any(|k| k == key) {
                continue;
            }
            seen.push(key.to_string());
            *slot = value.into();
        }

        params
    }

    /// Build a product, coercing unparsable fields to their zero value.
    ///
    /// Also returns the names of fields that were present but could not be
    /// parsed. Absent fields are not reported.
    pub fn into_product(self) -> (Product, Vec<&'static str>) {
        let mut coerced = Vec::new();

        let quantity = lenient(&self.quantity, parse_int, "quantity", &mut coerced);
        let is_published = lenient(&self.is_published, parse_bool, "is_published", &mut coerced);
        let expiration = lenient(&self.expiration, parse_rfc3339, "expiration", &mut coerced);
        let price = lenient(&self.price, parse_float, "price", &mut coerced);

        let product = Product {
            id: self.id,
            name: self.name,
            quantity: quantity.unwrap_or_default(),
            code_value: self.code_value,
            is_published: is_published.unwrap_or_default(),
            expiration: expiration.unwrap_or_else(zero_time),
            price: price.unwrap_or_default(),
        };

        (product, coerced)
    }
}

fn lenient<T>(
    raw: &str,
    parse: fn(&str) -> Option<T>,
    field: &'static str,
    coerced: &mut Vec<&'static str>,
) -> Option<T> {
    let parsed = parse(raw);
    if parsed.is_none() && !raw.is_empty() {
        coerced.push(field);
    }
    parsed
}

/// The zero timestamp, `0001-01-01T00:00:00Z`
pub fn zero_time() -> DateTime<FixedOffset> {
    DateTime::from_timestamp(ZERO_TIME_SECS, 0)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .fixed_offset()
}

/// Parse a signed 64-bit decimal integer
pub fn parse_int(s: &str) -> Option<i64> {
    s.parse().ok()
}

/// Parse a boolean in any of the accepted spellings
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a finite floating point number.
///
/// `NaN`, infinities and literals that overflow `f64` are rejected, since a
/// stored price must serialize as a JSON number.
pub fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a price threshold.
///
/// Explicit `NaN`/`Inf`/`Infinity` spellings are accepted, but a finite
/// literal that overflows to infinity is out of range and rejected.
pub fn parse_threshold(s: &str) -> Option<f64> {
    let value = s.parse::<f64>().ok()?;
    if value.is_infinite() && !is_infinity_literal(s) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse an RFC3339 timestamp, keeping its offset
pub fn parse_rfc3339(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sprite_params() -> ProductParams {
        ProductParams {
            id: "4".into(),
            name: "Sprite".into(),
            quantity: "5".into(),
            code_value: "999".into(),
            is_published: "true".into(),
            expiration: "2024-01-01T00:00:00Z".into(),
            price: "3.25".into(),
        }
    }

    #[test]
    fn test_well_formed_params() {
        let (product, coerced) = sprite_params().into_product();

        assert!(coerced.is_empty());
        assert_eq!(product.id, "4");
        assert_eq!(product.name, "Sprite");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.code_value, "999");
        assert!(product.is_published);
        assert_eq!(
            product.expiration,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset()
        );
        assert_eq!(product.price, 3.25);
    }

    #[test]
    fn test_malformed_fields_become_zero_values() {
        let params = ProductParams {
            quantity: "five".into(),
            is_published: "yes".into(),
            expiration: "tomorrow".into(),
            price: "cheap".into(),
            ..sprite_params()
        };

        let (product, coerced) = params.into_product();

        assert_eq!(product.quantity, 0);
        assert!(!product.is_published);
        assert_eq!(product.expiration, zero_time());
        assert_eq!(product.price, 0.0);
        assert_eq!(coerced, vec!["quantity", "is_published", "expiration", "price"]);
    }

    #[test]
    fn test_non_finite_price_becomes_zero() {
        for raw in ["NaN", "inf", "-Infinity", "1e400"] {
            let params = ProductParams {
                price: raw.into(),
                ..sprite_params()
            };
            let (product, coerced) = params.into_product();
            assert_eq!(product.price, 0.0, "{raw}");
            assert_eq!(coerced, vec!["price"], "{raw}");
        }
    }

    #[test]
    fn test_absent_fields_are_not_reported() {
        let (product, coerced) = ProductParams::default().into_product();

        assert!(coerced.is_empty());
        assert_eq!(product.id, "");
        assert_eq!(product.expiration, zero_time());
    }

    #[test]
    fn test_from_pairs_first_occurrence_wins() {
        let params = ProductParams::from_pairs(vec![
            ("id", "7"),
            ("id", "8"),
            ("name", "X"),
            ("color", "red"),
            ("price", "1.5"),
            ("price", "oops"),
        ]);

        assert_eq!(params.id, "7");
        assert_eq!(params.name, "X");
        assert_eq!(params.price, "1.5");
        assert_eq!(params.quantity, "");
    }

    #[test]
    fn test_zero_time() {
        assert_eq!(zero_time().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_bool_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Some(true), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Some(false), "{s}");
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("+12"), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("9"), Some(9.0));
        assert_eq!(parse_threshold("1e3"), Some(1000.0));
        assert_eq!(parse_threshold("+Inf"), Some(f64::INFINITY));
        assert_eq!(parse_threshold("-infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_threshold("NaN").unwrap().is_nan());
        assert_eq!(parse_threshold("1e400"), None);
        assert_eq!(parse_threshold("-1e400"), None);
        assert_eq!(parse_threshold("abc"), None);
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let parsed = parse_rfc3339("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T02:00:00+02:00");
        assert_eq!(parse_rfc3339("2024-01-01"), None);
    }
}
