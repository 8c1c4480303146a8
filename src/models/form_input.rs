use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Requested recommendation count as parsed from the `top_n` field
///
/// Parsing never fails: text without leading digits yields `NotANumber`,
/// which is forwarded to the backend as JSON `null`. Digit runs too long for
/// `i64` are kept as an approximate `f64`, still sent as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopN {
    Count(i64),
    Approx(f64),
    NotANumber,
}

impl TopN {
    /// Parse field text the way `parseInt(text)` does with no radix
    ///
    /// Leading whitespace is skipped, one sign is accepted, `0x`/`0X` switches
    /// to base 16, and parsing stops at the first character that is not a
    /// digit.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start_matches(is_js_whitespace);

        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, digits) = match unsigned.get(..2) {
            Some("0x") | Some("0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };

        let mut exact: Option<i64> = Some(0);
        let mut approx: f64 = 0.0;
        let mut seen_digit = false;
        for c in digits.chars() {
            let Some(digit) = c.to_digit(radix) else {
                break;
            };
            seen_digit = true;
            exact = exact
                .and_then(|v| v.checked_mul(i64::from(radix)))
                .and_then(|v| v.checked_add(i64::from(digit)));
            approx = approx * f64::from(radix) + f64::from(digit);
        }

        if !seen_digit {
            return TopN::NotANumber;
        }

        match exact {
            Some(v) => TopN::Count(if negative { -v } else { v }),
            None => TopN::Approx(if negative { -approx } else { approx }),
        }
    }
}

/// ECMAScript WhiteSpace and LineTerminator code points
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl Display for TopN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopN::Count(n) => write!(f, "{}", n),
            TopN::Approx(n) => write!(f, "{}", n),
            TopN::NotANumber => write!(f, "NaN"),
        }
    }
}

impl Serialize for TopN {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TopN::Count(n) => serializer.serialize_i64(*n),
            TopN::Approx(n) => serializer.serialize_f64(*n),
            TopN::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Body of `POST /user`, built fresh from the form fields on every submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormInput {
    pub customer_id: String,
    pub top_n: TopN,
}

impl FormInput {
    pub fn new(customer_id: impl Into<String>, top_n: TopN) -> Self {
        Self {
            customer_id: customer_id.into(),
            top_n,
        }
    }

    /// Build the request from raw field text; no validation is applied
    pub fn from_field_values(customer_id: String, top_n_text: &str) -> Self {
        Self {
            customer_id,
            top_n: TopN::parse(top_n_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(TopN::parse("5"), TopN::Count(5));
        assert_eq!(TopN::parse("-3"), TopN::Count(-3));
        assert_eq!(TopN::parse("+7"), TopN::Count(7));
        assert_eq!(TopN::parse("007"), TopN::Count(7));
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(TopN::parse("  12abc"), TopN::Count(12));
        assert_eq!(TopN::parse("3.9"), TopN::Count(3));
        assert_eq!(TopN::parse("1e3"), TopN::Count(1));
        assert_eq!(TopN::parse("\t\n42 "), TopN::Count(42));
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(TopN::parse("0x1A"), TopN::Count(26));
        assert_eq!(TopN::parse("-0XfF"), TopN::Count(-255));
        assert_eq!(TopN::parse("0x"), TopN::NotANumber);
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(TopN::parse("abc"), TopN::NotANumber);
        assert_eq!(TopN::parse(""), TopN::NotANumber);
        assert_eq!(TopN::parse("   "), TopN::NotANumber);
        assert_eq!(TopN::parse("-"), TopN::NotANumber);
    }

    #[test]
    fn test_parse_only_js_whitespace_is_skipped() {
        assert_eq!(TopN::parse("\u{00A0}\u{2028}\u{3000}8"), TopN::Count(8));
        assert_eq!(TopN::parse("\u{FEFF}4"), TopN::Count(4));
        assert_eq!(TopN::parse("\u{0085}5"), TopN::NotANumber);
        assert_eq!(TopN::parse("\u{180E}5"), TopN::NotANumber);
    }

    #[test]
    fn test_oversized_digit_run_stays_numeric() {
        assert_eq!(TopN::parse("99999999999999999999"), TopN::Approx(1e20));
        assert_eq!(TopN::parse("-99999999999999999999x"), TopN::Approx(-1e20));

        let input = FormInput::from_field_values("C1".to_string(), "99999999999999999999");
        let body = serde_json::to_value(&input).unwrap();
        assert!(body["top_n"].is_number());
        assert_eq!(body["top_n"].as_f64(), Some(1e20));
        assert_eq!(input.top_n.to_string(), "100000000000000000000");
    }

    #[test]
    fn test_request_body_shape() {
        let input = FormInput::from_field_values("C042".to_string(), "3");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "customer_id": "C042", "top_n": 3 })
        );
    }

    #[test]
    fn test_non_numeric_top_n_serializes_as_null() {
        let input = FormInput::from_field_values(String::new(), "abc");
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"customer_id":"","top_n":null}"#
        );
        assert_eq!(input.top_n.to_string(), "NaN");
    }
}
