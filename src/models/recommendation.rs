use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    services::providers::BackendReply,
};

/// Ordered item names returned by the backend on a 2xx reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecommendationResult {
    pub items: Vec<String>,
}

impl RecommendationResult {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Parse a success body; it must be a JSON array
    ///
    /// Strings are taken verbatim. Numbers print as JavaScript would, so a
    /// product id `42.0` becomes `"42"`; other values use their JSON text.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(AppError::MalformedResponse(format!(
                    "expected a JSON array of item names, got {}",
                    json_kind(&other)
                )))
            }
        };

        let items = entries
            .into_iter()
            .map(|entry| match entry {
                Value::String(s) => s,
                Value::Number(n) => js_number_text(&n),
                other => other.to_string(),
            })
            .collect();

        Ok(Self { items })
    }
}

/// Failure message returned by the backend on a non-2xx reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub detail: String,
}

impl ErrorResult {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Parse a failure body of the form `{"detail": ...}`
    ///
    /// A missing `detail` reads as `undefined`; a structured one (such as a
    /// list of validation errors) is kept as compact JSON. A `null` body has
    /// no fields to read and is malformed.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_null() {
            return Err(AppError::MalformedResponse(
                "failure body is null, expected an object with a detail".to_string(),
            ));
        }
        let detail = match value.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "undefined".to_string(),
        };
        Ok(Self { detail })
    }
}

/// What to put in the results container for one completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    Recommendations(RecommendationResult),
    Error(ErrorResult),
}

impl RenderInstruction {
    /// Classify a backend reply by status alone, then parse its body
    pub fn from_reply(reply: &BackendReply) -> AppResult<Self> {
        if reply.is_success() {
            RecommendationResult::from_body(&reply.body).map(RenderInstruction::Recommendations)
        } else {
            ErrorResult::from_body(&reply.body).map(RenderInstruction::Error)
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderInstruction::Error(_))
    }
}

/// Text of a JSON number as `String(n)` gives it in JavaScript
fn js_number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    let magnitude = f.abs();
    if f == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", f);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", f)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> BackendReply {
        BackendReply::new(status, body)
    }

    #[test]
    fn test_classification_follows_reply_status() {
        assert!(RenderInstruction::from_reply(&reply(299, "[]")).is_ok_and(|i| !i.is_error()));
        assert!(RenderInstruction::from_reply(&reply(300, r#"{"detail":"moved"}"#))
            .is_ok_and(|i| i.is_error()));
        assert!(RenderInstruction::from_reply(&reply(199, r#"{"detail":"early"}"#))
            .is_ok_and(|i| i.is_error()));
    }

    #[test]
    fn test_success_keeps_server_order() {
        let instruction = RenderInstruction::from_reply(&reply(200, r#"["A","B","C"]"#)).unwrap();
        assert_eq!(
            instruction,
            RenderInstruction::Recommendations(RecommendationResult::new(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
            ]))
        );
    }

    #[test]
    fn test_any_2xx_is_success() {
        let instruction = RenderInstruction::from_reply(&reply(204, "[]")).unwrap();
        assert_eq!(
            instruction,
            RenderInstruction::Recommendations(RecommendationResult::default())
        );
    }

    #[test]
    fn test_scalar_items_use_json_text() {
        let result = RecommendationResult::from_body(br#"["P1", 42, true, null]"#).unwrap();
        assert_eq!(result.items, vec!["P1", "42", "true", "null"]);
    }

    #[test]
    fn test_numbers_print_like_javascript() {
        let result =
            RecommendationResult::from_body(br#"[1.0, 2.5, -0.0, 1e21, 0.0000001, 123456789012]"#)
                .unwrap();
        assert_eq!(result.items, vec!["1", "2.5", "0", "1e+21", "1e-7", "123456789012"]);
    }

    #[test]
    fn test_null_failure_body_is_malformed() {
        let result = RenderInstruction::from_reply(&reply(500, "null"));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_success_with_object_body_is_malformed() {
        let result = RenderInstruction::from_reply(&reply(200, r#"{"recommended_products":[]}"#));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_failure_uses_detail() {
        let instruction =
            RenderInstruction::from_reply(&reply(400, r#"{"detail":"Customer not found"}"#)).unwrap();
        assert_eq!(
            instruction,
            RenderInstruction::Error(ErrorResult::new("Customer not found"))
        );
        assert!(instruction.is_error());
    }

    #[test]
    fn test_failure_detail_fallbacks() {
        let missing = ErrorResult::from_body(br#"{"message":"nope"}"#).unwrap();
        assert_eq!(missing.detail, "undefined");

        let structured = ErrorResult::from_body(br#"{"detail":[{"loc":["body","top_n"]}]}"#)
            .unwrap();
        assert_eq!(structured.detail, r#"[{"loc":["body","top_n"]}]"#);
    }

    #[test]
    fn test_failure_with_non_json_body_is_malformed() {
        let result = RenderInstruction::from_reply(&reply(502, "<html>Bad Gateway</html>"));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }
}
