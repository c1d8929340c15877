//! Response normalization - turn an upstream body into solution text.
//!
//! Upstream response shapes drift between deployments, so extraction uses a
//! fixed precedence. The first rule that matches wins:
//!
//! 1. `result` field
//! 2. `output` field
//! 3. `data` field
//! 4. the whole body
//!
//! Text values are used as-is; anything else is rendered as compact JSON.
//! Normalization cannot fail.

use super::solution::Solution;
use serde_json::Value;

/// Extract a [`Solution`] from a parsed upstream body.
pub fn normalize(raw_body: &Value) -> Solution {
    Solution::new(extract_text(raw_body))
}

fn extract_text(raw_body: &Value) -> String {
    if let Value::Object(fields) = raw_body {
        if let Some(result) = fields.get("result") {
            return to_text(result);
        }
        if let Some(output) = fields.get("output") {
            return to_text(output);
        }
        if let Some(data) = fields.get("data") {
            return to_text(data);
        }
    }
    to_text(raw_body)
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse a raw response body.
///
/// Bodies that are not JSON are kept verbatim as a JSON string, so the
/// normalizer returns them unchanged.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
