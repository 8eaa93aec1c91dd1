//! Wire DTOs for the proxy endpoints and the parsed-bill schema.
//!
//! DESIGN
//! ======
//! The backend's `{type, data}` envelope is normalised into `ParsedResult`
//! once, at the network boundary. The json variant keeps the document as a
//! raw `serde_json::Value` (key order preserved) so what the user sees and
//! copies is exactly what the backend sent. `ParsedBill` is a typed view over
//! that document for summaries; every field is optional and unknown keys are
//! kept in `extra`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PROXY RESPONSES
// =============================================================================

/// Body of a successful `GET /api/proxy/validate-key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateKeyResponse {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub remaining_credits: u32,
}

/// Error body returned by the proxy and the backend.
///
/// `detail` is usually a string, but request-validation errors from the
/// backend carry a list, so it is kept loose.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// The detail as a non-empty string, if it is one.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|d| !d.is_empty())
    }
}

// =============================================================================
// PARSED RESULT
// =============================================================================

/// Which variant of result the backend produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Json,
    Text,
}

/// Outcome of a successful parse, tagged on the wire as `{type, data}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ParsedResult {
    /// Structured bill object, verbatim.
    Json(serde_json::Value),
    /// Free text the backend could not structure.
    Text(String),
}

impl ParsedResult {
    /// Normalise an arbitrary success body from `parse_bill`.
    ///
    /// - `{type: "json", data: {..}}` becomes `Json`.
    /// - `{type: "text", data: "..."}` becomes `Text`.
    /// - A known tag with any other non-null `data` becomes `Text` of that
    ///   data, pretty-printed.
    /// - Anything else becomes `Text` of the whole body, pretty-printed.
    pub fn from_response(body: serde_json::Value) -> Self {
        let tag = body.get("type").and_then(serde_json::Value::as_str).map(str::to_owned);
        let serde_json::Value::Object(mut map) = body else {
            return Self::Text(pretty(&body));
        };

        match (tag.as_deref(), map.remove("data")) {
            (Some("json"), Some(data @ serde_json::Value::Object(_))) => Self::Json(data),
            (Some("text"), Some(serde_json::Value::String(text))) => Self::Text(text),
            (Some("json" | "text"), Some(data)) if !data.is_null() => Self::Text(pretty(&data)),
            (_, data) => {
                if let Some(data) = data {
                    map.insert("data".to_owned(), data);
                }
                Self::Text(pretty(&serde_json::Value::Object(map)))
            }
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Json(_) => ResultKind::Json,
            Self::Text(_) => ResultKind::Text,
        }
    }

    /// Text shown in the viewer and written to the clipboard.
    ///
    /// The json variant is indented with two spaces, like `JSON.stringify(x, null, 2)`.
    pub fn display_text(&self) -> String {
        match self {
            Self::Json(data) => pretty(data),
            Self::Text(text) => text.clone(),
        }
    }

    /// Typed view of the json variant. `None` for text, or when a known
    /// field has the wrong type.
    pub fn bill(&self) -> Option<ParsedBill> {
        match self {
            Self::Json(data) => serde_json::from_value(data.clone()).ok(),
            Self::Text(_) => None,
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

// =============================================================================
// BILL SCHEMA
// =============================================================================

/// A bill extracted from a receipt image. All fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<BillItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<BillTax>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grand_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_info: Option<String>,
    /// Fields the backend sent that are not part of the known schema.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One line item on a bill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One tax line, e.g. `{name: "GST", rate: "5%", amount: 2.1}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillTax {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// NUMBER HELPERS
// =============================================================================

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
