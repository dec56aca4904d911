//! Helpers for reading loosely typed fields from JSON request bodies.
//!
//! Clients may send numbers as JSON numbers or as strings (e.g. `"20"`), and a
//! field counts as missing when it is absent or falsy. These helpers give the
//! handlers a single place to apply those rules.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// A JSON request body whose rejections are reported as [Error] responses.
///
/// A request without a JSON content type, such as one with no body at all, is
/// read as an empty object, i.e. `T::default()`. This lets the handler report
/// a missing account before complaining about missing fields. Malformed JSON
/// is still rejected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(body)) => Ok(Self(body)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

/// Whether `value` counts as present.
///
/// `null`, `false`, zero and the empty string are falsy, everything else is
/// truthy. Absent fields are `None` and therefore falsy too.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|number| number != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Get `value` as text if it is truthy.
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    if is_truthy(value) {
        value.map(value_text)
    } else {
        None
    }
}

/// Render `value` as the text a client would expect to see when the value is
/// concatenated into a string.
///
/// Strings are used as is, whole numbers have no trailing `.0`, and arrays are
/// joined with commas.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                integer.to_string()
            } else if let Some(integer) = number.as_u64() {
                integer.to_string()
            } else {
                number.as_f64().map(number_text).unwrap_or_default()
            }
        }
        Value::String(text) => text.clone(),
        Value::Array(values) => values
            .iter()
            .map(|value| match value {
                Value::Null => String::new(),
                value => value_text(value),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// Format `number` the way a JavaScript client would print it.
///
/// Magnitudes from `1e-6` up to `1e21` are written out in full without a
/// trailing `.0`. Anything else uses exponent notation with an explicit sign,
/// e.g. `1e+21` and `1.5e-7`.
fn number_text(number: f64) -> String {
    if number == 0.0 {
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&number.abs()) {
        return number.to_string();
    }

    let text = format!("{number:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Read a numeric field that may have been sent as a number or as text.
///
/// JSON numbers are used directly. Anything else is rendered with
/// [value_text] and parsed with [parse_float]. Returns `None` if the value
/// is not a number.
pub fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        value => parse_float(&value_text(value)),
    }
}

/// Parse the longest prefix of `text` that is a decimal number.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `" 12.5 dollars"` parses as `12.5`. Returns `None` if `text` does not
/// start with a number.
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digit_count = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        digit_count += fraction_end - fraction_start;

        if digit_count > 0 {
            end = fraction_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    // Only consume the exponent if it has at least one digit, e.g. "1e" is 1.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
