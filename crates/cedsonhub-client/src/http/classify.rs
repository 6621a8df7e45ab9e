/*
[INPUT]:  HTTP status code and decoded response body
[OUTPUT]: Outcome (payload or categorized error message)
[POS]:    HTTP layer - response classification by status range
[UPDATE]: When CedsonHub changes its error body format or adds validated fields
*/

use std::fmt::Write as _;

use serde_json::Value;

use crate::types::{Outcome, UNKNOWN_ERROR};

/// Generic message for 5xx responses; server details are not passed on
pub const SERVER_ERROR: &str = "Something went wrong on CedsonHub's server";

/// Field keys reported in 400 bodies, in the order their messages are joined.
pub const ERROR_FIELDS: &[&str] = &[
    "api_key",
    "username",
    "currency",
    "amount_in_coins",
    "amount_in_satoshis",
    "to",
    "ip_address",
    "is_referral",
    "payment_id",
];

/// Map a status code and decoded body to an [`Outcome`].
pub fn classify(status: u16, body: Value) -> Outcome {
    if status == 200 {
        success_outcome(body)
    } else {
        error_outcome(status, &body)
    }
}

pub fn success_outcome(body: Value) -> Outcome {
    Outcome::success(body)
}

/// Error path for any status other than 200. Never fails, whatever the body.
pub fn error_outcome(status: u16, body: &Value) -> Outcome {
    match status {
        400 => Outcome::failure(field_errors(body)),
        401..=499 => Outcome::failure(detail(body)),
        500..=599 => Outcome::failure(SERVER_ERROR),
        _ => Outcome::failure(UNKNOWN_ERROR),
    }
}

/// One `"<key>: <message>\n"` line per known field present in the body.
fn field_errors(body: &Value) -> String {
    let Some(fields) = body.as_object() else {
        return UNKNOWN_ERROR.to_string();
    };

    let mut message = String::new();
    for key in ERROR_FIELDS {
        if let Some(value) = fields.get(*key) {
            let _ = writeln!(message, "{key}: {}", first_message(value));
        }
    }

    if message.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

// Field errors normally arrive as a list of strings; only the first is shown.
fn first_message(value: &Value) -> String {
    match value {
        Value::Array(messages) => messages.first().map(render).unwrap_or_default(),
        other => render(other),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn detail(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}
