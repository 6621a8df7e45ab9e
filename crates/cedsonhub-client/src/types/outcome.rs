/*
[INPUT]:  Decoded payloads and error messages from every call path
[OUTPUT]: Outcome - the uniform {success, result, error} envelope
[POS]:    Data layer - caller-facing result of every operation
[UPDATE]: When the caller-facing contract changes
*/

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::invoice::InvoiceStatus;

/// Message for failures that carry no usable text
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Message returned whenever the service could not be reached or understood
pub const NOT_RESPONDING: &str = "CedsonHub server is not responding";

/// Result envelope returned by every CedsonHub call.
///
/// A successful outcome carries the decoded payload and an empty error; a
/// failed one carries an empty object and a non-empty error message. The
/// fields are private so that no other combination can be built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    success: bool,
    result: Value,
    error: String,
}

impl Outcome {
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result,
            error: String::new(),
        }
    }

    /// Failed outcome; an empty message is replaced with [`UNKNOWN_ERROR`]
    pub fn failure(error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.is_empty() {
            error = UNKNOWN_ERROR.to_string();
        }
        Self {
            success: false,
            result: Value::Object(Map::new()),
            error,
        }
    }

    pub fn not_responding() -> Self {
        Self::failure(NOT_RESPONDING)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn into_result(self) -> Value {
        self.result
    }

    /// Decode the payload of a successful outcome into `T`
    pub fn result_as<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.success {
            return None;
        }
        serde_json::from_value(self.result.clone()).ok()
    }

    /// `status` of an invoice verification payload
    pub fn invoice_status(&self) -> Option<InvoiceStatus> {
        if !self.success {
            return None;
        }
        self.result
            .get("status")
            .and_then(|status| serde_json::from_value(status.clone()).ok())
    }
}
