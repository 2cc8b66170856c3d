//! The uniform response envelope returned by every backend endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when the backend reports failure without a usable error
/// body.
pub const GENERIC_ERROR_MESSAGE: &str = "The request could not be completed";

/// Uniform API response wrapper: `{ isSuccess, value, error }`.
///
/// The explicit deserialize bound keeps the payload type free of the
/// `Default` requirement the field-level `default` would otherwise infer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiEnvelope<T> {
    pub is_success: bool,
    #[serde(default)]
    pub value: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// Error object carried inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl ApiErrorBody {
    pub fn generic() -> Self {
        Self {
            status_code: 0,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the payload or the carried error.
    ///
    /// A success envelope without a payload and a failure envelope without an
    /// error body both fall back to [`GENERIC_ERROR_MESSAGE`].
    pub fn into_result(self) -> Result<T, ApiErrorBody> {
        if self.is_success {
            self.value.ok_or_else(ApiErrorBody::generic)
        } else {
            Err(self.error.unwrap_or_else(ApiErrorBody::generic))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_value() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_value(json!({
            "isSuccess": true,
            "value": ["a", "b"],
            "error": null,
        }))
        .unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn failure_envelope_yields_error_message() {
        let envelope: ApiEnvelope<String> = serde_json::from_value(json!({
            "isSuccess": false,
            "value": null,
            "error": { "statusCode": 409, "message": "Email already registered" },
        }))
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.status_code, 409);
        assert_eq!(err.message, "Email already registered");
    }

    #[test]
    fn failure_without_error_body_falls_back_to_generic_message() {
        let envelope: ApiEnvelope<String> =
            serde_json::from_value(json!({ "isSuccess": false })).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn success_without_value_is_an_error() {
        let envelope: ApiEnvelope<String> =
            serde_json::from_value(json!({ "isSuccess": true })).unwrap();
        assert!(envelope.into_result().is_err());
    }

    // Mirrors how the client layer decodes envelopes: behind a generic
    // bounded only by DeserializeOwned, with a payload that has no Default.
    fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> ApiEnvelope<T> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn envelope_decodes_behind_a_plain_deserialize_bound() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Payload {
            id: u32,
        }

        let envelope = decode::<Payload>(json!({
            "isSuccess": true,
            "value": { "id": 7 },
        }));
        assert_eq!(envelope.into_result().unwrap(), Payload { id: 7 });

        let missing = decode::<Payload>(json!({ "isSuccess": true }));
        assert!(missing.into_result().is_err());
    }
}
