//! Result envelope shared by every layer boundary.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Uniform `{isError, message, data}` wrapper for success and failure.
///
/// Repositories hand envelopes to use cases, and use cases hand envelopes to
/// the presentation layer; nothing in between raises errors out of band.
///
/// An error envelope never carries data. A success envelope normally does,
/// but `Envelope<bool>` with `data == Some(false)` is still a success: the
/// repository answered "no", it did not fail.
///
/// # JSON shape
///
/// ```json
/// { "isError": true, "message": "carrier not found: kr.epost", "data": null }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    from = "RawEnvelope<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Envelope<T> {
    is_error: bool,
    message: Option<String>,
    data: Option<T>,
}

/// Wire shape of an [`Envelope`]; deserialized envelopes go through
/// [`Envelope::new`] so an error never arrives with data.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    #[serde(default)]
    is_error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

impl<T> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        Self::new(raw.is_error, raw.message, raw.data)
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            is_error: false,
            message: None,
            data: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Builds an envelope from its raw parts.
    ///
    /// When `is_error` is set any `data` is discarded, so the "error means no
    /// data" rule holds no matter what the caller passes.
    pub fn new(is_error: bool, message: Option<String>, data: Option<T>) -> Self {
        Self {
            is_error,
            message,
            data: if is_error { None } else { data },
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            is_error: false,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            message: Some(message.into()),
            data: None,
        }
    }

    /// An error with no message. `is_error` alone is authoritative.
    pub fn failure_without_message() -> Self {
        Self {
            is_error: true,
            message: None,
            data: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Re-types an envelope for the caller's payload, keeping `is_error` and
    /// `message` verbatim and dropping any data.
    ///
    /// Used on the error path, where the payload type changes but the
    /// collaborator's failure must reach the caller untouched.
    pub fn propagate<U>(self) -> Envelope<U> {
        Envelope {
            is_error: self.is_error,
            message: self.message,
            data: None,
        }
    }

    /// Transforms the payload of a success envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            is_error: self.is_error,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl<T> From<AppError> for Envelope<T> {
    fn from(err: AppError) -> Self {
        Self::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_success_without_data() {
        let envelope: Envelope<bool> = Envelope::default();

        assert!(!envelope.is_error());
        assert!(envelope.message().is_none());
        assert!(envelope.data().is_none());
    }

    #[test]
    fn test_new_drops_data_on_error() {
        let envelope = Envelope::new(true, Some("Error".to_string()), Some(42));

        assert!(envelope.is_error());
        assert_eq!(envelope.message(), Some("Error"));
        assert!(envelope.data().is_none());
    }

    #[test]
    fn test_false_payload_is_not_an_error() {
        let envelope = Envelope::success(false);

        assert!(!envelope.is_error());
        assert_eq!(envelope.data(), Some(&false));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Envelope::success(vec![1, 2]), Envelope::success(vec![1, 2]));
        assert_ne!(Envelope::success(1), Envelope::failure("Error"));
        assert_eq!(
            Envelope::<u8>::failure("Error"),
            Envelope::new(true, Some("Error".to_string()), None)
        );
    }

    #[test]
    fn test_propagate_keeps_message() {
        let source: Envelope<Vec<u8>> = Envelope::failure("Error");

        let propagated: Envelope<String> = source.propagate();

        assert!(propagated.is_error());
        assert_eq!(propagated.message(), Some("Error"));
        assert!(propagated.data().is_none());
    }

    #[test]
    fn test_propagate_without_message() {
        let propagated: Envelope<u8> = Envelope::<()>::failure_without_message().propagate();

        assert!(propagated.is_error());
        assert!(propagated.message().is_none());
    }

    #[test]
    fn test_from_app_error() {
        let envelope: Envelope<bool> = AppError::not_found("tracker", "7").into();

        assert!(envelope.is_error());
        assert_eq!(envelope.message(), Some("tracker not found: 7"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(Envelope::success(true)).unwrap();
        assert_eq!(value, json!({ "isError": false, "message": null, "data": true }));

        let value = serde_json::to_value(Envelope::<bool>::failure("Error")).unwrap();
        assert_eq!(value, json!({ "isError": true, "message": "Error", "data": null }));
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let envelope: Envelope<bool> = serde_json::from_value(json!({ "data": true })).unwrap();

        assert_eq!(envelope, Envelope::success(true));
    }

    #[test]
    fn test_json_error_with_data_drops_data() {
        let envelope: Envelope<bool> = serde_json::from_value(json!({
            "isError": true,
            "message": "x",
            "data": true
        }))
        .unwrap();

        assert!(envelope.is_error());
        assert_eq!(envelope.message(), Some("x"));
        assert!(envelope.data().is_none());
    }
}
