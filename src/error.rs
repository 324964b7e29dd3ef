//! Typed errors raised below the use-case boundary.
//!
//! Nothing in this module crosses into the presentation layer directly:
//! use cases and repositories fold every [`AppError`] into an error
//! [`Envelope`](crate::dto::Envelope) through the `From` impl in
//! [`crate::dto::envelope`].

use thiserror::Error;

use crate::domain::entities::TrackerError;

/// Failures produced by repositories, entities, and capability checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A looked-up record does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// The collaborator does not implement the requested operation.
    #[error("unsupported repository operation: {operation}")]
    Unsupported { operation: &'static str },

    /// An entity rejected a state transition.
    #[error(transparent)]
    Domain(#[from] TrackerError),
}

impl AppError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("carrier", "kr.cjlogistics");
        assert_eq!(err.to_string(), "carrier not found: kr.cjlogistics");
    }

    #[test]
    fn test_unsupported_message() {
        let err = AppError::unsupported("getDelivery");
        assert_eq!(
            err.to_string(),
            "unsupported repository operation: getDelivery"
        );
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err = AppError::from(TrackerError::MemoIndexOutOfRange { index: 3, len: 1 });
        assert_eq!(err.to_string(), "memo index 3 out of range (len 1)");
    }
}
