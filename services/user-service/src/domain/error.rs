//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and a JSON envelope carrying an `error` field.

use serde::Serialize;

use super::trace_id::TraceId;

/// Header carrying the request trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Login failed; the account is unknown or the password does not match.
    InvalidCredentials,
    /// No bearer token accompanied a protected request.
    Unauthorized,
    /// A bearer token was presented but could not be verified.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The backing store is not reachable yet.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// The trace identifier of the surrounding request is captured on
/// construction when one is in scope.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("User not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "User not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorBody")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl DomainError {
    /// Create a new error, capturing the ambient trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier of the request that produced the error, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidCredentials`].
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "invalid credentials")
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DomainError {}

/// Wire shape of an error response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<DomainError> for ErrorBody {
    fn from(value: DomainError) -> Self {
        Self {
            error: value.message,
            code: value.code,
            trace_id: value.trace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the error payload formatting and trace propagation.

    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[rstest]
    #[case(DomainError::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(DomainError::invalid_credentials(), ErrorCode::InvalidCredentials)]
    #[case(DomainError::unauthorized("no token"), ErrorCode::Unauthorized)]
    #[case(DomainError::forbidden("bad token"), ErrorCode::Forbidden)]
    #[case(DomainError::not_found("missing"), ErrorCode::NotFound)]
    #[case(DomainError::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
    #[case(DomainError::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] error: DomainError, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn trace_id_is_none_out_of_scope() {
        assert!(DomainError::internal("boom").trace_id().is_none());
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
        let error = TraceId::scope(trace_id, async { DomainError::not_found("missing") }).await;
        assert_eq!(error.trace_id(), Some(TRACE_ID));
    }

    #[rstest]
    fn serialises_error_field_and_code() {
        let error = DomainError::not_found("User not found").with_trace_id(TRACE_ID);
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(
            value,
            json!({ "error": "User not found", "code": "not_found", "traceId": TRACE_ID })
        );
    }

    #[rstest]
    fn omits_trace_id_when_absent() {
        let value = serde_json::to_value(DomainError::invalid_credentials()).expect("serialise");
        assert!(value.get("traceId").is_none());
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some("invalid credentials")
        );
    }
}
