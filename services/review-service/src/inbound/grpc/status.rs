//! Map domain errors onto gRPC statuses.

use tonic::{Code, Status};
use tracing::error;

use crate::domain::{Error, ErrorCode};

fn code_for(code: ErrorCode) -> Code {
    match code {
        ErrorCode::InvalidArgument => Code::InvalidArgument,
        ErrorCode::NotFound => Code::NotFound,
        ErrorCode::ServiceUnavailable => Code::Unavailable,
        ErrorCode::InternalError => Code::Internal,
    }
}

/// Status for a domain error. Internal messages are logged, not returned.
pub fn status_for(error: &Error) -> Status {
    let code = code_for(error.code());
    if code == Code::Internal {
        error!(message = error.message(), "internal error returned to client");
        return Status::internal("Internal server error");
    }
    Status::new(code, error.message())
}

impl From<Error> for Status {
    fn from(error: Error) -> Self {
        status_for(&error)
    }
}
