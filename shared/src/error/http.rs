//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::MemberNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::DuplicateIdentity => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::TemplateError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation failures)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::InvalidGroupCode
            | Self::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}
