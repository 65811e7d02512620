use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] plumbline_core::error::CoreError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Writes `error` to `res` as a JSON error payload with its status code.
///
/// Internal details are logged, not returned to the client.
pub fn render_error(res: &mut salvo::Response, error: &AppError) {
    let status = error.status_code();
    let message = match error {
        AppError::BadRequest(_) => error.to_string(),
        AppError::CoreError(_) => {
            tracing::error!(error = %error, "Request failed");
            "Internal server error".to_string()
        }
    };
    res.status_code(status);
    res.render(Json(ErrorResponse { error: message }));
}
