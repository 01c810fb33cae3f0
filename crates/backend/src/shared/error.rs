use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ApiErrorBody;

/// Ошибка обработчика API: статус + тело `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Зависимость не настроена или недоступна (503)
    #[error("{0}")]
    Unavailable(String),

    /// Ответ внешнего сервиса с его статусом
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Backend Error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} {}", status.as_u16(), self);
        } else {
            tracing::warn!("{} {}", status.as_u16(), self);
        }
        (status, Json(ApiErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        let upstream = ApiError::Upstream {
            status: StatusCode::BAD_REQUEST,
            message: "Not enough data for forecast".into(),
        };
        assert_eq!(upstream.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upstream.to_string(), "Not enough data for forecast");
    }

    #[test]
    fn test_internal_error_message() {
        let err = ApiError::from(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "Backend Error: disk full");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
