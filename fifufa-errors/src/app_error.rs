use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicError {
    TopicRequired,
    TopicTooShort,
    TopicTooLong,
}

impl TopicError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::TopicRequired => "TOPIC_REQUIRED",
            Self::TopicTooShort => "TOPIC_TOO_SHORT",
            Self::TopicTooLong => "TOPIC_TOO_LONG",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::TopicRequired => "Topic is required",
            Self::TopicTooShort => "Topic too short (minimum 2 characters)",
            Self::TopicTooLong => "Topic too long (maximum 50 characters)",
        }
    }
}

impl fmt::Display for TopicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid topic: {0}")]
    Validation(TopicError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream rate limit reached")]
    UpstreamRateLimited,

    #[error("Upstream rejected credentials: {0}")]
    UpstreamAuth(String),

    #[error("Upstream generator failed: {0}")]
    UpstreamUnavailable(String),

    #[error("No words available")]
    NoWordsAvailable,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<TopicError> for AppError {
    fn from(err: TopicError) -> Self {
        AppError::Validation(err)
    }
}

impl AppError {
    /// Message safe to show to API callers. Upstream details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(kind) => kind.message().to_string(),
            Self::BadRequest(detail) => detail.clone(),
            Self::UpstreamRateLimited => "Too many requests. Please wait a moment.".to_string(),
            Self::UpstreamAuth(_) => "API token issue. Please check configuration.".to_string(),
            Self::UpstreamUnavailable(_) | Self::Config(_) => "Something went wrong.".to_string(),
            Self::NoWordsAvailable => "No words available".to_string(),
        }
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        error: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
                AppError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
                AppError::UpstreamAuth(_) => StatusCode::UNAUTHORIZED,
                AppError::UpstreamUnavailable(_)
                | AppError::NoWordsAvailable
                | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if status.is_server_error() {
                tracing::error!(error = %self, "Request failed");
            }
            (
                status,
                Json(ErrorResponse {
                    error: self.user_message(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_error_codes() {
        assert_eq!(TopicError::TopicRequired.code(), "TOPIC_REQUIRED");
        assert_eq!(TopicError::TopicTooShort.code(), "TOPIC_TOO_SHORT");
        assert_eq!(TopicError::TopicTooLong.code(), "TOPIC_TOO_LONG");
    }

    #[test]
    fn test_upstream_details_are_hidden() {
        let err = AppError::UpstreamUnavailable("502 from api.replicate.com".to_string());
        assert_eq!(err.user_message(), "Something went wrong.");
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_validation_message() {
        let err: AppError = TopicError::TopicTooLong.into();
        assert_eq!(err.user_message(), "Topic too long (maximum 50 characters)");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_into_response_shape() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let response = AppError::UpstreamRateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Too many requests. Please wait a moment.");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_status_codes() {
        use axum::http::StatusCode;

        assert_eq!(
            AppError::Validation(TopicError::TopicRequired).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpstreamAuth("401".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NoWordsAvailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
