use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure a request can hit, from bad input to a dead connection.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid user id")]
    InvalidIdentifier,
    #[error("User not found")]
    UserNotFound,
    #[error("Username already taken")]
    DuplicateUsername,
    #[error("Invalid date")]
    InvalidDate,
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

/// Wire contract: every error is an HTTP 200 with an `{"error": ...}`
/// body. Existing clients key off the body, not the status code, so the
/// encoding lives here and nowhere else.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(e) = &self {
            tracing::error!(error = %e, "store failure");
        }
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn errors_encode_as_200_with_error_key() {
        for err in [
            ApiError::MissingField("username"),
            ApiError::InvalidIdentifier,
            ApiError::UserNotFound,
            ApiError::DuplicateUsername,
            ApiError::InvalidDate,
        ] {
            let (status, body) = body_json(err).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.get("error").is_some());
        }
    }

    #[tokio::test]
    async fn missing_field_names_the_field() {
        let (_, body) = body_json(ApiError::MissingField("username")).await;
        assert_eq!(body["error"], "username is required");
    }

    #[tokio::test]
    async fn store_error_message_is_passed_through() {
        let (status, body) = body_json(ApiError::Store(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["error"].as_str().unwrap().len() > 0);
    }
}
