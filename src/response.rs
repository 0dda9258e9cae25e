use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Wrapper for API responses that adds the `{message, data, success}` envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful 200 response with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status_code: StatusCode::OK,
        }
    }

    /// 201 Created response with a payload
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            status_code: StatusCode::CREATED,
        }
    }
}

impl ApiResponse<()> {
    /// 200 response carrying only a message (deletes)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            status_code: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut envelope = json!({
            "message": self.message,
            "success": true,
        });

        if let Some(data) = self.data {
            match serde_json::to_value(&data) {
                Ok(value) => {
                    envelope["data"] = value;
                }
                Err(e) => {
                    tracing::error!("failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": "failed to serialize response data",
                            "success": false,
                        })),
                    )
                        .into_response();
                }
            }
        }

        (self.status_code, Json(envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_uses_201() {
        let res = ApiResponse::created("Created!", 42).into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[test]
    fn message_only_uses_200() {
        let res = ApiResponse::message_only("Deleted!").into_response();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
