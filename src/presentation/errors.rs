// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::media_storage::ResolutionError;
use crate::domain::services::extraction_service::ExtractError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = if let Some(extract_err) = self.0.downcast_ref::<ExtractError>() {
            match extract_err {
                ExtractError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                ExtractError::Fetch(_) => StatusCode::BAD_GATEWAY,
            }
        } else if let Some(resolution_err) = self.0.downcast_ref::<ResolutionError>() {
            match resolution_err {
                ResolutionError::Storage(_) => StatusCode::BAD_GATEWAY,
                ResolutionError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            // 检查是否为验证错误（包含特定关键词）
            if error_message.contains("cannot be empty")
                || error_message.contains("invalid")
                || error_message.contains("required")
                || error_message.contains("validation")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::traits::FetchError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_invalid_url_maps_to_bad_request() {
        let err = ExtractError::InvalidUrl(url::ParseError::EmptyHost);
        assert_eq!(status_of(AppError::from(err)), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fetch_failure_maps_to_bad_gateway() {
        let err = ExtractError::Fetch(FetchError::BadStatus(503));
        assert_eq!(status_of(AppError::from(err)), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_storage_failure_maps_to_bad_gateway() {
        let err = ResolutionError::Storage("bucket unavailable".to_string());
        assert_eq!(status_of(AppError::from(err)), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_error_maps_to_internal() {
        let err = anyhow::anyhow!("something broke");
        assert_eq!(
            status_of(AppError::from(err)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
