// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::extract_request::ExtractRequestDto;
use crate::domain::services::extraction_service::ArticleExtractor;
use crate::presentation::errors::AppError;

pub async fn extract(
    Extension(extractor): Extension<Arc<ArticleExtractor>>,
    Json(payload): Json<ExtractRequestDto>,
) -> Result<Json<Value>, AppError> {
    // Validate the request
    if let Err(message) = payload.validate() {
        return Err(anyhow::anyhow!(message).into());
    }

    info!("Extracting article from: {}", payload.url);
    let article = extractor.extract(&payload.url).await?;

    Ok(Json(json!({
        "success": true,
        "article": article
    })))
}
