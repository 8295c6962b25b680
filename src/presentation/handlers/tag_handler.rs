// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::tag_request::{TagSuggestRequestDto, TagSuggestResponseDto};
use crate::domain::services::tag_classifier::TagClassifier;
use crate::presentation::errors::AppError;

/// 根据文章标题和正文建议标签
pub async fn suggest_tags(
    Extension(classifier): Extension<Arc<dyn TagClassifier>>,
    Json(payload): Json<TagSuggestRequestDto>,
) -> Result<Json<TagSuggestResponseDto>, AppError> {
    if payload.title.trim().is_empty() && payload.content.trim().is_empty() {
        return Err(anyhow::anyhow!("Title or content is required").into());
    }

    let tags = classifier.suggest(&payload.title, &payload.content);
    Ok(Json(TagSuggestResponseDto { tags }))
}
