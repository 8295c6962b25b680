// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

use crate::application::dto::media_request::{MediaUrlQueryDto, MediaUrlResponseDto};
use crate::infrastructure::cache::MediaUrlCache;
use crate::presentation::errors::AppError;

/// 获取媒体对象的可用URL
///
/// 对象键通过查询参数传递，键内可以包含斜杠
pub async fn get_media_url(
    Extension(cache): Extension<Arc<MediaUrlCache>>,
    Query(query): Query<MediaUrlQueryDto>,
) -> Result<Json<MediaUrlResponseDto>, AppError> {
    if query.key.trim().is_empty() {
        return Err(anyhow::anyhow!("Media key cannot be empty").into());
    }

    let url = cache.resolve(&query.key).await?;
    Ok(Json(MediaUrlResponseDto { url }))
}

/// 刷新媒体对象的URL
///
/// 消费端报告缓存的URL已不可用时调用，逐出旧条目并重新解析一次
pub async fn refresh_media_url(
    Extension(cache): Extension<Arc<MediaUrlCache>>,
    Query(query): Query<MediaUrlQueryDto>,
) -> Result<Json<MediaUrlResponseDto>, AppError> {
    if query.key.trim().is_empty() {
        return Err(anyhow::anyhow!("Media key cannot be empty").into());
    }

    let url = cache.handle_load_failure(&query.key).await?;
    Ok(Json(MediaUrlResponseDto { url }))
}
