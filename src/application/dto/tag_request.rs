// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 标签建议请求
#[derive(Debug, Clone, Deserialize)]
pub struct TagSuggestRequestDto {
    /// 文章标题
    pub title: String,
    /// 文章正文
    #[serde(default)]
    pub content: String,
}

/// 标签建议响应
#[derive(Debug, Clone, Serialize)]
pub struct TagSuggestResponseDto {
    /// 建议的标签列表
    pub tags: Vec<String>,
}
