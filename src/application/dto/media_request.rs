// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 媒体URL查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUrlQueryDto {
    /// 对象存储键
    pub key: String,
}

/// 媒体URL响应
#[derive(Debug, Clone, Serialize)]
pub struct MediaUrlResponseDto {
    /// 可直接访问的URL
    pub url: String,
}
