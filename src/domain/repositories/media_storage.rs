// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 签名URL解析错误类型
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// 存储后端错误
    #[error("Storage error: {0}")]
    Storage(String),
    /// 存储配置无效
    #[error("Invalid storage configuration: {0}")]
    Configuration(String),
}

/// 签名URL解析特质
///
/// 将不透明的对象存储键解析为限时可直接访问的URL。
/// URL的实际有效期由外部存储平台控制。
#[async_trait]
pub trait SignedUrlResolver: Send + Sync {
    /// 为指定对象键生成限时访问URL
    async fn signed_url(&self, key: &str) -> Result<String, ResolutionError>;
}
