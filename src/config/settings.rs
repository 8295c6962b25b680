// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、代理抓取、媒体URL缓存和对象存储等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 代理抓取配置
    pub proxy: ProxySettings,
    /// 媒体URL缓存配置
    pub media_cache: MediaCacheSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 代理抓取配置设置
#[derive(Debug, Deserialize)]
pub struct ProxySettings {
    /// 跨域代理端点，目标URL作为查询参数传递
    pub endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 媒体URL缓存配置设置
#[derive(Debug, Deserialize)]
pub struct MediaCacheSettings {
    /// 缓存条目有效期（秒），必须小于签名URL的实际有效期
    pub cache_duration_secs: u64,
    /// 后台清理周期（秒）
    pub sweep_interval_secs: u64,
    /// 签名URL的有效期（秒）
    pub signed_url_ttl_secs: u64,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local, s3)
    pub storage_type: String,
    /// 本地存储的公开基础URL (当 type=local 时使用)
    pub local_base_url: Option<String>,
    /// S3 区域
    pub s3_region: Option<String>,
    /// S3 存储桶名称
    pub s3_bucket: Option<String>,
    /// S3 访问密钥
    pub s3_access_key: Option<String>,
    /// S3 密钥
    pub s3_secret_key: Option<String>,
    /// S3 端点 (可选，用于 MinIO 等兼容服务)
    pub s3_endpoint: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default proxy fetch settings
            .set_default("proxy.endpoint", "https://api.allorigins.win/get")?
            .set_default("proxy.timeout_secs", 30)?
            // Default media cache settings.
            // cache_duration stays one minute below the signed URL lifetime.
            .set_default("media_cache.cache_duration_secs", 14 * 60)?
            .set_default("media_cache.sweep_interval_secs", 5 * 60)?
            .set_default("media_cache.signed_url_ttl_secs", 15 * 60)?
            // Default storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_base_url", "http://localhost:3000/media")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("RITAGLIO").separator("__"));

        builder.build()?.try_deserialize()
    }
}
