// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::{MediaCacheSettings, StorageSettings};
use crate::domain::repositories::media_storage::{ResolutionError, SignedUrlResolver};

/// S3 签名URL解析实现
///
/// 通过预签名的 GetObject 请求生成限时访问URL
pub struct S3SignedUrlStorage {
    client: aws_sdk_s3::Client,
    bucket: String,
    url_ttl: Duration,
}

impl S3SignedUrlStorage {
    pub fn new(
        region: String,
        bucket: String,
        access_key: String,
        secret_key: String,
        endpoint: Option<String>,
        url_ttl: Duration,
    ) -> Self {
        let credentials =
            aws_sdk_s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let mut config_builder = aws_sdk_s3::config::Builder::new()
            .region(aws_sdk_s3::config::Region::new(region))
            .credentials_provider(credentials);

        if let Some(ep) = endpoint {
            config_builder = config_builder.endpoint_url(ep).force_path_style(true);
        }

        let config = config_builder.build();
        let client = aws_sdk_s3::Client::from_conf(config);

        Self {
            client,
            bucket,
            url_ttl,
        }
    }
}

#[async_trait]
impl SignedUrlResolver for S3SignedUrlStorage {
    async fn signed_url(&self, key: &str) -> Result<String, ResolutionError> {
        let presigning = PresigningConfig::expires_in(self.url_ttl)
            .map_err(|e| ResolutionError::Configuration(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| ResolutionError::Storage(e.to_string()))?;

        Ok(request.uri().to_string())
    }
}

/// 本地开发用的URL解析实现
///
/// 将对象键拼接到配置的公开基础URL上，不做签名
pub struct LocalUrlStorage {
    base_url: String,
}

impl LocalUrlStorage {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SignedUrlResolver for LocalUrlStorage {
    async fn signed_url(&self, key: &str) -> Result<String, ResolutionError> {
        Ok(format!("{}/{}", self.base_url, key.trim_start_matches('/')))
    }
}

/// 存储工厂函数
pub fn create_signed_url_resolver(
    storage: &StorageSettings,
    media_cache: &MediaCacheSettings,
) -> Result<Arc<dyn SignedUrlResolver>, ResolutionError> {
    match storage.storage_type.as_str() {
        "local" => {
            let base_url = storage
                .local_base_url
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "http://localhost:3000/media".to_string());
            Ok(Arc::new(LocalUrlStorage::new(base_url)))
        }

        "s3" => {
            let region = storage
                .s3_region
                .as_ref()
                .cloned()
                .ok_or_else(|| ResolutionError::Configuration("s3_region is required".into()))?;
            let bucket = storage
                .s3_bucket
                .as_ref()
                .cloned()
                .ok_or_else(|| ResolutionError::Configuration("s3_bucket is required".into()))?;
            let access_key = storage.s3_access_key.as_ref().cloned().ok_or_else(|| {
                ResolutionError::Configuration("s3_access_key is required".into())
            })?;
            let secret_key = storage.s3_secret_key.as_ref().cloned().ok_or_else(|| {
                ResolutionError::Configuration("s3_secret_key is required".into())
            })?;

            Ok(Arc::new(S3SignedUrlStorage::new(
                region,
                bucket,
                access_key,
                secret_key,
                storage.s3_endpoint.clone(),
                Duration::from_secs(media_cache.signed_url_ttl_secs),
            )))
        }

        other => Err(ResolutionError::Configuration(format!(
            "Unsupported storage type: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_storage_joins_key_onto_base_url() {
        let storage = LocalUrlStorage::new("http://localhost:3000/media/".to_string());
        let url = storage.signed_url("public/foto.jpg").await.unwrap();
        assert_eq!(url, "http://localhost:3000/media/public/foto.jpg");
    }

    #[test]
    fn test_factory_rejects_unknown_backend() {
        let storage = StorageSettings {
            storage_type: "ftp".to_string(),
            local_base_url: None,
            s3_region: None,
            s3_bucket: None,
            s3_access_key: None,
            s3_secret_key: None,
            s3_endpoint: None,
        };
        let media_cache = MediaCacheSettings {
            cache_duration_secs: 840,
            sweep_interval_secs: 300,
            signed_url_ttl_secs: 900,
        };

        let result = create_signed_url_resolver(&storage, &media_cache);
        assert!(matches!(result, Err(ResolutionError::Configuration(_))));
    }

    #[test]
    fn test_factory_requires_s3_settings() {
        let storage = StorageSettings {
            storage_type: "s3".to_string(),
            local_base_url: None,
            s3_region: None,
            s3_bucket: None,
            s3_access_key: None,
            s3_secret_key: None,
            s3_endpoint: None,
        };
        let media_cache = MediaCacheSettings {
            cache_duration_secs: 840,
            sweep_interval_secs: 300,
            signed_url_ttl_secs: 900,
        };

        let result = create_signed_url_resolver(&storage, &media_cache);
        assert!(matches!(result, Err(ResolutionError::Configuration(_))));
    }
}
