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

use crate::config::settings::ProxySettings;
use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// 代理抓取引擎
///
/// 通过跨域代理服务获取目标页面的原始HTML。
/// 目标URL经过URL编码后作为查询参数传递，代理以JSON信封返回页面内容。
pub struct ProxyFetchEngine {
    client: reqwest::Client,
    endpoint: String,
}

/// 代理响应信封
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: Option<String>,
}

impl ProxyFetchEngine {
    /// 创建新的代理抓取引擎
    pub fn new(settings: &ProxySettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ritaglio/1.0)")
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for ProxyFetchEngine {
    /// 通过代理获取页面HTML
    ///
    /// # 参数
    ///
    /// * `url` - 目标文章URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面原始HTML
    /// * `Err(FetchError)` - 网络失败、代理非成功状态或响应格式错误
    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        let request_url = format!(
            "{}?url={}",
            self.endpoint,
            urlencoding::encode(url.as_str())
        );
        debug!("Fetching page through proxy: {}", url);

        let response = self.client.get(&request_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let envelope: ProxyEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        envelope
            .contents
            .ok_or_else(|| FetchError::MalformedResponse("missing contents field".to_string()))
    }

    /// 引擎名称
    fn name(&self) -> &'static str {
        "proxy_fetch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ProxySettings;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> ProxySettings {
        ProxySettings {
            endpoint: format!("{}/get", server.uri()),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_contents_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .and(query_param("url", "https://example.com/articolo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "contents": "<html><body><h1>Titolo</h1></body></html>",
                "status": { "http_code": 200 }
            })))
            .mount(&server)
            .await;

        let engine = ProxyFetchEngine::new(&settings_for(&server)).unwrap();
        let url = Url::parse("https://example.com/articolo").unwrap();
        let html = engine.fetch_html(&url).await.unwrap();

        assert!(html.contains("<h1>Titolo</h1>"));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_proxy_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let engine = ProxyFetchEngine::new(&settings_for(&server)).unwrap();
        let url = Url::parse("https://example.com/articolo").unwrap();
        let err = engine.fetch_html(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::BadStatus(502)));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_missing_contents() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": {} })))
            .mount(&server)
            .await;

        let engine = ProxyFetchEngine::new(&settings_for(&server)).unwrap();
        let url = Url::parse("https://example.com/articolo").unwrap();
        let err = engine.fetch_html(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }
}
