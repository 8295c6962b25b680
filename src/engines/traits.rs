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

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// 抓取错误类型
///
/// 网络和代理层的失败是唯一向调用方传播的提取错误；
/// 解析和启发式提取阶段从不失败，而是退化为占位文本。
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 代理返回非成功状态码
    #[error("Proxy returned status {0}")]
    BadStatus(u16),
    /// 代理响应缺少内容字段或格式错误
    #[error("Malformed proxy response: {0}")]
    MalformedResponse(String),
}

/// 页面抓取特质
///
/// 定义获取目标URL原始HTML的接口，便于在测试中替换网络实现
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取目标页面的原始HTML
    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
