// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::domain::models::article::ExtractedArticle;
use crate::domain::services::{content_extractor, page_cleaner, title_extractor};
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::url_utils::source_hostname;

/// 提取错误类型
///
/// 网络抓取失败是唯一向调用方传播的错误；解析和启发式
/// 阶段从不失败，未命中退化为占位文本。
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 文章URL无效
    #[error("Invalid article URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// 抓取失败
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// 文章提取服务
///
/// 编排完整的提取流水线：抓取、解析、噪音清理、
/// 标题提取、正文提取、规范化和结果组装。
pub struct ArticleExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl ArticleExtractor {
    /// 创建新的文章提取服务
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// 提取文章
    ///
    /// # 参数
    ///
    /// * `url` - 目标文章的HTTP(S) URL字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(ExtractedArticle)` - 提取结果，字段可能为占位文本
    /// * `Err(ExtractError)` - URL无效或网络抓取失败
    pub async fn extract(&self, url: &str) -> Result<ExtractedArticle, ExtractError> {
        let parsed = Url::parse(url)?;
        let html = self.fetcher.fetch_html(&parsed).await?;
        Ok(self.extract_from_html(url, &parsed, &html))
    }

    /// 从已获取的HTML中提取文章
    ///
    /// 对任意输入都不失败，启发式未命中退化为占位文本
    pub fn extract_from_html(&self, original_url: &str, url: &Url, html: &str) -> ExtractedArticle {
        let mut doc = Html::parse_document(html);
        page_cleaner::remove_noise(&mut doc);

        let domain = source_hostname(url);
        let title = title_extractor::extract_title(&doc);
        let content = content_extractor::extract_content(&doc, &domain);
        debug!(
            "Extraction for {}: title found: {}, content found: {}",
            domain,
            title.is_some(),
            content.is_some()
        );

        ExtractedArticle::assemble(original_url, url, title, content)
    }
}
