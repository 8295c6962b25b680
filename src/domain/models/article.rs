// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::text_processing::normalize_text;
use crate::utils::url_utils::source_hostname;

/// 标题未找到时的占位文本
pub const TITLE_PLACEHOLDER: &str = "Titolo non trovato";

/// 正文未找到时的占位文本
pub const CONTENT_PLACEHOLDER: &str = "Contenuto non disponibile";

/// 提取文章
///
/// 一次提取调用的结构化结果。标题和正文始终为非空字符串，
/// 启发式未命中时退化为占位文本，下游表单将其作为必填字段处理。
/// 构造后不可变，由发起提取的调用方独占所有权。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArticle {
    /// 提取出的标题
    pub title: String,
    /// 提取出的正文，段落以空行分隔
    pub content: String,
    /// 原始来源URL
    pub url: String,
    /// 来源主机名
    pub source: String,
    /// 捕获时间
    pub scraped_at: DateTime<Utc>,
}

impl ExtractedArticle {
    /// 组装提取结果
    ///
    /// 启发式阶段内部以 `Option` 表示未命中，占位文本只在
    /// 这里、即序列化边界上应用，便于测试检查未命中情况。
    pub fn assemble(original_url: &str, url: &Url, title: Option<String>, content: Option<String>) -> Self {
        let title = title
            .map(|t| normalize_text(&t))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());
        let content = content
            .map(|c| normalize_text(&c))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| CONTENT_PLACEHOLDER.to_string());

        Self {
            title,
            content,
            url: original_url.to_string(),
            source: source_hostname(url),
            scraped_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_applies_placeholders() {
        let url = Url::parse("https://www.gazzetta.it/calcio/articolo").unwrap();
        let article = ExtractedArticle::assemble("https://www.gazzetta.it/calcio/articolo", &url, None, None);

        assert_eq!(article.title, TITLE_PLACEHOLDER);
        assert_eq!(article.content, CONTENT_PLACEHOLDER);
        assert_eq!(article.source, "www.gazzetta.it");
    }

    #[test]
    fn test_assemble_normalizes_fields() {
        let url = Url::parse("https://example.com/a").unwrap();
        let article = ExtractedArticle::assemble(
            "https://example.com/a",
            &url,
            Some("  La  partita \n".to_string()),
            Some("uno\n\n\n\ndue".to_string()),
        );

        assert_eq!(article.title, "La partita");
        assert_eq!(article.content, "uno\n\ndue");
    }

    #[test]
    fn test_blank_extraction_falls_back_to_placeholder() {
        let url = Url::parse("https://example.com/a").unwrap();
        let article =
            ExtractedArticle::assemble("https://example.com/a", &url, Some("   ".to_string()), Some("\n\n".to_string()));

        assert_eq!(article.title, TITLE_PLACEHOLDER);
        assert_eq!(article.content, CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_serializes_with_camel_case_timestamp() {
        let url = Url::parse("https://example.com/a").unwrap();
        let article = ExtractedArticle::assemble(
            "https://example.com/a",
            &url,
            Some("Titolo valido".to_string()),
            Some("Contenuto".to_string()),
        );

        let json = serde_json::to_value(&article).unwrap();
        assert!(json.get("scrapedAt").is_some());
        assert_eq!(json["source"], "example.com");
    }
}
