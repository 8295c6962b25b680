// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};

use crate::domain::services::selector_rules::{
    NAVIGATION_KEYWORDS, TITLE_META_SELECTORS, TITLE_SELECTORS,
};

/// 非占位标题的最小长度（不含）
const MIN_TITLE_LEN: usize = 5;

/// 最终 h1 回退的最小长度（不含）
const MIN_FALLBACK_H1_LEN: usize = 10;

/// 标题的最大长度（不含）
const MAX_TITLE_LEN: usize = 200;

/// 提取页面标题
///
/// 按优先级尝试：
/// 1. 社交预览元标签（og:title、twitter:title、通用 title 元标签）
/// 2. 从通用到具体的标题选择器，按文档顺序扫描所有匹配，
///    跳过疑似导航/菜单项的短文本
/// 3. 文档中第一个足够长的 `<h1>`
///
/// 未命中返回 `None`，占位文本由组装阶段应用。
pub fn extract_title(doc: &Html) -> Option<String> {
    if let Some(title) = title_from_meta_tags(doc) {
        return Some(title);
    }

    for selector in TITLE_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        for element in doc.select(&selector) {
            let text = element_text(element);
            let len = text.chars().count();
            if len > MIN_TITLE_LEN
                && len < MAX_TITLE_LEN
                && !is_navigation_text(&text)
                && !text.to_lowercase().contains("menu")
                && !text.to_lowercase().contains("navigation")
            {
                return Some(text);
            }
        }
    }

    // Last resort: first h1 with a reasonably long text
    let h1 = Selector::parse("h1").ok()?;
    for element in doc.select(&h1) {
        let text = element_text(element);
        let len = text.chars().count();
        if len > MIN_FALLBACK_H1_LEN && len < MAX_TITLE_LEN {
            return Some(text);
        }
    }

    None
}

/// 从元标签读取标题
fn title_from_meta_tags(doc: &Html) -> Option<String> {
    for selector in TITLE_META_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(element) = doc.select(&selector).next() {
            if let Some(content) = element.value().attr("content") {
                let content = content.trim();
                let len = content.chars().count();
                if len > MIN_TITLE_LEN && len < MAX_TITLE_LEN {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

/// 判断文本是否为导航/菜单项
///
/// 文本等于某个导航关键词，或长度小于20且包含关键词时成立
fn is_navigation_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    NAVIGATION_KEYWORDS.iter().any(|keyword| {
        lower == *keyword || (lower.chars().count() < 20 && lower.contains(keyword))
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
