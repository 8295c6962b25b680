// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};

use crate::domain::services::selector_rules::{
    site_selectors, BOILERPLATE_PHRASES, GENERIC_CONTENT_SELECTORS, TEXT_BEARING_SELECTOR,
};

/// 单个文本片段的最小长度
const MIN_FRAGMENT_LEN: usize = 15;

/// 接受一个容器所需的最小总文本长度
const MIN_CONTAINER_LEN: usize = 300;

/// 片段集合过小时回退到容器全文的阈值
const MIN_JOINED_LEN: usize = 500;

/// 无块级子元素时容器全文的最小长度
const MIN_RAW_CONTAINER_LEN: usize = 50;

/// 回退全文的最小长度
const MIN_RAW_FALLBACK_LEN: usize = 200;

/// 样板判定的词数上限
const BOILERPLATE_MAX_WORDS: usize = 10;

/// 提取页面正文
///
/// 先尝试站点专属的容器选择器，再尝试通用容器选择器；
/// 对每个候选选择器取文档中第一个匹配容器，收集其下属
/// 块级元素的文本。第一个累计文本超过最小阈值的容器胜出。
/// 所有候选都不合格时扫描整个 body；仍无结果返回 `None`。
pub fn extract_content(doc: &Html, domain: &str) -> Option<String> {
    let candidates = site_selectors(domain)
        .iter()
        .chain(GENERIC_CONTENT_SELECTORS.iter());

    for selector in candidates {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        if let Some(container) = doc.select(&selector).next() {
            let content = gather_container_text(container);
            if content.chars().count() > MIN_CONTAINER_LEN {
                return Some(content);
            }
        }
    }

    // Fallback: scan the whole body with the same per-element logic
    let body = Selector::parse("body").ok()?;
    let content = doc.select(&body).next().map(gather_container_text)?;
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

/// 收集容器内的正文片段
///
/// 遍历容器下所有承载文本的块级元素，保留足够长、非样板、
/// 且不与已接受片段互为子串的文本（避免嵌套元素重复捕获），
/// 以空行连接。片段总量过小时回退为容器的完整文本。
fn gather_container_text(container: ElementRef) -> String {
    let Ok(selector) = Selector::parse(TEXT_BEARING_SELECTOR) else {
        return String::new();
    };

    let text_elements: Vec<_> = container.select(&selector).collect();

    // No block-level children at all: take the raw text when long enough
    if text_elements.is_empty() {
        let text = element_text(container);
        if text.chars().count() > MIN_RAW_CONTAINER_LEN {
            return text;
        }
        return String::new();
    }

    let mut parts: Vec<String> = Vec::new();
    for element in text_elements {
        let text = element_text(element);
        if text.chars().count() > MIN_FRAGMENT_LEN
            && !is_boilerplate(&text)
            && !parts
                .iter()
                .any(|existing| existing.contains(&text) || text.contains(existing.as_str()))
        {
            parts.push(text);
        }
    }

    // Too little survived the filters: fall back to the unfiltered text
    if parts.join(" ").chars().count() < MIN_JOINED_LEN {
        let all_text = element_text(container);
        if all_text.chars().count() > MIN_RAW_FALLBACK_LEN {
            return all_text;
        }
    }

    parts.join("\n\n")
}

/// 判断文本片段是否为样板内容
///
/// 仅当片段很短且包含样板短语时成立；较长的段落即使提及
/// 社交平台或Cookie等词也会被保留。
pub fn is_boilerplate(text: &str) -> bool {
    let lower = text.to_lowercase();
    let has_phrase = BOILERPLATE_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase));
    has_phrase && text.split_whitespace().count() < BOILERPLATE_MAX_WORDS
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
