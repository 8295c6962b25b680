// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 提取规则表
//!
//! 标题和正文启发式使用的选择器列表与关键词表，作为可版本化的
//! 声明式数据维护，调整规则无需改动提取控制流。

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 提取前移除的噪音元素选择器
///
/// 按标签名、类名子串或id子串匹配导航、页眉页脚、广告、
/// 社交分享、Cookie横幅、侧边栏和评论等容器。
pub const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "nav",
    "header",
    "footer",
    ".advertisement",
    ".ads",
    ".social",
    ".share",
    ".newsletter",
    ".cookie",
    ".sidebar",
    ".related",
    ".comments",
    ".comment",
    "[class*=\"ad\"]",
    "[class*=\"banner\"]",
    "[id*=\"ad\"]",
    "[id*=\"banner\"]",
];

/// 社交预览标题的元标签选择器，优先于文档内的标题选择器
pub const TITLE_META_SELECTORS: &[&str] = &[
    "meta[property=\"og:title\"]",
    "meta[name=\"twitter:title\"]",
    "meta[name=\"title\"]",
];

/// 标题选择器，从通用到逐渐具体，文档 `<title>` 作为最后选项
pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    ".title h1",
    ".headline h1",
    ".article-title h1",
    ".post-title h1",
    ".entry-title h1",
    ".story-title h1",
    "[class*=\"title\"] h1",
    "[class*=\"headline\"] h1",
    ".title",
    ".headline",
    ".article-title",
    ".post-title",
    ".entry-title",
    ".story-title",
    "[class*=\"title\"]:not(title)",
    "[class*=\"headline\"]",
    "[id*=\"title\"]",
    "[id*=\"headline\"]",
    "title",
];

/// 导航/菜单文本关键词
///
/// 短文本等于或包含这些关键词时判定为菜单项而非标题
pub const NAVIGATION_KEYWORDS: &[&str] = &[
    "menu",
    "navigation",
    "nav",
    "home",
    "login",
    "register",
    "search",
    "cerca",
    "accedi",
    "registrati",
    "contatti",
    "chi siamo",
    "about",
    "privacy",
    "cookie",
];

/// 已知体育新闻站点的首选正文容器选择器表
///
/// 键为站点域名（不含 www. 前缀），值为按优先级排序的选择器列表
pub static SITE_CONTENT_SELECTORS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        table.insert(
            "gazzetta.it",
            &[
                ".story-text",
                ".article-body",
                ".content-body",
                ".post-content",
                ".entry-content",
            ][..],
        );
        table.insert(
            "corrieredellosport.it",
            &[".art-text", ".article-content", ".content-body", ".post-content"][..],
        );
        table.insert(
            "tuttosport.com",
            &[".article-content", ".post-content", ".entry-content", ".content-body"][..],
        );
        table.insert(
            "sky.it",
            &[".content-body", ".article-content", ".story-content"][..],
        );
        table.insert("repubblica.it", &[".story", ".article-body", ".content-body"][..]);
        table.insert("ansa.it", &[".news-txt", ".content", ".article-body"][..]);
        table
    });

/// 未知站点使用的通用正文容器选择器
pub const GENERIC_CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content-body",
    ".story-content",
    ".article-body",
    ".post-body",
    ".entry-body",
    ".content",
    ".story",
    ".text",
    "main",
    "[class*=\"content\"]",
    "[class*=\"article\"]",
    "[class*=\"story\"]",
    "[class*=\"text\"]",
    "[class*=\"body\"]",
    "[role=\"main\"]",
];

/// 容器内承载文本的块级元素选择器
pub const TEXT_BEARING_SELECTOR: &str = "p, div, span, h1, h2, h3, h4, h5, h6, li, td, th";

/// 样板文本短语
///
/// 短文本包含这些短语时判定为样板内容；较长的段落仅提及
/// 其中某个词不会被过滤，分类器刻意保守以免吞掉正文。
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "accetta cookie",
    "privacy policy",
    "newsletter",
    "iscriviti alla newsletter",
    "seguici su facebook",
    "seguici su twitter",
    "seguici su instagram",
];

/// 查找站点的首选正文选择器
///
/// 域名匹配忽略 www. 前缀；未知站点返回空列表
pub fn site_selectors(domain: &str) -> &'static [&'static str] {
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    SITE_CONTENT_SELECTORS.get(domain).copied().unwrap_or(&[])
}
