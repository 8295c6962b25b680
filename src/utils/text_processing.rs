// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本规范化模块
//!
//! 对提取出的标题和正文做统一的空白字符规范化处理，
//! 保留段落分隔（空行），压缩其余空白字符。

use once_cell::sync::Lazy;
use regex::Regex;

/// 水平空白字符（不含换行）
static HORIZONTAL_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// 换行符两侧的空格
static PADDED_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());

/// 三个及以上的连续换行
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// 规范化提取文本
///
/// 压缩连续空白为单个空格，将三个以上连续换行压缩为两个
/// （保留段落边界），并去除首尾空白。对同一文本重复应用结果不变。
pub fn normalize_text(text: &str) -> String {
    let collapsed = HORIZONTAL_WHITESPACE.replace_all(text, " ");
    let trimmed_lines = PADDED_NEWLINE.replace_all(&collapsed, "\n");
    let paragraphs = EXCESS_NEWLINES.replace_all(&trimmed_lines, "\n\n");
    paragraphs.trim().to_string()
}
