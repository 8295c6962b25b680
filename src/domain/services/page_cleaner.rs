// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};

use crate::domain::services::selector_rules::NOISE_SELECTORS;

/// 移除噪音子树
///
/// 在提取前从解析树中摘除所有匹配噪音选择器的子树，
/// 减少标题和正文启发式的误报。分两阶段进行：先收集
/// 匹配节点的ID，再逐个从树中摘除。
pub fn remove_noise(doc: &mut Html) {
    let doomed: Vec<_> = NOISE_SELECTORS
        .iter()
        .filter_map(|selector| Selector::parse(selector).ok())
        .flat_map(|selector| doc.select(&selector).map(|element| element.id()).collect::<Vec<_>>())
        .collect();

    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}
