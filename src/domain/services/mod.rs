// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含文章提取流水线的各个阶段和相关服务：
/// - 提取服务（extraction_service）：抓取、解析、提取、组装的编排
/// - 页面清理（page_cleaner）：按选择器列表移除噪音子树
/// - 标题提取（title_extractor）：元标签和选择器启发式
/// - 正文提取（content_extractor）：容器选择器启发式和样板过滤
/// - 选择器规则（selector_rules）：声明式的选择器表和关键词表
/// - 标签分类（tag_classifier）：基于关键词的标签建议
pub mod content_extractor;
pub mod extraction_service;
pub mod page_cleaner;
pub mod selector_rules;
pub mod tag_classifier;
pub mod title_extractor;
