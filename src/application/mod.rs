// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 包含应用服务和数据传输对象，作为表示层与领域层之间的桥梁。
pub mod dto;
