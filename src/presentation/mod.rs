// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 包含HTTP接口相关的组件：路由、处理器和错误转换。
pub mod errors;
pub mod handlers;
pub mod routes;
