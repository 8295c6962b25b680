// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 提供网页抓取能力：
/// - 特质（traits）：抓取引擎的抽象接口和错误类型
/// - 代理抓取（proxy_fetch）：通过跨域代理获取页面原始HTML
pub mod proxy_fetch;
pub mod traits;
