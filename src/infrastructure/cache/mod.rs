// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供签名URL的进程内缓存，避免对对象存储的重复签名请求。
pub mod clock;
pub mod media_url_cache;

pub use clock::{Clock, SystemClock};
pub use media_url_cache::MediaUrlCache;
