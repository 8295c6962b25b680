// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 处理器模块
pub mod extract_handler;
pub mod media_handler;
pub mod tag_handler;
