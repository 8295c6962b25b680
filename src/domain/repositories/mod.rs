// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义外部存储能力的抽象接口：
/// - 媒体存储（media_storage）：对象键到限时签名URL的解析接口
pub mod media_storage;
