// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 获取URL的小写主机名
///
/// 用于填充文章的来源字段以及按域名查找提取规则
pub fn source_hostname(url: &Url) -> String {
    url.host_str().unwrap_or_default().to_lowercase()
}
