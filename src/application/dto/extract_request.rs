// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 文章提取请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequestDto {
    /// 目标文章URL
    pub url: String,
}

impl ExtractRequestDto {
    /// 验证请求参数
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("URL scheme is invalid, only http and https are supported".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let dto = ExtractRequestDto {
            url: "https://www.gazzetta.it/calcio/articolo".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let dto = ExtractRequestDto {
            url: "   ".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let dto = ExtractRequestDto {
            url: "ftp://example.com/file".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
