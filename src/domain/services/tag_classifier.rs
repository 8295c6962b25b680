// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 标签建议的最大数量
const MAX_TAGS: usize = 8;

/// 体育标签词汇表
///
/// 球队、赛事和运动项目，按建议时的输出顺序排列
const TAG_VOCABULARY: &[&str] = &[
    "Juventus",
    "Inter",
    "Milan",
    "Napoli",
    "Roma",
    "Lazio",
    "Fiorentina",
    "Atalanta",
    "Torino",
    "Bologna",
    "Serie A",
    "Serie B",
    "Champions League",
    "Europa League",
    "Coppa Italia",
    "Nazionale",
    "Calciomercato",
    "Calcio",
    "Basket",
    "Tennis",
    "Formula 1",
    "MotoGP",
    "Ciclismo",
    "Volley",
];

/// 标签分类特质
///
/// 对提取结果的独立后处理，与提取本身解耦，可整体替换
pub trait TagClassifier: Send + Sync {
    /// 根据标题和正文建议标签
    fn suggest(&self, title: &str, content: &str) -> Vec<String>;
}

/// 关键词标签分类器
///
/// 对固定词汇表做大小写不敏感的子串匹配
#[derive(Debug, Default)]
pub struct KeywordTagClassifier;

impl TagClassifier for KeywordTagClassifier {
    fn suggest(&self, title: &str, content: &str) -> Vec<String> {
        let haystack = format!("{} {}", title, content).to_lowercase();
        TAG_VOCABULARY
            .iter()
            .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
            .take(MAX_TAGS)
            .map(|keyword| keyword.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_are_case_insensitive() {
        let classifier = KeywordTagClassifier;
        let tags = classifier.suggest(
            "La JUVENTUS vince ancora",
            "Un'altra giornata di serie a ricca di gol.",
        );

        assert_eq!(tags, vec!["Juventus".to_string(), "Serie A".to_string()]);
    }

    #[test]
    fn test_caps_at_maximum_tags() {
        let classifier = KeywordTagClassifier;
        let text = "Juventus Inter Milan Napoli Roma Lazio Fiorentina Atalanta Torino Bologna";
        let tags = classifier.suggest(text, "");

        assert_eq!(tags.len(), 8);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let classifier = KeywordTagClassifier;
        assert!(classifier
            .suggest("Notizie di economia", "Il mercato azionario europeo")
            .is_empty());
    }
}
