//! Story Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::StoryError;

/// 小说风格
///
/// 序列化为英文小写标签，解析时同时接受中文名称
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    /// 玄幻
    #[default]
    Fantasy,
    /// 都市
    Urban,
    /// 言情
    Romance,
    /// 悬疑
    Mystery,
}

impl Genre {
    /// 全部风格，按界面展示顺序
    pub const ALL: [Genre; 4] = [Genre::Fantasy, Genre::Urban, Genre::Romance, Genre::Mystery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::Urban => "urban",
            Genre::Romance => "romance",
            Genre::Mystery => "mystery",
        }
    }

    /// 中文展示名
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Fantasy => "玄幻",
            Genre::Urban => "都市",
            Genre::Romance => "言情",
            Genre::Mystery => "悬疑",
        }
    }
}

impl FromStr for Genre {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s) || g.label() == s)
            .ok_or_else(|| StoryError::UnknownGenre(s.to_string()))
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 风格提示词
///
/// 只能由风格目录产生，进程内不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDirective(&'static str);

impl StyleDirective {
    pub(super) const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for StyleDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_tag() {
        assert_eq!("fantasy".parse::<Genre>().unwrap(), Genre::Fantasy);
        assert_eq!("Mystery".parse::<Genre>().unwrap(), Genre::Mystery);
    }

    #[test]
    fn test_parse_chinese_label() {
        assert_eq!("都市".parse::<Genre>().unwrap(), Genre::Urban);
        assert_eq!("言情".parse::<Genre>().unwrap(), Genre::Romance);
    }

    #[test]
    fn test_parse_unknown_genre() {
        let err = "科幻".parse::<Genre>().unwrap_err();
        assert_eq!(err, StoryError::UnknownGenre("科幻".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&Genre::Romance).unwrap();
        assert_eq!(json, "\"romance\"");
        let genre: Genre = serde_json::from_str("\"urban\"").unwrap();
        assert_eq!(genre, Genre::Urban);
    }
}
