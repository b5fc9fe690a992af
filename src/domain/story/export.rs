//! Export Artifact - TXT 导出
//!
//! 文件名规则:
//! - 新章节: `{小说名}_第{章节号}章_{YYYYMMDDHHmm}.txt`
//! - 续写:   `小说续写_{YYYYMMDDHHmm}.txt`
//!
//! 小说名中的 `/`、`\` 和控制字符会替换为 `_`

use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// 导出文件的 MIME 类型
pub const TEXT_PLAIN: &str = "text/plain";

/// 文件名时间戳格式（精确到分钟，12 位数字）
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

const CONTINUATION_PREFIX: &str = "小说续写";

/// 路径分隔符和控制字符替换为 `_`，保证文件名只有一段
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect()
}

/// 可下载的纯文本文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl ExportArtifact {
    /// 新章节导出
    pub fn for_chapter<Tz>(
        novel_name: &str,
        chapter_number: u32,
        content: impl Into<String>,
        at: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            file_name: format!(
                "{}_第{}章_{}.txt",
                sanitize_file_stem(novel_name),
                chapter_number,
                at.format(TIMESTAMP_FORMAT)
            ),
            content: content.into(),
            mime_type: TEXT_PLAIN,
        }
    }

    /// 续写内容导出
    pub fn for_continuation<Tz>(content: impl Into<String>, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            file_name: format!("{}_{}.txt", CONTINUATION_PREFIX, at.format(TIMESTAMP_FORMAT)),
            content: content.into(),
            mime_type: TEXT_PLAIN,
        }
    }
}
