//! Story Context - 故事生成限界上下文
//!
//! 职责:
//! - 风格目录（Genre → 风格提示词）
//! - 新章节 / 续写 Prompt 构建
//! - 生成结果的 TXT 导出

mod errors;
mod export;
mod prompt;
mod style_catalog;
mod value_objects;

pub use errors::StoryError;
pub use export::{ExportArtifact, TEXT_PLAIN, TIMESTAMP_FORMAT};
pub use prompt::{
    build_continuation_prompt, build_new_chapter_prompt, ContinuationRequest, NewChapterRequest,
};
pub use style_catalog::{catalog, lookup};
pub use value_objects::{Genre, StyleDirective};
