//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Story Context: 风格目录、Prompt 构建、导出文件
//!
//! 领域层不做任何 I/O

pub mod story;

pub use story::{
    build_continuation_prompt, build_new_chapter_prompt, lookup, ContinuationRequest,
    ExportArtifact, Genre, NewChapterRequest, StoryError, StyleDirective,
};
