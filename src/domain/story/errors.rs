//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    #[error("未知的小说风格: {0}")]
    UnknownGenre(String),
}
