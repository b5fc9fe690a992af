//! 应用层 - 命令
//!
//! 每个用户操作对应一条命令：生成新章节、续写章节

mod generation_commands;

pub mod handlers;

pub use generation_commands::*;
