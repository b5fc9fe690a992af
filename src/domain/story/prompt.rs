//! Prompt Builder
//!
//! 纯字符串插值，不做任何校验（由命令处理器保证必填字段）

use serde::{Deserialize, Serialize};

use super::{lookup, Genre};

/// 新章节生成请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChapterRequest {
    pub novel_name: String,
    pub protagonist: String,
    pub core_setting: String,
    pub chapter_number: u32,
    pub chapter_title: String,
    pub word_count: u32,
    pub genre: Genre,
}

/// 章节续写请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationRequest {
    /// 上一章内容（或结尾片段）
    pub previous_text: String,
    /// 续写要求，可以为空
    pub instruction: String,
    pub genre: Genre,
}

/// 构建新章节 Prompt
pub fn build_new_chapter_prompt(request: &NewChapterRequest) -> String {
    format!(
        "请创作小说《{name}》第{number}章《{title}》，要求：\n\
         1. 风格：{style}\n\
         2. 主角：{protagonist}\n\
         3. 核心设定：{setting}\n\
         4. 字数：约{words}字，结构完整（开头-发展-小高潮），分段合理，符合网文阅读习惯。\n",
        name = request.novel_name,
        number = request.chapter_number,
        title = request.chapter_title,
        style = lookup(request.genre),
        protagonist = request.protagonist,
        setting = request.core_setting,
        words = request.word_count,
    )
}

/// 构建续写 Prompt
pub fn build_continuation_prompt(request: &ContinuationRequest) -> String {
    format!(
        "请续写以下小说内容，要求：\n\
         1. 风格：{style}\n\
         2. 上一章内容：{previous}\n\
         3. 续写要求：{instruction}\n\
         4. 衔接自然，保持人物性格一致，字数约500字，结尾留悬念。\n",
        style = lookup(request.genre),
        previous = request.previous_text,
        instruction = request.instruction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chapter() -> NewChapterRequest {
        NewChapterRequest {
            novel_name: "剑神归来".to_string(),
            protagonist: "萧炎".to_string(),
            core_setting: "签到流".to_string(),
            chapter_number: 1,
            chapter_title: "开局送神器".to_string(),
            word_count: 1000,
            genre: Genre::Fantasy,
        }
    }

    #[test]
    fn test_new_chapter_prompt_is_pure() {
        let request = sample_chapter();
        assert_eq!(
            build_new_chapter_prompt(&request),
            build_new_chapter_prompt(&request.clone())
        );
    }

    #[test]
    fn test_new_chapter_prompt_contains_all_fields() {
        let prompt = build_new_chapter_prompt(&sample_chapter());

        assert!(prompt.contains("剑神归来"));
        assert!(prompt.contains("萧炎"));
        assert!(prompt.contains("签到流"));
        assert!(prompt.contains("第1章"));
        assert!(prompt.contains("开局送神器"));
        assert!(prompt.contains("约1000字"));
        assert!(prompt.contains(lookup(Genre::Fantasy).as_str()));
    }

    #[test]
    fn test_new_chapter_prompt_layout() {
        let prompt = build_new_chapter_prompt(&sample_chapter());
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "请创作小说《剑神归来》第1章《开局送神器》，要求：");
        assert_eq!(lines[2], "2. 主角：萧炎");
        assert_eq!(lines[3], "3. 核心设定：签到流");
    }

    #[test]
    fn test_genre_changes_directive_only() {
        let fantasy = build_new_chapter_prompt(&sample_chapter());
        let mystery = build_new_chapter_prompt(&NewChapterRequest {
            genre: Genre::Mystery,
            ..sample_chapter()
        });

        assert_ne!(fantasy, mystery);
        assert!(mystery.contains(lookup(Genre::Mystery).as_str()));
        assert!(!mystery.contains(lookup(Genre::Fantasy).as_str()));
    }

    #[test]
    fn test_continuation_prompt_contains_inputs_verbatim() {
        let request = ContinuationRequest {
            previous_text: "萧炎握紧了拳头，\n眼中闪过一丝寒芒。".to_string(),
            instruction: "主角遇强敌反杀".to_string(),
            genre: Genre::Urban,
        };
        let prompt = build_continuation_prompt(&request);

        assert!(prompt.starts_with("请续写以下小说内容，要求："));
        assert!(prompt.contains(&request.previous_text));
        assert!(prompt.contains(&request.instruction));
        assert!(prompt.contains(lookup(Genre::Urban).as_str()));
        assert_eq!(prompt, build_continuation_prompt(&request));
    }

    #[test]
    fn test_continuation_prompt_allows_empty_instruction() {
        let request = ContinuationRequest {
            previous_text: "上一章".to_string(),
            instruction: String::new(),
            genre: Genre::Romance,
        };
        let prompt = build_continuation_prompt(&request);

        assert!(prompt.contains("3. 续写要求：\n"));
    }
}
