//! Style Catalog - 风格提示词库
//!
//! Genre → 风格提示词 的固定映射，对枚举全集是全函数

use super::{Genre, StyleDirective};

const FANTASY: StyleDirective = StyleDirective::new(
    "东方玄幻风格，语言磅礴大气，包含宗门、修炼境界、法宝、妖兽元素，主角有成长线，情节有爽点，结尾留悬念，符合网文节奏。",
);

const URBAN: StyleDirective = StyleDirective::new(
    "现代都市爽文风格，贴近生活，主角有特殊能力或机遇，包含职场、商战、亲情友情，人物性格鲜明，情节真实不浮夸。",
);

const ROMANCE: StyleDirective = StyleDirective::new(
    "甜宠言情风格，语言细腻温柔，注重男女主互动和心理描写，情节有甜有小虐，节奏舒缓，适合女性读者，结尾留暧昧伏笔。",
);

const MYSTERY: StyleDirective = StyleDirective::new(
    "悬疑推理风格，语言紧凑简洁，情节环环相扣，伏笔多，反转合理，注重细节描写，营造紧张氛围，结尾留解谜悬念。",
);

/// 查询风格提示词
pub fn lookup(genre: Genre) -> StyleDirective {
    match genre {
        Genre::Fantasy => FANTASY,
        Genre::Urban => URBAN,
        Genre::Romance => ROMANCE,
        Genre::Mystery => MYSTERY,
    }
}

/// 完整目录（供 /api/styles 展示）
pub fn catalog() -> Vec<(Genre, StyleDirective)> {
    Genre::ALL.into_iter().map(|g| (g, lookup(g))).collect()
}
