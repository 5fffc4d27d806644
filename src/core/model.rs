use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::filters::ListingFilters;

/// 列表项 (Canonical Novel Summary)
///
/// `path` 即站内主键。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub path: String,
}

/// 章节引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterItem {
    pub name: String,
    pub path: String,
    /// 发布日期，序列化为 `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_time: Option<NaiveDate>,
    /// 抽取器自身的 1 起始序号，与站点的 `order` 字段无关
    pub chapter_number: u32,
}

/// 书籍详情 (Canonical Novel Detail)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceNovel {
    pub path: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    pub summary: String,
    pub author: String,
    pub status: String,
    /// 逗号连接的类型标签
    pub genres: String,
    /// 保持源 JSON 数组顺序
    pub chapters: Vec<ChapterItem>,
}

/// 列表请求参数
#[derive(Debug, Clone, Default)]
pub struct PopularNovelsOptions {
    /// 为真时走 JSON 最近更新流 (feed mode)，否则抓取 HTML 列表页 (scrape mode)
    pub show_latest_novels: bool,
    pub filters: ListingFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_item_serializes_for_the_host() {
        let chapter = ChapterItem {
            name: "Chapter 1".into(),
            path: "en/serie-5/foo/chapter-1".into(),
            release_time: NaiveDate::from_ymd_opt(2024, 3, 9),
            chapter_number: 1,
        };

        let value = serde_json::to_value(&chapter).unwrap();
        assert_eq!(value["releaseTime"], "2024-03-09");
        assert_eq!(value["chapterNumber"], 1);
    }

    #[test]
    fn absent_release_time_is_omitted() {
        let chapter = ChapterItem {
            name: "Prologue".into(),
            path: "en/serie-5/foo/chapter-0".into(),
            release_time: None,
            chapter_number: 1,
        };

        let value = serde_json::to_value(&chapter).unwrap();
        assert!(value.get("releaseTime").is_none());
    }
}
