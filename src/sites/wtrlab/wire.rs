//! JSON 接口的响应结构
//!
//! 只建模实际读取的字段，其余字段由 serde 忽略。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `{ success, data: [...] }` 响应信封
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// 最近更新流中的条目，书籍信息嵌套在 `serie` 内
#[derive(Debug, Deserialize)]
pub struct RecentEntry {
    pub serie: SerieSummary,
}

/// 书籍摘要；搜索接口直接返回该结构
#[derive(Debug, Deserialize)]
pub struct SerieSummary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default)]
    pub data: SerieInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct SerieInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl SerieInfo {
    /// 空标题与缺失标题一律视为空串
    pub fn title_or_empty(&self) -> String {
        self.title.clone().unwrap_or_default()
    }
}

/// 将数字、字符串或 null 统一为字符串（null 为空串）
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
