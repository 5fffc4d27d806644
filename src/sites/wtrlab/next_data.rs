//! 内嵌页面状态 (`script#__NEXT_DATA__`)
//!
//! 详情页与章节页共用同一定位入口。文档其余分支（推荐、热门、追踪字段等）不做建模，
//! 只通过窄访问器读取 `props.pageProps.serie` 下实际需要的字段。

use scraper::Html;
use serde::Deserialize;
use serde_json::Value;

use super::SiteSelectors;
use super::wire::lenient_string;
use crate::core::error::{Result, SourceError};

const SERIE_POINTER: &str = "/props/pageProps/serie";
const SERIE_PATH: &str = "props.pageProps.serie";

/// 已解析的内嵌 JSON 文档
#[derive(Debug)]
pub struct NextData {
    root: Value,
}

/// `serie.serie_data` 中构建章节路径所需的标识
#[derive(Debug, Deserialize)]
pub struct SerieIds {
    #[serde(default, deserialize_with = "lenient_string")]
    pub raw_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
}

/// `serie.chapters` 的单个条目
#[derive(Debug, Deserialize)]
pub struct RawChapter {
    #[serde(default, deserialize_with = "lenient_string")]
    pub order: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl NextData {
    /// 在文档中定位状态块并解析
    pub fn locate(doc: &Html) -> Result<Self> {
        let s = SiteSelectors::get();
        let script = doc
            .select(&s.next_data)
            .next()
            .ok_or_else(|| SourceError::MissingElement("script#__NEXT_DATA__".into()))?;

        let raw = script.text().collect::<String>();
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self {
            root: serde_json::from_str(raw)?,
        })
    }

    fn serie(&self) -> Result<&Value> {
        self.root
            .pointer(SERIE_POINTER)
            .filter(|v| v.is_object())
            .ok_or_else(|| SourceError::schema(SERIE_PATH))
    }

    fn required<'a>(serie: &'a Value, field: &str) -> Result<&'a Value> {
        serie
            .get(field)
            .filter(|v| !v.is_null())
            .ok_or_else(|| SourceError::schema(format!("{SERIE_PATH}.{field}")))
    }

    /// 读取书籍标识 (`serie.serie_data`)
    pub fn serie_ids(&self) -> Result<SerieIds> {
        let value = Self::required(self.serie()?, "serie_data")?;
        SerieIds::deserialize(value)
            .map_err(|e| SourceError::schema(format!("{SERIE_PATH}.serie_data: {e}")))
    }

    /// 读取章节目录 (`serie.chapters`)，保持源顺序
    pub fn serie_chapters(&self) -> Result<Vec<RawChapter>> {
        let value = Self::required(self.serie()?, "chapters")?;
        if !value.is_array() {
            return Err(SourceError::schema(format!(
                "{SERIE_PATH}.chapters is not an array"
            )));
        }
        Vec::<RawChapter>::deserialize(value)
            .map_err(|e| SourceError::schema(format!("{SERIE_PATH}.chapters: {e}")))
    }

    /// 读取章节正文字段的编码文本 (`serie.chapter_data.data.body`)
    ///
    /// 字符串值即为编码后的段落数组；非字符串值按其 JSON 文本返回。
    /// 解码由 [`decode_segments`] 单独完成。
    pub fn chapter_body(&self) -> Result<String> {
        let body = self
            .serie()?
            .pointer("/chapter_data/data/body")
            .filter(|v| !v.is_null())
            .ok_or_else(|| SourceError::schema(format!("{SERIE_PATH}.chapter_data.data.body")))?;

        Ok(match body {
            Value::String(encoded) => encoded.clone(),
            other => other.to_string(),
        })
    }
}

/// 将编码文本解码为段落数组
pub fn decode_segments(encoded: &str) -> Result<Vec<String>> {
    match serde_json::from_str::<Value>(encoded)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()),
        _ => Err(SourceError::schema(
            "chapter body did not decode to an array",
        )),
    }
}

/// 每段包裹 `<p>`，按序直接拼接
pub fn render_paragraphs<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().fold(String::new(), |mut html, segment| {
        html.push_str("<p>");
        html.push_str(segment.as_ref());
        html.push_str("</p>");
        html
    })
}
