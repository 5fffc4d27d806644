use url::Url;

use crate::core::error::{Result, SourceError};

/// 将绝对或相对链接解析为站内相对路径（无前导 `/`）
///
/// 空链接或无法解析的链接直接报错，而不是退化为站点根路径。
pub fn to_relative_path(base: &Url, href: &str) -> Result<String> {
    let href = href.trim();
    if href.is_empty() {
        return Err(SourceError::resolution(href, "empty url"));
    }

    let url = base
        .join(href)
        .map_err(|e| SourceError::resolution(href, e))?;

    url.path()
        .strip_prefix('/')
        .map(str::to_string)
        .ok_or_else(|| SourceError::resolution(href, "not a hierarchical url"))
}

/// 移除文本中的制表符与换行符
pub fn strip_tabs_and_newlines(text: &str) -> String {
    text.replace(['\t', '\n'], "")
}
