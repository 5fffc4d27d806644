//! 站内规范路径 (Canonical Paths)
//!
//! 所有路径均相对站点根，且以源语言段开头：`en/serie-{raw_id}/{slug}[/chapter-{order}]`。

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::profile::SiteProfile;
use crate::utils::to_relative_path;

#[derive(Debug, Clone)]
pub struct PathResolver {
    profile: Arc<SiteProfile>,
}

impl PathResolver {
    pub fn new(profile: Arc<SiteProfile>) -> Self {
        Self { profile }
    }

    pub fn serie_path(&self, raw_id: &str, slug: &str) -> String {
        format!("{}/serie-{}/{}", self.profile.lang, raw_id, slug)
    }

    pub fn chapter_path(&self, raw_id: &str, slug: &str, order: &str) -> String {
        format!("{}/chapter-{}", self.serie_path(raw_id, slug), order)
    }

    /// 相对站点根解析任意链接
    pub fn to_relative(&self, href: &str) -> Result<String> {
        to_relative_path(&self.profile.base, href)
    }

    /// 构建书籍路径并经站点根归一化
    pub fn resolve_serie(&self, raw_id: &str, slug: &str) -> Result<String> {
        self.to_relative(&self.serie_path(raw_id, slug))
    }
}
