//! WTR-LAB 内容抓取器 (Content Fetcher)
//!
//! 章节正文来自内嵌状态中的段落数组，逐段包裹 `<p>` 后拼接。

use std::sync::Arc;

use async_trait::async_trait;
use scraper::Html;
use tracing::{debug, info};

use super::next_data::{NextData, decode_segments, render_paragraphs};
use crate::core::error::{Result, SourceError};
use crate::core::profile::SiteProfile;
use crate::interfaces::ContentFetcher;
use crate::network::client::SiteClient;

/// 站点特定正文获取器
pub struct WtrLabFetcher {
    profile: Arc<SiteProfile>,
}

impl WtrLabFetcher {
    pub fn new(profile: Arc<SiteProfile>) -> Self {
        Self { profile }
    }

    /// 从章节页 HTML 重建正文
    pub fn render_chapter(&self, html: &str) -> Result<String> {
        let doc = Html::parse_document(html);
        let next_data = NextData::locate(&doc)?;

        let encoded = next_data.chapter_body()?;
        let segments = decode_segments(&encoded)?;
        debug!("Chapter body holds {} segments", segments.len());

        Ok(render_paragraphs(&segments))
    }
}

#[async_trait]
impl ContentFetcher for WtrLabFetcher {
    async fn parse_chapter(&self, path: &str, client: &SiteClient) -> Result<String> {
        if path.trim().is_empty() {
            return Err(SourceError::InvalidArgument("chapter path is empty".into()));
        }

        let url = self.profile.page_url(path)?;
        let html = client.get_text(url).await?;
        let content = self.render_chapter(&html)?;

        info!("Fetched chapter {} ({} bytes)", path, content.len());
        Ok(content)
    }
}
