//! WTR-LAB 索引器
//!
//! 负责书籍列表（最近更新流 / HTML 列表页）、搜索以及书籍详情与章节目录。

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};
use scraper::{ElementRef, Html};
use serde_json::json;
use tracing::{debug, info, warn};
use url::Url;

use super::SiteSelectors;
use super::next_data::{NextData, RawChapter};
use super::paths::PathResolver;
use super::wire::{Envelope, RecentEntry, SerieSummary};
use crate::core::error::{Result, SourceError};
use crate::core::filters::ListingFilters;
use crate::core::model::{ChapterItem, NovelItem, PopularNovelsOptions, SourceNovel};
use crate::core::profile::SiteProfile;
use crate::interfaces::Indexer;
use crate::network::client::SiteClient;
use crate::utils::strip_tabs_and_newlines;

/// WTR-LAB 索引器
pub struct WtrLabIndexer {
    profile: Arc<SiteProfile>,
    paths: PathResolver,
}

impl WtrLabIndexer {
    /// 创建新的索引器
    pub fn new(profile: Arc<SiteProfile>) -> Self {
        Self {
            paths: PathResolver::new(profile.clone()),
            profile,
        }
    }

    /// 列表页 URL，查询参数顺序固定为 orderBy, order, filter, page
    pub fn novel_list_url(&self, page: u32, filters: &ListingFilters) -> Result<Url> {
        let mut url = self.profile.url(&format!("{}/novel-list", self.profile.lang))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in filters.query_pairs() {
                query.append_pair(key, value);
            }
            query.append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    fn summary_item(&self, serie: &SerieSummary) -> Result<NovelItem> {
        Ok(NovelItem {
            name: serie.data.title_or_empty(),
            cover: serie.data.image.clone(),
            path: self.paths.resolve_serie(&serie.raw_id, &serie.slug)?,
        })
    }

    /// 最近更新流 (feed mode)
    pub fn parse_recent(&self, envelope: Envelope<RecentEntry>) -> Result<Vec<NovelItem>> {
        if !envelope.success {
            warn!("Recent feed responded with success=false");
        }
        envelope
            .data
            .iter()
            .map(|entry| self.summary_item(&entry.serie))
            .collect()
    }

    /// 搜索结果，条目为扁平结构，不做空项过滤
    pub fn parse_search(&self, envelope: Envelope<SerieSummary>) -> Result<Vec<NovelItem>> {
        if !envelope.success {
            warn!("Search responded with success=false");
        }
        envelope
            .data
            .iter()
            .map(|serie| self.summary_item(serie))
            .collect()
    }

    /// 解析单个列表卡片，字段缺失时退化为空值
    fn parse_card(&self, card: ElementRef) -> NovelItem {
        let s = SiteSelectors::get();

        let title = card
            .select(&s.card_title)
            .flat_map(|a| a.text())
            .collect::<String>();
        let raw_title = card
            .select(&s.raw_title)
            .flat_map(|el| el.text())
            .collect::<String>();
        let name = if raw_title.is_empty() {
            title
        } else {
            title.replacen(&raw_title, "", 1)
        };

        let cover = card
            .select(&s.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);

        let href = card
            .select(&s.anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();
        let path = self.paths.to_relative(href).unwrap_or_else(|e| {
            debug!("Card link dropped: {}", e);
            String::new()
        });

        NovelItem {
            name: name.trim().to_string(),
            cover,
            path,
        }
    }

    /// HTML 列表页 (scrape mode)，丢弃名称或路径为空的卡片
    pub fn parse_novel_list_html(&self, html: &str) -> Vec<NovelItem> {
        let doc = Html::parse_document(html);
        let s = SiteSelectors::get();

        let cards = doc.select(&s.serie_item).map(|card| self.parse_card(card));
        let mut dropped = 0;
        let novels: Vec<NovelItem> = cards
            .filter(|novel| {
                let keep = !novel.name.is_empty() && !novel.path.is_empty();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        if dropped > 0 {
            warn!("Discarded {} incomplete listing cards", dropped);
        }
        novels
    }

    /// 解析书籍详情：先取 HTML 字段，再从内嵌 JSON 读取章节目录
    pub fn parse_novel_html(&self, path: &str, html: &str) -> Result<SourceNovel> {
        let doc = Html::parse_document(html);
        let s = SiteSelectors::get();

        let name = doc
            .select(&s.heading)
            .flat_map(|h| h.text())
            .collect::<String>();

        let cover = doc
            .select(&s.cover)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);

        let summary = doc
            .select(&s.lead)
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string();

        let genres = labelled_cell(&doc, "Genre")
            .map(|cell| {
                cell.select(&s.anchor)
                    .map(|a| a.text().collect::<String>())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();

        let author = labelled_text(&doc, "Author");
        let status = labelled_text(&doc, "Status");

        let next_data = NextData::locate(&doc)?;
        let ids = next_data.serie_ids()?;
        let chapters = next_data
            .serie_chapters()?
            .iter()
            .enumerate()
            .map(|(index, chapter)| ChapterItem {
                name: chapter.title.clone().unwrap_or_default(),
                path: self
                    .paths
                    .chapter_path(&ids.raw_id, &ids.slug, &chapter.order),
                release_time: release_date(chapter),
                chapter_number: index as u32 + 1,
            })
            .collect();

        Ok(SourceNovel {
            path: path.to_string(),
            name,
            cover,
            summary,
            author,
            status,
            genres,
            chapters,
        })
    }
}

/// 查找文本包含 `label` 的首个单元格，返回其相邻单元格
fn labelled_cell<'a>(doc: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let s = SiteSelectors::get();
    doc.select(&s.table_cell)
        .find(|td| td.text().collect::<String>().contains(label))
        .and_then(|td| td.next_siblings().find_map(ElementRef::wrap))
}

fn labelled_text(doc: &Html, label: &str) -> String {
    labelled_cell(doc, label)
        .map(|cell| strip_tabs_and_newlines(&cell.text().collect::<String>()))
        .unwrap_or_default()
}

/// `created_at` 优先，缺失或为空串时回退 `updated_at`；取前 10 个字符作为日期
///
/// 只按是否为空选择来源：非空但无法解析的 `created_at` 直接得到 `None`，不再尝试 `updated_at`。
fn release_date(chapter: &RawChapter) -> Option<NaiveDate> {
    let stamp = [&chapter.created_at, &chapter.updated_at]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())?;
    let prefix: String = stamp.chars().take(10).collect();
    NaiveDate::parse_from_str(&prefix, "%Y-%m-%d")
        .inspect_err(|e| debug!("Unparseable chapter date {:?}: {}", stamp, e))
        .ok()
}

fn require_page(page: u32) -> Result<()> {
    if page == 0 {
        return Err(SourceError::InvalidArgument(
            "page numbers start at 1".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl Indexer for WtrLabIndexer {
    async fn popular_novels(
        &self,
        page: u32,
        options: &PopularNovelsOptions,
        client: &SiteClient,
    ) -> Result<Vec<NovelItem>> {
        require_page(page)?;

        let novels = if options.show_latest_novels {
            let url = self.profile.url("api/home/recent")?;
            let envelope: Envelope<RecentEntry> = client
                .post_json(url, &json!({ "page": page }), HeaderMap::new())
                .await?;
            self.parse_recent(envelope)?
        } else {
            let url = self.novel_list_url(page, &options.filters)?;
            let html = client.get_text(url).await?;
            self.parse_novel_list_html(&html)
        };

        info!(
            "Listed {} novels (page {}, feed mode: {})",
            novels.len(),
            page,
            options.show_latest_novels
        );
        Ok(novels)
    }

    async fn search_novels(&self, term: &str, client: &SiteClient) -> Result<Vec<NovelItem>> {
        let url = self.profile.url("api/search")?;

        let mut headers = HeaderMap::new();
        let referer = self.profile.lang_root()?;
        for (name, value) in [(REFERER, referer.as_str()), (ORIGIN, self.profile.base.as_str())] {
            let value = HeaderValue::from_str(value)
                .map_err(|e| SourceError::InvalidArgument(format!("{name}: {e}")))?;
            headers.insert(name, value);
        }

        let envelope: Envelope<SerieSummary> = client
            .post_json(url, &json!({ "text": term }), headers)
            .await?;
        let novels = self.parse_search(envelope)?;

        info!("Search {:?} matched {} novels", term, novels.len());
        Ok(novels)
    }

    async fn parse_novel(&self, path: &str, client: &SiteClient) -> Result<SourceNovel> {
        if path.trim().is_empty() {
            return Err(SourceError::InvalidArgument("novel path is empty".into()));
        }

        let url = self.profile.page_url(path)?;
        let html = client.get_text(url).await?;
        let novel = self.parse_novel_html(path, &html)?;

        info!("Parsed {:?} with {} chapters", novel.name, novel.chapters.len());
        Ok(novel)
    }
}
