//! 站点定义
//!
//! 定义了站点需要实现的核心接口：索引器（列表、搜索、详情）与内容获取器（章节正文）。

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::model::{NovelItem, PopularNovelsOptions, SourceNovel};
use crate::network::client::SiteClient;

/// 索引器 Trait - 负责书籍列表、搜索结果与书籍详情
#[async_trait]
pub trait Indexer: Send + Sync {
    /// 获取第 `page` 页的书籍列表（页码从 1 开始）
    async fn popular_novels(
        &self,
        page: u32,
        options: &PopularNovelsOptions,
        client: &SiteClient,
    ) -> Result<Vec<NovelItem>>;

    /// 按关键字搜索
    async fn search_novels(&self, term: &str, client: &SiteClient) -> Result<Vec<NovelItem>>;

    /// 获取书籍详情及章节目录
    async fn parse_novel(&self, path: &str, client: &SiteClient) -> Result<SourceNovel>;
}

/// 内容获取器 Trait - 负责章节正文
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn parse_chapter(&self, path: &str, client: &SiteClient) -> Result<String>;
}

/// 站点定义 Trait
///
/// 每个站点需要实现此 Trait，提供：
/// - 站点标识、名称与版本
/// - 客户端
/// - 索引器和内容获取器
#[async_trait]
pub trait Site: Send + Sync {
    /// 站点唯一标识
    fn id(&self) -> &str;

    /// 展示名称
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// 基础 URL
    fn base_url(&self) -> &str;

    /// 获取站点专用客户端
    fn client(&self) -> &SiteClient;

    /// 获取索引器
    fn indexer(&self) -> &dyn Indexer;

    /// 获取内容获取器
    fn fetcher(&self) -> &dyn ContentFetcher;

    async fn popular_novels(
        &self,
        page: u32,
        options: &PopularNovelsOptions,
    ) -> Result<Vec<NovelItem>> {
        self.indexer()
            .popular_novels(page, options, self.client())
            .await
    }

    async fn search_novels(&self, term: &str) -> Result<Vec<NovelItem>> {
        self.indexer().search_novels(term, self.client()).await
    }

    async fn parse_novel(&self, path: &str) -> Result<SourceNovel> {
        self.indexer().parse_novel(path, self.client()).await
    }

    async fn parse_chapter(&self, path: &str) -> Result<String> {
        self.fetcher().parse_chapter(path, self.client()).await
    }
}
