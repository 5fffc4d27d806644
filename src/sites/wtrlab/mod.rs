//! WTR-LAB 站点模块
//!
//! 列表与搜索走 JSON 接口或 HTML 列表页；详情与正文读取页面内嵌的 `__NEXT_DATA__` 状态。

mod fetcher;
mod indexer;
mod next_data;
mod paths;
mod selectors;
mod wire;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::SiteConfig;
use crate::core::error::Result;
use crate::core::profile::SiteProfile;
use crate::interfaces::{ContentFetcher, Indexer, Site, SiteClient};
use crate::network::context::ServiceContext;

pub use self::fetcher::WtrLabFetcher;
pub use self::indexer::WtrLabIndexer;
pub use self::next_data::{NextData, RawChapter, SerieIds, decode_segments, render_paragraphs};
pub use self::paths::PathResolver;
pub use self::selectors::SiteSelectors;
pub use self::wire::{Envelope, RecentEntry, SerieInfo, SerieSummary};

pub const SITE_ID: &str = "WTRLAB";
pub const SITE_NAME: &str = "WTR-LAB";
pub const VERSION: &str = "1.0.1";
pub const DEFAULT_BASE_URL: &str = "https://wtr-lab.com/";
pub const DEFAULT_LANG: &str = "en";

/// WTR-LAB 站点实现
pub struct WtrLab {
    profile: Arc<SiteProfile>,
    indexer: WtrLabIndexer,
    fetcher: WtrLabFetcher,
    client: SiteClient,
}

impl WtrLab {
    /// 创建新的 WTR-LAB 站点实例
    pub fn new(config: SiteConfig, ctx: ServiceContext) -> Result<Self> {
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let lang = config.lang.as_deref().unwrap_or(DEFAULT_LANG);
        let profile = Arc::new(SiteProfile::new(
            SITE_ID, SITE_NAME, VERSION, base_url, lang,
        )?);

        Ok(Self {
            indexer: WtrLabIndexer::new(profile.clone()),
            fetcher: WtrLabFetcher::new(profile.clone()),
            client: SiteClient::new(ctx),
            profile,
        })
    }
}

#[async_trait]
impl Site for WtrLab {
    fn id(&self) -> &str {
        self.profile.id
    }

    fn name(&self) -> &str {
        self.profile.name
    }

    fn version(&self) -> &str {
        self.profile.version
    }

    fn base_url(&self) -> &str {
        self.profile.base.as_str()
    }

    fn client(&self) -> &SiteClient {
        &self.client
    }

    fn indexer(&self) -> &dyn Indexer {
        &self.indexer
    }

    fn fetcher(&self) -> &dyn ContentFetcher {
        &self.fetcher
    }
}
