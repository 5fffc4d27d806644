//! WTR-LAB 小说源 (Novel Source Engine)
//!
//! 将站点的三种响应形态（JSON 接口、HTML 页面、HTML 内嵌 JSON 状态）统一抽取为
//! 书籍列表项、书籍详情与章节正文。

pub mod core;
pub mod interfaces;
pub mod network;
pub mod sites;
pub mod utils;

pub use crate::core::error::{Result, SourceError};
pub use crate::core::filters::{ListingFilters, Order, Sort, StoryStatus};
pub use crate::core::model::{ChapterItem, NovelItem, PopularNovelsOptions, SourceNovel};
pub use crate::interfaces::Site;
pub use crate::sites::SiteRegistry;
