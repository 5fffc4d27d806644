//! WTR-LAB 选择器
//!
//! 预编译的 CSS 选择器

use std::sync::OnceLock;

use scraper::Selector;

/// 站点选择器集合
pub struct SiteSelectors {
    pub serie_item: Selector,
    pub card_title: Selector,
    pub raw_title: Selector,
    pub image: Selector,
    pub anchor: Selector,
    pub heading: Selector,
    pub cover: Selector,
    pub lead: Selector,
    pub table_cell: Selector,
    pub next_data: Selector,
}

static SELECTORS: OnceLock<SiteSelectors> = OnceLock::new();

impl SiteSelectors {
    /// 获取全局选择器实例
    pub fn get() -> &'static SiteSelectors {
        SELECTORS.get_or_init(|| SiteSelectors {
            serie_item: Selector::parse(".serie-item").unwrap(),
            card_title: Selector::parse(".title-wrap > a").unwrap(),
            raw_title: Selector::parse(".rawtitle").unwrap(),
            image: Selector::parse("img").unwrap(),
            anchor: Selector::parse("a").unwrap(),
            heading: Selector::parse("h1.text-uppercase").unwrap(),
            cover: Selector::parse(".img-wrap > img").unwrap(),
            lead: Selector::parse(".lead").unwrap(),
            table_cell: Selector::parse("td").unwrap(),
            next_data: Selector::parse("script#__NEXT_DATA__").unwrap(),
        })
    }
}
