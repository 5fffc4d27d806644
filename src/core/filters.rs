//! 列表筛选项 (Listing Filters)
//!
//! 每个筛选项都是一个单选器，其字符串值原样写入查询串。

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// 单选筛选器
pub trait Picker: Copy + Default + IntoEnumIterator + Into<&'static str> {
    /// 筛选器标题
    const LABEL: &'static str;
    /// 查询串参数名
    const PARAM: &'static str;

    fn label(&self) -> &'static str;

    fn value(&self) -> &'static str {
        (*self).into()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, IntoStaticStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    View,
    Name,
    Date,
    Reader,
    #[default]
    Chapter,
}

impl Picker for Order {
    const LABEL: &'static str = "Order by";
    const PARAM: &'static str = "orderBy";

    fn label(&self) -> &'static str {
        match self {
            Order::View => "View",
            Order::Name => "Name",
            Order::Date => "Addition Date",
            Order::Reader => "Reader",
            Order::Chapter => "Chapter",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, IntoStaticStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Desc,
    Asc,
}

impl Picker for Sort {
    const LABEL: &'static str = "Sort by";
    const PARAM: &'static str = "order";

    fn label(&self) -> &'static str {
        match self {
            Sort::Desc => "Descending",
            Sort::Asc => "Ascending",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, IntoStaticStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    All,
    Ongoing,
    Completed,
}

impl Picker for StoryStatus {
    const LABEL: &'static str = "Status";
    const PARAM: &'static str = "filter";

    fn label(&self) -> &'static str {
        match self {
            StoryStatus::All => "All",
            StoryStatus::Ongoing => "Ongoing",
            StoryStatus::Completed => "Completed",
        }
    }
}

/// 列表页筛选组合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilters {
    pub order: Order,
    pub sort: Sort,
    pub story_status: StoryStatus,
}

impl ListingFilters {
    /// 按站点要求的顺序产出查询参数（orderBy, order, filter）
    pub fn query_pairs(&self) -> [(&'static str, &'static str); 3] {
        [
            (Order::PARAM, self.order.value()),
            (Sort::PARAM, self.sort.value()),
            (StoryStatus::PARAM, self.story_status.value()),
        ]
    }

    /// 全部筛选器的定义，供宿主渲染选择器
    pub fn definitions() -> Vec<FilterDefinition> {
        vec![
            FilterDefinition::of::<Order>("order"),
            FilterDefinition::of::<Sort>("sort"),
            FilterDefinition::of::<StoryStatus>("storyStatus"),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub options: Vec<FilterOption>,
}

impl FilterDefinition {
    fn of<P: Picker>(key: &'static str) -> Self {
        Self {
            key,
            label: P::LABEL,
            value: P::default().value(),
            options: P::iter()
                .map(|p| FilterOption {
                    label: p.label(),
                    value: p.value(),
                })
                .collect(),
        }
    }
}
