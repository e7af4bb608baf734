//! 分类与搜索过滤
//!
//! 线性扫描，保持服务端顺序；不分页、不排序。

use job_tracker_api::{JobApplication, JobStatus};
use serde::{Deserialize, Serialize};

/// 侧边栏选中的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 全部记录
    All,
    /// 单一状态
    Status(JobStatus),
}

impl Default for Category {
    fn default() -> Self {
        Self::Status(JobStatus::Applied)
    }
}

impl Category {
    /// 侧边栏顺序：All 在前，随后是各状态
    pub fn sidebar_order() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(JobStatus::ALL.into_iter().map(Self::Status))
            .collect()
    }

    /// 记录是否属于该分类（缺失状态视为 applied）
    pub fn matches(self, app: &JobApplication) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => app.effective_status() == status.as_str(),
        }
    }
}

/// 搜索是否命中 title / company / location（大小写不敏感）
///
/// `query` 需已 trim 并转为小写。
fn matches_search(app: &JobApplication, query: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(query);
    hit(&app.title) || hit(&app.company) || app.location.as_deref().is_some_and(hit)
}

/// 按分类与搜索词过滤记录
pub fn filter_applications<'a>(
    records: &'a [JobApplication],
    category: Category,
    search: &str,
) -> Vec<&'a JobApplication> {
    let query = search.trim().to_lowercase();
    records
        .iter()
        .filter(|app| category.matches(app))
        .filter(|app| query.is_empty() || matches_search(app, &query))
        .collect()
}

/// 各分类的记录数，顺序同 [`Category::sidebar_order`]
pub fn category_counts(records: &[JobApplication]) -> Vec<(Category, usize)> {
    Category::sidebar_order()
        .into_iter()
        .map(|category| {
            let count = records.iter().filter(|app| category.matches(app)).count();
            (category, count)
        })
        .collect()
}
