//! 分类导航状态

use job_tracker_api::JobStatus;
use job_tracker_core::Category;

/// 导航项
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub category: Category,
    pub icon: &'static str,
}

fn icon_for(category: Category) -> &'static str {
    match category {
        Category::All => "≡",
        Category::Status(JobStatus::Offers) => "★",
        Category::Status(JobStatus::Interview) => "◆",
        Category::Status(JobStatus::Applied) => "●",
        Category::Status(JobStatus::Rejected) => "✕",
        Category::Status(JobStatus::Graveyard) => "†",
    }
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表（侧边栏顺序）
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态，初始选中默认分类
    pub fn new() -> Self {
        let items: Vec<NavItem> = Category::sidebar_order()
            .into_iter()
            .map(|category| NavItem {
                category,
                icon: icon_for(category),
            })
            .collect();
        let selected = items
            .iter()
            .position(|item| item.category == Category::default())
            .unwrap_or(0);
        Self { items, selected }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的分类
    pub fn current_category(&self) -> Option<Category> {
        self.items.get(self.selected).map(|item| item.category)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_default_category() {
        let nav = NavigationState::new();
        assert_eq!(nav.items.len(), 6);
        assert_eq!(nav.current_category(), Some(Category::default()));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_first();
        nav.select_previous();
        assert_eq!(nav.current_category(), Some(Category::All));
        nav.select_last();
        nav.select_next();
        assert_eq!(
            nav.current_category(),
            Some(Category::Status(JobStatus::Graveyard))
        );
    }
}
