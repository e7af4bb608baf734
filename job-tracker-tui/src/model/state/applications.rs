//! 求职记录列表状态

use job_tracker_api::JobApplication;
use job_tracker_core::{filter_applications, Category};

/// 列表页状态
///
/// `records` 是服务端返回的全部记录；过滤在渲染和选择时按需计算，
/// `selected` 指向过滤后的可见列表。
#[derive(Debug, Default)]
pub struct ApplicationsState {
    /// 全部记录（服务端顺序）
    pub records: Vec<JobApplication>,
    /// 当前分类
    pub category: Category,
    /// 搜索词
    pub search: String,
    /// 可见列表中选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 加载错误
    pub error: Option<String>,
}

impl ApplicationsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前分类与搜索词下可见的记录
    pub fn visible(&self) -> Vec<&JobApplication> {
        filter_applications(&self.records, self.category, &self.search)
    }

    /// 当前选中的记录
    pub fn selected_application(&self) -> Option<&JobApplication> {
        self.visible().get(self.selected).copied()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// 切换分类，选中项回到顶部
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.selected = 0;
        }
    }

    /// 修改搜索词后调用
    pub fn search_changed(&mut self) {
        self.selected = 0;
    }

    /// 替换全部记录
    pub fn set_records(&mut self, records: Vec<JobApplication>) {
        self.records = records;
        self.loading = false;
        self.error = None;
        self.clamp_selection();
    }

    /// 选中项不超出可见列表
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
