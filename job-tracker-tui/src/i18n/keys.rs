//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `form.*` / `confirm_delete.*` / `help.*`**
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 卡片上的薪资、时间等格式化文本来自 `job_tracker_core::display`，不在这里。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 分类侧边栏文本
    pub nav: NavTexts,
    /// 列表页文本
    pub applications: ApplicationsTexts,
    /// 新建/编辑表单
    pub form: FormTexts,
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示中的动作描述
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub search: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub done: &'static str,
    pub clear: &'static str,
    pub next_field: &'static str,
    pub adjust: &'static str,
    pub add_link: &'static str,
    pub remove_link: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
}

// ============================================================================
// 分类侧边栏
// ============================================================================

/// 分类名称
pub struct NavTexts {
    pub title: &'static str,
    pub all: &'static str,
    pub offers: &'static str,
    pub interview: &'static str,
    pub applied: &'static str,
    pub rejected: &'static str,
    pub graveyard: &'static str,
}

// ============================================================================
// 列表页
// ============================================================================

/// 列表页文本
pub struct ApplicationsTexts {
    pub search_placeholder: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
    pub no_match: &'static str,
    pub load_failed: &'static str,
    pub count_suffix: &'static str,
    pub expires_in: &'static str,
    pub days: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 新建/编辑表单文本
pub struct FormTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    // 字段标签
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub salary_low: &'static str,
    pub salary_high: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    pub expiration: &'static str,
    pub links: &'static str,
    // 占位符
    pub title_placeholder: &'static str,
    pub company_placeholder: &'static str,
    pub location_placeholder: &'static str,
    pub link_placeholder: &'static str,
    // 按钮与状态
    pub create: &'static str,
    pub save: &'static str,
    pub creating: &'static str,
    pub saving: &'static str,
    // 错误
    pub missing_required: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
}

/// 确认删除弹窗文本
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub deleting: &'static str,
    pub delete_failed: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub reloading: &'static str,
    pub loaded: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub nothing_selected: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub list: &'static str,
    pub form: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助弹窗中的动作说明
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub focus_search: &'static str,
    pub reload: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub move_selection: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub next_field: &'static str,
    pub adjust: &'static str,
    pub add_link: &'static str,
    pub remove_link: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
}
