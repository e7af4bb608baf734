//! 弹窗状态定义

use job_tracker_api::JobApplication;
use job_tracker_core::ApplicationForm;

/// 表单弹窗的用途
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// 新建
    Create,
    /// 编辑已有记录
    Edit { id: String },
}

/// 表单字段（焦点索引到字段的映射）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Company,
    Location,
    SalaryLow,
    SalaryHigh,
    Status,
    Priority,
    Expiration,
    /// 第 n 条链接
    Link(usize),
}

impl FormField {
    /// 链接之前的固定字段数
    pub const FIXED_COUNT: usize = 8;

    /// 根据焦点索引得到字段
    pub fn from_focus(focus: usize) -> Self {
        match focus {
            0 => Self::Title,
            1 => Self::Company,
            2 => Self::Location,
            3 => Self::SalaryLow,
            4 => Self::SalaryHigh,
            5 => Self::Status,
            6 => Self::Priority,
            7 => Self::Expiration,
            n => Self::Link(n - Self::FIXED_COUNT),
        }
    }

    /// 只接受数字输入的字段
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::SalaryLow | Self::SalaryHigh | Self::Expiration)
    }

    /// 用 ←/→ 调整而非键入的字段
    pub fn is_selector(self) -> bool {
        matches!(self, Self::Status | Self::Priority)
    }
}

/// 表单总字段数
pub fn form_field_count(form: &ApplicationForm) -> usize {
    FormField::FIXED_COUNT + form.links.len()
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建/编辑求职记录
    ApplicationForm {
        mode: FormMode,
        form: ApplicationForm,
        /// 当前焦点，见 [`FormField::from_focus`]
        focus: usize,
        /// 行内错误
        error: Option<String>,
        /// 请求进行中，输入被忽略
        submitting: bool,
    },
    /// 确认删除
    ConfirmDelete {
        id: String,
        title: String,
        company: String,
        /// 焦点：0=取消, 1=删除
        focus: usize,
        deleting: bool,
        error: Option<String>,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

impl Modal {
    /// 是否有请求在进行中
    pub fn is_busy(&self) -> bool {
        match self {
            Modal::ApplicationForm { submitting, .. } => *submitting,
            Modal::ConfirmDelete { deleting, .. } => *deleting,
            Modal::Help | Modal::Error { .. } => false,
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 当前弹窗是否有请求在进行中
    pub fn is_busy(&self) -> bool {
        self.active.as_ref().is_some_and(Modal::is_busy)
    }

    /// 显示新建表单
    pub fn show_create_form(&mut self) {
        self.show(Modal::ApplicationForm {
            mode: FormMode::Create,
            form: ApplicationForm::new(),
            focus: 0,
            error: None,
            submitting: false,
        });
    }

    /// 显示编辑表单，用记录预填
    pub fn show_edit_form(&mut self, app: &JobApplication) {
        self.show(Modal::ApplicationForm {
            mode: FormMode::Edit { id: app.id.clone() },
            form: ApplicationForm::from_application(app),
            focus: 0,
            error: None,
            submitting: false,
        });
    }

    /// 显示确认删除弹窗，默认焦点在“取消”
    pub fn show_confirm_delete(&mut self, app: &JobApplication) {
        self.show(Modal::ConfirmDelete {
            id: app.id.clone(),
            title: app.title.clone(),
            company: app.company.clone(),
            focus: 0,
            deleting: false,
            error: None,
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
