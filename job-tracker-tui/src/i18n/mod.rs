//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 语言在启动时由配置文件决定。

use std::sync::atomic::{AtomicUsize, Ordering};

use job_tracker_api::JobStatus;
use job_tracker_core::Category;

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}

/// 分类的显示名称
pub fn category_label(category: Category) -> &'static str {
    let nav = &t().nav;
    match category {
        Category::All => nav.all,
        Category::Status(JobStatus::Offers) => nav.offers,
        Category::Status(JobStatus::Interview) => nav.interview,
        Category::Status(JobStatus::Applied) => nav.applied,
        Category::Status(JobStatus::Rejected) => nav.rejected,
        Category::Status(JobStatus::Graveyard) => nav.graveyard,
    }
}

/// 状态的显示名称（表单中的状态选择器）
pub fn status_label(status: JobStatus) -> &'static str {
    category_label(Category::Status(status))
}
