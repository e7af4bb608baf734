//! 新建/编辑表单
//!
//! 表单只保存用户输入，提交时才校验并转换为请求体。
//! 数字输入只接受数字字符，空值或无法解析时按 0 处理。
//!
//! 编辑时预填的值原样保留：越界的优先级、未知的状态、负的过期天数，
//! 只要用户没动过，提交时照原值写回。

mod slider;

pub use slider::{DualRangeSlider, SALARY_MAX, SALARY_MIN, SALARY_STEP};

use chrono::{DateTime, Utc};
use job_tracker_api::{
    format_timestamp, JobApplication, JobApplicationPayload, JobStatus, SalaryRange,
};
use serde::Serialize;
use thiserror::Error;

/// 最高优先级
pub const MAX_PRIORITY: i64 = 5;

/// 新建表单的默认优先级
pub const DEFAULT_PRIORITY: i64 = 1;

/// 表单校验错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormError {
    /// title 或 company 为空
    #[error("Please fill in all fields")]
    MissingRequired,
}

/// 链接列表，始终至少有一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkList(Vec<String>);

impl Default for LinkList {
    fn default() -> Self {
        Self(vec![String::new()])
    }
}

impl LinkList {
    /// 从已有链接构建；空列表变为 `[""]`
    pub fn from_links(links: Vec<String>) -> Self {
        if links.is_empty() {
            Self::default()
        } else {
            Self(links)
        }
    }

    /// 追加一个空链接
    pub fn add(&mut self) {
        self.0.push(String::new());
    }

    /// 删除第 `index` 项；删除最后一项时保留一个空链接
    pub fn remove(&mut self, index: usize) {
        if self.0.len() > 1 {
            if index < self.0.len() {
                self.0.remove(index);
            }
        } else {
            self.0 = vec![String::new()];
        }
    }

    /// 覆盖第 `index` 项，越界时忽略
    pub fn update(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value.into();
        }
    }

    /// 第 `index` 项的可变引用
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.0.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 始终为 `false`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// 数字输入框的值：空或无法解析时为 0
pub fn numeric_value(text: &str) -> u64 {
    text.trim().parse().unwrap_or(0)
}

/// 数字输入框是否接受该字符
pub fn accepts_numeric_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// 新建/编辑表单的字段状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub title: String,
    pub company: String,
    pub location: String,
    /// 薪资下限（数字文本）
    pub salary_low: String,
    /// 薪资上限（数字文本）
    pub salary_high: String,
    pub status: JobStatus,
    /// 记录里无法识别的状态，在用户切换状态前原样写回
    pub raw_status: Option<String>,
    /// 存储值，可能越界；显示和加减时按 0..=5 处理
    pub priority: i64,
    /// 过期天数（数字文本，预填的负数原样保留）
    pub expiration: String,
    pub links: LinkList,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            salary_low: String::new(),
            salary_high: String::new(),
            status: JobStatus::Applied,
            raw_status: None,
            priority: DEFAULT_PRIORITY,
            expiration: "0".to_string(),
            links: LinkList::default(),
        }
    }
}

fn number_text(value: Option<u64>) -> String {
    match value {
        Some(v) if v > 0 => v.to_string(),
        _ => String::new(),
    }
}

impl ApplicationForm {
    /// 新建表单（默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 编辑表单：用已有记录预填
    pub fn from_application(app: &JobApplication) -> Self {
        let range = app.salary_range.clone().unwrap_or_default();
        let (status, raw_status) = match app.job_status() {
            Some(status) => (status, None),
            None => {
                log::warn!(
                    "Unknown status {:?} on {}, keeping it unless changed",
                    app.status,
                    app.id
                );
                (JobStatus::Applied, Some(app.effective_status().to_string()))
            }
        };
        let links = app
            .links
            .iter()
            .map(|l| l.clone().unwrap_or_default())
            .collect();

        Self {
            title: app.title.clone(),
            company: app.company.clone(),
            location: app.location.clone().unwrap_or_default(),
            salary_low: number_text(range.low_end),
            salary_high: number_text(range.high_end),
            status,
            raw_status,
            priority: app.priority.unwrap_or(DEFAULT_PRIORITY),
            expiration: app.expiration.unwrap_or(0).to_string(),
            links: LinkList::from_links(links),
        }
    }

    /// title 与 company 去空白后都不能为空
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() || self.company.trim().is_empty() {
            return Err(FormError::MissingRequired);
        }
        Ok(())
    }

    /// 显示用的优先级，限制在 0..=5
    pub fn display_priority(&self) -> i64 {
        self.priority.clamp(0, MAX_PRIORITY)
    }

    /// 优先级 +1/-1，从显示值出发，限制在 0..=5
    pub fn adjust_priority(&mut self, delta: i64) {
        self.priority = self
            .display_priority()
            .saturating_add(delta)
            .clamp(0, MAX_PRIORITY);
    }

    /// 切换状态；一旦切换，未知的原状态不再写回
    pub fn cycle_status(&mut self, delta: i64) {
        self.status = if delta > 0 {
            self.status.next()
        } else {
            self.status.prev()
        };
        self.raw_status = None;
    }

    /// 写回服务端的状态字符串
    pub fn status_value(&self) -> &str {
        self.raw_status
            .as_deref()
            .unwrap_or_else(|| self.status.as_str())
    }

    /// 过期天数；预填的负数照样解析，其它无法解析的按 0
    fn expiration_value(&self) -> i64 {
        self.expiration.trim().parse().unwrap_or(0)
    }

    /// 当前薪资对应的滑块；上限未填时按滑块最大值处理
    pub fn salary_slider(&self) -> DualRangeSlider {
        let low = numeric_value(&self.salary_low);
        let high = match numeric_value(&self.salary_high) {
            0 => SALARY_MAX,
            v => v,
        };
        DualRangeSlider::salary(low, high)
    }

    /// 用滑块移动薪资下限
    pub fn nudge_salary_low(&mut self, steps: i64) {
        let mut slider = self.salary_slider();
        slider.nudge_low(steps);
        self.salary_low = number_text(Some(slider.low));
    }

    /// 用滑块移动薪资上限
    pub fn nudge_salary_high(&mut self, steps: i64) {
        let mut slider = self.salary_slider();
        if numeric_value(&self.salary_high) == 0 {
            // 未填写时从下限处起步
            slider.high = slider.low;
        }
        slider.nudge_high(steps);
        self.salary_high = number_text(Some(slider.high));
    }

    fn salary_range(&self) -> SalaryRange {
        SalaryRange {
            low_end: Some(numeric_value(&self.salary_low)),
            high_end: Some(numeric_value(&self.salary_high)),
        }
    }

    fn base_payload(&self) -> JobApplicationPayload {
        JobApplicationPayload {
            title: self.title.clone(),
            company: self.company.clone(),
            status: Some(self.status_value().to_string()),
            location: Some(self.location.clone()),
            salary_range: Some(self.salary_range()),
            links: self.links.as_slice().to_vec(),
            priority: Some(self.priority),
            expiration: Some(self.expiration_value()),
            created_at: None,
            updated_at: None,
        }
    }

    /// 创建请求体：显式带上 status，createdAt/updatedAt 均为 `now`
    pub fn to_create_payload(
        &self,
        now: DateTime<Utc>,
    ) -> Result<JobApplicationPayload, FormError> {
        self.validate()?;
        let stamp = format_timestamp(now);
        Ok(JobApplicationPayload {
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
            ..self.base_payload()
        })
    }

    /// 更新请求体：只带 updatedAt
    pub fn to_update_payload(
        &self,
        now: DateTime<Utc>,
    ) -> Result<JobApplicationPayload, FormError> {
        self.validate()?;
        Ok(JobApplicationPayload {
            updated_at: Some(format_timestamp(now)),
            ..self.base_payload()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn filled() -> ApplicationForm {
        ApplicationForm {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..ApplicationForm::new()
        }
    }

    #[test]
    fn new_form_defaults() {
        let form = ApplicationForm::new();
        assert_eq!(form.status, JobStatus::Applied);
        assert_eq!(form.priority, 1);
        assert_eq!(form.expiration, "0");
        assert_eq!(form.links.as_slice(), [""]);
    }

    #[test]
    fn blank_title_or_company_is_rejected() {
        let mut form = filled();
        form.title = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
        assert_eq!(
            form.to_create_payload(now()),
            Err(FormError::MissingRequired)
        );

        let mut form = filled();
        form.company.clear();
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
        assert_eq!(FormError::MissingRequired.to_string(), "Please fill in all fields");
    }

    #[test]
    fn create_payload_carries_status_and_both_timestamps() {
        let payload = filled().to_create_payload(now()).unwrap();
        assert_eq!(payload.status.as_deref(), Some("applied"));
        assert_eq!(payload.created_at.as_deref(), Some("2024-05-01T12:00:00.000Z"));
        assert_eq!(payload.created_at, payload.updated_at);
        assert_eq!(payload.priority, Some(1));
        assert_eq!(payload.expiration, Some(0));
        assert_eq!(payload.links, vec![String::new()]);
        assert_eq!(
            payload.salary_range,
            Some(SalaryRange {
                low_end: Some(0),
                high_end: Some(0)
            })
        );
    }

    #[test]
    fn update_payload_only_sets_updated_at() {
        let payload = filled().to_update_payload(now()).unwrap();
        assert!(payload.created_at.is_none());
        assert!(payload.updated_at.is_some());
    }

    #[test]
    fn numeric_text_falls_back_to_zero() {
        assert_eq!(numeric_value(""), 0);
        assert_eq!(numeric_value("12a"), 0);
        assert_eq!(numeric_value(" 85000 "), 85_000);
        assert!(accepts_numeric_char('7'));
        assert!(!accepts_numeric_char('-'));
    }

    #[test]
    fn prefill_from_application() {
        let app = JobApplication {
            id: "1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            status: Some("offers".to_string()),
            salary_range: Some(SalaryRange {
                low_end: Some(90_000),
                high_end: None,
            }),
            priority: Some(9),
            links: vec![Some("https://a.example".to_string()), None],
            expiration: Some(30),
            ..Default::default()
        };
        let form = ApplicationForm::from_application(&app);
        assert_eq!(form.status, JobStatus::Offers);
        assert_eq!(form.salary_low, "90000");
        assert_eq!(form.salary_high, "");
        assert_eq!(form.priority, 9);
        assert_eq!(form.display_priority(), 5);
        assert_eq!(form.expiration, "30");
        assert_eq!(form.links.as_slice(), ["https://a.example", ""]);
    }

    #[test]
    fn untouched_edit_writes_back_stored_values() {
        let app = JobApplication {
            id: "7".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            status: Some("ghosted".to_string()),
            priority: Some(9),
            expiration: Some(-3),
            ..Default::default()
        };
        let form = ApplicationForm::from_application(&app);
        assert_eq!(form.status_value(), "ghosted");

        let payload = form.to_update_payload(now()).unwrap();
        assert_eq!(payload.status.as_deref(), Some("ghosted"));
        assert_eq!(payload.priority, Some(9));
        assert_eq!(payload.expiration, Some(-3));

        let low = JobApplication {
            priority: Some(-2),
            ..app
        };
        let payload = ApplicationForm::from_application(&low)
            .to_update_payload(now())
            .unwrap();
        assert_eq!(payload.priority, Some(-2));
    }

    #[test]
    fn cycling_replaces_unknown_status() {
        let app = JobApplication {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            status: Some("ghosted".to_string()),
            ..Default::default()
        };
        let mut form = ApplicationForm::from_application(&app);
        form.cycle_status(1);
        assert_eq!(form.status, JobStatus::Interview);
        assert!(form.raw_status.is_none());
        let payload = form.to_update_payload(now()).unwrap();
        assert_eq!(payload.status.as_deref(), Some("interview"));
    }

    #[test]
    fn adjusting_out_of_range_priority_starts_from_display_value() {
        let mut form = ApplicationForm {
            priority: 9,
            ..ApplicationForm::new()
        };
        form.adjust_priority(-1);
        assert_eq!(form.priority, 4);
        form.priority = -2;
        form.adjust_priority(1);
        assert_eq!(form.priority, 1);
    }

    #[test]
    fn prefill_defaults_for_sparse_record() {
        let app = JobApplication {
            id: "2".to_string(),
            ..Default::default()
        };
        let form = ApplicationForm::from_application(&app);
        assert_eq!(form.status, JobStatus::Applied);
        assert_eq!(form.priority, 1);
        assert_eq!(form.links.as_slice(), [""]);
        assert_eq!(form.location, "");
    }

    #[test]
    fn link_list_is_never_empty() {
        let mut links = LinkList::default();
        links.update(0, "https://a.example");
        links.add();
        links.update(1, "https://b.example");
        links.remove(0);
        assert_eq!(links.as_slice(), ["https://b.example"]);
        links.remove(0);
        assert_eq!(links.as_slice(), [""]);
        links.update(5, "ignored");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn priority_adjust_is_clamped() {
        let mut form = ApplicationForm::new();
        form.adjust_priority(-3);
        assert_eq!(form.priority, 0);
        form.adjust_priority(10);
        assert_eq!(form.priority, 5);
    }

    #[test]
    fn salary_nudges_use_slider_steps() {
        let mut form = ApplicationForm::new();
        form.nudge_salary_high(1);
        assert_eq!(form.salary_high, "1000");
        form.nudge_salary_low(1);
        // low must stay one step below high
        assert_eq!(form.salary_low, "");
        form.nudge_salary_high(4);
        form.nudge_salary_low(2);
        assert_eq!(form.salary_low, "2000");
        assert_eq!(form.salary_high, "5000");
    }
}
