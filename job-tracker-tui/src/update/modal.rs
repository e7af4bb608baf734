//! 弹窗更新逻辑

use job_tracker_core::form::accepts_numeric_char;
use job_tracker_core::{ApplicationForm, FormError};

use crate::i18n::t;
use crate::message::{BackendRequest, ModalMessage};
use crate::model::state::form_field_count;
use crate::model::{App, FormField, FormMode, Modal};

/// 处理弹窗消息
///
/// 只有表单提交和确认删除会返回后台请求。
pub fn update(app: &mut App, msg: ModalMessage) -> Option<BackendRequest> {
    let modal = app.modal.active.as_ref()?;

    // 请求进行中：忽略所有输入，也不允许关闭
    if modal.is_busy() {
        return None;
    }

    match modal {
        Modal::ApplicationForm { .. } => handle_application_form(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Help | Modal::Error { .. } => {
            handle_simple_modal(app, msg);
            None
        }
    }
}

/// 处理新建/编辑表单
fn handle_application_form(app: &mut App, msg: ModalMessage) -> Option<BackendRequest> {
    let Some(Modal::ApplicationForm {
        ref mode,
        ref mut form,
        ref mut focus,
        ref mut error,
        ref mut submitting,
    }) = app.modal.active
    else {
        return None;
    };

    let total_fields = form_field_count(form);
    let field = FormField::from_focus(*focus);

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % total_fields;
        }

        ModalMessage::PrevField => {
            *focus = (*focus + total_fields - 1) % total_fields;
        }

        ModalMessage::Decrease => adjust_field(form, field, -1),

        ModalMessage::Increase => adjust_field(form, field, 1),

        ModalMessage::Input(ch) => {
            input_char(form, field, ch);
            *error = None;
        }

        ModalMessage::Backspace => {
            if let Some(text) = field_text_mut(form, field) {
                text.pop();
            }
            *error = None;
        }

        ModalMessage::AddLink => {
            form.links.add();
            // 焦点跳到新链接
            *focus = form_field_count(form) - 1;
        }

        ModalMessage::RemoveLink => {
            if let FormField::Link(index) = field {
                form.links.remove(index);
                *focus = (*focus).min(form_field_count(form) - 1);
            }
        }

        ModalMessage::Confirm => {
            if let Err(e) = form.validate() {
                *error = Some(validation_message(e).to_string());
                return None;
            }

            let request = match mode {
                FormMode::Create => BackendRequest::Create(form.clone()),
                FormMode::Edit { id } => BackendRequest::Update {
                    id: id.clone(),
                    form: form.clone(),
                },
            };

            *error = None;
            *submitting = true;
            return Some(request);
        }

        ModalMessage::ToggleDeleteFocus => {}
    }

    None
}

fn validation_message(err: FormError) -> &'static str {
    match err {
        FormError::MissingRequired => t().form.missing_required,
    }
}

/// 可键入字段对应的文本
fn field_text_mut(form: &mut ApplicationForm, field: FormField) -> Option<&mut String> {
    match field {
        FormField::Title => Some(&mut form.title),
        FormField::Company => Some(&mut form.company),
        FormField::Location => Some(&mut form.location),
        FormField::SalaryLow => Some(&mut form.salary_low),
        FormField::SalaryHigh => Some(&mut form.salary_high),
        FormField::Expiration => Some(&mut form.expiration),
        FormField::Link(index) => form.links.get_mut(index),
        FormField::Status | FormField::Priority => None,
    }
}

fn input_char(form: &mut ApplicationForm, field: FormField, ch: char) {
    if field.is_numeric() && !accepts_numeric_char(ch) {
        return;
    }
    let Some(text) = field_text_mut(form, field) else {
        return;
    };
    // 数字字段的占位 0 直接被替换
    if field.is_numeric() && text == "0" {
        text.clear();
    }
    text.push(ch);
}

/// ←/→：状态循环、优先级加减、薪资滑块移动
fn adjust_field(form: &mut ApplicationForm, field: FormField, delta: i64) {
    match field {
        FormField::Status => form.cycle_status(delta),
        FormField::Priority => form.adjust_priority(delta),
        FormField::SalaryLow => form.nudge_salary_low(delta),
        FormField::SalaryHigh => form.nudge_salary_high(delta),
        _ => {}
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<BackendRequest> {
    let Some(Modal::ConfirmDelete {
        ref id,
        ref mut focus,
        ref mut deleting,
        ref mut error,
        ..
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleDeleteFocus | ModalMessage::Decrease | ModalMessage::Increase => {
            *focus = if *focus == 0 { 1 } else { 0 };
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                *deleting = true;
                *error = None;
                return Some(BackendRequest::Delete { id: id.clone() });
            }
            // 取消：丢弃目标，不做任何事
            app.modal.close();
        }

        _ => {}
    }

    None
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if let ModalMessage::Close | ModalMessage::Confirm = msg {
        app.modal.close();
    }
}
