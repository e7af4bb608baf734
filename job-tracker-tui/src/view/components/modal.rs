//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use job_tracker_core::display::format_thousands;
use job_tracker_core::form::{numeric_value, MAX_PRIORITY};
use job_tracker_core::{ApplicationForm, DualRangeSlider};

use crate::i18n::{status_label, t};
use crate::model::state::{FormField, FormMode};
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles, ThemeColors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ApplicationForm { .. } => render_application_form(frame, modal),
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并画出带标题的边框，返回内容区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 字段标签行
fn label_line(label: &str, focused: bool, c: &ThemeColors) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(c.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    Line::styled(label.to_string(), style)
}

/// 文本输入行：聚焦时显示光标，空且未聚焦时显示占位符
fn input_line(value: &str, placeholder: &str, focused: bool, c: &ThemeColors) -> Line<'static> {
    if value.is_empty() && !focused {
        Line::styled(format!("  {placeholder}"), Style::default().fg(c.muted))
    } else if focused {
        Line::styled(format!("  {value}▎"), Style::default().fg(c.border_focused))
    } else {
        Line::styled(format!("  {value}"), Style::default().fg(c.fg))
    }
}

/// 渲染新建/编辑表单
fn render_application_form(frame: &mut Frame, modal: &Modal) {
    let Modal::ApplicationForm {
        mode,
        form,
        focus,
        error,
        submitting,
    } = modal
    else {
        return;
    };

    let texts = &t().form;
    let c = colors();
    let field = FormField::from_focus(*focus);

    // 固定字段 16 行 + 链接 + 错误/按钮 3 行 + 边框 2 行
    let link_rows = u16::try_from(form.links.len()).unwrap_or(u16::MAX);
    let height = 21_u16.saturating_add(link_rows);
    let area = centered_rect(64, height, frame.area());

    let title = match mode {
        FormMode::Create => texts.create_title,
        FormMode::Edit { .. } => texts.edit_title,
    };
    let inner = render_frame(frame, area, title, c.border_focused);

    let mut lines = Vec::new();

    // === 文本字段 ===
    for (label, value, placeholder, f) in [
        (texts.title, &form.title, texts.title_placeholder, FormField::Title),
        (texts.company, &form.company, texts.company_placeholder, FormField::Company),
        (texts.location, &form.location, texts.location_placeholder, FormField::Location),
    ] {
        lines.push(label_line(label, field == f, &c));
        lines.push(input_line(value, placeholder, field == f, &c));
    }

    // === 薪资 ===
    let salary_focused = matches!(field, FormField::SalaryLow | FormField::SalaryHigh);
    lines.push(label_line(texts.salary, salary_focused, &c));
    lines.push(Line::from(vec![
        salary_span(texts.salary_low, &form.salary_low, field == FormField::SalaryLow, &c),
        Span::raw("    "),
        salary_span(texts.salary_high, &form.salary_high, field == FormField::SalaryHigh, &c),
    ]));
    lines.push(slider_line(
        &form.salary_slider(),
        usize::from(inner.width.saturating_sub(4)),
        &c,
    ));

    // === 状态 ===
    let status_focused = field == FormField::Status;
    lines.push(label_line(texts.status, status_focused, &c));
    // 未知状态原样显示，切换后才变成已知状态
    let (status_text, status_color) = match form.raw_status {
        Some(ref raw) => (raw.clone(), c.status(None)),
        None => (
            status_label(form.status).to_string(),
            c.status(Some(form.status)),
        ),
    };
    lines.push(selector_line(
        Span::styled(
            status_text,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        status_focused,
        &c,
    ));

    // === 优先级 ===
    let priority_focused = field == FormField::Priority;
    lines.push(label_line(texts.priority, priority_focused, &c));
    lines.push(selector_line(priority_span(form, &c), priority_focused, &c));

    // === 过期天数 ===
    let expiration_focused = field == FormField::Expiration;
    lines.push(label_line(texts.expiration, expiration_focused, &c));
    lines.push(input_line(&form.expiration, "0", expiration_focused, &c));

    // === 链接 ===
    lines.push(label_line(
        texts.links,
        matches!(field, FormField::Link(_)),
        &c,
    ));
    for (i, link) in form.links.as_slice().iter().enumerate() {
        lines.push(input_line(
            link,
            texts.link_placeholder,
            field == FormField::Link(i),
            &c,
        ));
    }

    // === 错误信息 ===
    lines.push(Line::from(""));
    if let Some(err) = error {
        lines.push(Line::styled(format!("⚠ {err}"), Style::default().fg(c.error)));
    } else {
        lines.push(Line::from(""));
    }

    // === 按钮 ===
    if *submitting {
        let busy = match mode {
            FormMode::Create => texts.creating,
            FormMode::Edit { .. } => texts.saving,
        };
        lines.push(Line::styled(busy, Style::default().fg(c.warning)));
    } else {
        let submit = match mode {
            FormMode::Create => texts.create,
            FormMode::Edit { .. } => texts.save,
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", t().common.cancel), Style::default().fg(c.fg)),
            Span::styled(" Esc", Styles::muted()),
            Span::raw("    "),
            Span::styled(
                format!(" {submit} "),
                Style::default().fg(c.selected_fg).bg(c.highlight),
            ),
            Span::styled(" Enter", Styles::muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn salary_span(label: &str, value: &str, focused: bool, c: &ThemeColors) -> Span<'static> {
    let amount = match numeric_value(value) {
        0 if value.is_empty() => "-".to_string(),
        v => format!("${}", format_thousands(v)),
    };
    let cursor = if focused { "▎" } else { "" };
    let style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.fg)
    };
    Span::styled(format!("  {label}: {amount}{cursor}"), style)
}

/// 滑块轨道：两个把手之间高亮
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn slider_line(slider: &DualRangeSlider, width: usize, c: &ThemeColors) -> Line<'static> {
    let width = width.max(2);
    let last = (width - 1) as f64;
    let low = (slider.percentage(slider.low) / 100.0 * last).round() as usize;
    let high = (slider.percentage(slider.high) / 100.0 * last).round() as usize;

    let track: String = (0..width)
        .map(|i| {
            if i == low || i == high {
                '●'
            } else if i > low && i < high {
                '━'
            } else {
                '─'
            }
        })
        .collect();

    Line::from(vec![
        Span::raw("  "),
        Span::styled(track, Style::default().fg(c.highlight)),
    ])
}

/// 选择器行：聚焦时两侧显示 ◀ ▶
fn selector_line(value: Span<'static>, focused: bool, c: &ThemeColors) -> Line<'static> {
    let arrow = Style::default().fg(if focused { c.warning } else { c.muted });
    Line::from(vec![
        Span::styled(if focused { "  ◀ " } else { "    " }, arrow),
        value,
        Span::styled(if focused { " ▶" } else { "" }, arrow),
    ])
}

fn priority_span(form: &ApplicationForm, c: &ThemeColors) -> Span<'static> {
    let filled = usize::try_from(form.display_priority()).unwrap_or(0);
    let empty = usize::try_from(MAX_PRIORITY).unwrap_or(0) - filled;
    Span::styled(
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty)),
        Style::default().fg(c.star),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete {
        title,
        company,
        focus,
        deleting,
        error,
        ..
    } = modal
    else {
        return;
    };

    let texts = &t().confirm_delete;
    let c = colors();
    let area = centered_rect(56, 11, frame.area());
    let inner = render_frame(frame, area, texts.title, c.error);

    let cancel_style = if *focus == 0 {
        Style::default().fg(c.bg).bg(c.fg)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(texts.message, Style::default().fg(c.fg)),
        Line::styled(
            format!("\"{title}\" · {company}"),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
    ];

    if *deleting {
        lines.push(Line::styled(texts.deleting, Style::default().fg(c.warning)));
    } else {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", t().common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", t().common.delete), confirm_style),
        ]));
    }

    if let Some(err) = error {
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("⚠ {err}"), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 8, frame.area());
    let inner = render_frame(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("Esc / Enter: {}", t().common.close),
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    use crate::event::DefaultKeymap as K;

    let help = &t().help;
    let a = &help.actions;
    let c = colors();
    let area = centered_rect(58, 29, frame.area());
    let inner = render_frame(frame, area, help.title, c.border_focused);

    let section = |title: &str| {
        Line::styled(
            title.to_string(),
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(help.global),
        entry(&K::TOGGLE_FOCUS.label(), a.switch_panel),
        entry(&K::FOCUS_SEARCH.label(), a.focus_search),
        entry(&K::RELOAD.label(), a.reload),
        entry(&format!("?  {}", K::HELP.label()), a.help),
        entry(&K::QUIT.label(), a.quit),
        Line::from(""),
        section(help.list),
        entry("↑↓ / jk", a.move_selection),
        entry(&K::ACTION_ADD.label(), a.add),
        entry("Enter", a.edit),
        entry(&K::ACTION_EDIT.label(), a.edit),
        entry(&K::ACTION_DELETE.label(), a.delete),
        Line::from(""),
        section(help.form),
        entry("Tab / ↑↓", a.next_field),
        entry("←→", a.adjust),
        entry(&K::FORM_ADD_LINK.label(), a.add_link),
        entry(&K::FORM_REMOVE_LINK.label(), a.remove_link),
        entry("Enter", a.submit),
        entry(&K::BACK.label(), a.cancel),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
