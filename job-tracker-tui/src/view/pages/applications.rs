//! 求职记录卡片列表页面视图

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use job_tracker_api::JobApplication;
use job_tracker_core::display::{
    count_label, priority_stars, relative_time, salary_text, status_label, truncate_link,
    valid_links,
};

use crate::i18n::{self, category_label, current_language, t, Language};
use crate::model::App;
use crate::view::theme::{colors, Styles, ThemeColors};

/// 每张卡片 4 行内容 + 上下边框
const CARD_HEIGHT: u16 = 6;

/// 渲染标题行：分类名 + 记录数（加载中不显示数量）
pub fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.applications;
    let mut spans = vec![Span::styled(
        category_label(state.category),
        Styles::title(),
    )];

    if !state.loading {
        let count = state.visible().len();
        let label = match current_language() {
            Language::EnUs => count_label(count),
            Language::ZhCn => format!("{count} {}", t().applications.count_suffix),
        };
        spans.push(Span::styled(format!("  {label}"), Styles::muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 渲染卡片列表或加载/错误/空状态
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.applications;
    let texts = &t().applications;
    let c = colors();

    if state.loading && state.records.is_empty() {
        render_message(frame, area, texts.loading, None, Style::default().fg(c.muted));
        return;
    }

    if let Some(ref err) = state.error {
        render_message(
            frame,
            area,
            &format!("⚠ {err}"),
            Some(format!("Alt+r: {}", t().hints.reload).as_str()),
            Style::default().fg(c.error),
        );
        return;
    }

    if state.records.is_empty() {
        render_message(
            frame,
            area,
            texts.empty,
            Some(texts.empty_hint),
            Style::default().fg(c.fg),
        );
        return;
    }

    let visible = state.visible();
    if visible.is_empty() {
        render_message(frame, area, texts.no_match, None, Style::default().fg(c.muted));
        return;
    }

    render_cards(app, &visible, frame, area);
}

/// 居中的提示文本
fn render_message(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>, style: Style) {
    let mut lines = vec![Line::from(""), Line::styled(message.to_string(), style)];
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(hint.to_string(), Styles::muted()));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// 渲染卡片，保证选中项在可视范围内
fn render_cards(app: &App, visible: &[&JobApplication], frame: &mut Frame, area: Rect) {
    let c = colors();
    let now = Utc::now();
    let per_page = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected = app.applications.selected;
    let offset = scroll_offset(selected, per_page);
    let focused = app.focus.is_content();

    for (row, (index, application)) in visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .enumerate()
    {
        let y = area.y + CARD_HEIGHT * u16::try_from(row).unwrap_or(0);
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, height);
        render_card(
            frame,
            card_area,
            application,
            index == selected,
            focused,
            now,
            &c,
        );
    }
}

/// 第一张可见卡片的索引
fn scroll_offset(selected: usize, per_page: usize) -> usize {
    (selected + 1).saturating_sub(per_page.max(1))
}

/// 渲染单张卡片
fn render_card(
    frame: &mut Frame,
    area: Rect,
    application: &JobApplication,
    is_selected: bool,
    focused: bool,
    now: DateTime<Utc>,
    c: &ThemeColors,
) {
    let border_style = if is_selected && focused {
        Style::default().fg(c.border_focused)
    } else if is_selected {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.border)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if is_selected {
        block = block.style(Style::default().bg(c.selected_bg));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let lines = vec![
        title_line(application, width, is_selected, c),
        company_line(application, width, c),
        details_line(application, width, now, c),
        links_line(application, width, c),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 标题 + 右侧状态徽标
fn title_line(
    application: &JobApplication,
    width: usize,
    is_selected: bool,
    c: &ThemeColors,
) -> Line<'static> {
    let status = application.job_status();
    let badge = format!(
        "[{}]",
        status.map_or_else(
            || status_label(application.status.as_deref()),
            |s| i18n::status_label(s).to_string(),
        )
    );
    let badge_width = badge.width();
    let title = fit(&application.title, width.saturating_sub(badge_width + 1));
    let padding = width.saturating_sub(title.width() + badge_width);

    let title_style = if is_selected {
        Style::default()
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::title()
    };

    Line::from(vec![
        Span::styled(title, title_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(badge, Style::default().fg(c.status(status))),
    ])
}

/// 公司 · 地点
fn company_line(application: &JobApplication, width: usize, c: &ThemeColors) -> Line<'static> {
    let mut text = application.company.clone();
    if let Some(location) = application
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
    {
        text.push_str(" · ");
        text.push_str(location);
    }
    Line::styled(fit(&text, width), Style::default().fg(c.fg))
}

/// 薪资、星级、创建时间、过期天数
fn details_line(
    application: &JobApplication,
    width: usize,
    now: DateTime<Utc>,
    c: &ThemeColors,
) -> Line<'static> {
    let texts = &t().applications;
    let mut parts: Vec<(String, Style)> = Vec::new();

    if let Some(salary) = salary_text(application.salary_range.as_ref()) {
        parts.push((salary, Style::default().fg(c.success)));
    }
    if let Some(stars) = priority_stars(application.priority) {
        parts.push((
            "★".repeat(usize::from(stars)),
            Style::default().fg(c.star),
        ));
    }
    if let Some(time) = relative_time(application.created_at.as_deref(), now) {
        parts.push((time, Styles::muted()));
    }
    if let Some(days) = application.expiration.filter(|d| *d > 0) {
        parts.push((
            format!("{} {days} {}", texts.expires_in, texts.days),
            Style::default().fg(c.warning),
        ));
    }

    let mut spans = Vec::new();
    let mut used = 0;
    for (i, (text, style)) in parts.into_iter().enumerate() {
        let sep = if i == 0 { "" } else { "  " };
        let needed = sep.width() + text.width();
        if used + needed > width {
            break;
        }
        used += needed;
        spans.push(Span::raw(sep));
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

/// 链接（过长的截断）
fn links_line(application: &JobApplication, width: usize, c: &ThemeColors) -> Line<'static> {
    let links: Vec<String> = valid_links(&application.links)
        .into_iter()
        .map(truncate_link)
        .collect();
    if links.is_empty() {
        return Line::from("");
    }
    Line::styled(
        fit(&links.join("  "), width),
        Style::default()
            .fg(c.link)
            .add_modifier(Modifier::UNDERLINED),
    )
}

/// 按显示宽度截断，超出时以 … 结尾
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_respects_display_width() {
        assert_eq!(fit("Engineer", 20), "Engineer");
        assert_eq!(fit("Engineer", 5), "Engi…");
        // 全角字符占两列
        assert_eq!(fit("软件工程师", 5), "软件…");
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(3, 3), 1);
        assert_eq!(scroll_offset(9, 3), 7);
        assert_eq!(scroll_offset(4, 0), 4);
    }
}
