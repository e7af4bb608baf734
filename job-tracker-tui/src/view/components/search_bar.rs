//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_search();
    let query = &app.applications.search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let mut spans = vec![Span::styled("⌕ ", Styles::muted())];
    if query.is_empty() && !focused {
        spans.push(Span::styled(
            t().applications.search_placeholder,
            Styles::muted(),
        ));
    } else {
        spans.push(Span::styled(query.as_str(), Style::default().fg(c.fg)));
        if focused {
            spans.push(Span::styled("▎", Style::default().fg(c.border_focused)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
