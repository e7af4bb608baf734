//! 左侧分类面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use job_tracker_core::{category_counts, Category};

use crate::i18n::{category_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染分类面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    // 数量与侧边栏顺序一致
    let counts = category_counts(&app.applications.records);

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let count = counts
                .iter()
                .find(|(category, _)| *category == nav_item.category)
                .map_or(0, |(_, n)| *n);

            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            let icon_style = if is_selected {
                style
            } else if let Category::Status(status) = nav_item.category {
                Style::default().fg(c.status(Some(status)))
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(nav_item.icon, icon_style),
                Span::styled(format!(" {}", category_label(nav_item.category)), style),
                Span::styled(
                    format!(" ({count})"),
                    if is_selected {
                        style
                    } else {
                        Style::default().fg(c.muted)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected().add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
