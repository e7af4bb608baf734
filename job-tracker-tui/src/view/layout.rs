//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧分类
            Constraint::Percentage(80), // 右侧卡片
        ])
        .split(content_area);

    // 渲染左侧分类
    components::navigation::render(app, frame, columns[0]);

    // 渲染右侧内容
    render_content(app, frame, columns[1]);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![Span::styled(
        format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")),
        style.add_modifier(Modifier::BOLD),
    )];
    // 列表重载或弹窗内的请求进行中
    if app.applications.loading || app.modal.is_busy() {
        spans.push(Span::styled(format!("  {}", t().common.loading), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}

/// 渲染右侧内容区：搜索框 + 卡片列表
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题 + 数量
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 卡片
        ])
        .split(inner);

    pages::applications::render_header(app, frame, rows[0]);
    components::search_bar::render(app, frame, rows[1]);
    pages::applications::render(app, frame, rows[2]);
}
