use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Pane;

/// Render the status bar (top bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_color = app.mode.color();
    let mode_name = if app.is_loading() {
        "LOADING"
    } else {
        app.mode.display_name()
    };

    // Current time
    let now = Local::now();
    let time_str = now.format("%H:%M:%S").to_string();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode_name),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.page.path, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
    ];

    let pane_indicator = match app.focused_pane {
        Pane::Index => "[INDEX]",
        Pane::Content => "[PAGE]",
    };
    spans.push(Span::styled(
        pane_indicator,
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(active) = app.nav.as_ref().and_then(|n| n.active()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("● {}", active),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Right-aligned time
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 2);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}
