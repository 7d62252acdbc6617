use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use super::layout::Layout;
use crate::app::App;

/// Render the mount-time loading screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let progress = app.loading_progress(Instant::now());
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Loading {} ", app.page.title))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(progress);

    f.render_widget(gauge, Layout::centered(area, 40, 3));
}
