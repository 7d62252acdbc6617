use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Keybind hints for the current mode
pub fn hints(app: &App) -> &'static str {
    if app.is_loading() {
        return "q: quit";
    }
    match app.mode {
        AppMode::Normal if app.nav.is_some() => {
            "j/k: move | space: toggle | g: go to | f: jump | n/p: page | :: command | q: quit"
        }
        AppMode::Normal => "j/k: scroll | Tab: switch pane | n/p: page | :: command | q: quit",
        AppMode::Jump => "number: section | Enter: confirm | Esc: cancel",
        AppMode::Command => "page <slug> | open <id> | toggle <id> | q",
    }
}

/// Render the command bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.mode {
        AppMode::Command => Line::from(vec![
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(app.command_input.as_str()),
            Span::styled("_", Style::default().fg(Color::Green)), // Cursor
        ]),

        AppMode::Normal | AppMode::Jump => match app.status_message {
            Some(ref msg) => Line::from(msg.as_str()),
            None => Line::from(Span::styled(hints(app), Style::default().fg(Color::DarkGray))),
        },
    };

    f.render_widget(Paragraph::new(content), area);
}
