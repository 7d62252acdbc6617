use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use folio_core::SectionState;

use crate::app::App;
use crate::mode::{AppMode, Pane};

/// Section index panel state
pub struct IndexPanel {
    pub list_state: ListState,
}

impl IndexPanel {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, app: &App) {
        let border_color = if app.focused_pane == Pane::Index {
            app.mode.color()
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.page.title))
            .border_style(Style::default().fg(border_color));

        if app.page.sections.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No sections",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = app
            .page
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let state = app
                    .nav
                    .as_ref()
                    .map(|n| n.state_of(section.id))
                    .unwrap_or(SectionState::Expanded);
                let (marker, style) = match state {
                    SectionState::Collapsed => ("▸", Style::default()),
                    SectionState::Expanded => ("▾", Style::default()),
                    SectionState::ExpandedActive => (
                        "●",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                };
                let number = if app.mode == AppMode::Jump {
                    format!("{} ", i + 1)
                } else {
                    String::new()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::Magenta)),
                    Span::styled(format!("{marker} {}", section.title), style),
                ]))
            })
            .collect();

        self.list_state.select(Some(app.selected));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for IndexPanel {
    fn default() -> Self {
        Self::new()
    }
}
