use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use folio_core::{LineKind, Outline, SectionState};

use crate::app::App;
use crate::mode::Pane;

/// A wrapped display row and the outline line it came from
struct Row {
    text: String,
    kind: LineKind,
}

/// Page content panel
pub struct ContentPanel {
    /// Rows laid out on the last render, by section id
    anchors: Vec<(&'static str, usize)>,
}

impl ContentPanel {
    pub fn new() -> Self {
        Self {
            anchors: Vec::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, app: &mut App) {
        let border_color = if app.focused_pane == Pane::Content {
            app.mode.color()
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.page.path))
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        let width = usize::from(inner.width.max(1));
        let height = usize::from(inner.height);

        let outline = Outline::build(app.page, app.nav.as_ref(), &app.config);
        let rows = layout_rows(&outline, width);

        self.anchors = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| match row.kind {
                LineKind::SectionHeader { id, .. } => Some((id, i)),
                _ => None,
            })
            .collect();

        let anchors = &self.anchors;
        app.viewport.resolve(
            |id| {
                anchors
                    .iter()
                    .find(|(anchor, _)| *anchor == id)
                    .map(|(_, row)| *row)
            },
            rows.len(),
            height,
        );

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::styled(row.text, style_for(&row.kind)))
            .collect();

        let offset = u16::try_from(app.viewport.offset()).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
        f.render_widget(paragraph, area);
    }
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn style_for(kind: &LineKind) -> Style {
    match kind {
        LineKind::Title => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Summary => Style::default().fg(Color::Gray),
        LineKind::SectionHeader { state, .. } => match state {
            SectionState::Collapsed => Style::default().add_modifier(Modifier::BOLD),
            SectionState::Expanded => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            SectionState::ExpandedActive => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        },
        LineKind::CardTitle => Style::default().fg(Color::Magenta),
        LineKind::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        LineKind::Body | LineKind::CardBody | LineKind::Blank => Style::default(),
    }
}

/// Wrap outline lines to `width` columns
fn layout_rows(outline: &Outline, width: usize) -> Vec<Row> {
    let mut rows = Vec::with_capacity(outline.len());
    for line in &outline.lines {
        for text in wrap(&line.text, width) {
            rows.push(Row {
                text,
                kind: line.kind.clone(),
            });
        }
    }
    rows
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;

        // Hard-break words longer than a row
        while current_len > width {
            let split: String = current.chars().take(width).collect();
            current = current.chars().skip(width).collect();
            current_len -= width;
            out.push(split);
        }
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}
