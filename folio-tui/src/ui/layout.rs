use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, content area, and command bar
    ///
    /// Returns: (status_area, content_area, command_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Command bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Split content area into two panes (section index left, page right)
    ///
    /// Returns: (index_area, page_area)
    pub fn panes(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Section index (left)
                Constraint::Percentage(70), // Page content (right)
            ])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Centered box of the given size, clipped to `area`
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Layout::centered(area, 40, 5);
        assert_eq!(rect, Rect::new(20, 9, 40, 5));

        let clipped = Layout::centered(Rect::new(0, 0, 10, 3), 40, 5);
        assert_eq!(clipped, Rect::new(0, 0, 10, 3));
    }
}
