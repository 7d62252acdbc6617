pub mod command_bar;
pub mod content_panel;
pub mod index_panel;
pub mod layout;
pub mod loading_screen;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;

pub use content_panel::ContentPanel;
pub use index_panel::IndexPanel;

/// Main UI renderer
pub struct UI {
    pub index_panel: IndexPanel,
    pub content_panel: ContentPanel,
}

impl UI {
    /// Create a new UI
    pub fn new() -> Self {
        Self {
            index_panel: IndexPanel::new(),
            content_panel: ContentPanel::new(),
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &mut App) {
        // Get main layout areas
        let (status_area, content_area, command_area) = layout::Layout::main(f.area());

        status_bar::render(f, status_area, app);
        command_bar::render(f, command_area, app);

        if app.is_loading() {
            loading_screen::render(f, content_area, app);
            return;
        }

        let (index_area, page_area) = layout::Layout::panes(content_area);
        self.index_panel.render(f, index_area, app);
        self.content_panel.render(f, page_area, app);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}
