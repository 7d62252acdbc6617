/// Application modes (vim-inspired)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Browse sections and scroll content
    Normal,

    /// Pick a section by number to jump to
    Jump,

    /// Command input (vim : mode)
    Command,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Jump => "JUMP",
            AppMode::Command => "COMMAND",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Normal => Color::Cyan,
            AppMode::Jump => Color::Magenta,
            AppMode::Command => Color::Yellow,
        }
    }
}

/// Which pane has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    /// Left pane (section index)
    Index,

    /// Right pane (page content)
    Content,
}

impl Pane {
    /// Toggle between panes
    pub fn toggle(&self) -> Self {
        match self {
            Pane::Index => Pane::Content,
            Pane::Content => Pane::Index,
        }
    }
}
