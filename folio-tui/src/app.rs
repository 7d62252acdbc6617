use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use folio_core::{FolioConfig, LoadingGate, Navigator, Page, Site};

use crate::mode::{AppMode, Pane};
use crate::viewport::Viewport;

/// Main application state
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// Which pane has focus
    pub focused_pane: Pane,

    pub site: Site,
    pub config: FolioConfig,

    /// Page being viewed
    pub page: &'static Page,

    /// Accordion state, present on disclosure pages only
    pub nav: Option<Navigator>,

    /// Selected section in the index pane
    pub selected: usize,

    /// Mount-time loading screen for the current page
    pub loading: LoadingGate,
    pub loading_delay: Duration,

    pub viewport: Viewport,

    /// Command input buffer
    pub command_input: String,

    /// Status message (shown in command bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Create a new App showing `page`
    pub fn new(site: Site, config: FolioConfig, page: &'static Page) -> Self {
        let loading_delay = config.ui.loading_delay();
        let mut app = Self {
            mode: AppMode::Normal,
            focused_pane: Pane::Index,
            site,
            config,
            page,
            nav: None,
            selected: 0,
            loading: LoadingGate::open(),
            loading_delay,
            viewport: Viewport::new(),
            command_input: String::new(),
            status_message: None,
            should_quit: false,
        };
        app.mount(page);
        app
    }

    /// Replace the current page view with a fresh one for `page`
    pub fn mount(&mut self, page: &'static Page) {
        tracing::debug!(page = page.slug, "mount page");
        self.page = page;
        self.nav = page
            .is_disclosure()
            .then(|| page.navigator(self.config.ui.terminal_scroll_margin));
        self.selected = 0;
        self.focused_pane = if page.sections.is_empty() {
            Pane::Content
        } else {
            Pane::Index
        };
        self.loading = LoadingGate::new(self.loading_delay);
        self.viewport.reset();
        self.mode = AppMode::Normal;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Fraction of the loading delay already elapsed, for the progress gauge
    pub fn loading_progress(&self, now: Instant) -> f64 {
        if self.loading_delay.is_zero() {
            return 1.0;
        }
        let remaining = self.loading.remaining_at(now).as_secs_f64();
        (1.0 - remaining / self.loading_delay.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn selected_section(&self) -> Option<&'static str> {
        self.page.sections.get(self.selected).map(|s| s.id)
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.is_loading() {
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return Ok(());
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Jump => self.handle_jump_mode(key),
            AppMode::Command => self.handle_command_mode(key),
        }
        Ok(())
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            KeyCode::Char(':') => {
                self.mode = AppMode::Command;
                self.command_input.clear();
            }

            KeyCode::Char('f') if self.nav.is_some() => {
                self.mode = AppMode::Jump;
                self.command_input.clear();
                self.status_message = Some(format!(
                    "Jump to section: 1-{}, Esc to cancel",
                    self.page.sections.len()
                ));
            }

            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.toggle();
            }

            KeyCode::Char('j') | KeyCode::Down => match self.focused_pane {
                Pane::Index => self.select_offset(1),
                Pane::Content => self.viewport.scroll_by(1),
            },

            KeyCode::Char('k') | KeyCode::Up => match self.focused_pane {
                Pane::Index => self.select_offset(-1),
                Pane::Content => self.viewport.scroll_by(-1),
            },

            KeyCode::PageDown => self.viewport.scroll_by(10),
            KeyCode::PageUp => self.viewport.scroll_by(-10),

            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_section() {
                    self.toggle(id);
                }
            }

            KeyCode::Char('g') => {
                if let Some(id) = self.selected_section() {
                    self.navigate(id);
                }
            }

            KeyCode::Char('n') => {
                let next = self.site.next(self.page.slug);
                self.mount(next);
                self.status_message = Some(format!("Opened {}", next.path));
            }

            KeyCode::Char('p') => {
                let prev = self.site.prev(self.page.slug);
                self.mount(prev);
                self.status_message = Some(format!("Opened {}", prev.path));
            }

            _ => {}
        }
    }

    /// Handle jump mode keys
    ///
    /// Digits accumulate into a section number. The jump fires as soon as
    /// no further digit could name a section, or on Enter.
    fn handle_jump_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.command_input.clear();
                self.status_message = None;
            }

            KeyCode::Backspace => {
                self.command_input.pop();
            }

            KeyCode::Enter => self.finish_jump(),

            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.command_input.push(c);
                let len = self.page.sections.len();
                match self.command_input.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= len && n * 10 > len => self.finish_jump(),
                    Ok(n) if n >= 1 && n <= len => {
                        self.status_message =
                            Some(format!("Jump to section: {n}_ (Enter to confirm)"));
                    }
                    _ => self.finish_jump(),
                }
            }

            _ => {}
        }
    }

    fn finish_jump(&mut self) {
        let input = std::mem::take(&mut self.command_input);
        self.mode = AppMode::Normal;

        let target = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.page.sections.get(idx).map(|s| (idx, s.id)));

        match target {
            Some((idx, id)) => {
                self.selected = idx;
                self.navigate(id);
            }
            None => {
                self.status_message = Some(format!("No section {input}"));
            }
        }
    }

    /// Handle command mode keys
    fn handle_command_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.command_input.clear();
            }

            KeyCode::Enter => {
                let cmd = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Normal;
                self.execute_command(&cmd);
            }

            KeyCode::Backspace => {
                self.command_input.pop();
            }

            KeyCode::Char(c) => {
                self.command_input.push(c);
            }

            _ => {}
        }
    }

    /// Execute a `:` command
    pub fn execute_command(&mut self, input: &str) {
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match (cmd, arg) {
            ("q" | "quit", _) => {
                self.should_quit = true;
            }

            ("page" | "e", Some(key)) => match self.site.resolve(key) {
                Ok(page) => {
                    self.mount(page);
                    self.status_message = Some(format!("Opened {}", page.path));
                }
                Err(e) => {
                    self.status_message = Some(e.to_string());
                }
            },

            ("open" | "o", Some(id)) => self.navigate(id),

            ("toggle" | "t", Some(id)) => self.toggle(id),

            ("", _) => {}

            _ => {
                self.status_message = Some(format!("Unknown command: {}", input.trim()));
            }
        }
    }

    fn toggle(&mut self, id: &str) {
        match self.nav.as_mut() {
            Some(nav) => {
                let open = nav.toggle(id);
                self.status_message = Some(format!(
                    "{} {}",
                    if open { "Expanded" } else { "Collapsed" },
                    id
                ));
            }
            None => {
                self.status_message = Some("This page has no collapsible sections".to_string());
            }
        }
    }

    fn navigate(&mut self, id: &str) {
        match self.nav.as_mut() {
            Some(nav) => {
                nav.navigate_to(id, &mut self.viewport);
                if let Some(idx) = self.page.sections.iter().position(|s| s.id == id) {
                    self.selected = idx;
                }
                self.focused_pane = Pane::Content;
                self.status_message = None;
            }
            None => {
                self.status_message = Some("This page has no collapsible sections".to_string());
            }
        }
    }

    fn select_offset(&mut self, delta: isize) {
        let len = self.page.sections.len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_on(slug: &str) -> App {
        let mut config = FolioConfig::default();
        config.ui.loading_delay_ms = 0;
        let site = Site::new();
        let page = site.by_slug(slug).unwrap();
        App::new(site, config, page)
    }

    #[test]
    fn mounts_with_default_section_open() {
        let app = app_on("privacy");
        let nav = app.nav.as_ref().unwrap();
        assert_eq!(nav.expanded().collect::<Vec<_>>(), vec!["introduction"]);
        assert_eq!(nav.active(), None);
        assert!(!app.is_loading());
    }

    #[test]
    fn space_toggles_selected_section() {
        let mut app = app_on("privacy");
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(!app.nav.as_ref().unwrap().is_expanded("introduction"));
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(app.nav.as_ref().unwrap().is_expanded("introduction"));
    }

    #[test]
    fn jump_mode_navigates_and_queues_scroll() {
        let mut app = app_on("privacy");
        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.mode, AppMode::Jump);

        app.handle_key_event(key(KeyCode::Char('5'))).unwrap();
        let nav = app.nav.as_ref().unwrap();
        assert_eq!(nav.state_of("rights"), SectionState::ExpandedActive);
        assert!(nav.is_expanded("introduction"));
        assert_eq!(app.selected, 4);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.viewport.has_pending());
    }

    #[test]
    fn jump_numbers_beyond_nine_use_enter() {
        use folio_core::Section;

        let sections: Vec<Section> = (1..=12)
            .map(|n| Section {
                id: Box::leak(format!("s{n}").into_boxed_str()),
                title: "Section",
                body: &[],
            })
            .collect();
        let privacy = Site::new().by_slug("privacy").unwrap();
        let wide: &'static Page = Box::leak(Box::new(Page {
            sections: Box::leak(sections.into_boxed_slice()),
            default_open: Some("s1"),
            ..*privacy
        }));

        let mut app = app_on("privacy");
        app.mount(wide);

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.mode, AppMode::Jump);
        app.handle_key_event(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.selected, 11);
        assert!(app.nav.as_ref().unwrap().is_active("s12"));

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('1'))).unwrap();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.selected, 0);
        assert!(app.nav.as_ref().unwrap().is_active("s1"));

        app.handle_key_event(key(KeyCode::Char('f'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('1'))).unwrap();
        app.handle_key_event(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.status_message.as_deref(), Some("No section 13"));
    }

    #[test]
    fn commands_accept_unknown_section_ids() {
        let mut app = app_on("terms");
        app.execute_command("toggle nonexistent-id");
        assert!(app.nav.as_ref().unwrap().is_expanded("nonexistent-id"));

        app.execute_command("open liability");
        assert!(app.nav.as_ref().unwrap().is_active("liability"));
    }

    #[test]
    fn page_command_remounts() {
        let mut app = app_on("privacy");
        app.execute_command("open rights");
        app.execute_command("page /terms");

        assert_eq!(app.page.slug, "terms");
        let nav = app.nav.as_ref().unwrap();
        assert_eq!(nav.active(), None);
        assert_eq!(nav.expanded().collect::<Vec<_>>(), vec!["introduction"]);

        app.execute_command("page blog");
        assert_eq!(app.page.slug, "terms");
        assert!(app.status_message.unwrap().contains("Unknown page"));
    }

    #[test]
    fn flat_pages_have_no_navigator() {
        let mut app = app_on("about");
        assert!(app.nav.is_none());
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(
            app.status_message.as_deref(),
            Some("This page has no collapsible sections")
        );
    }

    #[test]
    fn keys_ignored_while_loading() {
        let mut config = FolioConfig::default();
        config.ui.loading_delay_ms = 60_000;
        let site = Site::new();
        let mut app = App::new(site, config, site.by_slug("privacy").unwrap());

        assert!(app.is_loading());
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(app.nav.as_ref().unwrap().is_expanded("introduction"));

        app.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn next_page_wraps() {
        let mut app = app_on("cookies");
        app.handle_key_event(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.page.slug, "home");
        app.handle_key_event(key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.page.slug, "cookies");
    }
}
