//! Scroll position of the content pane

use folio_core::{PendingScroll, ScrollHost, ScrollRequest};

/// Content pane scroll state. Jump requests are queued and resolved on
/// the next render, once the target's row is known.
#[derive(Debug, Default, Clone)]
pub struct Viewport {
    offset: usize,
    pending: PendingScroll,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_pending(&self) -> bool {
        self.pending.peek().is_some()
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.pending.take();
    }

    /// Apply any queued jump, then keep the offset inside the content.
    ///
    /// `locate` maps a section id to its first row; a target that was not
    /// laid out is dropped.
    pub fn resolve<F>(&mut self, locate: F, total_rows: usize, height: usize)
    where
        F: Fn(&str) -> Option<usize>,
    {
        if let Some(req) = self.pending.take() {
            match locate(&req.id) {
                Some(row) => self.offset = row.saturating_sub(usize::from(req.margin)),
                None => tracing::trace!(id = %req.id, "scroll target not rendered"),
            }
        }

        let max_offset = total_rows.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}

impl ScrollHost for Viewport {
    fn request_scroll(&mut self, request: ScrollRequest) {
        self.pending.request_scroll(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, margin: u16) -> ScrollRequest {
        ScrollRequest {
            id: id.into(),
            margin,
        }
    }

    #[test]
    fn resolves_to_row_minus_margin() {
        let mut vp = Viewport::new();
        vp.request_scroll(request("rights", 2));
        vp.resolve(|id| (id == "rights").then_some(30), 100, 20);
        assert_eq!(vp.offset(), 28);
        assert!(!vp.has_pending());
    }

    #[test]
    fn missing_target_is_ignored() {
        let mut vp = Viewport::new();
        vp.scroll_by(5);
        vp.request_scroll(request("ghost", 1));
        vp.resolve(|_| None, 100, 20);
        assert_eq!(vp.offset(), 5);
    }

    #[test]
    fn offset_is_clamped() {
        let mut vp = Viewport::new();
        vp.scroll_by(500);
        vp.resolve(|_| None, 40, 10);
        assert_eq!(vp.offset(), 30);

        vp.scroll_by(-100);
        assert_eq!(vp.offset(), 0);

        vp.scroll_by(3);
        vp.resolve(|_| None, 5, 10);
        assert_eq!(vp.offset(), 0);
    }
}
