//! Per-session state shared between the loop and the active screen.

use std::collections::VecDeque;

use crate::Signal;

/// Session state for one render-loop invocation.
///
/// Holds the signal FIFO and the redraw flag. The flag starts true so the
/// first iteration always draws, is cleared after each successful draw, and
/// is set again only by explicit request from screen logic.
///
/// Not safe for concurrent access; the context lives and dies on the single
/// render/update thread.
#[derive(Debug)]
pub struct RenderContext {
    signals: VecDeque<Signal>,
    needs_redraw: bool,
    window: (usize, usize),
}

impl RenderContext {
    /// Creates a context for a window of the given size in cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            signals: VecDeque::new(),
            needs_redraw: true,
            window: (width, height),
        }
    }

    /// Enqueues a signal for the loop to process at the end of the current
    /// iteration.
    pub fn send_signal(&mut self, signal: Signal) {
        self.signals.push_back(signal);
    }

    /// Asks the loop to recompute and flush the canvas before the next
    /// input wait.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns true if a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// The window size as (columns, rows).
    pub fn window_size(&self) -> (usize, usize) {
        self.window
    }

    /// Clears the redraw flag after a successful draw.
    pub(crate) fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Removes and returns the oldest pending signal, if any.
    pub(crate) fn next_signal(&mut self) -> Option<Signal> {
        self.signals.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_redraw_pending() {
        let ctx = RenderContext::new(80, 24);
        assert!(ctx.needs_redraw());
        assert_eq!(ctx.window_size(), (80, 24));
    }

    #[test]
    fn signals_drain_in_fifo_order() {
        let mut ctx = RenderContext::new(10, 10);
        ctx.send_signal(Signal::Exit);
        ctx.send_signal(Signal::Exit);

        assert_eq!(ctx.next_signal(), Some(Signal::Exit));
        assert_eq!(ctx.next_signal(), Some(Signal::Exit));
        assert_eq!(ctx.next_signal(), None);
    }

    #[test]
    fn redraw_flag_round_trip() {
        let mut ctx = RenderContext::new(10, 10);
        ctx.mark_drawn();
        assert!(!ctx.needs_redraw());
        ctx.request_redraw();
        assert!(ctx.needs_redraw());
    }
}
