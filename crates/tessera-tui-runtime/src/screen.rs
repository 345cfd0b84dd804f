//! The screen contract driven by the render loop.

use tessera_tui_text::Renderable;

use crate::RenderContext;

/// Lifecycle notifications dispatched to a screen when the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The window (terminal canvas) exists; dispatched first.
    WindowCreated,
    /// The screen is about to become active; dispatched second.
    ScreenCreated,
}

/// A screen: the producer of renderable content and the owner of input
/// handling.
///
/// The loop calls [`view`](Screen::view) to obtain the current renderable
/// whenever a redraw is pending, and [`update`](Screen::update) once per
/// iteration. `update` may block waiting for input, enqueue signals through
/// the context, and request redraws.
pub trait Screen {
    /// Handles a lifecycle notification.
    fn on_event(&mut self, ctx: &mut RenderContext, event: LifecycleEvent);

    /// Advances the screen. May block; runs after rendering and signal
    /// draining within each iteration.
    fn update(&mut self, ctx: &mut RenderContext);

    /// Returns the content to render for the current state.
    fn view(&mut self, ctx: &RenderContext) -> Box<dyn Renderable>;
}
