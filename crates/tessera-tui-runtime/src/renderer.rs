//! The render loop driver.

use tessera_tui_core::{Error, Result};
use tessera_tui_grid::Grid;
use tessera_tui_terminal::TerminalBackend;
use tracing::{debug, trace};

use crate::{LifecycleEvent, RenderContext, Screen, Signal};

/// Loop lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not yet running.
    Created,
    /// Inside [`Renderer::run`].
    Running,
    /// The exit signal was processed and the terminal restored.
    Terminated,
}

/// Single-threaded cooperative render loop.
///
/// Owns the terminal backend, the session [`RenderContext`], and a
/// persistent canvas grid sized to the terminal. Each iteration renders the
/// active screen's view onto the canvas when a redraw is pending, flushes
/// the serialized canvas, drains signals in FIFO order, then invokes the
/// screen's update step.
#[derive(Debug)]
pub struct Renderer<B: TerminalBackend> {
    backend: B,
    context: RenderContext,
    canvas: Grid,
    state: LoopState,
}

impl<B: TerminalBackend> Renderer<B> {
    /// Creates a renderer with a canvas sized to the backend's terminal.
    ///
    /// A backend reporting a zero-width or zero-height terminal is rejected
    /// with [`Error::Terminal`]; the canvas needs at least one cell.
    pub fn new(backend: B) -> Result<Self> {
        let (cols, rows) = backend.size()?;
        if cols == 0 || rows == 0 {
            return Err(Error::Terminal(format!(
                "unusable terminal size {cols}x{rows}"
            )));
        }

        let context = RenderContext::new(cols as usize, rows as usize);
        let canvas = Grid::new(cols as usize, rows as usize);

        Ok(Self {
            backend,
            context,
            canvas,
            state: LoopState::Created,
        })
    }

    /// Returns the current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns the session context.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Returns the canvas grid.
    pub fn canvas(&self) -> &Grid {
        &self.canvas
    }

    /// Runs the loop with the given screen until an exit signal arrives.
    ///
    /// On entry the screen receives the window-create and screen-create
    /// lifecycle notifications, in that order. Within one iteration the
    /// ordering guarantee is: render-and-flush, then signal draining, then
    /// the screen's update step. The exit signal restores the terminal and
    /// returns; process exit is the caller's decision.
    pub fn run(&mut self, screen: &mut dyn Screen) -> Result<()> {
        screen.on_event(&mut self.context, LifecycleEvent::WindowCreated);
        screen.on_event(&mut self.context, LifecycleEvent::ScreenCreated);
        self.state = LoopState::Running;

        loop {
            if self.context.needs_redraw() {
                let result = screen.view(&self.context).render();
                trace!(
                    x = result.x,
                    y = result.y,
                    width = result.grid.width(),
                    height = result.grid.height(),
                    "compositing view onto canvas"
                );

                self.canvas.place_grid(result.x, result.y, &result.grid);
                self.backend.write_frame(&self.canvas.serialize())?;
                self.backend.flush()?;
                self.context.mark_drawn();
            }

            while let Some(signal) = self.context.next_signal() {
                match signal {
                    Signal::Exit => {
                        debug!("exit signal received, restoring terminal");
                        self.backend.restore()?;
                        self.state = LoopState::Terminated;
                        return Ok(());
                    }
                }
            }

            screen.update(&mut self.context);
        }
    }
}
