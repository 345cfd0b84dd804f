//! Control signals delivered to the render loop.

/// A control value produced by screen update logic and consumed by the
/// render loop, in FIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Restore the terminal and terminate the loop. This is the normal,
    /// intentional shutdown path, not an error.
    Exit,
}
