//! Common utilities shared by the game modes

use std::time::Duration;

/// End-of-frame pause.
///
/// The loop is paced by a fixed sleep after every frame rather than by a
/// frame budget, so slow frames simply run the game slower.
///
/// # Example
/// ```rust,ignore
/// // ... poll, render, tick ...
/// end_frame(Duration::from_millis(10));
/// ```
pub fn end_frame(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
