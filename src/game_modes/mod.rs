mod ai;
mod common;

pub use ai::run_game_vs_ai;

/// Who drives the left paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Keyboard player against the reflex AI
    VersusAi,
    /// Reflex AI on both sides
    Demo,
}
