use std::time::Duration;

use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::{Config, DisplayConfig, KeyBindings};
use crate::game::simulation::TickEvents;
use crate::game::{self, Controller, GameState, InputFrame, InputSampler};
use crate::ui;

use super::common::end_frame;
use super::GameMode;

/// Run a game against the reflex AI until the player quits
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    mut input: InputSampler,
    mode: GameMode,
) -> anyhow::Result<()> {
    info!(?mode, sampling = ?input.sampling(), "game start");

    let keymap = input.keymap();
    let left_controller = match mode {
        GameMode::VersusAi => Controller::InputDriven {
            up: keymap.up,
            down: keymap.down,
        },
        GameMode::Demo => Controller::BallTracking,
    };

    let mut game_state = GameState::new(&config.field, &config.physics, left_controller);
    debug!(
        left = ?game_state.player.controller(),
        right = ?game_state.opponent.controller(),
        "paddles ready"
    );
    let frame_delay = Duration::from_millis(config.display.frame_delay_ms);
    let hint = controls_hint(mode, &config.keybindings);
    let mut frame_count: u64 = 0;

    loop {
        // Drain input first so quit never waits for another tick
        let input_frame = input.poll()?;

        match run_frame(terminal, &mut game_state, &input_frame, &config.display, &hint)? {
            FrameOutcome::Quit => {
                info!(
                    frames = frame_count,
                    hits = game_state.ball.hit_count(),
                    "quit requested"
                );
                return Ok(());
            }
            FrameOutcome::Ticked(events) => {
                if events.any() {
                    debug!(
                        frame = frame_count,
                        ?events,
                        hits = game_state.ball.hit_count(),
                        speed = game_state.ball.speed(),
                        "tick events"
                    );
                }
            }
        }

        frame_count += 1;
        end_frame(frame_delay);
    }
}

/// Result of one pass through the loop body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameOutcome {
    Quit,
    Ticked(TickEvents),
}

/// One frame after input is drained: stop on quit, otherwise draw the
/// current state and then advance it by one tick.
fn run_frame<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    game_state: &mut GameState,
    input_frame: &InputFrame,
    display: &DisplayConfig,
    hint: &str,
) -> anyhow::Result<FrameOutcome> {
    if input_frame.quit {
        return Ok(FrameOutcome::Quit);
    }

    terminal.draw(|f| ui::render(f, game_state, display, hint))?;

    Ok(FrameOutcome::Ticked(game::tick(game_state, &input_frame.keys)))
}

fn controls_hint(mode: GameMode, bindings: &KeyBindings) -> String {
    match mode {
        GameMode::VersusAi => format!(
            "{}/{}: Move  {}: Quit",
            bindings.paddle_up, bindings.paddle_down, bindings.quit
        ),
        GameMode::Demo => format!("Demo  {}: Quit", bindings.quit),
    }
}
