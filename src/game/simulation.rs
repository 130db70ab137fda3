use crossterm::event::KeyCode;
use tracing::debug;

use super::geometry::Rect;
use super::paddle::Paddle;
use super::state::GameState;

/// What happened during one tick, mostly for logging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    pub paddle_hit: bool,
    pub border_bounce: bool,
    pub ball_reset: bool,
    pub momentum_increased: bool,
}

impl TickEvents {
    pub fn any(&self) -> bool {
        self.paddle_hit || self.border_bounce || self.ball_reset || self.momentum_increased
    }
}

/// Advance the game by one tick.
///
/// `keys` are the trigger presses gathered for this tick, in order. The
/// sequence is fixed: paddles move, the ball moves (resetting at a side),
/// paddles are pushed out of borders, then the ball bounces off paddles and
/// borders.
pub fn tick(state: &mut GameState, keys: &[KeyCode]) -> TickEvents {
    let mut events = TickEvents::default();

    // Trackers react to where the ball is before it moves
    let ball_y = state.ball.rect.y;
    for paddle in [&mut state.player, &mut state.opponent] {
        for key in keys {
            paddle.apply_key(*key);
        }
        paddle.track(ball_y);
    }

    if state.ball.advance() {
        events.ball_reset = true;
        debug!(
            hits = state.ball.hit_count(),
            direction = ?state.ball.direction(),
            "ball left the field, reset to center"
        );
    }

    let top = *state.top_border.rect();
    let bottom = *state.bottom_border.rect();
    for paddle in [&mut state.player, &mut state.opponent] {
        correct_against_borders(paddle, &top, &bottom);
    }

    if state.ball.collides(&state.player.rect) || state.ball.collides(&state.opponent.rect) {
        state.ball.change_direction_x();
        state.ball.hit();
        events.paddle_hit = true;

        if state.ball.increase_momentum() {
            events.momentum_increased = true;
            debug!(
                momentum = state.ball.momentum(),
                hits = state.ball.hit_count(),
                "ball momentum increased"
            );
        }
    }

    if state.ball.collides(&top) || state.ball.collides(&bottom) {
        state.ball.change_direction_y();
        events.border_bounce = true;
    }

    events
}

/// Push a paddle fully below the top border and then fully above the bottom one.
fn correct_against_borders(paddle: &mut Paddle, top: &Rect, bottom: &Rect) {
    if paddle.collides(top) {
        paddle.set_y(top.y + top.h);
    }

    if paddle.collides(bottom) {
        paddle.set_y(bottom.y - paddle.rect.h);
    }
}
