// Reflex bot - one-step ball tracker

use crate::game::PaddleMove;

/// Decide which way a tracking paddle steps this tick.
///
/// Compares the paddle's top edge (not its center) with the ball's top edge,
/// so it settles with its top level with the ball's top and its center
/// about half a paddle height below the ball. The step is fixed, which means
/// a fast ball can out-run it.
pub fn decide(paddle_y: i32, ball_y: i32) -> Option<PaddleMove> {
    if paddle_y < ball_y {
        Some(PaddleMove::Down)
    } else if paddle_y > ball_y {
        Some(PaddleMove::Up)
    } else {
        None
    }
}
