use crossterm::event::KeyCode;

use super::geometry::Rect;
use crate::ai::reflex_bot;

/// Single vertical step a paddle can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// What drives a paddle, fixed when the paddle is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Keyboard player: one step per trigger key
    InputDriven { up: KeyCode, down: KeyCode },
    /// Reflex AI: one step toward the ball's y each tick
    BallTracking,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    speed: i32,
    controller: Controller,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32, controller: Controller) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed,
            controller,
        }
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    // No clamping here; borders push paddles back in the tick
    pub fn move_up(&mut self, amount: i32) {
        self.rect.y -= amount;
    }

    pub fn move_down(&mut self, amount: i32) {
        self.rect.y += amount;
    }

    pub fn set_y(&mut self, y: i32) {
        self.rect.y = y;
    }

    pub fn collides(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    pub fn step(&mut self, direction: PaddleMove) {
        match direction {
            PaddleMove::Up => self.move_up(self.speed),
            PaddleMove::Down => self.move_down(self.speed),
        }
    }

    /// Apply one key press to an input-driven paddle.
    ///
    /// Up and down are checked independently; a tracking paddle ignores keys.
    pub fn apply_key(&mut self, key: KeyCode) {
        if let Controller::InputDriven { up, down } = self.controller {
            if key == up {
                self.move_up(self.speed);
            }
            if key == down {
                self.move_down(self.speed);
            }
        }
    }

    /// Step a ball-tracking paddle toward `ball_y`; input-driven paddles stay put.
    pub fn track(&mut self, ball_y: i32) {
        if self.controller != Controller::BallTracking {
            return;
        }
        if let Some(direction) = reflex_bot::decide(self.rect.y, ball_y) {
            self.step(direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Paddle {
        Paddle::new(
            30,
            100,
            10,
            60,
            4,
            Controller::InputDriven {
                up: KeyCode::Up,
                down: KeyCode::Down,
            },
        )
    }

    fn tracker(y: i32) -> Paddle {
        Paddle::new(600, y, 10, 60, 4, Controller::BallTracking)
    }

    #[test]
    fn test_moves_are_unclamped() {
        let mut paddle = player();
        paddle.move_up(150);
        assert_eq!(paddle.rect.y, -50);
        paddle.move_down(7);
        assert_eq!(paddle.rect.y, -43);
        paddle.set_y(25);
        assert_eq!(paddle.rect.y, 25);
        // Size never changes
        assert_eq!((paddle.rect.w, paddle.rect.h), (10, 60));
    }

    #[test]
    fn test_trigger_keys_move_by_speed() {
        let mut paddle = player();
        paddle.apply_key(KeyCode::Up);
        assert_eq!(paddle.rect.y, 96);
        paddle.apply_key(KeyCode::Down);
        paddle.apply_key(KeyCode::Down);
        assert_eq!(paddle.rect.y, 104);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut paddle = player();
        paddle.apply_key(KeyCode::Char('w'));
        paddle.apply_key(KeyCode::Enter);
        assert_eq!(paddle.rect.y, 100);

        // Trackers never react to keys
        let mut ai = tracker(100);
        ai.apply_key(KeyCode::Up);
        assert_eq!(ai.rect.y, 100);
    }

    #[test]
    fn test_tracker_steps_toward_ball() {
        let mut ai = tracker(30);
        ai.track(235);
        assert_eq!(ai.rect.y, 34);

        let mut ai = tracker(200);
        ai.track(100);
        assert_eq!(ai.rect.y, 196);
    }

    #[test]
    fn test_tracker_idle_when_level() {
        let mut ai = tracker(120);
        ai.track(120);
        ai.track(120);
        assert_eq!(ai.rect.y, 120);
    }

    #[test]
    fn test_tracker_can_overshoot() {
        // Fixed step goes past a target closer than `speed`
        let mut ai = tracker(100);
        ai.track(102);
        assert_eq!(ai.rect.y, 104);
        ai.track(102);
        assert_eq!(ai.rect.y, 100);
    }

    #[test]
    fn test_input_driven_ignores_tracking() {
        let mut paddle = player();
        paddle.track(400);
        assert_eq!(paddle.rect.y, 100);
    }

    #[test]
    fn test_collides_delegates_to_overlap() {
        let paddle = player();
        assert!(paddle.collides(&Rect::new(40, 160, 10, 10)));
        assert!(!paddle.collides(&Rect::new(41, 160, 10, 10)));
    }
}
