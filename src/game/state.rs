use crate::config::{FieldConfig, PhysicsConfig};

use super::ball::{Ball, Field};
use super::border::Border;
use super::geometry::Rect;
use super::paddle::{Controller, Paddle};

/// Everything the loop simulates. Entities never reference each other;
/// the tick reads positions and applies collisions from outside.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub top_border: Border,
    pub bottom_border: Border,
    pub field: Field,
}

impl GameState {
    /// Lay out a fresh game. The left paddle uses `left_controller`; the right
    /// paddle always tracks the ball.
    pub fn new(field: &FieldConfig, physics: &PhysicsConfig, left_controller: Controller) -> Self {
        let extent = Field {
            width: field.width,
            height: field.height,
        };

        let player = Paddle::new(
            field.paddle_margin,
            field.paddle_margin,
            physics.paddle_width,
            physics.paddle_height,
            physics.paddle_speed,
            left_controller,
        );

        let opponent = Paddle::new(
            field.width - field.paddle_margin - physics.paddle_width,
            field.paddle_margin,
            physics.paddle_width,
            physics.paddle_height,
            physics.paddle_speed,
            Controller::BallTracking,
        );

        let ball = Ball::new(
            physics.ball_speed,
            physics.ball_size,
            physics.max_momentum,
            physics.hits_per_momentum,
            extent,
        );

        Self {
            player,
            opponent,
            ball,
            top_border: Border::top(field.width, field.border_padding, field.border_thickness),
            bottom_border: Border::bottom(
                field.width,
                field.height,
                field.border_padding,
                field.border_thickness,
            ),
            field: extent,
        }
    }

    /// Rectangles to fill this frame, back to front
    pub fn draw_list(&self) -> [Rect; 5] {
        [
            *self.top_border.rect(),
            *self.bottom_border.rect(),
            self.player.rect,
            self.opponent.rect,
            self.ball.rect,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_default_layout() {
        let state = GameState::new(
            &FieldConfig::default(),
            &PhysicsConfig::default(),
            Controller::InputDriven {
                up: KeyCode::Up,
                down: KeyCode::Down,
            },
        );

        assert_eq!(state.player.rect, Rect::new(30, 30, 10, 60));
        assert_eq!(state.opponent.rect, Rect::new(600, 30, 10, 60));
        assert_eq!(state.ball.rect, Rect::new(315, 235, 10, 10));
        assert_eq!(state.opponent.controller(), Controller::BallTracking);
        assert_eq!(state.draw_list().len(), 5);
    }
}
