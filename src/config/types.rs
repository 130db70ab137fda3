// Reflex Pong configuration types
// Defaults reproduce the classic 640x480 layout

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle controls
    pub paddle_up: String,
    pub paddle_down: String,

    // Esc and Ctrl+C always quit as well
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: "Up".to_string(),
            paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
        }
    }
}

/// How key input turns into paddle movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSampling {
    /// One step per key press or auto-repeat event
    #[default]
    PerEvent,
    /// One step per tick while the key is held (needs release events)
    PerTick,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub sampling: InputSampling,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    // Playfield size in field units
    pub width: i32,
    pub height: i32,

    // Gap between the screen edge and each border
    pub border_padding: i32,
    pub border_thickness: i32,

    // Paddle distance from the side edges (also the starting y)
    pub paddle_margin: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            border_padding: 15,
            border_thickness: 10,
            paddle_margin: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Paddle step per move, shared by player and AI
    pub paddle_speed: i32,

    // Ball base step per tick on each axis
    pub ball_speed: i32,

    pub paddle_width: i32,
    pub paddle_height: i32,
    pub ball_size: i32,

    // Momentum cap and how many paddle hits earn one point of it
    pub max_momentum: i32,
    pub hits_per_momentum: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            paddle_speed: 4,
            ball_speed: 4,
            paddle_width: 10,
            paddle_height: 60,
            ball_size: 10,
            max_momentum: 5,
            hits_per_momentum: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Fixed sleep at the end of every frame
    pub frame_delay_ms: u64,

    // RGB values 0-255
    pub foreground_color: [u8; 3],
    pub background_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 10,
            foreground_color: [255, 255, 255],
            background_color: [0, 0, 0],
        }
    }
}
