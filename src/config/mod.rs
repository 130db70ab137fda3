// Configuration module for Reflex Pong
// Handles loading the game configuration from a TOML file

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{Config, DisplayConfig, FieldConfig, InputSampling, KeyBindings, PhysicsConfig};
