pub mod ball;
pub mod border;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod simulation;
pub mod state;

pub use input::{InputFrame, InputSampler, KeyMap};
pub use paddle::{Controller, PaddleMove};
pub use simulation::tick;
pub use state::GameState;
