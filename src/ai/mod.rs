// AI module for the computer-controlled paddle

pub mod reflex_bot;
