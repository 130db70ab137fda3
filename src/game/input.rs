use anyhow::anyhow;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::config::{InputSampling, KeyBindings};

/// Parse a key name from the config file.
///
/// Accepts named keys ("Up", "Esc", ...) case-insensitively or a single
/// character. Characters are stored lowercase so "W" and "w" bind the same key.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let trimmed = name.trim();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(normalize(code))
}

/// Fold character keys to lowercase so shifted presses still match
pub fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Resolved key bindings for the player paddle and quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub up: KeyCode,
    pub down: KeyCode,
    pub quit: KeyCode,
}

impl KeyMap {
    pub fn from_config(bindings: &KeyBindings) -> anyhow::Result<Self> {
        let resolve = |field: &str, value: &str| {
            parse_key(value).ok_or_else(|| anyhow!("unknown key {:?} for keybindings.{}", value, field))
        };

        Ok(Self {
            up: resolve("paddle_up", &bindings.paddle_up)?,
            down: resolve("paddle_down", &bindings.paddle_down)?,
            quit: resolve("quit", &bindings.quit)?,
        })
    }
}

/// Input gathered for one tick
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputFrame {
    pub quit: bool,
    /// Trigger presses for the player paddle, in arrival order
    pub keys: Vec<KeyCode>,
}

/// Turns terminal key events into per-tick paddle input
#[derive(Debug)]
pub struct InputSampler {
    keymap: KeyMap,
    sampling: InputSampling,
    up_held: bool,
    down_held: bool,
    // Pressed at some point in the current batch, even if already released
    up_tapped: bool,
    down_tapped: bool,
}

impl InputSampler {
    pub fn new(keymap: KeyMap, sampling: InputSampling) -> Self {
        Self {
            keymap,
            sampling,
            up_held: false,
            down_held: false,
            up_tapped: false,
            down_tapped: false,
        }
    }

    pub fn sampling(&self) -> InputSampling {
        self.sampling
    }

    pub fn keymap(&self) -> KeyMap {
        self.keymap
    }

    /// Drain every pending terminal event without blocking.
    pub fn poll(&mut self) -> io::Result<InputFrame> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            events.push(event::read()?);
        }
        Ok(self.process(events))
    }

    /// Fold a batch of events into this tick's input
    pub fn process(&mut self, events: impl IntoIterator<Item = Event>) -> InputFrame {
        let mut frame = InputFrame::default();
        self.up_tapped = false;
        self.down_tapped = false;

        for event in events {
            if let Event::Key(key) = event {
                self.handle_key(key, &mut frame);
            }
        }

        if self.sampling == InputSampling::PerTick {
            if self.up_held || self.up_tapped {
                frame.keys.push(self.keymap.up);
            }
            if self.down_held || self.down_tapped {
                frame.keys.push(self.keymap.down);
            }
        }

        frame
    }

    fn handle_key(&mut self, key: KeyEvent, frame: &mut InputFrame) {
        let code = normalize(key.code);
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        if key.kind == KeyEventKind::Press && is_quit(&key, code, self.keymap.quit) {
            frame.quit = true;
            return;
        }

        let is_trigger = code == self.keymap.up || code == self.keymap.down;
        if !is_trigger {
            return;
        }

        match self.sampling {
            InputSampling::PerEvent => {
                if pressed {
                    frame.keys.push(code);
                }
            }
            InputSampling::PerTick => {
                if code == self.keymap.up {
                    self.up_held = pressed;
                    self.up_tapped |= pressed;
                }
                if code == self.keymap.down {
                    self.down_held = pressed;
                    self.down_tapped |= pressed;
                }
            }
        }
    }
}

fn is_quit(key: &KeyEvent, code: KeyCode, quit: KeyCode) -> bool {
    code == quit
        || code == KeyCode::Esc
        || (code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keymap() -> KeyMap {
        KeyMap::from_config(&KeyBindings::default()).unwrap()
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    #[test]
    fn test_parse_named_and_char_keys() {
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("down"), Some(KeyCode::Down));
        assert_eq!(parse_key("ESC"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("W"), Some(KeyCode::Char('w')));
        assert_eq!(parse_key("w"), Some(KeyCode::Char('w')));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(parse_key("PageUp"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_bad_binding_names_the_field() {
        let bindings = KeyBindings {
            paddle_down: "Sideways".to_string(),
            ..KeyBindings::default()
        };
        let err = KeyMap::from_config(&bindings).unwrap_err();
        assert!(err.to_string().contains("keybindings.paddle_down"));
    }

    #[test]
    fn test_per_event_emits_each_press() {
        let mut sampler = InputSampler::new(keymap(), InputSampling::PerEvent);

        let frame = sampler.process(vec![
            press(KeyCode::Up),
            press(KeyCode::Char('x')),
            press(KeyCode::Up),
            press(KeyCode::Down),
        ]);

        assert!(!frame.quit);
        assert_eq!(frame.keys, vec![KeyCode::Up, KeyCode::Up, KeyCode::Down]);

        // Nothing pending, nothing moves
        assert!(sampler.process(vec![]).keys.is_empty());
    }

    #[test]
    fn test_per_tick_repeats_while_held() {
        let mut sampler = InputSampler::new(keymap(), InputSampling::PerTick);

        let frame = sampler.process(vec![press(KeyCode::Down), press(KeyCode::Down)]);
        assert_eq!(frame.keys, vec![KeyCode::Down]);

        // Still held with no new events
        assert_eq!(sampler.process(vec![]).keys, vec![KeyCode::Down]);

        let frame = sampler.process(vec![release(KeyCode::Down)]);
        assert!(frame.keys.is_empty());
    }

    #[test]
    fn test_per_tick_keeps_tap_within_batch() {
        let mut sampler = InputSampler::new(keymap(), InputSampling::PerTick);

        // Pressed and released between two ticks still moves once
        let frame = sampler.process(vec![press(KeyCode::Up), release(KeyCode::Up)]);
        assert_eq!(frame.keys, vec![KeyCode::Up]);

        assert!(sampler.process(vec![]).keys.is_empty());

        let frame = sampler.process(vec![
            press(KeyCode::Up),
            release(KeyCode::Up),
            press(KeyCode::Down),
        ]);
        assert_eq!(frame.keys, vec![KeyCode::Up, KeyCode::Down]);
        assert_eq!(sampler.process(vec![]).keys, vec![KeyCode::Down]);
    }

    #[test]
    fn test_quit_keys() {
        let mut sampler = InputSampler::new(keymap(), InputSampling::PerEvent);

        assert!(sampler.process(vec![press(KeyCode::Char('Q'))]).quit);
        assert!(sampler.process(vec![press(KeyCode::Esc)]).quit);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(sampler.process(vec![ctrl_c]).quit);

        assert!(!sampler.process(vec![press(KeyCode::Char('c'))]).quit);
    }

    #[test]
    fn test_character_bindings_ignore_shift() {
        let bindings = KeyBindings {
            paddle_up: "W".to_string(),
            paddle_down: "S".to_string(),
            ..KeyBindings::default()
        };
        let map = KeyMap::from_config(&bindings).unwrap();
        let mut sampler = InputSampler::new(map, InputSampling::PerEvent);

        let frame = sampler.process(vec![press(KeyCode::Char('W')), press(KeyCode::Char('s'))]);
        assert_eq!(frame.keys, vec![KeyCode::Char('w'), KeyCode::Char('s')]);
    }
}
