//! System keyboard backend.
//!
//! Typing and key taps go through enigo; the blocking trigger wait uses a
//! global rdev listener so the trigger is seen no matter which window has
//! focus.

use std::sync::mpsc;
use std::thread;

use enigo::{Direction, Enigo, Keyboard as EnigoKeyboard, Settings};
use rdev::EventType;

use super::{Key, Keyboard};
use crate::error::{Error, Result};

/// Keyboard that drives real system input.
pub struct SystemKeyboard {
    enigo: Enigo,
}

impl SystemKeyboard {
    /// Creates the backend, connecting to the platform input facility.
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| Error::Input(format!("failed to create keyboard backend: {}", e)))?;
        Ok(SystemKeyboard { enigo })
    }

    fn press(&mut self, key: Key, direction: Direction) -> Result<()> {
        self.enigo
            .key(to_enigo(key), direction)
            .map_err(|e| Error::Input(e.to_string()))
    }
}

impl Keyboard for SystemKeyboard {
    fn wait_for(&mut self, key: Key) -> Result<()> {
        let target = to_rdev(key)?;
        let (tx, rx) = mpsc::channel();

        // rdev listeners cannot be stopped once started; the thread stays
        // parked in listen() for the rest of the process.
        thread::spawn(move || {
            let seen = tx.clone();
            if let Err(e) = rdev::listen(move |event| {
                if let EventType::KeyPress(pressed) = event.event_type {
                    if pressed == target {
                        let _ = seen.send(Ok(()));
                    }
                }
            }) {
                let _ = tx.send(Err(Error::Input(format!("key listener failed: {:?}", e))));
            }
        });

        rx.recv()
            .map_err(|_| Error::Input("key listener stopped before the trigger".to_string()))?
    }

    fn type_text(&mut self, text: &str) -> Result<()> {
        self.enigo
            .text(text)
            .map_err(|e| Error::Input(e.to_string()))
    }

    fn tap(&mut self, key: Key) -> Result<()> {
        self.press(key, Direction::Click)
    }

    fn tap_combo(&mut self, combo: &[Key]) -> Result<()> {
        let (last, held) = combo
            .split_last()
            .ok_or_else(|| Error::Input("empty key combination".to_string()))?;
        for key in held {
            self.press(*key, Direction::Press)?;
        }
        self.press(*last, Direction::Click)?;
        for key in held.iter().rev() {
            self.press(*key, Direction::Release)?;
        }
        Ok(())
    }
}

fn to_enigo(key: Key) -> enigo::Key {
    match key {
        Key::Enter => enigo::Key::Return,
        Key::Backspace => enigo::Key::Backspace,
        Key::Escape => enigo::Key::Escape,
        Key::Space => enigo::Key::Space,
        Key::Tab => enigo::Key::Tab,
        Key::Control => enigo::Key::Control,
        Key::Alt => enigo::Key::Alt,
        Key::Shift => enigo::Key::Shift,
        Key::Char(c) => enigo::Key::Unicode(c),
    }
}

fn to_rdev(key: Key) -> Result<rdev::Key> {
    match key {
        Key::Enter => Ok(rdev::Key::Return),
        Key::Backspace => Ok(rdev::Key::Backspace),
        Key::Escape => Ok(rdev::Key::Escape),
        Key::Space => Ok(rdev::Key::Space),
        Key::Tab => Ok(rdev::Key::Tab),
        Key::Control => Ok(rdev::Key::ControlLeft),
        Key::Alt => Ok(rdev::Key::Alt),
        Key::Shift => Ok(rdev::Key::ShiftLeft),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'a' => Ok(rdev::Key::KeyA),
            'b' => Ok(rdev::Key::KeyB),
            'c' => Ok(rdev::Key::KeyC),
            'd' => Ok(rdev::Key::KeyD),
            'e' => Ok(rdev::Key::KeyE),
            'f' => Ok(rdev::Key::KeyF),
            'g' => Ok(rdev::Key::KeyG),
            'h' => Ok(rdev::Key::KeyH),
            'i' => Ok(rdev::Key::KeyI),
            'j' => Ok(rdev::Key::KeyJ),
            'k' => Ok(rdev::Key::KeyK),
            'l' => Ok(rdev::Key::KeyL),
            'm' => Ok(rdev::Key::KeyM),
            'n' => Ok(rdev::Key::KeyN),
            'o' => Ok(rdev::Key::KeyO),
            'p' => Ok(rdev::Key::KeyP),
            'q' => Ok(rdev::Key::KeyQ),
            'r' => Ok(rdev::Key::KeyR),
            's' => Ok(rdev::Key::KeyS),
            't' => Ok(rdev::Key::KeyT),
            'u' => Ok(rdev::Key::KeyU),
            'v' => Ok(rdev::Key::KeyV),
            'w' => Ok(rdev::Key::KeyW),
            'x' => Ok(rdev::Key::KeyX),
            'y' => Ok(rdev::Key::KeyY),
            'z' => Ok(rdev::Key::KeyZ),
            '0' => Ok(rdev::Key::Num0),
            '1' => Ok(rdev::Key::Num1),
            '2' => Ok(rdev::Key::Num2),
            '3' => Ok(rdev::Key::Num3),
            '4' => Ok(rdev::Key::Num4),
            '5' => Ok(rdev::Key::Num5),
            '6' => Ok(rdev::Key::Num6),
            '7' => Ok(rdev::Key::Num7),
            '8' => Ok(rdev::Key::Num8),
            '9' => Ok(rdev::Key::Num9),
            other => Err(Error::UnknownKey(other.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdev_mapping() {
        assert_eq!(to_rdev(Key::Enter).unwrap(), rdev::Key::Return);
        assert_eq!(to_rdev(Key::Char('S')).unwrap(), rdev::Key::KeyS);
        assert!(to_rdev(Key::Char('é')).is_err());
    }
}
