//! Keyboard replay of the missing words.
//!
//! The replay drives the target dictionary application's "add word" dialog
//! through simulated keystrokes. It blocks until a trigger key is pressed
//! (giving the operator time to focus the right input field), then types
//! each word, confirms it, fires the save hotkey, and clears the field for
//! the next word, with fixed pauses so the UI can keep up.
//!
//! This is best-effort, timing-based automation: there is no feedback loop,
//! no failure detection, and no retry. If the wrong window is focused the
//! keystrokes land there. Replaying the same list twice adds every word
//! twice.

mod system;

pub use system::SystemKeyboard;

use std::thread;
use std::time::Duration;

use crate::constants;
use crate::error::{Error, Result};

/// A key the replay can wait for, tap, or hold in a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Escape,
    Space,
    Tab,
    Control,
    Alt,
    Shift,
    /// A printable character key.
    Char(char),
}

impl Key {
    /// Parses a key name like `enter`, `esc`, or a single letter.
    pub fn parse(name: &str) -> Result<Key> {
        match name.trim().to_lowercase().as_str() {
            "enter" | "return" => Ok(Key::Enter),
            "backspace" => Ok(Key::Backspace),
            "escape" | "esc" => Ok(Key::Escape),
            "space" => Ok(Key::Space),
            "tab" => Ok(Key::Tab),
            "control" | "ctrl" => Ok(Key::Control),
            "alt" => Ok(Key::Alt),
            "shift" => Ok(Key::Shift),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => Ok(Key::Char(c)),
                    _ => Err(Error::UnknownKey(name.to_string())),
                }
            }
        }
    }

    /// Parses a combo spec like `ctrl+alt+s` into its keys, in order.
    pub fn parse_combo(spec: &str) -> Result<Vec<Key>> {
        spec.split('+').map(Key::parse).collect()
    }
}

/// Minimal keyboard capability the replay needs.
///
/// The system backend drives real input; tests substitute an implementation
/// that records calls instead.
pub trait Keyboard {
    /// Blocks until the given key is pressed.
    fn wait_for(&mut self, key: Key) -> Result<()>;

    /// Types the text into the focused application.
    fn type_text(&mut self, text: &str) -> Result<()>;

    /// Presses and releases a single key.
    fn tap(&mut self, key: Key) -> Result<()>;

    /// Presses a key combination: holds all but the last key, taps the last,
    /// releases in reverse order.
    fn tap_combo(&mut self, combo: &[Key]) -> Result<()>;
}

/// Order in which the missing words are replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayOrder {
    Ascending,
    /// Highest word first. The default, matching the tool's historical
    /// behavior of replaying the sorted difference back to front.
    #[default]
    Descending,
}

/// Keys, timings, and ordering for one replay run.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Key that releases the replay once the operator has focused the
    /// target input field.
    pub trigger: Key,
    /// Key that confirms a typed word.
    pub confirm: Key,
    /// Hotkey that saves the confirmed word.
    pub save_combo: Vec<Key>,
    /// Key that clears the input field before the next word.
    pub clear: Key,
    /// Pause after typing a word.
    pub type_delay: Duration,
    /// Pause after the confirmation and save keystrokes.
    pub ui_delay: Duration,
    pub order: ReplayOrder,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            trigger: Key::Enter,
            confirm: Key::Enter,
            // ctrl+alt+s, the Youdao "save to wordbook" hotkey
            save_combo: vec![Key::Control, Key::Alt, Key::Char('s')],
            clear: Key::Backspace,
            type_delay: Duration::from_millis(constants::TYPE_DELAY_MS),
            ui_delay: Duration::from_millis(constants::UI_DELAY_MS),
            order: ReplayOrder::default(),
        }
    }
}

/// Replays the words into the focused application.
///
/// Blocks on the trigger key first. For each word: type it, pause, confirm,
/// pause, save, pause, clear the field. Runs to completion over the whole
/// list; there is no cancellation once started.
pub fn replay<K: Keyboard>(keyboard: &mut K, words: &[String], config: &ReplayConfig) -> Result<()> {
    keyboard.wait_for(config.trigger)?;

    let ordered: Box<dyn Iterator<Item = &String>> = match config.order {
        ReplayOrder::Ascending => Box::new(words.iter()),
        ReplayOrder::Descending => Box::new(words.iter().rev()),
    };

    for word in ordered {
        keyboard.type_text(word)?;
        thread::sleep(config.type_delay);
        keyboard.tap(config.confirm)?;
        thread::sleep(config.ui_delay);
        keyboard.tap_combo(&config.save_combo)?;
        thread::sleep(config.ui_delay);
        keyboard.tap(config.clear)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call instead of driving real input.
    #[derive(Default)]
    struct ScriptedKeyboard {
        calls: Vec<String>,
    }

    impl Keyboard for ScriptedKeyboard {
        fn wait_for(&mut self, key: Key) -> Result<()> {
            self.calls.push(format!("wait {:?}", key));
            Ok(())
        }

        fn type_text(&mut self, text: &str) -> Result<()> {
            self.calls.push(format!("type {}", text));
            Ok(())
        }

        fn tap(&mut self, key: Key) -> Result<()> {
            self.calls.push(format!("tap {:?}", key));
            Ok(())
        }

        fn tap_combo(&mut self, combo: &[Key]) -> Result<()> {
            self.calls.push(format!("combo {:?}", combo));
            Ok(())
        }
    }

    fn zero_delay_config(order: ReplayOrder) -> ReplayConfig {
        ReplayConfig {
            type_delay: Duration::ZERO,
            ui_delay: Duration::ZERO,
            order,
            ..ReplayConfig::default()
        }
    }

    #[test]
    fn test_replay_sequence_per_word() {
        let mut keyboard = ScriptedKeyboard::default();
        let words = vec!["apple".to_string()];
        replay(&mut keyboard, &words, &zero_delay_config(ReplayOrder::Ascending)).unwrap();
        assert_eq!(
            keyboard.calls,
            vec![
                "wait Enter",
                "type apple",
                "tap Enter",
                "combo [Control, Alt, Char('s')]",
                "tap Backspace",
            ]
        );
    }

    #[test]
    fn test_replay_descending_by_default() {
        let mut keyboard = ScriptedKeyboard::default();
        let words = vec!["a".to_string(), "b".to_string()];
        let config = ReplayConfig {
            type_delay: Duration::ZERO,
            ui_delay: Duration::ZERO,
            ..ReplayConfig::default()
        };
        replay(&mut keyboard, &words, &config).unwrap();
        let typed: Vec<_> = keyboard
            .calls
            .iter()
            .filter(|c| c.starts_with("type "))
            .collect();
        assert_eq!(typed, vec!["type b", "type a"]);
    }

    #[test]
    fn test_replay_ascending() {
        let mut keyboard = ScriptedKeyboard::default();
        let words = vec!["a".to_string(), "b".to_string()];
        replay(&mut keyboard, &words, &zero_delay_config(ReplayOrder::Ascending)).unwrap();
        let typed: Vec<_> = keyboard
            .calls
            .iter()
            .filter(|c| c.starts_with("type "))
            .collect();
        assert_eq!(typed, vec!["type a", "type b"]);
    }

    #[test]
    fn test_empty_list_only_waits() {
        let mut keyboard = ScriptedKeyboard::default();
        replay(&mut keyboard, &[], &zero_delay_config(ReplayOrder::Descending)).unwrap();
        assert_eq!(keyboard.calls, vec!["wait Enter"]);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(Key::parse("enter").unwrap(), Key::Enter);
        assert_eq!(Key::parse("Return").unwrap(), Key::Enter);
        assert_eq!(Key::parse("ESC").unwrap(), Key::Escape);
        assert_eq!(Key::parse("s").unwrap(), Key::Char('s'));
        assert!(Key::parse("hyperkey").is_err());
    }

    #[test]
    fn test_parse_combo() {
        assert_eq!(
            Key::parse_combo("ctrl+alt+s").unwrap(),
            vec![Key::Control, Key::Alt, Key::Char('s')]
        );
        assert!(Key::parse_combo("ctrl+nosuch").is_err());
    }
}
