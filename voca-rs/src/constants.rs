//! Default values for the transfer pipeline.
//!
//! Everything here is a documented default consumed by a config struct or a
//! CLI flag; no component reads these ambiently.

/// Element name that wraps a single entry in a Bing Dict export.
pub const BING_UNIT: &str = "WordUnit";

/// Child element of a Bing word unit holding the term text.
pub const BING_PROPERTY: &str = "HeadWord";

/// Element name that wraps a single entry in a Youdao Dict export.
pub const YOUDAO_UNIT: &str = "item";

/// Child element of a Youdao item holding the term text.
pub const YOUDAO_PROPERTY: &str = "word";

/// Default Bing export filename (Bing saves its vocabulary as `1000`).
pub const DEFAULT_BING_FILE: &str = "1000";

/// Default Youdao export filename.
pub const DEFAULT_YOUDAO_FILE: &str = "youdao.xml";

/// Default output filename for the written word list.
pub const DEFAULT_WORDLIST_FILE: &str = "wordlist";

/// Key that releases the replay once the target input field is focused.
pub const DEFAULT_TRIGGER: &str = "enter";

/// Hotkey that saves the typed word in the target application.
pub const SAVE_HOTKEY: &str = "ctrl+alt+s";

/// Pause after typing a word, before confirming it (milliseconds).
pub const TYPE_DELAY_MS: u64 = 100;

/// Pause after a confirmation or save keystroke, while the target
/// application's UI catches up (milliseconds).
pub const UI_DELAY_MS: u64 = 400;
