//! Key binding primitives.
//!
//! A [`Binding`] ties one or more physical key presses to a logical action
//! and carries the help text shown in footer hints. Bindings are matched
//! against the runtime's [`KeyMsg`] events; matching is the only thing they
//! do at runtime, so they are cheap to clone and safe to share.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single physical key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// The key code reported by the terminal.
    pub code: KeyCode,
    /// Modifier keys held down with it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for Key {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        KeyCode::Char(c).into()
    }
}

/// Help metadata for a binding: the key column and its description.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"scroll up"`.
    pub desc: String,
}

/// A set of keys bound to one logical action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<Key>,
    help: Help,
}

impl Binding {
    /// Creates a binding for the given keys.
    ///
    /// Accepts anything convertible to [`Key`], so plain key codes, chars
    /// and `(code, modifiers)` pairs all work:
    ///
    /// ```rust
    /// use termsite::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
    /// let quit = Binding::new(vec![
    ///     (KeyCode::Char('q'), KeyModifiers::NONE),
    ///     (KeyCode::Char('c'), KeyModifiers::CONTROL),
    /// ]);
    /// # let _ = (up, quit);
    /// ```
    pub fn new<K: Into<Key>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the keys this binding listens for.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the binding's help metadata.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether the key event matches any of the bound keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let binding = Binding::new(vec![KeyCode::Char('j'), KeyCode::Down]);
        assert!(binding.matches(&key_msg(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(binding.matches(&key_msg(KeyCode::Down, KeyModifiers::NONE)));
        assert!(!binding.matches(&key_msg(KeyCode::Char('k'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding = Binding::new(vec![(KeyCode::Char('d'), KeyModifiers::CONTROL)]);
        assert!(binding.matches(&key_msg(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        // A bare 'd' is a different key press.
        assert!(!binding.matches(&key_msg(KeyCode::Char('d'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_round_trip() {
        let binding = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
        assert_eq!(binding.help().key, "q");
        assert_eq!(binding.help().desc, "quit");
    }
}
