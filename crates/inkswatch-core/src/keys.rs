//! Toolkit-independent key presses understood by the picker.

use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl, Alt or Meta held: the press belongs to an app shortcut.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerKey {
    Tab,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Digit by physical position, so Shift+1 stays `Digit(1)` on any layout.
    Digit(u8),
    /// Lowercase ASCII letter.
    Letter(char),
}

/// One key-down inside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: PickerKey,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub const fn new(key: PickerKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with_shift(key: PickerKey) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }
}

/// Mnemonics of the default palette grid, by position (3 rows of 5).
pub const DEFAULT_PICKER_KEYS: [char; 15] = [
    'q', 'w', 'e', 'r', 't', //
    'a', 's', 'd', 'f', 'g', //
    'z', 'x', 'c', 'v', 'b',
];

/// Mnemonic for the swatch at `index`, if it has one.
pub fn picker_key(index: usize) -> Option<char> {
    DEFAULT_PICKER_KEYS.get(index).copied()
}

/// Grid position of a mnemonic.
pub fn picker_key_index(key: char) -> Option<usize> {
    DEFAULT_PICKER_KEYS.iter().position(|&k| k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_layout() {
        assert_eq!(picker_key(0), Some('q'));
        assert_eq!(picker_key(5), Some('a'));
        assert_eq!(picker_key(14), Some('b'));
        assert_eq!(picker_key(15), None);
        assert_eq!(picker_key_index('z'), Some(10));
        assert_eq!(picker_key_index('y'), None);
    }

    #[test]
    fn test_command_modifiers() {
        assert!(!Modifiers::SHIFT.has_command());
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert!(ctrl.has_command());
    }
}
