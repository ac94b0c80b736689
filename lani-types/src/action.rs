//! What a key position produces.
//!
//! - [`Action`] - A single operation sent to the host
//! - [`KeyAction`] - The behavior bound to a key position in a layer

use crate::keycode::{HidKeyCode, KeyChord};
use crate::modifier::ModifierCombination;

/// Identifier of a gesture (tap dance) key.
///
/// The set of dances is fixed, each is bound to a behavior when the keyboard is built.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DanceId {
    CapsWord = 0,
    Clipboard = 1,
    Daily = 2,
    Nav = 3,
    Function = 4,
    Symbol = 5,
    QuickAccess = 6,
    Braces = 7,
}

/// Fixed strings typed on key press
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextMacro {
    /// `=>`
    Arrow,
    /// `...`
    Ellipsis,
}

impl TextMacro {
    pub const fn text(self) -> &'static str {
        match self {
            TextMacro::Arrow => "=>",
            TextMacro::Ellipsis => "...",
        }
    }
}

/// A single operation that is sent to the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A key, optionally with chord modifiers, e.g. `G(KC_Z)`
    Key(KeyChord),
    /// Modifier keys held while the position is held
    Modifier(ModifierCombination),
}

impl Action {
    pub const fn key(key: HidKeyCode) -> Self {
        Action::Key(KeyChord::key(key))
    }
}

/// The behavior bound to a key position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    #[default]
    No,
    /// Use the action of the default layer
    Transparent,
    /// A plain action
    Single(Action),
    /// A gesture key
    TapDance(DanceId),
    /// A string typed on press
    Text(TextMacro),
    /// Tap to paste, hold to copy, hold with GUI to cut
    CopyPaste,
}

impl KeyAction {
    /// Modifier-only positions never consume a one-shot layer or end caps word
    pub fn is_modifier(&self) -> bool {
        match self {
            KeyAction::Single(Action::Modifier(_)) => true,
            KeyAction::Single(Action::Key(chord)) => chord.key.is_modifier(),
            _ => false,
        }
    }
}
