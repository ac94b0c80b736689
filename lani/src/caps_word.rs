//! Caps word: type one word in capitals without holding shift.

use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::SHIFT;

const UNDERSCORE: KeyChord = KeyChord::new(HidKeyCode::Minus, SHIFT);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapsWord {
    active: bool,
}

impl CapsWord {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        debug!("Caps word: {:?}", self.active);
    }

    pub fn deactivate(&mut self) {
        if self.active {
            debug!("Caps word off");
        }
        self.active = false;
    }

    /// Process a pressed chord before it's sent, returns the chord to send instead.
    ///
    /// Letters and `-` get shift added, digits, backspace, delete and `_` pass through.
    /// Modifier keys are ignored. Anything else ends the word and is sent unchanged.
    pub fn process(&mut self, chord: KeyChord) -> KeyChord {
        if !self.active || chord.key.is_modifier() {
            return chord;
        }
        if !chord.modifiers.is_empty() {
            if chord != UNDERSCORE {
                self.deactivate();
            }
            return chord;
        }
        if chord.key.is_caps_word_shifted_key() {
            KeyChord::new(chord.key, chord.modifiers | SHIFT)
        } else if chord.key.is_caps_word_continue_key() {
            chord
        } else {
            self.deactivate();
            chord
        }
    }
}

#[cfg(test)]
mod tests {
    use lani_types::modifier::CTRL;

    use super::*;

    fn active() -> CapsWord {
        let mut caps_word = CapsWord::default();
        caps_word.toggle();
        caps_word
    }

    #[test]
    fn test_inactive_passes_through() {
        let mut caps_word = CapsWord::default();
        assert_eq!(caps_word.process(HidKeyCode::A.into()), KeyChord::key(HidKeyCode::A));
    }

    #[test]
    fn test_letters_and_minus_shifted() {
        let mut caps_word = active();
        assert_eq!(caps_word.process(HidKeyCode::A.into()), KeyChord::new(HidKeyCode::A, SHIFT));
        assert_eq!(
            caps_word.process(HidKeyCode::Minus.into()),
            KeyChord::new(HidKeyCode::Minus, SHIFT)
        );
        assert!(caps_word.is_active());
    }

    #[test]
    fn test_continue_keys() {
        let mut caps_word = active();
        for key in [HidKeyCode::Kc1, HidKeyCode::Kc0, HidKeyCode::Backspace, HidKeyCode::Delete] {
            assert_eq!(caps_word.process(key.into()), KeyChord::key(key));
        }
        assert_eq!(caps_word.process(HidKeyCode::LShift.into()), KeyChord::key(HidKeyCode::LShift));
        assert!(caps_word.is_active());
    }

    #[test]
    fn test_word_break_ends_caps_word() {
        let mut caps_word = active();
        assert_eq!(caps_word.process(HidKeyCode::Space.into()), KeyChord::key(HidKeyCode::Space));
        assert!(!caps_word.is_active());
        assert_eq!(caps_word.process(HidKeyCode::B.into()), KeyChord::key(HidKeyCode::B));

        let mut caps_word = active();
        caps_word.process(KeyChord::new(HidKeyCode::C, CTRL));
        assert!(!caps_word.is_active());
    }

    #[test]
    fn test_shifted_symbols() {
        let mut caps_word = active();
        assert_eq!(caps_word.process(UNDERSCORE), UNDERSCORE);
        assert!(caps_word.is_active());
        // `(` is a shifted digit
        caps_word.process(KeyChord::new(HidKeyCode::Kc9, SHIFT));
        assert!(!caps_word.is_active());
    }
}
