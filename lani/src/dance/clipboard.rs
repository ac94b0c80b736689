use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::GUI;

use super::{DanceBehavior, DanceContext};
use crate::gesture::GestureClass;
use crate::host::Host;

/// Clipboard key: tap to paste, hold to copy (cut with shift), double tap to accept a
/// completion (enter with shift)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClipboardDance;

impl ClipboardDance {
    fn chord(class: GestureClass, shifted: bool) -> Option<KeyChord> {
        match (class, shifted) {
            (GestureClass::SingleTap, _) => Some(KeyChord::new(HidKeyCode::V, GUI)),
            (GestureClass::SingleHold, false) => Some(KeyChord::new(HidKeyCode::C, GUI)),
            (GestureClass::SingleHold, true) => Some(KeyChord::new(HidKeyCode::X, GUI)),
            (GestureClass::DoubleTap, false) => Some(KeyChord::key(HidKeyCode::Right)),
            (GestureClass::DoubleTap, true) => Some(KeyChord::key(HidKeyCode::Enter)),
            _ => None,
        }
    }
}

impl DanceBehavior for ClipboardDance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        if let Some(chord) = Self::chord(class, ctx.shift_held()) {
            ctx.host.register(chord);
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        // Shift may have changed since resolve, release both variants
        let shifted = ctx.shift_held();
        for variant in [shifted, !shifted] {
            if let Some(chord) = Self::chord(class, variant) {
                ctx.host.unregister(chord);
            }
        }
    }
}
