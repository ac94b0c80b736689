use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::{ALT, CTRL, GUI, HYPER, SHIFT};

use super::{DanceBehavior, DanceContext};
use crate::gesture::GestureClass;
use crate::host::Host;

/// Launcher and screenshot key
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuickAccessDance;

impl QuickAccessDance {
    fn chord(class: GestureClass) -> Option<KeyChord> {
        match class {
            // Mute
            GestureClass::SingleTap => Some(KeyChord::new(HidKeyCode::M, HYPER)),
            GestureClass::SingleHold => Some(KeyChord::modifiers(CTRL | ALT)),
            // Full screenshot
            GestureClass::DoubleTap => Some(KeyChord::new(HidKeyCode::Kc3, GUI | SHIFT)),
            // Screenshot toolbar
            GestureClass::TripleTap => Some(KeyChord::new(HidKeyCode::Kc5, GUI | SHIFT)),
            _ => None,
        }
    }
}

impl DanceBehavior for QuickAccessDance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        if let Some(chord) = Self::chord(class) {
            ctx.host.register(chord);
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        if let Some(chord) = Self::chord(class) {
            ctx.host.unregister(chord);
        }
    }
}
