use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::{HidModifiers, SHIFT};

use super::{DanceBehavior, DanceContext};
use crate::gesture::GestureClass;
use crate::host::Host;

/// Bracket key: `(` `{` `[` by tap count, the closing bracket with shift held
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BracesDance;

impl BracesDance {
    /// (open, close) pair for the gesture
    fn pair(class: GestureClass) -> Option<(KeyChord, KeyChord)> {
        match class {
            GestureClass::SingleTap => Some((
                KeyChord::new(HidKeyCode::Kc9, SHIFT),
                KeyChord::new(HidKeyCode::Kc0, SHIFT),
            )),
            GestureClass::DoubleTap => Some((
                KeyChord::new(HidKeyCode::LeftBracket, SHIFT),
                KeyChord::new(HidKeyCode::RightBracket, SHIFT),
            )),
            GestureClass::TripleTap => Some((
                KeyChord::key(HidKeyCode::LeftBracket),
                KeyChord::key(HidKeyCode::RightBracket),
            )),
            _ => None,
        }
    }
}

impl DanceBehavior for BracesDance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        let Some((open, close)) = Self::pair(class) else {
            return;
        };
        let held_shift = ctx.host.modifiers() & HidModifiers::SHIFT;
        if held_shift.is_empty() {
            ctx.host.register(open);
        } else if class == GestureClass::TripleTap {
            // `]` is unshifted, lift the held shift around the tap
            ctx.host.unregister_modifiers(held_shift);
            ctx.host.tap(close);
            ctx.host.register_modifiers(held_shift);
        } else {
            ctx.host.register(close);
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        // Shift may have changed since resolve, release both members
        if let Some((open, close)) = Self::pair(class) {
            ctx.host.unregister(open);
            ctx.host.unregister(close);
        }
    }
}
