use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::HYPER;

use super::{DanceBehavior, DanceContext};
use crate::gesture::GestureClass;
use crate::host::Host;

/// Right side hyper, held by [`CapsDance`]
const RIGHT_HYPER: KeyChord = KeyChord::modifiers(HYPER.with_right(true));

/// Caps key: tap for caps word, hold for hyper, double tap for caps lock
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapsDance;

impl DanceBehavior for CapsDance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        let caps_lock = ctx.host.led_indicator().caps_lock();
        match class {
            GestureClass::SingleTap => {
                // Caps word replaces caps lock
                if caps_lock {
                    ctx.host.tap(KeyChord::key(HidKeyCode::CapsLock));
                }
                ctx.caps_word.toggle();
            }
            GestureClass::SingleHold => ctx.host.register(RIGHT_HYPER),
            GestureClass::DoubleTap => {
                ctx.caps_word.deactivate();
                if !caps_lock {
                    ctx.host.tap(KeyChord::key(HidKeyCode::CapsLock));
                }
            }
            _ => {}
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        if class == GestureClass::SingleHold {
            ctx.host.unregister(RIGHT_HYPER);
        }
    }
}

