use lani_types::layer::LayerId;

use super::{DanceBehavior, DanceContext};
use crate::gesture::GestureClass;
use crate::host::Host;

/// Layer key: tap for a one shot layer, hold for a momentary layer, double tap to lock
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerDance {
    pub layer: LayerId,
}

impl LayerDance {
    pub const fn new(layer: LayerId) -> Self {
        Self { layer }
    }
}

impl DanceBehavior for LayerDance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        match class {
            // Armed on release, once the key is up
            GestureClass::SingleTap => {}
            GestureClass::SingleHold => ctx.layers.hold_layer(self.layer),
            GestureClass::DoubleTap => ctx.layers.toggle_lock(self.layer),
            GestureClass::None | GestureClass::Unknown => {}
            _ => ctx.layers.reset_one_shot(),
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        match class {
            GestureClass::SingleTap => ctx.layers.arm_one_shot(self.layer, ctx.now),
            GestureClass::SingleHold => ctx.layers.release_held_layer(self.layer),
            _ => {}
        }
    }
}
