//! Tap dance keys.
//!
//! A dance key is bound to a [`Dance`] behavior. When the key's gesture window closes,
//! the gesture is classified and the behavior's [`resolve`](DanceBehavior::resolve)
//! runs. When the key is up again, [`release`](DanceBehavior::release) runs with the
//! same classification, so every effect started on resolve is stopped on release.

mod braces;
mod caps;
mod clipboard;
mod layer;
mod quick_access;

pub use braces::BracesDance;
pub use caps::CapsDance;
pub use clipboard::ClipboardDance;
pub use layer::LayerDance;
pub use quick_access::QuickAccessDance;

use embassy_time::Instant;
use heapless::Vec;
use lani_types::action::DanceId;
use lani_types::layer::LayerId;

use crate::MAX_DANCES;
use crate::caps_word::CapsWord;
use crate::error::ConfigError;
use crate::gesture::{GestureClass, TapObservation, classify};
use crate::host::Host;
use crate::layer::LayerArbiter;

/// What a dance behavior can act on
pub struct DanceContext<'a, H: Host> {
    pub host: &'a mut H,
    pub layers: &'a mut LayerArbiter,
    pub caps_word: &'a mut CapsWord,
    pub now: Instant,
}

impl<H: Host> DanceContext<'_, H> {
    /// Is either shift held on the host
    pub fn shift_held(&self) -> bool {
        self.host.modifiers().shift()
    }
}

pub trait DanceBehavior {
    /// Start the effect for `class`
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>);

    /// Stop the effect started by [`resolve`](Self::resolve) with the same `class`
    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>);
}

/// Every dance behavior of the keymap
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dance {
    Layer(LayerDance),
    Caps(CapsDance),
    Clipboard(ClipboardDance),
    QuickAccess(QuickAccessDance),
    Braces(BracesDance),
}

impl Dance {
    pub const fn layer(layer: LayerId) -> Self {
        Dance::Layer(LayerDance::new(layer))
    }

    /// The layer this dance switches to, if any
    pub fn target_layer(&self) -> Option<LayerId> {
        match self {
            Dance::Layer(d) => Some(d.layer),
            _ => None,
        }
    }
}

impl DanceBehavior for Dance {
    fn resolve<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        match self {
            Dance::Layer(d) => d.resolve(class, ctx),
            Dance::Caps(d) => d.resolve(class, ctx),
            Dance::Clipboard(d) => d.resolve(class, ctx),
            Dance::QuickAccess(d) => d.resolve(class, ctx),
            Dance::Braces(d) => d.resolve(class, ctx),
        }
    }

    fn release<H: Host>(&self, class: GestureClass, ctx: &mut DanceContext<'_, H>) {
        match self {
            Dance::Layer(d) => d.release(class, ctx),
            Dance::Caps(d) => d.release(class, ctx),
            Dance::Clipboard(d) => d.release(class, ctx),
            Dance::QuickAccess(d) => d.release(class, ctx),
            Dance::Braces(d) => d.release(class, ctx),
        }
    }
}

/// Per dance state kept between resolve and release
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceRuntimeState {
    /// Classification of the last resolved gesture, `None` once released
    pub last_class: GestureClass,
}

/// A dance bound to its behavior
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceSlot {
    pub id: DanceId,
    pub dance: Dance,
    pub state: DanceRuntimeState,
}

impl DanceSlot {
    pub fn new(id: DanceId, dance: Dance) -> Self {
        Self {
            id,
            dance,
            state: DanceRuntimeState::default(),
        }
    }

    /// The gesture window closed: classify it, remember the class and start the effect
    pub fn on_resolve<H: Host>(&mut self, observation: TapObservation, ctx: &mut DanceContext<'_, H>) {
        if self.state.last_class != GestureClass::None {
            // The previous gesture was never released, finish it first
            warn!("Dance {:?} resolved again before release", self.id);
            self.on_release(ctx);
        }
        let class = classify(observation);
        debug!("Dance {:?} resolved: {:?} -> {:?}", self.id, observation, class);
        self.state.last_class = class;
        self.dance.resolve(class, ctx);
    }

    /// The key is up: stop the effect of the last resolved gesture. No-op if nothing is resolved.
    pub fn on_release<H: Host>(&mut self, ctx: &mut DanceContext<'_, H>) {
        let class = core::mem::take(&mut self.state.last_class);
        if class == GestureClass::None {
            return;
        }
        debug!("Dance {:?} released: {:?}", self.id, class);
        self.dance.release(class, ctx);
    }
}

/// Dance behaviors, looked up by [`DanceId`]
#[derive(Debug, Clone, Default)]
pub struct DanceTable {
    slots: Vec<DanceSlot, MAX_DANCES>,
}

impl DanceTable {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// The dances of the lani keymap
    pub fn lani() -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for (id, dance) in [
            (DanceId::CapsWord, Dance::Caps(CapsDance)),
            (DanceId::Clipboard, Dance::Clipboard(ClipboardDance)),
            (DanceId::Daily, Dance::layer(LayerId::Daily)),
            (DanceId::Nav, Dance::layer(LayerId::Nav)),
            (DanceId::Function, Dance::layer(LayerId::Function)),
            (DanceId::Symbol, Dance::layer(LayerId::Sym)),
            (DanceId::QuickAccess, Dance::QuickAccess(QuickAccessDance)),
            (DanceId::Braces, Dance::Braces(BracesDance)),
        ] {
            table.bind(id, dance)?;
        }
        Ok(table)
    }

    /// Bind `dance` to `id`
    pub fn bind(&mut self, id: DanceId, dance: Dance) -> Result<(), ConfigError> {
        if self.get(id).is_some() {
            return Err(ConfigError::DuplicateDance(id));
        }
        self.slots
            .push(DanceSlot::new(id, dance))
            .map_err(|_| ConfigError::TooManyDances)
    }

    pub fn get(&self, id: DanceId) -> Option<&DanceSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: DanceId) -> Option<&mut DanceSlot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DanceSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lani_table() {
        let table = DanceTable::lani().unwrap();
        assert_eq!(table.len(), MAX_DANCES);
        assert_eq!(table.get(DanceId::Nav).and_then(|s| s.dance.target_layer()), Some(LayerId::Nav));
        assert_eq!(table.get(DanceId::Symbol).and_then(|s| s.dance.target_layer()), Some(LayerId::Sym));
        assert_eq!(table.get(DanceId::Braces).map(|s| s.dance), Some(Dance::Braces(BracesDance)));
    }

    #[test]
    fn test_bind_errors() {
        let mut table = DanceTable::new();
        assert!(table.bind(DanceId::Nav, Dance::layer(LayerId::Nav)).is_ok());
        assert_eq!(
            table.bind(DanceId::Nav, Dance::layer(LayerId::Sym)),
            Err(ConfigError::DuplicateDance(DanceId::Nav))
        );
        assert_eq!(
            DanceTable::lani().unwrap().bind(DanceId::Nav, Dance::Caps(CapsDance)),
            Err(ConfigError::DuplicateDance(DanceId::Nav))
        );
    }

    #[test]
    fn test_full_table_is_rejected() {
        let mut table = DanceTable::new();
        for _ in 0..MAX_DANCES {
            table.slots.push(DanceSlot::new(DanceId::Nav, Dance::Braces(BracesDance))).unwrap();
        }
        assert_eq!(
            table.bind(DanceId::Clipboard, Dance::Clipboard(ClipboardDance)),
            Err(ConfigError::TooManyDances)
        );
    }
}
