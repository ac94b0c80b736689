//! Layer arbitration.
//!
//! The keymap is single-overlay: at most one non-default layer is visible at a time.
//! A layer can be on top of the default layer for three reasons, checked in this order:
//!
//! 1. held: a gesture key is held down, the layer is on until it's released
//! 2. locked: toggled on by a double tap, on until toggled off again
//! 3. one shot: armed by a single tap, cleared by the next key press or a timeout
//!
//! Every mutating operation leaves at most one of them set. A newly requested layer
//! always replaces the previous overlay instead of stacking on it.

use embassy_time::{Duration, Instant};
use lani_types::layer::LayerId;

use crate::config::OneShotConfig;

/// An armed one shot layer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShotLayer {
    pub layer: LayerId,
    /// The layer is cleared if no key consumes it before this instant
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerArbiter {
    held: Option<LayerId>,
    locked: Option<LayerId>,
    one_shot: Option<OneShotLayer>,
    default_layer: LayerId,
    one_shot_timeout: Duration,
}

impl Default for LayerArbiter {
    fn default() -> Self {
        Self::new(OneShotConfig::default())
    }
}

impl LayerArbiter {
    pub fn new(config: OneShotConfig) -> Self {
        Self {
            held: None,
            locked: None,
            one_shot: None,
            default_layer: LayerId::default(),
            one_shot_timeout: config.timeout,
        }
    }

    /// The layer used for key lookup
    pub fn effective_layer(&self) -> LayerId {
        self.held
            .or(self.locked)
            .or(self.one_shot.map(|o| o.layer))
            .unwrap_or(self.default_layer)
    }

    pub fn default_layer(&self) -> LayerId {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer: LayerId) {
        debug!("Set default layer: {:?}", layer);
        self.default_layer = layer;
    }

    pub fn held_layer(&self) -> Option<LayerId> {
        self.held
    }

    pub fn locked_layer(&self) -> Option<LayerId> {
        self.locked
    }

    pub fn one_shot_layer(&self) -> Option<LayerId> {
        self.one_shot.map(|o| o.layer)
    }

    pub fn one_shot_deadline(&self) -> Option<Instant> {
        self.one_shot.map(|o| o.deadline)
    }

    /// Whether `layer` is on top of the default layer for any reason
    pub fn is_active(&self, layer: LayerId) -> bool {
        self.held == Some(layer) || self.locked == Some(layer) || self.one_shot_layer() == Some(layer)
    }

    /// Drop every overlay, only the default layer stays
    pub fn clear(&mut self) {
        self.held = None;
        self.locked = None;
        self.one_shot = None;
    }

    /// Momentarily activate `layer`, replacing any lock or pending one shot
    pub fn hold_layer(&mut self, layer: LayerId) {
        self.clear();
        self.held = Some(layer);
        debug!("Hold layer {:?}", layer);
    }

    /// Undo [`hold_layer`](Self::hold_layer), if `layer` is still the held one
    pub fn release_held_layer(&mut self, layer: LayerId) {
        if self.held == Some(layer) {
            self.held = None;
            debug!("Release held layer {:?}", layer);
        }
        self.normalize();
    }

    /// Lock `layer` on, or unlock it if it's already the locked layer.
    ///
    /// A pending one shot is dropped first, so the same key can tap into a one shot
    /// and then double tap into a lock.
    pub fn toggle_lock(&mut self, layer: LayerId) {
        self.one_shot = None;
        self.held = None;
        if self.locked == Some(layer) {
            self.locked = None;
            debug!("Unlock layer {:?}", layer);
        } else {
            self.locked = Some(layer);
            debug!("Lock layer {:?}", layer);
        }
    }

    /// Single tap policy: arm `layer` as a one shot.
    ///
    /// When `layer` is already on through a lock or a one shot, the tap turns every
    /// overlay off instead.
    pub fn arm_one_shot(&mut self, layer: LayerId, now: Instant) {
        if self.locked == Some(layer) || self.one_shot_layer() == Some(layer) {
            self.clear();
            debug!("Single tap on active layer {:?}, clear all layers", layer);
            return;
        }
        self.clear();
        self.one_shot = Some(OneShotLayer {
            layer,
            deadline: now + self.one_shot_timeout,
        });
        debug!("Arm one shot layer {:?}", layer);
    }

    /// Drop a pending one shot without touching the other overlays
    pub fn reset_one_shot(&mut self) {
        if let Some(o) = self.one_shot.take() {
            debug!("Reset one shot layer {:?}", o.layer);
        }
    }

    /// A qualifying key was pressed on the one shot layer, clear it
    pub fn consume_one_shot(&mut self) -> Option<LayerId> {
        let layer = self.one_shot.take().map(|o| o.layer);
        if let Some(layer) = layer {
            debug!("One shot layer {:?} consumed", layer);
        }
        layer
    }

    /// Clear the one shot layer if its deadline passed. Returns `true` if it expired.
    pub fn expire_one_shot(&mut self, now: Instant) -> bool {
        match self.one_shot {
            Some(o) if now >= o.deadline => {
                debug!("One shot layer {:?} timeout", o.layer);
                self.one_shot = None;
                true
            }
            _ => false,
        }
    }

    /// Keep only the highest priority overlay
    fn normalize(&mut self) {
        if self.held.is_some() {
            self.locked = None;
            self.one_shot = None;
        } else if self.locked.is_some() {
            self.one_shot = None;
        }
    }

    /// Number of overlays currently set, never more than 1
    pub(crate) fn overlay_count(&self) -> usize {
        self.held.is_some() as usize + self.locked.is_some() as usize + self.one_shot.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arbiter() -> LayerArbiter {
        LayerArbiter::new(OneShotConfig {
            timeout: Duration::from_millis(200),
        })
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_default_state() {
        let layers = arbiter();
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
        assert_eq!(layers.overlay_count(), 0);
    }

    #[test]
    fn test_hold_and_release() {
        let mut layers = arbiter();
        layers.hold_layer(LayerId::Nav);
        assert_eq!(layers.effective_layer(), LayerId::Nav);
        // Releasing another layer is a no-op
        layers.release_held_layer(LayerId::Sym);
        assert_eq!(layers.effective_layer(), LayerId::Nav);
        layers.release_held_layer(LayerId::Nav);
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
    }

    #[test]
    fn test_hold_replaces_lock_and_one_shot() {
        let mut layers = arbiter();
        layers.toggle_lock(LayerId::Sym);
        layers.hold_layer(LayerId::Nav);
        assert_eq!(layers.locked_layer(), None);
        assert_eq!(layers.held_layer(), Some(LayerId::Nav));

        layers.release_held_layer(LayerId::Nav);
        layers.arm_one_shot(LayerId::Daily, at(0));
        layers.hold_layer(LayerId::Function);
        assert_eq!(layers.one_shot_layer(), None);
        assert_eq!(layers.effective_layer(), LayerId::Function);
    }

    #[test]
    fn test_toggle_lock_twice_returns_to_base() {
        let mut layers = arbiter();
        layers.toggle_lock(LayerId::Nav);
        assert_eq!(layers.locked_layer(), Some(LayerId::Nav));
        assert_eq!(layers.effective_layer(), LayerId::Nav);
        layers.toggle_lock(LayerId::Nav);
        assert_eq!(layers.locked_layer(), None);
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
    }

    #[test]
    fn test_lock_replaces_previous_lock() {
        let mut layers = arbiter();
        layers.toggle_lock(LayerId::Nav);
        layers.toggle_lock(LayerId::Sym);
        assert_eq!(layers.locked_layer(), Some(LayerId::Sym));
    }

    #[test]
    fn test_lock_clears_one_shot_first() {
        let mut layers = arbiter();
        layers.arm_one_shot(LayerId::Nav, at(0));
        layers.toggle_lock(LayerId::Nav);
        assert_eq!(layers.one_shot_layer(), None);
        assert_eq!(layers.locked_layer(), Some(LayerId::Nav));
    }

    #[test]
    fn test_one_shot_clears_lock_of_other_layer() {
        let mut layers = arbiter();
        layers.toggle_lock(LayerId::Sym);
        layers.arm_one_shot(LayerId::Nav, at(0));
        assert_eq!(layers.locked_layer(), None);
        assert_eq!(layers.one_shot_layer(), Some(LayerId::Nav));
    }

    #[test]
    fn test_single_tap_on_active_layer_clears_all() {
        let mut layers = arbiter();
        layers.toggle_lock(LayerId::Nav);
        layers.arm_one_shot(LayerId::Nav, at(0));
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
        assert_eq!(layers.overlay_count(), 0);

        layers.arm_one_shot(LayerId::Sym, at(0));
        layers.arm_one_shot(LayerId::Sym, at(10));
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
    }

    #[test]
    fn test_one_shot_consume_and_expire() {
        let mut layers = arbiter();
        layers.arm_one_shot(LayerId::Nav, at(100));
        assert_eq!(layers.one_shot_deadline(), Some(at(300)));
        assert!(!layers.expire_one_shot(at(299)));
        assert_eq!(layers.consume_one_shot(), Some(LayerId::Nav));
        assert_eq!(layers.consume_one_shot(), None);

        layers.arm_one_shot(LayerId::Nav, at(100));
        assert!(layers.expire_one_shot(at(300)));
        assert_eq!(layers.effective_layer(), LayerId::Qwerty);
    }

    #[test]
    fn test_default_layer_is_fallback() {
        let mut layers = arbiter();
        layers.set_default_layer(LayerId::Daily);
        assert_eq!(layers.effective_layer(), LayerId::Daily);
        layers.hold_layer(LayerId::Nav);
        assert_eq!(layers.effective_layer(), LayerId::Nav);
        layers.clear();
        assert_eq!(layers.effective_layer(), LayerId::Daily);
    }

    #[test]
    fn test_single_overlay_after_any_sequence() {
        let mut layers = arbiter();
        let all = [LayerId::Nav, LayerId::Sym, LayerId::Function, LayerId::Daily];
        for (i, &a) in all.iter().enumerate() {
            for &b in all.iter() {
                layers.hold_layer(a);
                assert!(layers.overlay_count() <= 1);
                layers.toggle_lock(b);
                assert!(layers.overlay_count() <= 1);
                layers.arm_one_shot(a, at(i as u64));
                assert!(layers.overlay_count() <= 1);
                layers.release_held_layer(b);
                assert!(layers.overlay_count() <= 1);
                layers.toggle_lock(a);
                assert!(layers.overlay_count() <= 1);
            }
        }
    }
}
