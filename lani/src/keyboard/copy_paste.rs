use embassy_time::{Duration, Instant};
use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::modifier::GUI;

use crate::config::CopyPasteConfig;
use crate::host::Host;

/// Copy/paste key, decided by how long it's held.
///
/// Released within the threshold it pastes. Held longer it copies, or cuts when GUI is
/// held at release.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CopyPasteKey {
    pressed_at: Option<Instant>,
    hold_threshold: Duration,
}

impl CopyPasteKey {
    pub fn new(config: CopyPasteConfig) -> Self {
        Self {
            pressed_at: None,
            hold_threshold: config.hold_threshold,
        }
    }

    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    pub fn release<H: Host>(&mut self, host: &mut H, now: Instant) {
        let Some(pressed_at) = self.pressed_at.take() else {
            warn!("Copy/paste key released without press");
            return;
        };
        let chord = if now.saturating_duration_since(pressed_at) <= self.hold_threshold {
            KeyChord::new(HidKeyCode::V, GUI)
        } else if host.modifiers().gui() {
            KeyChord::new(HidKeyCode::X, GUI)
        } else {
            KeyChord::new(HidKeyCode::C, GUI)
        };
        debug!("Copy/paste key: {:?}", chord);
        host.tap(chord);
    }
}
