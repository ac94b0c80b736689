//! The boundary between gesture processing and the outside world.
//!
//! Handlers never touch USB or timers directly, they go through [`Host`]. On the
//! keyboard it's implemented by [`HidReporter`](crate::hid::HidReporter), tests use a
//! recording mock with a manual clock.

use embassy_time::Instant;
use lani_types::keycode::KeyChord;
use lani_types::led_indicator::LedIndicator;
use lani_types::modifier::HidModifiers;

pub trait Host {
    /// Current time
    fn now(&self) -> Instant;

    /// Modifiers currently held, not including the ones attached to a chord
    fn modifiers(&self) -> HidModifiers;

    /// Lock indicators last reported by the host
    fn led_indicator(&self) -> LedIndicator;

    /// Press a chord.
    ///
    /// A chord without a key, or whose key is itself a modifier, holds its modifiers
    /// the same way a physical modifier key does.
    fn register(&mut self, chord: KeyChord);

    /// Release a chord registered before. Releasing a chord that isn't pressed is a no-op.
    fn unregister(&mut self, chord: KeyChord);

    /// Press and release
    fn tap(&mut self, chord: KeyChord) {
        self.register(chord);
        self.unregister(chord);
    }

    /// Add modifiers to the held set
    fn register_modifiers(&mut self, modifiers: HidModifiers);

    /// Remove modifiers from the held set
    fn unregister_modifiers(&mut self, modifiers: HidModifiers);

    /// Type an ascii string, assuming en-us layout on the host
    fn send_string(&mut self, text: &str) {
        for c in text.bytes() {
            match KeyChord::from_ascii(c) {
                Some(chord) => self.tap(chord),
                None => warn!("Can't type char {:?}", c),
            }
        }
    }
}
