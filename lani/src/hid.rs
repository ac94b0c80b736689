//! Keyboard report state.
//!
//! [`HidReporter`] keeps the keys and modifiers being held and pushes a boot keyboard
//! report to the report channel on every change.

use embassy_sync::channel::Sender;
use embassy_time::Instant;
use lani_types::keycode::{HidKeyCode, KeyChord};
use lani_types::led_indicator::LedIndicator;
use lani_types::modifier::HidModifiers;

use crate::channel::KEYBOARD_REPORT_CHANNEL;
use crate::descriptor::KeyboardReport;
use crate::host::Host;
use crate::{REPORT_CHANNEL_SIZE, RawMutex};

pub struct HidReporter<'a> {
    /// 6KRO key slots, `HidKeyCode::No` marks a free slot
    held_keycodes: [HidKeyCode; 6],
    /// Modifiers held like physical modifier keys
    held_modifiers: HidModifiers,
    /// Modifiers attached to a registered chord, only sent while the chord's key is down
    weak_modifiers: HidModifiers,
    led_indicator: LedIndicator,
    sender: Sender<'a, RawMutex, KeyboardReport, REPORT_CHANNEL_SIZE>,
}

impl HidReporter<'static> {
    /// Reporter writing to [`KEYBOARD_REPORT_CHANNEL`]
    pub fn new() -> Self {
        Self::with_sender(KEYBOARD_REPORT_CHANNEL.sender())
    }
}

impl Default for HidReporter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HidReporter<'a> {
    pub fn with_sender(sender: Sender<'a, RawMutex, KeyboardReport, REPORT_CHANNEL_SIZE>) -> Self {
        Self {
            held_keycodes: [HidKeyCode::No; 6],
            held_modifiers: HidModifiers::new(),
            weak_modifiers: HidModifiers::new(),
            led_indicator: LedIndicator::new(),
            sender,
        }
    }

    /// Update lock indicators from the host's output report
    pub fn set_led_indicator(&mut self, led_indicator: LedIndicator) {
        debug!("Led indicator: {:?}", led_indicator);
        self.led_indicator = led_indicator;
    }

    /// The report describing the current state
    pub fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: (self.held_modifiers | self.weak_modifiers).into_bits(),
            reserved: 0,
            leds: self.led_indicator.into_bits(),
            keycodes: self.held_keycodes.map(|k| k as u8),
        }
    }

    fn send_report(&mut self) {
        let report = self.report();
        trace!("Sending keyboard report: {:?}", report);
        if self.sender.try_send(report).is_err() {
            warn!("Keyboard report channel full, report dropped");
        }
    }

    fn register_keycode(&mut self, key: HidKeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        match self.held_keycodes.iter().position(|&k| k == HidKeyCode::No) {
            Some(index) => self.held_keycodes[index] = key,
            None => warn!("No free slot for {:?}, all 6 keys are held", key),
        }
    }

    fn unregister_keycode(&mut self, key: HidKeyCode) {
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == key) {
            self.held_keycodes[index] = HidKeyCode::No;
        }
    }
}

impl Host for HidReporter<'_> {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    fn led_indicator(&self) -> LedIndicator {
        self.led_indicator
    }

    fn register(&mut self, chord: KeyChord) {
        let modifiers = chord.modifiers.to_hid_modifiers();
        if chord.key == HidKeyCode::No || chord.key.is_modifier() {
            self.held_modifiers |= modifiers | chord.key.to_hid_modifiers();
        } else {
            self.weak_modifiers |= modifiers;
            self.register_keycode(chord.key);
        }
        self.send_report();
    }

    fn unregister(&mut self, chord: KeyChord) {
        let modifiers = chord.modifiers.to_hid_modifiers();
        if chord.key == HidKeyCode::No || chord.key.is_modifier() {
            self.held_modifiers &= !(modifiers | chord.key.to_hid_modifiers());
        } else {
            self.weak_modifiers &= !modifiers;
            self.unregister_keycode(chord.key);
        }
        self.send_report();
    }

    fn register_modifiers(&mut self, modifiers: HidModifiers) {
        self.held_modifiers |= modifiers;
        self.send_report();
    }

    fn unregister_modifiers(&mut self, modifiers: HidModifiers) {
        self.held_modifiers &= !modifiers;
        self.send_report();
    }
}
