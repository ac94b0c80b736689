#![allow(dead_code)]

use embassy_time::Instant;
use lani::config::BehaviorConfig;
use lani::dance::DanceTable;
use lani::event::KeyboardEvent;
use lani::host::Host;
use lani::keyboard::Keyboard;
use lani::layout::{COL, NUM_LAYER, ROW, lani_keymap};
use lani::types::keycode::{HidKeyCode, KeyChord};
use lani::types::led_indicator::LedIndicator;
use lani::types::modifier::HidModifiers;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// Positions on the lani layout
pub const NAV: (u8, u8) = (3, 7);
pub const SYM: (u8, u8) = (3, 8);
pub const FUNCTION: (u8, u8) = (3, 3);
pub const CAPS: (u8, u8) = (2, 6);
pub const DAILY: (u8, u8) = (2, 7);
pub const BRACES: (u8, u8) = (2, 8);
pub const CLIPBOARD: (u8, u8) = (2, 9);
pub const QUICK_ACCESS: (u8, u8) = (3, 12);
pub const COPY_PASTE: (u8, u8) = (0, 15);
pub const LSHIFT: (u8, u8) = (2, 0);
pub const LGUI: (u8, u8) = (3, 4);
pub const SPACE: (u8, u8) = (3, 9);
/// `A`
pub const KEY_A: (u8, u8) = (1, 1);
/// `Y`, `=>` on Sym
pub const KEY_Y: (u8, u8) = (0, 10);
/// `H`, `...` on Sym
pub const KEY_H: (u8, u8) = (1, 10);
/// `J`, `Left` on Nav
pub const KEY_J: (u8, u8) = (1, 11);
/// `E`, `-` on Sym
pub const KEY_E: (u8, u8) = (0, 2);
/// `W`, `_` on Sym
pub const KEY_W: (u8, u8) = (0, 1);
/// `M`, `1` on Sym
pub const KEY_M: (u8, u8) = (2, 11);

/// What the keyboard did to the host
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Register(KeyChord),
    Unregister(KeyChord),
    RegisterModifiers(HidModifiers),
    UnregisterModifiers(HidModifiers),
}

/// Host with a manual clock, recording every call
#[derive(Debug)]
pub struct MockHost {
    pub now: u64,
    pub events: Vec<HostEvent>,
    pub held_modifiers: HidModifiers,
    pub led_indicator: LedIndicator,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            now: 0,
            events: Vec::new(),
            held_modifiers: HidModifiers::new(),
            led_indicator: LedIndicator::new(),
        }
    }

    /// Chords registered so far, in order
    pub fn registered(&self) -> Vec<KeyChord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Register(chord) => Some(*chord),
                _ => None,
            })
            .collect()
    }

    /// Chords unregistered so far, in order
    pub fn unregistered(&self) -> Vec<KeyChord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Unregister(chord) => Some(*chord),
                _ => None,
            })
            .collect()
    }

    fn held(chord: KeyChord) -> Option<HidModifiers> {
        if chord.key == HidKeyCode::No || chord.key.is_modifier() {
            Some(chord.modifiers.to_hid_modifiers() | chord.key.to_hid_modifiers())
        } else {
            None
        }
    }
}

impl Host for MockHost {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now)
    }

    fn modifiers(&self) -> HidModifiers {
        self.held_modifiers
    }

    fn led_indicator(&self) -> LedIndicator {
        self.led_indicator
    }

    fn register(&mut self, chord: KeyChord) {
        if let Some(modifiers) = Self::held(chord) {
            self.held_modifiers |= modifiers;
        }
        self.events.push(HostEvent::Register(chord));
    }

    fn unregister(&mut self, chord: KeyChord) {
        if let Some(modifiers) = Self::held(chord) {
            self.held_modifiers &= !modifiers;
        }
        self.events.push(HostEvent::Unregister(chord));
    }

    fn register_modifiers(&mut self, modifiers: HidModifiers) {
        self.held_modifiers |= modifiers;
        self.events.push(HostEvent::RegisterModifiers(modifiers));
    }

    fn unregister_modifiers(&mut self, modifiers: HidModifiers) {
        self.held_modifiers &= !modifiers;
        self.events.push(HostEvent::UnregisterModifiers(modifiers));
    }
}

pub type LaniKeyboard = Keyboard<MockHost, ROW, COL, NUM_LAYER>;

pub fn lani_keyboard() -> LaniKeyboard {
    let dances = DanceTable::lani().expect("lani dances fit the table");
    Keyboard::new(lani_keymap(), dances, BehaviorConfig::default(), MockHost::new()).expect("lani keymap is valid")
}

/// Drive a keyboard on the mock clock, times in milliseconds
pub trait KeyboardTestExt {
    fn press_at(&mut self, ms: u64, key: (u8, u8));
    fn release_at(&mut self, ms: u64, key: (u8, u8));
    /// Let the clock run to `ms` without key events
    fn idle_until(&mut self, ms: u64);

    fn tap_at(&mut self, ms: u64, key: (u8, u8)) {
        self.press_at(ms, key);
        self.release_at(ms + 20, key);
    }
}

impl KeyboardTestExt for LaniKeyboard {
    fn press_at(&mut self, ms: u64, key: (u8, u8)) {
        self.host_mut().now = ms;
        self.process_event(KeyboardEvent::press(key.0, key.1));
    }

    fn release_at(&mut self, ms: u64, key: (u8, u8)) {
        self.host_mut().now = ms;
        self.process_event(KeyboardEvent::release(key.0, key.1));
    }

    fn idle_until(&mut self, ms: u64) {
        self.host_mut().now = ms;
        self.process_timeout();
    }
}
