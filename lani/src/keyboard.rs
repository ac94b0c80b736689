pub(crate) mod copy_paste;
pub(crate) mod tap_window;

use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use heapless::LinearMap;
use lani_types::action::{Action, DanceId, KeyAction};
use lani_types::keycode::KeyChord;
use lani_types::layer::LayerId;
use lani_types::modifier::HidModifiers;

pub use self::copy_paste::CopyPasteKey;
pub use self::tap_window::{Resolution, TapWindowTracker};
use crate::Runnable;
use crate::caps_word::CapsWord;
use crate::channel::KEY_EVENT_CHANNEL;
use crate::config::BehaviorConfig;
use crate::dance::{DanceContext, DanceTable};
use crate::error::ConfigError;
use crate::event::KeyboardEvent;
use crate::gesture::TapObservation;
use crate::host::Host;
use crate::keymap::KeyMap;
use crate::layer::LayerArbiter;

/// Max number of positions holding a chord at the same time
const MAX_HELD_CHORDS: usize = 16;

/// What the status display shows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    pub layer: LayerId,
    pub modifiers: HidModifiers,
    pub caps_lock: bool,
    pub caps_word: bool,
}

impl<H: Host, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Runnable
    for Keyboard<H, ROW, COL, NUM_LAYER>
{
    /// Main keyboard processing task, it receives key events and fires gesture timeouts.
    async fn run(&mut self) {
        loop {
            let event = match self.next_deadline() {
                Some(deadline) => match select(KEY_EVENT_CHANNEL.receive(), Timer::at(deadline)).await {
                    Either::First(event) => Some(event),
                    Either::Second(_) => None,
                },
                None => Some(KEY_EVENT_CHANNEL.receive().await),
            };

            match event {
                Some(event) => self.process_event(event),
                None => self.process_timeout(),
            }
        }
    }
}

pub struct Keyboard<H: Host, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: KeyMap<ROW, COL, NUM_LAYER>,

    /// Behaviors of the dance keys
    dances: DanceTable,

    /// Layer overlay state
    layers: LayerArbiter,

    /// The open gesture window and the resolved dances still held
    tap_windows: TapWindowTracker,

    caps_word: CapsWord,

    copy_paste: CopyPasteKey,

    /// Chords registered by held positions, released with the position
    held_chords: LinearMap<(u8, u8), KeyChord, MAX_HELD_CHORDS>,

    host: H,
}

impl<H: Host, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<H, ROW, COL, NUM_LAYER> {
    pub fn new(
        keymap: KeyMap<ROW, COL, NUM_LAYER>,
        dances: DanceTable,
        behavior: BehaviorConfig,
        host: H,
    ) -> Result<Self, ConfigError> {
        if let Err(e) = keymap.validate(&dances) {
            error!("Invalid keymap: {:?}", e);
            return Err(e);
        }
        Ok(Self {
            keymap,
            dances,
            layers: LayerArbiter::new(behavior.one_shot),
            tap_windows: TapWindowTracker::new(behavior.tap_dance.tapping_term),
            caps_word: CapsWord::default(),
            copy_paste: CopyPasteKey::new(behavior.copy_paste),
            held_chords: LinearMap::new(),
            host,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn layers(&self) -> &LayerArbiter {
        &self.layers
    }

    pub fn caps_word(&self) -> &CapsWord {
        &self.caps_word
    }

    /// The layer keys are looked up on
    pub fn effective_layer(&self) -> LayerId {
        self.layers.effective_layer()
    }

    pub fn set_default_layer(&mut self, layer: LayerId) -> Result<(), ConfigError> {
        if !self.keymap.contains_layer(layer) {
            return Err(ConfigError::LayerOutOfRange(layer));
        }
        self.layers.set_default_layer(layer);
        Ok(())
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            layer: self.layers.effective_layer(),
            modifiers: self.host.modifiers(),
            caps_lock: self.host.led_indicator().caps_lock(),
            caps_word: self.caps_word.is_active(),
        }
    }

    /// The next instant [`process_timeout`](Self::process_timeout) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tap_windows.deadline(), self.layers.one_shot_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Resolve gesture windows and one shot layers whose deadline passed
    pub fn process_timeout(&mut self) {
        let now = self.host.now();
        self.process_timeout_at(now);
    }

    fn process_timeout_at(&mut self, now: Instant) {
        if let Some(resolution) = self.tap_windows.poll(now) {
            self.dispatch(resolution);
        }
        self.layers.expire_one_shot(now);
    }

    /// Process a key event
    pub fn process_event(&mut self, event: KeyboardEvent) {
        let now = self.host.now();
        // Timeouts which passed before this event come first
        self.process_timeout_at(now);

        debug!("Processing key event: {:?}", event);
        if event.pressed {
            self.process_key_press(event, now);
        } else {
            self.process_key_release(event, now);
        }
    }

    fn process_key_press(&mut self, event: KeyboardEvent, now: Instant) {
        let default_layer = self.layers.default_layer();

        // Any press other than the pending dance closes its gesture window. The gesture
        // may switch layers, so the pressed key is looked up after it's dispatched.
        let peeked = self.keymap.get_action(
            event.row as usize,
            event.col as usize,
            self.layers.effective_layer(),
            default_layer,
        );
        let continues_window = matches!(peeked, KeyAction::TapDance(id) if self.tap_windows.pending() == Some(id));
        if !continues_window {
            if let Some(resolution) = self.tap_windows.interrupt() {
                self.dispatch(resolution);
            }
        }

        let action = self
            .keymap
            .get_action_with_layer_cache(event, self.layers.effective_layer(), default_layer);

        if let KeyAction::TapDance(id) = action {
            // Dances other than layer dances end a one shot layer like any key
            let is_layer_dance = self
                .dances
                .get(id)
                .is_some_and(|slot| slot.dance.target_layer().is_some());
            if !is_layer_dance {
                self.layers.consume_one_shot();
            }
            if let Some(resolution) = self.tap_windows.press(id, now) {
                self.dispatch(resolution);
            }
            return;
        }

        if !action.is_modifier() && action != KeyAction::No {
            self.layers.consume_one_shot();
        }

        match action {
            KeyAction::Single(Action::Key(chord)) => {
                let chord = self.caps_word.process(chord);
                self.press_chord(event, chord);
            }
            KeyAction::Single(Action::Modifier(modifiers)) => {
                self.press_chord(event, KeyChord::modifiers(modifiers));
            }
            KeyAction::Text(text) => {
                self.caps_word.deactivate();
                self.host.send_string(text.text());
            }
            KeyAction::CopyPaste => {
                self.caps_word.deactivate();
                self.copy_paste.press(now);
            }
            KeyAction::No | KeyAction::Transparent | KeyAction::TapDance(_) => {}
        }
    }

    fn process_key_release(&mut self, event: KeyboardEvent, now: Instant) {
        let action = self.keymap.get_action_with_layer_cache(
            event,
            self.layers.effective_layer(),
            self.layers.default_layer(),
        );

        if let Some(chord) = self.held_chords.remove(&(event.row, event.col)) {
            self.host.unregister(chord);
        }

        match action {
            KeyAction::TapDance(id) => {
                if let Some(id) = self.tap_windows.release(id, now) {
                    self.release_dance(id);
                }
            }
            KeyAction::CopyPaste => self.copy_paste.release(&mut self.host, now),
            _ => {}
        }
    }

    fn press_chord(&mut self, event: KeyboardEvent, chord: KeyChord) {
        self.host.register(chord);
        if let Err(((row, col), chord)) = self.held_chords.insert((event.row, event.col), chord) {
            // Can't be released with the position, don't leave it stuck
            warn!("Too many held keys, releasing {:?} at ({:?}, {:?})", chord, row, col);
            self.host.unregister(chord);
        }
    }

    fn dispatch(&mut self, resolution: Resolution) {
        self.resolve_dance(resolution.dance, resolution.observation);
        if resolution.released {
            self.release_dance(resolution.dance);
        }
    }

    /// Classify a closed gesture window of `id` and run its resolve effect
    pub fn resolve_dance(&mut self, id: DanceId, observation: TapObservation) {
        let now = self.host.now();
        let Some(slot) = self.dances.get_mut(id) else {
            warn!("Dance {:?} is not bound", id);
            return;
        };
        let mut ctx = DanceContext {
            host: &mut self.host,
            layers: &mut self.layers,
            caps_word: &mut self.caps_word,
            now,
        };
        slot.on_resolve(observation, &mut ctx);
    }

    /// Stop the effect of the last resolved gesture of `id`
    pub fn release_dance(&mut self, id: DanceId) {
        let now = self.host.now();
        let Some(slot) = self.dances.get_mut(id) else {
            warn!("Dance {:?} is not bound", id);
            return;
        };
        let mut ctx = DanceContext {
            host: &mut self.host,
            layers: &mut self.layers,
            caps_word: &mut self.caps_word,
            now,
        };
        slot.on_release(&mut ctx);
    }
}
