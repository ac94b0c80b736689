//! Gesture window tracking for dance keys.
//!
//! Only one window is open at a time. It counts presses of the same dance key and is
//! resolved when the tapping term passes without another press or release, or when any
//! other key is pressed. After resolving, a dance whose key is still down waits for its
//! key release.

use embassy_time::{Duration, Instant};
use heapless::Vec;
use lani_types::action::DanceId;

use crate::MAX_DANCES;
use crate::gesture::TapObservation;

/// A closed gesture window, ready to be dispatched to its dance
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    pub dance: DanceId,
    pub observation: TapObservation,
    /// The key is already up, release the dance right after resolving it
    pub released: bool,
}

/// The window being counted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct TapWindow {
    dance: DanceId,
    tap_count: u8,
    pressed: bool,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct TapWindowTracker {
    window: Option<TapWindow>,
    /// Resolved dances whose key is still held
    held: Vec<DanceId, MAX_DANCES>,
    tapping_term: Duration,
}

impl TapWindowTracker {
    pub fn new(tapping_term: Duration) -> Self {
        Self {
            window: None,
            held: Vec::new(),
            tapping_term,
        }
    }

    /// When the open window resolves on its own
    pub fn deadline(&self) -> Option<Instant> {
        self.window.map(|w| w.deadline)
    }

    /// The dance whose window is open
    pub fn pending(&self) -> Option<DanceId> {
        self.window.map(|w| w.dance)
    }

    /// Is `dance` resolved and still held
    pub fn is_held(&self, dance: DanceId) -> bool {
        self.held.contains(&dance)
    }

    /// A dance key is pressed.
    ///
    /// Returns the resolution of another dance's window, which the press interrupts.
    pub fn press(&mut self, dance: DanceId, now: Instant) -> Option<Resolution> {
        if let Some(w) = self.window.as_mut().filter(|w| w.dance == dance) {
            w.tap_count = w.tap_count.saturating_add(1);
            w.pressed = true;
            w.deadline = now + self.tapping_term;
            trace!("Dance {:?} tap count: {:?}", dance, w.tap_count);
            return None;
        }
        if self.is_held(dance) {
            warn!("Dance {:?} pressed while already held", dance);
            return None;
        }
        let interrupted = self.interrupt();
        self.window = Some(TapWindow {
            dance,
            tap_count: 1,
            pressed: true,
            deadline: now + self.tapping_term,
        });
        interrupted
    }

    /// A dance key is released. Returns the dance if it must be released now.
    pub fn release(&mut self, dance: DanceId, now: Instant) -> Option<DanceId> {
        if let Some(w) = self.window.as_mut().filter(|w| w.dance == dance) {
            w.pressed = false;
            w.deadline = now + self.tapping_term;
            return None;
        }
        if let Some(index) = self.held.iter().position(|&d| d == dance) {
            self.held.swap_remove(index);
            return Some(dance);
        }
        // Released without a matching press, nothing to do
        None
    }

    /// Another key is pressed, close the open window
    pub fn interrupt(&mut self) -> Option<Resolution> {
        self.window.take().map(|w| self.close(w, true))
    }

    /// Close the open window if its deadline passed
    pub fn poll(&mut self, now: Instant) -> Option<Resolution> {
        match self.window {
            Some(w) if now >= w.deadline => {
                self.window = None;
                Some(self.close(w, false))
            }
            _ => None,
        }
    }

    fn close(&mut self, window: TapWindow, interrupted: bool) -> Resolution {
        if window.pressed && self.held.push(window.dance).is_err() {
            error!("Too many held dances, {:?} won't be released", window.dance);
        }
        Resolution {
            dance: window.dance,
            observation: TapObservation::new(window.tap_count, interrupted, window.pressed),
            released: !window.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: Duration = Duration::from_millis(200);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn resolution(dance: DanceId, tap_count: u8, interrupted: bool, pressed: bool) -> Option<Resolution> {
        Some(Resolution {
            dance,
            observation: TapObservation::new(tap_count, interrupted, pressed),
            released: !pressed,
        })
    }

    #[test]
    fn test_single_tap_times_out() {
        let mut tracker = TapWindowTracker::new(TERM);
        assert_eq!(tracker.press(DanceId::Nav, at(0)), None);
        assert_eq!(tracker.release(DanceId::Nav, at(50)), None);
        assert_eq!(tracker.deadline(), Some(at(250)));
        assert_eq!(tracker.poll(at(249)), None);
        assert_eq!(tracker.poll(at(250)), resolution(DanceId::Nav, 1, false, false));
        assert_eq!(tracker.pending(), None);
    }

    #[test]
    fn test_hold_waits_for_release() {
        let mut tracker = TapWindowTracker::new(TERM);
        tracker.press(DanceId::Nav, at(0));
        assert_eq!(tracker.poll(at(200)), resolution(DanceId::Nav, 1, false, true));
        assert!(tracker.is_held(DanceId::Nav));
        assert_eq!(tracker.release(DanceId::Nav, at(500)), Some(DanceId::Nav));
        // A second release is a no-op
        assert_eq!(tracker.release(DanceId::Nav, at(510)), None);
    }

    #[test]
    fn test_taps_are_counted() {
        let mut tracker = TapWindowTracker::new(TERM);
        tracker.press(DanceId::Braces, at(0));
        tracker.release(DanceId::Braces, at(30));
        tracker.press(DanceId::Braces, at(150));
        tracker.release(DanceId::Braces, at(180));
        tracker.press(DanceId::Braces, at(300));
        tracker.release(DanceId::Braces, at(330));
        assert_eq!(tracker.poll(at(529)), None);
        assert_eq!(tracker.poll(at(530)), resolution(DanceId::Braces, 3, false, false));
    }

    #[test]
    fn test_other_key_interrupts() {
        let mut tracker = TapWindowTracker::new(TERM);
        tracker.press(DanceId::Nav, at(0));
        assert_eq!(tracker.interrupt(), resolution(DanceId::Nav, 1, true, true));
        assert_eq!(tracker.interrupt(), None);
        assert_eq!(tracker.release(DanceId::Nav, at(100)), Some(DanceId::Nav));
    }

    #[test]
    fn test_other_dance_interrupts() {
        let mut tracker = TapWindowTracker::new(TERM);
        tracker.press(DanceId::Nav, at(0));
        tracker.release(DanceId::Nav, at(20));
        tracker.press(DanceId::Nav, at(40));
        tracker.release(DanceId::Nav, at(60));
        assert_eq!(
            tracker.press(DanceId::Symbol, at(80)),
            resolution(DanceId::Nav, 2, true, false)
        );
        assert_eq!(tracker.pending(), Some(DanceId::Symbol));
    }
}
