//! Gesture classification shared by every tap dance key.

/// Terminal classification of one completed gesture window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureClass {
    /// No gesture resolved
    #[default]
    None,
    /// The tap sequence can't be classified, e.g. 4 or more taps
    Unknown,
    SingleTap,
    SingleHold,
    DoubleTap,
    DoubleHold,
    /// Two taps interrupted by another key, treated as two independent single taps
    DoubleSingleTap,
    TripleTap,
    TripleHold,
}

/// Facts known about a tap sequence when its gesture window closes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapObservation {
    /// Number of presses counted in the window, at least 1
    pub tap_count: u8,
    /// Another key was pressed before the tapping term elapsed
    pub interrupted: bool,
    /// The key is still held when the window closes
    pub still_pressed: bool,
}

impl TapObservation {
    pub const fn new(tap_count: u8, interrupted: bool, still_pressed: bool) -> Self {
        Self {
            tap_count,
            interrupted,
            still_pressed,
        }
    }
}

/// Classify a tap sequence.
///
/// An interrupted single or triple press is always a tap: pressing another key while
/// the gesture key is down is how fast typing looks. An interrupted double press means
/// the key was typed twice, e.g. `pp` in "pepper".
pub fn classify(observation: TapObservation) -> GestureClass {
    let TapObservation {
        tap_count,
        interrupted,
        still_pressed,
    } = observation;
    match tap_count {
        1 if interrupted || !still_pressed => GestureClass::SingleTap,
        1 => GestureClass::SingleHold,
        2 if interrupted => GestureClass::DoubleSingleTap,
        2 if still_pressed => GestureClass::DoubleHold,
        2 => GestureClass::DoubleTap,
        3 if interrupted || !still_pressed => GestureClass::TripleTap,
        3 => GestureClass::TripleHold,
        _ => GestureClass::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(tap_count: u8, interrupted: bool, still_pressed: bool) -> GestureClass {
        classify(TapObservation::new(tap_count, interrupted, still_pressed))
    }

    #[test]
    fn test_single() {
        assert_eq!(class(1, false, false), GestureClass::SingleTap);
        assert_eq!(class(1, false, true), GestureClass::SingleHold);
        assert_eq!(class(1, true, false), GestureClass::SingleTap);
        assert_eq!(class(1, true, true), GestureClass::SingleTap);
    }

    #[test]
    fn test_double() {
        assert_eq!(class(2, false, false), GestureClass::DoubleTap);
        assert_eq!(class(2, false, true), GestureClass::DoubleHold);
        assert_eq!(class(2, true, false), GestureClass::DoubleSingleTap);
        // Interruption takes precedence over the pressed state
        assert_eq!(class(2, true, true), GestureClass::DoubleSingleTap);
    }

    #[test]
    fn test_triple() {
        assert_eq!(class(3, false, false), GestureClass::TripleTap);
        assert_eq!(class(3, false, true), GestureClass::TripleHold);
        assert_eq!(class(3, true, false), GestureClass::TripleTap);
        assert_eq!(class(3, true, true), GestureClass::TripleTap);
    }

    #[test]
    fn test_unclassified_counts() {
        for tap_count in [0, 4, 5, 15, u8::MAX] {
            for interrupted in [false, true] {
                for still_pressed in [false, true] {
                    assert_eq!(class(tap_count, interrupted, still_pressed), GestureClass::Unknown);
                }
            }
        }
    }
}
