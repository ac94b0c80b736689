use embassy_time::Duration;

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    pub tap_dance: TapDanceConfig,
    pub one_shot: OneShotConfig,
    pub copy_paste: CopyPasteConfig,
}

/// Config for tap dance gestures
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceConfig {
    /// Maximum gap between taps counted in the same gesture, also the hold threshold
    pub tapping_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(200),
        }
    }
}

/// Config for one shot layers
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShotConfig {
    /// An armed one shot layer is cleared when untouched for this long
    pub timeout: Duration,
}

impl Default for OneShotConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(200),
        }
    }
}

/// Config for the copy/paste key
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CopyPasteConfig {
    /// Released after this long the key copies (or cuts), otherwise it pastes
    pub hold_threshold: Duration,
}

impl Default for CopyPasteConfig {
    fn default() -> Self {
        Self {
            hold_threshold: Duration::from_millis(200),
        }
    }
}
