use lani_types::action::DanceId;
use lani_types::layer::LayerId;

/// Errors found when a keyboard is assembled from its keymap and dance table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A key position refers to a dance that has no behavior bound
    UnboundDance(DanceId),
    /// The same dance is bound twice
    DuplicateDance(DanceId),
    /// A layer dance or the default layer points past the keymap's layers
    LayerOutOfRange(LayerId),
    /// The dance table is full
    TooManyDances,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnboundDance(id) => write!(f, "dance {:?} is used in the keymap but not bound", id),
            ConfigError::DuplicateDance(id) => write!(f, "dance {:?} is bound more than once", id),
            ConfigError::LayerOutOfRange(layer) => write!(f, "layer {:?} is not in the keymap", layer),
            ConfigError::TooManyDances => write!(f, "too many dances"),
        }
    }
}

impl core::error::Error for ConfigError {}
