use strum::FromRepr;

/// Logical layers of the keymap.
///
/// The discriminant is the index into the keymap's layer tables.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    /// Base layer
    #[default]
    Qwerty = 0,
    /// Arrows, paging and window navigation
    Nav = 1,
    /// Symbols and numbers
    Sym = 2,
    /// Function keys and media
    Function = 3,
    /// Keyboard settings
    Adjust = 4,
    /// Daily shortcuts
    Daily = 5,
}

impl LayerId {
    pub const fn index(self) -> usize {
        self as usize
    }
}
