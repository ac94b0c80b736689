use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

/// Modifiers attached to a [`KeyChord`](crate::keycode::KeyChord).
///
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);
/// Ctrl + Shift + Alt + GUI
pub const HYPER: ModifierCombination = ModifierCombination::new()
    .with_ctrl(true)
    .with_shift(true)
    .with_alt(true)
    .with_gui(true);

impl ModifierCombination {
    pub fn is_empty(self) -> bool {
        self.into_bits() & 0b1111 == 0
    }

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

/// The modifier byte of a HID keyboard report.
///
/// Also used as the snapshot of currently held modifiers.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidModifiers {
    pub const LEFT_SHIFT: Self = Self::new().with_left_shift(true);
    pub const RIGHT_SHIFT: Self = Self::new().with_right_shift(true);
    pub const SHIFT: Self = Self::new().with_left_shift(true).with_right_shift(true);
    pub const CTRL: Self = Self::new().with_left_ctrl(true).with_right_ctrl(true);
    pub const ALT: Self = Self::new().with_left_alt(true).with_right_alt(true);
    pub const GUI: Self = Self::new().with_left_gui(true).with_right_gui(true);

    pub fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Either shift is held
    pub fn shift(self) -> bool {
        !(self & Self::SHIFT).is_empty()
    }

    /// Either control is held
    pub fn ctrl(self) -> bool {
        !(self & Self::CTRL).is_empty()
    }

    /// Either alt is held
    pub fn alt(self) -> bool {
        !(self & Self::ALT).is_empty()
    }

    /// Either gui is held
    pub fn gui(self) -> bool {
        !(self & Self::GUI).is_empty()
    }
}
