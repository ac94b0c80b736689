/// A key switch changed state at matrix position (row, col)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyboardEvent {
    pub const fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }

    pub const fn press(row: u8, col: u8) -> Self {
        Self::key(row, col, true)
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self::key(row, col, false)
    }
}
