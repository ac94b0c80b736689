//! The lani keymap of the Kyria.
//!
//! Each half is laid out on a 4 x 16 grid. Rows 0 and 1 use the outer 6 columns of each
//! half, row 2 adds the 4 inner keys in columns 6..10, and the 10 thumb keys sit in
//! columns 3..13 of row 3.

use crate::keymap::KeyMap;
use crate::types::action::KeyAction;
use crate::types::modifier::{ALT, GUI, SHIFT};
use crate::{a, k, layer, td, text, wm};

pub const ROW: usize = 4;
pub const COL: usize = 16;
pub const NUM_LAYER: usize = 6;

pub fn lani_keymap() -> KeyMap<ROW, COL, NUM_LAYER> {
    KeyMap::new(lani_layers())
}

#[rustfmt::skip]
pub fn lani_layers() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Qwerty
        layer!([
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), a!(No), a!(No), a!(No), a!(No), k!(Y), k!(U), k!(I), k!(O), k!(P), a!(CopyPaste)],
            [k!(Escape), k!(A), k!(S), k!(D), k!(F), k!(G), a!(No), a!(No), a!(No), a!(No), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), td!(CapsWord), td!(Daily), td!(Braces), td!(Clipboard), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
            [a!(No), a!(No), a!(No), td!(Function), k!(LGui), k!(Enter), k!(Backspace), td!(Nav), td!(Symbol), k!(Space), k!(RAlt), k!(RGui), td!(QuickAccess), a!(No), a!(No), a!(No)]
        ]),
        // Nav
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), k!(PageUp), k!(Home), k!(End), k!(PageUp), k!(PageDown), a!(Transparent)],
            [a!(Transparent), k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui), wm!(Z, GUI), a!(No), a!(No), a!(No), a!(No), k!(PageDown), k!(Left), k!(Right), k!(Up), k!(Down), wm!(Kc5, GUI | SHIFT)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(Transparent), wm!(Z, GUI | SHIFT), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), wm!(Tab, GUI | SHIFT), wm!(Tab, GUI), wm!(Grave, ALT | SHIFT), wm!(Grave, ALT), wm!(Kc3, GUI | SHIFT)],
            [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
        ]),
        // Sym
        layer!([
            [k!(Grave), wm!(Minus, SHIFT), k!(Minus), wm!(Kc7, SHIFT), wm!(Comma, SHIFT), wm!(Dot, SHIFT), a!(No), a!(No), a!(No), a!(No), text!(Arrow), k!(Kc7), k!(Kc8), k!(Kc9), a!(No), a!(Transparent)],
            [wm!(Equal, SHIFT), k!(Equal), wm!(LeftBracket, SHIFT), wm!(RightBracket, SHIFT), k!(LeftBracket), k!(RightBracket), a!(No), a!(No), a!(No), a!(No), text!(Ellipsis), k!(Kc4), k!(Kc5), k!(Kc6), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(Backslash), k!(Slash), wm!(Semicolon, SHIFT), wm!(Kc9, SHIFT), wm!(Kc0, SHIFT), wm!(Backslash, SHIFT), a!(Transparent), a!(Transparent), a!(Transparent), k!(Kc0), k!(Kc1), k!(Kc2), k!(Kc3), wm!(Slash, SHIFT), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
        ]),
        // Function
        layer!([
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(Transparent), k!(F7), k!(F8), k!(F9), k!(F10), a!(Transparent)],
            [a!(Transparent), k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(Transparent), k!(F4), k!(F5), k!(F6), k!(F11), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F12), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), k!(Delete), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
        ]),
        // Adjust
        [[KeyAction::Transparent; COL]; ROW],
        // Daily
        [[KeyAction::Transparent; COL]; ROW],
    ]
}
