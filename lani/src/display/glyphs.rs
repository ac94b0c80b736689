//! Bitmaps of the status display.
//!
//! Page layout: each byte is a column of 8 pixels, LSB on top. Bytes fill a row of
//! pages left to right, then the next row of pages below.

use super::Glyph;

/// GUI (command) modifier, 20x24
pub const GUI: Glyph = Glyph::new(
    20,
    24,
    &[
        0x60, 0xf0, 0xf8, 0x1c, 0x1c, 0x18, 0xf8, 0xf0, 0x00, 0x00, 0x00, 0x00,
        0xf0, 0xf8, 0x18, 0x1c, 0x1c, 0xf8, 0xf0, 0x60, 0x00, 0x81, 0xc3, 0xc3,
        0xc3, 0xc3, 0xff, 0xff, 0xc3, 0xc3, 0xc3, 0xc3, 0xff, 0xff, 0xc3, 0xc3,
        0xc3, 0xc3, 0x81, 0x00, 0x06, 0x0f, 0x1f, 0x38, 0x38, 0x18, 0x1f, 0x0f,
        0x00, 0x00, 0x00, 0x00, 0x0f, 0x1f, 0x18, 0x38, 0x38, 0x1f, 0x0f, 0x06,
    ],
);

/// Alt (option) modifier, 20x24
pub const ALT: Glyph = Glyph::new(
    20,
    24,
    &[
        0x00, 0x30, 0x30, 0x30, 0x30, 0x30, 0xf0, 0xe0, 0x80, 0x00, 0x00, 0x30,
        0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x03, 0x0f, 0x3e, 0xf8, 0xe0, 0x80, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x03, 0x0f, 0x0e, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x00,
    ],
);

/// Ctrl modifier, 20x24
pub const CTRL: Glyph = Glyph::new(
    20,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe0,
        0xf0, 0x78, 0x3c, 0x1e, 0x0f, 0x07, 0x07, 0x0f, 0x1e, 0x3c, 0x78, 0xf0,
        0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Shift modifier, 20x24
pub const SHIFT: Glyph = Glyph::new(
    20,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xc0, 0x60, 0x30, 0x18, 0x18, 0x30,
        0x60, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x1c, 0x1e,
        0x1b, 0xf9, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0xf9, 0x1b,
        0x1e, 0x1c, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, 0x1f, 0x10,
        0x10, 0x10, 0x10, 0x10, 0x10, 0x1f, 0x1f, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Caps lock, 24x24
pub const CAPS_LOCK: Glyph = Glyph::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xc0, 0x60, 0x30, 0x18,
        0x18, 0x30, 0x60, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x18, 0x1c, 0x16, 0x13, 0xf1, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0xf1, 0x13, 0x16, 0x1c, 0x18, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x19, 0x19, 0x19, 0x19, 0x19,
        0x19, 0x19, 0x19, 0x19, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Caps lock, filled while caps word is on, 24x24
pub const CAPS_WORD: Glyph = Glyph::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xc0, 0xe0, 0xf0, 0xf8,
        0xf8, 0xf0, 0xe0, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x18, 0x1c, 0x1e, 0x1f, 0xf8, 0xc0, 0x8f, 0x3f, 0x87,
        0x87, 0x3f, 0x8f, 0xc0, 0xf8, 0x1f, 0x1e, 0x1c, 0x18, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x19, 0x19, 0x19, 0x19, 0x19,
        0x19, 0x19, 0x19, 0x19, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// "layer" label, 72x16
pub const LAYER_LABEL: Glyph = Glyph::new(
    72,
    16,
    &[
        0x00, 0x00, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x80, 0xcc, 0xcc, 0xcc, 0xcc, 0xcc, 0xdc, 0xfc, 0xf8,
        0xf0, 0x00, 0xfc, 0xfc, 0xfc, 0x80, 0x00, 0x80, 0xc0, 0xf0, 0xfc, 0xfc,
        0xfc, 0x00, 0xc0, 0xf0, 0xf8, 0xf8, 0xb8, 0xb8, 0xb8, 0xb8, 0xf8, 0xf0,
        0xe0, 0x00, 0xf8, 0xf8, 0xf8, 0xe0, 0xf0, 0x78, 0x38, 0x38, 0x78, 0xf0,
        0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x7f, 0x7f, 0x7f, 0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x70,
        0x70, 0x00, 0x0f, 0x1f, 0x7f, 0x7b, 0x71, 0x71, 0x71, 0x7b, 0x3f, 0x7f,
        0x7f, 0x00, 0x00, 0x03, 0x33, 0x73, 0x73, 0x73, 0x73, 0x79, 0x7f, 0x3f,
        0x1f, 0x00, 0x0f, 0x1f, 0x3f, 0x7b, 0x73, 0x73, 0x73, 0x73, 0x7b, 0x3b,
        0x09, 0x00, 0x3f, 0x7f, 0x7f, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Navigation layer, 24x24
pub const NAV: Glyph = Glyph::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0xc0, 0xc0,
        0xe0, 0xe0, 0xf0, 0xf0, 0xf8, 0xf8, 0xfc, 0xfc, 0xfc, 0x3e, 0x0e, 0x03,
        0x08, 0x0c, 0x0c, 0x0e, 0x1e, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x3f, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0x3f, 0x0f, 0x03, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f,
        0xff, 0x3f, 0x0f, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Symbol layer, 24x24
pub const SYMBOL: Glyph = Glyph::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0xfe, 0x06,
        0x00, 0x00, 0x00, 0xfe, 0xfe, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0xc0, 0xc3, 0xc3, 0xc3, 0xff, 0xff, 0xc3, 0xc3,
        0xc3, 0xc3, 0xff, 0xff, 0xc3, 0xc3, 0xc3, 0x03, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x7f, 0x7f, 0x00, 0x00, 0x00,
        0x60, 0x7f, 0x7f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Function layer, 24x24
pub const FUNCTION: Glyph = Glyph::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0,
        0xf0, 0x70, 0x38, 0x18, 0x38, 0x70, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x0c, 0xff,
        0xff, 0x0c, 0x0c, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x0e, 0x1c, 0x18, 0x1c, 0x0e, 0x0f,
        0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Daily shortcuts layer, 24x24
pub const DAILY: Glyph = Glyph::new(
    24,
    24,
    &[
        0xe0, 0xf0, 0xf8, 0xfc, 0xfc, 0xfc, 0xfc, 0xfc, 0xf8, 0xf8, 0xf0, 0xe0,
        0xe0, 0xf0, 0xf8, 0xfc, 0xfc, 0xfc, 0xfc, 0xfc, 0xf8, 0xf8, 0xf0, 0xc0,
        0x07, 0x1f, 0x3f, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f, 0x3f, 0x0f, 0x07,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f,
        0x3f, 0x3f, 0x1f, 0x0f, 0x07, 0x03, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);
