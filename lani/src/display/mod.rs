//! Status display of the keyboard halves.
//!
//! The primary half shows the held modifiers, caps lock / caps word, and the layer. The
//! secondary half shows a banner.

pub mod glyphs;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use lani_types::layer::LayerId;

use crate::keyboard::StatusSnapshot;

/// Top edge of the modifier row
const MODIFIER_ROW: i32 = 0;
/// Left edge of the GUI, Alt, Ctrl and Shift glyphs
const MODIFIER_COLUMNS: [i32; 4] = [0, 26, 52, 78];
const CAPS_ORIGIN: Point = Point::new(104, MODIFIER_ROW);
const LAYER_LABEL_ORIGIN: Point = Point::new(0, 36);
const LAYER_GLYPH_ORIGIN: Point = Point::new(74, 32);

/// A monochrome bitmap in OLED page layout
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    data: &'static [u8],
}

impl Glyph {
    pub const fn new(width: u32, height: u32, data: &'static [u8]) -> Self {
        Self { width, height, data }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Is the pixel at (x, y) lit
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = (y / 8 * self.width + x) as usize;
        self.data.get(index).is_some_and(|byte| (byte >> (y % 8)) & 1 == 1)
    }

    /// Draw every pixel of the glyph with its top left corner at `origin`. Pixels off
    /// the target are skipped.
    pub fn draw<D>(&self, target: &mut D, origin: Point, invert: bool) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let bounds = target.bounding_box();
        let glyph = *self;
        let pixels = (0..glyph.height)
            .flat_map(move |y| (0..glyph.width).map(move |x| (x, y)))
            .map(move |(x, y)| {
                Pixel(
                    origin + Point::new(x as i32, y as i32),
                    BinaryColor::from(glyph.pixel(x, y) != invert),
                )
            })
            .filter(|Pixel(point, _)| bounds.contains(*point));
        target.draw_iter(pixels)
    }
}

/// Which half of the split keyboard the display is on
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayHalf {
    /// The half connected to the host, it shows the keyboard status
    Primary,
    Secondary,
}

pub struct StatusRenderer {
    half: DisplayHalf,
}

impl StatusRenderer {
    pub fn new(half: DisplayHalf) -> Self {
        Self { half }
    }

    pub fn render<D>(&self, status: &StatusSnapshot, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self.half {
            DisplayHalf::Primary => self.render_status(status, target),
            DisplayHalf::Secondary => self.render_banner(target),
        }
    }

    fn render_status<D>(&self, status: &StatusSnapshot, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let modifiers = status.modifiers;
        let held = [modifiers.gui(), modifiers.alt(), modifiers.ctrl(), modifiers.shift()];
        let icons = [glyphs::GUI, glyphs::ALT, glyphs::CTRL, glyphs::SHIFT];
        for ((glyph, x), held) in icons.iter().zip(MODIFIER_COLUMNS).zip(held) {
            glyph.draw(target, Point::new(x, MODIFIER_ROW), held)?;
        }

        let caps = if status.caps_word {
            glyphs::CAPS_WORD
        } else {
            glyphs::CAPS_LOCK
        };
        caps.draw(target, CAPS_ORIGIN, status.caps_lock)?;

        glyphs::LAYER_LABEL.draw(target, LAYER_LABEL_ORIGIN, false)?;
        match layer_glyph(status.layer) {
            Some(glyph) => glyph.draw(target, LAYER_GLYPH_ORIGIN, false),
            None => Rectangle::new(LAYER_GLYPH_ORIGIN, Size::new(24, 24))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
                .draw(target),
        }
    }

    fn render_banner<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;
        let center = target.bounding_box().center();
        Text::with_alignment(
            "lani",
            center,
            MonoTextStyle::new(&FONT_10X20, BinaryColor::On),
            Alignment::Center,
        )
        .draw(target)?;
        Text::with_alignment(
            "kyria",
            center + Point::new(0, 16),
            MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
            Alignment::Center,
        )
        .draw(target)?;
        Ok(())
    }
}

/// Glyph shown for a layer, `None` leaves the slot blank
fn layer_glyph(layer: LayerId) -> Option<Glyph> {
    match layer {
        LayerId::Nav => Some(glyphs::NAV),
        LayerId::Sym => Some(glyphs::SYMBOL),
        LayerId::Function => Some(glyphs::FUNCTION),
        LayerId::Daily => Some(glyphs::DAILY),
        LayerId::Qwerty | LayerId::Adjust => None,
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use lani_types::modifier::HidModifiers;

    use super::*;

    const WIDTH: usize = 128;
    const HEIGHT: usize = 64;

    struct FrameBuffer {
        pixels: [[bool; WIDTH]; HEIGHT],
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: [[false; WIDTH]; HEIGHT],
            }
        }

        fn region_matches(&self, glyph: &Glyph, origin: Point, invert: bool) -> bool {
            (0..glyph.size().height).all(|y| {
                (0..glyph.size().width).all(|x| {
                    let px = self.pixels[origin.y as usize + y as usize][origin.x as usize + x as usize];
                    px == (glyph.pixel(x, y) != invert)
                })
            })
        }

        fn lit(&self) -> usize {
            self.pixels.iter().flatten().filter(|&&p| p).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as usize) < WIDTH && (point.y as usize) < HEIGHT {
                    self.pixels[point.y as usize][point.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn status(layer: LayerId, modifiers: HidModifiers, caps_lock: bool, caps_word: bool) -> StatusSnapshot {
        StatusSnapshot {
            layer,
            modifiers,
            caps_lock,
            caps_word,
        }
    }

    #[test]
    fn test_glyph_page_layout() {
        // First byte of the GUI glyph is 0x60: rows 5 and 6 of column 0
        assert!(!glyphs::GUI.pixel(0, 4));
        assert!(glyphs::GUI.pixel(0, 5));
        assert!(glyphs::GUI.pixel(0, 6));
        assert!(!glyphs::GUI.pixel(0, 7));
        // Second page row starts at byte `width`
        assert_eq!(glyphs::GUI.pixel(1, 8), 0x81 & 1 == 1);
        assert!(!glyphs::GUI.pixel(20, 0));
    }

    #[test]
    fn test_primary_base_layer() {
        let mut fb = FrameBuffer::new();
        let renderer = StatusRenderer::new(DisplayHalf::Primary);
        renderer
            .render(&status(LayerId::Qwerty, HidModifiers::new(), false, false), &mut fb)
            .unwrap();
        for (glyph, x) in [glyphs::GUI, glyphs::ALT, glyphs::CTRL, glyphs::SHIFT]
            .iter()
            .zip(MODIFIER_COLUMNS)
        {
            assert!(fb.region_matches(glyph, Point::new(x, 0), false));
        }
        assert!(fb.region_matches(&glyphs::CAPS_LOCK, CAPS_ORIGIN, false));
        assert!(fb.region_matches(&glyphs::LAYER_LABEL, LAYER_LABEL_ORIGIN, false));
        let blank = Glyph::new(24, 24, &[0; 72]);
        assert!(fb.region_matches(&blank, LAYER_GLYPH_ORIGIN, false));
    }

    #[test]
    fn test_primary_held_modifiers_inverted() {
        let mut fb = FrameBuffer::new();
        let renderer = StatusRenderer::new(DisplayHalf::Primary);
        let modifiers = HidModifiers::new().with_left_shift(true).with_right_gui(true);
        renderer
            .render(&status(LayerId::Nav, modifiers, true, true), &mut fb)
            .unwrap();
        assert!(fb.region_matches(&glyphs::GUI, Point::new(0, 0), true));
        assert!(fb.region_matches(&glyphs::ALT, Point::new(26, 0), false));
        assert!(fb.region_matches(&glyphs::CTRL, Point::new(52, 0), false));
        assert!(fb.region_matches(&glyphs::SHIFT, Point::new(78, 0), true));
        assert!(fb.region_matches(&glyphs::CAPS_WORD, CAPS_ORIGIN, true));
        assert!(fb.region_matches(&glyphs::NAV, LAYER_GLYPH_ORIGIN, false));
    }

    #[test]
    fn test_layer_glyphs() {
        let renderer = StatusRenderer::new(DisplayHalf::Primary);
        for (layer, glyph) in [
            (LayerId::Sym, glyphs::SYMBOL),
            (LayerId::Function, glyphs::FUNCTION),
            (LayerId::Daily, glyphs::DAILY),
        ] {
            let mut fb = FrameBuffer::new();
            renderer
                .render(&status(layer, HidModifiers::new(), false, false), &mut fb)
                .unwrap();
            assert!(fb.region_matches(&glyph, LAYER_GLYPH_ORIGIN, false));
        }
    }

    #[test]
    fn test_secondary_banner() {
        let mut fb = FrameBuffer::new();
        let renderer = StatusRenderer::new(DisplayHalf::Secondary);
        renderer
            .render(&status(LayerId::Nav, HidModifiers::new(), true, false), &mut fb)
            .unwrap();
        assert!(fb.lit() > 0);
        // Status glyphs aren't drawn on the secondary half
        assert!(!fb.region_matches(&glyphs::LAYER_LABEL, LAYER_LABEL_ORIGIN, false));
    }
}
