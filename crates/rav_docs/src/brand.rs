//! Brand constants shared by the Word and PowerPoint generators.
//!
//! Values come from the brand style guide: Deep Teal, Warm Coral, Dark Navy
//! and a warm off-white background. Word documents use Calibri (Roboto is
//! not reliably installed on reader machines); the deck template uses Roboto.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Upper-case hex without `#`, the form OOXML attributes expect.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

// -- Word palette -----------------------------------------------------------

pub const DEEP_TEAL: Rgb = Rgb(0x1C, 0x72, 0x68);
pub const WARM_CORAL: Rgb = Rgb(0xE8, 0x70, 0x3A);
pub const DARK_NAVY: Rgb = Rgb(0x1D, 0x2E, 0x38);
pub const LIGHT_BG: Rgb = Rgb(0xF8, 0xF6, 0xF3);
pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

pub const TABLE_HEADER_BG: Rgb = DEEP_TEAL;
pub const TABLE_ALT_ROW: Rgb = Rgb(0xF0, 0xF7, 0xF6);
pub const TABLE_BORDER: Rgb = Rgb(0xCC, 0xCC, 0xCC);

/// Footer text and page numbers.
pub const FOOTER_GREY: Rgb = Rgb(0x99, 0x99, 0x99);
/// Captions and completion dates.
pub const CAPTION_GREY: Rgb = Rgb(0x66, 0x66, 0x66);
/// Blockquote text.
pub const QUOTE_GREY: Rgb = Rgb(0x55, 0x55, 0x55);

pub const BRAND_FONT: &str = "Calibri";

// -- Deck palette -----------------------------------------------------------

pub const TEAL: Rgb = DEEP_TEAL;
pub const CORAL: Rgb = WARM_CORAL;
pub const CREAM: Rgb = LIGHT_BG;
pub const NAVY: Rgb = DARK_NAVY;
pub const SAND: Rgb = Rgb(0xF0, 0xEB, 0xE3);
pub const MUTED: Rgb = Rgb(0x6B, 0x7B, 0x85);
pub const SUCCESS: Rgb = Rgb(0x1F, 0xA6, 0x6E);
/// Light teal used for subtitles on teal backgrounds.
pub const TEAL_TINT: Rgb = Rgb(0xB0, 0xD8, 0xD2);
/// Softer teal used for taglines on teal backgrounds.
pub const TEAL_MIST: Rgb = Rgb(0x8C, 0xC5, 0xBC);
/// Outline of the image placeholder card.
pub const SAND_EDGE: Rgb = Rgb(0xD0, 0xCB, 0xC3);

pub const DECK_FONT: &str = "Roboto";

// -- Copy -------------------------------------------------------------------

pub const BRAND_NAME: &str = "RENT-A-VACATION";
pub const TAGLINE: &str = "Name Your Price. Book Your Paradise.";
pub const ASSISTANT_NAME: &str = "Ask RAVIO";
pub const ASSISTANT_TAGLINE: &str = "Just Say Where. RAVIO Does the Rest.";
pub const WEBSITE: &str = "rent-a-vacation.com";
pub const SUPPORT_EMAIL: &str = "support@rent-a-vacation.com";

// -- Units ------------------------------------------------------------------

/// Font size in half-points, the unit `w:sz` uses.
pub fn half_points(pt: f32) -> usize {
    (pt * 2.0).round() as usize
}

/// Points to twentieths of a point (paragraph spacing).
pub fn pt_twips(pt: f32) -> u32 {
    (pt * 20.0).round() as u32
}

/// Centimetres to twentieths of a point (margins, indents).
pub fn cm_twips(cm: f32) -> i32 {
    (cm * 1440.0 / 2.54).round() as i32
}

/// Inches to English Metric Units (drawing coordinates).
pub fn inches_emu(inches: f64) -> i64 {
    (inches * 914_400.0).round() as i64
}

/// Points to English Metric Units (line widths).
pub fn pt_emu(pt: f64) -> i64 {
    (pt * 12_700.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_hex_values() {
        assert_eq!(DEEP_TEAL.hex(), "1C7268");
        assert_eq!(WARM_CORAL.hex(), "E8703A");
        assert_eq!(DARK_NAVY.hex(), "1D2E38");
        assert_eq!(LIGHT_BG.hex(), "F8F6F3");
        assert_eq!(WHITE.hex(), "FFFFFF");
        assert_eq!(TABLE_HEADER_BG.hex(), "1C7268");
        assert_eq!(TABLE_ALT_ROW.hex(), "F0F7F6");
        assert_eq!(TABLE_BORDER.hex(), "CCCCCC");
    }

    #[test]
    fn test_deck_hex_values() {
        assert_eq!(SAND.hex(), "F0EBE3");
        assert_eq!(MUTED.hex(), "6B7B85");
        assert_eq!(SUCCESS.hex(), "1FA66E");
        assert_eq!(TEAL_TINT.hex(), "B0D8D2");
        assert_eq!(TEAL_MIST.hex(), "8CC5BC");
    }

    #[test]
    fn test_display_has_hash() {
        assert_eq!(WARM_CORAL.to_string(), "#E8703A");
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(half_points(9.0), 18);
        assert_eq!(half_points(28.0), 56);
        assert_eq!(pt_twips(2.0), 40);
        assert_eq!(cm_twips(2.0), 1134);
        assert_eq!(cm_twips(2.5), 1417);
        assert_eq!(cm_twips(1.0), 567);
        assert_eq!(inches_emu(1.0), 914_400);
        assert_eq!(inches_emu(7.5), 6_858_000);
        assert_eq!(pt_emu(1.0), 12_700);
    }
}
