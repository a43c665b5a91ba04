// ABOUTME: Color handling for the aqilha-deck application
// ABOUTME: Defines RGB colors and the fixed palette shared by every slide

use std::fmt;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex without a leading `#`, as DrawingML `srgbClr` expects
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// The three colors applied uniformly across the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub title: Rgb,
    pub body: Rgb,
}

impl Palette {
    /// Dark olive green background, orange titles, white body text
    pub const AQILHA: Palette = Palette {
        background: Rgb::new(85, 107, 47),
        title: Rgb::new(255, 165, 0),
        body: Rgb::new(255, 255, 255),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::AQILHA
    }
}
