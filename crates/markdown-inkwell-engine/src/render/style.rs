use std::num::NonZeroU32;
use std::str::FromStr;

use crate::parsing::HeadingLevel;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color '{0}', expected #rgb, #rrggbb or #aarrggbb")]
    Invalid(String),
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb`, `#rrggbb` or `#aarrggbb`. Alpha is accepted and dropped.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        let parsed = match hex.len() {
            3 => {
                let short = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 0x11);
                (short(0), short(1), short(2))
            }
            6 => (channel(0..2), channel(2..4), channel(4..6)),
            8 => (channel(2..4), channel(4..6), channel(6..8)),
            _ => return Err(invalid()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Font size and color for one heading level.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub font_size: f32,
    pub color: Color,
}

/// Everything the render pipeline reads to style a document.
///
/// Owned by the host and passed in explicitly; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    /// Page foreground, used for text outside any styled run.
    pub text: Color,
    /// Color of plain runs.
    pub regular_text: Color,
    pub font_family: String,
    pub font_size: f32,
    /// Heading styles for levels 1, 2 and 3.
    pub headings: [HeadingStyle; 3],
    pub bold: Color,
    pub italic: Color,
    pub link: Color,
    pub code_background: Color,
    pub code_font_family: String,
    pub bullet: Color,
    pub default_image_width: NonZeroU32,
    pub image_resize_enabled: bool,
}

impl RenderStyle {
    pub fn heading(&self, level: HeadingLevel) -> &HeadingStyle {
        &self.headings[usize::from(level.get() - 1)]
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1e, 0x1e, 0x1e),
            text: Color::rgb(0xd4, 0xd4, 0xd4),
            regular_text: Color::rgb(0xd4, 0xd4, 0xd4),
            font_family: "Consolas".to_string(),
            font_size: 12.0,
            headings: [
                HeadingStyle {
                    font_size: 26.0,
                    color: Color::rgb(0x56, 0x9c, 0xd6),
                },
                HeadingStyle {
                    font_size: 18.0,
                    color: Color::rgb(0x4e, 0xc9, 0xb0),
                },
                HeadingStyle {
                    font_size: 16.0,
                    color: Color::rgb(0xdc, 0xdc, 0xaa),
                },
            ],
            bold: Color::rgb(0xf4, 0x43, 0x36),
            italic: Color::rgb(0xff, 0xeb, 0x3b),
            link: Color::rgb(0x4f, 0xc3, 0xf7),
            code_background: Color::rgb(0x2d, 0x2d, 0x30),
            code_font_family: "Consolas".to_string(),
            bullet: Color::rgb(0x80, 0x80, 0x80),
            default_image_width: NonZeroU32::new(400).unwrap_or(NonZeroU32::MIN),
            image_resize_enabled: true,
        }
    }
}
