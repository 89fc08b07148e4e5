//! Colors and the legacy code alphabet
//!
//! The legacy encoding drives everything here: sixteen named colors with
//! single-character codes (`0`-`9`, `a`-`f`), five format flags
//! (`k`/`l`/`m`/`n`/`o`), and the reset code (`r`). Arbitrary RGB colors sit
//! alongside the named ones in [`Color`]; how an RGB value survives a trip
//! through the legacy alphabet is the codec's concern (see
//! [`crate::legacy`]), not this module's.

use std::fmt;

/// Marker character introducing a legacy color or format code.
pub const COLOR_CHAR: char = '§';

/// The sixteen colors of the legacy alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors, in code order (`0` through `f`).
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The single-character legacy code for this color.
    pub fn code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '0' => Some(NamedColor::Black),
            '1' => Some(NamedColor::DarkBlue),
            '2' => Some(NamedColor::DarkGreen),
            '3' => Some(NamedColor::DarkAqua),
            '4' => Some(NamedColor::DarkRed),
            '5' => Some(NamedColor::DarkPurple),
            '6' => Some(NamedColor::Gold),
            '7' => Some(NamedColor::Gray),
            '8' => Some(NamedColor::DarkGray),
            '9' => Some(NamedColor::Blue),
            'a' => Some(NamedColor::Green),
            'b' => Some(NamedColor::Aqua),
            'c' => Some(NamedColor::Red),
            'd' => Some(NamedColor::LightPurple),
            'e' => Some(NamedColor::Yellow),
            'f' => Some(NamedColor::White),
            _ => None,
        }
    }

    /// The snake_case wire name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NamedColor::ALL
            .iter()
            .copied()
            .find(|color| color.name() == name)
    }

    /// Reference RGB value of this color, as rendered by stock clients.
    pub fn rgb(self) -> u32 {
        match self {
            NamedColor::Black => 0x000000,
            NamedColor::DarkBlue => 0x0000AA,
            NamedColor::DarkGreen => 0x00AA00,
            NamedColor::DarkAqua => 0x00AAAA,
            NamedColor::DarkRed => 0xAA0000,
            NamedColor::DarkPurple => 0xAA00AA,
            NamedColor::Gold => 0xFFAA00,
            NamedColor::Gray => 0xAAAAAA,
            NamedColor::DarkGray => 0x555555,
            NamedColor::Blue => 0x5555FF,
            NamedColor::Green => 0x55FF55,
            NamedColor::Aqua => 0x55FFFF,
            NamedColor::Red => 0xFF5555,
            NamedColor::LightPurple => 0xFF55FF,
            NamedColor::Yellow => 0xFFFF55,
            NamedColor::White => 0xFFFFFF,
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

/// A display color: one of the sixteen legacy colors, or an arbitrary
/// 24-bit RGB value.
///
/// Once a color is RGB it stays RGB through every transformation; only the
/// legacy codec degrades it (to the six-digit compatibility sequence), and
/// [`Color::nearest_named`] is available to consumers that must target the
/// pure legacy palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Rgb(u32),
}

impl Color {
    pub const WHITE: Color = Color::Named(NamedColor::White);

    /// Parses a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Color::Rgb)
    }

    /// Parses a wire color value: a named color or a `#rrggbb` string.
    pub fn parse(value: &str) -> Option<Color> {
        NamedColor::from_name(value)
            .map(Color::Named)
            .or_else(|| Color::from_hex(value))
    }

    /// The wire representation: the snake_case name for named colors,
    /// `#rrggbb` for RGB values. Only the low 24 bits of an RGB value are
    /// meaningful.
    pub fn serialized_name(&self) -> String {
        match self {
            Color::Named(named) => named.name().to_owned(),
            Color::Rgb(rgb) => format!("#{:06x}", rgb & 0xFF_FFFF),
        }
    }

    pub fn rgb(&self) -> u32 {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(rgb) => *rgb,
        }
    }

    /// The legacy color class closest to this color (Euclidean distance in
    /// RGB space). Named colors map to themselves.
    pub fn nearest_named(&self) -> NamedColor {
        match self {
            Color::Named(named) => *named,
            Color::Rgb(rgb) => {
                let mut best = NamedColor::White;
                let mut best_distance = u32::MAX;
                for candidate in NamedColor::ALL {
                    let distance = rgb_distance(*rgb, candidate.rgb());
                    if distance < best_distance {
                        best = candidate;
                        best_distance = distance;
                    }
                }
                best
            }
        }
    }
}

fn rgb_distance(a: u32, b: u32) -> u32 {
    let dr = ((a >> 16) & 0xFF) as i32 - ((b >> 16) & 0xFF) as i32;
    let dg = ((a >> 8) & 0xFF) as i32 - ((b >> 8) & 0xFF) as i32;
    let db = (a & 0xFF) as i32 - (b & 0xFF) as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// A single recognized legacy code: a color, a format flag, or reset.
///
/// The RGB introducer (`x`) is not part of this enum; the legacy codec
/// handles the six-digit compatibility sequence itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyCode {
    Color(NamedColor),
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
    Reset,
}

impl LegacyCode {
    pub fn from_char(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(LegacyCode::Obfuscated),
            'l' => Some(LegacyCode::Bold),
            'm' => Some(LegacyCode::Strikethrough),
            'n' => Some(LegacyCode::Underlined),
            'o' => Some(LegacyCode::Italic),
            'r' => Some(LegacyCode::Reset),
            other => NamedColor::from_code(other).map(LegacyCode::Color),
        }
    }

    pub fn code(self) -> char {
        match self {
            LegacyCode::Color(color) => color.code(),
            LegacyCode::Obfuscated => 'k',
            LegacyCode::Bold => 'l',
            LegacyCode::Strikethrough => 'm',
            LegacyCode::Underlined => 'n',
            LegacyCode::Italic => 'o',
            LegacyCode::Reset => 'r',
        }
    }
}

impl fmt::Display for LegacyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}
