use serde::{Deserialize, Serialize};

/// The two display themes.
///
/// This is a closed set: the toggle command flips between the variants and
/// the persisted flag stores nothing else. `Dark` is the startup default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme. The toggle command is exactly one `flip`.
    pub fn flip(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The fixed palette for this theme.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Dark => &DARK_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        }
    }
}

/// A fixed color triple applied to the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub scrollbar_accent: Rgb,
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, used in markup tags and OSC sequences.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const DARK_PALETTE: Palette = Palette {
    background: Rgb::new(0x00, 0x00, 0x00),
    foreground: Rgb::new(0x00, 0xff, 0x00),
    scrollbar_accent: Rgb::new(0x00, 0xff, 0x00),
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: Rgb::new(0xff, 0xff, 0xff),
    foreground: Rgb::new(0x00, 0x00, 0x00),
    scrollbar_accent: Rgb::new(0x88, 0x88, 0x88),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involutive() {
        assert_eq!(ThemeName::Dark.flip().flip(), ThemeName::Dark);
        assert_eq!(ThemeName::Light.flip().flip(), ThemeName::Light);
    }

    #[test]
    fn test_round_trips_through_str() {
        for theme in [ThemeName::Dark, ThemeName::Light] {
            assert_eq!(ThemeName::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemeName::from_str("solarized"), None);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(0, 255, 0).to_hex(), "#00ff00");
        assert_eq!(Rgb::new(0x88, 0x88, 0x88).to_hex(), "#888888");
    }
}
