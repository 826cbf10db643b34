//! Color values as the picker sees them: strings from the palette or the
//! document, plus parsing into RGBA for painting.

use serde::{Deserialize, Serialize};

/// Keyword used by palettes and elements for "no paint".
pub const TRANSPARENT: &str = "transparent";

/// RGBA8 color, parsed from a color string for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Relative luminance in 0.0..=1.0 (sRGB weights, no linearization).
    ///
    /// Used to pick a readable hotkey label color on top of a swatch.
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or `transparent`.
pub fn parse_hex(color: &str) -> Option<Rgba8> {
    let color = color.trim();
    if color.eq_ignore_ascii_case(TRANSPARENT) {
        return Some(Rgba8::TRANSPARENT);
    }
    let digits = color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let short = |i: usize| -> Option<u8> {
        let v = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
        Some(v * 17)
    };
    let long = |i: usize| -> Option<u8> { u8::from_str_radix(&digits[i..i + 2], 16).ok() };

    match digits.len() {
        3 => Some(Rgba8::opaque(short(0)?, short(1)?, short(2)?)),
        4 => Some(Rgba8::new(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Rgba8::opaque(long(0)?, long(2)?, long(4)?)),
        8 => Some(Rgba8::new(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => None,
    }
}

/// Whether a color string means "no paint".
///
/// Covers the keyword and the alpha-zero hex forms (`#rgb0`, `#rrggbb00`).
pub fn is_transparent(color: &str) -> bool {
    let color = color.trim();
    if color.eq_ignore_ascii_case(TRANSPARENT) {
        return true;
    }
    match color.strip_prefix('#') {
        Some(digits) if digits.len() == 4 => digits.ends_with('0'),
        Some(digits) if digits.len() == 8 => digits.ends_with("00"),
        _ => false,
    }
}

/// Normalize free-form text typed into the hex input.
///
/// Returns the color to report, or `None` when the text is not a color yet
/// (e.g. half-typed). Hex is accepted with or without the leading `#` and is
/// always returned `#`-prefixed and lowercase.
pub fn normalize_input(input: &str) -> Option<String> {
    let value = input.trim().to_ascii_lowercase();
    if value == TRANSPARENT {
        return Some(value);
    }
    let digits = value.strip_prefix('#').unwrap_or(&value);
    let candidate = format!("#{digits}");
    parse_hex(&candidate).map(|_| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(parse_hex("#fa5252"), Some(Rgba8::opaque(0xfa, 0x52, 0x52)));
        assert_eq!(parse_hex("#fff"), Some(Rgba8::opaque(255, 255, 255)));
        assert_eq!(parse_hex("#11223344"), Some(Rgba8::new(0x11, 0x22, 0x33, 0x44)));
        assert_eq!(parse_hex("#abcd"), Some(Rgba8::new(0xaa, 0xbb, 0xcc, 0xdd)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex("fa5252"), None);
        assert_eq!(parse_hex("#fa525"), None);
        assert_eq!(parse_hex("#ggg"), None);
        assert_eq!(parse_hex("#ée"), None);
        assert_eq!(parse_hex("red"), None);
    }

    #[test]
    fn test_transparent_forms() {
        assert!(is_transparent("transparent"));
        assert!(is_transparent("#fff0"));
        assert!(is_transparent("#ffffff00"));
        assert!(!is_transparent("#ffffff"));
        assert!(parse_hex("transparent").unwrap().is_transparent());
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("FA5252").as_deref(), Some("#fa5252"));
        assert_eq!(normalize_input("#abc").as_deref(), Some("#abc"));
        assert_eq!(normalize_input(" Transparent ").as_deref(), Some("transparent"));
        assert_eq!(normalize_input("fa52"), Some("#fa52".to_string()));
        assert_eq!(normalize_input("fa5"), Some("#fa5".to_string()));
        assert_eq!(normalize_input("fa"), None);
        assert_eq!(normalize_input("zzzzzz"), None);
        assert_eq!(normalize_input(""), None);
    }

    #[test]
    fn test_luminance_orders_black_and_white() {
        assert!(Rgba8::opaque(0, 0, 0).luminance() < 0.01);
        assert!(Rgba8::opaque(255, 255, 255).luminance() > 0.99);
    }
}
