//! View models for the three swatch sections. Widgets paint these as-is.

use crate::color::{TRANSPARENT, is_transparent};
use crate::keys::picker_key;
use crate::palette::Palette;

/// One clickable swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Stable key: family name for palette swatches, the color otherwise.
    pub key: String,
    /// Color reported when the swatch is picked.
    pub color: String,
    /// Hotkey label drawn on the swatch.
    pub hotkey: Option<String>,
    /// Marks the swatch matching the current color.
    pub active: bool,
    /// Paint a checkerboard instead of a fill.
    pub transparent: bool,
    /// Light swatches get an outline so they stay visible.
    pub with_border: bool,
    /// Hover text.
    pub title: String,
}

impl Swatch {
    fn new(key: String, color: &str, hotkey: Option<String>, active: bool, title: String) -> Self {
        let color = if color.is_empty() { TRANSPARENT } else { color };
        let transparent = is_transparent(color);
        Self {
            key,
            color: color.to_string(),
            hotkey,
            active,
            transparent,
            with_border: transparent || color == "#ffffff",
            title,
        }
    }
}

/// Default palette grid: one swatch per family, showing its representative.
pub fn palette_swatches(
    palette: &Palette,
    color: Option<&str>,
    label: &str,
    shade_index: usize,
) -> Vec<Swatch> {
    let matched = palette.lookup(color.unwrap_or(TRANSPARENT)).map(|m| m.name);
    palette
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Swatch::new(
                entry.name.clone(),
                entry.value.representative(shade_index),
                picker_key(index).map(String::from),
                matched == Some(entry.name.as_str()),
                format!("{label} — {}", entry.name),
            )
        })
        .collect()
}

/// Shade strip of the current color's family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeStrip {
    Shades { family: String, swatches: Vec<Swatch> },
    /// The current color is custom or a single-value family.
    NoShades,
}

pub fn shade_strip(palette: &Palette, color: Option<&str>) -> ShadeStrip {
    let Some(found) = palette.lookup(color.unwrap_or(TRANSPARENT)) else {
        return ShadeStrip::NoShades;
    };
    let Some(shades) = palette.get(found.name).and_then(|v| v.shades()) else {
        return ShadeStrip::NoShades;
    };

    let swatches = shades
        .iter()
        .enumerate()
        .map(|(i, shade)| {
            Swatch::new(
                shade.clone(),
                shade,
                Some((i + 1).to_string()),
                found.shade == Some(i),
                format!("{} - {}", found.name, i + 1),
            )
        })
        .collect();

    ShadeStrip::Shades {
        family: found.name.to_string(),
        swatches,
    }
}

/// Most-used custom colors, hotkeys 1..=n.
pub fn custom_swatches(colors: &[String], color: Option<&str>) -> Vec<Swatch> {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Swatch::new(
                c.clone(),
                c,
                Some((i + 1).to_string()),
                color == Some(c.as_str()),
                c.clone(),
            )
        })
        .collect()
}

/// Key of the swatch that should hold focus, if any.
pub fn focus_target(swatches: &[Swatch]) -> Option<&str> {
    swatches.iter().find(|s| s.active).map(|s| s.key.as_str())
}
