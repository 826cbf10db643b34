//! Color palettes: ordered families of colors, each either a single value or
//! a strip of shades.
//!
//! The built-in palettes follow open-color, picking five shades per family.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::TRANSPARENT;
use crate::error::{PickerError, PickerResult};

/// Value of one palette family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteValue {
    Single(String),
    Shades(Vec<String>),
}

impl PaletteValue {
    /// The color that stands for this family in the default grid.
    ///
    /// Shade strips shorter than `shade_index` fall back to their last shade.
    pub fn representative(&self, shade_index: usize) -> &str {
        match self {
            PaletteValue::Single(color) => color,
            PaletteValue::Shades(shades) => shades
                .get(shade_index)
                .or_else(|| shades.last())
                .map(String::as_str)
                .unwrap_or(TRANSPARENT),
        }
    }

    pub fn shades(&self) -> Option<&[String]> {
        match self {
            PaletteValue::Single(_) => None,
            PaletteValue::Shades(shades) => Some(shades),
        }
    }

    /// All colors of this family, in order.
    pub fn colors(&self) -> &[String] {
        match self {
            PaletteValue::Single(color) => std::slice::from_ref(color),
            PaletteValue::Shades(shades) => shades,
        }
    }
}

/// A named palette family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub value: PaletteValue,
}

/// Where a color sits in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatch<'a> {
    /// Family key (e.g. "red").
    pub name: &'a str,
    /// Position of the family in the palette grid.
    pub index: usize,
    /// Shade index, when the family is a shade strip.
    pub shade: Option<usize>,
}

/// Ordered mapping of family key to palette value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette, checking keys are unique and non-empty and that no
    /// shade strip is empty.
    pub fn new<N: Into<String>>(entries: Vec<(N, PaletteValue)>) -> PickerResult<Self> {
        let entries: Vec<PaletteEntry> = entries
            .into_iter()
            .map(|(name, value)| PaletteEntry {
                name: name.into(),
                value,
            })
            .collect();

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(PickerError::InvalidPalette(format!(
                    "entry {i} has an empty name"
                )));
            }
            if entries[..i].iter().any(|other| other.name == entry.name) {
                return Err(PickerError::InvalidPalette(format!(
                    "duplicate entry '{}'",
                    entry.name
                )));
            }
            if let PaletteValue::Shades(shades) = &entry.value {
                if shades.is_empty() {
                    return Err(PickerError::InvalidPalette(format!(
                        "entry '{}' has no shades",
                        entry.name
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Parse a palette from a JSON object. Key order is kept.
    pub fn from_json(json: &str) -> PickerResult<Self> {
        let raw: RawPalette = serde_json::from_str(json)?;
        Self::new(raw.0).inspect_err(|e| log::warn!("Rejected palette: {}", e))
    }

    /// Palette for element stroke and background pickers.
    pub fn elements() -> Self {
        Self::open_color(ELEMENT_SHADE_INDEXES)
    }

    /// Palette for the canvas background picker (lighter shades).
    pub fn canvas() -> Self {
        Self::open_color(CANVAS_SHADE_INDEXES)
    }

    fn open_color(shade_indexes: [usize; 5]) -> Self {
        let pick = |family: &[&str; 10]| {
            PaletteValue::Shades(shade_indexes.iter().map(|&i| family[i].to_string()).collect())
        };

        let mut entries = vec![
            entry(TRANSPARENT, PaletteValue::Single(TRANSPARENT.to_string())),
            entry("black", PaletteValue::Single(BLACK.to_string())),
            entry("white", PaletteValue::Single(WHITE.to_string())),
        ];
        entries.extend(OPEN_COLOR.iter().map(|(name, family)| entry(name, pick(family))));
        entries.push(entry(
            "bronze",
            PaletteValue::Shades(BRONZE.iter().map(|c| c.to_string()).collect()),
        ));

        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PaletteValue> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.value)
    }

    /// Flattened set of every color in the palette.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.value.colors().iter().map(String::as_str))
    }

    pub fn contains(&self, color: &str) -> bool {
        self.values().any(|value| value == color)
    }

    /// Resolve a color to its family and shade (first match wins).
    pub fn lookup(&self, color: &str) -> Option<ColorMatch<'_>> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(index, entry)| match &entry.value {
                PaletteValue::Single(value) => (value == color).then_some(ColorMatch {
                    name: &entry.name,
                    index,
                    shade: None,
                }),
                PaletteValue::Shades(shades) => {
                    shades.iter().position(|s| s == color).map(|shade| ColorMatch {
                        name: &entry.name,
                        index,
                        shade: Some(shade),
                    })
                }
            })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::elements()
    }
}

/// Whether `color` is a custom color, i.e. not found anywhere in `palette`.
///
/// No color at all is never custom.
pub fn is_custom_color(color: Option<&str>, palette: &Palette) -> bool {
    match color {
        None => false,
        Some(color) => !palette.contains(color),
    }
}

fn entry(name: &str, value: PaletteValue) -> PaletteEntry {
    PaletteEntry {
        name: name.to_string(),
        value,
    }
}

/// Ordered key/value pairs of a JSON palette object.
struct RawPalette(Vec<(String, PaletteValue)>);

impl<'de> Deserialize<'de> for RawPalette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawPalette;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of color names to a color or a list of shades")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawPalette, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, PaletteValue>()? {
                    entries.push((name, value));
                }
                Ok(RawPalette(entries))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPalette::deserialize(deserializer)?;
        Palette::new(raw.0).map_err(serde::de::Error::custom)
    }
}

/// open-color shades picked for element colors.
const ELEMENT_SHADE_INDEXES: [usize; 5] = [0, 2, 4, 6, 8];
/// open-color shades picked for the canvas background.
const CANVAS_SHADE_INDEXES: [usize; 5] = [0, 1, 2, 3, 4];

const BLACK: &str = "#1e1e1e";
const WHITE: &str = "#ffffff";

// open-color - https://yeun.github.io/open-color/
const OPEN_COLOR: [(&str, [&str; 10]); 11] = [
    ("gray", [
        "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da",
        "#adb5bd", "#868e96", "#495057", "#343a40", "#212529",
    ]),
    ("red", [
        "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787",
        "#ff6b6b", "#fa5252", "#f03e3e", "#e03131", "#c92a2a",
    ]),
    ("pink", [
        "#fff0f6", "#ffdeeb", "#fcc2d7", "#faa2c1", "#f783ac",
        "#f06595", "#e64980", "#d6336c", "#c2255c", "#a61e4d",
    ]),
    ("grape", [
        "#f8f0fc", "#f3d9fa", "#eebefa", "#e599f7", "#da77f2",
        "#cc5de8", "#be4bdb", "#ae3ec9", "#9c36b5", "#862e9c",
    ]),
    ("violet", [
        "#f3f0ff", "#e5dbff", "#d0bfff", "#b197fc", "#9775fa",
        "#845ef7", "#7950f2", "#7048e8", "#6741d9", "#5f3dc4",
    ]),
    ("blue", [
        "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7",
        "#339af0", "#228be6", "#1c7ed6", "#1971c2", "#1864ab",
    ]),
    ("cyan", [
        "#e3fafc", "#c5f6fa", "#99e9f2", "#66d9e8", "#3bc9db",
        "#22b8cf", "#15aabf", "#1098ad", "#0c8599", "#0b7285",
    ]),
    ("teal", [
        "#e6fcf5", "#c3fae8", "#96f2d7", "#63e6be", "#38d9a9",
        "#20c997", "#12b886", "#0ca678", "#099268", "#087f5b",
    ]),
    ("green", [
        "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c",
        "#51cf66", "#40c057", "#37b24d", "#2f9e44", "#2b8a3e",
    ]),
    ("yellow", [
        "#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b",
        "#fcc419", "#fab005", "#f59f00", "#f08c00", "#e67700",
    ]),
    ("orange", [
        "#fff4e6", "#ffe8cc", "#ffd8a8", "#ffc078", "#ffa94d",
        "#ff922b", "#fd7e14", "#f76707", "#e8590c", "#d9480f",
    ]),
];

// Radix bronze, steps 3/5/7/9/11.
const BRONZE: [&str; 5] = ["#f8f1ee", "#eaddd7", "#d2bab0", "#a18072", "#846358"];
