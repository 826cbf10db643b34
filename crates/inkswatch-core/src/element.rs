//! Drawing elements as seen by the picker, and the most-used custom colors
//! derived from them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::palette::{Palette, is_custom_color};

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// The color-bearing part of a drawing element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub is_deleted: bool,
    pub stroke_color: String,
    pub background_color: String,
}

impl Element {
    pub fn new(stroke_color: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            is_deleted: false,
            stroke_color: stroke_color.into(),
            background_color: background_color.into(),
        }
    }

    /// Mark as deleted (tombstoned elements stay in the scene).
    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }
}

/// Which color a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PickerType {
    CanvasBackground,
    ElementBackground,
    ElementStroke,
}

impl PickerType {
    /// The element field this picker edits, if it edits elements at all.
    pub fn color_of<'a>(&self, element: &'a Element) -> Option<&'a str> {
        match self {
            PickerType::CanvasBackground => None,
            PickerType::ElementBackground => Some(&element.background_color),
            PickerType::ElementStroke => Some(&element.stroke_color),
        }
    }
}

/// Distinct custom colors used by live elements, in order of first use,
/// capped at `limit`.
///
/// The canvas background picker has no elements to draw from and always
/// gets an empty list.
pub fn most_used_custom_colors(
    elements: &[Element],
    picker_type: PickerType,
    palette: &Palette,
    limit: usize,
) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for color in elements
        .iter()
        .filter(|e| !e.is_deleted)
        .filter_map(|e| picker_type.color_of(e))
        .filter(|c| is_custom_color(Some(*c), palette))
    {
        if colors.len() >= limit {
            break;
        }
        if !colors.iter().any(|seen| seen == color) {
            colors.push(color.to_string());
        }
    }
    colors
}
