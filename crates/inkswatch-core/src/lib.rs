//! inkswatch Core Library
//!
//! Platform-agnostic palette data, custom-color discovery and keyboard
//! navigation for the whiteboard color picker.

pub mod color;
pub mod config;
pub mod element;
pub mod error;
pub mod keys;
pub mod navigation;
pub mod palette;
pub mod picker;
pub mod section;
pub mod swatches;

pub use color::{Rgba8, TRANSPARENT, is_transparent, normalize_input, parse_hex};
pub use config::{COLORS_PER_ROW, DEFAULT_SHADE_INDEX, MAX_CUSTOM_COLORS, PickerConfig};
pub use element::{Element, ElementId, PickerType, most_used_custom_colors};
pub use error::{PickerError, PickerResult};
pub use keys::{DEFAULT_PICKER_KEYS, KeyPress, Modifiers, PickerKey};
pub use navigation::{KeyOutcome, NavContext, arrow_index, handle_key};
pub use palette::{ColorMatch, Palette, PaletteEntry, PaletteValue, is_custom_color};
pub use picker::PickerModel;
pub use section::{ActiveSection, FocusSync, SectionState};
pub use swatches::{
    ShadeStrip, Swatch, custom_swatches, focus_target, palette_swatches, shade_strip,
};
