//! egui widgets for the inkswatch color picker.
//!
//! - **Picker**: the popover panel, owning section state and key dispatch
//! - **Lists**: default palette grid, shade strip, most-used custom colors
//! - **Input**: hex code text field
//! - **Swatch**: the shared swatch button painter

pub mod color_input;
pub mod color_list;
pub mod custom_list;
pub mod input;
pub mod layout;
pub mod picker;
pub mod shade_list;
pub mod swatch;

pub use color_input::ColorInput;
pub use color_list::PickerColorList;
pub use custom_list::CustomColorList;
pub use input::{key_press, key_presses};
pub use layout::{panel_frame, section_label};
pub use picker::{Picker, PickerPosition, PickerResponse, PickerState};
pub use shade_list::ShadeList;
pub use swatch::{SwatchButton, SwatchStyle, to_color32};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Palette and shade swatches
    pub const LARGE: f32 = 28.0;
    /// Custom color swatches
    pub const MEDIUM: f32 = 24.0;
    /// Gap between swatches
    pub const GAP: f32 = 4.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Picker panel width
    pub const PANEL_WIDTH: f32 = 170.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Checkerboard squares behind transparent swatches
    pub const CHECKER_LIGHT: Color32 = Color32::from_gray(255);
    pub const CHECKER_DARK: Color32 = Color32::from_gray(214);
}
