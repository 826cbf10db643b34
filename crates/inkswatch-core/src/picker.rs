//! Toolkit-independent state of one open color picker.

use crate::config::PickerConfig;
use crate::element::{Element, PickerType, most_used_custom_colors};
use crate::keys::KeyPress;
use crate::navigation::{KeyOutcome, NavContext, handle_key};
use crate::palette::Palette;
use crate::section::{ActiveSection, SectionState};

/// State created when the picker opens and dropped when it closes.
///
/// The picker never stores the color: the host passes the current color in
/// and receives changes through `on_change`.
#[derive(Debug, Clone)]
pub struct PickerModel {
    picker_type: PickerType,
    custom_colors: Vec<String>,
    sections: SectionState,
    config: PickerConfig,
}

impl PickerModel {
    /// Open a picker. Custom colors are computed here once and kept for the
    /// picker's lifetime, even if elements change while it is open.
    pub fn mount(
        elements: &[Element],
        picker_type: PickerType,
        palette: &Palette,
        config: PickerConfig,
    ) -> Self {
        let custom_colors = match picker_type {
            PickerType::CanvasBackground => Vec::new(),
            _ => most_used_custom_colors(elements, picker_type, palette, config.max_custom_colors),
        };
        log::debug!(
            "Opened {:?} color picker with {} custom colors",
            picker_type,
            custom_colors.len()
        );

        Self {
            picker_type,
            custom_colors,
            sections: SectionState::new(),
            config,
        }
    }

    pub fn picker_type(&self) -> PickerType {
        self.picker_type
    }

    pub fn custom_colors(&self) -> &[String] {
        &self.custom_colors
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Show or hide the hex input section; also drops it from Tab order.
    pub fn set_show_input(&mut self, show_input: bool) {
        self.config.show_input = show_input;
    }

    pub fn active_section(&self) -> Option<ActiveSection> {
        self.sections.active()
    }

    pub fn sections(&self) -> &SectionState {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionState {
        &mut self.sections
    }

    /// Run once per frame before drawing: picks the starting section the
    /// first time no section is active.
    pub fn sync(&mut self, color: Option<&str>, palette: &Palette) {
        self.sections.initialize(color, palette);
    }

    /// Forward a key press to keyboard navigation.
    pub fn handle_key(
        &mut self,
        press: &KeyPress,
        palette: &Palette,
        color: Option<&str>,
        on_change: &mut dyn FnMut(&str),
    ) -> KeyOutcome {
        let ctx = NavContext {
            palette,
            color,
            custom_colors: &self.custom_colors,
            config: &self.config,
        };
        handle_key(press, &ctx, &mut self.sections, on_change)
    }
}
