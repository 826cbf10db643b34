//! Most-used custom colors.

use egui::Ui;
use inkswatch_core::{ActiveSection, FocusSync, SectionState, custom_swatches, focus_target};

use crate::swatch::{SwatchStyle, swatch_grid};

pub struct CustomColorList<'a> {
    colors: &'a [String],
    color: Option<&'a str>,
    label: &'a str,
    per_row: usize,
}

impl<'a> CustomColorList<'a> {
    pub fn new(colors: &'a [String], color: Option<&'a str>, label: &'a str) -> Self {
        Self {
            colors,
            color,
            label,
            per_row: inkswatch_core::COLORS_PER_ROW,
        }
    }

    pub fn per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row;
        self
    }

    pub fn show(
        self,
        ui: &mut Ui,
        sections: &mut SectionState,
        focus: &mut FocusSync,
    ) -> Option<String> {
        let swatches = custom_swatches(self.colors, self.color);
        let focus_active =
            focus.should_focus(sections.is_active(ActiveSection::Custom), focus_target(&swatches));

        let grid = swatch_grid(
            ui,
            &swatches,
            self.per_row,
            &SwatchStyle::medium(),
            self.label,
            focus_active,
        );

        let picked = grid.clicked?;
        sections.set(ActiveSection::Custom);
        Some(swatches[picked].color.clone())
    }
}
