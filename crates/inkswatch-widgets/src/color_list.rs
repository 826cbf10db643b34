//! Default palette grid.

use egui::Ui;
use inkswatch_core::{
    ActiveSection, FocusSync, Palette, SectionState, focus_target, palette_swatches,
};

use crate::swatch::{SwatchStyle, swatch_grid};

/// One large swatch per palette family, with `qwert/asdfg/zxcvb` mnemonics.
///
/// Clicking a swatch, or the swatch gaining focus, picks the family's
/// representative shade and activates the default section.
pub struct PickerColorList<'a> {
    palette: &'a Palette,
    color: Option<&'a str>,
    label: &'a str,
    shade_index: usize,
    per_row: usize,
}

impl<'a> PickerColorList<'a> {
    pub fn new(palette: &'a Palette, color: Option<&'a str>, label: &'a str) -> Self {
        Self {
            palette,
            color,
            label,
            shade_index: inkswatch_core::DEFAULT_SHADE_INDEX,
            per_row: inkswatch_core::COLORS_PER_ROW,
        }
    }

    pub fn shade_index(mut self, shade_index: usize) -> Self {
        self.shade_index = shade_index;
        self
    }

    pub fn per_row(mut self, per_row: usize) -> Self {
        self.per_row = per_row;
        self
    }

    /// Show the grid. Returns the picked color, if any.
    pub fn show(
        self,
        ui: &mut Ui,
        sections: &mut SectionState,
        focus: &mut FocusSync,
    ) -> Option<String> {
        let swatches = palette_swatches(self.palette, self.color, self.label, self.shade_index);
        let focus_active =
            focus.should_focus(sections.is_active(ActiveSection::Default), focus_target(&swatches));

        let grid = swatch_grid(
            ui,
            &swatches,
            self.per_row,
            &SwatchStyle::large(),
            self.label,
            focus_active,
        );

        let picked = grid.clicked.or(grid.focused)?;
        sections.set(ActiveSection::Default);
        Some(swatches[picked].color.clone())
    }
}
