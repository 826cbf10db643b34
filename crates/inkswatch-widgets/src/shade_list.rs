//! Shade strip of the current color's family.

use egui::{Sense, Ui, vec2};
use inkswatch_core::{
    ActiveSection, FocusSync, Palette, SectionState, ShadeStrip, focus_target, shade_strip,
};

use crate::swatch::{SwatchStyle, swatch_grid};
use crate::{sizing, theme};

pub struct ShadeList<'a> {
    palette: &'a Palette,
    color: Option<&'a str>,
    per_row: usize,
}

impl<'a> ShadeList<'a> {
    pub fn new(palette: &'a Palette, color: Option<&'a str>) -> Self {
        Self {
            palette,
            color,
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
        let swatches = match shade_strip(self.palette, self.color) {
            ShadeStrip::Shades { swatches, .. } => swatches,
            ShadeStrip::NoShades => {
                focus.should_focus(false, None);
                no_shades(ui);
                return None;
            }
        };

        let focus_active =
            focus.should_focus(sections.is_active(ActiveSection::Shades), focus_target(&swatches));
        let grid = swatch_grid(
            ui,
            &swatches,
            self.per_row,
            &SwatchStyle::large(),
            "Shades",
            focus_active,
        );

        let picked = grid.clicked?;
        sections.set(ActiveSection::Shades);
        Some(swatches[picked].color.clone())
    }
}

/// Placeholder row keeping the panel height stable.
fn no_shades(ui: &mut Ui) {
    let size = vec2(ui.available_width(), sizing::LARGE);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        "No shades available for this color",
        egui::FontId::proportional(11.0),
        theme::TEXT_MUTED,
    );
}
