//! Hex code input.

use egui::{TextEdit, Ui, WidgetInfo, WidgetType};
use inkswatch_core::{ActiveSection, FocusSync, SectionState, normalize_input};

use crate::theme;

/// Text being edited, kept apart from the picker color so half-typed input
/// survives across frames.
#[derive(Debug, Clone, Default)]
pub struct HexInputState {
    text: String,
    synced: Option<String>,
}

impl HexInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    fn reset(&mut self, color: Option<&str>) {
        self.text = display_text(color);
        self.synced = color.map(str::to_string);
    }
}

fn display_text(color: Option<&str>) -> String {
    color.unwrap_or_default().trim_start_matches('#').to_string()
}

pub struct ColorInput<'a> {
    color: Option<&'a str>,
    label: &'a str,
}

impl<'a> ColorInput<'a> {
    pub fn new(color: Option<&'a str>, label: &'a str) -> Self {
        Self { color, label }
    }

    /// Show the input. Returns the typed color once it parses.
    pub fn show(
        self,
        ui: &mut Ui,
        sections: &mut SectionState,
        focus: &mut FocusSync,
        state: &mut HexInputState,
    ) -> Option<String> {
        if state.synced.as_deref() != self.color {
            state.reset(self.color);
        }

        let mut changed = None;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("#").color(theme::TEXT_MUTED));

            let response = ui.add(
                TextEdit::singleline(&mut state.text)
                    .desired_width(ui.available_width())
                    .char_limit(11)
                    .lock_focus(true),
            );

            if focus.should_focus(sections.is_active(ActiveSection::Hex), Some("hex")) {
                response.request_focus();
            }
            if response.gained_focus() {
                sections.set(ActiveSection::Hex);
            }
            if response.changed() {
                let value = state.text.to_ascii_lowercase();
                state.text = value.trim_start_matches('#').to_string();
                changed = normalize_input(&value);
            }
            if response.lost_focus() {
                state.reset(self.color);
            }

            let enabled = ui.is_enabled();
            let label = self.label.to_string();
            response.widget_info(|| WidgetInfo::labeled(WidgetType::TextEdit, enabled, &label));
        });

        changed
    }
}
