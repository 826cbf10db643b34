//! The color picker popover.

use egui::{Id, Pos2, Rect, Ui, WidgetInfo, WidgetType, vec2};
use inkswatch_core::{
    ActiveSection, Element, FocusSync, KeyOutcome, Palette, PickerConfig, PickerModel, PickerType,
};

use crate::color_input::{ColorInput, HexInputState};
use crate::color_list::PickerColorList;
use crate::custom_list::CustomColorList;
use crate::input::key_presses;
use crate::layout::{panel_frame, section_label};
use crate::shade_list::ShadeList;
use crate::sizing;

/// State of one open picker. Create it when the popover opens and drop it
/// when it closes; the host keeps the color itself.
#[derive(Debug, Clone)]
pub struct PickerState {
    model: PickerModel,
    custom_focus: FocusSync,
    default_focus: FocusSync,
    shade_focus: FocusSync,
    hex_focus: FocusSync,
    hex: HexInputState,
}

impl PickerState {
    /// Open a picker over `elements`. Most-used custom colors are taken now
    /// and not refreshed while the picker stays open.
    pub fn open(
        elements: &[Element],
        picker_type: PickerType,
        palette: &Palette,
        config: PickerConfig,
    ) -> Self {
        Self {
            model: PickerModel::mount(elements, picker_type, palette, config),
            custom_focus: FocusSync::new(),
            default_focus: FocusSync::new(),
            shade_focus: FocusSync::new(),
            hex_focus: FocusSync::new(),
            hex: HexInputState::default(),
        }
    }

    pub fn model(&self) -> &PickerModel {
        &self.model
    }

    pub fn active_section(&self) -> Option<ActiveSection> {
        self.model.active_section()
    }
}

/// Result of showing the picker for one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PickerResponse {
    /// Color reported this frame; the host should apply it.
    pub changed: Option<String>,
    /// The user asked to close the picker.
    pub close: bool,
}

/// Position of the popover relative to its anchor.
#[derive(Clone, Copy, Default)]
pub enum PickerPosition {
    /// Below the anchor (for top toolbars)
    #[default]
    Below,
    /// Above the anchor (for bottom toolbars)
    Above,
}

/// Controlled color picker: custom colors, palette grid, shades, hex input.
pub struct Picker<'a> {
    state: &'a mut PickerState,
    palette: &'a Palette,
    color: Option<&'a str>,
    label: &'a str,
    show_input: Option<bool>,
    position: PickerPosition,
}

impl<'a> Picker<'a> {
    pub fn new(
        state: &'a mut PickerState,
        palette: &'a Palette,
        color: Option<&'a str>,
        label: &'a str,
    ) -> Self {
        Self {
            state,
            palette,
            color,
            label,
            show_input: None,
            position: PickerPosition::Below,
        }
    }

    /// Show or hide the hex input (defaults to the picker config).
    pub fn show_input(mut self, show_input: bool) -> Self {
        self.show_input = Some(show_input);
        self
    }

    /// Position the popover above the anchor.
    pub fn above(mut self) -> Self {
        self.position = PickerPosition::Above;
        self
    }

    /// Position the popover below the anchor.
    pub fn below(mut self) -> Self {
        self.position = PickerPosition::Below;
        self
    }

    /// Show the picker as a foreground popover next to `anchor_rect`.
    pub fn popover(self, ctx: &egui::Context, anchor_rect: Rect) -> PickerResponse {
        let panel_height = 260.0;
        let pos = match self.position {
            PickerPosition::Below => Pos2::new(anchor_rect.left(), anchor_rect.bottom() + 8.0),
            PickerPosition::Above => {
                Pos2::new(anchor_rect.left(), anchor_rect.top() - panel_height - 8.0)
            }
        };

        egui::Area::new(Id::new("inkswatch_color_picker"))
            .fixed_pos(pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| panel_frame().show(ui, |ui| self.show(ui)).inner)
            .inner
    }

    /// Show the picker inline.
    pub fn show(self, ui: &mut Ui) -> PickerResponse {
        let Picker {
            state,
            palette,
            color,
            label,
            show_input,
            ..
        } = self;

        let mut response = PickerResponse::default();

        if let Some(show_input) = show_input {
            state.model.set_show_input(show_input);
        }
        state.model.sync(color, palette);
        let config = state.model.config().clone();

        // Keys first, so section switches show up as focus moves this frame.
        let mut handled = Vec::new();
        for (press, event) in key_presses(ui) {
            let outcome = state.model.handle_key(&press, palette, color, &mut |c: &str| {
                response.changed = Some(c.to_string())
            });
            match outcome {
                KeyOutcome::Ignored => {}
                KeyOutcome::Handled => handled.push(event),
                KeyOutcome::Close => {
                    log::debug!("Color picker closed from keyboard");
                    response.close = true;
                    handled.push(event);
                }
            }
        }
        if !handled.is_empty() {
            ui.input_mut(|i| i.events.retain(|e| !handled.contains(e)));
        }

        // A color reported by a key this frame is not applied by the host
        // yet; draw with it so focus follows the new color, not the old one.
        let key_color = response.changed.clone();
        let shown = key_color.as_deref().or(color);

        let PickerState {
            model,
            custom_focus,
            default_focus,
            shade_focus,
            hex_focus,
            hex,
        } = state;
        let custom_colors = model.custom_colors().to_vec();
        let sections = model.sections_mut();

        ui.set_width(sizing::PANEL_WIDTH);
        let panel = ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = vec2(0.0, 4.0);
            let mut picked = None;

            if !custom_colors.is_empty() {
                section_label(ui, "Most used custom colors");
                let list = CustomColorList::new(&custom_colors, shown, "Most used custom colors")
                    .per_row(config.colors_per_row);
                if let Some(c) = list.show(ui, sections, custom_focus) {
                    picked = Some(c);
                }
                ui.add_space(8.0);
            }

            section_label(ui, "Colors");
            let list = PickerColorList::new(palette, shown, label)
                .shade_index(config.default_shade_index)
                .per_row(config.colors_per_row);
            if let Some(c) = list.show(ui, sections, default_focus) {
                picked = Some(c);
            }
            ui.add_space(8.0);

            section_label(ui, "Shades");
            let list = ShadeList::new(palette, shown).per_row(config.colors_per_row);
            if let Some(c) = list.show(ui, sections, shade_focus) {
                picked = Some(c);
            }

            if config.show_input {
                ui.add_space(8.0);
                section_label(ui, "Hex code");
                if let Some(c) = ColorInput::new(shown, label).show(ui, sections, hex_focus, hex) {
                    picked = Some(c);
                }
            }

            picked
        });
        panel
            .response
            .widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, "Color picker"));

        if let Some(color) = panel.inner {
            response.changed = Some(color);
        }
        response
    }
}
