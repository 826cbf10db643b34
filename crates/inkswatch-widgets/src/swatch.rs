//! Swatch buttons and the grids they sit in.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, EventFilter, FontId, Pos2, Rect, Response, Sense,
    Stroke, StrokeKind, Ui, Vec2, WidgetInfo, WidgetType, vec2,
};
use inkswatch_core::{Swatch, parse_hex};

use crate::{sizing, theme};

/// Convert a picker color string to `Color32`, mid-gray if unparseable.
pub fn to_color32(color: &str) -> Color32 {
    match parse_hex(color) {
        Some(c) => Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a),
        None => Color32::from_rgb(128, 128, 128),
    }
}

/// Style for swatch buttons.
#[derive(Clone)]
pub struct SwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
}

impl Default for SwatchStyle {
    fn default() -> Self {
        Self::large()
    }
}

impl SwatchStyle {
    /// Palette and shade swatch
    pub fn large() -> Self {
        Self {
            size: vec2(sizing::LARGE, sizing::LARGE),
        }
    }

    /// Custom color swatch
    pub fn medium() -> Self {
        Self {
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
        }
    }
}

/// A clickable swatch, outside the normal tab order.
pub struct SwatchButton<'a> {
    swatch: &'a Swatch,
    aria_label: &'a str,
    style: SwatchStyle,
}

impl<'a> SwatchButton<'a> {
    pub fn new(swatch: &'a Swatch, aria_label: &'a str) -> Self {
        Self {
            swatch,
            aria_label,
            style: SwatchStyle::default(),
        }
    }

    pub fn style(mut self, style: SwatchStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            let painter = ui.painter();

            if self.swatch.transparent {
                paint_checker(ui, rect);
            } else {
                painter.rect_filled(rect, radius, to_color32(&self.swatch.color));
            }

            if self.swatch.with_border {
                let stroke = Stroke::new(1.0, theme::BORDER);
                painter.rect_stroke(rect, radius, stroke, StrokeKind::Inside);
            }

            if self.swatch.active {
                // Inner offset ring, like the whiteboard toolbar swatches
                painter.rect_stroke(
                    rect.shrink(1.0),
                    radius,
                    Stroke::new(2.0, Color32::from_gray(30)),
                    StrokeKind::Inside,
                );
            }

            if response.has_focus() {
                let stroke = Stroke::new(1.5, theme::ACCENT);
                painter.rect_stroke(rect.expand(2.0), radius, stroke, StrokeKind::Outside);
            }

            if let Some(hotkey) = &self.swatch.hotkey {
                painter.text(
                    Pos2::new(rect.right() - 3.0, rect.bottom() - 2.0),
                    Align2::RIGHT_BOTTOM,
                    hotkey,
                    FontId::proportional(9.0),
                    hotkey_color(self.swatch),
                );
            }
        }

        // Tab and arrows belong to the picker's own navigation.
        if response.has_focus() {
            ui.memory_mut(|mem| {
                mem.set_focus_lock_filter(
                    response.id,
                    EventFilter {
                        tab: true,
                        horizontal_arrows: true,
                        vertical_arrows: true,
                        escape: true,
                    },
                )
            });
        }

        let enabled = ui.is_enabled();
        let label = self.aria_label.to_string();
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, &label));

        response
            .on_hover_text(&self.swatch.title)
            .on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// Readable label color on top of a swatch.
fn hotkey_color(swatch: &Swatch) -> Color32 {
    let light = parse_hex(&swatch.color)
        .map(|c| c.is_transparent() || c.luminance() > 0.6)
        .unwrap_or(true);
    if light {
        theme::TEXT_MUTED
    } else {
        Color32::from_white_alpha(200)
    }
}

fn paint_checker(ui: &Ui, rect: Rect) {
    let cell = rect.width() / 4.0;
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), theme::CHECKER_LIGHT);
    for row in 0..4 {
        for col in 0..4 {
            if (row + col) % 2 == 1 {
                let min = rect.min + vec2(col as f32 * cell, row as f32 * cell);
                painter.rect_filled(
                    Rect::from_min_size(min, vec2(cell, cell)),
                    CornerRadius::ZERO,
                    theme::CHECKER_DARK,
                );
            }
        }
    }
}

/// What happened in a swatch grid this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridResponse {
    /// Index of the clicked swatch.
    pub clicked: Option<usize>,
    /// Index of the swatch that gained keyboard focus.
    pub focused: Option<usize>,
}

/// Lay swatches out `per_row` to a row. With `focus_active`, keyboard focus
/// is moved to the active swatch.
pub fn swatch_grid(
    ui: &mut Ui,
    swatches: &[Swatch],
    per_row: usize,
    style: &SwatchStyle,
    aria_label: &str,
    focus_active: bool,
) -> GridResponse {
    let mut grid = GridResponse::default();

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing = vec2(sizing::GAP, sizing::GAP);
        for (row, chunk) in swatches.chunks(per_row.max(1)).enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = vec2(sizing::GAP, 0.0);
                for (col, swatch) in chunk.iter().enumerate() {
                    let index = row * per_row.max(1) + col;
                    let response = SwatchButton::new(swatch, aria_label)
                        .style(style.clone())
                        .show(ui);

                    if focus_active && swatch.active {
                        response.request_focus();
                    }
                    if response.clicked() {
                        grid.clicked = Some(index);
                    }
                    if response.gained_focus() {
                        grid.focused = Some(index);
                    }
                }
            });
        }
    });

    grid
}
