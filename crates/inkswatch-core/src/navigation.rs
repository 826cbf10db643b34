//! Keyboard navigation across the picker sections.
//!
//! Every key-down inside the open picker lands in [`handle_key`]. It may
//! report a new color through `on_change` and may move the active section;
//! it never owns the color itself.

use crate::color::TRANSPARENT;
use crate::config::PickerConfig;
use crate::keys::{KeyPress, PickerKey, picker_key_index};
use crate::palette::Palette;
use crate::section::{ActiveSection, SectionState};

/// What the host should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a picker key; let the host handle it.
    Ignored,
    /// Consumed by the picker.
    Handled,
    /// Close the picker.
    Close,
}

/// Everything the handler reads besides the key.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    pub palette: &'a Palette,
    pub color: Option<&'a str>,
    pub custom_colors: &'a [String],
    pub config: &'a PickerConfig,
}

impl NavContext<'_> {
    /// Color used for palette lookups; no color reads as transparent.
    fn lookup_color(&self) -> &str {
        self.color.unwrap_or(TRANSPARENT)
    }

    /// Sections reachable with Tab, in order.
    pub fn available_sections(&self) -> Vec<ActiveSection> {
        let mut sections = Vec::with_capacity(4);
        if !self.custom_colors.is_empty() {
            sections.push(ActiveSection::Custom);
        }
        sections.push(ActiveSection::Default);
        let has_shades = self
            .palette
            .lookup(self.lookup_color())
            .is_some_and(|m| m.shade.is_some());
        if has_shades {
            sections.push(ActiveSection::Shades);
        }
        if self.config.show_input {
            sections.push(ActiveSection::Hex);
        }
        sections
    }
}

/// Dispatch one key press.
pub fn handle_key(
    press: &KeyPress,
    ctx: &NavContext<'_>,
    sections: &mut SectionState,
    on_change: &mut dyn FnMut(&str),
) -> KeyOutcome {
    log::trace!("Color picker key {:?} in {:?}", press, sections.active());

    match press.key {
        PickerKey::Escape => KeyOutcome::Close,
        PickerKey::Tab => {
            cycle_section(press.modifiers.shift, ctx, sections, on_change);
            KeyOutcome::Handled
        }
        PickerKey::Digit(_) | PickerKey::Letter(_) => {
            if hotkey(press, ctx, sections, on_change) {
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }
        PickerKey::ArrowLeft
        | PickerKey::ArrowRight
        | PickerKey::ArrowUp
        | PickerKey::ArrowDown => {
            if arrow(press.key, ctx, sections, on_change) {
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }
    }
}

fn cycle_section(
    backwards: bool,
    ctx: &NavContext<'_>,
    sections: &mut SectionState,
    on_change: &mut dyn FnMut(&str),
) {
    let available = ctx.available_sections();
    let len = available.len();
    let current = sections
        .active()
        .and_then(|active| available.iter().position(|&s| s == active));
    let next = match (current, backwards) {
        (Some(i), false) => (i + 1) % len,
        (Some(i), true) => (i + len - 1) % len,
        (None, false) => 0,
        (None, true) => len - 1,
    };
    let next = available[next];
    sections.set(next);

    match next {
        ActiveSection::Custom => {
            if let Some(first) = ctx.custom_colors.first() {
                on_change(first);
            }
        }
        ActiveSection::Default => {
            if ctx.palette.lookup(ctx.lookup_color()).is_none() {
                if let Some(fallback) = default_fallback(ctx) {
                    on_change(fallback);
                }
            }
        }
        ActiveSection::Shades | ActiveSection::Hex => {}
    }
}

/// Color picked when the default grid is entered from outside the palette.
fn default_fallback<'a>(ctx: &NavContext<'a>) -> Option<&'a str> {
    let shade = ctx.config.default_shade_index;
    ctx.palette
        .get("black")
        .or_else(|| ctx.palette.entries().first().map(|e| &e.value))
        .map(|value| value.representative(shade))
}

fn hotkey(
    press: &KeyPress,
    ctx: &NavContext<'_>,
    sections: &mut SectionState,
    on_change: &mut dyn FnMut(&str),
) -> bool {
    // Typing into the hex input must not pick swatches.
    if sections.is_active(ActiveSection::Hex) || press.modifiers.has_command() {
        return false;
    }

    match press.key {
        PickerKey::Digit(n @ 1..=9) if press.modifiers.shift => {
            let Some(found) = ctx.palette.lookup(ctx.lookup_color()) else {
                return false;
            };
            if found.shade.is_none() {
                return false;
            }
            let shade = ctx
                .palette
                .get(found.name)
                .and_then(|value| value.shades())
                .and_then(|shades| shades.get(usize::from(n) - 1));
            match shade {
                Some(color) => {
                    on_change(color);
                    sections.set(ActiveSection::Shades);
                    true
                }
                None => false,
            }
        }
        PickerKey::Digit(n @ 1..=9) => match ctx.custom_colors.get(usize::from(n) - 1) {
            Some(color) => {
                on_change(color);
                sections.set(ActiveSection::Custom);
                true
            }
            None => false,
        },
        PickerKey::Letter(letter) if !press.modifiers.shift => {
            let entry = picker_key_index(letter).and_then(|i| ctx.palette.entries().get(i));
            match entry {
                Some(entry) => {
                    on_change(entry.value.representative(ctx.config.default_shade_index));
                    sections.set(ActiveSection::Default);
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

fn arrow(
    key: PickerKey,
    ctx: &NavContext<'_>,
    sections: &SectionState,
    on_change: &mut dyn FnMut(&str),
) -> bool {
    let per_row = ctx.config.colors_per_row;
    let found = ctx.palette.lookup(ctx.lookup_color());

    let next = match sections.active() {
        Some(ActiveSection::Shades) => found
            .and_then(|m| Some((m.shade?, ctx.palette.get(m.name)?.shades()?)))
            .and_then(|(shade, shades)| {
                arrow_index(key, Some(shade), shades.len(), per_row).map(|i| shades[i].as_str())
            }),
        Some(ActiveSection::Default) => {
            let entries = ctx.palette.entries();
            arrow_index(key, found.map(|m| m.index), entries.len(), per_row)
                .map(|i| entries[i].value.representative(ctx.config.default_shade_index))
        }
        Some(ActiveSection::Custom) => {
            let current = ctx
                .color
                .and_then(|color| ctx.custom_colors.iter().position(|c| c == color));
            arrow_index(key, current, ctx.custom_colors.len(), per_row)
                .map(|i| ctx.custom_colors[i].as_str())
        }
        Some(ActiveSection::Hex) | None => None,
    };

    match next {
        Some(color) => {
            on_change(color);
            true
        }
        None => false,
    }
}

/// Move inside a grid of `len` items laid out `per_row` to a row.
///
/// Left/Right wrap through the whole sequence. Down past the last row lands
/// in the same column of the first row; Up past the first row lands in the
/// same column of the last row, or stays put if that row is too short.
/// Without a current item, Right/Down start at the first item and Left/Up at
/// the last.
pub fn arrow_index(
    key: PickerKey,
    current: Option<usize>,
    len: usize,
    per_row: usize,
) -> Option<usize> {
    if len == 0 || per_row == 0 {
        return None;
    }

    let Some(current) = current.filter(|&i| i < len) else {
        return match key {
            PickerKey::ArrowRight | PickerKey::ArrowDown => Some(0),
            PickerKey::ArrowLeft | PickerKey::ArrowUp => Some(len - 1),
            _ => None,
        };
    };

    match key {
        PickerKey::ArrowLeft => Some(if current == 0 { len - 1 } else { current - 1 }),
        PickerKey::ArrowRight => Some((current + 1) % len),
        PickerKey::ArrowDown => {
            let next = current + per_row;
            Some(if next >= len { current % per_row } else { next })
        }
        PickerKey::ArrowUp => {
            let next = if current >= per_row {
                current - per_row
            } else {
                per_row * (len.div_ceil(per_row) - 1) + current
            };
            (next < len).then_some(next)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Modifiers;

    struct Harness {
        palette: Palette,
        custom: Vec<String>,
        config: PickerConfig,
        sections: SectionState,
        changes: Vec<String>,
    }

    impl Harness {
        fn new(custom: &[&str]) -> Self {
            Self {
                palette: Palette::elements(),
                custom: custom.iter().map(|c| c.to_string()).collect(),
                config: PickerConfig::default(),
                sections: SectionState::new(),
                changes: Vec::new(),
            }
        }

        fn press(&mut self, press: KeyPress, color: Option<&str>) -> KeyOutcome {
            let ctx = NavContext {
                palette: &self.palette,
                color,
                custom_colors: &self.custom,
                config: &self.config,
            };
            let changes = &mut self.changes;
            handle_key(&press, &ctx, &mut self.sections, &mut |c: &str| {
                changes.push(c.to_string())
            })
        }

        fn last(&self) -> Option<&str> {
            self.changes.last().map(String::as_str)
        }
    }

    #[test]
    fn test_arrow_index_horizontal_wrap() {
        assert_eq!(arrow_index(PickerKey::ArrowLeft, Some(0), 15, 5), Some(14));
        assert_eq!(arrow_index(PickerKey::ArrowRight, Some(14), 15, 5), Some(0));
        assert_eq!(arrow_index(PickerKey::ArrowRight, Some(4), 15, 5), Some(5));
    }

    #[test]
    fn test_arrow_index_vertical_wrap() {
        assert_eq!(arrow_index(PickerKey::ArrowDown, Some(2), 15, 5), Some(7));
        assert_eq!(arrow_index(PickerKey::ArrowDown, Some(12), 15, 5), Some(2));
        assert_eq!(arrow_index(PickerKey::ArrowUp, Some(7), 15, 5), Some(2));
        assert_eq!(arrow_index(PickerKey::ArrowUp, Some(2), 15, 5), Some(12));
    }

    #[test]
    fn test_arrow_index_ragged_last_row() {
        // 7 items: row 0 = 0..5, row 1 = 5..7.
        assert_eq!(arrow_index(PickerKey::ArrowUp, Some(1), 7, 5), Some(6));
        assert_eq!(arrow_index(PickerKey::ArrowUp, Some(3), 7, 5), None);
        assert_eq!(arrow_index(PickerKey::ArrowDown, Some(3), 7, 5), Some(3));
        assert_eq!(arrow_index(PickerKey::ArrowDown, Some(6), 7, 5), Some(1));
    }

    #[test]
    fn test_arrow_index_without_current() {
        assert_eq!(arrow_index(PickerKey::ArrowRight, None, 3, 5), Some(0));
        assert_eq!(arrow_index(PickerKey::ArrowUp, None, 3, 5), Some(2));
        assert_eq!(arrow_index(PickerKey::ArrowRight, None, 0, 5), None);
        assert_eq!(arrow_index(PickerKey::Tab, Some(1), 3, 5), None);
    }

    #[test]
    fn test_escape_closes() {
        let mut h = Harness::new(&[]);
        assert_eq!(h.press(KeyPress::new(PickerKey::Escape), Some("#fa5252")), KeyOutcome::Close);
        assert!(h.changes.is_empty());
    }

    #[test]
    fn test_tab_cycles_available_sections() {
        let mut h = Harness::new(&["#abcdef", "#123456"]);
        h.sections.set(ActiveSection::Shades);

        h.press(KeyPress::new(PickerKey::Tab), Some("#fa5252"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Hex));

        h.press(KeyPress::new(PickerKey::Tab), Some("#fa5252"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Custom));
        assert_eq!(h.last(), Some("#abcdef"));

        h.press(KeyPress::with_shift(PickerKey::Tab), Some("#abcdef"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Hex));
    }

    #[test]
    fn test_tab_skips_missing_sections() {
        let mut h = Harness::new(&[]);
        h.config.show_input = false;
        h.sections.set(ActiveSection::Default);
        // Black has no shades, no custom colors, no hex input: only default.
        h.press(KeyPress::new(PickerKey::Tab), Some("#1e1e1e"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Default));
        assert!(h.changes.is_empty());
    }

    #[test]
    fn test_tab_from_no_section() {
        let mut h = Harness::new(&[]);
        h.press(KeyPress::new(PickerKey::Tab), Some("#fa5252"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Default));

        let mut h = Harness::new(&[]);
        h.press(KeyPress::with_shift(PickerKey::Tab), Some("#fa5252"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Hex));
    }

    #[test]
    fn test_tab_into_default_from_custom_color() {
        let mut h = Harness::new(&["#abcdef"]);
        h.sections.set(ActiveSection::Custom);
        h.press(KeyPress::new(PickerKey::Tab), Some("#abcdef"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Default));
        assert_eq!(h.last(), Some("#1e1e1e"));
    }

    #[test]
    fn test_letter_hotkey_picks_representative() {
        let mut h = Harness::new(&[]);
        h.sections.set(ActiveSection::Shades);
        // 'r' is the 4th swatch: gray.
        assert_eq!(h.press(KeyPress::new(PickerKey::Letter('r')), None), KeyOutcome::Handled);
        assert_eq!(h.last(), Some("#868e96"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Default));

        // 'w' is black, a single value.
        h.press(KeyPress::new(PickerKey::Letter('w')), None);
        assert_eq!(h.last(), Some("#1e1e1e"));
    }

    #[test]
    fn test_hotkeys_ignored_in_hex_and_with_commands() {
        let mut h = Harness::new(&["#abcdef"]);
        h.sections.set(ActiveSection::Hex);
        assert_eq!(h.press(KeyPress::new(PickerKey::Letter('e')), None), KeyOutcome::Ignored);

        h.sections.set(ActiveSection::Default);
        let ctrl_c = KeyPress {
            key: PickerKey::Letter('c'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        };
        assert_eq!(h.press(ctrl_c, None), KeyOutcome::Ignored);
        assert_eq!(
            h.press(KeyPress::with_shift(PickerKey::Letter('q')), None),
            KeyOutcome::Ignored
        );
        assert!(h.changes.is_empty());
    }

    #[test]
    fn test_digit_hotkeys() {
        let mut h = Harness::new(&["#abcdef", "#123456"]);
        h.sections.set(ActiveSection::Default);

        h.press(KeyPress::new(PickerKey::Digit(2)), Some("#fa5252"));
        assert_eq!(h.last(), Some("#123456"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Custom));

        assert_eq!(
            h.press(KeyPress::new(PickerKey::Digit(4)), Some("#123456")),
            KeyOutcome::Ignored
        );

        h.press(KeyPress::with_shift(PickerKey::Digit(1)), Some("#fa5252"));
        assert_eq!(h.last(), Some("#fff5f5"));
        assert_eq!(h.sections.active(), Some(ActiveSection::Shades));
    }

    #[test]
    fn test_arrows_in_shades() {
        let mut h = Harness::new(&[]);
        h.sections.set(ActiveSection::Shades);
        h.press(KeyPress::new(PickerKey::ArrowRight), Some("#fa5252"));
        assert_eq!(h.last(), Some("#e03131"));
        h.press(KeyPress::new(PickerKey::ArrowRight), Some("#e03131"));
        assert_eq!(h.last(), Some("#fff5f5"));
        // A single-value family has no strip to move in.
        assert_eq!(
            h.press(KeyPress::new(PickerKey::ArrowLeft), Some("#1e1e1e")),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_arrows_in_default_grid() {
        let mut h = Harness::new(&[]);
        h.sections.set(ActiveSection::Default);
        // red is index 4; down goes to index 9 (cyan).
        h.press(KeyPress::new(PickerKey::ArrowDown), Some("#fa5252"));
        assert_eq!(h.last(), Some("#15aabf"));
        // transparent is index 0; left wraps to bronze.
        h.press(KeyPress::new(PickerKey::ArrowLeft), Some("transparent"));
        assert_eq!(h.last(), Some("#a18072"));
    }

    #[test]
    fn test_arrows_in_custom_list() {
        let mut h = Harness::new(&["#000001", "#000002", "#000003"]);
        h.sections.set(ActiveSection::Custom);
        h.press(KeyPress::new(PickerKey::ArrowLeft), Some("#000001"));
        assert_eq!(h.last(), Some("#000003"));
        h.press(KeyPress::new(PickerKey::ArrowDown), Some("#000002"));
        assert_eq!(h.last(), Some("#000002"));
    }

    #[test]
    fn test_arrows_ignored_in_hex() {
        let mut h = Harness::new(&[]);
        h.sections.set(ActiveSection::Hex);
        assert_eq!(
            h.press(KeyPress::new(PickerKey::ArrowLeft), Some("#fa5252")),
            KeyOutcome::Ignored
        );
    }
}
