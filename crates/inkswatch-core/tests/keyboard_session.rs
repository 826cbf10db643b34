//! A keyboard-only session through an element stroke picker.

use inkswatch_core::{
    ActiveSection, Element, KeyOutcome, KeyPress, Palette, PickerConfig, PickerKey, PickerModel,
    PickerType,
};

struct Host {
    palette: Palette,
    color: Option<String>,
    model: PickerModel,
}

impl Host {
    fn open(color: &str, elements: &[Element]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let palette = Palette::elements();
        let config = PickerConfig::default();
        let mut model = PickerModel::mount(elements, PickerType::ElementStroke, &palette, config);
        model.sync(Some(color), &palette);
        Self {
            palette,
            color: Some(color.to_string()),
            model,
        }
    }

    fn press(&mut self, press: KeyPress) -> KeyOutcome {
        let mut changed = None;
        let outcome = self.model.handle_key(
            &press,
            &self.palette,
            self.color.as_deref(),
            &mut |c: &str| changed = Some(c.to_string()),
        );
        if changed.is_some() {
            self.color = changed;
        }
        outcome
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

#[test]
fn test_session_from_custom_color() {
    let elements = vec![
        Element::new("#0a0a0a", "transparent"),
        Element::new("#0b0b0b", "transparent"),
        Element::new("#fa5252", "transparent"),
    ];
    let mut host = Host::open("#0b0b0b", &elements);
    assert_eq!(host.model.custom_colors(), ["#0a0a0a", "#0b0b0b"]);
    assert_eq!(host.model.active_section(), Some(ActiveSection::Custom));

    host.press(KeyPress::new(PickerKey::ArrowRight));
    assert_eq!(host.color(), Some("#0a0a0a"));

    // Into the palette grid: a custom color falls back to black.
    host.press(KeyPress::new(PickerKey::Tab));
    assert_eq!(host.model.active_section(), Some(ActiveSection::Default));
    assert_eq!(host.color(), Some("#1e1e1e"));

    // Mnemonic for red, then into its shades.
    host.press(KeyPress::new(PickerKey::Letter('t')));
    assert_eq!(host.color(), Some("#fa5252"));
    host.press(KeyPress::new(PickerKey::Tab));
    assert_eq!(host.model.active_section(), Some(ActiveSection::Shades));

    host.press(KeyPress::new(PickerKey::ArrowLeft));
    assert_eq!(host.color(), Some("#ff8787"));

    host.press(KeyPress::new(PickerKey::Tab));
    assert_eq!(host.model.active_section(), Some(ActiveSection::Hex));
    // Letters belong to the text input now.
    assert_eq!(host.press(KeyPress::new(PickerKey::Letter('q'))), KeyOutcome::Ignored);

    assert_eq!(host.press(KeyPress::new(PickerKey::Escape)), KeyOutcome::Close);
    assert_eq!(host.color(), Some("#ff8787"));
}

#[test]
fn test_session_from_palette_color() {
    let mut host = Host::open("#228be6", &[]);
    assert_eq!(host.model.active_section(), Some(ActiveSection::Shades));

    host.press(KeyPress::with_shift(PickerKey::Digit(5)));
    assert_eq!(host.color(), Some("#1971c2"));

    // No custom colors: shift-tab from shades lands on the grid.
    host.press(KeyPress::with_shift(PickerKey::Tab));
    assert_eq!(host.model.active_section(), Some(ActiveSection::Default));
    host.press(KeyPress::new(PickerKey::ArrowUp));
    // blue (index 8) up to index 3: gray.
    assert_eq!(host.color(), Some("#868e96"));
}
