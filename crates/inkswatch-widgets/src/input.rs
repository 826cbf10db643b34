//! Translation of egui key events into picker key presses.

use egui::{Event, Key, Ui};
use inkswatch_core::{KeyPress, Modifiers, PickerKey};

/// Key-down events of this frame that the picker understands, paired with
/// the egui event they came from.
pub fn key_presses(ui: &Ui) -> Vec<(KeyPress, Event)> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| key_press(event).map(|press| (press, event.clone())))
            .collect()
    })
}

/// Convert one egui event. Releases and unrelated keys yield `None`.
pub fn key_press(event: &Event) -> Option<KeyPress> {
    let Event::Key {
        key,
        physical_key,
        pressed: true,
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    // Shift+1 is "!" on most layouts; digits go by physical position.
    let key = match physical_key {
        Some(physical) if digit(*physical).is_some() => *physical,
        _ => *key,
    };

    Some(KeyPress {
        key: picker_key(key)?,
        modifiers: Modifiers {
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
            alt: modifiers.alt,
            meta: modifiers.mac_cmd,
        },
    })
}

fn picker_key(key: Key) -> Option<PickerKey> {
    match key {
        Key::Tab => Some(PickerKey::Tab),
        Key::Escape => Some(PickerKey::Escape),
        Key::ArrowLeft => Some(PickerKey::ArrowLeft),
        Key::ArrowRight => Some(PickerKey::ArrowRight),
        Key::ArrowUp => Some(PickerKey::ArrowUp),
        Key::ArrowDown => Some(PickerKey::ArrowDown),
        _ => digit(key).map(PickerKey::Digit).or_else(|| letter(key).map(PickerKey::Letter)),
    }
}

fn digit(key: Key) -> Option<u8> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

fn letter(key: Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
