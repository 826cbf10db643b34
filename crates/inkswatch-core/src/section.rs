//! Active-section state shared by the sub-panels of one picker.

use serde::{Deserialize, Serialize};

use crate::palette::{Palette, is_custom_color};

/// The sub-panel that currently owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveSection {
    /// Most-used custom colors.
    Custom,
    /// The default palette grid.
    Default,
    /// Shade strip of the current family.
    Shades,
    /// Hex text input.
    Hex,
}

/// Which section is active, if any.
///
/// Owned by a single picker instance and lent to its sub-panels, so only one
/// section can be active per picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    active: Option<ActiveSection>,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActiveSection> {
        self.active
    }

    pub fn is_active(&self, section: ActiveSection) -> bool {
        self.active == Some(section)
    }

    pub fn set(&mut self, section: ActiveSection) {
        if self.active != Some(section) {
            log::debug!("Color picker section: {:?} -> {:?}", self.active, section);
            self.active = Some(section);
        }
    }

    /// Pick the starting section if none is active yet: custom when the
    /// current color is outside the palette, shades otherwise.
    ///
    /// Returns true if a section was set.
    pub fn initialize(&mut self, color: Option<&str>, palette: &Palette) -> bool {
        if self.active.is_some() {
            return false;
        }
        let section = if is_custom_color(color, palette) {
            ActiveSection::Custom
        } else {
            ActiveSection::Shades
        };
        self.set(section);
        true
    }
}

/// Decides when a swatch list must pull keyboard focus to its active swatch.
///
/// Focus moves when the list's section is active and either the section just
/// became active or the focus target changed.
#[derive(Debug, Clone, Default)]
pub struct FocusSync {
    last: Option<(bool, Option<String>)>,
}

impl FocusSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_focus(&mut self, section_active: bool, target: Option<&str>) -> bool {
        let current = (section_active, target.map(str::to_string));
        if self.last.as_ref() == Some(&current) {
            return false;
        }
        self.last = Some(current);
        section_active && target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        let state = SectionState::new();
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_initialize_custom_color() {
        let mut state = SectionState::new();
        assert!(state.initialize(Some("#abcdef"), &Palette::elements()));
        assert_eq!(state.active(), Some(ActiveSection::Custom));
    }

    #[test]
    fn test_initialize_palette_color_and_none() {
        let mut state = SectionState::new();
        state.initialize(Some("#fa5252"), &Palette::elements());
        assert_eq!(state.active(), Some(ActiveSection::Shades));

        let mut state = SectionState::new();
        state.initialize(None, &Palette::elements());
        assert_eq!(state.active(), Some(ActiveSection::Shades));
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut state = SectionState::new();
        state.initialize(Some("#fa5252"), &Palette::elements());
        state.set(ActiveSection::Hex);
        // A later custom color does not re-run initialization.
        assert!(!state.initialize(Some("#abcdef"), &Palette::elements()));
        assert_eq!(state.active(), Some(ActiveSection::Hex));
    }

    #[test]
    fn test_focus_sync_on_activation_and_target_change() {
        let mut sync = FocusSync::new();
        assert!(!sync.should_focus(false, Some("red")));
        assert!(sync.should_focus(true, Some("red")));
        // Steady state: no repeated focus requests.
        assert!(!sync.should_focus(true, Some("red")));
        assert!(sync.should_focus(true, Some("blue")));
        assert!(!sync.should_focus(true, None));
        assert!(!sync.should_focus(false, Some("blue")));
        assert!(sync.should_focus(true, Some("blue")));
    }
}
