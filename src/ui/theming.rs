// SPDX-License-Identifier: MPL-2.0
//! Theme mode handling: light, dark, or follow the system.

use dark_light;
use iced::Theme;
use serde::{Deserialize, Serialize};

/// Theme preference persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The Iced theme this mode resolves to right now.
    #[must_use]
    pub fn effective_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The mode the header toggle switches to.
    ///
    /// System resolves to a concrete choice on the first toggle, so the
    /// persisted preference stays stable afterwards.
    #[must_use]
    pub fn toggled(self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_resolve_to_matching_iced_theme() {
        assert_eq!(ThemeMode::Light.effective_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.effective_theme(), Theme::Dark);
    }

    #[test]
    fn toggling_flips_between_light_and_dark() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        // System lands on a concrete mode either way.
        assert!(matches!(
            ThemeMode::System.toggled(),
            ThemeMode::Light | ThemeMode::Dark
        ));
    }
}
