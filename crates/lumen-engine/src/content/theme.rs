/// The page's two color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// localStorage key for the persisted preference.
pub const STORAGE_KEY: &str = "lk-theme";

/// Body class that activates dark styling.
pub const BODY_CLASS: &str = "dark-mode";

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Persisted preference string.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted preference; anything but "dark" is Light.
    pub fn from_stored(raw: &str) -> Theme {
        if raw == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Label for the theme toggle button: the action it offers.
    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}
