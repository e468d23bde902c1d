use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Local storage key for the saved theme.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute set on `<html>` that the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(String);

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: it shows the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-icon bi bi-moon-fill",
            Theme::Dark => "theme-icon bi bi-sun-fill",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Light.icon_class().contains("moon"));
        assert!(Theme::Dark.icon_class().contains("sun"));
    }

    #[test]
    fn test_stored_dark_differs_from_server_render() {
        // the server renders the default; a stored dark theme must be applied
        // after hydration, which changes both the icon and the root attribute
        let server = Theme::default();
        let stored: Theme = Theme::Dark.to_string().parse().unwrap();
        assert_ne!(server.icon_class(), stored.icon_class());
        assert_ne!(server.as_str(), stored.as_str());
    }
}
