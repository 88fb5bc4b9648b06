//! Theme Selection

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Cosmetic theme; drives the body class only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Colorful];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Colorful => "colorful",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Colorful => "Colorful",
        }
    }

    /// Root-level class, `theme-<name>`
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.name())
    }
}

impl FromStr for Theme {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ShowcaseError::UnknownTheme(s.to_string()))
    }
}
