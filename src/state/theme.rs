//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read a stored preference. Anything other than `dark` is light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The theme for a switch position.
    #[must_use]
    pub fn from_switch(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value for the body's `data-theme` attribute; `None` removes it.
    #[must_use]
    pub fn body_attribute(self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }
}
