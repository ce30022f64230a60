#![forbid(unsafe_code)]

//! Light/dark theme flag and palettes.
//!
//! The flag is the only persisted state in the application: key `"theme"`,
//! values `"light"`/`"dark"`, default light when absent. It is loaded
//! before the first render so there is no visual flash of the wrong theme.

use miniapps_core::style::{Color, Style};

/// Storage key for the persisted theme flag.
pub const THEME_KEY: &str = "theme";

/// The persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    /// Light theme (the default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeFlag {
    /// Storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized falls back to light.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Status-bar glyph: moon invites dark mode, sun invites light.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Chrome background (nav and status rows).
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text.
    pub muted: Color,
    /// Accent for titles, focus, and the active tab.
    pub accent: Color,
    /// Positive feedback (correct answer, start affordance).
    pub success: Color,
    /// Negative feedback (wrong answer, error messages).
    pub error: Color,
    /// Selection background.
    pub highlight: Color,
}

impl Palette {
    /// Palette for a theme flag.
    #[must_use]
    pub const fn for_theme(flag: ThemeFlag) -> &'static Self {
        match flag {
            ThemeFlag::Light => &LIGHT,
            ThemeFlag::Dark => &DARK,
        }
    }

    /// Base body style.
    #[must_use]
    pub const fn body(&self) -> Style {
        Style {
            fg: Some(self.text),
            bg: Some(self.bg),
            bold: false,
        }
    }

    /// Chrome row style.
    #[must_use]
    pub const fn chrome(&self) -> Style {
        Style {
            fg: Some(self.text),
            bg: Some(self.surface),
            bold: false,
        }
    }

    /// Muted text on the body background.
    #[must_use]
    pub const fn muted_text(&self) -> Style {
        Style {
            fg: Some(self.muted),
            bg: Some(self.bg),
            bold: false,
        }
    }

    /// Accent text on the body background.
    #[must_use]
    pub const fn accent_text(&self) -> Style {
        Style {
            fg: Some(self.accent),
            bg: Some(self.bg),
            bold: true,
        }
    }
}

/// Light palette.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb {
        r: 245,
        g: 245,
        b: 250,
    },
    surface: Color::Rgb {
        r: 225,
        g: 228,
        b: 240,
    },
    text: Color::Rgb {
        r: 30,
        g: 32,
        b: 40,
    },
    muted: Color::Rgb {
        r: 110,
        g: 115,
        b: 130,
    },
    accent: Color::Rgb {
        r: 0,
        g: 95,
        b: 204,
    },
    success: Color::Rgb {
        r: 30,
        g: 130,
        b: 60,
    },
    error: Color::Rgb {
        r: 190,
        g: 40,
        b: 40,
    },
    highlight: Color::Rgb {
        r: 205,
        g: 220,
        b: 245,
    },
};

/// Dark palette.
pub const DARK: Palette = Palette {
    bg: Color::Rgb {
        r: 18,
        g: 19,
        b: 26,
    },
    surface: Color::Rgb {
        r: 34,
        g: 36,
        b: 48,
    },
    text: Color::Rgb {
        r: 225,
        g: 228,
        b: 235,
    },
    muted: Color::Rgb {
        r: 140,
        g: 145,
        b: 160,
    },
    accent: Color::Rgb {
        r: 100,
        g: 170,
        b: 255,
    },
    success: Color::Rgb {
        r: 80,
        g: 200,
        b: 120,
    },
    error: Color::Rgb {
        r: 235,
        g: 100,
        b: 100,
    },
    highlight: Color::Rgb {
        r: 50,
        g: 60,
        b: 90,
    },
};
