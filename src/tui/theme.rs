use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    // UI elements
    pub border: ColorValue,
    pub border_focused: ColorValue,
    pub header: ColorValue,

    // Text colors
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,
    pub text_disabled: ColorValue,
    pub text_highlight: ColorValue,

    // Widget colors
    pub display: ColorValue,
    pub operator_key: ColorValue,
    pub selection: ColorValue,

    // Status colors
    pub error: ColorValue,
    pub info: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ColorValue {
    fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    pub fn to_color(&self) -> Color {
        match self {
            ColorValue::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ColorValue::Named(name) => match name.as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "dark_gray" | "dark_grey" => Color::DarkGray,
                _ => Color::White,
            },
        }
    }
}

impl Theme {
    /// Look a built-in theme up by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                border: ColorValue::named("dark_gray"),
                border_focused: ColorValue::named("cyan"),
                header: ColorValue::named("cyan"),

                text_primary: ColorValue::named("white"),
                text_secondary: ColorValue::named("gray"),
                text_disabled: ColorValue::named("dark_gray"),
                text_highlight: ColorValue::named("yellow"),

                display: ColorValue::named("white"),
                operator_key: ColorValue::named("yellow"),
                selection: ColorValue::Rgb { r: 50, g: 60, b: 90 },

                error: ColorValue::named("red"),
                info: ColorValue::named("cyan"),
            },
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                border: ColorValue::Rgb { r: 200, g: 200, b: 200 },
                border_focused: ColorValue::Rgb { r: 0, g: 100, b: 200 },
                header: ColorValue::Rgb { r: 0, g: 100, b: 200 },

                text_primary: ColorValue::named("black"),
                text_secondary: ColorValue::Rgb { r: 100, g: 100, b: 100 },
                text_disabled: ColorValue::Rgb { r: 150, g: 150, b: 150 },
                text_highlight: ColorValue::Rgb { r: 200, g: 100, b: 0 },

                display: ColorValue::named("black"),
                operator_key: ColorValue::Rgb { r: 200, g: 100, b: 0 },
                selection: ColorValue::Rgb { r: 210, g: 225, b: 250 },

                error: ColorValue::Rgb { r: 200, g: 0, b: 0 },
                info: ColorValue::Rgb { r: 0, g: 100, b: 200 },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
