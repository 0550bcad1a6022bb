//! Light and dark terminal palettes

use console::Style;

/// Styles used by the text renderers
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark: bool,
    pub heading: Style,
    pub low_stock: Style,
    pub accent: Style,
    pub muted: Style,
    pub warning: Style,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        if dark {
            Self {
                dark,
                heading: Style::new().white().bright().bold(),
                low_stock: Style::new().red().bright().bold(),
                accent: Style::new().cyan().bright(),
                muted: Style::new().white().dim(),
                warning: Style::new().yellow().bright(),
            }
        } else {
            Self {
                dark,
                heading: Style::new().bold(),
                low_stock: Style::new().red().bold(),
                accent: Style::new().blue(),
                muted: Style::new().dim(),
                warning: Style::new().yellow(),
            }
        }
    }

    pub fn name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(false)
    }
}
