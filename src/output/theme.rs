use console::Style;

/// Fixed style palette used by the console output.
///
/// Built once and passed to renderer constructors. With color disabled every
/// style renders its text unchanged.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            title: Style::new().cyan().bold().force_styling(true),
            success: Style::new().green().force_styling(true),
            error: Style::new().red().bold().force_styling(true),
            warning: Style::new().yellow().force_styling(true),
            muted: Style::new().dim().force_styling(true),
        }
    }

    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Self {
            title: plain.clone(),
            success: plain.clone(),
            error: plain.clone(),
            warning: plain.clone(),
            muted: plain,
        }
    }
}
