use clap::ValueEnum;

/// When terminal colors are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Let the terminal and NO_COLOR / CLICOLOR_FORCE decide
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply this mode to everything painted through `colored`
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => colored::control::unset_override(),
        }
    }
}
