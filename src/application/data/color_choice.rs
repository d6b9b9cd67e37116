use clap::ValueEnum;
use derive_more::Display;
use supports_color::Stream;

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum ColorChoice {
    /// Colour only if stdout looks like a colour-capable terminal.
    #[default]
    #[display("auto")]
    Auto,
    #[display("always")]
    Always,
    #[display("never")]
    Never,
}

impl ColorChoice {
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choices_ignore_the_terminal() {
        assert!(ColorChoice::Always.resolve());
        assert!(!ColorChoice::Never.resolve());
    }

    #[test]
    fn displays_as_cli_value() {
        assert_eq!(ColorChoice::Auto.to_string(), "auto");
        assert_eq!(ColorChoice::Never.to_string(), "never");
    }
}
