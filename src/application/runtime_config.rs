use crate::cli::Cli;
use crate::shell::ShellOptions;

/// Settings resolved once at startup and threaded through the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub color: bool,
    pub shell_options: ShellOptions,
    pub seed: Option<u64>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        let shell_options = if cli.batch {
            ShellOptions::batch()
        } else {
            ShellOptions::interactive()
        };
        Self {
            color: cli.color.resolve(),
            shell_options,
            seed: cli.seed,
        }
    }
}
