use std::{io, process};

use rand::SeedableRng;
use rand::rngs::StdRng;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::filesystem::{Store, StoreError};
use crate::presentation::Palette;
use crate::presentation::text::FAREWELL;
use crate::shell::{Interrupt, Shell, ShellError};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Resolved runtime config: {:?}", app_config);

        let store = Store::seeded().context(SeedSnafu)?;
        let rng = match app_config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let palette = Palette::new(app_config.color);
        info!("Starting shell, colour enabled: {}", palette.is_enabled());

        let interrupt = Interrupt::default();
        install_interrupt_handler(interrupt.clone())?;

        // Stdout stays unlocked between writes so the handler can print.
        let stdin = io::stdin();
        Shell::new(
            store,
            palette,
            app_config.shell_options,
            rng,
            stdin.lock(),
            io::stdout(),
        )
        .with_interrupt(interrupt)
        .run()
        .context(ShellSnafu)?;

        Ok(())
    }
}

/// Ctrl-C raises `interrupt`. A shell blocked on the terminal cannot notice, so
/// the handler prints the farewell and exits; otherwise the shell stops at its
/// next read.
fn install_interrupt_handler(interrupt: Interrupt) -> Result<(), ApplicationError> {
    ctrlc::set_handler(move || {
        if interrupt.raise() && interrupt.claim_farewell() {
            println!("\n{FAREWELL}");
            process::exit(0);
        }
    })
    .context(SignalHandlerSnafu)
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to populate the root directory"))]
    SeedError { source: StoreError },
    #[snafu(display("Critical failure encountered while running the shell"))]
    ShellError { source: ShellError },
    #[snafu(display("Failed to install the Ctrl-C handler"))]
    SignalHandlerError { source: ctrlc::Error },
}
