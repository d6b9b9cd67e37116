//! The interactive command loop and its line editor.

mod command;
mod editor;
mod interrupt;
mod shell;

pub use command::Command;
pub use interrupt::Interrupt;
pub use shell::{Shell, ShellError, ShellOptions};
