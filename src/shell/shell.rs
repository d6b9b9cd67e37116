use std::io::{self, BufRead, Write};

use colored::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use crate::ext::SystemTimeExt;
use crate::filesystem::{File, Store, StoreError};
use crate::presentation::mandelbrot::{self, Viewport};
use crate::presentation::text::{
    BANNER, CLEAR_SCREEN, FAREWELL, HELP, PRESS_ENTER, RAINBOW, SEPARATOR,
};
use crate::presentation::{Palette, verses};
use crate::shell::{Command, Interrupt};
use crate::shell::editor::{self, END_SENTINEL};

/// Screen handling switches. Interactive sessions clear the screen and wait for
/// Enter after full-screen output; batch sessions do neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub clear_screen: bool,
    pub pause: bool,
}

impl ShellOptions {
    pub fn interactive() -> Self {
        Self {
            clear_screen: true,
            pause: true,
        }
    }

    pub fn batch() -> Self {
        Self {
            clear_screen: false,
            pause: false,
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// The read-dispatch-print loop. Owns the store and all I/O handles.
pub struct Shell<R, W> {
    store: Store,
    palette: Palette,
    options: ShellOptions,
    rng: StdRng,
    interrupt: Interrupt,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        store: Store,
        palette: Palette,
        options: ShellOptions,
        rng: StdRng,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            palette,
            options,
            rng,
            interrupt: Interrupt::default(),
            input,
            output,
        }
    }

    /// Shares `interrupt` with whoever raises it, usually the Ctrl-C handler.
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    /// Runs until `exit`, end of input, or an interrupt.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.welcome()?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                self.farewell()?;
                break;
            };

            match self.execute_line(&line)? {
                Flow::Continue => {}
                Flow::Exit => break,
                Flow::EndOfInput => {
                    self.farewell()?;
                    break;
                }
            }
        }

        info!(
            "Session ended in {} at depth {}",
            self.store.current_path(),
            self.store.depth()
        );
        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        match Command::parse(line) {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        debug!("Executing {:?}", command);
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => return self.help(),
            Command::Clear => self.clear()?,
            Command::List => self.list()?,
            Command::ChangeDirectory(name) => self.change_directory(&name)?,
            Command::MakeDirectory(name) => self.make_directory(&name)?,
            Command::Type(name) => return self.type_file(&name),
            Command::Edit(name) => return self.edit(&name),
            Command::Create(name) => self.create(&name)?,
            Command::Verse => return self.verse(),
            Command::Mandelbrot => return self.mandelbrot(),
            Command::MissingArgument { usage } => {
                self.say(&format!("Usage: {usage}"), Color::Yellow)?;
            }
            Command::Unknown(keyword) => {
                self.say(&format!("Unknown command: {keyword}"), Color::Red)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn welcome(&mut self) -> Result<(), ShellError> {
        self.clear()?;
        for (line, color) in BANNER {
            self.say(line, color)?;
        }
        let verse = verses::random_verse(&mut self.rng);
        self.blank()?;
        self.say(verse, Color::Magenta)?;
        self.blank()
    }

    fn help(&mut self) -> Result<Flow, ShellError> {
        self.clear()?;
        self.say(&format!("{} - Help", env!("CARGO_PKG_NAME")), Color::Cyan)?;
        self.blank()?;
        self.raw_line("Commands:")?;
        for line in HELP {
            self.say(line, Color::White)?;
        }
        self.pause_then_clear()
    }

    fn list(&mut self) -> Result<(), ShellError> {
        let lines = match listing(&self.store) {
            Ok(lines) => lines,
            Err(error) => return self.report(&error),
        };

        self.clear()?;
        self.header(&format!("Directory of {}", self.store.current_path()))?;
        for (line, color) in lines {
            self.say(&line, color)?;
        }
        Ok(())
    }

    fn change_directory(&mut self, name: &str) -> Result<(), ShellError> {
        match self.store.change_directory(name) {
            Ok(()) => Ok(()),
            Err(StoreError::InvalidNavigation) => {
                self.say("Already at root directory", Color::Red)
            }
            Err(error) => {
                debug!("cd failed: {}", error);
                self.say(&format!("Directory not found: {name}"), Color::Red)
            }
        }
    }

    fn make_directory(&mut self, name: &str) -> Result<(), ShellError> {
        if let Err(error) = self.store.create_directory(name) {
            debug!("mkdir failed: {}", error);
            self.say(&format!("Could not create directory: {name}"), Color::Red)?;
        }
        Ok(())
    }

    fn create(&mut self, name: &str) -> Result<(), ShellError> {
        match self.store.create_file(name, "") {
            Ok(()) => self.say(&format!("Created file: {name}"), Color::Green),
            Err(StoreError::AlreadyExists { .. }) => {
                self.say(&format!("File already exists: {name}"), Color::Red)
            }
            Err(error) => {
                debug!("create failed: {}", error);
                self.say(&format!("Could not create file: {name}"), Color::Red)
            }
        }
    }

    fn type_file(&mut self, name: &str) -> Result<Flow, ShellError> {
        let content = match self.store.read_file(name) {
            Ok(content) => content.to_string(),
            Err(error) => {
                debug!("type failed: {}", error);
                self.say(&format!("File not found: {name}"), Color::Red)?;
                return Ok(Flow::Continue);
            }
        };

        self.clear()?;
        self.header(&format!("File: {name}"))?;
        self.raw_line(&content)?;
        self.pause_then_clear()
    }

    fn edit(&mut self, name: &str) -> Result<Flow, ShellError> {
        let current = match self.store.read_file(name) {
            Ok(content) => content.to_string(),
            Err(_) => {
                if let Err(error) = self.store.create_file(name, "") {
                    debug!("edit could not create file: {}", error);
                    self.say(&format!("Could not create file: {name}"), Color::Red)?;
                    return Ok(Flow::Continue);
                }
                String::new()
            }
        };

        self.clear()?;
        self.say(&format!("Editing: {name}"), Color::Cyan)?;
        self.say(
            &format!("Enter your text below. Type {END_SENTINEL} on a single line when finished."),
            Color::Yellow,
        )?;
        self.say("Current content:", Color::Green)?;
        self.raw_line(&current)?;
        self.blank()?;
        self.raw_line(&format!(
            "--- Start editing (type {END_SENTINEL} on a single line to finish) ---"
        ))?;
        self.flush()?;

        self.interrupt.begin_wait();
        let captured = editor::capture(&mut self.input);
        self.interrupt.end_wait();
        let captured = captured.context(ReadInputSnafu)?;

        let Some(text) = captured.filter(|_| !self.interrupt.is_raised()) else {
            warn!("Input ended while editing '{}'; changes discarded", name);
            return Ok(Flow::EndOfInput);
        };

        match self.store.write_file(name, text) {
            Ok(()) => self.say(&format!("File {name} saved."), Color::Green)?,
            Err(error) => self.report(&error)?,
        }
        Ok(Flow::Continue)
    }

    fn verse(&mut self) -> Result<Flow, ShellError> {
        let verse = verses::random_verse(&mut self.rng);
        self.clear()?;
        self.header("Random Bible Verse")?;
        self.say(verse, Color::Yellow)?;
        self.pause_then_clear()
    }

    fn mandelbrot(&mut self) -> Result<Flow, ShellError> {
        self.clear()?;
        self.header("Mandelbrot Set")?;
        for row in mandelbrot::render(&Viewport::default()) {
            let color = RAINBOW.choose(&mut self.rng).copied().unwrap_or(Color::White);
            self.say(&row, color)?;
        }
        self.pause_then_clear()
    }

    fn header(&mut self, title: &str) -> Result<(), ShellError> {
        self.say(title, Color::Cyan)?;
        self.say(SEPARATOR, Color::Cyan)?;
        self.blank()
    }

    fn report(&mut self, error: &StoreError) -> Result<(), ShellError> {
        warn!("Store operation failed: {}", error);
        self.say(&error.to_string(), Color::Red)
    }

    fn pause_then_clear(&mut self) -> Result<Flow, ShellError> {
        if !self.options.pause {
            return Ok(Flow::Continue);
        }
        self.blank()?;
        self.raw_line(PRESS_ENTER)?;
        self.flush()?;
        if self.read_line()?.is_none() {
            return Ok(Flow::EndOfInput);
        }
        self.clear()?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self) -> Result<(), ShellError> {
        let prompt = format!("{}> ", self.store.current_path());
        let painted = self.palette.paint(&prompt, Color::Cyan);
        write!(self.output, "{painted}").context(WriteOutputSnafu)?;
        self.flush()
    }

    fn farewell(&mut self) -> Result<(), ShellError> {
        if !self.interrupt.claim_farewell() {
            // The Ctrl-C handler already said goodbye and is exiting.
            return Ok(());
        }
        self.blank()?;
        self.raw_line(FAREWELL)?;
        self.flush()
    }

    /// Reads one line without its terminator. A raised interrupt, before or
    /// during the read, counts as end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        self.interrupt.begin_wait();
        if self.interrupt.is_raised() {
            self.interrupt.end_wait();
            info!("Interrupted before reading input");
            return Ok(None);
        }

        let mut buffer = String::new();
        let read = self.input.read_line(&mut buffer);
        self.interrupt.end_wait();
        let read = read.context(ReadInputSnafu)?;

        if self.interrupt.is_raised() {
            info!("Interrupted while reading input");
            return Ok(None);
        }
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn clear(&mut self) -> Result<(), ShellError> {
        if self.options.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}").context(WriteOutputSnafu)?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str, color: Color) -> Result<(), ShellError> {
        let painted = self.palette.paint(text, color);
        self.raw_line(&painted)
    }

    fn raw_line(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{text}").context(WriteOutputSnafu)
    }

    fn blank(&mut self) -> Result<(), ShellError> {
        self.raw_line("")
    }

    fn flush(&mut self) -> Result<(), ShellError> {
        self.output.flush().context(WriteOutputSnafu)
    }
}

/// Lines of a `dir` listing body: subdirectories, files, then the totals.
fn listing(store: &Store) -> Result<Vec<(String, Color)>, StoreError> {
    let directory = store.current_directory()?;

    let mut lines: Vec<_> = store
        .list_directories()?
        .into_iter()
        .map(|name| (format!("<DIR>    {name}"), Color::Blue))
        .collect();
    for name in store.list_files()? {
        let stamp = directory
            .file(name)
            .map(File::created_at)
            .map(|created_at| created_at.to_listing_stamp())
            .unwrap_or_default();
        lines.push((format!("{stamp}    {name}"), Color::Green));
    }

    lines.push((String::new(), Color::White));
    lines.push((
        format!(
            "{} file(s), {} directory(ies)",
            directory.file_count(),
            directory.subdirectory_count()
        ),
        Color::White,
    ));
    Ok(lines)
}

#[derive(Debug, Snafu)]
pub enum ShellError {
    #[snafu(display("Failed to read from input"))]
    ReadInputError { source: io::Error },
    #[snafu(display("Failed to write to output"))]
    WriteOutputError { source: io::Error },
}
