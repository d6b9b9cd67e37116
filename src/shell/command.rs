use derive_more::IsVariant;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Command {
    Exit,
    Help,
    Clear,
    List,
    ChangeDirectory(String),
    MakeDirectory(String),
    Type(String),
    Edit(String),
    Create(String),
    Verse,
    Mandelbrot,
    MissingArgument { usage: &'static str },
    Unknown(String),
}

impl Command {
    /// Parses a line; blank lines yield `None`.
    ///
    /// The first whitespace-separated token selects the command case-insensitively.
    /// Commands taking a name use the first argument and ignore the rest.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?.to_lowercase();
        let argument = tokens.next().map(str::to_string);

        let command = match keyword.as_str() {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "cls" | "clear" => Command::Clear,
            "dir" | "ls" => Command::List,
            "cd" => with_argument(argument, "cd <directory>", Command::ChangeDirectory),
            "mkdir" => with_argument(argument, "mkdir <directory>", Command::MakeDirectory),
            "type" | "cat" => with_argument(argument, "type <filename>", Command::Type),
            "edit" => with_argument(argument, "edit <filename>", Command::Edit),
            "create" => with_argument(argument, "create <filename>", Command::Create),
            "random" | "verse" => Command::Verse,
            "mandelbrot" => Command::Mandelbrot,
            _ => Command::Unknown(keyword),
        };
        Some(command)
    }
}

fn with_argument(
    argument: Option<String>,
    usage: &'static str,
    build: impl FnOnce(String) -> Command,
) -> Command {
    match argument {
        Some(name) => build(name),
        None => Command::MissingArgument { usage },
    }
}
