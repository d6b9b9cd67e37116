use colored::Color;

pub const SEPARATOR: &str = "=======================================================";
pub const PRESS_ENTER: &str = "Press Enter to continue...";
pub const FAREWELL: &str = "Exiting...";

/// ANSI "erase display" followed by "cursor home".
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const BANNER: [(&str, Color); 8] = [
    (
        "╔════════════════════════════════════════════════════════════════════════════╗",
        Color::Cyan,
    ),
    (
        "║                           templesh: a tiny temple                          ║",
        Color::Cyan,
    ),
    (
        "║                     A Tribute to Terry A. Davis                            ║",
        Color::Cyan,
    ),
    (
        "║                                                                            ║",
        Color::Cyan,
    ),
    (
        "║  \"God said, 'Let there be light.' And there was light.\" - Genesis 1:3      ║",
        Color::Yellow,
    ),
    (
        "║                                                                            ║",
        Color::Cyan,
    ),
    (
        "║  Type 'help' for a list of commands                                        ║",
        Color::Green,
    ),
    (
        "╚════════════════════════════════════════════════════════════════════════════╝",
        Color::Cyan,
    ),
];

pub const HELP: [&str; 11] = [
    "  help          - Show this help",
    "  cls, clear    - Clear screen",
    "  dir, ls       - List files and directories",
    "  cd <dir>      - Change directory (.. for parent)",
    "  mkdir <dir>   - Create directory",
    "  type <file>   - Show file contents",
    "  edit <file>   - Edit file",
    "  create <file> - Create a new file",
    "  random, verse - Show random Bible verse",
    "  mandelbrot    - Draw Mandelbrot fractal",
    "  exit, quit    - Exit the shell",
];

/// Row colours for the fractal, one picked at random per line.
pub const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];
