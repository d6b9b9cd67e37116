use crate::presentation::verses::VERSES;

pub const README_NAME: &str = "README.TXT";
pub const BIBLE_NAME: &str = "BIBLE.TXT";

/// Files placed in the root before the first command runs.
pub fn seed_files() -> [(&'static str, String); 2] {
    [
        (
            README_NAME,
            format!(
                "Welcome to {}\nVersion {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        ),
        (BIBLE_NAME, VERSES.join("\n")),
    ]
}
