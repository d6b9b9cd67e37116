use snafu::{OptionExt, ensure};
use tracing::debug;

use super::error::{
    AlreadyExistsSnafu, CursorUnreachableSnafu, InvalidNameSnafu, InvalidNavigationSnafu,
    NotFoundSnafu, StoreError,
};
use super::seed;
use super::tree::{Directory, File};

pub const ROOT_NAME: &str = "Root";
pub const PARENT_DIRECTORY: &str = "..";
const PATH_SEPARATOR: &str = "/";

/// In-memory directory tree with a single cursor.
///
/// The cursor is never held as a reference. `path` always starts with the root's
/// name, and the current directory is found by replaying the rest of it from
/// `root`, which keeps the tree free of parent pointers.
#[derive(Debug, Clone)]
pub struct Store {
    root: Directory,
    path: Vec<String>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store positioned at the root.
    pub fn new() -> Self {
        Self {
            root: Directory::new(ROOT_NAME),
            path: vec![ROOT_NAME.to_string()],
        }
    }

    /// A store whose root already holds the README and verse files.
    pub fn seeded() -> Result<Self, StoreError> {
        let mut store = Self::new();
        for (name, content) in seed::seed_files() {
            store.create_file(name, content)?;
        }
        debug!("Seeded store with {} files", store.root.file_count());
        Ok(store)
    }

    pub fn create_file(
        &mut self,
        name: &str,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        validate_name(name)?;
        let directory = self.current_path();
        let inserted = self.cursor_mut()?.insert_file(File::new(name, content));
        ensure!(
            inserted,
            AlreadyExistsSnafu {
                name,
                directory: directory.as_str(),
            }
        );
        debug!("Created file '{}' in {}", name, directory);
        Ok(())
    }

    pub fn read_file(&self, name: &str) -> Result<&str, StoreError> {
        self.cursor()?
            .file(name)
            .map(File::content)
            .context(NotFoundSnafu {
                name,
                directory: self.current_path(),
            })
    }

    /// Replaces the content of an existing file. Never creates one.
    pub fn write_file(
        &mut self,
        name: &str,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let directory = self.current_path();
        let file = self
            .cursor_mut()?
            .file_mut(name)
            .context(NotFoundSnafu {
                name,
                directory: directory.as_str(),
            })?;
        file.set_content(content.into());
        debug!("Wrote file '{}' in {}", name, directory);
        Ok(())
    }

    /// File names in the current directory, lexicographically ordered.
    pub fn list_files(&self) -> Result<Vec<&str>, StoreError> {
        Ok(self.cursor()?.files().map(File::name).collect())
    }

    /// Subdirectory names in the current directory, lexicographically ordered.
    pub fn list_directories(&self) -> Result<Vec<&str>, StoreError> {
        Ok(self
            .cursor()?
            .subdirectories()
            .map(Directory::name)
            .collect())
    }

    pub fn create_directory(&mut self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        ensure!(
            name != PARENT_DIRECTORY,
            InvalidNameSnafu {
                name,
                reason: "reserved for navigation",
            }
        );
        let directory = self.current_path();
        let inserted = self
            .cursor_mut()?
            .insert_subdirectory(Directory::new(name));
        ensure!(
            inserted,
            AlreadyExistsSnafu {
                name,
                directory: directory.as_str(),
            }
        );
        debug!("Created directory '{}' in {}", name, directory);
        Ok(())
    }

    /// Moves the cursor into a child directory, or to the parent for `..`.
    ///
    /// Only single-segment relative names are understood; `a/b` or `/a` are
    /// looked up literally and therefore fail with [`StoreError::NotFound`].
    pub fn change_directory(&mut self, name: &str) -> Result<(), StoreError> {
        if name == PARENT_DIRECTORY {
            return self.leave_directory();
        }

        let exists = self.cursor()?.subdirectory(name).is_some();
        ensure!(
            exists,
            NotFoundSnafu {
                name,
                directory: self.current_path(),
            }
        );
        self.path.push(name.to_string());
        debug!("Entered {}", self.current_path());
        Ok(())
    }

    fn leave_directory(&mut self) -> Result<(), StoreError> {
        ensure!(self.path.len() > 1, InvalidNavigationSnafu);

        // Re-resolve the parent from the root before committing the pop.
        let parent = &self.path[..self.path.len() - 1];
        self.root
            .descend(&parent[1..])
            .context(CursorUnreachableSnafu {
                path: parent.join(PATH_SEPARATOR),
            })?;
        self.path.pop();
        debug!("Returned to {}", self.current_path());
        Ok(())
    }

    /// The path stack joined with `/`, root included, e.g. `Root/Docs`.
    pub fn current_path(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }

    /// Number of `..` steps between the cursor and the root.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    pub fn current_directory(&self) -> Result<&Directory, StoreError> {
        self.cursor()
    }

    fn cursor(&self) -> Result<&Directory, StoreError> {
        self.root
            .descend(&self.path[1..])
            .context(CursorUnreachableSnafu {
                path: self.current_path(),
            })
    }

    fn cursor_mut(&mut self) -> Result<&mut Directory, StoreError> {
        let path = self.current_path();
        self.root
            .descend_mut(&self.path[1..])
            .context(CursorUnreachableSnafu { path })
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    ensure!(
        !name.is_empty(),
        InvalidNameSnafu {
            name,
            reason: "names must not be empty",
        }
    );
    ensure!(
        !name.contains(PATH_SEPARATOR),
        InvalidNameSnafu {
            name,
            reason: "names must not contain '/'",
        }
    );
    Ok(())
}
