use std::collections::BTreeMap;
use std::time::SystemTime;

/// A named text file owned by exactly one [`Directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    content: String,
    created_at: SystemTime,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            created_at: SystemTime::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub(super) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

/// A directory node. Files and subdirectories live in separate maps, so a file
/// and a subdirectory may share a name while two siblings of the same kind may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    files: BTreeMap<String, File>,
    subdirectories: BTreeMap<String, Directory>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: BTreeMap::new(),
            subdirectories: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    pub fn subdirectory(&self, name: &str) -> Option<&Directory> {
        self.subdirectories.get(name)
    }

    /// Files in lexicographic order of their names.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    /// Subdirectories in lexicographic order of their names.
    pub fn subdirectories(&self) -> impl Iterator<Item = &Directory> {
        self.subdirectories.values()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn subdirectory_count(&self) -> usize {
        self.subdirectories.len()
    }

    pub(super) fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.get_mut(name)
    }

    pub(super) fn subdirectory_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.subdirectories.get_mut(name)
    }

    /// Inserts `file` unless a file with the same name exists. Returns whether it was inserted.
    pub(super) fn insert_file(&mut self, file: File) -> bool {
        if self.files.contains_key(file.name()) {
            return false;
        }
        self.files.insert(file.name.clone(), file);
        true
    }

    /// Inserts `directory` unless a subdirectory with the same name exists.
    pub(super) fn insert_subdirectory(&mut self, directory: Directory) -> bool {
        if self.subdirectories.contains_key(directory.name()) {
            return false;
        }
        self.subdirectories
            .insert(directory.name.clone(), directory);
        true
    }

    /// Follows `names` downwards from this directory, one subdirectory per name.
    pub fn descend<'a, I>(&self, names: I) -> Option<&Directory>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .try_fold(self, |current, name| current.subdirectory(name))
    }

    pub(super) fn descend_mut<'a, I>(&mut self, names: I) -> Option<&mut Directory>
    where
        I: IntoIterator<Item = &'a String>,
    {
        names
            .into_iter()
            .try_fold(self, |current, name| current.subdirectory_mut(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_file_rejects_duplicate_names() {
        let mut dir = Directory::new("Root");
        assert!(dir.insert_file(File::new("a.txt", "first")));
        assert!(!dir.insert_file(File::new("a.txt", "second")));
        assert_eq!(dir.file("a.txt").map(File::content), Some("first"));
    }

    #[test]
    fn file_and_subdirectory_namespaces_are_independent() {
        let mut dir = Directory::new("Root");
        assert!(dir.insert_subdirectory(Directory::new("X")));
        assert!(dir.insert_file(File::new("X", "")));
        assert!(!dir.insert_subdirectory(Directory::new("X")));
        assert_eq!(dir.file_count(), 1);
        assert_eq!(dir.subdirectory_count(), 1);
    }

    #[test]
    fn descend_follows_nested_names() {
        let mut inner = Directory::new("b");
        inner.insert_file(File::new("deep.txt", "deep"));
        let mut middle = Directory::new("a");
        middle.insert_subdirectory(inner);
        let mut root = Directory::new("Root");
        root.insert_subdirectory(middle);

        let path = vec!["a".to_string(), "b".to_string()];
        let found = root.descend(&path).map(Directory::name);
        assert_eq!(found, Some("b"));

        let missing = vec!["a".to_string(), "nope".to_string()];
        assert!(root.descend(&missing).is_none());
    }

    #[test]
    fn empty_descent_returns_self() {
        let root = Directory::new("Root");
        let empty: Vec<String> = Vec::new();
        assert_eq!(root.descend(&empty).map(Directory::name), Some("Root"));
    }

    #[test]
    fn iteration_is_lexicographic() {
        let mut dir = Directory::new("Root");
        for name in ["b", "a", "c"] {
            dir.insert_file(File::new(name, ""));
            dir.insert_subdirectory(Directory::new(name));
        }
        let files: Vec<_> = dir.files().map(File::name).collect();
        let dirs: Vec<_> = dir.subdirectories().map(Directory::name).collect();
        assert_eq!(files, ["a", "b", "c"]);
        assert_eq!(dirs, ["a", "b", "c"]);
    }
}
