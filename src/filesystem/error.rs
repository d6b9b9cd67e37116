use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum StoreError {
    #[snafu(display("'{}' was not found in {}", name, directory))]
    NotFound { name: String, directory: String },
    #[snafu(display("'{}' already exists in {}", name, directory))]
    AlreadyExists { name: String, directory: String },
    #[snafu(display("Cannot leave the root directory"))]
    InvalidNavigation,
    #[snafu(display("'{}' is not a valid name: {}", name, reason))]
    InvalidName { name: String, reason: &'static str },
    #[snafu(display("Path stack '{}' no longer resolves to a directory", path))]
    CursorUnreachable { path: String },
}
