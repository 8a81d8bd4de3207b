use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when saving or loading data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A file or directory could not be read or written.
    #[error("cannot access '{}'", path.display())]
    Io {
        /// The file or directory that was being accessed.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The value could not be represented as TOML.
    #[error("cannot serialize data for '{}'", path.display())]
    Serialize {
        /// The file the data was meant for.
        path: PathBuf,

        /// The underlying serialization error.
        source: toml::ser::Error,
    },

    /// The file contents are not valid TOML or do not match the expected type.
    #[error("cannot parse '{}'", path.display())]
    Deserialize {
        /// The file that was being parsed.
        path: PathBuf,

        /// The underlying parse error.
        source: toml::de::Error,
    },
}

/// A specialized `Result` type for persistence operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn io_error_names_path_and_keeps_source() {
        let error = Error::Io {
            path: PathBuf::from("saves/slot1.toml"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert!(error.to_string().contains("saves/slot1.toml"));
        assert!(error.source().is_some());
    }
}
