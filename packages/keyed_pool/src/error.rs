use thiserror::Error;

/// Errors that can occur when filling a pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool could not construct even a single instance, so nothing was added to it.
    #[error("failed to construct an instance of {type_name} while populating its pool")]
    ConstructionFailed {
        /// Name of the item type of the pool.
        type_name: &'static str,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn construction_failed_names_the_type() {
        let error = Error::ConstructionFailed {
            type_name: "my_game::Bullet",
        };

        assert_eq!(
            error.to_string(),
            "failed to construct an instance of my_game::Bullet while populating its pool"
        );
    }
}
