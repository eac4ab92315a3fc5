//! Error types for bundle construction.
//!
//! Only assembling a [`LocaleBundle`](crate::LocaleBundle) can fail. The
//! formatting pipeline itself is total: missing messages and pattern errors are
//! reported through the hooks on [`ContextOptions`](crate::ContextOptions) and
//! never surface as `Err`.

use fluent_bundle::FluentError;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Bundle construction error.
#[derive(Debug, Error)]
pub enum Error {
    /// A bundle was built without any locale.
    #[error("a locale bundle requires at least one locale")]
    EmptyLocales,

    /// A resource added to a bundle redefines messages or terms that an
    /// earlier resource in the same bundle already defines.
    #[error("resource conflicts with existing entries in the '{locale}' bundle: {errors:?}")]
    ResourceConflict {
        /// Primary locale of the bundle that rejected the resource.
        locale: LanguageIdentifier,
        /// The individual overriding errors, one per conflicting entry.
        errors: Vec<FluentError>,
    },

    /// Two custom formatting functions were registered under the same name.
    #[error("a formatting function named '{0}' is already registered")]
    DuplicateFunction(String),
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
