//! Scoped Fluent translation contexts.
//!
//! This crate resolves translation keys against an ordered fallback chain of
//! [Project Fluent](https://projectfluent.org/) bundles and formats message
//! values and attributes with caller-supplied variables. On top of plain
//! fallback resolution it supports *scoped contexts*: a subtree of an
//! application can layer extra, locally-scoped resources onto the inherited
//! chain without redeclaring it.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use fluent_scope::{
//!     ContextOptions, FluentArgs, FluentResource, FluentValue, LocaleBundle,
//!     TranslationContext,
//! };
//!
//! let resource = Arc::new(
//!     FluentResource::try_new("greet = Hello, { $name }!".to_string())
//!         .expect("failed to parse FTL"),
//! );
//! let bundle = Arc::new(
//!     LocaleBundle::builder(vec!["en-US".parse().expect("invalid locale")])
//!         .resource(resource)
//!         .use_isolating(false)
//!         .build()
//!         .expect("failed to build bundle"),
//! );
//!
//! let ctx = TranslationContext::new(vec![bundle], ContextOptions::default());
//!
//! let mut args = FluentArgs::new();
//! args.set("name", FluentValue::from("Ada"));
//! assert_eq!(ctx.format("greet", Some(&args)), "Hello, Ada!");
//!
//! // Missing translations render as the key itself, never panic.
//! assert_eq!(ctx.format("missing-key", None), "missing-key");
//! ```
//!
//! ## Scoped overrides
//!
//! [`TranslationContext::merged_with`] derives a context whose per-locale
//! content is overridden per message key while the fallback order of the
//! parent chain is preserved. See the `merge` module docs for the exact
//! semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod context;
pub mod error;
pub mod merge;
pub mod options;

pub use bundle::{BundleFunction, LocaleBundle, LocaleBundleBuilder};
pub use context::{FormattedTranslation, TranslationContext};
pub use error::{Error, Result};
pub use options::{ContextOptions, FormatErrorHook, MissingMessageHook};

// Re-exported for downstream signatures.
pub use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
pub use unic_langid::LanguageIdentifier;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
