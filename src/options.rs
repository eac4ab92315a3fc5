//! Context configuration: diagnostic hooks.
//!
//! Every recoverable condition in the formatting pipeline is reported through
//! one of two hooks instead of an error return. The defaults log through
//! `tracing` at warn level; callers can install their own hooks (e.g. to fail
//! tests on missing translations) or silence diagnostics entirely.

use std::sync::Arc;

use fluent_bundle::FluentError;

/// Hook invoked once per resolution that yields no message, whether no
/// bundle in the chain defines the key or no bundle was negotiated at all.
pub type MissingMessageHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Hook invoked once per recoverable pattern-formatting error, tagged with the
/// key of the message being formatted.
pub type FormatErrorHook = Arc<dyn Fn(&str, &FluentError) + Send + Sync>;

/// Configuration shared by a [`TranslationContext`](crate::TranslationContext)
/// and every context derived from it.
#[derive(Clone)]
pub struct ContextOptions {
    pub(crate) missing_message: MissingMessageHook,
    pub(crate) format_error: FormatErrorHook,
}

impl ContextOptions {
    /// Replace the missing-message hook.
    ///
    /// The hook is diagnostic only: its return value is ignored and it must
    /// not panic.
    #[must_use]
    pub fn with_missing_message_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.missing_message = Arc::new(hook);
        self
    }

    /// Replace the format-error hook.
    #[must_use]
    pub fn with_format_error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &FluentError) + Send + Sync + 'static,
    {
        self.format_error = Arc::new(hook);
        self
    }

    /// Options with both hooks disabled.
    pub fn silent() -> Self {
        Self {
            missing_message: Arc::new(|_| {}),
            format_error: Arc::new(|_, _| {}),
        }
    }
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            missing_message: Arc::new(|key| {
                tracing::warn!(key, "missing translation key");
            }),
            format_error: Arc::new(|key, error| {
                tracing::warn!(key, %error, "error formatting translation");
            }),
        }
    }
}

impl std::fmt::Debug for ContextOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextOptions").finish_non_exhaustive()
    }
}
