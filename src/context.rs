//! Translation contexts: key resolution against a locale fallback chain.
//!
//! A [`TranslationContext`] owns a shared, swappable sequence of
//! [`LocaleBundle`]s ordered by priority and resolves translation keys against
//! it: negotiate the first bundle defining the key, fetch the message, format
//! its value and attribute patterns. Every public operation is total: a
//! missing or broken translation degrades to a fallback return value plus a
//! diagnostic hook invocation, never a panic or an `Err`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use fluent_bundle::{FluentArgs, FluentMessage};
use fluent_syntax::ast;

use crate::bundle::LocaleBundle;
use crate::options::ContextOptions;

/// Result of [`TranslationContext::format_with_attrs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTranslation {
    /// The formatted value, or the raw key if the message had no value.
    pub value: String,
    /// Whether `value` came from a real value pattern rather than the
    /// raw-key fallback.
    pub has_value: bool,
    /// Formatted attributes of the message, empty if the message was absent.
    pub attributes: HashMap<String, String>,
}

/// Resolves translation keys against an ordered bundle fallback chain.
///
/// Cloning a context shares the bundle sequence: a later
/// [`set_bundles`](Self::set_bundles) (e.g. a locale switch) is observed by
/// every clone. Contexts produced by
/// [`merged_with`](Self::merged_with) instead snapshot
/// the sequence and are independent from that point on.
#[derive(Debug, Clone)]
pub struct TranslationContext {
    bundles: Arc<RwLock<Vec<Arc<LocaleBundle>>>>,
    options: ContextOptions,
}

/// First bundle in priority order that defines `key`.
fn negotiate<'a>(bundles: &'a [Arc<LocaleBundle>], key: &str) -> Option<&'a Arc<LocaleBundle>> {
    bundles.iter().find(|bundle| bundle.has_message(key))
}

impl TranslationContext {
    /// Create a context over `bundles`, ordered highest priority first.
    pub fn new(bundles: Vec<Arc<LocaleBundle>>, options: ContextOptions) -> Self {
        Self {
            bundles: Arc::new(RwLock::new(bundles)),
            options,
        }
    }

    /// The context's configuration.
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Snapshot of the current bundle sequence.
    pub fn bundles(&self) -> Vec<Arc<LocaleBundle>> {
        self.read().clone()
    }

    /// Replace the bundle sequence wholesale, e.g. on a locale switch.
    ///
    /// The swap is atomic: calls already running keep the sequence they
    /// started with, later calls observe the new one.
    pub fn set_bundles(&self, bundles: Vec<Arc<LocaleBundle>>) {
        *self
            .bundles
            .write()
            .unwrap_or_else(PoisonError::into_inner) = bundles;
    }

    /// The first bundle in the fallback chain that defines `key`.
    ///
    /// Negotiation is a linear scan on every call; nothing is cached, so a
    /// swapped sequence takes effect immediately.
    pub fn get_bundle(&self, key: &str) -> Option<Arc<LocaleBundle>> {
        negotiate(&self.read(), key).cloned()
    }

    /// Format the value of the message for `key`.
    ///
    /// Falls back to returning `key` itself when no bundle defines the key or
    /// the message has no value pattern, which keeps missing translations
    /// visible in rendered output instead of silently blank.
    pub fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundles = self.read();
        let bundle = negotiate(&bundles, key).map(|bundle| bundle.as_ref());
        let message = self.resolve(bundle, key);

        self.format_value(bundle, message.as_ref(), key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Format every attribute of the message for `key`.
    ///
    /// Returns an empty map when no bundle defines the key.
    pub fn format_attrs(&self, key: &str, args: Option<&FluentArgs>) -> HashMap<String, String> {
        let bundles = self.read();
        let bundle = negotiate(&bundles, key).map(|bundle| bundle.as_ref());
        let message = self.resolve(bundle, key);

        self.format_attributes(bundle, message.as_ref(), key, args)
            .unwrap_or_default()
    }

    /// Format the value and all attributes of the message for `key` in one
    /// negotiation.
    ///
    /// `has_value` distinguishes a real formatted value from the raw-key
    /// fallback, so callers can tell "rendered text" from "rendered the key".
    pub fn format_with_attrs(&self, key: &str, args: Option<&FluentArgs>) -> FormattedTranslation {
        let bundles = self.read();
        let bundle = negotiate(&bundles, key).map(|bundle| bundle.as_ref());
        let message = self.resolve(bundle, key);

        let value = self.format_value(bundle, message.as_ref(), key, args);
        let attributes = self
            .format_attributes(bundle, message.as_ref(), key, args)
            .unwrap_or_default();

        FormattedTranslation {
            has_value: value.is_some(),
            value: value.unwrap_or_else(|| key.to_string()),
            attributes,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<LocaleBundle>>> {
        self.bundles.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the message for `key`. Any way of coming up empty (no bundle
    /// negotiated, or a negotiated bundle without the key) fires the
    /// missing-message hook once.
    fn resolve<'b>(
        &self,
        bundle: Option<&'b LocaleBundle>,
        key: &str,
    ) -> Option<FluentMessage<'b>> {
        let message = bundle.and_then(|bundle| bundle.get_message(key));
        if message.is_none() {
            (self.options.missing_message)(key);
        }
        message
    }

    /// Render one pattern, forwarding every recoverable error to the
    /// format-error hook tagged with the originating key.
    fn format_pattern<'b>(
        &self,
        bundle: &'b LocaleBundle,
        key: &str,
        pattern: &'b ast::Pattern<&'b str>,
        args: Option<&FluentArgs>,
    ) -> String {
        let mut errors = vec![];
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        for error in &errors {
            (self.options.format_error)(key, error);
        }

        formatted.into_owned()
    }

    fn format_value(
        &self,
        bundle: Option<&LocaleBundle>,
        message: Option<&FluentMessage<'_>>,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = bundle?;
        let pattern = message?.value()?;
        Some(self.format_pattern(bundle, key, pattern, args))
    }

    fn format_attributes(
        &self,
        bundle: Option<&LocaleBundle>,
        message: Option<&FluentMessage<'_>>,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<HashMap<String, String>> {
        let bundle = bundle?;
        let message = message?;

        let mut attributes = HashMap::new();
        for attribute in message.attributes() {
            let formatted = self.format_pattern(bundle, key, attribute.value(), args);
            attributes.insert(attribute.id().to_string(), formatted);
        }

        Some(attributes)
    }
}
