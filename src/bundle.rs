//! Locale bundles: one slot of a fallback chain.
//!
//! A [`LocaleBundle`] wraps a concurrent [`FluentBundle`] together with the
//! inputs it was assembled from (locales, resources, custom functions, the
//! isolation flag). Retaining the inputs is what makes scoped overrides
//! possible: [`LocaleBundle::overlay`] rebuilds the bundle with an extra
//! resource layered on top, overriding per message key, without access to the
//! original bundle's internals.

use std::borrow::Cow;
use std::sync::Arc;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentMessage, FluentResource, FluentValue};
use fluent_syntax::ast;
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};

/// A custom formatting function callable from message patterns.
///
/// Mirrors the signature `fluent-bundle` expects for
/// [`FluentBundle::add_function`], but reference-counted so that derived
/// bundles can re-register the same function.
pub type BundleFunction =
    Arc<dyn for<'a> Fn(&[FluentValue<'a>], &FluentArgs) -> FluentValue<'a> + Send + Sync>;

/// One locale's compiled message table.
///
/// The bundle is immutable after construction. It uses the concurrent
/// `FluentBundle` variant so contexts holding it are `Send + Sync`.
pub struct LocaleBundle {
    bundle: FluentBundle<Arc<FluentResource>>,
    locales: Vec<LanguageIdentifier>,
    resources: Vec<Arc<FluentResource>>,
    functions: Vec<(String, BundleFunction)>,
    use_isolating: bool,
}

impl LocaleBundle {
    /// Start building a bundle for the given locales.
    ///
    /// The first locale is the bundle's primary locale; it is the identifier
    /// scoped overrides are matched against.
    pub fn builder(locales: Vec<LanguageIdentifier>) -> LocaleBundleBuilder {
        LocaleBundleBuilder {
            locales,
            resources: Vec::new(),
            functions: Vec::new(),
            use_isolating: true,
        }
    }

    /// The bundle's primary locale.
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locales[0]
    }

    /// All locales of this bundle, primary first.
    pub fn locales(&self) -> &[LanguageIdentifier] {
        &self.locales
    }

    /// Whether this bundle defines a message for `key`.
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Fetch the message for `key`, if this bundle defines one.
    pub fn get_message(&self, key: &str) -> Option<FluentMessage<'_>> {
        self.bundle.get_message(key)
    }

    /// Format a single pattern of a message owned by this bundle.
    ///
    /// Recoverable errors (unresolved variables, unknown functions) are
    /// appended to `errors`; the returned string is a best-effort rendering.
    pub fn format_pattern<'b>(
        &'b self,
        pattern: &'b ast::Pattern<&'b str>,
        args: Option<&FluentArgs>,
        errors: &mut Vec<FluentError>,
    ) -> Cow<'b, str> {
        self.bundle.format_pattern(pattern, args, errors)
    }

    /// Rebuild this bundle with `extra` layered on top.
    ///
    /// Keys defined in `extra` shadow the originals; every other key keeps
    /// resolving against the original resources. Locales, custom functions and
    /// the isolation flag carry over unchanged.
    pub fn overlay(&self, extra: Arc<FluentResource>) -> Self {
        let mut bundle = FluentBundle::new_concurrent(self.locales.clone());
        bundle.set_use_isolating(self.use_isolating);

        for resource in &self.resources {
            bundle.add_resource_overriding(Arc::clone(resource));
        }
        bundle.add_resource_overriding(Arc::clone(&extra));

        for (name, func) in &self.functions {
            let func = Arc::clone(func);
            // Names were validated unique when the original bundle was built.
            let _ = bundle.add_function(name, move |positional, named| func(positional, named));
        }

        let mut resources = self.resources.clone();
        resources.push(extra);

        Self {
            bundle,
            locales: self.locales.clone(),
            resources,
            functions: self.functions.clone(),
            use_isolating: self.use_isolating,
        }
    }
}

impl std::fmt::Debug for LocaleBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleBundle")
            .field("locales", &self.locales)
            .field("resources", &self.resources.len())
            .field("use_isolating", &self.use_isolating)
            .finish()
    }
}

/// Builder for [`LocaleBundle`].
pub struct LocaleBundleBuilder {
    locales: Vec<LanguageIdentifier>,
    resources: Vec<Arc<FluentResource>>,
    functions: Vec<(String, BundleFunction)>,
    use_isolating: bool,
}

impl LocaleBundleBuilder {
    /// Add a parsed resource. Resources added later must not redefine entries
    /// from earlier ones; collisions surface from [`build`](Self::build).
    #[must_use]
    pub fn resource(mut self, resource: Arc<FluentResource>) -> Self {
        self.resources.push(resource);
        self
    }

    /// Register a custom formatting function, callable from patterns as
    /// `{ NAME() }`.
    #[must_use]
    pub fn function<F>(mut self, name: &str, func: F) -> Self
    where
        F: for<'a> Fn(&[FluentValue<'a>], &FluentArgs) -> FluentValue<'a>
            + Send
            + Sync
            + 'static,
    {
        self.functions.push((name.to_string(), Arc::new(func)));
        self
    }

    /// Control Unicode directional isolation marks around placeables.
    /// Defaults to `true`, matching `fluent-bundle`.
    #[must_use]
    pub fn use_isolating(mut self, value: bool) -> Self {
        self.use_isolating = value;
        self
    }

    /// Assemble the bundle.
    pub fn build(self) -> Result<LocaleBundle> {
        let Some(primary) = self.locales.first().cloned() else {
            return Err(Error::EmptyLocales);
        };

        let mut bundle = FluentBundle::new_concurrent(self.locales.clone());
        bundle.set_use_isolating(self.use_isolating);

        for resource in &self.resources {
            bundle
                .add_resource(Arc::clone(resource))
                .map_err(|errors| Error::ResourceConflict {
                    locale: primary.clone(),
                    errors,
                })?;
        }

        for (name, func) in &self.functions {
            let func = Arc::clone(func);
            bundle
                .add_function(name, move |positional, named| func(positional, named))
                .map_err(|_| Error::DuplicateFunction(name.clone()))?;
        }

        Ok(LocaleBundle {
            bundle,
            locales: self.locales,
            resources: self.resources,
            functions: self.functions,
            use_isolating: self.use_isolating,
        })
    }
}
