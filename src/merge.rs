//! Scoped resource composition.
//!
//! [`TranslationContext::merged_with`] derives a context for a subtree that
//! wants to add or override a handful of messages without redeclaring the
//! whole fallback chain. The derived context snapshots the parent's sequence
//! order at merge time, so a later global locale switch cannot silently
//! desync the scoped overrides.

use std::collections::HashMap;
use std::sync::Arc;

use fluent_bundle::FluentResource;
use unic_langid::LanguageIdentifier;

use crate::context::TranslationContext;

impl TranslationContext {
    /// Derive a context that layers `extra` resources onto the current chain.
    ///
    /// For each bundle whose *primary* locale has an entry in `extra`, the
    /// entry's messages override the bundle's own per key while every other
    /// key keeps resolving against the original content; the bundle's position
    /// in the fallback order is unchanged. Bundles with no matching locale are
    /// carried over by reference.
    ///
    /// The result owns an independent sequence but shares this context's
    /// [`ContextOptions`](crate::ContextOptions), so diagnostics behave
    /// identically in the scoped subtree.
    pub fn merged_with(
        &self,
        extra: &HashMap<LanguageIdentifier, Arc<FluentResource>>,
    ) -> Self {
        let merged = self
            .bundles()
            .iter()
            .map(|bundle| match extra.get(bundle.locale()) {
                Some(resource) => Arc::new(bundle.overlay(Arc::clone(resource))),
                None => Arc::clone(bundle),
            })
            .collect();

        Self::new(merged, self.options().clone())
    }
}
