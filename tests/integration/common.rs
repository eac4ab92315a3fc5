//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use fluent_scope::{ContextOptions, FluentResource, LocaleBundle};

/// Parse an FTL source into a resource, panicking on syntax errors.
pub fn resource(ftl: &str) -> Arc<FluentResource> {
    Arc::new(FluentResource::try_new(ftl.to_string()).expect("failed to parse FTL"))
}

/// Build a single-resource bundle with directional isolation disabled, so
/// assertions can compare plain strings.
pub fn bundle(locale: &str, ftl: &str) -> Arc<LocaleBundle> {
    Arc::new(
        LocaleBundle::builder(vec![locale.parse().expect("invalid locale")])
            .resource(resource(ftl))
            .use_isolating(false)
            .build()
            .expect("failed to build bundle"),
    )
}

/// Options that record missing-key reports instead of logging them.
pub fn recording_options() -> (ContextOptions, Arc<Mutex<Vec<String>>>) {
    let missing = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&missing);
    let options = ContextOptions::silent().with_missing_message_hook(move |key| {
        sink.lock().unwrap().push(key.to_string());
    });
    (options, missing)
}
