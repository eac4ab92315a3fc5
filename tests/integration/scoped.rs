//! Scoped contexts: per-subtree overrides layered on a global chain.

use std::collections::HashMap;

use fluent_scope::{ContextOptions, TranslationContext};

use crate::common::{bundle, recording_options, resource};

fn global_context() -> TranslationContext {
    TranslationContext::new(
        vec![
            bundle("en", "title = Global title\nfooter = Global footer"),
            bundle("fr", "title = Titre global\nfooter = Pied de page"),
        ],
        ContextOptions::silent(),
    )
}

/// A component overrides one message in one locale; everything else is
/// inherited.
#[test]
fn component_local_override() {
    let ctx = global_context();
    let scoped = ctx.merged_with(&HashMap::from([(
        "en".parse().unwrap(),
        resource("title = Component title"),
    )]));

    assert_eq!(scoped.format("title", None), "Component title");
    assert_eq!(scoped.format("footer", None), "Global footer");
    assert_eq!(ctx.format("title", None), "Global title");
}

/// Overrides can target several locales at once; each stays in its slot of
/// the fallback order.
#[test]
fn multi_locale_override() {
    let ctx = global_context();
    let scoped = ctx.merged_with(&HashMap::from([
        ("en".parse().unwrap(), resource("title = Scoped EN")),
        ("fr".parse().unwrap(), resource("title = Scoped FR")),
    ]));

    assert_eq!(scoped.format("title", None), "Scoped EN");

    let locales: Vec<String> = scoped
        .bundles()
        .iter()
        .map(|bundle| bundle.locale().to_string())
        .collect();
    assert_eq!(locales, ["en", "fr"]);
}

/// Merging is stackable: a scoped context can itself be merged again.
#[test]
fn nested_scopes() {
    let ctx = global_context();
    let outer = ctx.merged_with(&HashMap::from([(
        "en".parse().unwrap(),
        resource("title = Outer title"),
    )]));
    let inner = outer.merged_with(&HashMap::from([(
        "en".parse().unwrap(),
        resource("title = Inner title"),
    )]));

    assert_eq!(ctx.format("title", None), "Global title");
    assert_eq!(outer.format("title", None), "Outer title");
    assert_eq!(inner.format("title", None), "Inner title");
    assert_eq!(inner.format("footer", None), "Global footer");
}

/// Diagnostics configuration carries over into scoped contexts.
#[test]
fn scoped_context_inherits_hooks() {
    let (options, missing) = recording_options();
    let ctx = TranslationContext::new(vec![bundle("en", "title = Global title")], options);

    let scoped = ctx.merged_with(&HashMap::from([(
        "en".parse().unwrap(),
        resource("extra = Extra"),
    )]));

    assert_eq!(scoped.format("nope", None), "nope");
    assert_eq!(missing.lock().unwrap().as_slice(), ["nope"]);
}
