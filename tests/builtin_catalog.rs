//! Builtin catalog integration test.
//!
//! Exercises the shipped catalog end-to-end: builds the full registry
//! against a real asset directory, assembles the route table, and renders
//! the documentation page rows.

use std::sync::Arc;

use relay_integrations::{
    DocContext, HandlerError, HandlerResolver, MarkdownRenderer, RenderError, Settings,
    WebhookEvent, WebhookHandler, build_routes, builtin_registry,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("relay_integrations=debug")
        .try_init();
}

struct StubHandler(&'static str);

impl WebhookHandler for StubHandler {
    fn handle(&self, _payload: &serde_json::Value) -> Result<WebhookEvent, HandlerError> {
        Ok(WebhookEvent {
            stream: self.0.to_string(),
            topic: "test".to_string(),
            body: String::new(),
        })
    }
}

/// Resolves every slug; stands in for a deployment's full handler map.
struct ResolveAll;

impl HandlerResolver for ResolveAll {
    fn resolve(&self, _slug: &str) -> Option<Arc<dyn WebhookHandler>> {
        Some(Arc::new(StubHandler("resolved")))
    }
}

struct PathEchoRenderer;

impl MarkdownRenderer for PathEchoRenderer {
    fn render(&self, path: &str, _context: &DocContext) -> Result<String, RenderError> {
        Ok(format!("<article>{path}</article>"))
    }
}

#[test]
fn builtin_catalog_end_to_end() {
    init_logging();

    let asset_root = tempfile::tempdir().unwrap();
    let logos = asset_root.path().join("images/integrations/logos");
    std::fs::create_dir_all(&logos).unwrap();
    std::fs::write(logos.join("sentry.svg"), "<svg/>").unwrap();
    std::fs::write(logos.join("heroku.png"), [0u8; 4]).unwrap();

    let registry = builtin_registry(asset_root.path()).unwrap();
    assert_eq!(registry.len(), 77);

    // Logo resolution against the real directory: SVG preferred, PNG
    // fallback used verbatim whether or not it exists.
    assert_eq!(
        registry.get("sentry").unwrap().logo,
        "images/integrations/logos/sentry.svg"
    );
    assert_eq!(
        registry.get("heroku").unwrap().logo,
        "images/integrations/logos/heroku.png"
    );
    assert_eq!(
        registry.get("taiga").unwrap().logo,
        "images/integrations/logos/taiga.png"
    );

    // Route table: every owning webhook contributes exactly one route, in
    // declared order; the legacy github descriptor contributes none.
    let routes = build_routes(&registry, &ResolveAll).unwrap();
    assert_eq!(routes.len(), 46);

    let github_routes: Vec<_> = routes
        .iter()
        .filter(|r| r.pattern == "api/v1/external/github")
        .collect();
    assert_eq!(github_routes.len(), 1);

    let declared: Vec<String> = registry
        .webhooks()
        .filter(|i| i.webhook().unwrap().owns_route)
        .map(|i| i.webhook().unwrap().url.clone())
        .collect();
    let built: Vec<String> = routes.iter().map(|r| r.pattern.clone()).collect();
    assert_eq!(built, declared);

    // Documentation page rows, one per integration, declared order.
    let entries = registry
        .doc_entries(&PathEchoRenderer, &DocContext::new())
        .unwrap();
    assert_eq!(entries.len(), 77);
    assert_eq!(entries[0].name, "asana");
    assert_eq!(
        entries[0].doc_html.as_deref(),
        Some("<article>integrations/asana.md</article>")
    );

    // Lozenges carry no doc fragment.
    let youtube = entries.iter().find(|e| e.name == "youtube").unwrap();
    assert!(youtube.doc_html.is_none());
    assert_eq!(youtube.display_name, "YouTube");

    // Email gating, both branches.
    let email = registry.get("email").unwrap();
    assert!(!email.is_enabled(&Settings::new("")));
    assert!(email.is_enabled(&Settings::new("emailgateway@relay.example.com")));

    // Every name is non-empty and unique (uniqueness is enforced at
    // construction; spot-check the invariant over the built registry).
    let mut names = std::collections::HashSet::new();
    for integration in registry.iter() {
        assert!(!integration.name.is_empty());
        assert!(names.insert(integration.name.clone()));
    }
}

#[test]
fn render_help_for_webhook_doc() {
    let asset_root = tempfile::tempdir().unwrap();
    let registry = builtin_registry(asset_root.path()).unwrap();

    let mut context = DocContext::new();
    context.insert(
        "external_api_uri".to_string(),
        "https://relay.example.com/api".into(),
    );

    let html = registry
        .render_help("circleci", &PathEchoRenderer, &context)
        .unwrap();
    assert_eq!(html, "<article>circleci/doc.md</article>");
}
