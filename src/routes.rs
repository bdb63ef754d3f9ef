//! Route-table construction for webhook integrations.
//!
//! Each owning webhook descriptor contributes one `(url_pattern, handler)`
//! pair. Handlers are plain trait objects registered up front in a
//! [`StaticHandlerMap`] (or any other [`HandlerResolver`]); an unresolvable
//! handler slug fails route construction, so a wiring mistake aborts
//! bootstrap instead of 404ing at request time.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::registry::{IntegrationRegistry, RegistryError};

/// Error type for webhook handlers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("unsupported event type: {event}")]
    UnsupportedEvent { event: String },
}

/// The message a webhook handler produces from an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    /// Channel the message is posted to.
    pub stream: String,
    /// Topic within the channel.
    pub topic: String,
    /// Rendered message body.
    pub body: String,
}

/// A webhook payload handler.
pub trait WebhookHandler: Send + Sync {
    /// Turn one inbound payload into a chat message.
    fn handle(&self, payload: &serde_json::Value) -> Result<WebhookEvent, HandlerError>;
}

/// Maps a handler slug (e.g. `webhooks.sentry.view.api_sentry_webhook`)
/// to its handler.
pub trait HandlerResolver {
    fn resolve(&self, slug: &str) -> Option<Arc<dyn WebhookHandler>>;
}

/// An explicit slug -> handler map, populated at bootstrap.
///
/// This replaces dotted-path runtime imports with statically registered
/// function references: every handler a deployment supports is listed in
/// one place, and [`build_routes`] verifies the catalog against it.
#[derive(Default)]
pub struct StaticHandlerMap {
    handlers: HashMap<String, Arc<dyn WebhookHandler>>,
}

impl StaticHandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its slug. Last registration wins.
    pub fn with_handler(mut self, slug: &str, handler: Arc<dyn WebhookHandler>) -> Self {
        self.handlers.insert(slug.to_string(), handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HandlerResolver for StaticHandlerMap {
    fn resolve(&self, slug: &str) -> Option<Arc<dyn WebhookHandler>> {
        self.handlers.get(slug).cloned()
    }
}

/// One inbound route: a URL pattern paired with its resolved handler.
#[derive(Clone)]
pub struct Route {
    pub pattern: String,
    pub handler: Arc<dyn WebhookHandler>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Build the inbound route table from the registry's webhooks, in declared
/// order.
///
/// Shared-route variants are kept in the registry for documentation but
/// skipped here; at most one descriptor per URL produces a route. Fails
/// with [`RegistryError::UnresolvedHandler`] when `resolver` has no entry
/// for an owning webhook's slug.
pub fn build_routes(
    registry: &IntegrationRegistry,
    resolver: &dyn HandlerResolver,
) -> Result<Vec<Route>, RegistryError> {
    let mut routes = Vec::new();

    for integration in registry.webhooks() {
        let spec = integration
            .webhook()
            .expect("webhooks() yields only webhook descriptors");

        if !spec.owns_route {
            tracing::debug!(
                "Skipping route for '{}' (shared route {})",
                integration.name,
                spec.url
            );
            continue;
        }

        let handler =
            resolver
                .resolve(&spec.handler)
                .ok_or_else(|| RegistryError::UnresolvedHandler {
                    integration: integration.name.clone(),
                    handler: spec.handler.clone(),
                })?;

        routes.push(Route {
            pattern: spec.url.clone(),
            handler,
        });
    }

    tracing::info!("Built {} webhook routes", routes.len());
    Ok(routes)
}
