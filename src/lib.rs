//! Integration registry for the Relay team-chat server.
//!
//! This crate declares all of the (documented) third-party integrations
//! the server knows about. The [`IntegrationRegistry`] drives both the
//! `/integrations` documentation page and the inbound webhook route table:
//!
//! ```text
//! catalog::builtin_registry(asset_root)
//!        |
//!        +-- routes::build_routes(&registry, &handlers)  -> route table
//!        |
//!        \-- registry.doc_entries(&renderer, &context)   -> /integrations page
//! ```
//!
//! To add a new non-webhook integration, add an entry to
//! [`catalog::integrations`]. To add a new webhook integration, add it to
//! [`catalog::webhook_integrations`] and register its handler in the
//! [`StaticHandlerMap`] your bootstrap builds.
//!
//! The registry is constructed exactly once at bootstrap from literal data
//! and is immutable afterward. Construction is all-or-nothing: duplicate
//! names, empty names, and (at route build) unregistered handler slugs are
//! fatal, because the registry is foundational to route construction.

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod registry;
pub mod render;
pub mod routes;

pub use catalog::{builtin_defs, builtin_registry};
pub use config::{ConfigError, Settings};
pub use descriptor::{Integration, IntegrationDef, IntegrationKind, LozengeSpec, WebhookSpec};
pub use registry::{IntegrationRegistry, RegistryError};
pub use render::{DocContext, DocEntry, MarkdownRenderer, RenderError};
pub use routes::{
    HandlerError, HandlerResolver, Route, StaticHandlerMap, WebhookEvent, WebhookHandler,
    build_routes,
};
