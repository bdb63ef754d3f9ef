//! Documentation rendering seam.
//!
//! The markdown pipeline itself lives outside this crate; collaborators
//! implement [`MarkdownRenderer`] and the registry drives it, either for a
//! single integration's help page ([`IntegrationRegistry::render_help`]) or
//! for the full `/integrations` page ([`IntegrationRegistry::doc_entries`]).

use serde::Serialize;

use crate::registry::{IntegrationRegistry, RegistryError};

/// Template context passed to the markdown renderer.
pub type DocContext = serde_json::Map<String, serde_json::Value>;

/// Error type for markdown rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render {path}: {reason}")]
    RenderFailed { path: String, reason: String },

    #[error("documentation fragment not found: {path}")]
    FragmentNotFound { path: String },
}

/// Renders a markdown documentation fragment with a template context.
///
/// May perform blocking I/O on each call; nothing is cached here.
pub trait MarkdownRenderer {
    fn render(&self, path: &str, context: &DocContext) -> Result<String, RenderError>;
}

/// One row of the `/integrations` documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct DocEntry {
    pub name: String,
    pub display_name: String,
    pub logo: String,
    /// Rendered help content; `None` for integrations without a doc path.
    pub doc_html: Option<String>,
    pub secondary_line_text: Option<String>,
    pub stream_name: String,
}

impl IntegrationRegistry {
    /// Render the help content for one integration.
    ///
    /// Fails with [`RegistryError::MissingDoc`] when the integration has no
    /// documentation fragment; an absent doc path is an error here, never
    /// an empty render.
    pub fn render_help(
        &self,
        name: &str,
        renderer: &dyn MarkdownRenderer,
        context: &DocContext,
    ) -> Result<String, RegistryError> {
        let integration = self.get(name)?;
        let doc = integration
            .doc
            .as_deref()
            .ok_or_else(|| RegistryError::MissingDoc {
                name: integration.name.clone(),
            })?;
        Ok(renderer.render(doc, context)?)
    }

    /// One [`DocEntry`] per integration, in declared order.
    ///
    /// `context` is handed to the renderer for every fragment; integrations
    /// without a doc path get `doc_html: None` rather than an error.
    pub fn doc_entries(
        &self,
        renderer: &dyn MarkdownRenderer,
        context: &DocContext,
    ) -> Result<Vec<DocEntry>, RegistryError> {
        let mut entries = Vec::with_capacity(self.len());

        for integration in self.iter() {
            let doc_html = match integration.doc.as_deref() {
                Some(path) => Some(renderer.render(path, context)?),
                None => None,
            };
            entries.push(DocEntry {
                name: integration.name.clone(),
                display_name: integration.display_name.clone(),
                logo: integration.logo.clone(),
                doc_html,
                secondary_line_text: integration.secondary_line_text.clone(),
                stream_name: integration.stream_name.clone(),
            });
        }

        Ok(entries)
    }
}
