//! The integration registry: the canonical, bootstrap-constructed table of
//! every known integration, keyed by unique name.
//!
//! Built once during process bootstrap and passed by reference to its two
//! consumers, the documentation-page renderer and the route-table builder.
//! Immutable after construction; iteration preserves declared order so that
//! route registration and documentation ordering stay deterministic.

use std::collections::HashMap;
use std::path::Path;

use crate::descriptor::{Integration, IntegrationDef, IntegrationKind};
use crate::render::RenderError;

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("integration declared with an empty name")]
    EmptyName,

    #[error("duplicate integration name: {name}")]
    DuplicateName { name: String },

    #[error("integration not found: {0}")]
    NotFound(String),

    #[error("no handler registered for '{integration}' (slug: {handler})")]
    UnresolvedHandler {
        integration: String,
        handler: String,
    },

    #[error("integration '{name}' has no documentation fragment")]
    MissingDoc { name: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Registry of all known integrations.
#[derive(Debug)]
pub struct IntegrationRegistry {
    /// Descriptors in declared order.
    items: Vec<Integration>,
    /// Name -> position in `items`.
    index: HashMap<String, usize>,
}

impl IntegrationRegistry {
    /// Build every descriptor and assemble the registry.
    ///
    /// All-or-nothing: a duplicate or empty name, anywhere in the list,
    /// fails the whole construction. `asset_root` is the directory logo
    /// probes run against.
    pub fn new(defs: Vec<IntegrationDef>, asset_root: &Path) -> Result<Self, RegistryError> {
        let mut items: Vec<Integration> = Vec::with_capacity(defs.len());
        let mut index = HashMap::with_capacity(defs.len());

        for def in defs {
            let integration = def.build(asset_root)?;
            if index.contains_key(&integration.name) {
                return Err(RegistryError::DuplicateName {
                    name: integration.name,
                });
            }
            index.insert(integration.name.clone(), items.len());
            items.push(integration);
        }

        let webhooks = items
            .iter()
            .filter(|i| matches!(i.kind, IntegrationKind::Webhook(_)))
            .count();
        let lozenges = items
            .iter()
            .filter(|i| matches!(i.kind, IntegrationKind::Lozenge(_)))
            .count();
        tracing::info!(
            "Integration registry built: {} integrations ({} webhooks, {} lozenges)",
            items.len(),
            webhooks,
            lozenges
        );

        Ok(Self { items, index })
    }

    /// Get a descriptor by name, or `None` when absent.
    pub fn lookup(&self, name: &str) -> Option<&Integration> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Get a descriptor by name, with an explicit error when absent.
    pub fn get(&self, name: &str) -> Result<&Integration, RegistryError> {
        self.lookup(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// All descriptors, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Integration> {
        self.items.iter()
    }

    /// Webhook descriptors only, in declared order.
    pub fn webhooks(&self) -> impl Iterator<Item = &Integration> {
        self.items
            .iter()
            .filter(|i| matches!(i.kind, IntegrationKind::Webhook(_)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
