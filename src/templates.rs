//! Template store: named ledger snapshots in key-value storage.
//!
//! All templates live under one key as a JSON array, mirroring the
//! source deployment's browser-storage layout. Loading replaces the
//! ledger wholesale; stale technician ids in old snapshots are kept
//! (see `DESIGN.md`) and surface during validation or in the payload.

use chrono::Utc;
use tracing::debug;

use crate::ledger::{AllocationLedger, LedgerSnapshot};
use crate::models::ScaleTemplate;
use crate::ports::KeyValueStore;

const STORAGE_KEY: &str = "scale_templates";

/// Errors raised by template operations.
#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    /// The template name is empty or whitespace-only.
    #[error("template name must not be blank")]
    BlankName,
    /// Stored template data could not be read or written.
    #[error("template storage error: {0}")]
    Storage(String),
}

/// Named snapshots of the allocation ledger, persisted through a
/// [`KeyValueStore`].
#[derive(Debug)]
pub struct TemplateStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TemplateStore<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves a snapshot under a name.
    ///
    /// The name is trimmed; blank names are rejected. Names are not
    /// required to be unique — every save appends a new entry with its
    /// own id.
    ///
    /// # Errors
    ///
    /// [`TemplateError::BlankName`] for blank names,
    /// [`TemplateError::Storage`] when storage is corrupt.
    pub fn save(
        &mut self,
        name: &str,
        snapshot: LedgerSnapshot,
    ) -> Result<ScaleTemplate, TemplateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TemplateError::BlankName);
        }

        let mut templates = self.read_all()?;
        let created_at = Utc::now();
        let template = ScaleTemplate {
            id: format!("tpl-{}-{}", created_at.timestamp_millis(), templates.len()),
            name: name.to_string(),
            snapshot,
            created_at,
        };
        templates.push(template.clone());
        self.write_all(&templates)?;

        debug!(id = %template.id, name = %template.name, "template saved");
        Ok(template)
    }

    /// All stored templates, unfiltered, in storage order.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Storage`] when the stored data is corrupt.
    pub fn list(&self) -> Result<Vec<ScaleTemplate>, TemplateError> {
        self.read_all()
    }

    /// Deletes one template by id. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Storage`] when the stored data is corrupt.
    pub fn delete(&mut self, id: &str) -> Result<bool, TemplateError> {
        let mut templates = self.read_all()?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        let removed = templates.len() != before;
        if removed {
            self.write_all(&templates)?;
            debug!(%id, "template deleted");
        }
        Ok(removed)
    }

    /// Loads a template's snapshot into the ledger, replacing its
    /// contents. Returns whether the template was found.
    ///
    /// # Errors
    ///
    /// [`TemplateError::Storage`] when the stored data is corrupt.
    pub fn load_into(
        &self,
        id: &str,
        ledger: &mut AllocationLedger,
    ) -> Result<bool, TemplateError> {
        let templates = self.read_all()?;
        match templates.into_iter().find(|t| t.id == id) {
            Some(template) => {
                ledger.load(template.snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn read_all(&self) -> Result<Vec<ScaleTemplate>, TemplateError> {
        match self.store.get(STORAGE_KEY) {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| TemplateError::Storage(e.to_string()))
            }
        }
    }

    fn write_all(&mut self, templates: &[ScaleTemplate]) -> Result<(), TemplateError> {
        let raw =
            serde_json::to_string(templates).map_err(|e| TemplateError::Storage(e.to_string()))?;
        self.store.set(STORAGE_KEY, raw);
        Ok(())
    }
}
