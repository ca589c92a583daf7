//! # Domain Identity Newtypes
//!
//! Newtype wrappers for identifiers assigned by external collaborators.
//! The engine never generates or persists identity; it only threads the
//! store's document identifier through its reports so the presentation
//! layer can link a validation result back to the stored document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored document, assigned by the Document Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Generate a new random document identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "document:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let id = DocumentId::new();
        assert!(id.to_string().starts_with("document:"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = DocumentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
