//! Invoice identifiers.

use std::fmt;

use serde::Serialize;

/// Unique identifier for an [`Invoice`](crate::invoice::Invoice).
///
/// A random UUIDv4, rendered and serialized as its hyphenated string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceId(uuid::Uuid);

impl InvoiceId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        assert_ne!(InvoiceId::new(), InvoiceId::new());
    }

    #[test]
    fn should_display_as_v4_uuid() {
        let text = InvoiceId::new().to_string();
        let parsed = uuid::Uuid::parse_str(&text).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(text.len(), 36);
    }

    #[test]
    fn should_serialize_as_displayed_string() {
        let id = InvoiceId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
