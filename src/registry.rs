//! Message registry: single source of truth for all registered format strings.
//!
//! The registry is populated exactly once, during process initialization, by
//! running every catalog registrar in a fixed order, and is read-only from
//! then on. The write phase happens inside a [`RegistryBuilder`]; the result
//! is an immutable [`MessageRegistry`] that many threads can read without
//! synchronization. The process-wide instance lives behind a `OnceLock`, so
//! the first reader to arrive triggers initialization and every later reader
//! observes the fully built map.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::catalog;
use crate::id::MessageId;

/// Accumulates catalog registrations during the one-time write phase.
///
/// Registering the same identifier twice is almost always a catalog defect
/// (two logically different messages packed to the same integer). The
/// builder does not fail on it: the last registration wins, a warning is
/// logged, and the identifier is recorded so tests can assert the shipped
/// catalogs are collision-free.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<MessageId, String>,
    overwritten: Vec<MessageId>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a format string with a message identifier.
    ///
    /// If the identifier was already registered, the previous format string
    /// is replaced and the identifier is recorded as overwritten.
    pub fn register(&mut self, id: MessageId, format: impl Into<String>) {
        let format = format.into();
        if let Some(previous) = self.entries.insert(id, format) {
            warn!(
                message_id = id.raw(),
                replaced_length = previous.len(),
                "message identifier registered more than once; last registration wins"
            );
            self.overwritten.push(id);
        }
    }

    /// Identifiers that were registered more than once, in the order the
    /// collisions were observed.
    pub fn overwritten(&self) -> &[MessageId] {
        &self.overwritten
    }

    /// Number of entries registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the accumulated entries into an immutable registry.
    pub fn build(self) -> MessageRegistry {
        MessageRegistry { entries: self.entries }
    }
}

/// Immutable mapping from message identifier to format string.
pub struct MessageRegistry {
    entries: HashMap<MessageId, String>,
}

/// Process-wide registry instance (initialized lazily).
static REGISTRY: OnceLock<MessageRegistry> = OnceLock::new();

impl MessageRegistry {
    /// Get the process-wide registry.
    ///
    /// The first call runs every catalog registrar in a fixed order and
    /// freezes the result; subsequent calls return the same instance. The
    /// `OnceLock` provides the happens-before edge between the one-time
    /// write phase and all concurrent readers.
    pub fn global() -> &'static MessageRegistry {
        REGISTRY.get_or_init(|| {
            let mut builder = RegistryBuilder::new();
            catalog::register_all(&mut builder);
            builder.build()
        })
    }

    /// Look up the raw format string for an identifier.
    ///
    /// Returns `None` for identifiers that were never registered; never
    /// panics.
    pub fn lookup(&self, id: MessageId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Whether an identifier is registered.
    pub fn contains(&self, id: MessageId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Read-only view of every registered entry, for diagnostics and
    /// tooling. Iteration order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (MessageId, &str)> {
        self.entries.iter().map(|(id, format)| (*id, format.as_str()))
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{Category, Severity};

    fn test_id(sequence: u32) -> MessageId {
        MessageId::of(Category::UserDefined, Severity::MildError, sequence)
    }

    // ==================== Builder Tests ====================

    #[test]
    fn test_register_and_lookup() {
        let mut builder = RegistryBuilder::new();
        builder.register(test_id(1), "Something happened to %s");

        let registry = builder.build();
        assert_eq!(registry.lookup(test_id(1)), Some("Something happened to %s"));
        assert!(registry.contains(test_id(1)));
    }

    #[test]
    fn test_lookup_unregistered_returns_none() {
        let registry = RegistryBuilder::new().build();
        assert_eq!(registry.lookup(test_id(1)), None);
        assert!(!registry.contains(test_id(1)));
    }

    #[test]
    fn test_reregistration_last_wins_and_is_recorded() {
        let mut builder = RegistryBuilder::new();
        builder.register(test_id(5), "first text");
        assert!(builder.overwritten().is_empty());

        builder.register(test_id(5), "second text");
        assert_eq!(builder.overwritten(), &[test_id(5)]);
        assert_eq!(builder.len(), 1);

        let registry = builder.build();
        assert_eq!(registry.lookup(test_id(5)), Some("second text"));
    }

    #[test]
    fn test_builder_len() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.is_empty());

        builder.register(test_id(1), "one");
        builder.register(test_id(2), "two");
        assert_eq!(builder.len(), 2);
        assert!(!builder.is_empty());
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_entries_view() {
        let mut builder = RegistryBuilder::new();
        builder.register(test_id(1), "one");
        builder.register(test_id(2), "two");

        let registry = builder.build();
        let mut entries: Vec<_> = registry.entries().collect();
        entries.sort_by_key(|(id, _)| *id);

        assert_eq!(entries, vec![(test_id(1), "one"), (test_id(2), "two")]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(registry.entries().count(), 0);
    }

    // ==================== Global Registry Tests ====================

    #[test]
    fn test_global_returns_singleton() {
        let registry1 = MessageRegistry::global();
        let registry2 = MessageRegistry::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_global_is_populated_by_catalogs() {
        let registry = MessageRegistry::global();
        assert!(!registry.is_empty());
    }
}
