//! Catalog registrar modules, one per functional subsystem.
//!
//! Each module owns a disjoint slice of the identifier space: it defines
//! `pub const` message identifiers for its category and a
//! `register_messages` function that installs the matching format strings
//! into a [`RegistryBuilder`]. [`register_all`] runs every registrar in a
//! fixed order during process initialization; nothing registers after that.
//!
//! The modules here cover the subsystems this crate ships messages for.
//! Server components that define their own messages (third-party plugins,
//! user extensions) follow the same pattern against the `ThirdParty` and
//! `UserDefined` categories.

use tracing::debug;

use crate::registry::RegistryBuilder;

pub mod config;
pub mod core;
pub mod protocol;
pub mod schema;

/// Run every catalog registrar, in a fixed deterministic order.
pub(crate) fn register_all(builder: &mut RegistryBuilder) {
    core::register_messages(builder);
    config::register_messages(builder);
    protocol::register_messages(builder);
    schema::register_messages(builder);
    debug!(entries = builder.len(), "catalog registrars finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Collision Tests ====================

    #[test]
    fn test_no_identifier_registered_twice() {
        let mut builder = RegistryBuilder::new();
        register_all(&mut builder);

        assert!(
            builder.overwritten().is_empty(),
            "colliding message identifiers: {:?}",
            builder.overwritten()
        );
    }

    #[test]
    fn test_every_entry_decomposes() {
        let mut builder = RegistryBuilder::new();
        register_all(&mut builder);
        let registry = builder.build();

        for (id, format) in registry.entries() {
            assert!(id.category().is_some(), "undefined category bits in {id}");
            assert!(id.severity().is_some(), "undefined severity bits in {id}");
            assert!(!format.is_empty(), "empty format string for {id}");
        }
    }

    #[test]
    fn test_categories_own_disjoint_slices() {
        let mut builder = RegistryBuilder::new();
        register_all(&mut builder);
        let registry = builder.build();

        // Within one category, sequence numbers must be unique; across
        // categories they are free to repeat.
        let mut seen = HashSet::new();
        for (id, _) in registry.entries() {
            assert!(
                seen.insert((id.category(), id.sequence())),
                "sequence {} reused within {:?}",
                id.sequence(),
                id.category()
            );
        }
    }

    #[test]
    fn test_registration_is_deterministic() {
        let mut first = RegistryBuilder::new();
        register_all(&mut first);
        let mut second = RegistryBuilder::new();
        register_all(&mut second);

        assert_eq!(first.len(), second.len());
        let first = first.build();
        let second = second.build();
        for (id, format) in first.entries() {
            assert_eq!(second.lookup(id), Some(format));
        }
    }
}
