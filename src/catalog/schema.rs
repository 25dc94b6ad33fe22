//! Messages for schema elements: attribute syntaxes, matching rules, and
//! schema validation failures.

use crate::id::{Category, MessageId, Severity};
use crate::registry::RegistryBuilder;

/// A value does not conform to its attribute syntax. Takes the value and
/// the syntax name.
pub const VALUE_VIOLATES_SYNTAX: MessageId =
    MessageId::of(Category::Schema, Severity::MildError, 1);

/// An entry references an attribute type that is not defined in the
/// schema. Takes the attribute type name and the entry name.
pub const UNKNOWN_ATTRIBUTE_TYPE: MessageId =
    MessageId::of(Category::Schema, Severity::MildError, 2);

/// The default matching rule for a syntax could not be found. Takes the
/// matching rule name and the syntax name. Matching against attributes of
/// that syntax is disabled until the rule is available.
pub const UNKNOWN_MATCHING_RULE: MessageId =
    MessageId::of(Category::Schema, Severity::SevereWarning, 3);

/// A schema definition with the same identifier already exists. Takes the
/// definition identifier.
pub const DUPLICATE_DEFINITION: MessageId =
    MessageId::of(Category::Schema, Severity::SevereError, 4);

/// A schema definition could not be parsed. Takes the definition text and
/// the parse error.
pub const CANNOT_PARSE_DEFINITION: MessageId =
    MessageId::of(Category::Schema, Severity::SevereError, 5);

/// A boolean-syntax value was neither true nor false. Takes the value.
pub const ILLEGAL_BOOLEAN_VALUE: MessageId =
    MessageId::of(Category::Schema, Severity::MildError, 6);

/// An integer-syntax value could not be parsed as an integer. Takes the
/// value and the attribute name.
pub const ILLEGAL_INTEGER_VALUE: MessageId =
    MessageId::of(Category::Schema, Severity::MildError, 7);

/// An entry is missing an attribute its object class requires. Takes the
/// entry name, the attribute name, and the object class name.
pub const MISSING_REQUIRED_SCHEMA_ATTRIBUTE: MessageId =
    MessageId::of(Category::Schema, Severity::MildError, 8);

/// The schema was reloaded from its definition files. Takes the number of
/// definitions loaded.
pub const SCHEMA_RELOADED: MessageId =
    MessageId::of(Category::Schema, Severity::Informational, 9);

/// Install the format strings for every schema message.
pub fn register_messages(builder: &mut RegistryBuilder) {
    builder.register(
        VALUE_VIOLATES_SYNTAX,
        "The provided value %s is not allowed for attributes with the %s syntax",
    );
    builder.register(
        UNKNOWN_ATTRIBUTE_TYPE,
        "Attribute type %s referenced by entry %s is not defined in the server schema",
    );
    builder.register(
        UNKNOWN_MATCHING_RULE,
        "Unable to retrieve matching rule %s used as the default for the %s syntax.  Matching \
         will not be allowed for attributes with that syntax until the rule is available",
    );
    builder.register(
        DUPLICATE_DEFINITION,
        "Unable to register schema definition %s because a definition with that identifier \
         already exists",
    );
    builder.register(
        CANNOT_PARSE_DEFINITION,
        "Unable to parse schema definition \"%s\": %s",
    );
    builder.register(
        ILLEGAL_BOOLEAN_VALUE,
        "The provided value %s is not allowed for attributes with a Boolean syntax.  The only \
         allowed values are 'TRUE' and 'FALSE'",
    );
    builder.register(
        ILLEGAL_INTEGER_VALUE,
        "The provided value %s for attribute %s cannot be parsed as an integer",
    );
    builder.register(
        MISSING_REQUIRED_SCHEMA_ATTRIBUTE,
        "Entry %s is missing attribute %s, which is required by its object class %s",
    );
    builder.register(SCHEMA_RELOADED, "The server schema has been reloaded with %d definitions");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_schema_ids_use_schema_category() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);

        for (id, _) in builder.build().entries() {
            assert_eq!(id.category(), Some(Category::Schema));
        }
    }

    #[test]
    fn test_boolean_message_mentions_allowed_values() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);
        let registry = builder.build();

        let format = registry.lookup(ILLEGAL_BOOLEAN_VALUE).expect("registered");
        assert!(format.contains("'TRUE'"));
        assert!(format.contains("'FALSE'"));
    }

    #[test]
    fn test_registration_count() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);
        assert_eq!(builder.len(), 9);
        assert!(builder.overwritten().is_empty());
    }
}
