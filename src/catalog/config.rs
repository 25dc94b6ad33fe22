//! Messages for configuration handling: reading, validating, and applying
//! the server configuration.

use crate::id::{Category, MessageId, Severity};
use crate::registry::RegistryBuilder;

/// The configuration file could not be opened. Takes the file path and the
/// underlying error.
pub const CANNOT_OPEN_FILE: MessageId = MessageId::of(Category::Config, Severity::FatalError, 1);

/// The configuration file could not be parsed. Takes the file path, the
/// line number, and the parse error.
pub const CANNOT_PARSE_FILE: MessageId = MessageId::of(Category::Config, Severity::FatalError, 2);

/// A configuration entry is missing an attribute it is required to have.
/// Takes the attribute name and the entry name.
pub const MISSING_REQUIRED_ATTRIBUTE: MessageId =
    MessageId::of(Category::Config, Severity::SevereError, 3);

/// A configuration attribute holds a value outside its acceptable set.
/// Takes the value and the attribute name.
pub const INVALID_ATTRIBUTE_VALUE: MessageId =
    MessageId::of(Category::Config, Severity::SevereError, 4);

/// An attribute appears in an entry where it is not recognized. Takes the
/// attribute name and the entry name.
pub const UNRECOGNIZED_ATTRIBUTE: MessageId =
    MessageId::of(Category::Config, Severity::MildWarning, 5);

/// A configuration change was applied at runtime. Takes the entry name.
pub const CHANGE_APPLIED: MessageId =
    MessageId::of(Category::Config, Severity::Informational, 6);

/// A configuration change requires a restart to take effect. Takes the
/// attribute name.
pub const CHANGE_REQUIRES_RESTART: MessageId =
    MessageId::of(Category::Config, Severity::Notice, 7);

/// A numeric attribute is outside its bounds. Takes the value, the
/// attribute name, the lower bound, and the upper bound.
pub const VALUE_OUT_OF_RANGE: MessageId =
    MessageId::of(Category::Config, Severity::SevereError, 8);

/// The configuration archive could not be written after a change. Takes
/// the archive path and the underlying error.
pub const CANNOT_WRITE_ARCHIVE: MessageId =
    MessageId::of(Category::Config, Severity::SevereWarning, 9);

/// Install the format strings for every configuration message.
pub fn register_messages(builder: &mut RegistryBuilder) {
    builder.register(
        CANNOT_OPEN_FILE,
        "An error occurred while attempting to open the configuration file %s for reading: %s",
    );
    builder.register(
        CANNOT_PARSE_FILE,
        "An error occurred while attempting to parse the configuration file %s at line %d: %s",
    );
    builder.register(
        MISSING_REQUIRED_ATTRIBUTE,
        "Required attribute %s is missing from configuration entry %s",
    );
    builder.register(
        INVALID_ATTRIBUTE_VALUE,
        "The provided value %s is not acceptable for configuration attribute %s",
    );
    builder.register(
        UNRECOGNIZED_ATTRIBUTE,
        "Attribute %s in configuration entry %s is not recognized and will be ignored",
    );
    builder.register(
        CHANGE_APPLIED,
        "The change to configuration entry %s has been applied and is now in effect",
    );
    builder.register(
        CHANGE_REQUIRES_RESTART,
        "The change to configuration attribute %s will not take effect until the server is \
         restarted",
    );
    builder.register(
        VALUE_OUT_OF_RANGE,
        "The value %d for configuration attribute %s is outside the acceptable range of %d \
         through %d",
    );
    builder.register(
        CANNOT_WRITE_ARCHIVE,
        "The updated configuration could not be archived to %s: %s.  The change is in effect \
         but will not survive a restore from the archive",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_config_ids_use_config_category() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);

        for (id, _) in builder.build().entries() {
            assert_eq!(id.category(), Some(Category::Config));
        }
    }

    #[test]
    fn test_fatal_messages_cover_file_access() {
        assert_eq!(CANNOT_OPEN_FILE.severity(), Some(Severity::FatalError));
        assert_eq!(CANNOT_PARSE_FILE.severity(), Some(Severity::FatalError));
    }

    #[test]
    fn test_range_message_has_numeric_placeholders() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);
        let registry = builder.build();

        let format = registry.lookup(VALUE_OUT_OF_RANGE).expect("registered");
        assert_eq!(format.matches("%d").count(), 3);
        assert_eq!(format.matches("%s").count(), 1);
    }

    #[test]
    fn test_registration_count() {
        let mut builder = RegistryBuilder::new();
        register_messages(&mut builder);
        assert_eq!(builder.len(), 9);
        assert!(builder.overwritten().is_empty());
    }
}
