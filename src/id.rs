//! Packed message identifiers: the bitfield codec.
//!
//! Every diagnostic message is identified by a single `u32` that encodes the
//! owning subsystem, the severity, and a per-subsystem sequence number:
//!
//! ```text
//! | 12 bits: category | 4 bits: severity | 16 bits: sequence |
//! ```
//!
//! Catalog modules build their identifiers at compile time by combining the
//! pre-shifted [`Category`] and [`Severity`] constants with a sequence number
//! via bitwise OR ([`MessageId::of`]). That construction performs **no
//! masking and no validation**: a sequence number of `2^16` or more silently
//! bleeds into the severity field and produces an identifier that collides
//! with, or masquerades as, a different message. Keeping sequence numbers in
//! range is the catalog author's responsibility; [`MessageId::checked`] is
//! the strict constructor for call sites that want the contract enforced.

use thiserror::Error;

/// Number of bits used for the per-category sequence number.
const SEQUENCE_BITS: u32 = 16;

/// Number of bits used for the severity field.
const SEVERITY_BITS: u32 = 4;

/// Mask for extracting the sequence number (16 bits).
const SEQUENCE_MASK: u32 = (1 << SEQUENCE_BITS) - 1;

/// Mask for extracting the severity field (4 bits).
const SEVERITY_MASK: u32 = ((1 << SEVERITY_BITS) - 1) << SEQUENCE_BITS;

/// Mask for extracting the category field (high 12 bits).
const CATEGORY_MASK: u32 = !(SEQUENCE_MASK | SEVERITY_MASK);

/// The functional subsystem that owns a block of message identifiers.
///
/// Discriminants are pre-shifted into the high bitfield so that catalog
/// constants can be assembled with a plain bitwise OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Category {
    /// Core server processing.
    Core = 0x0000_0000,
    /// Configuration handling.
    Config = 0x0010_0000,
    /// Client protocol processing.
    Protocol = 0x0020_0000,
    /// Schema elements and validation.
    Schema = 0x0030_0000,
    /// Plugin processing.
    Plugin = 0x0040_0000,
    /// Backend data storage.
    Backend = 0x0050_0000,
    /// Command-line tools.
    Tools = 0x0060_0000,
    /// Administrative task processing.
    Task = 0x0070_0000,
    /// Access control handling.
    AccessControl = 0x0080_0000,
    /// The administration framework.
    Admin = 0x0090_0000,
    /// Data synchronization between servers.
    Sync = 0x00A0_0000,
    /// Third-party extensions.
    ThirdParty = 0x00B0_0000,
    /// User-defined extensions.
    UserDefined = 0x00C0_0000,
}

impl Category {
    /// Every defined category, in discriminant order.
    pub const ALL: [Category; 13] = [
        Category::Core,
        Category::Config,
        Category::Protocol,
        Category::Schema,
        Category::Plugin,
        Category::Backend,
        Category::Tools,
        Category::Task,
        Category::AccessControl,
        Category::Admin,
        Category::Sync,
        Category::ThirdParty,
        Category::UserDefined,
    ];

    /// Recover a category from the masked high bits of an identifier.
    ///
    /// Returns `None` when the bits hold no defined category, which happens
    /// for identifiers that were never produced by this codec (or were
    /// produced in violation of the sequence-width contract).
    pub fn from_mask(bits: u32) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| *category as u32 == bits)
    }

    /// Human-readable category name for log and admin output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Core => "CORE",
            Category::Config => "CONFIG",
            Category::Protocol => "PROTOCOL",
            Category::Schema => "SCHEMA",
            Category::Plugin => "PLUGIN",
            Category::Backend => "BACKEND",
            Category::Tools => "TOOLS",
            Category::Task => "TASK",
            Category::AccessControl => "ACCESS_CONTROL",
            Category::Admin => "ADMIN",
            Category::Sync => "SYNC",
            Category::ThirdParty => "THIRD_PARTY",
            Category::UserDefined => "USER_DEFINED",
        }
    }
}

/// The diagnostic level of a message.
///
/// Discriminants are pre-shifted into the middle bitfield, between the
/// category block and the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Severity {
    /// Informational message with no action required.
    Informational = 0x0000_0000,
    /// Warning about a condition the server can fully work around.
    MildWarning = 0x0001_0000,
    /// Warning about a condition that may degrade behavior.
    SevereWarning = 0x0002_0000,
    /// Error limited to a single operation.
    MildError = 0x0003_0000,
    /// Error that impacts more than the triggering operation.
    SevereError = 0x0004_0000,
    /// Error the server cannot continue running after.
    FatalError = 0x0005_0000,
    /// Debugging output.
    Debug = 0x0006_0000,
    /// Significant event that is not a problem.
    Notice = 0x0007_0000,
}

impl Severity {
    /// Every defined severity, in discriminant order.
    pub const ALL: [Severity; 8] = [
        Severity::Informational,
        Severity::MildWarning,
        Severity::SevereWarning,
        Severity::MildError,
        Severity::SevereError,
        Severity::FatalError,
        Severity::Debug,
        Severity::Notice,
    ];

    /// Recover a severity from the masked middle bits of an identifier.
    pub fn from_mask(bits: u32) -> Option<Severity> {
        Severity::ALL
            .into_iter()
            .find(|severity| *severity as u32 == bits)
    }

    /// Human-readable severity name for log and admin output.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Informational => "INFO",
            Severity::MildWarning => "MILD_WARNING",
            Severity::SevereWarning => "SEVERE_WARNING",
            Severity::MildError => "MILD_ERROR",
            Severity::SevereError => "SEVERE_ERROR",
            Severity::FatalError => "FATAL_ERROR",
            Severity::Debug => "DEBUG",
            Severity::Notice => "NOTICE",
        }
    }
}

/// Error from the strict identifier constructor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MessageIdError {
    /// The sequence number does not fit in its 16-bit field.
    #[error("sequence number {sequence} does not fit in 16 bits")]
    SequenceOverflow {
        /// The out-of-range sequence value.
        sequence: u32,
    },
}

/// A packed message identifier.
///
/// Identifiers are compile-time constants defined by catalog modules; they
/// are never computed at runtime and never change once a catalog ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u32);

impl MessageId {
    /// Pack a category, severity, and sequence number into an identifier.
    ///
    /// This is a plain bitwise OR with no masking: `sequence` must be
    /// strictly less than `2^16` or the result silently overlaps the
    /// severity field. The constraint is a documented contract, not an
    /// enforced one, so that catalog constants stay `const`-evaluable;
    /// [`MessageId::checked`] enforces it at runtime.
    pub const fn of(category: Category, severity: Severity, sequence: u32) -> MessageId {
        MessageId(category as u32 | severity as u32 | sequence)
    }

    /// Strict variant of [`MessageId::of`].
    ///
    /// # Errors
    ///
    /// Returns [`MessageIdError::SequenceOverflow`] when `sequence` does not
    /// fit the 16-bit sequence field.
    pub fn checked(
        category: Category,
        severity: Severity,
        sequence: u32,
    ) -> Result<MessageId, MessageIdError> {
        if sequence > SEQUENCE_MASK {
            return Err(MessageIdError::SequenceOverflow { sequence });
        }
        Ok(MessageId::of(category, severity, sequence))
    }

    /// Wrap a raw integer without interpretation.
    ///
    /// Useful for identifiers that arrive from outside the catalog (log
    /// parsing, admin requests). The result may not decompose into defined
    /// category or severity constants.
    pub const fn from_raw(raw: u32) -> MessageId {
        MessageId(raw)
    }

    /// The raw packed integer.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The owning category, if the category bits hold a defined constant.
    pub fn category(self) -> Option<Category> {
        Category::from_mask(self.0 & CATEGORY_MASK)
    }

    /// The severity, if the severity bits hold a defined constant.
    pub fn severity(self) -> Option<Severity> {
        Severity::from_mask(self.0 & SEVERITY_MASK)
    }

    /// The per-category sequence number.
    pub const fn sequence(self) -> u32 {
        self.0 & SEQUENCE_MASK
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
