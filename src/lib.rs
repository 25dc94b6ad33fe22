//! Centralized message catalog for server diagnostics.
//!
//! Every diagnostic the server emits is identified by a packed numeric code
//! that encodes its owning subsystem, its severity, and a per-subsystem
//! sequence number, and is associated with a printf-style format string.
//! This crate is the single source of truth for those codes and strings: a
//! pure in-memory lookup and formatting service with no I/O of its own.
//!
//! # Architecture
//!
//! - `id`: the identifier codec (bitfield layout, packing, and unpacking)
//! - `registry`: the process-wide identifier-to-format-string mapping,
//!   populated exactly once at startup
//! - `catalog`: registrar modules, one per functional subsystem, that
//!   define the shipped message constants and their format strings
//! - `formatter`: the lookup/format API the rest of the server calls
//! - `metrics`: fallback-rate counters for the lookup path
//!
//! # Example
//!
//! ```
//! use message_catalog::{catalog, get_message_with_args};
//!
//! let text = get_message_with_args(
//!     catalog::config::MISSING_REQUIRED_ATTRIBUTE,
//!     &[&"ds-cfg-listen-port", &"cn=Connection Handler"],
//! );
//! assert_eq!(
//!     text,
//!     "Required attribute ds-cfg-listen-port is missing from configuration entry \
//!      cn=Connection Handler"
//! );
//! ```
//!
//! # Failure posture
//!
//! The formatter sits on the error-reporting path, so it never panics and
//! never returns an error: unknown identifiers and placeholder/argument
//! mismatches degrade to descriptive fallback strings that preserve the
//! identifier, the raw format string, and the arguments.

pub mod catalog;
pub mod formatter;
pub mod id;
pub mod metrics;
pub mod registry;

pub use formatter::{format_message, format_message_with_args, get_message, get_message_with_args};
pub use id::{Category, MessageId, MessageIdError, Severity};
pub use metrics::{CatalogMetrics, MetricsReport};
pub use registry::{MessageRegistry, RegistryBuilder};
