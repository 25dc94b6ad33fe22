//! Message lookup and formatting: the API the rest of the server calls.
//!
//! This module sits on the error-reporting path, so its single most
//! important property is that it never panics and never surfaces an error:
//! every failure mode degrades to a human-readable diagnostic string. An
//! unknown identifier produces a fallback naming the identifier; a format
//! string whose placeholders disagree with the supplied arguments produces
//! a fallback carrying the raw format string and the raw arguments, so the
//! mismatch itself stays diagnosable. Substitution failures are explicit
//! [`RenderError`] values internally and only become fallback text at the
//! public boundary.
//!
//! Format strings use printf-style positional directives, consumed left to
//! right: `%s` substitutes any argument via its `Display` conversion, `%d`
//! substitutes an argument whose `Display` form is an integer, and `%%`
//! emits a literal percent sign.

use std::fmt;

use thiserror::Error;

use crate::id::MessageId;
use crate::metrics::CatalogMetrics;
use crate::registry::MessageRegistry;

/// Why a format string could not be combined with the supplied arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
enum RenderError {
    /// A directive wanted an argument that was not supplied.
    #[error("directive %{directive} has no argument at position {index}")]
    MissingArgument {
        /// The directive character (`s` or `d`).
        directive: char,
        /// Zero-based position of the missing argument.
        index: usize,
    },

    /// More arguments were supplied than the format string consumes.
    #[error("{provided} arguments provided but the format string consumes {consumed}")]
    ExtraArguments { consumed: usize, provided: usize },

    /// A `%d` directive was given an argument that does not render as an
    /// integer.
    #[error("argument at position {index} is not the integer %d requires")]
    NotAnInteger { index: usize },

    /// The format string contains a directive this formatter does not know.
    #[error("unsupported format directive %{directive}")]
    UnsupportedDirective { directive: char },

    /// The format string ends with a bare `%`.
    #[error("format string ends with a bare %")]
    TruncatedDirective,
}

/// How a lookup was satisfied, for metrics accounting.
enum Resolution {
    /// The identifier was registered and the output is the real message.
    Resolved,
    /// The identifier was never registered.
    UnknownId,
    /// The identifier was registered but substitution failed.
    FormatFailed,
}

/// Look up the raw format string for `id` in the process-wide registry.
///
/// Unknown identifiers yield a non-empty fallback string naming the
/// identifier. Never panics.
pub fn get_message(id: MessageId) -> String {
    let metrics = CatalogMetrics::global();
    metrics.record_lookup();
    let (text, resolution) = lookup_raw(MessageRegistry::global(), id);
    record(metrics, &resolution);
    text
}

/// Look up the format string for `id` in the process-wide registry and
/// substitute `args` into its positional directives.
///
/// Unknown identifiers and argument mismatches yield fallback strings that
/// preserve the identifier, the raw format string (when known), and the
/// arguments. Never panics.
pub fn get_message_with_args(id: MessageId, args: &[&dyn fmt::Display]) -> String {
    let metrics = CatalogMetrics::global();
    metrics.record_lookup();
    let (text, resolution) = lookup_formatted(MessageRegistry::global(), id, args);
    record(metrics, &resolution);
    text
}

/// [`get_message`] against an explicit registry. Does not touch the
/// process-wide metrics.
pub fn format_message(registry: &MessageRegistry, id: MessageId) -> String {
    lookup_raw(registry, id).0
}

/// [`get_message_with_args`] against an explicit registry. Does not touch
/// the process-wide metrics.
pub fn format_message_with_args(
    registry: &MessageRegistry,
    id: MessageId,
    args: &[&dyn fmt::Display],
) -> String {
    lookup_formatted(registry, id, args).0
}

fn record(metrics: &CatalogMetrics, resolution: &Resolution) {
    match resolution {
        Resolution::Resolved => {}
        Resolution::UnknownId => metrics.record_unknown_id(),
        Resolution::FormatFailed => metrics.record_format_failure(),
    }
}

fn lookup_raw(registry: &MessageRegistry, id: MessageId) -> (String, Resolution) {
    match registry.lookup(id) {
        Some(format) => (format.to_string(), Resolution::Resolved),
        None => (unknown_id_fallback(id, &[]), Resolution::UnknownId),
    }
}

fn lookup_formatted(
    registry: &MessageRegistry,
    id: MessageId,
    args: &[&dyn fmt::Display],
) -> (String, Resolution) {
    let Some(format) = registry.lookup(id) else {
        return (unknown_id_fallback(id, args), Resolution::UnknownId);
    };
    match render(format, args) {
        Ok(text) => (text, Resolution::Resolved),
        Err(error) => (mismatch_fallback(format, args, error), Resolution::FormatFailed),
    }
}

/// Fallback for an identifier that was never registered. Lists the supplied
/// arguments so diagnostic information is not dropped along with the
/// unresolvable identifier.
fn unknown_id_fallback(id: MessageId, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() {
        format!("Unknown message for message ID {id}")
    } else {
        format!(
            "Unknown message for message ID {id} (message arguments: {})",
            join_args(args)
        )
    }
}

/// Fallback for a registered format string whose directives disagree with
/// the supplied arguments: the raw format string survives unsubstituted,
/// followed by the failure and the raw arguments.
fn mismatch_fallback(format: &str, args: &[&dyn fmt::Display], error: RenderError) -> String {
    if args.is_empty() {
        format!("{format} (message formatting failed: {error})")
    } else {
        format!(
            "{format} (message formatting failed: {error}; message arguments: {})",
            join_args(args)
        )
    }
}

fn join_args(args: &[&dyn fmt::Display]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substitute `args` into the positional directives of `template`.
///
/// Directives consume arguments strictly left to right. Every argument must
/// be consumed: surplus arguments are as much a catalog defect as missing
/// ones, and on the error-reporting path a silently dropped argument is
/// lost evidence.
fn render(template: &str, args: &[&dyn fmt::Display]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut next = 0usize;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') => {
                let arg = args
                    .get(next)
                    .ok_or(RenderError::MissingArgument { directive: 's', index: next })?;
                out.push_str(&arg.to_string());
                next += 1;
            }
            Some('d') => {
                let arg = args
                    .get(next)
                    .ok_or(RenderError::MissingArgument { directive: 'd', index: next })?;
                let text = arg.to_string();
                if !is_integer(&text) {
                    return Err(RenderError::NotAnInteger { index: next });
                }
                out.push_str(&text);
                next += 1;
            }
            Some(other) => {
                return Err(RenderError::UnsupportedDirective { directive: other });
            }
            None => return Err(RenderError::TruncatedDirective),
        }
    }

    if next < args.len() {
        return Err(RenderError::ExtraArguments { consumed: next, provided: args.len() });
    }
    Ok(out)
}

/// Whether a rendered argument is an optionally signed decimal integer.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{Category, Severity};
    use crate::registry::RegistryBuilder;

    fn test_registry() -> MessageRegistry {
        let mut builder = RegistryBuilder::new();
        builder.register(id(1), "Value %s is invalid for %s");
        builder.register(id(2), "Worker thread %d exited after %d requests");
        builder.register(id(3), "Disk usage is at 90%% on partition %s");
        builder.register(id(4), "Server shutdown complete");
        builder.register(id(5), "Bad directive %q here");
        builder.register(id(6), "Trailing percent %");
        builder.build()
    }

    fn id(sequence: u32) -> MessageId {
        MessageId::of(Category::UserDefined, Severity::MildError, sequence)
    }

    // ==================== Raw Lookup Tests ====================

    #[test]
    fn test_raw_lookup_returns_template() {
        let registry = test_registry();
        assert_eq!(
            format_message(&registry, id(1)),
            "Value %s is invalid for %s"
        );
    }

    #[test]
    fn test_raw_lookup_unknown_id() {
        let registry = test_registry();
        let unknown = MessageId::from_raw(99_999_999);
        let text = format_message(&registry, unknown);
        assert_eq!(text, "Unknown message for message ID 99999999");
    }

    // ==================== Substitution Tests ====================

    #[test]
    fn test_string_substitution() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(1), &[&"x", &"attr"]);
        assert_eq!(text, "Value x is invalid for attr");
    }

    #[test]
    fn test_integer_substitution() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(2), &[&7, &1234]);
        assert_eq!(text, "Worker thread 7 exited after 1234 requests");
    }

    #[test]
    fn test_negative_integer_substitution() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(2), &[&-1, &0]);
        assert_eq!(text, "Worker thread -1 exited after 0 requests");
    }

    #[test]
    fn test_literal_percent() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(3), &[&"/var"]);
        assert_eq!(text, "Disk usage is at 90% on partition /var");
    }

    #[test]
    fn test_no_placeholders_no_args() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(4), &[]);
        assert_eq!(text, "Server shutdown complete");
    }

    #[test]
    fn test_mixed_display_types() {
        let registry = test_registry();
        // %s accepts anything with a Display conversion
        let text = format_message_with_args(&registry, id(1), &[&42, &'c']);
        assert_eq!(text, "Value 42 is invalid for c");
    }

    // ==================== Unknown-ID Fallback Tests ====================

    #[test]
    fn test_unknown_id_with_args_lists_arguments() {
        let registry = test_registry();
        let unknown = MessageId::from_raw(99_999_999);
        let text = format_message_with_args(&registry, unknown, &[&"a", &42]);

        assert!(text.contains("99999999"));
        assert!(text.contains("a, 42"));
    }

    // ==================== Mismatch Fallback Tests ====================

    #[test]
    fn test_too_few_arguments_falls_back_to_template() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(1), &[&"only-one"]);

        assert!(text.contains("Value %s is invalid for %s"));
        assert!(text.contains("only-one"));
    }

    #[test]
    fn test_too_many_arguments_falls_back_to_template() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(1), &[&1, &2, &3]);

        assert!(text.contains("Value %s is invalid for %s"));
        assert!(text.contains("1, 2, 3"));
    }

    #[test]
    fn test_non_integer_for_percent_d_falls_back() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(2), &[&"seven", &3]);

        assert!(text.contains("Worker thread %d exited after %d requests"));
        assert!(text.contains("seven"));
    }

    #[test]
    fn test_unsupported_directive_falls_back() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(5), &[&"arg"]);

        assert!(text.contains("Bad directive %q here"));
    }

    #[test]
    fn test_trailing_percent_falls_back() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(6), &[]);

        assert!(text.contains("Trailing percent %"));
    }

    #[test]
    fn test_missing_args_with_empty_list_falls_back() {
        let registry = test_registry();
        let text = format_message_with_args(&registry, id(1), &[]);

        assert!(text.contains("Value %s is invalid for %s"));
        assert!(!text.is_empty());
    }

    // ==================== Render Engine Tests ====================

    #[test]
    fn test_render_consumes_left_to_right() {
        let text = render("%s then %s then %s", &[&"a", &"b", &"c"]).unwrap();
        assert_eq!(text, "a then b then c");
    }

    #[test]
    fn test_render_missing_argument_error() {
        let err = render("%s and %s", &[&"a"]).unwrap_err();
        assert_eq!(err, RenderError::MissingArgument { directive: 's', index: 1 });
    }

    #[test]
    fn test_render_extra_arguments_error() {
        let err = render("%s", &[&"a", &"b"]).unwrap_err();
        assert_eq!(err, RenderError::ExtraArguments { consumed: 1, provided: 2 });
    }

    #[test]
    fn test_render_double_percent_consumes_nothing() {
        let text = render("100%% done", &[]).unwrap();
        assert_eq!(text, "100% done");
    }

    #[test]
    fn test_render_unicode_passthrough() {
        let text = render("entrada inválida: %s", &[&"café"]).unwrap();
        assert_eq!(text, "entrada inválida: café");
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("1234"));
        assert!(is_integer("-42"));
        assert!(is_integer("+17"));
        assert!(!is_integer(""));
        assert!(!is_integer("-"));
        assert!(!is_integer("12.5"));
        assert!(!is_integer("seven"));
        assert!(!is_integer("1e3"));
    }
}
