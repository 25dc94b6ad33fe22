//! Messages for client protocol processing: decoding requests, enforcing
//! protocol limits, and reporting connection-level failures.

use crate::id::{Category, MessageId, Severity};
use crate::registry::RegistryBuilder;

/// A request could not be decoded because the element ended prematurely.
/// Takes the number of bytes expected and the number received.
pub const TRUNCATED_REQUEST: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 1);

/// A request declared a length that exceeds the maximum the server accepts.
/// Takes the declared length and the configured maximum.
pub const REQUEST_TOO_LARGE: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 2);

/// A client requested a protocol version the server does not support.
/// Takes the requested version.
pub const UNSUPPORTED_VERSION: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 3);

/// A request carried an operation type the server does not recognize.
/// Takes the numeric operation type.
pub const UNKNOWN_OPERATION_TYPE: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 4);

/// A connection was dropped because of a decoding failure. Takes the
/// connection ID and the decode error.
pub const CONNECTION_DECODE_FAILURE: MessageId =
    MessageId::of(Category::Protocol, Severity::SevereError, 5);

/// The listener could not accept a new connection. Takes the listen
/// address and the underlying error.
pub const CANNOT_ACCEPT_CONNECTION: MessageId =
    MessageId::of(Category::Protocol, Severity::SevereError, 6);

/// The listener has reached the configured connection limit. Takes the
/// limit.
pub const CONNECTION_LIMIT_REACHED: MessageId =
    MessageId::of(Category::Protocol, Severity::SevereWarning, 7);

/// A client sent a request before completing the handshake the protocol
/// requires. Takes the connection ID.
pub const REQUEST_BEFORE_HANDSHAKE: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 8);

/// A response could not be written back to the client. Takes the
/// connection ID and the underlying error.
pub const CANNOT_SEND_RESPONSE: MessageId =
    MessageId::of(Category::Protocol, Severity::MildError, 9);

/// A new listener socket was opened. Takes the listen address.
pub const LISTENER_STARTED: MessageId =
    MessageId::of(Category::Protocol, Severity::Informational, 10);

/// Install the format strings for every protocol message.
pub fn register_messages(builder: &mut RegistryBuilder) {
    builder.register(
        TRUNCATED_REQUEST,
        "The request could not be decoded because it was truncated: expected %d bytes but only \
         %d were available",
    );
    builder.register(
        REQUEST_TOO_LARGE,
        "The request could not be processed because its declared length of %d bytes exceeds the \
         maximum allowed request size of %d bytes",
    );
    builder.register(
        UNSUPPORTED_VERSION,
        "The client requested protocol version %d, which this server does not support",
    );
    builder.register(
        UNKNOWN_OPERATION_TYPE,
        "The request included an operation with type %d, which is not a recognized operation \
         type",
    );
    builder.register(
        CONNECTION_DECODE_FAILURE,
        "Connection %d will be terminated because a request could not be decoded: %s",
    );
    builder.register(
        CANNOT_ACCEPT_CONNECTION,
        "An error occurred while attempting to accept a new client connection on %s: %s",
    );
    builder.register(
        CONNECTION_LIMIT_REACHED,
        "A new connection was rejected because the server has reached the configured limit of \
         %d concurrent client connections",
    );
    builder.register(
        REQUEST_BEFORE_HANDSHAKE,
        "Connection %d sent a request before completing the protocol handshake; the request \
         has been rejected",
    );
    builder.register(
        CANNOT_SEND_RESPONSE,
        "An error occurred while attempting to send a response on connection %d: %s",
    );
    builder.register(LISTENER_STARTED, "Listening for client connections on %s");
}
