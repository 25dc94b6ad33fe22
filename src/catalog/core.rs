//! Messages for core server processing: startup, shutdown, and the
//! connection handling that does not belong to any narrower subsystem.

use crate::id::{Category, MessageId, Severity};
use crate::registry::RegistryBuilder;

/// The server has started accepting client connections. Takes the server
/// version string and the listen address.
pub const STARTUP_COMPLETE: MessageId = MessageId::of(Category::Core, Severity::Notice, 1);

/// Graceful shutdown has begun. Takes the name of the component or
/// administrator that requested it.
pub const SHUTDOWN_REQUESTED: MessageId = MessageId::of(Category::Core, Severity::Notice, 2);

/// Graceful shutdown has finished and the process is about to exit.
pub const SHUTDOWN_COMPLETE: MessageId = MessageId::of(Category::Core, Severity::Notice, 3);

/// A subsystem failed to initialize during startup and the server cannot
/// continue. Takes the subsystem name and the underlying error.
pub const STARTUP_SUBSYSTEM_FAILED: MessageId =
    MessageId::of(Category::Core, Severity::FatalError, 4);

/// A worker thread terminated because of an unexpected error. Takes the
/// thread name and the error.
pub const WORKER_THREAD_DIED: MessageId = MessageId::of(Category::Core, Severity::SevereError, 5);

/// The work queue rejected an operation because it is at capacity. Takes
/// the current queue depth.
pub const WORK_QUEUE_FULL: MessageId = MessageId::of(Category::Core, Severity::MildError, 6);

/// A client connection was closed by the server. Takes the connection ID
/// and the reason.
pub const CONNECTION_CLOSED: MessageId =
    MessageId::of(Category::Core, Severity::Informational, 7);

/// The server is running low on available memory. Takes the number of
/// megabytes still free.
pub const LOW_MEMORY_WARNING: MessageId =
    MessageId::of(Category::Core, Severity::SevereWarning, 8);

/// An operation was abandoned because its client disconnected. Takes the
/// operation ID.
pub const OPERATION_ABANDONED: MessageId = MessageId::of(Category::Core, Severity::Debug, 9);

/// An idle client connection was disconnected. Takes the connection ID and
/// the idle limit in seconds.
pub const IDLE_CONNECTION_CLOSED: MessageId =
    MessageId::of(Category::Core, Severity::MildWarning, 10);

/// Install the format strings for every core message.
pub fn register_messages(builder: &mut RegistryBuilder) {
    builder.register(
        STARTUP_COMPLETE,
        "The server (version %s) has started successfully and is ready to accept client \
         connections on %s",
    );
    builder.register(
        SHUTDOWN_REQUESTED,
        "The server has begun the shutdown process at the request of %s",
    );
    builder.register(SHUTDOWN_COMPLETE, "The server shutdown process has completed");
    builder.register(
        STARTUP_SUBSYSTEM_FAILED,
        "The %s subsystem could not be initialized and the server is unable to continue: %s",
    );
    builder.register(
        WORKER_THREAD_DIED,
        "Worker thread %s has terminated because of an unexpected error: %s.  The thread will \
         not be restarted automatically",
    );
    builder.register(
        WORK_QUEUE_FULL,
        "The request could not be accepted because the work queue has reached its capacity of \
         %d pending operations",
    );
    builder.register(CONNECTION_CLOSED, "Connection %d has been closed: %s");
    builder.register(
        LOW_MEMORY_WARNING,
        "Available memory is running low (%d MB free).  The server may begin rejecting new \
         operations to avoid exhausting the heap",
    );
    builder.register(OPERATION_ABANDONED, "Operation %d abandoned because its client disconnected");
    builder.register(
        IDLE_CONNECTION_CLOSED,
        "Connection %d has been closed because it remained idle longer than the configured \
         limit of %d seconds",
    );
}
