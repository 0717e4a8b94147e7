//! The standard category library.
//!
//! Fifteen categories defined purely over POSIX reason codes, built once
//! per process and shared read-only. `connection()` is the broad union of
//! the four narrow connection categories; when dispatching, list the
//! narrow ones before it if narrow-specific handling is wanted.

use std::sync::OnceLock;

use libc::{
    EACCES, EAGAIN, EALREADY, ECHILD, ECONNABORTED, ECONNREFUSED, ECONNRESET, EEXIST,
    EINPROGRESS, EINTR, EISDIR, ENOENT, ENOTDIR, EPERM, EPIPE, ESHUTDOWN, ESRCH, ETIMEDOUT,
    EWOULDBLOCK,
};

use crate::category::Category;

struct Standard {
    would_block: Category,
    child_process: Category,
    connection: Category,
    connection_aborted: Category,
    connection_refused: Category,
    connection_reset: Category,
    broken_pipe: Category,
    file_exists: Category,
    file_not_found: Category,
    interrupted: Category,
    is_a_directory: Category,
    not_a_directory: Category,
    permission_denied: Category,
    process_not_found: Category,
    timed_out: Category,
}

fn standard() -> &'static Standard {
    static STANDARD: OnceLock<Standard> = OnceLock::new();
    STANDARD.get_or_init(|| Standard {
        would_block: Category::of_codes(
            "would-block",
            [EAGAIN, EALREADY, EWOULDBLOCK, EINPROGRESS],
        )
        .with_doc("The operation would have to block, or is already in progress"),
        child_process: Category::of_codes("child-process-error", [ECHILD])
            .with_doc("No child process to wait for"),
        connection: Category::of_codes(
            "connection-error",
            [EPIPE, ESHUTDOWN, ECONNABORTED, ECONNREFUSED, ECONNRESET],
        )
        .with_doc("Any connection failure; union of the narrower connection categories"),
        connection_aborted: Category::of_codes("connection-aborted", [ECONNABORTED])
            .with_doc("Connection aborted by the network stack"),
        connection_refused: Category::of_codes("connection-refused", [ECONNREFUSED])
            .with_doc("Connection attempt refused by the remote end"),
        connection_reset: Category::of_codes("connection-reset", [ECONNRESET])
            .with_doc("Connection reset by the remote end"),
        broken_pipe: Category::of_codes("broken-pipe", [EPIPE, ESHUTDOWN])
            .with_doc("Write on a pipe or socket with no reader"),
        file_exists: Category::of_codes("file-exists", [EEXIST])
            .with_doc("Target entry already exists"),
        file_not_found: Category::of_codes("file-not-found", [ENOENT])
            .with_doc("No such file or directory"),
        interrupted: Category::of_codes("interrupted", [EINTR])
            .with_doc("Interrupted by a signal"),
        is_a_directory: Category::of_codes("is-a-directory", [EISDIR])
            .with_doc("Target is a directory"),
        not_a_directory: Category::of_codes("not-a-directory", [ENOTDIR])
            .with_doc("Target is not a directory"),
        permission_denied: Category::of_codes("permission-denied", [EACCES, EPERM])
            .with_doc("Operation not permitted for this user"),
        process_not_found: Category::of_codes("process-not-found", [ESRCH])
            .with_doc("No such process"),
        timed_out: Category::of_codes("timed-out", [ETIMEDOUT])
            .with_doc("Operation timed out"),
    })
}

pub fn would_block() -> &'static Category {
    &standard().would_block
}

pub fn child_process() -> &'static Category {
    &standard().child_process
}

/// The broad connection category. A reset, refused, or aborted connection
/// matches this as well as its narrow category.
pub fn connection() -> &'static Category {
    &standard().connection
}

pub fn connection_aborted() -> &'static Category {
    &standard().connection_aborted
}

pub fn connection_refused() -> &'static Category {
    &standard().connection_refused
}

pub fn connection_reset() -> &'static Category {
    &standard().connection_reset
}

pub fn broken_pipe() -> &'static Category {
    &standard().broken_pipe
}

pub fn file_exists() -> &'static Category {
    &standard().file_exists
}

pub fn file_not_found() -> &'static Category {
    &standard().file_not_found
}

pub fn interrupted() -> &'static Category {
    &standard().interrupted
}

pub fn is_a_directory() -> &'static Category {
    &standard().is_a_directory
}

pub fn not_a_directory() -> &'static Category {
    &standard().not_a_directory
}

pub fn permission_denied() -> &'static Category {
    &standard().permission_denied
}

pub fn process_not_found() -> &'static Category {
    &standard().process_not_found
}

pub fn timed_out() -> &'static Category {
    &standard().timed_out
}

/// Every standard category, in a dispatch-friendly order: the narrow
/// connection categories come before the broad `connection-error`.
pub fn all() -> Vec<&'static Category> {
    let s = standard();
    vec![
        &s.would_block,
        &s.child_process,
        &s.connection_aborted,
        &s.connection_refused,
        &s.connection_reset,
        &s.broken_pipe,
        &s.connection,
        &s.file_exists,
        &s.file_not_found,
        &s.interrupted,
        &s.is_a_directory,
        &s.not_a_directory,
        &s.permission_denied,
        &s.process_not_found,
        &s.timed_out,
    ]
}
