// src/fatal.rs
//! Fatal-error channel for failures the segment layer cannot recover from.
//!
//! A segment file whose cursor cannot be positioned is no longer trusted for
//! any further I/O, so such failures never come back as a `Result`. Instead
//! [`fatal_error`] logs the failure, runs the registered handlers and then
//! panics with the error message, ending the current operation.
//!
//! ```rust,no_run
//! use segfile_rs::fatal;
//!
//! let id = fatal::add_fatal_handler(|err| {
//!     eprintln!("segment file lost: {}", err);
//! });
//! // ... segment I/O ...
//! fatal::remove_fatal_handler(id);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::SegmentError;

type Handler = Arc<dyn Fn(&FatalError) + Send + Sync>;

static HANDLERS: RwLock<Vec<(HandlerId, Handler)>> = parking_lot::const_rwlock(Vec::new());
static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Token returned by [`add_fatal_handler`], used to unregister the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// An error that terminates the current segment operation.
#[derive(Debug)]
pub struct FatalError {
    error: SegmentError,
}

impl FatalError {
    pub fn new(error: SegmentError) -> Self {
        FatalError { error }
    }

    /// The underlying segment error.
    pub fn error(&self) -> &SegmentError {
        &self.error
    }

    /// Offset that could not be reached, for seek failures.
    pub fn offset(&self) -> Option<u64> {
        match &self.error {
            SegmentError::Seek { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Register a hook that runs before a fatal error ends the operation.
///
/// Handlers run in registration order, on the thread that hit the failure.
pub fn add_fatal_handler<H>(handler: H) -> HandlerId
where
    H: Fn(&FatalError) + Send + Sync + 'static,
{
    let id = HandlerId(NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed));
    HANDLERS.write().push((id, Arc::new(handler)));
    id
}

/// Unregister a handler. Returns `false` if it was already removed.
pub fn remove_fatal_handler(id: HandlerId) -> bool {
    let mut handlers = HANDLERS.write();
    let before = handlers.len();
    handlers.retain(|(handler_id, _)| *handler_id != id);
    handlers.len() != before
}

/// Report an unrecoverable segment error. Never returns.
#[cold]
#[track_caller]
pub fn fatal_error(error: SegmentError) -> ! {
    let fatal = FatalError::new(error);
    tracing::error!(offset = ?fatal.offset(), "{}", fatal);

    // Snapshot so handlers may (un)register without deadlocking.
    let handlers: Vec<Handler> = HANDLERS.read().iter().map(|(_, h)| Arc::clone(h)).collect();
    for handler in handlers {
        handler(&fatal);
    }

    panic!("{}", fatal)
}
