// src/seek/mod.rs
mod sync_seek;

#[cfg(feature = "async")]
mod async_seek;

pub use sync_seek::seek;

#[cfg(feature = "async")]
pub use async_seek::seek_async;

/// Successful seek. Failures never produce a value; they go through
/// [`fatal_error`](crate::fatal::fatal_error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekOk {
    /// Absolute file offset the cursor now sits at
    pub offset: u64,
}
