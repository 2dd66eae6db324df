// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid segment size: {0} (must be greater than zero)")]
    InvalidSegmentSize(u64),

    #[error("Segment size {0} is not a power of two, fast addressing unavailable")]
    NotPowerOfTwo(u64),

    /// Positioning the backing file failed. Reported through the fatal channel.
    #[error("segment_seek: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SegmentError>;
