// src/lib.rs
//! # segfile-rs
//!
//! Addressing layer for segment files: the on-disk backing store of an
//! out-of-core array that is paged in fixed-size tiles ("segments").
//!
//! Given a segment number and a byte index inside that segment, the crate
//! computes the absolute file offset and positions the file cursor there.
//! Allocation, caching, eviction and the segment file header all belong to
//! the segment manager that sits on top of this crate.
//!
//! ## Features
//!
//! - **Two address strategies**: shift-based for power-of-two segment sizes,
//!   multiplication-based for everything else, bound once per layout
//! - **64-bit offsets**: segment files larger than 4 GiB are addressable
//! - **Fail fast**: a segment file that cannot be positioned ends the
//!   operation through the [`fatal`] channel instead of returning an error
//! - **Async**: `seek_async` for tokio handles (feature `async`, on by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use segfile_rs::*;
//! use std::fs::OpenOptions;
//! use std::io::Write;
//!
//! fn main() -> Result<()> {
//!     let file = OpenOptions::new().read(true).write(true).open("raster.seg")?;
//!
//!     // 64 KiB segments after a 512 byte header
//!     let layout = SegmentLayout::new(65536, 512)?;
//!     assert_eq!(layout.strategy(), AddressStrategy::Fast);
//!
//!     let mut segment_file = SegmentDescriptor::new(file, layout);
//!     let pos = segment_file.seek(3, 100);
//!     println!("cursor at {}", pos.offset);
//!
//!     segment_file.file_mut().write_all(&[0xFF])?;
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod address;
pub mod segment;
pub mod seek;
pub mod fatal;

// Re-export commonly used types at the crate root for convenience
pub use error::{SegmentError, Result};

pub use address::{
    AddressStrategy,
    Translator,
    translate_fast,
    translate_slow,
};

pub use segment::{
    SegmentLayout,
    SegmentDescriptor,
};

pub use seek::{seek, SeekOk};

#[cfg(feature = "async")]
pub use seek::seek_async;

pub use fatal::{FatalError, HandlerId};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use segfile_rs::prelude::*;
    //! ```

    pub use crate::error::{SegmentError, Result};
    pub use crate::address::AddressStrategy;
    pub use crate::segment::{SegmentLayout, SegmentDescriptor};
    pub use crate::seek::SeekOk;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
