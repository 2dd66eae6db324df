// src/seek/sync_seek.rs
use std::io::{Seek, SeekFrom};

use super::SeekOk;
use crate::error::{SegmentError, Result};
use crate::fatal::fatal_error;
use crate::segment::SegmentDescriptor;

/// Position `descriptor`'s file at byte `index` of segment `segment_number`.
pub fn seek<F: Seek>(descriptor: &mut SegmentDescriptor<F>, segment_number: u64, index: u64) -> SeekOk {
    descriptor.seek(segment_number, index)
}

impl<F: Seek> SegmentDescriptor<F> {
    /// Move the file cursor to byte `index` of segment `segment_number`.
    ///
    /// `index` must be below the segment size; checking it is the caller's
    /// job. If the handle cannot be positioned the failure is reported
    /// through [`fatal_error`] and this call does not return.
    pub fn seek(&mut self, segment_number: u64, index: u64) -> SeekOk {
        debug_assert!(
            index < self.layout.segment_size,
            "index {} outside segment of {} bytes",
            index,
            self.layout.segment_size
        );

        match self.seek_to(segment_number, index) {
            Ok(offset) => SeekOk { offset },
            Err(err) => fatal_error(err),
        }
    }

    fn seek_to(&mut self, segment_number: u64, index: u64) -> Result<u64> {
        let offset = self.layout.translate(segment_number, index);
        tracing::trace!(segment = segment_number, index, offset, "segment seek");

        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|source| SegmentError::Seek { offset, source })?;
        Ok(offset)
    }
}
