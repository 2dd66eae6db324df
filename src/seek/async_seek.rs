// src/seek/async_seek.rs
use std::io::SeekFrom;

use tokio::io::{AsyncSeek, AsyncSeekExt};

use super::SeekOk;
use crate::error::{SegmentError, Result};
use crate::fatal::fatal_error;
use crate::segment::SegmentDescriptor;

/// Async counterpart of [`seek`](super::seek).
pub async fn seek_async<F>(descriptor: &mut SegmentDescriptor<F>, segment_number: u64, index: u64) -> SeekOk
where
    F: AsyncSeek + Unpin,
{
    descriptor.seek_async(segment_number, index).await
}

impl<F: AsyncSeek + Unpin> SegmentDescriptor<F> {
    /// Move the file cursor to byte `index` of segment `segment_number`.
    ///
    /// Same contract as the blocking [`seek`](SegmentDescriptor::seek):
    /// positioning failures go to [`fatal_error`].
    pub async fn seek_async(&mut self, segment_number: u64, index: u64) -> SeekOk {
        debug_assert!(
            index < self.layout.segment_size,
            "index {} outside segment of {} bytes",
            index,
            self.layout.segment_size
        );

        match self.seek_to_async(segment_number, index).await {
            Ok(offset) => SeekOk { offset },
            Err(err) => fatal_error(err),
        }
    }

    async fn seek_to_async(&mut self, segment_number: u64, index: u64) -> Result<u64> {
        let offset = self.layout.translate(segment_number, index);
        tracing::trace!(segment = segment_number, index, offset, "segment seek");

        AsyncSeekExt::seek(&mut self.file, SeekFrom::Start(offset))
            .await
            .map_err(|source| SegmentError::Seek { offset, source })?;
        Ok(offset)
    }
}
