// src/segment/layout.rs
use std::fmt;

use crate::address::{AddressStrategy, Translator};
use crate::error::{SegmentError, Result};

/// Geometry of a segment file: how big each segment is, where segment data
/// starts, and which address arithmetic is bound to it.
///
/// The strategy is chosen once here and never re-evaluated by
/// [`translate`](SegmentLayout::translate).
#[derive(Clone, Copy)]
pub struct SegmentLayout {
    pub(crate) segment_size: u64,
    /// log2 of `segment_size`, only meaningful for power-of-two sizes
    pub(crate) size_bits: u32,
    pub(crate) base_offset: u64,
    strategy: AddressStrategy,
    translator: Translator,
}

impl SegmentLayout {
    /// Build a layout, selecting the fast strategy whenever `segment_size`
    /// is a power of two.
    pub fn new(segment_size: u64, base_offset: u64) -> Result<Self> {
        Self::with_strategy(segment_size, base_offset, AddressStrategy::for_size(segment_size))
    }

    /// Build a layout with an explicit strategy.
    ///
    /// `Slow` is accepted for every non-zero size. `Fast` is rejected with
    /// [`SegmentError::NotPowerOfTwo`] unless the size is a power of two.
    pub fn with_strategy(segment_size: u64, base_offset: u64, strategy: AddressStrategy) -> Result<Self> {
        if segment_size == 0 {
            return Err(SegmentError::InvalidSegmentSize(segment_size));
        }
        if !strategy.supports(segment_size) {
            return Err(SegmentError::NotPowerOfTwo(segment_size));
        }

        // Defined for every power-of-two size, whichever strategy is bound.
        let size_bits = if segment_size.is_power_of_two() {
            segment_size.trailing_zeros()
        } else {
            0
        };

        tracing::debug!(
            segment_size,
            base_offset,
            strategy = strategy.name(),
            "segment layout initialized"
        );

        Ok(SegmentLayout {
            segment_size,
            size_bits,
            base_offset,
            strategy,
            translator: strategy.translator(),
        })
    }

    /// Absolute file offset of byte `index` within segment `segment_number`.
    #[inline]
    pub fn translate(&self, segment_number: u64, index: u64) -> u64 {
        (self.translator)(self, segment_number, index)
    }

    pub fn segment_size(&self) -> u64 {
        self.segment_size
    }

    /// `Some(log2(segment_size))` when the segment size is a power of two.
    pub fn size_bits(&self) -> Option<u32> {
        if self.segment_size.is_power_of_two() {
            Some(self.size_bits)
        } else {
            None
        }
    }

    pub fn base_offset(&self) -> u64 {
        self.base_offset
    }

    pub fn strategy(&self) -> AddressStrategy {
        self.strategy
    }
}

impl fmt::Debug for SegmentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentLayout")
            .field("segment_size", &self.segment_size)
            .field("size_bits", &self.size_bits())
            .field("base_offset", &self.base_offset)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl PartialEq for SegmentLayout {
    fn eq(&self, other: &Self) -> bool {
        self.segment_size == other.segment_size
            && self.base_offset == other.base_offset
            && self.strategy == other.strategy
    }
}

impl Eq for SegmentLayout {}
