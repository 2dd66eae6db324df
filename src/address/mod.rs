// src/address/mod.rs
//! Address translation from `(segment number, index)` to absolute file offsets.
//!
//! Both translators are pure and assume the caller has already checked
//! `index < segment_size`. Arithmetic overflow is a caller error.

mod strategy;

pub use strategy::{AddressStrategy, Translator};

use crate::segment::SegmentLayout;

/// Shift-based translation. Only valid for power-of-two segment sizes.
#[inline]
pub fn translate_fast(layout: &SegmentLayout, segment_number: u64, index: u64) -> u64 {
    debug_assert!(
        segment_number.leading_zeros() >= layout.size_bits,
        "segment {} shifted by {} overflows u64",
        segment_number,
        layout.size_bits
    );
    (segment_number << layout.size_bits) + index + layout.base_offset
}

/// Multiplication-based translation. Valid for any segment size.
#[inline]
pub fn translate_slow(layout: &SegmentLayout, segment_number: u64, index: u64) -> u64 {
    segment_number * layout.segment_size + index + layout.base_offset
}
