// src/address/strategy.rs
use std::fmt;

use crate::segment::SegmentLayout;

/// Signature shared by both address translators.
pub type Translator = fn(&SegmentLayout, u64, u64) -> u64;

/// Arithmetic used to turn a segment number and index into a file offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressStrategy {
    /// Shift by `size_bits`. Requires a power-of-two segment size.
    Fast,
    /// Multiply by the segment size. Works for any size.
    Slow,
}

impl AddressStrategy {
    /// Pick the cheapest strategy that is valid for `segment_size`.
    pub fn for_size(segment_size: u64) -> Self {
        if segment_size.is_power_of_two() {
            AddressStrategy::Fast
        } else {
            AddressStrategy::Slow
        }
    }

    /// Whether this strategy produces correct offsets for `segment_size`.
    pub fn supports(self, segment_size: u64) -> bool {
        match self {
            AddressStrategy::Fast => segment_size.is_power_of_two(),
            AddressStrategy::Slow => segment_size > 0,
        }
    }

    pub fn translator(self) -> Translator {
        match self {
            AddressStrategy::Fast => super::translate_fast,
            AddressStrategy::Slow => super::translate_slow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressStrategy::Fast => "fast",
            AddressStrategy::Slow => "slow",
        }
    }
}

impl fmt::Display for AddressStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
