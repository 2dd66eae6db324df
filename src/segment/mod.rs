// src/segment/mod.rs
mod layout;
mod descriptor;

pub use layout::SegmentLayout;
pub use descriptor::SegmentDescriptor;
