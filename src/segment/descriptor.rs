// src/segment/descriptor.rs
use super::SegmentLayout;

/// An open segment file: a positionable handle plus its [`SegmentLayout`].
///
/// The handle belongs to the segment manager. The descriptor only moves its
/// cursor; reading and writing segment contents happens through
/// [`file_mut`](SegmentDescriptor::file_mut) after a seek.
#[derive(Debug)]
pub struct SegmentDescriptor<F> {
    pub(crate) file: F,
    pub(crate) layout: SegmentLayout,
}

impl<F> SegmentDescriptor<F> {
    pub fn new(file: F, layout: SegmentLayout) -> Self {
        SegmentDescriptor { file, layout }
    }

    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut F {
        &mut self.file
    }

    /// Give the handle back to the manager.
    pub fn into_inner(self) -> F {
        self.file
    }
}
