//! Descriptor identifiers.

use std::fmt;

/// Handle to a symbol descriptor inside a [`DescriptorGraph`](super::DescriptorGraph).
///
/// The analyzer that owns the graph assigns these; the navigation core only
/// passes them back to the graph and to parsed artifacts. Two ids are equal
/// iff they name the same descriptor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DescriptorId(u32);

impl DescriptorId {
    /// Wrap a raw id assigned by the graph.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor({})", self.0)
    }
}

impl From<u32> for DescriptorId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}
