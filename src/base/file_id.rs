//! Identifiers for files known to the artifact index.

use std::fmt;

/// A handle to a source file or compiled artifact.
///
/// [`ArtifactSet`](crate::ide::ArtifactSet) hands these out in registration
/// order, one per path, and keeps handing out the same id when a path is
/// registered again. The same id then keys the file in
/// [`ProjectRoots`](crate::hir::ProjectRoots), in the decompiled text held by
/// [`DecompiledParser`](crate::ide::DecompiledParser), and in every
/// [`DeclarationNode`](crate::ide::DeclarationNode) found inside it. Path and
/// kind never travel with the id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct FileId(u32);

impl FileId {
    /// Wrap a raw id, for indexes that number files themselves.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// The id registered right after this one.
    #[inline]
    pub(crate) const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

/// Short form used in error messages, e.g. `malformed artifact file#3`.
impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}
