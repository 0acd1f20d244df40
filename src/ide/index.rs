//! Artifact index interface.

use std::sync::Arc;

use crate::base::FileId;
use crate::hir::{FileKind, FqName, SearchScope};

use super::error::IndexError;

/// A file located by the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactHandle {
    pub file: FileId,
    pub kind: FileKind,
    pub path: Arc<str>,
}

/// Whether `handle` points at a compiled artifact rather than a source or
/// unrelated file.
pub fn is_compiled_artifact(handle: &ArtifactHandle) -> bool {
    handle.kind == FileKind::CompiledArtifact
}

/// Maps a qualified class name to the file that holds it.
pub trait ArtifactIndex {
    /// Find the file for `name` among the files of `scope`.
    ///
    /// `Ok(None)` is a normal miss. `Err` is reserved for failures of the
    /// index itself.
    fn find_artifact(
        &self,
        scope: &SearchScope<'_>,
        name: &FqName,
    ) -> Result<Option<ArtifactHandle>, IndexError>;
}

impl<I: ArtifactIndex + ?Sized> ArtifactIndex for &I {
    fn find_artifact(
        &self,
        scope: &SearchScope<'_>,
        name: &FqName,
    ) -> Result<Option<ArtifactHandle>, IndexError> {
        (**self).find_artifact(scope, name)
    }
}
