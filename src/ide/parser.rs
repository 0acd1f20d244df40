//! Artifact parser interface and the declaration nodes it produces.

use std::sync::Arc;

use crate::base::{FileId, LineCol, Name, TextRange};
use crate::hir::DescriptorId;

use super::error::ParseError;
use super::index::ArtifactHandle;

/// A navigable declaration inside a parsed artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationNode {
    /// The artifact containing the declaration.
    pub file: FileId,
    /// The descriptor this node declares.
    pub descriptor: DescriptorId,
    pub name: Name,
    /// Range of the declaration's name in the artifact text.
    pub range: TextRange,
    /// Start of `range` as a line/column position.
    pub position: LineCol,
}

/// A parsed artifact that can answer "where is this descriptor declared?".
pub trait StructuredFile {
    fn declaration_for(&self, descriptor: DescriptorId) -> Option<DeclarationNode>;
}

impl<F: StructuredFile + ?Sized> StructuredFile for Arc<F> {
    fn declaration_for(&self, descriptor: DescriptorId) -> Option<DeclarationNode> {
        (**self).declaration_for(descriptor)
    }
}

/// Materializes an artifact as a [`StructuredFile`].
pub trait ArtifactParser {
    type File: StructuredFile;

    /// Parse the artifact behind `handle`.
    ///
    /// `Ok(None)` means the file isn't a structured compiled artifact, which
    /// is a normal miss.
    fn parse(&self, handle: &ArtifactHandle) -> Result<Option<Self::File>, ParseError>;
}

impl<P: ArtifactParser + ?Sized> ArtifactParser for &P {
    type File = P::File;

    fn parse(&self, handle: &ArtifactHandle) -> Result<Option<Self::File>, ParseError> {
        (**self).parse(handle)
    }
}
