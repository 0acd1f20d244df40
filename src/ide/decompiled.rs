//! In-memory decompiled artifacts.
//!
//! A [`DecompiledFile`] is the text rendering of a compiled artifact plus a
//! table saying where each descriptor is declared in that text.
//! [`DecompiledParser`] serves these files to navigation.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::{FileId, LineIndex, Name, TextRange, TextSize};
use crate::hir::DescriptorId;

use super::error::ParseError;
use super::index::{ArtifactHandle, is_compiled_artifact};
use super::parser::{ArtifactParser, DeclarationNode, StructuredFile};

/// Decompiled text of one artifact with its declaration table.
#[derive(Clone, Debug)]
pub struct DecompiledFile {
    file: FileId,
    text: Arc<str>,
    line_index: LineIndex,
    declarations: FxHashMap<DescriptorId, (Name, TextRange)>,
}

impl DecompiledFile {
    /// Decompiled `text` of `file`, with no declarations recorded yet.
    pub fn new(file: FileId, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            file,
            text,
            line_index,
            declarations: FxHashMap::default(),
        }
    }

    /// The artifact this text was decompiled from.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The decompiled text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record that `descriptor` is declared at `range`.
    pub fn declare(&mut self, descriptor: DescriptorId, name: Name, range: TextRange) -> Result<(), ParseError> {
        if range.end() > self.line_index.text_len() {
            return Err(ParseError::malformed(
                self.file,
                format!("declaration of `{name}` at {range:?} is past the end of the text"),
            ));
        }
        self.declarations.insert(descriptor, (name, range));
        Ok(())
    }

    /// Record that `descriptor` is declared at the first occurrence of
    /// `needle` in the text.
    pub fn declare_at(&mut self, descriptor: DescriptorId, name: Name, needle: &str) -> Result<(), ParseError> {
        let Some(offset) = self.text.find(needle) else {
            return Err(ParseError::malformed(
                self.file,
                format!("`{needle}` does not occur in the decompiled text"),
            ));
        };
        let range = TextRange::at(TextSize::from(offset as u32), TextSize::of(needle));
        self.declare(descriptor, name, range)
    }

    /// Number of recorded declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no declaration has been recorded.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl StructuredFile for DecompiledFile {
    fn declaration_for(&self, descriptor: DescriptorId) -> Option<DeclarationNode> {
        let (name, range) = self.declarations.get(&descriptor)?;
        Some(DeclarationNode {
            file: self.file,
            descriptor,
            name: name.clone(),
            range: *range,
            position: self.line_index.line_col(range.start()),
        })
    }
}

/// [`ArtifactParser`] serving registered [`DecompiledFile`]s.
///
/// Only compiled artifacts parse; any other handle yields `Ok(None)`, as does
/// a compiled artifact nobody registered text for.
#[derive(Debug, Default)]
pub struct DecompiledParser {
    files: RwLock<FxHashMap<FileId, Arc<DecompiledFile>>>,
}

impl DecompiledParser {
    /// A parser with no registered files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decompiled file, replacing any previous one for the same id.
    pub fn insert(&self, file: DecompiledFile) {
        self.files.write().insert(file.file, Arc::new(file));
    }

    /// Forget the decompiled text of `file`, returning it.
    pub fn remove(&self, file: FileId) -> Option<Arc<DecompiledFile>> {
        self.files.write().remove(&file)
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Whether no file is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArtifactParser for DecompiledParser {
    type File = Arc<DecompiledFile>;

    fn parse(&self, handle: &ArtifactHandle) -> Result<Option<Self::File>, ParseError> {
        if !is_compiled_artifact(handle) {
            return Ok(None);
        }
        Ok(self.files.read().get(&handle.file).cloned())
    }
}
