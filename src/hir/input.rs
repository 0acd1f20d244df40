//! Project inputs: the files a navigation request may land in.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::FileId;

/// What a file is, as far as navigation cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Plain source file.
    Source,
    /// Compiled output carrying declaration metadata.
    CompiledArtifact,
    /// Anything else (resources, unrelated binaries).
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ProjectFile {
    path: Arc<str>,
    kind: FileKind,
}

/// The set of files belonging to a project, sources and libraries alike.
///
/// This is an input to navigation: the caller builds it, and lookups are
/// restricted to the files it contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectRoots {
    files: IndexMap<FileId, ProjectFile>,
}

impl ProjectRoots {
    /// An empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the project, replacing any previous entry for it.
    pub fn insert(&mut self, file: FileId, path: impl Into<Arc<str>>, kind: FileKind) {
        self.files.insert(
            file,
            ProjectFile {
                path: path.into(),
                kind,
            },
        );
    }

    /// Remove a file, returning its path.
    pub fn remove(&mut self, file: FileId) -> Option<Arc<str>> {
        self.files.swap_remove(&file).map(|entry| entry.path)
    }

    /// Path of `file`, if it belongs to the project.
    pub fn path(&self, file: FileId) -> Option<&str> {
        self.files.get(&file).map(|entry| entry.path.as_ref())
    }

    /// Kind of `file`, if it belongs to the project.
    pub fn kind(&self, file: FileId) -> Option<FileKind> {
        self.files.get(&file).map(|entry| entry.kind)
    }

    /// Whether `file` belongs to the project.
    pub fn contains(&self, file: FileId) -> bool {
        self.files.contains_key(&file)
    }

    /// Every file with its path and kind, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &str, FileKind)> + '_ {
        self.files
            .iter()
            .map(|(&id, entry)| (id, entry.path.as_ref(), entry.kind))
    }

    /// Number of files in the project.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the project has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A project restricted to some kinds of file.
#[derive(Clone, Copy, Debug)]
pub struct SearchScope<'a> {
    project: &'a ProjectRoots,
    kinds: &'static [FileKind],
}

impl<'a> SearchScope<'a> {
    /// Every file of the project.
    pub fn all(project: &'a ProjectRoots) -> Self {
        Self {
            project,
            kinds: &[FileKind::Source, FileKind::CompiledArtifact, FileKind::Other],
        }
    }

    /// Source files and compiled artifacts of the project.
    pub fn source_and_artifacts(project: &'a ProjectRoots) -> Self {
        Self {
            project,
            kinds: &[FileKind::Source, FileKind::CompiledArtifact],
        }
    }

    /// Whether `file` is in the project and of a kind this scope admits.
    pub fn contains(&self, file: FileId) -> bool {
        self.project
            .kind(file)
            .is_some_and(|kind| self.kinds.contains(&kind))
    }
}
