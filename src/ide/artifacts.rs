//! In-memory artifact index.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::FileId;
use crate::hir::{FileKind, FqName, ProjectRoots, SearchScope};

use super::error::IndexError;
use super::index::{ArtifactHandle, ArtifactIndex};

/// Thread-safe [`ArtifactIndex`] over a set of registered files.
///
/// Files get stable ids by path. Each qualified name may be bound to
/// several files (a source file and its compiled class, or the same class in
/// two libraries); lookups return the first bound file inside the scope.
#[derive(Debug, Default)]
pub struct ArtifactSet {
    inner: RwLock<ArtifactSetInner>,
}

#[derive(Debug, Default)]
struct ArtifactSetInner {
    /// Path → FileId
    path_to_id: FxHashMap<Arc<str>, FileId>,
    /// FileId → (path, kind), in registration order
    files: IndexMap<FileId, (Arc<str>, FileKind)>,
    /// Qualified name → bound files, in binding order
    by_name: FxHashMap<FqName, Vec<FileId>>,
    /// Id the next new path receives
    next_id: FileId,
}

impl ArtifactSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, or return the id it already has.
    ///
    /// Re-registering a path updates its kind.
    pub fn add_file(&self, path: &str, kind: FileKind) -> FileId {
        {
            let inner = self.inner.read();
            if let Some(&id) = inner.path_to_id.get(path) {
                if inner.files.get(&id).is_some_and(|(_, k)| *k == kind) {
                    return id;
                }
            }
        }

        let mut inner = self.inner.write();
        if let Some(&id) = inner.path_to_id.get(path) {
            if let Some(entry) = inner.files.get_mut(&id) {
                entry.1 = kind;
            }
            return id;
        }

        let id = inner.next_id;
        inner.next_id = id.successor();
        let path: Arc<str> = Arc::from(path);
        inner.path_to_id.insert(path.clone(), id);
        inner.files.insert(id, (path, kind));
        id
    }

    /// Record that `file` holds the class `name`.
    ///
    /// Returns `false` if `file` isn't registered.
    pub fn bind(&self, name: FqName, file: FileId) -> bool {
        let mut inner = self.inner.write();
        if !inner.files.contains_key(&file) {
            return false;
        }
        let files = inner.by_name.entry(name).or_default();
        if !files.contains(&file) {
            files.push(file);
        }
        true
    }

    /// Register a file and bind `name` to it in one step.
    pub fn add_artifact(&self, path: &str, kind: FileKind, name: FqName) -> FileId {
        let id = self.add_file(path, kind);
        self.bind(name, id);
        id
    }

    /// Remove a file and every binding to it.
    pub fn remove(&self, file: FileId) {
        let mut inner = self.inner.write();
        if let Some((path, _)) = inner.files.shift_remove(&file) {
            inner.path_to_id.remove(&path);
        }
        inner.by_name.retain(|_, files| {
            files.retain(|&f| f != file);
            !files.is_empty()
        });
    }

    /// Handle for a registered file.
    pub fn handle(&self, file: FileId) -> Option<ArtifactHandle> {
        self.inner
            .read()
            .files
            .get(&file)
            .map(|(path, kind)| ArtifactHandle {
                file,
                kind: *kind,
                path: path.clone(),
            })
    }

    /// A project made of every registered file.
    pub fn project_roots(&self) -> ProjectRoots {
        let inner = self.inner.read();
        let mut roots = ProjectRoots::new();
        for (&id, (path, kind)) in &inner.files {
            roots.insert(id, path.clone(), *kind);
        }
        roots
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.inner.read().files.len()
    }

    /// Whether no file is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArtifactIndex for ArtifactSet {
    fn find_artifact(
        &self,
        scope: &SearchScope<'_>,
        name: &FqName,
    ) -> Result<Option<ArtifactHandle>, IndexError> {
        let inner = self.inner.read();
        let Some(files) = inner.by_name.get(name) else {
            return Ok(None);
        };

        let Some(file) = files.iter().copied().find(|&file| scope.contains(file)) else {
            return Ok(None);
        };

        let (path, kind) = inner
            .files
            .get(&file)
            .ok_or_else(|| IndexError::corrupted(format!("`{name}` is bound to unknown {file}")))?;
        Ok(Some(ArtifactHandle {
            file,
            kind: *kind,
            path: path.clone(),
        }))
    }
}
