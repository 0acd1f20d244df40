//! In-memory descriptor graph.
//!
//! [`DescriptorStore`] is an arena of descriptors built up by an embedding
//! analyzer (or by tests). It implements [`DescriptorGraph`] directly.

use rustc_hash::FxHashMap;

use crate::base::Name;

use super::descriptor::{CallableKind, ClassKind, DescriptorGraph, DescriptorKind};
use super::fq_name::FqName;
use super::ids::DescriptorId;

#[derive(Clone, Debug)]
struct DescriptorData {
    kind: DescriptorKind,
    containing: Option<DescriptorId>,
    name: Option<Name>,
    override_original: Option<DescriptorId>,
    package: Option<FqName>,
}

/// Arena-backed [`DescriptorGraph`].
///
/// Descriptors are stored in a single vector and referenced by index. A
/// container must be added before anything it contains, so containment links
/// always point at lower ids and can't form cycles.
#[derive(Clone, Debug, Default)]
pub struct DescriptorStore {
    descriptors: Vec<DescriptorData>,
    /// One fragment per package.
    packages: FxHashMap<FqName, DescriptorId>,
}

impl DescriptorStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, data: DescriptorData) -> DescriptorId {
        let id = DescriptorId::new(self.descriptors.len() as u32);
        self.descriptors.push(data);
        id
    }

    fn data(&self, descriptor: DescriptorId) -> Option<&DescriptorData> {
        self.descriptors.get(descriptor.index() as usize)
    }

    /// Add the fragment for `package`, or return the existing one.
    pub fn add_package(&mut self, package: FqName) -> DescriptorId {
        if let Some(&id) = self.packages.get(&package) {
            return id;
        }
        let id = self.push(DescriptorData {
            kind: DescriptorKind::PackageFragment,
            containing: None,
            name: package.short_name().cloned(),
            override_original: None,
            package: Some(package.clone()),
        });
        self.packages.insert(package, id);
        id
    }

    /// Add a class of `kind` inside `container`.
    pub fn add_class(&mut self, container: DescriptorId, name: Name, kind: ClassKind) -> DescriptorId {
        self.push(DescriptorData {
            kind: DescriptorKind::Class(kind),
            containing: Some(container),
            name: Some(name),
            override_original: None,
            package: None,
        })
    }

    /// Add an anonymous object (`object : Runnable { ... }`).
    pub fn add_anonymous_object(&mut self, container: DescriptorId) -> DescriptorId {
        self.add_class(container, Name::no_name_provided(), ClassKind::Object)
    }

    /// Add a declared function, property, constructor or accessor.
    pub fn add_callable(&mut self, container: DescriptorId, name: Name, kind: CallableKind) -> DescriptorId {
        self.push(DescriptorData {
            kind: DescriptorKind::CallableMember(kind),
            containing: Some(container),
            name: Some(name),
            override_original: None,
            package: None,
        })
    }

    /// Add a fake override of `original` inside `container`.
    ///
    /// The override copies the original's name and kind. `original` may itself
    /// be a fake override.
    pub fn add_fake_override(&mut self, container: DescriptorId, original: DescriptorId) -> DescriptorId {
        let (kind, name) = match self.data(original) {
            Some(data) => (data.kind, data.name.clone()),
            None => (DescriptorKind::CallableMember(CallableKind::Function), None),
        };
        self.push(DescriptorData {
            kind,
            containing: Some(container),
            name,
            override_original: Some(original),
            package: None,
        })
    }

    /// Add a descriptor of any other kind (local variable, parameter, scope).
    pub fn add_other(&mut self, container: Option<DescriptorId>, name: Option<Name>) -> DescriptorId {
        self.push(DescriptorData {
            kind: DescriptorKind::Other,
            containing: container,
            name,
            override_original: None,
            package: None,
        })
    }

    /// Add a descriptor with no container, such as a built-in or a synthetic root.
    pub fn add_detached(&mut self, kind: DescriptorKind, name: Name) -> DescriptorId {
        self.push(DescriptorData {
            kind,
            containing: None,
            name: Some(name),
            override_original: None,
            package: None,
        })
    }

    /// Point `descriptor` at the member it overrides.
    ///
    /// Analyzers that discover overrides after creating both members link
    /// them through this. Returns `false` if either id is unknown.
    pub fn set_override_original(&mut self, descriptor: DescriptorId, original: DescriptorId) -> bool {
        if self.data(original).is_none() {
            return false;
        }
        match self.descriptors.get_mut(descriptor.index() as usize) {
            Some(data) => {
                data.override_original = Some(original);
                true
            }
            None => false,
        }
    }

    /// The fragment registered for `package`.
    pub fn package(&self, package: &FqName) -> Option<DescriptorId> {
        self.packages.get(package).copied()
    }

    /// Number of descriptors, packages included.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl DescriptorGraph for DescriptorStore {
    fn kind(&self, descriptor: DescriptorId) -> DescriptorKind {
        self.data(descriptor)
            .map_or(DescriptorKind::Other, |data| data.kind)
    }

    fn containing(&self, descriptor: DescriptorId) -> Option<DescriptorId> {
        self.data(descriptor)?.containing
    }

    fn override_original(&self, descriptor: DescriptorId) -> Option<DescriptorId> {
        self.data(descriptor)?.override_original
    }

    fn name(&self, descriptor: DescriptorId) -> Option<Name> {
        self.data(descriptor)?.name.clone()
    }

    fn package_fq_name(&self, descriptor: DescriptorId) -> Option<FqName> {
        self.data(descriptor)?.package.clone()
    }
}
