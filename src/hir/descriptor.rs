//! The descriptor containment graph, as seen by the navigation core.
//!
//! The semantic analyzer owns the descriptors. This module only describes
//! the read-only capabilities the core needs from it: a kind tag, a
//! containing-descriptor link, the fake-override relation, and names.

use crate::base::Name;

use super::fq_name::FqName;
use super::ids::DescriptorId;

/// Flavour of a class-like descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Object,
    CompanionObject,
    Annotation,
}

/// Flavour of a callable member descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Function,
    Property,
    Constructor,
    Accessor,
}

/// Kind tag of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Class(ClassKind),
    PackageFragment,
    CallableMember(CallableKind),
    /// Anything else: local variables, parameters, initializer scopes, ...
    Other,
}

impl DescriptorKind {
    /// Any class-like descriptor, objects and annotations included.
    pub fn is_class(self) -> bool {
        matches!(self, DescriptorKind::Class(_))
    }

    /// A package fragment.
    pub fn is_package_fragment(self) -> bool {
        matches!(self, DescriptorKind::PackageFragment)
    }

    /// A callable member, the only kind that can be a fake override.
    pub fn is_callable(self) -> bool {
        matches!(self, DescriptorKind::CallableMember(_))
    }

    /// Classes and package fragments are the only descriptors that can own
    /// a compiled artifact.
    pub fn is_class_or_package(self) -> bool {
        self.is_class() || self.is_package_fragment()
    }
}

/// Read access to the analyzer's descriptor graph.
///
/// Containment links must form a forest rooted at package fragments (or at
/// detached roots such as built-ins). Implementations must be safe to read
/// concurrently if navigation is run from several threads.
pub trait DescriptorGraph {
    fn kind(&self, descriptor: DescriptorId) -> DescriptorKind;

    /// The declaration directly containing `descriptor`, if any.
    fn containing(&self, descriptor: DescriptorId) -> Option<DescriptorId>;

    /// For a fake override, the member it stands in for.
    ///
    /// `None` for members that are declared where they appear.
    fn override_original(&self, descriptor: DescriptorId) -> Option<DescriptorId>;

    /// Declared name. `None` for declarations that were never named.
    fn name(&self, descriptor: DescriptorId) -> Option<Name>;

    /// The package of a package fragment; `None` for every other kind.
    fn package_fq_name(&self, descriptor: DescriptorId) -> Option<FqName>;

    /// Whether `descriptor` is local relative to `container`.
    ///
    /// A descriptor is local when its direct container is an executable scope
    /// (neither a class nor a package fragment) lying on `container`'s
    /// containment chain, `container` included.
    fn is_local(&self, container: Option<DescriptorId>, descriptor: DescriptorId) -> bool {
        let Some(parent) = self.containing(descriptor) else {
            return false;
        };
        if self.kind(parent).is_class_or_package() {
            return false;
        }
        let mut current = container;
        while let Some(id) = current {
            if id == parent {
                return true;
            }
            current = self.containing(id);
        }
        false
    }
}

impl<G: DescriptorGraph + ?Sized> DescriptorGraph for &G {
    fn kind(&self, descriptor: DescriptorId) -> DescriptorKind {
        (**self).kind(descriptor)
    }

    fn containing(&self, descriptor: DescriptorId) -> Option<DescriptorId> {
        (**self).containing(descriptor)
    }

    fn override_original(&self, descriptor: DescriptorId) -> Option<DescriptorId> {
        (**self).override_original(descriptor)
    }

    fn name(&self, descriptor: DescriptorId) -> Option<Name> {
        (**self).name(descriptor)
    }

    fn package_fq_name(&self, descriptor: DescriptorId) -> Option<FqName> {
        (**self).package_fq_name(descriptor)
    }

    fn is_local(&self, container: Option<DescriptorId>, descriptor: DescriptorId) -> bool {
        (**self).is_local(container, descriptor)
    }
}

/// Iterator over a descriptor and its containing descriptors, innermost first.
pub struct Ancestors<'a, G: ?Sized> {
    graph: &'a G,
    next: Option<DescriptorId>,
}

impl<G: DescriptorGraph + ?Sized> Iterator for Ancestors<'_, G> {
    type Item = DescriptorId;

    fn next(&mut self) -> Option<DescriptorId> {
        let current = self.next?;
        self.next = self.graph.containing(current);
        Some(current)
    }
}

/// `descriptor` followed by every descriptor containing it.
pub fn ancestors<G: DescriptorGraph + ?Sized>(graph: &G, descriptor: DescriptorId) -> Ancestors<'_, G> {
    Ancestors {
        graph,
        next: Some(descriptor),
    }
}

/// Nearest descriptor whose kind matches `pred`.
///
/// With `strict == false` the descriptor itself is considered first.
pub fn parent_of_kind<G: DescriptorGraph + ?Sized>(
    graph: &G,
    descriptor: DescriptorId,
    strict: bool,
    pred: impl Fn(DescriptorKind) -> bool,
) -> Option<DescriptorId> {
    ancestors(graph, descriptor)
        .skip(usize::from(strict))
        .find(|&id| pred(graph.kind(id)))
}
