//! Container resolution: which compiled artifact declares a descriptor.
//!
//! Artifacts are emitted per package facade and per top-level class. Nested
//! and local classes share the artifact of their nearest non-local,
//! non-nested ancestor, so resolution ascends the containment chain until it
//! reaches a package fragment or such a class.

use tracing::{debug, trace};

use crate::base::Name;

use super::descriptor::{DescriptorGraph, DescriptorKind, ancestors};
use super::facade::FacadeNaming;
use super::fq_name::{FqName, FqNameUnsafe};
use super::ids::DescriptorId;

/// Nearest class or package fragment, the descriptor itself included.
enum Container {
    Package(DescriptorId),
    Class(DescriptorId),
}

fn nearest_container<G: DescriptorGraph + ?Sized>(graph: &G, descriptor: DescriptorId) -> Option<Container> {
    ancestors(graph, descriptor).find_map(|id| match graph.kind(id) {
        DescriptorKind::PackageFragment => Some(Container::Package(id)),
        DescriptorKind::Class(_) => Some(Container::Class(id)),
        DescriptorKind::CallableMember(_) | DescriptorKind::Other => None,
    })
}

/// Qualified name of the artifact that should contain `descriptor`.
///
/// Returns `None` when no class or package fragment encloses the descriptor,
/// or when the artifact class has a name that can't be used for lookup
/// (for example an anonymous object). Both are ordinary outcomes.
pub fn resolve_container_name<G: DescriptorGraph + ?Sized>(
    graph: &G,
    naming: &FacadeNaming,
    descriptor: DescriptorId,
) -> Option<FqName> {
    let mut cursor = descriptor;
    loop {
        match nearest_container(graph, cursor) {
            None => {
                debug!(?descriptor, "no enclosing class or package fragment");
                return None;
            }
            Some(Container::Package(fragment)) => {
                let Some(package) = graph.package_fq_name(fragment) else {
                    debug!(?descriptor, ?fragment, "package fragment without a package name");
                    return None;
                };
                let facade = naming.facade_name(&package);
                trace!(?descriptor, %facade, "resolved to package facade");
                return Some(facade);
            }
            Some(Container::Class(class)) => {
                let parent = graph.containing(class);
                let ascend = parent
                    .filter(|&p| graph.kind(p).is_class() || graph.is_local(Some(p), class));
                if let Some(parent) = ascend {
                    trace!(?class, ?parent, "nested or local class, ascending");
                    cursor = parent;
                    continue;
                }

                let fq_name = fq_name_unsafe(graph, class);
                return match fq_name.into_safe() {
                    Some(name) => {
                        trace!(?descriptor, %name, "resolved to top-level class");
                        Some(name)
                    }
                    None => {
                        debug!(?descriptor, ?class, "class name is not representable");
                        None
                    }
                };
            }
        }
    }
}

/// Full qualified name of any descriptor.
///
/// Package fragments yield their package name. Anything else yields its
/// container's name followed by its own name; unnamed descriptors contribute
/// `<no name provided>`.
pub fn fq_name_unsafe<G: DescriptorGraph + ?Sized>(graph: &G, descriptor: DescriptorId) -> FqNameUnsafe {
    let mut names = Vec::new();
    let mut package = FqName::root();

    for id in ancestors(graph, descriptor) {
        if graph.kind(id).is_package_fragment() {
            if let Some(fq_name) = graph.package_fq_name(id) {
                package = fq_name;
            }
            break;
        }
        names.push(graph.name(id).unwrap_or_else(Name::no_name_provided));
    }

    FqNameUnsafe::from_segments(
        package
            .segments()
            .iter()
            .cloned()
            .chain(names.into_iter().rev()),
    )
}
