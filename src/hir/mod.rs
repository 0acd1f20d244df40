//! High-level IR: the descriptor graph and everything derived from it.
//!
//! - [`DescriptorGraph`] - read-only view of the analyzer's descriptors
//! - [`DescriptorStore`] - in-memory graph
//! - [`normalize`] - collapses fake overrides onto their declaration
//! - [`resolve_container_name`] - names the artifact declaring a descriptor
//! - [`ProjectRoots`], [`SearchScope`] - the files a request may land in

mod container;
mod descriptor;
mod facade;
mod fq_name;
mod ids;
mod input;
mod normalize;
mod store;

pub use container::{fq_name_unsafe, resolve_container_name};
pub use descriptor::{
    Ancestors, CallableKind, ClassKind, DescriptorGraph, DescriptorKind, ancestors, parent_of_kind,
};
pub use facade::FacadeNaming;
pub use fq_name::{FqName, FqNameUnsafe, NameError};
pub use ids::DescriptorId;
pub use input::{FileKind, ProjectRoots, SearchScope};
pub use normalize::normalize;
pub use store::DescriptorStore;
