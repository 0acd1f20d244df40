//! Collapsing fake overrides onto their declaring member.

use rustc_hash::FxHashSet;

use super::descriptor::DescriptorGraph;
use super::ids::DescriptorId;

/// The descriptor that actually owns the declaration of `descriptor`.
///
/// Callable members follow the fake-override relation down to the member
/// that is declared where it appears. Every other kind is returned as-is.
///
/// On a well-formed graph this is idempotent. A graph whose override
/// relation loops is malformed; the walk stops before revisiting a member
/// and returns the last distinct one reached.
pub fn normalize<G: DescriptorGraph + ?Sized>(graph: &G, descriptor: DescriptorId) -> DescriptorId {
    if !graph.kind(descriptor).is_callable() {
        return descriptor;
    }

    let mut current = descriptor;
    let mut visited = FxHashSet::default();
    visited.insert(current);

    while let Some(original) = graph.override_original(current) {
        if !visited.insert(original) {
            tracing::warn!(
                ?descriptor,
                ?original,
                "fake override chain loops, stopping at {:?}",
                current
            );
            break;
        }
        current = original;
    }

    if current != descriptor {
        tracing::trace!(?descriptor, original = ?current, "unwrapped fake override");
    }
    current
}
