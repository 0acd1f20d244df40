//! Container name resolution over realistic descriptor trees.

use rstest::rstest;

use crate::helpers::world::fq;
use binnav::base::Name;
use binnav::hir::{
    CallableKind, ClassKind, DescriptorKind, DescriptorStore, FacadeNaming, FqName,
    resolve_container_name,
};

// ============================================================================
// PACKAGE MEMBERS
// ============================================================================

#[rstest]
#[case("pkg", "pkg.PkgPackage")]
#[case("kotlin.io", "kotlin.io.IoPackage")]
#[case("a.b.c", "a.b.c.CPackage")]
#[case("", "_DefaultPackage")]
fn test_package_member_resolves_to_facade(#[case] package: &str, #[case] expected: &str) {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq(package));
    let function = store.add_callable(fragment, Name::identifier("bar"), CallableKind::Function);
    let property = store.add_callable(fragment, Name::identifier("baz"), CallableKind::Property);

    let naming = FacadeNaming::default();
    let facade = resolve_container_name(&store, &naming, function);
    assert_eq!(facade, Some(fq(expected)));
    assert_eq!(resolve_container_name(&store, &naming, property), facade);
}

#[test]
fn test_facade_suffix_is_configurable() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let bar = store.add_callable(fragment, Name::identifier("bar"), CallableKind::Function);

    let naming = FacadeNaming::default().with_suffix("Facade").unwrap();
    assert_eq!(resolve_container_name(&store, &naming, bar), Some(fq("pkg.PkgFacade")));
}

#[test]
fn test_local_variable_in_top_level_function() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let main = store.add_callable(fragment, Name::identifier("main"), CallableKind::Function);
    let local = store.add_other(Some(main), Some(Name::identifier("x")));

    let naming = FacadeNaming::default();
    assert_eq!(resolve_container_name(&store, &naming, local), Some(fq("pkg.PkgPackage")));
}

// ============================================================================
// CLASSES
// ============================================================================

#[rstest]
#[case(ClassKind::Class)]
#[case(ClassKind::Interface)]
#[case(ClassKind::Enum)]
#[case(ClassKind::Object)]
#[case(ClassKind::Annotation)]
fn test_top_level_class_kinds(#[case] kind: ClassKind) {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let class = store.add_class(fragment, Name::identifier("Foo"), kind);

    let naming = FacadeNaming::default();
    assert_eq!(resolve_container_name(&store, &naming, class), Some(fq("pkg.Foo")));
}

#[test]
fn test_nesting_never_introduces_its_own_artifact() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let b = store.add_class(fragment, Name::identifier("B"), ClassKind::Class);
    let c = store.add_class(b, Name::identifier("C"), ClassKind::Class);
    let d = store.add_class(c, Name::identifier("D"), ClassKind::Interface);
    let member = store.add_callable(d, Name::identifier("run"), CallableKind::Function);

    let naming = FacadeNaming::default();
    let resolve = |id| resolve_container_name(&store, &naming, id);
    assert_eq!(resolve(c), resolve(b));
    assert_eq!(resolve(d), resolve(b));
    assert_eq!(resolve(member), Some(fq("pkg.B")));
}

#[test]
fn test_local_class_resolves_to_non_local_ancestor() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let outer = store.add_class(fragment, Name::identifier("Outer"), ClassKind::Class);
    let method = store.add_callable(outer, Name::identifier("compute"), CallableKind::Function);
    let local = store.add_class(method, Name::identifier("Helper"), ClassKind::Class);
    let deep = store.add_callable(local, Name::identifier("apply"), CallableKind::Function);
    let lambda_scope = store.add_other(Some(deep), Some(Name::anonymous()));
    let deepest = store.add_anonymous_object(lambda_scope);

    let naming = FacadeNaming::default();
    for descriptor in [local, deep, lambda_scope, deepest] {
        assert_eq!(
            resolve_container_name(&store, &naming, descriptor),
            Some(fq("pkg.Outer")),
            "{descriptor:?} should land in pkg.Outer"
        );
    }
}

#[test]
fn test_class_nested_in_local_class() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let run = store.add_callable(fragment, Name::identifier("run"), CallableKind::Function);
    let local = store.add_class(run, Name::identifier("Local"), ClassKind::Class);
    let nested = store.add_class(local, Name::identifier("Nested"), ClassKind::Class);

    let naming = FacadeNaming::default();
    assert_eq!(resolve_container_name(&store, &naming, nested), Some(fq("pkg.PkgPackage")));
}

#[test]
fn test_unrepresentable_class_name_is_absent() {
    let mut store = DescriptorStore::new();
    let fragment = store.add_package(fq("pkg"));
    let object = store.add_anonymous_object(fragment);
    let member = store.add_callable(object, Name::identifier("run"), CallableKind::Function);
    let special = store.add_class(fragment, Name::special("<script>"), ClassKind::Class);

    let naming = FacadeNaming::default();
    assert_eq!(resolve_container_name(&store, &naming, object), None);
    assert_eq!(resolve_container_name(&store, &naming, member), None);
    assert_eq!(resolve_container_name(&store, &naming, special), None);
}

// ============================================================================
// NO CONTAINER
// ============================================================================

#[rstest]
#[case(DescriptorKind::CallableMember(CallableKind::Function))]
#[case(DescriptorKind::CallableMember(CallableKind::Property))]
#[case(DescriptorKind::Other)]
fn test_detached_root_is_absent(#[case] kind: DescriptorKind) {
    let mut store = DescriptorStore::new();
    let root = store.add_detached(kind, Name::identifier("synthetic"));
    let child = store.add_other(Some(root), None);

    let naming = FacadeNaming::default();
    assert_eq!(resolve_container_name(&store, &naming, root), None);
    assert_eq!(resolve_container_name(&store, &naming, child), None);
}

#[test]
fn test_root_package_name_is_root() {
    assert!(fq("").is_root());
    assert_eq!(fq(""), FqName::root());
}
