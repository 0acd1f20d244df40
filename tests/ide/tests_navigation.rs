//! End-to-end navigation scenarios.

use crate::helpers::world::{World, fq};
use binnav::NavigationConfig;
use binnav::base::{LineCol, Name};
use binnav::hir::{CallableKind, ClassKind, FileKind};
use binnav::ide::navigate_to_declaration;

const FOO_CLASS: &str = "\
package pkg

public final class Foo public constructor() {
    public final fun bar(): kotlin.Int { /* compiled code */ }
}
";

const PKG_FACADE: &str = "\
package pkg

public fun bar(): kotlin.Unit { /* compiled code */ }

public val answer: kotlin.Int /* compiled code */
";

// =============================================================================
// TOP-LEVEL CLASS
// =============================================================================

#[test]
fn test_navigate_to_top_level_class() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let file = world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo")]);

    let project = world.project();
    let navigator = world.navigator();
    assert_eq!(navigator.container_name(foo), Some(fq("pkg.Foo")));

    let node = navigator
        .navigate_to_declaration(&project, foo)
        .unwrap()
        .expect("Foo should be found in its class file");
    assert_eq!(node.file, file);
    assert_eq!(node.descriptor, foo);
    assert_eq!(node.name.as_str(), "Foo");
    assert_eq!(node.position, LineCol::new(2, 19));
}

#[test]
fn test_navigate_to_class_member() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let bar = world.function(foo, "bar");
    world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo"), (bar, "bar")]);

    let project = world.project();
    let node = world
        .navigator()
        .navigate_to_declaration(&project, bar)
        .unwrap()
        .expect("bar should be found in Foo's class file");
    assert_eq!(node.name.as_str(), "bar");
    assert_eq!(node.position, LineCol::new(3, 21));
}

#[test]
fn test_free_function_entry_point() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo")]);

    let project = world.project();
    let node = navigate_to_declaration(&world.store, &world.artifacts, &world.parser, &project, foo).unwrap();
    assert!(node.is_some());
}

// =============================================================================
// PACKAGE FACADE
// =============================================================================

#[test]
fn test_navigate_to_top_level_function_via_facade() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let bar = world.function(pkg, "bar");
    let answer = world
        .store
        .add_callable(pkg, Name::identifier("answer"), CallableKind::Property);
    world.compiled("pkg.PkgFacade", PKG_FACADE, &[(bar, "bar"), (answer, "answer")]);

    let project = world.project();
    let navigator = world
        .navigator()
        .with_config(NavigationConfig::new().with_facade_suffix("Facade").unwrap());
    assert_eq!(navigator.container_name(bar), Some(fq("pkg.PkgFacade")));

    let bar_node = navigator.navigate_to_declaration(&project, bar).unwrap().unwrap();
    assert_eq!(bar_node.position, LineCol::new(2, 11));

    let answer_node = navigator.navigate_to_declaration(&project, answer).unwrap().unwrap();
    assert_eq!(answer_node.position, LineCol::new(4, 11));
}

#[test]
fn test_default_facade_name_misses_custom_artifact() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let bar = world.function(pkg, "bar");
    world.compiled("pkg.PkgFacade", PKG_FACADE, &[(bar, "bar")]);

    // Default naming looks for pkg.PkgPackage, which isn't indexed.
    let project = world.project();
    assert_eq!(world.navigator().navigate_to_declaration(&project, bar).unwrap(), None);
}

// =============================================================================
// FAKE OVERRIDES
// =============================================================================

#[test]
fn test_fake_override_lands_on_base_declaration() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let base = world.class(pkg, "Base");
    let derived = world.class(pkg, "Derived");
    let to_string = world.function(base, "toString");
    let fake = world.store.add_fake_override(derived, to_string);

    let base_file = world.compiled(
        "pkg.Base",
        "package pkg\n\npublic open class Base {\n    public open fun toString(): kotlin.String\n}\n",
        &[(base, "Base"), (to_string, "toString")],
    );
    world.compiled(
        "pkg.Derived",
        "package pkg\n\npublic final class Derived : pkg.Base {\n}\n",
        &[(derived, "Derived")],
    );

    let project = world.project();
    let navigator = world.navigator();
    assert_eq!(navigator.effective_descriptor(fake), to_string);
    assert_eq!(navigator.container_name(fake), Some(fq("pkg.Base")));

    let node = navigator.navigate_to_declaration(&project, fake).unwrap().unwrap();
    assert_eq!(node.file, base_file);
    assert_eq!(node.descriptor, to_string);
}

// =============================================================================
// NESTED AND LOCAL DECLARATIONS
// =============================================================================

#[test]
fn test_nested_class_member_found_in_outer_artifact() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let outer = world.class(pkg, "Outer");
    let inner = world
        .store
        .add_class(outer, Name::identifier("Inner"), ClassKind::Class);
    let run = world.function(inner, "run");
    let file = world.compiled(
        "pkg.Outer",
        "package pkg\n\npublic final class Outer {\n    public final class Inner {\n        public final fun run() {}\n    }\n}\n",
        &[(outer, "Outer"), (inner, "Inner"), (run, "run")],
    );

    let project = world.project();
    let navigator = world.navigator();
    let node = navigator.navigate_to_declaration(&project, run).unwrap().unwrap();
    assert_eq!(node.file, file);
    assert_eq!(node.position, LineCol::new(4, 25));
    assert_eq!(
        navigator.locate_artifact(&project, inner).unwrap().map(|h| h.file),
        Some(file)
    );
}

#[test]
fn test_local_class_searches_enclosing_artifact() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let method = world.function(foo, "bar");
    let local = world.class(method, "Local");
    world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo"), (method, "bar")]);

    let project = world.project();
    let navigator = world.navigator();
    assert_eq!(navigator.container_name(local), Some(fq("pkg.Foo")));
    // Decompiled text has no body, so the local class itself is not declared there.
    assert_eq!(navigator.navigate_to_declaration(&project, local).unwrap(), None);
}

// =============================================================================
// MISSES
// =============================================================================

#[test]
fn test_no_container_is_a_miss() {
    let world = World::new();
    let mut store = world.store;
    let builtin = store.add_detached(
        binnav::hir::DescriptorKind::CallableMember(CallableKind::Function),
        Name::identifier("println"),
    );

    let project = world.artifacts.project_roots();
    let result = navigate_to_declaration(&store, &world.artifacts, &world.parser, &project, builtin);
    assert!(matches!(result, Ok(None)));
}

#[test]
fn test_unindexed_artifact_is_a_miss() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");

    let project = world.project();
    assert_eq!(world.navigator().navigate_to_declaration(&project, foo).unwrap(), None);
}

#[test]
fn test_source_file_is_rejected() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let source = world.source("pkg.Foo");

    let project = world.project();
    assert_eq!(project.kind(source), Some(FileKind::Source));

    let navigator = world.navigator();
    assert_eq!(navigator.locate_artifact(&project, foo).unwrap(), None);
    assert_eq!(navigator.navigate_to_declaration(&project, foo).unwrap(), None);
}

#[test]
fn test_source_bound_before_class_file_is_still_rejected() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    world.source("pkg.Foo");
    world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo")]);

    // The first in-scope match wins; there is no ambiguity resolution.
    let project = world.project();
    assert_eq!(world.navigator().navigate_to_declaration(&project, foo).unwrap(), None);
}

#[test]
fn test_artifact_without_declaration_is_a_miss() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let stale = world.function(foo, "removed");
    world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo")]);

    let project = world.project();
    let navigator = world.navigator();
    assert!(navigator.locate_artifact(&project, stale).unwrap().is_some());
    assert_eq!(navigator.navigate_to_declaration(&project, stale).unwrap(), None);
}

#[test]
fn test_compiled_artifact_without_decompiled_text_is_a_miss() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    world
        .artifacts
        .add_artifact("/lib/pkg/Foo.class", FileKind::CompiledArtifact, fq("pkg.Foo"));

    let project = world.project();
    assert_eq!(world.navigator().navigate_to_declaration(&project, foo).unwrap(), None);
}

#[test]
fn test_artifact_outside_project_is_a_miss() {
    let mut world = World::new();
    let pkg = world.package("pkg");
    let foo = world.class(pkg, "Foo");
    let file = world.compiled("pkg.Foo", FOO_CLASS, &[(foo, "Foo")]);

    let mut project = world.project();
    project.remove(file);
    assert_eq!(world.navigator().navigate_to_declaration(&project, foo).unwrap(), None);
}
