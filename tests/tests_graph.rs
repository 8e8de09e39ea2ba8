//! Relationship derivation: membership, inheritance vs. conformance,
//! placeholders, extension merging, and determinism.

mod helpers;

use docsym::{
    Declaration, Extension, GenericRequirement, Modifier, Predicate, Relation, SourceRange,
};
use helpers::*;

#[test]
fn inheritance_and_conformance_tie_break() {
    // class A; class B: A; protocol P; class D: A, P
    let unit = unit(|b| {
        b.leaf(class("A", &[], &[]), None, None).unwrap();
        b.leaf(class("B", &[], &["A"]), None, None).unwrap();
        b.leaf(protocol("P", &[], &[]), None, None).unwrap();
        b.leaf(class("D", &[], &["A", "P"]), None, None).unwrap();
    });
    let graph = graph(vec![unit]);
    let d = find(&graph, "D");

    assert_eq!(descriptions(&graph.types_inherited(d)), ["A"]);
    assert_eq!(descriptions(&graph.types_conformed(d)), ["P"]);

    let a = find(&graph, "A");
    let p = find(&graph, "P");
    assert!(
        graph
            .relationships()
            .iter()
            .any(|r| r.subject == d && r.predicate == Predicate::InheritsFrom && r.object == a)
    );
    assert!(
        graph
            .relationships()
            .iter()
            .any(|r| r.subject == d && r.predicate == Predicate::ConformsTo && r.object == p)
    );
}

#[test]
fn unresolvable_reference_becomes_public_placeholder() {
    let unit = unit(|b| {
        b.leaf(class("X", &[], &["Unreferenced"]), None, None).unwrap();
    });
    let graph = graph(vec![unit]);
    let x = find(&graph, "X");

    let conformed = graph.types_conformed(x);
    assert_eq!(conformed.len(), 1);
    let placeholder = conformed[0];
    assert_eq!(placeholder.id().to_string(), "Unreferenced");
    assert!(matches!(
        placeholder.declaration(),
        Declaration::Unknown { .. }
    ));
    assert!(placeholder.source_range().is_none());

    let id = graph.symbol_id(placeholder).expect("placeholder id");
    assert!(graph.visibility(id).is_public());

    // exactly one edge out of X
    let edges: Vec<_> = graph
        .relationships()
        .iter()
        .filter(|r| r.subject == x)
        .collect();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].predicate, Predicate::ConformsTo);
}

#[test]
fn repeated_unresolved_references_share_one_placeholder() {
    let unit = unit(|b| {
        b.leaf(class("X", &[], &["Missing"]), None, None).unwrap();
        b.leaf(class("Y", &[], &["Missing"]), None, None).unwrap();
    });
    let graph = graph(vec![unit]);
    let x = find(&graph, "X");
    let y = find(&graph, "Y");

    let object_of = |subject| {
        graph
            .relationships()
            .iter()
            .find(|r| r.subject == subject && r.predicate == Predicate::ConformsTo)
            .map(|r| r.object)
            .expect("conformance edge")
    };
    assert_eq!(object_of(x), object_of(y));
}

#[test]
fn compound_conformance_lists_are_split() {
    let unit = unit(|b| {
        b.leaf(class("C", &[], &["Codable & Equatable"]), None, None)
            .unwrap();
    });
    let graph = graph(vec![unit]);
    let c = find(&graph, "C");
    assert_eq!(
        descriptions(&graph.types_conformed(c)),
        ["Codable", "Equatable"]
    );
}

#[test]
fn extension_members_attach_across_source_units() {
    // unit 1: struct S {}    unit 2: extension S { func f() }
    let declaring = unit(|b| {
        b.leaf(structure("S", &[], &[]), None, None).unwrap();
    });
    let extending = unit(|b| {
        b.open_extension(Extension::new("S"));
        b.leaf(function("f", &[]), None, None).unwrap();
        b.close_extension();
    });
    let graph = graph(vec![declaring, extending]);
    let s = find(&graph, "S");

    assert_eq!(descriptions(&graph.members(s)), ["S.f"]);
}

#[test]
fn protocol_extension_members_are_default_implementations() {
    let unit = unit(|b| {
        b.open_symbol(protocol("P", &[], &[]), None, None).unwrap();
        b.leaf(function("f", &[]), None, None).unwrap();
        b.close_symbol();
        b.open_extension(Extension::new("P"));
        b.leaf(function("f", &[]), None, None).unwrap();
        b.close_extension();
    });
    let graph = graph(vec![unit]);
    let p = find(&graph, "P");

    assert_eq!(descriptions(&graph.requirements(p)), ["P.f"]);
    assert_eq!(descriptions(&graph.default_implementations(p)), ["P.f"]);
    // extension-provided implementations are not plain members
    assert!(graph.members(p).is_empty());
}

#[test]
fn optional_modifier_splits_requirements() {
    let unit = unit(|b| {
        b.open_symbol(protocol("P", &[], &[]), None, None).unwrap();
        b.leaf(function("required", &[]), None, None).unwrap();
        b.leaf(function("extra", &["optional"]), None, None).unwrap();
        b.close_symbol();
    });
    let graph = graph(vec![unit]);
    let p = find(&graph, "P");

    assert_eq!(descriptions(&graph.requirements(p)), ["P.required"]);
    assert_eq!(descriptions(&graph.optional_requirements(p)), ["P.extra"]);
}

#[test]
fn extension_of_external_type_leaves_members_orphaned() {
    let unit = unit(|b| {
        b.open_extension(Extension::new("OtherModuleType"));
        b.leaf(function("helper", &[]), None, None).unwrap();
        b.close_extension();
    });
    let graph = graph(vec![unit]);

    // the member exists but owns no edges
    let helper = find(&graph, "OtherModuleType.helper");
    assert!(
        graph
            .relationships()
            .iter()
            .all(|r| r.subject != helper && r.object != helper)
    );
}

#[test]
fn short_extension_name_resolves_to_qualified_nested_type() {
    // class C { class E {} }; class E {}; extension E { func f() }
    let unit = unit(|b| {
        b.open_symbol(class("C", &[], &[]), None, None).unwrap();
        b.leaf(class("E", &[], &[]), None, None).unwrap();
        b.close_symbol();
        b.leaf(class("E", &[], &[]), None, None).unwrap();
        b.open_extension(Extension::new("E"));
        b.leaf(function("f", &[]), None, None).unwrap();
        b.close_extension();
    });
    let graph = graph(vec![unit]);

    let nested = find(&graph, "C.E");
    assert_eq!(graph.members(nested).len(), 1);
    let top_level = find(&graph, "E");
    assert!(graph.members(top_level).is_empty());
}

#[test]
fn unconditional_extension_inheritance_merges_transitively() {
    // struct S {}; extension S: Middle; extension Middle: Marker;
    // protocol Marker {}  — Middle itself is never declared.
    let unit = unit(|b| {
        b.leaf(structure("S", &[], &[]), None, None).unwrap();
        b.open_extension({
            let mut ext = Extension::new("S");
            ext.inheritance.push("Middle".into());
            ext
        });
        b.close_extension();
        b.open_extension({
            let mut ext = Extension::new("Middle");
            ext.inheritance.push("Marker".into());
            ext
        });
        b.close_extension();
        b.leaf(protocol("Marker", &[], &[]), None, None).unwrap();
    });
    let graph = graph(vec![unit]);
    let s = find(&graph, "S");

    // fixed-point union: the placeholder for Middle plus the declared Marker
    assert_eq!(
        descriptions(&graph.types_conformed(s)),
        ["Marker", "Middle"]
    );
}

#[test]
fn conditional_extensions_do_not_merge_inheritance_or_members() {
    let constrained = GenericRequirement::new("Element", Relation::Conformance, "Equatable");
    let unit = unit(|b| {
        b.leaf(structure("Stack", &[], &[]), None, None).unwrap();
        b.leaf(protocol("P", &[], &[]), None, None).unwrap();
        b.open_extension({
            let mut ext = Extension::new("Stack");
            ext.inheritance.push("P".into());
            ext.generic_requirements.push(constrained.clone());
            ext
        });
        b.leaf(function("sorted", &[]), None, None).unwrap();
        b.close_extension();
    });
    let graph = graph(vec![unit]);
    let stack = find(&graph, "Stack");

    assert!(graph.types_conformed(stack).is_empty());
    assert!(graph.members(stack).is_empty());

    let groups = graph.generically_constrained_members(stack);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].requirements, std::slice::from_ref(&constrained));
    assert_eq!(descriptions(&groups[0].members), ["Stack.sorted"]);
}

#[test]
fn construction_is_pure_and_idempotent() {
    let build = || {
        let declaring = unit(|b| {
            b.leaf(class("A", &["public"], &[]), None, None).unwrap();
            b.leaf(class("B", &["public"], &["A", "Unknowable"]), None, None)
                .unwrap();
        });
        graph(vec![declaring])
    };
    let first = build();
    let second = build();
    assert_eq!(first.relationships(), second.relationships());
    assert_eq!(
        descriptions(&first.top_level_symbols()),
        descriptions(&second.top_level_symbols())
    );
}

#[test]
fn top_level_includes_types_and_free_symbols_only() {
    let unit = unit(|b| {
        b.open_symbol(class("Outer", &[], &[]), None, None).unwrap();
        b.leaf(class("Nested", &[], &[]), None, None).unwrap();
        b.leaf(function("method", &[]), None, None).unwrap();
        b.close_symbol();
        b.leaf(function("free", &[]), None, None).unwrap();
    });
    let graph = graph(vec![unit]);

    // unranged symbols order lexicographically by bare name
    assert_eq!(
        descriptions(&graph.top_level_symbols()),
        ["Outer.Nested", "Outer", "free"]
    );
}

#[test]
fn queries_sort_by_source_range_then_name() {
    let unit = unit(|b| {
        b.open_symbol(class("T", &[], &[]), None, None).unwrap();
        b.leaf(
            function("zulu", &[]),
            None,
            Some(SourceRange::from_coords("t.swift", 2, 1, 2, 10)),
        )
        .unwrap();
        b.leaf(
            function("alpha", &[]),
            None,
            Some(SourceRange::from_coords("t.swift", 8, 1, 8, 10)),
        )
        .unwrap();
        b.close_symbol();
    });
    let graph = graph(vec![unit]);
    let t = find(&graph, "T");

    // source position wins over the lexicographic order
    assert_eq!(descriptions(&graph.members(t)), ["T.zulu", "T.alpha"]);
    // repeated calls observe the same order
    assert_eq!(
        descriptions(&graph.members(t)),
        descriptions(&graph.members(t))
    );
}

#[test]
fn unranged_symbols_fall_back_to_lexicographic_order() {
    let unit = unit(|b| {
        b.leaf(class("T", &[], &["Zeta", "Alpha", "Mid"]), None, None)
            .unwrap();
    });
    let graph = graph(vec![unit]);
    let t = find(&graph, "T");

    assert_eq!(
        descriptions(&graph.types_conformed(t)),
        ["Alpha", "Mid", "Zeta"]
    );
}

#[test]
fn scoped_modifier_does_not_affect_membership() {
    let unit = unit(|b| {
        b.open_symbol(structure("S", &["public"], &[]), None, None)
            .unwrap();
        b.leaf(
            Declaration::Variable {
                name: "count".into(),
                attributes: vec![],
                modifiers: vec![Modifier::with_detail("private", "set")],
            },
            None,
            None,
        )
        .unwrap();
        b.close_symbol();
    });
    let graph = graph(vec![unit]);
    let s = find(&graph, "S");
    assert_eq!(descriptions(&graph.members(s)), ["S.count"]);
}
