//! Unit tests for symbol construction, identity, and ordering.

use std::sync::Arc;

use crate::base::SourceRange;
use crate::decl::{
    Branch, CompilationCondition, ConditionalCompilationBlock, Declaration, Extension,
};

use super::symbol::{Documentation, Symbol, SymbolError};
use super::unit::SourceUnitBuilder;

fn class(name: &str) -> Declaration {
    Declaration::Class {
        name: name.into(),
        attributes: vec![],
        modifiers: vec![],
        inheritance: vec![],
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

fn function(name: &str) -> Declaration {
    Declaration::Function {
        name: name.into(),
        attributes: vec![],
        modifiers: vec![],
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

#[test]
fn identity_is_stable_across_equal_inputs() {
    let a = Symbol::new(class("Widget"), vec![], None, None).unwrap();
    let b = Symbol::new(class("Widget"), vec![], None, None).unwrap();
    assert_eq!(a.id().to_string(), b.id().to_string());
    assert_eq!(a, b);
}

#[test]
fn nested_symbol_id_joins_container_names() {
    let mut builder = SourceUnitBuilder::new();
    builder.open_symbol(class("Outer"), None, None).unwrap();
    builder.open_symbol(class("Inner"), None, None).unwrap();
    let member = builder.leaf(function("run"), None, None).unwrap();
    builder.close_symbol();
    builder.close_symbol();
    let unit = builder.finish();

    assert_eq!(member.id().to_string(), "Outer.Inner.run");
    assert_eq!(unit.symbols.len(), 3);
}

#[test]
fn extension_context_contributes_extended_type_components() {
    let mut builder = SourceUnitBuilder::new();
    builder.open_extension(Extension::new("C.E"));
    let member = builder.leaf(function("helper"), None, None).unwrap();
    builder.close_extension();
    builder.finish();

    assert_eq!(member.id().to_string(), "C.E.helper");
    assert_eq!(member.id().path_components(), ["C", "E"]);
}

#[test]
fn conditions_are_transparent_to_identity_and_scope() {
    let block = Arc::new(ConditionalCompilationBlock::new(vec![
        Branch::new("os(Linux)"),
        Branch::fallback(),
    ]));

    let mut builder = SourceUnitBuilder::new();
    let container = builder.open_symbol(class("Host"), None, None).unwrap();
    builder.open_condition(CompilationCondition::new(block, 0));
    let member = builder.leaf(function("poll"), None, None).unwrap();
    builder.close_condition();
    builder.close_symbol();
    builder.finish();

    assert_eq!(member.id().to_string(), "Host.poll");
    assert_eq!(member.conditions().len(), 1);
    let enclosing = member.enclosing_symbol().expect("enclosing symbol");
    assert!(Arc::ptr_eq(enclosing, &container));
}

#[test]
fn blank_name_fails_one_record_only() {
    let mut builder = SourceUnitBuilder::new();
    let err = builder.leaf(function("  "), None, None).unwrap_err();
    assert!(matches!(err, SymbolError::MissingName { .. }));

    // the unit keeps accepting records after the failure
    builder.leaf(function("valid"), None, None).unwrap();
    let unit = builder.finish();
    assert_eq!(unit.symbols.len(), 1);
}

#[test]
#[should_panic(expected = "close_extension does not match")]
fn mismatched_close_asserts() {
    let mut builder = SourceUnitBuilder::new();
    builder.open_symbol(class("Outer"), None, None).unwrap();
    builder.close_extension();
}

#[test]
fn equal_declarations_at_different_locations_are_distinct() {
    let here = SourceRange::from_coords("a.swift", 1, 1, 1, 10);
    let there = SourceRange::from_coords("b.swift", 1, 1, 1, 10);
    let a = Symbol::new(class("Widget"), vec![], None, Some(here)).unwrap();
    let b = Symbol::new(class("Widget"), vec![], None, Some(there)).unwrap();
    assert_eq!(a.id(), b.id());
    assert_ne!(a, b);
}

#[test]
fn display_order_prefers_source_ranges_then_names() {
    let early = Symbol::new(
        class("Zebra"),
        vec![],
        None,
        Some(SourceRange::from_coords("a.swift", 1, 1, 1, 5)),
    )
    .unwrap();
    let late = Symbol::new(
        class("Alpha"),
        vec![],
        None,
        Some(SourceRange::from_coords("a.swift", 9, 1, 9, 5)),
    )
    .unwrap();
    // both ranged: source position wins over the name
    assert!(early.display_order(&late).is_lt());

    let unranged = Symbol::new(class("Middle"), vec![], None, None).unwrap();
    // mixed: falls back to lexicographic names
    assert!(unranged.display_order(&late).is_gt());
    assert!(unranged.display_order(&early).is_lt());
}

#[test]
fn documentation_must_be_non_blank_to_count() {
    let documented = Symbol::new(
        class("A"),
        vec![],
        Some(Documentation::new("Does a thing.")),
        None,
    )
    .unwrap();
    let blank = Symbol::new(class("B"), vec![], Some(Documentation::new("   ")), None).unwrap();
    let none = Symbol::new(class("C"), vec![], None, None).unwrap();

    assert!(documented.is_documented());
    assert!(!blank.is_documented());
    assert!(!none.is_documented());
}
