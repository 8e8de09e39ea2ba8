//! Shared fixture builders for the integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use docsym::{
    Declaration, Modifier, SourceUnit, SourceUnitBuilder, Symbol, SymbolGraph, SymbolId,
};

pub fn mods(names: &[&str]) -> Vec<Modifier> {
    names.iter().map(|name| Modifier::new(*name)).collect()
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn class(name: &str, modifiers: &[&str], inheritance: &[&str]) -> Declaration {
    Declaration::Class {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
        inheritance: strings(inheritance),
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

pub fn structure(name: &str, modifiers: &[&str], inheritance: &[&str]) -> Declaration {
    Declaration::Structure {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
        inheritance: strings(inheritance),
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

pub fn enumeration(name: &str, modifiers: &[&str], inheritance: &[&str]) -> Declaration {
    Declaration::Enumeration {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
        inheritance: strings(inheritance),
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

pub fn protocol(name: &str, modifiers: &[&str], inheritance: &[&str]) -> Declaration {
    Declaration::Protocol {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
        inheritance: strings(inheritance),
    }
}

pub fn case(name: &str) -> Declaration {
    Declaration::EnumerationCase {
        name: name.into(),
        attributes: vec![],
        modifiers: vec![],
    }
}

pub fn function(name: &str, modifiers: &[&str]) -> Declaration {
    Declaration::Function {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
        generic_parameters: vec![],
        generic_requirements: vec![],
    }
}

pub fn variable(name: &str, modifiers: &[&str]) -> Declaration {
    Declaration::Variable {
        name: name.into(),
        attributes: vec![],
        modifiers: mods(modifiers),
    }
}

pub fn operator_decl(name: &str) -> Declaration {
    Declaration::Operator {
        name: name.into(),
        attributes: vec![],
        modifiers: vec![],
    }
}

/// Drive one builder walk and finalize the unit.
pub fn unit(build: impl FnOnce(&mut SourceUnitBuilder)) -> SourceUnit {
    let mut builder = SourceUnitBuilder::new();
    build(&mut builder);
    builder.finish()
}

pub fn graph(units: Vec<SourceUnit>) -> SymbolGraph {
    SymbolGraph::new("TestModule", units)
}

/// Look up a declared symbol's arena id by its dotted description.
pub fn find(graph: &SymbolGraph, description: &str) -> SymbolId {
    let symbol = graph
        .symbols()
        .iter()
        .find(|symbol| symbol.id().to_string() == description)
        .unwrap_or_else(|| panic!("no symbol with id '{description}'"));
    graph.symbol_id(symbol).expect("declared symbol has an id")
}

pub fn descriptions(symbols: &[&Arc<Symbol>]) -> Vec<String> {
    symbols
        .iter()
        .map(|symbol| symbol.id().to_string())
        .collect()
}
