//! Graph construction — the single derivation pass.
//!
//! [`SymbolGraph::new`] merges the finalized source units and computes every
//! derived collection up front: relationship edges, the subject/object
//! indices, base classes, class hierarchies, and the top-level symbol list.
//! The graph is immutable afterwards, so the derived state is shareable
//! read-only with no synchronization.
//!
//! Relationship derivation must see the whole symbol universe (an extension
//! in one unit can complete a type declared in another), so it runs
//! single-threaded over the merged collections. Only the per-symbol
//! visibility precompute, which reads nothing but each symbol's own context,
//! runs in parallel.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::base::{Identifier, Visibility};
use crate::decl::{Declaration, Extension};
use crate::symbol::{ContextElement, SourceUnit, Symbol};

use super::relationship::{Predicate, Relationship, SymbolId};

/// The queryable symbol graph for one module.
///
/// Owns every symbol collected across all source units (plus the interned
/// placeholders synthesized for unresolvable type references) and the
/// relationship edges derived from them.
pub struct SymbolGraph {
    pub(super) name: String,
    /// Arena: declared symbols in unit order, then interned placeholders.
    pub(super) symbols: Vec<Arc<Symbol>>,
    /// Number of declared (non-placeholder) symbols at the front of the arena.
    pub(super) declared: usize,
    pub(super) extensions: Vec<Arc<Extension>>,
    /// Per-symbol effective visibility, parallel to `symbols`.
    pub(super) visibilities: Vec<Visibility>,
    /// Deduplicated, sorted edge list.
    pub(super) relationships: Vec<Relationship>,
    pub(super) by_subject: FxHashMap<SymbolId, Vec<Relationship>>,
    pub(super) by_object: FxHashMap<SymbolId, Vec<Relationship>>,
    /// Identifier description → declared symbols sharing it (conditional
    /// counterparts).
    pub(super) by_identifier: FxHashMap<String, Vec<SymbolId>>,
    pub(super) base_classes: Vec<SymbolId>,
    /// Base class → public descendant closure, keys in `base_classes` order.
    pub(super) hierarchies: IndexMap<SymbolId, Vec<SymbolId>>,
    pub(super) top_level: Vec<SymbolId>,
}

impl SymbolGraph {
    /// Build the graph for a module from its finalized source units.
    pub fn new(name: impl Into<String>, units: impl IntoIterator<Item = SourceUnit>) -> Self {
        let name = name.into();
        let mut symbols: Vec<Arc<Symbol>> = Vec::new();
        let mut extensions: Vec<Arc<Extension>> = Vec::new();
        for unit in units {
            symbols.extend(unit.symbols);
            extensions.extend(unit.extensions);
        }
        let declared = symbols.len();
        debug!(
            "[GRAPH] building '{}': {} symbols, {} extensions",
            name,
            declared,
            extensions.len()
        );

        // Visibility is a per-symbol function of its own context chain, so it
        // precomputes in parallel before the single-threaded derivation.
        let visibilities: Vec<Visibility> = symbols
            .par_iter()
            .map(|symbol| symbol.visibility())
            .collect();

        let mut builder = Builder {
            symbols,
            visibilities,
            extensions,
            declared,
            by_ptr: FxHashMap::default(),
            type_ids: Vec::new(),
            placeholders: FxHashMap::default(),
            edges: FxHashSet::default(),
        };
        builder.index_declared();
        builder.derive_relationships();

        let Builder {
            symbols,
            visibilities,
            extensions,
            declared,
            edges,
            ..
        } = builder;

        let mut relationships: Vec<Relationship> = edges.into_iter().collect();
        relationships.sort_unstable();

        let mut by_subject: FxHashMap<SymbolId, Vec<Relationship>> = FxHashMap::default();
        let mut by_object: FxHashMap<SymbolId, Vec<Relationship>> = FxHashMap::default();
        for relationship in &relationships {
            by_subject
                .entry(relationship.subject)
                .or_default()
                .push(*relationship);
            by_object
                .entry(relationship.object)
                .or_default()
                .push(*relationship);
        }

        let mut by_identifier: FxHashMap<String, Vec<SymbolId>> = FxHashMap::default();
        for (index, symbol) in symbols.iter().take(declared).enumerate() {
            by_identifier
                .entry(symbol.id().to_string())
                .or_default()
                .push(SymbolId::new(index));
        }

        let mut graph = Self {
            name,
            symbols,
            declared,
            extensions,
            visibilities,
            relationships,
            by_subject,
            by_object,
            by_identifier,
            base_classes: Vec::new(),
            hierarchies: IndexMap::new(),
            top_level: Vec::new(),
        };
        graph.base_classes = graph.find_base_classes();
        graph.hierarchies = graph.build_hierarchies();
        graph.top_level = graph.find_top_level();
        debug!(
            "[GRAPH] built '{}': {} relationships, {} placeholders, {} base classes",
            graph.name,
            graph.relationships.len(),
            graph.symbols.len() - graph.declared,
            graph.base_classes.len()
        );
        graph
    }

    fn find_base_classes(&self) -> Vec<SymbolId> {
        let mut ids: Vec<SymbolId> = (0..self.declared)
            .map(SymbolId::new)
            .filter(|&id| {
                matches!(
                    self.symbols[id.index()].declaration(),
                    Declaration::Class { .. }
                ) && !self.has_edge_as_subject(id, Predicate::InheritsFrom)
            })
            .collect();
        self.sort_ids(&mut ids);
        ids
    }

    fn has_edge_as_subject(&self, id: SymbolId, predicate: Predicate) -> bool {
        self.by_subject
            .get(&id)
            .is_some_and(|edges| edges.iter().any(|edge| edge.predicate == predicate))
    }

    /// Breadth-first closure over public subclasses, per base class. A
    /// visited set guards against cycles in malformed input.
    fn build_hierarchies(&self) -> IndexMap<SymbolId, Vec<SymbolId>> {
        let mut hierarchies = IndexMap::new();
        for &base in &self.base_classes {
            let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
            seen.insert(base);
            let mut frontier = std::collections::VecDeque::from([base]);
            let mut descendants: Vec<SymbolId> = Vec::new();
            while let Some(current) = frontier.pop_front() {
                for edge in self.by_object.get(&current).into_iter().flatten() {
                    if edge.predicate != Predicate::InheritsFrom {
                        continue;
                    }
                    let subclass = edge.subject;
                    if !self.visibilities[subclass.index()].is_public() {
                        continue;
                    }
                    if seen.insert(subclass) {
                        descendants.push(subclass);
                        frontier.push_back(subclass);
                    }
                }
            }
            self.sort_ids(&mut descendants);
            hierarchies.insert(base, descendants);
        }
        hierarchies
    }

    fn find_top_level(&self) -> Vec<SymbolId> {
        let mut ids: Vec<SymbolId> = (0..self.declared)
            .map(SymbolId::new)
            .filter(|&id| {
                let symbol = &self.symbols[id.index()];
                symbol.declaration().is_type() || symbol.enclosing_scope().is_none()
            })
            .collect();
        self.sort_ids(&mut ids);
        ids
    }

    pub(super) fn sort_ids(&self, ids: &mut [SymbolId]) {
        ids.sort_by(|&a, &b| self.symbols[a.index()].display_order(&self.symbols[b.index()]));
    }
}

/// Mutable state of the derivation pass; collapses into the graph's final
/// fields once the edge set is complete.
struct Builder {
    symbols: Vec<Arc<Symbol>>,
    visibilities: Vec<Visibility>,
    extensions: Vec<Arc<Extension>>,
    declared: usize,
    /// Arc address → arena id, for resolving container back-references from
    /// context chains.
    by_ptr: FxHashMap<usize, SymbolId>,
    /// Declared type symbols (classes, structures, enumerations, protocols).
    type_ids: Vec<SymbolId>,
    /// Interned placeholders, one per distinct unresolved type name.
    placeholders: FxHashMap<String, SymbolId>,
    edges: FxHashSet<Relationship>,
}

impl Builder {
    fn index_declared(&mut self) {
        for (index, symbol) in self.symbols.iter().enumerate() {
            let id = SymbolId::new(index);
            self.by_ptr.insert(Arc::as_ptr(symbol) as usize, id);
            if symbol.declaration().is_type() {
                self.type_ids.push(id);
            }
        }
    }

    fn derive_relationships(&mut self) {
        for index in 0..self.declared {
            let subject = SymbolId::new(index);
            self.ownership_edge(subject);
            self.type_edges(subject);
        }
    }

    /// §1 of the derivation: one edge to the nearest enclosing symbol or
    /// extension scope, with the predicate picked by the container's kind.
    fn ownership_edge(&mut self, subject: SymbolId) {
        let symbol = self.symbols[subject.index()].clone();
        match symbol.enclosing_scope() {
            Some(ContextElement::Symbol(container)) => {
                let Some(&object) = self.by_ptr.get(&(Arc::as_ptr(container) as usize)) else {
                    return;
                };
                let predicate = if matches!(
                    container.declaration(),
                    Declaration::Protocol { .. }
                ) {
                    if symbol.declaration().has_modifier("optional") {
                        Predicate::OptionalRequirementOf
                    } else {
                        Predicate::RequirementOf
                    }
                } else {
                    Predicate::MemberOf
                };
                self.edges
                    .insert(Relationship::new(subject, predicate, object));
            }
            Some(ContextElement::Extension(extension)) => {
                // Unresolved extended types (types from other modules) leave
                // the member orphaned; that is not an error.
                let Some(object) = self.resolve_extension(&extension.extended_type) else {
                    trace!(
                        "[GRAPH] extension '{}' does not resolve; member '{}' left unlinked",
                        extension.extended_type,
                        symbol.id()
                    );
                    return;
                };
                let predicate = if matches!(
                    self.symbols[object.index()].declaration(),
                    Declaration::Protocol { .. }
                ) {
                    Predicate::DefaultImplementationOf
                } else {
                    Predicate::MemberOf
                };
                self.edges
                    .insert(Relationship::new(subject, predicate, object));
            }
            _ => {}
        }
    }

    /// §2 of the derivation: inheritance/conformance edges for every
    /// effective inherited name, with placeholder fallback.
    fn type_edges(&mut self, subject: SymbolId) {
        let symbol = self.symbols[subject.index()].clone();
        if !symbol.declaration().supports_inheritance() {
            return;
        }
        let subject_is_class = matches!(symbol.declaration(), Declaration::Class { .. });

        for name in self.effective_inheritance(&symbol) {
            let candidates: Vec<SymbolId> = self
                .type_ids
                .iter()
                .copied()
                .filter(|&id| {
                    matches!(
                        self.symbols[id.index()].declaration(),
                        Declaration::Class { .. } | Declaration::Protocol { .. }
                    ) && self.symbols[id.index()].id().matches(&name)
                })
                .collect();

            if candidates.is_empty() {
                let object = self.placeholder(&name);
                self.edges
                    .insert(Relationship::new(subject, Predicate::ConformsTo, object));
                continue;
            }
            for candidate in candidates {
                let candidate_is_class = matches!(
                    self.symbols[candidate.index()].declaration(),
                    Declaration::Class { .. }
                );
                let predicate = if subject_is_class && candidate_is_class {
                    Predicate::InheritsFrom
                } else {
                    Predicate::ConformsTo
                };
                self.edges
                    .insert(Relationship::new(subject, predicate, candidate));
            }
        }
    }

    /// The effective inherited/conformed name set for a type symbol: its own
    /// inheritance clause unioned, to a fixed point, with the inheritance of
    /// every unconditional extension matching the symbol's id or any
    /// already-contributed name. Compound entries (`A & B`) are split and
    /// trimmed as they are added.
    fn effective_inheritance(&self, symbol: &Symbol) -> Vec<String> {
        let mut names: IndexSet<String> = IndexSet::new();
        for entry in symbol.declaration().inheritance() {
            add_split(&mut names, entry);
        }

        let mut used = vec![false; self.extensions.len()];
        loop {
            let mut changed = false;
            for (index, extension) in self.extensions.iter().enumerate() {
                if used[index] || extension.is_conditional() {
                    continue;
                }
                let applies = symbol.id().matches(&extension.extended_type)
                    || names.iter().any(|name| {
                        Identifier::from_reference(name).matches(&extension.extended_type)
                    });
                if applies {
                    used[index] = true;
                    changed = true;
                    for entry in &extension.inheritance {
                        add_split(&mut names, entry);
                    }
                }
            }
            if !changed {
                break;
            }
        }
        names.into_iter().collect()
    }

    /// Resolve an extension's extended type to a declared type symbol.
    /// Among multiple suffix matches the most-qualified id wins, so a bare
    /// nested-type name binds the nested type, not an unrelated top-level one.
    fn resolve_extension(&self, extended_type: &str) -> Option<SymbolId> {
        let mut best: Option<SymbolId> = None;
        for &candidate in &self.type_ids {
            let symbol = &self.symbols[candidate.index()];
            if !symbol.id().matches(extended_type) {
                continue;
            }
            best = match best {
                None => Some(candidate),
                Some(current) => {
                    let incumbent = &self.symbols[current.index()];
                    let preferred = match symbol
                        .id()
                        .component_count()
                        .cmp(&incumbent.id().component_count())
                    {
                        std::cmp::Ordering::Greater => true,
                        std::cmp::Ordering::Less => false,
                        std::cmp::Ordering::Equal => symbol.display_order(incumbent).is_lt(),
                    };
                    if preferred { Some(candidate) } else { Some(current) }
                }
            };
        }
        best
    }

    /// Interned placeholder table: repeated unresolved references to the same
    /// external type collapse to one placeholder symbol.
    fn placeholder(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.placeholders.get(name) {
            return id;
        }
        trace!("[GRAPH] synthesizing placeholder for '{name}'");
        let id = SymbolId::new(self.symbols.len());
        self.symbols.push(Arc::new(Symbol::placeholder(name)));
        // Unknown declarations are always public, never private.
        self.visibilities.push(Visibility::Public);
        self.placeholders.insert(name.to_string(), id);
        id
    }
}

fn add_split(names: &mut IndexSet<String>, entry: &str) {
    for part in entry.split('&') {
        let part = part.trim();
        if !part.is_empty() {
            names.insert(part.to_string());
        }
    }
}
