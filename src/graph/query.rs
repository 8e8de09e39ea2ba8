//! The read-only query surface of the graph.
//!
//! Every query is a total function over already-validated graph state:
//! absence is an empty collection, never an error. Every collection-returning
//! query is sorted with the global symbol display ordering — no method
//! exposes the iteration order of an internal hash-based structure.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::Visibility;
use crate::decl::{Extension, GenericRequirement};
use crate::symbol::{ContextElement, Symbol};

use super::graph::SymbolGraph;
use super::relationship::{Predicate, Relationship, SymbolId};

/// Members contributed by conditional extensions sharing one distinct
/// generic-requirement list.
#[derive(Debug)]
pub struct ConstrainedMembers<'a> {
    pub requirements: &'a [GenericRequirement],
    pub members: Vec<&'a Arc<Symbol>>,
}

impl SymbolGraph {
    /// The module name the graph was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared symbols, in source-unit order. Placeholders synthesized
    /// for unresolved references are not included; they are reachable through
    /// the edges that point at them.
    pub fn symbols(&self) -> &[Arc<Symbol>] {
        &self.symbols[..self.declared]
    }

    /// All extensions collected across the source units.
    pub fn extensions(&self) -> &[Arc<Extension>] {
        &self.extensions
    }

    /// The deduplicated relationship list, in stable sorted order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Resolve an arena id (total within this graph, including placeholders).
    pub fn get(&self, id: SymbolId) -> &Arc<Symbol> {
        &self.symbols[id.index()]
    }

    /// Effective visibility of a symbol, precomputed at construction.
    pub fn visibility(&self, id: SymbolId) -> Visibility {
        self.visibilities[id.index()]
    }

    /// Find the arena id of a symbol obtained from this graph. Candidates
    /// share the identifier; structural equality picks the occurrence.
    pub fn symbol_id(&self, symbol: &Symbol) -> Option<SymbolId> {
        if let Some(candidates) = self.by_identifier.get(&symbol.id().to_string()) {
            if let Some(&id) = candidates
                .iter()
                .find(|&&id| self.symbols[id.index()].as_ref() == symbol)
            {
                return Some(id);
            }
        }
        // placeholders are not in the identifier index
        self.symbols[self.declared..]
            .iter()
            .position(|candidate| candidate.as_ref() == symbol)
            .map(|offset| SymbolId::new(self.declared + offset))
    }

    /// Symbols with no enclosing type, plus every type symbol (nested types
    /// get their own top-level entries for rendering).
    pub fn top_level_symbols(&self) -> Vec<&Arc<Symbol>> {
        self.refs(&self.top_level)
    }

    /// Members of a type, excluding those contributed by generically
    /// constrained extensions (see
    /// [`generically_constrained_members`](Self::generically_constrained_members)).
    pub fn members(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::MemberOf, |subject| {
            !self.in_conditional_extension(subject)
        });
        self.refs_owned(ids)
    }

    /// Requirements of a protocol.
    pub fn requirements(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::RequirementOf, |_| true);
        self.refs_owned(ids)
    }

    /// Optional requirements of a protocol.
    pub fn optional_requirements(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::OptionalRequirementOf, |_| true);
        self.refs_owned(ids)
    }

    /// Default implementations provided for a protocol by its extensions.
    pub fn default_implementations(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::DefaultImplementationOf, |_| true);
        self.refs_owned(ids)
    }

    /// Classes a class inherits from.
    pub fn types_inherited(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_objects(id, Predicate::InheritsFrom);
        self.refs_owned(ids)
    }

    /// Protocols (or placeholders for unresolved references) a type conforms
    /// to.
    pub fn types_conformed(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_objects(id, Predicate::ConformsTo);
        self.refs_owned(ids)
    }

    /// Public classes inheriting from a class. Internal and private
    /// subclasses are excluded from this public-facing reverse query.
    pub fn types_inheriting(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::InheritsFrom, |subject| {
            self.visibilities[subject.index()].is_public()
        });
        self.refs_owned(ids)
    }

    /// Public types conforming to a protocol.
    pub fn types_conforming(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let ids = self.collect_subjects(id, Predicate::ConformsTo, |subject| {
            self.visibilities[subject.index()].is_public()
        });
        self.refs_owned(ids)
    }

    /// Other declared occurrences sharing this symbol's identifier —
    /// redeclarations under different compilation conditions, for
    /// side-by-side rendering. The receiver itself is excluded.
    pub fn conditional_counterparts(&self, id: SymbolId) -> Vec<&Arc<Symbol>> {
        let description = self.symbols[id.index()].id().to_string();
        let mut ids: Vec<SymbolId> = self
            .by_identifier
            .get(&description)
            .into_iter()
            .flatten()
            .copied()
            .filter(|&other| other != id)
            .collect();
        self.sort_ids(&mut ids);
        self.refs_owned(ids)
    }

    /// Classes with no `inheritsFrom` edge of their own.
    pub fn base_classes(&self) -> Vec<&Arc<Symbol>> {
        self.refs(&self.base_classes)
    }

    /// The public descendant closure of one base class.
    pub fn class_hierarchy(&self, base: SymbolId) -> Option<Vec<&Arc<Symbol>>> {
        self.hierarchies.get(&base).map(|ids| self.refs(ids))
    }

    /// All class hierarchies, keyed by base class in display order.
    pub fn class_hierarchies(
        &self,
    ) -> impl Iterator<Item = (&Arc<Symbol>, Vec<&Arc<Symbol>>)> + '_ {
        self.hierarchies
            .iter()
            .map(|(&base, ids)| (self.get(base), self.refs(ids)))
    }

    /// Members contributed by conditional (generics-gated) extensions of a
    /// type, grouped by distinct requirement list. Groups appear in the order
    /// of their first member; members are display-sorted.
    pub fn generically_constrained_members(&self, id: SymbolId) -> Vec<ConstrainedMembers<'_>> {
        let ids = self.collect_subjects(id, Predicate::MemberOf, |subject| {
            self.in_conditional_extension(subject)
        });

        let mut groups: IndexMap<String, ConstrainedMembers<'_>> = IndexMap::new();
        for member in ids {
            let Some(ContextElement::Extension(extension)) =
                self.symbols[member.index()].enclosing_scope()
            else {
                continue;
            };
            let key = extension
                .generic_requirements
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            groups
                .entry(key)
                .or_insert_with(|| ConstrainedMembers {
                    requirements: &extension.generic_requirements,
                    members: Vec::new(),
                })
                .members
                .push(self.get(member));
        }
        groups.into_values().collect()
    }

    // ------------------------------------------------------------------
    // internal helpers
    // ------------------------------------------------------------------

    fn collect_subjects(
        &self,
        object: SymbolId,
        predicate: Predicate,
        keep: impl Fn(SymbolId) -> bool,
    ) -> Vec<SymbolId> {
        let mut ids: Vec<SymbolId> = self
            .by_object
            .get(&object)
            .into_iter()
            .flatten()
            .filter(|edge| edge.predicate == predicate)
            .map(|edge| edge.subject)
            .filter(|&subject| keep(subject))
            .collect();
        self.sort_ids(&mut ids);
        ids
    }

    fn collect_objects(&self, subject: SymbolId, predicate: Predicate) -> Vec<SymbolId> {
        let mut ids: Vec<SymbolId> = self
            .by_subject
            .get(&subject)
            .into_iter()
            .flatten()
            .filter(|edge| edge.predicate == predicate)
            .map(|edge| edge.object)
            .collect();
        self.sort_ids(&mut ids);
        ids
    }

    fn in_conditional_extension(&self, id: SymbolId) -> bool {
        matches!(
            self.symbols[id.index()].enclosing_scope(),
            Some(ContextElement::Extension(extension)) if extension.is_conditional()
        )
    }

    fn refs(&self, ids: &[SymbolId]) -> Vec<&Arc<Symbol>> {
        ids.iter().map(|&id| self.get(id)).collect()
    }

    fn refs_owned(&self, ids: Vec<SymbolId>) -> Vec<&Arc<Symbol>> {
        self.refs(&ids)
    }
}
