//! Documentation-coverage reporting.
//!
//! A lightweight export surface over the graph: one record per declared
//! symbol, aggregated into per-file and total hit ratios, serializable as
//! JSON for coverage tooling.

use std::path::Path;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graph::SymbolGraph;

/// A documented/undocumented tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratio {
    pub hits: usize,
    pub misses: usize,
}

impl Ratio {
    pub fn new(hits: usize, misses: usize) -> Self {
        Self { hits, misses }
    }

    pub fn count(&self) -> usize {
        self.hits + self.misses
    }

    /// Percentage of documented units. An empty tally is 0, not a division
    /// fault.
    pub fn percentage(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            return 0.0;
        }
        self.hits as f64 / count as f64 * 100.0
    }

    pub fn record(&mut self, documented: bool) {
        if documented {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

/// One report row per documented unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    pub kind: String,
    pub documented: bool,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

/// Serialized aggregate form of a [`Ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub count: usize,
    pub documented: usize,
    pub percent: f64,
}

impl From<Ratio> for CoverageSummary {
    fn from(ratio: Ratio) -> Self {
        Self {
            count: ratio.count(),
            documented: ratio.hits,
            percent: ratio.percentage(),
        }
    }
}

/// The full coverage report for one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub module: String,
    pub totals: CoverageSummary,
    /// Per-file summaries, files in sorted order. Symbols without source
    /// coordinates are tallied in the totals only.
    pub by_file: IndexMap<String, CoverageSummary>,
    pub records: Vec<SymbolRecord>,
}

impl CoverageReport {
    /// Build the report from a graph: one record per declared symbol, in
    /// display order.
    pub fn generate(graph: &SymbolGraph) -> Self {
        let mut symbols: Vec<_> = graph.symbols().iter().collect();
        symbols.sort_by(|a, b| a.display_order(b));

        let records: Vec<SymbolRecord> = symbols
            .par_iter()
            .map(|symbol| {
                let range = symbol.source_range();
                SymbolRecord {
                    name: symbol.id().to_string(),
                    kind: symbol.declaration().kind().as_str().to_string(),
                    documented: symbol.is_documented(),
                    file: range.map(|r| path_string(&r.file)),
                    line: range.map(|r| r.start.line),
                    column: range.map(|r| r.start.column),
                }
            })
            .collect();

        let mut totals = Ratio::default();
        let mut files: IndexMap<String, Ratio> = IndexMap::new();
        for record in &records {
            totals.record(record.documented);
            if let Some(file) = &record.file {
                files
                    .entry(file.clone())
                    .or_default()
                    .record(record.documented);
            }
        }
        files.sort_keys();

        Self {
            module: graph.name().to_string(),
            totals: totals.into(),
            by_file: files
                .into_iter()
                .map(|(file, ratio)| (file, ratio.into()))
                .collect(),
            records,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
