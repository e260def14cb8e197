// Module graph - some methods reserved for future use
#![allow(dead_code)]

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An import edge between two modules
#[derive(Debug, Clone)]
pub struct ImportEdge {
    /// The raw specifier as written in the importing file
    pub specifier: String,
}

/// File-level import graph.
///
/// Nodes are canonical file paths; an edge `a -> b` means `a` imports `b`.
/// A module is *used* when it has at least one incoming edge. Paths must be
/// canonicalized before insertion so that set membership is
/// format-independent.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    inner: DiGraph<PathBuf, ImportEdge>,
    node_map: HashMap<PathBuf, NodeIndex>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module node if not already present, returning its index
    pub fn ensure_module(&mut self, path: &Path) -> NodeIndex {
        if let Some(&index) = self.node_map.get(path) {
            return index;
        }
        let index = self.inner.add_node(path.to_path_buf());
        self.node_map.insert(path.to_path_buf(), index);
        index
    }

    /// Record that `from` imports `to` via the given raw specifier
    pub fn add_import(&mut self, from: &Path, to: &Path, specifier: String) {
        let from_index = self.ensure_module(from);
        let to_index = self.ensure_module(to);
        self.inner.add_edge(from_index, to_index, ImportEdge { specifier });
    }

    /// Check whether any module imports the given path
    pub fn is_imported(&self, path: &Path) -> bool {
        let Some(&index) = self.node_map.get(path) else {
            return false;
        };
        self.inner
            .edges_directed(index, petgraph::Direction::Incoming)
            .next()
            .is_some()
    }

    /// All modules importing the given path
    pub fn importers_of(&self, path: &Path) -> Vec<(&PathBuf, &ImportEdge)> {
        let Some(&index) = self.node_map.get(path) else {
            return Vec::new();
        };
        self.inner
            .edges_directed(index, petgraph::Direction::Incoming)
            .filter_map(|edge| {
                let source = self.inner.node_weight(edge.source())?;
                Some((source, edge.weight()))
            })
            .collect()
    }

    /// All modules the given path imports
    pub fn imports_of(&self, path: &Path) -> Vec<(&PathBuf, &ImportEdge)> {
        let Some(&index) = self.node_map.get(path) else {
            return Vec::new();
        };
        self.inner
            .edges_directed(index, petgraph::Direction::Outgoing)
            .filter_map(|edge| {
                let target = self.inner.node_weight(edge.target())?;
                Some((target, edge.weight()))
            })
            .collect()
    }

    /// Iterate over all known modules
    pub fn modules(&self) -> impl Iterator<Item = &PathBuf> {
        self.inner.node_weights()
    }

    pub fn module_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn import_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Merge another graph into this one (the parallel builders' join point)
    pub fn merge(&mut self, other: ModuleGraph) {
        for edge in other.inner.edge_references() {
            let from_path = other.inner[edge.source()].clone();
            let to_path = other.inner[edge.target()].clone();
            let from_index = self.ensure_module(&from_path);
            let to_index = self.ensure_module(&to_path);
            self.inner.add_edge(from_index, to_index, edge.weight().clone());
        }
        for node in other.inner.node_weights() {
            self.ensure_module(node);
        }
    }
}
