//! petgraph projection of a moiety.
//!
//! The projection covers every atom of the moiety plus each atom's direct
//! bond partners, deduplicated in first-seen order. Node `i` of the graph
//! is the `i`-th atom returned by [`reachable`]. DOT export and the
//! topology queries below are built on it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::element::Element;
use crate::moiety::Moiety;
use crate::mol::{AtomId, Mol};

pub type MolGraph = UnGraph<Arc<Element>, ()>;

/// Each moiety atom followed by its bond partners, first occurrence kept.
pub fn reachable(mol: &Mol, moiety: &Moiety) -> Vec<AtomId> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for a in moiety {
        for id in std::iter::once(a).chain(mol.bonds_of(a).iter().copied()) {
            if seen.insert(id) {
                order.push(id);
            }
        }
    }
    order
}

/// Build the graph over [`reachable`] atoms.
///
/// Edges are added while visiting nodes in order: for node `i`, one edge
/// per bond-list entry whose partner already has a node. A bond therefore
/// appears once, with the later-visited atom as its source, and a double
/// bond appears twice. Partners outside the reachable set are dropped.
pub fn to_graph(mol: &Mol, moiety: &Moiety) -> MolGraph {
    let atoms = reachable(mol, moiety);
    let mut graph = MolGraph::with_capacity(atoms.len(), atoms.len());
    let mut index: HashMap<AtomId, NodeIndex> = HashMap::with_capacity(atoms.len());

    for id in atoms {
        let node = graph.add_node(Arc::clone(mol.atom(id).element()));
        index.insert(id, node);
        for partner in mol.bonds_of(id) {
            if let Some(&other) = index.get(partner) {
                graph.add_edge(node, other, ());
            }
        }
    }
    graph
}

/// Number of disconnected pieces among the reachable atoms.
pub fn fragment_count(mol: &Mol, moiety: &Moiety) -> usize {
    connected_components(&to_graph(mol, moiety))
}

/// Independent cycles, counting each bonded pair once regardless of bond
/// multiplicity.
pub fn ring_count(mol: &Mol, moiety: &Moiety) -> usize {
    let graph = to_graph(mol, moiety);
    let v = graph.node_count();
    let e = graph
        .edge_references()
        .map(|edge| {
            let (a, b) = (edge.source().index(), edge.target().index());
            (a.min(b), a.max(b))
        })
        .collect::<HashSet<_>>()
        .len();
    let c = connected_components(&graph);
    (e + c).saturating_sub(v)
}
