//! Graphviz DOT export.
//!
//! ```text
//! graph "" {
//!     a0 [label=O];
//!     a1 [label=H];
//!     a1 -- a0;
//!     a2 [label=H];
//!     a2 -- a0;
//! }
//! ```
//!
//! Node numbers follow [`graph::reachable`](crate::graph::reachable). Each
//! edge line sits right after the node that introduced it; see
//! [`graph::to_graph`](crate::graph::to_graph) for which edges exist.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::MolResult;
use crate::graph::to_graph;
use crate::moiety::Moiety;
use crate::mol::Mol;

pub fn to_dot(mol: &Mol, moiety: &Moiety) -> String {
    let graph = to_graph(mol, moiety);
    let edges: Vec<_> = graph.edge_references().collect();
    let mut next_edge = 0;

    let mut out = format!("graph \"{}\" {{\n", escape(moiety.name()));
    for node in graph.node_indices() {
        out.push_str(&format!("    a{} [label={}];\n", node.index(), graph[node]));
        while let Some(edge) = edges.get(next_edge).filter(|e| e.source() == node) {
            out.push_str(&format!(
                "    a{} -- a{};\n",
                edge.source().index(),
                edge.target().index()
            ));
            next_edge += 1;
        }
    }
    out.push_str("}\n");
    out
}

pub fn write_dot<W: Write>(mol: &Mol, moiety: &Moiety, mut writer: W) -> MolResult<()> {
    writer.write_all(to_dot(mol, moiety).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn save_dot(mol: &Mol, moiety: &Moiety, path: impl AsRef<Path>) -> MolResult<()> {
    let path = path.as_ref();
    write_dot(mol, moiety, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), "wrote dot file");
    Ok(())
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
