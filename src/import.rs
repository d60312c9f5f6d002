//! Installing graphs produced by the source-code import oracle.
//!
//! The oracle itself (a remote language model) is out of reach of this crate;
//! it is represented by [`GraphOracle`]. What lives here is everything done
//! with its answer: fence stripping, shape validation, conversion, and the
//! automatic wiring the editor adds on top of the model's edges. Import is
//! all-or-nothing.

use crate::error::ImportError;
use crate::graph::{GraphDefinition, IntoGraph};
use crate::ui::{FUNCTION_NODE, STRUCT_NODE, UiEdge, UiGraph, UiNode};
use tracing::{debug, info};

const MINT_LABEL: &str = "coin::mint";
const NFT_MINT_LABEL: &str = "nft::mint";
const TRANSFER_LABEL: &str = "transfer::transfer";
const TREASURY_CAP_LABEL: &str = "TreasuryCap";

/// Turns Move source text into a textual graph description.
pub trait GraphOracle {
    fn analyze(&self, source: &str) -> Result<String, ImportError>;
}

/// A graph accepted from the oracle, in both editor and canonical form.
#[derive(Debug, Clone)]
pub struct ImportedGraph {
    pub ui: UiGraph,
    pub graph: GraphDefinition,
    /// Edges added by [`infer_edges`], already included in `ui.edges`.
    pub inferred_edges: usize,
}

pub struct Importer<O: GraphOracle> {
    oracle: O,
}

impl<O: GraphOracle> Importer<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Runs the oracle and validates its answer. Either a complete graph is
    /// returned or nothing is.
    pub fn import(&self, source: &str) -> Result<ImportedGraph, ImportError> {
        let response = self.oracle.analyze(source)?;
        accept_response(&response)
    }
}

/// Parses, validates and wires an oracle response.
pub fn accept_response(response: &str) -> Result<ImportedGraph, ImportError> {
    let mut ui = parse_response(response)?;
    let inferred = infer_edges(&ui.nodes);
    let inferred_edges = inferred.len();
    ui.edges.extend(inferred);

    let graph = ui.clone().into_graph()?;
    info!(
        nodes = ui.nodes.len(),
        edges = ui.edges.len(),
        inferred_edges,
        "import response accepted"
    );
    Ok(ImportedGraph {
        ui,
        graph,
        inferred_edges,
    })
}

/// Parses the oracle's text. Markdown code fences are tolerated; the JSON
/// must carry `nodes` (non-empty) and `edges` arrays.
///
/// An empty `edges` array is accepted on purpose: [`infer_edges`] usually
/// supplies the wiring of an imported graph.
pub fn parse_response(response: &str) -> Result<UiGraph, ImportError> {
    let text = strip_fences(response);
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ImportError::MalformedResponse(e.to_string()))?;

    let nodes = value
        .get("nodes")
        .and_then(|n| n.as_array())
        .ok_or_else(|| ImportError::MalformedResponse("missing 'nodes' array".to_string()))?;
    if value.get("edges").and_then(|e| e.as_array()).is_none() {
        return Err(ImportError::MalformedResponse("missing 'edges' array".to_string()));
    }
    if nodes.is_empty() {
        return Err(ImportError::EmptyGraph);
    }

    serde_json::from_value(value).map_err(|e| ImportError::MalformedResponse(e.to_string()))
}

fn strip_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// The editor's automatic wiring for imported graphs:
/// the first `TreasuryCap` feeds every `coin::mint`, and every coin or NFT
/// mint feeds every `transfer::transfer`.
pub fn infer_edges(nodes: &[UiNode]) -> Vec<UiEdge> {
    let mints = select(nodes, FUNCTION_NODE, MINT_LABEL);
    let nft_mints = select(nodes, FUNCTION_NODE, NFT_MINT_LABEL);
    let transfers = select(nodes, FUNCTION_NODE, TRANSFER_LABEL);
    let treasury_caps = select(nodes, STRUCT_NODE, TREASURY_CAP_LABEL);

    let mut edges = Vec::new();
    if let Some(cap) = treasury_caps.first() {
        for mint in &mints {
            edges.push(edge(cap, "obj-main", mint, "param-0", "cap"));
        }
    }
    for mint in &mints {
        for transfer in &transfers {
            edges.push(edge(mint, "return-val", transfer, "param-0", "flow"));
        }
    }
    for mint in &nft_mints {
        for transfer in &transfers {
            edges.push(edge(mint, "return-val", transfer, "param-0", "nftflow"));
        }
    }
    debug!(count = edges.len(), "edges inferred from imported nodes");
    edges
}

fn select<'a>(nodes: &'a [UiNode], node_type: &str, label: &str) -> Vec<&'a UiNode> {
    nodes
        .iter()
        .filter(|n| n.node_type.as_deref() == Some(node_type) && n.data.label == label)
        .collect()
}

fn edge(source: &UiNode, source_handle: &str, target: &UiNode, target_handle: &str, tag: &str) -> UiEdge {
    UiEdge {
        id: Some(format!("e-{}-{}-{}", source.id, target.id, tag)),
        source: source.id.clone(),
        source_handle: Some(source_handle.to_string()),
        target: target.id.clone(),
        target_handle: Some(target_handle.to_string()),
    }
}
