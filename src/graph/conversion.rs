use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for graph formats that can be converted into a canonical
/// [`GraphDefinition`].
///
/// The editor's own JSON shape implements this in [`crate::ui`]; other
/// producers (an importer, a test fixture, a different canvas widget) can
/// implement it to reuse the compiler unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use movesketch::error::GraphConversionError;
/// use movesketch::graph::{GraphDefinition, IntoGraph, NodeDefinition, NodeKind, StructSpec};
///
/// struct MyBox { id: String, name: String }
/// struct MyCanvas { boxes: Vec<MyBox> }
///
/// impl IntoGraph for MyCanvas {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .boxes
///             .into_iter()
///             .map(|b| NodeDefinition {
///                 id: b.id,
///                 label: b.name,
///                 custom_title: None,
///                 kind: NodeKind::Struct(StructSpec::default()),
///             })
///             .collect();
///         Ok(GraphDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into the canonical graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}

impl IntoGraph for GraphDefinition {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        Ok(self)
    }
}

/// Rejects graphs that reuse a node id.
pub fn validate_unique_ids(graph: &GraphDefinition) -> Result<(), GraphConversionError> {
    let mut seen = ahash::AHashSet::new();
    for node in &graph.nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(GraphConversionError::ValidationError(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
    }
    Ok(())
}
