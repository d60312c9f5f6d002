use crate::defaults::CodegenDefaults;
use crate::error::CompileError;
use crate::graph::{GraphDefinition, Handle, NodeDefinition, NodeKind};
use crate::palette;
use crate::sanitize;
use tracing::debug;

/// Where the module-wide witness name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessSource {
    /// The node wired into the init node's witness slot.
    Connected { node_id: String },
    /// The first user-owned struct in the graph.
    FirstStruct { node_id: String },
    /// Nothing eligible; the configured default name.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    pub name: String,
    pub source: WitnessSource,
}

/// Determines the single type name that parameterizes `TreasuryCap` and `Coin`
/// across the module.
///
/// A graph with more than one init node, or with more than one connection
/// into the witness slot, is rejected rather than resolved arbitrarily.
pub fn resolve_witness(
    graph: &GraphDefinition,
    defaults: &CodegenDefaults,
) -> Result<Witness, CompileError> {
    if let Some(init) = find_single_init(graph)? {
        let sources: Vec<&str> = graph
            .incoming(&init.id)
            .filter(|e| matches!(e.target_handle, Handle::WitnessInput | Handle::Unspecified))
            .map(|e| e.source.as_str())
            .collect();

        if sources.len() > 1 {
            return Err(CompileError::AmbiguousWitness {
                init_node_id: init.id.clone(),
                sources: sources.into_iter().map(str::to_string).collect(),
            });
        }

        if let Some(node) = sources.first().and_then(|id| graph.node(id)) {
            if is_eligible(node) {
                let name = sanitize::declaration_name(&node.label);
                debug!(witness = %name, node = %node.id, "witness taken from init connection");
                return Ok(Witness {
                    name,
                    source: WitnessSource::Connected {
                        node_id: node.id.clone(),
                    },
                });
            }
            debug!(node = %node.id, "connected witness is a framework type; falling back");
        }
    }

    let first_struct = graph
        .nodes
        .iter()
        .find(|n| matches!(n.kind, NodeKind::Struct(_)) && is_eligible(n));

    let witness = match first_struct {
        Some(node) => Witness {
            name: sanitize::declaration_name(&node.label),
            source: WitnessSource::FirstStruct {
                node_id: node.id.clone(),
            },
        },
        None => Witness {
            name: defaults.witness_name.clone(),
            source: WitnessSource::Default,
        },
    };
    debug!(witness = %witness.name, source = ?witness.source, "witness resolved by fallback");
    Ok(witness)
}

/// The init node of the graph, if any. Two or more is an error.
pub fn find_single_init(graph: &GraphDefinition) -> Result<Option<&NodeDefinition>, CompileError> {
    let mut inits = graph
        .nodes
        .iter()
        .filter(|n| matches!(n.kind, NodeKind::Init(_)));
    let first = inits.next();
    if let (Some(first), Some(second)) = (first, inits.next()) {
        return Err(CompileError::MultipleInitNodes {
            first: first.id.clone(),
            second: second.id.clone(),
        });
    }
    Ok(first)
}

/// Imported nodes and framework-named structs can never be the witness.
fn is_eligible(node: &NodeDefinition) -> bool {
    if let NodeKind::Struct(spec) = &node.kind {
        if spec.is_imported {
            return false;
        }
    }
    !palette::is_framework_type(&sanitize::declaration_name(&node.label))
}
