//! The editor's JSON graph format and its conversion into [`GraphDefinition`].

mod types;

pub use types::*;

use crate::error::GraphConversionError;
use crate::graph::{
    Abilities, EdgeDefinition, FieldDefinition, FunctionSpec, GraphDefinition, Handle, InitConfig,
    IntoGraph, NodeDefinition, NodeKind, StructSpec, validate_unique_ids,
};
use tracing::warn;

impl UiGraph {
    pub fn from_json(json: &str) -> Result<Self, GraphConversionError> {
        serde_json::from_str(json)
            .map_err(|e| GraphConversionError::ValidationError(format!("malformed graph JSON: {}", e)))
    }
}

impl IntoGraph for UiGraph {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(UiNode::into_definition)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|edge| {
                let source_handle = Handle::parse(edge.source_handle.as_deref());
                let target_handle = Handle::parse(edge.target_handle.as_deref());
                for handle in [&source_handle, &target_handle] {
                    if let Handle::Other(raw) = handle {
                        warn!(source = %edge.source, target = %edge.target, handle = %raw, "unrecognized edge handle");
                    }
                }
                EdgeDefinition {
                    source_handle,
                    target_handle,
                    source: edge.source,
                    target: edge.target,
                }
            })
            .collect();

        let graph = GraphDefinition { nodes, edges };
        validate_unique_ids(&graph)?;
        Ok(graph)
    }
}

impl UiNode {
    fn into_definition(self) -> Result<NodeDefinition, GraphConversionError> {
        let data = self.data;
        let kind = match self.node_type.as_deref() {
            Some(STRUCT_NODE) => NodeKind::Struct(StructSpec {
                fields: convert_fields(data.fields),
                abilities: data
                    .abilities
                    .map(|a| Abilities {
                        key: a.key,
                        store: a.store,
                        copy: a.copy,
                        drop: a.drop,
                    })
                    .unwrap_or(Abilities::KEY_STORE),
                is_imported: data.is_imported,
            }),
            Some(FUNCTION_NODE) => NodeKind::Function(FunctionSpec {
                params: convert_fields(data.params),
            }),
            Some(INIT_NODE) => NodeKind::Init(InitConfig {
                coin_name: data.coin_name.unwrap_or_default(),
                coin_symbol: data.coin_symbol.unwrap_or_default(),
                coin_decimals: parse_decimals(&self.id, data.coin_decimals.as_ref())?,
                coin_description: data.coin_description.unwrap_or_default(),
            }),
            other => NodeKind::Other(other.unwrap_or("default").to_string()),
        };

        Ok(NodeDefinition {
            id: self.id,
            label: data.label,
            custom_title: data.custom_title,
            kind,
        })
    }
}

fn convert_fields(fields: Option<Vec<UiField>>) -> Vec<FieldDefinition> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|f| FieldDefinition::new(f.name, f.type_name))
        .collect()
}

fn parse_decimals(
    node_id: &str,
    raw: Option<&serde_json::Value>,
) -> Result<Option<u8>, GraphConversionError> {
    let invalid = |shown: &dyn std::fmt::Display| {
        GraphConversionError::ValidationError(format!(
            "init node '{}' has invalid coinDecimals '{}'",
            node_id, shown
        ))
    };

    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => integral_u8(n).map(Some).ok_or_else(|| invalid(n)),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => {
            s.trim().parse::<u8>().map(Some).map_err(|_| invalid(s))
        }
        Some(other) => Err(invalid(other)),
    }
}

/// `9` and `9.0` both count; fractions and out-of-range values do not.
fn integral_u8(n: &serde_json::Number) -> Option<u8> {
    if let Some(v) = n.as_u64() {
        return u8::try_from(v).ok();
    }
    let v = n.as_f64()?;
    if v.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&v) {
        Some(v as u8)
    } else {
        None
    }
}
