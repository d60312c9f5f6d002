use serde::{Deserialize, Serialize};

/// Field or parameter entry as stored by the editor.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UiField {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", alias = "type_name", default)]
    pub type_name: String,
}

/// Ability toggles as stored by the editor. Missing keys are `false`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct UiAbilities {
    #[serde(default)]
    pub key: bool,
    #[serde(default)]
    pub store: bool,
    #[serde(default)]
    pub copy: bool,
    #[serde(default)]
    pub drop: bool,
}

/// Node payload. Which keys are meaningful depends on the node type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UiNodeData {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "customTitle", alias = "custom_title", default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<UiField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<UiField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<UiAbilities>,
    #[serde(rename = "isImported", alias = "is_imported", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_imported: bool,
    #[serde(rename = "coinName", alias = "coin_name", default, skip_serializing_if = "Option::is_none")]
    pub coin_name: Option<String>,
    #[serde(rename = "coinSymbol", alias = "coin_symbol", default, skip_serializing_if = "Option::is_none")]
    pub coin_symbol: Option<String>,
    /// Number or numeric string; the editor keeps the raw input value.
    #[serde(rename = "coinDecimals", alias = "coin_decimals", default, skip_serializing_if = "Option::is_none")]
    pub coin_decimals: Option<serde_json::Value>,
    #[serde(rename = "coinDescription", alias = "coin_description", default, skip_serializing_if = "Option::is_none")]
    pub coin_description: Option<String>,
}

/// A node as the canvas stores it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiNode {
    pub id: String,
    /// `structNode`, `functionNode`, `initNode`, or a presentational type.
    #[serde(rename = "type", alias = "node_type", default)]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub position: serde_json::Value,
    #[serde(default)]
    pub data: UiNodeData,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// A connector as the canvas stores it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiEdge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    #[serde(rename = "sourceHandle", alias = "source_handle", default)]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(rename = "targetHandle", alias = "target_handle", default)]
    pub target_handle: Option<String>,
}

/// Complete editor graph of one module.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UiGraph {
    #[serde(default)]
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

pub const STRUCT_NODE: &str = "structNode";
pub const FUNCTION_NODE: &str = "functionNode";
pub const INIT_NODE: &str = "initNode";
