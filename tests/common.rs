//! Common test utilities for building graphs and editor JSON.
use movesketch::prelude::*;
use serde_json::json;

/// A struct node owned by the module.
#[allow(dead_code)]
pub fn struct_node(id: &str, label: &str, fields: &[(&str, &str)], abilities: Abilities) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        label: label.to_string(),
        custom_title: None,
        kind: NodeKind::Struct(StructSpec {
            fields: fields
                .iter()
                .map(|(name, type_name)| FieldDefinition::new(*name, *type_name))
                .collect(),
            abilities,
            is_imported: false,
        }),
    }
}

/// A framework struct dropped onto the canvas (e.g. `TreasuryCap`).
#[allow(dead_code)]
pub fn imported_struct_node(id: &str, label: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        label: label.to_string(),
        custom_title: None,
        kind: NodeKind::Struct(StructSpec {
            fields: vec![],
            abilities: Abilities::KEY_STORE,
            is_imported: true,
        }),
    }
}

#[allow(dead_code)]
pub fn function_node(id: &str, label: &str, params: &[(&str, &str)]) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        label: label.to_string(),
        custom_title: None,
        kind: NodeKind::Function(FunctionSpec {
            params: params
                .iter()
                .map(|(name, type_name)| FieldDefinition::new(*name, *type_name))
                .collect(),
        }),
    }
}

/// An init node with every coin field left empty.
#[allow(dead_code)]
pub fn init_node(id: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        label: "CoinInit".to_string(),
        custom_title: None,
        kind: NodeKind::Init(InitConfig::default()),
    }
}

#[allow(dead_code)]
pub fn edge(source: &str, source_handle: &str, target: &str, target_handle: &str) -> EdgeDefinition {
    EdgeDefinition {
        source: source.to_string(),
        source_handle: Handle::parse(Some(source_handle)),
        target: target.to_string(),
        target_handle: Handle::parse(Some(target_handle)),
    }
}

/// An edge into the init node's witness slot.
#[allow(dead_code)]
pub fn witness_edge(source: &str, init_id: &str) -> EdgeDefinition {
    edge(source, "obj-main", init_id, "witness-input")
}

/// The standard three-parameter `coin::mint` node from the palette.
#[allow(dead_code)]
pub fn mint_coin_node(id: &str) -> NodeDefinition {
    function_node(
        id,
        "coin::mint",
        &[("cap", "&mut TreasuryCap"), ("amount", "u64"), ("ctx", "&mut TxContext")],
    )
}

/// Witness struct `MY_COIN` wired into an init node, the usual coin setup.
#[allow(dead_code)]
pub fn create_coin_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            struct_node("s-1", "MY_COIN", &[], Abilities::DROP_ONLY),
            init_node("i-1"),
        ],
        edges: vec![witness_edge("s-1", "i-1")],
    }
}

#[allow(dead_code)]
pub fn compile(module_name: &str, graph: GraphDefinition) -> GeneratedPackage {
    Compiler::builder(module_name, graph)
        .build()
        .compile()
        .expect("Failed to compile graph")
}

/// The module-root node the editor keeps hidden on every canvas.
#[allow(dead_code)]
pub fn module_root_json(name: &str) -> serde_json::Value {
    json!({
        "id": "module-root",
        "type": "default",
        "position": { "x": -100, "y": -100 },
        "data": { "label": name, "type": "moduleName" },
        "hidden": true
    })
}

/// Editor JSON of a full coin module: witness, init and a mint function.
#[allow(dead_code)]
pub fn create_coin_graph_json() -> String {
    json!({
        "nodes": [
            module_root_json("my_coin"),
            {
                "id": "s-1",
                "type": "structNode",
                "position": { "x": 0, "y": 0 },
                "data": { "label": "MY_COIN", "fields": [], "abilities": { "drop": true } }
            },
            {
                "id": "i-1",
                "type": "initNode",
                "position": { "x": 200, "y": 0 },
                "data": {
                    "label": "CoinInit",
                    "coinName": "My Coin",
                    "coinSymbol": "MYC",
                    "coinDecimals": "6",
                    "coinDescription": "A test coin"
                }
            },
            {
                "id": "f-1",
                "type": "functionNode",
                "position": { "x": 400, "y": 0 },
                "data": {
                    "label": "coin::mint",
                    "params": [
                        { "name": "cap", "type": "&mut TreasuryCap" },
                        { "name": "amount", "type": "u64" },
                        { "name": "ctx", "type": "&mut TxContext" }
                    ]
                }
            }
        ],
        "edges": [
            {
                "id": "e-1",
                "source": "s-1",
                "sourceHandle": "obj-main",
                "target": "i-1",
                "targetHandle": "witness-input"
            }
        ]
    })
    .to_string()
}

/// The module header and import block shared by every generated module.
#[allow(dead_code)]
pub fn expected_header(module_name: &str) -> String {
    format!(
        "module {name}::{name} {{\n\
         \x20   use sui::object::{{Self, UID}};\n\
         \x20   use sui::transfer;\n\
         \x20   use sui::tx_context::{{Self, TxContext}};\n\
         \x20   use sui::coin::{{Self, TreasuryCap, Coin}};\n\
         \x20   use sui::url::{{Self, Url}};\n\
         \x20   use std::option;\n\
         \x20   use std::string::{{Self, String}};\n\
         \n",
        name = module_name
    )
}
