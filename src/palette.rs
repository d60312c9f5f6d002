//! Built-in node templates offered by the editor sidebar.
//!
//! The imported struct templates double as the list of well-known framework
//! types: a struct carrying one of these names is never declared by the
//! generated module, even if the user forgot to mark it imported.

use crate::ui::{FUNCTION_NODE, INIT_NODE, STRUCT_NODE, UiAbilities, UiField, UiNode, UiNodeData};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// What kind of node a template creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Struct,
    Function,
    Init,
}

impl TemplateKind {
    pub fn node_type(self) -> &'static str {
        match self {
            TemplateKind::Struct => STRUCT_NODE,
            TemplateKind::Function => FUNCTION_NODE,
            TemplateKind::Init => INIT_NODE,
        }
    }

    /// Prefix of generated node ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            TemplateKind::Struct => "s",
            TemplateKind::Function => "f",
            TemplateKind::Init => "i",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    pub tool_id: &'static str,
    pub category: &'static str,
    pub kind: TemplateKind,
    pub label: &'static str,
    pub description: &'static str,
    pub is_imported: bool,
    /// Fields for structs, parameters for functions.
    pub members: &'static [(&'static str, &'static str)],
    pub abilities: Option<UiAbilities>,
}

const NFT_ABILITIES: UiAbilities = UiAbilities {
    key: true,
    store: true,
    copy: false,
    drop: false,
};

macro_rules! templates {
    (@abilities) => { None };
    (@abilities $abilities:expr) => { Some($abilities) };
    ( $( $category:literal => [ $( ($tool:literal, $kind:ident, $label:literal, $desc:literal, $imported:literal, [ $( ($m_name:literal, $m_type:literal) ),* ] $(, $abilities:expr)? ) ),* $(,)? ] ),* $(,)? ) => {
        &[
            $( $(
                Template {
                    tool_id: $tool,
                    category: $category,
                    kind: TemplateKind::$kind,
                    label: $label,
                    description: $desc,
                    is_imported: $imported,
                    members: &[ $( ($m_name, $m_type) ),* ],
                    abilities: templates!(@abilities $($abilities)?),
                },
            )* )*
        ]
    };
}

pub static TEMPLATES: &[Template] = templates! {
    "Project Setup" => [
        ("tool-init", Init, "CoinInit", "Init function: bootstraps the coin", false, []),
    ],
    "Financial Assets" => [
        ("tool-treasury", Struct, "TreasuryCap", "Permission to mint and burn a coin", true, []),
        ("tool-coin", Struct, "Coin", "A fungible coin", true, [("value", "u64")]),
        ("tool-balance", Struct, "Balance", "A raw balance amount", true, [("value", "u64")]),
    ],
    "Mint Operations" => [
        ("tool-mint", Function, "coin::mint", "Mints new coins", false,
            [("cap", "&mut TreasuryCap"), ("amount", "u64"), ("ctx", "&mut TxContext")]),
        ("tool-burn", Function, "coin::burn", "Destroys coins", false,
            [("cap", "&mut TreasuryCap"), ("c", "Coin<T>")]),
        ("tool-join", Function, "coin::join", "Merges two coins", false,
            [("self", "&mut Coin<T>"), ("c", "Coin<T>")]),
        ("tool-split", Function, "coin::split", "Splits a coin", false,
            [("self", "&mut Coin<T>"), ("split_amount", "u64"), ("ctx", "&mut TxContext")]),
    ],
    "Transfer & Sharing" => [
        ("tool-transfer", Function, "transfer::transfer", "Hands an object to an address", false,
            [("obj", "T"), ("recipient", "address")]),
        ("tool-share", Function, "transfer::share_object", "Makes an object shared", false, [("obj", "T")]),
        ("tool-freeze", Function, "transfer::freeze_object", "Makes an object immutable", false, [("obj", "T")]),
        ("tool-emit", Function, "event::emit", "Emits an event", false, [("event", "T")]),
    ],
    "NFT Workshop" => [
        ("tool-nft-template", Struct, "SimpleNFT", "A minimal NFT", false,
            [("id", "UID"), ("name", "String"), ("url", "Url")], NFT_ABILITIES),
        ("tool-nft-mint", Function, "nft::mint", "Mints an NFT", false,
            [("name", "vector<u8>"), ("url", "vector<u8>"), ("ctx", "&mut TxContext")]),
    ],
    "Basic Data Types" => [
        ("tool-uid", Struct, "UID", "Unique object identity", true, []),
        ("tool-string", Struct, "String", "UTF-8 text", true, []),
        ("tool-url", Struct, "Url", "A web address", true, []),
        ("tool-option", Struct, "Option", "An optional value", true, []),
        ("tool-vector", Struct, "Vector", "A list of values", true, []),
    ],
    "Storage & System" => [
        ("tool-clock", Struct, "Clock", "On-chain time", true, []),
        ("tool-timestamp", Function, "clock::timestamp_ms", "Reads the clock", false, [("clock", "&Clock")]),
        ("tool-table", Struct, "Table", "Large key-value storage", true, []),
        ("tool-table-new", Function, "table::new", "Creates a table", false, [("ctx", "&mut TxContext")]),
        ("tool-table-add", Function, "table::add", "Inserts into a table", false,
            [("table", "&mut Table"), ("k", "K"), ("v", "V")]),
        ("tool-bag", Struct, "Bag", "Heterogeneous storage", true, []),
        ("tool-txcontext", Struct, "TxContext", "Transaction context", true, []),
    ],
};

/// All templates, in sidebar order.
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

pub fn find(label: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.label == label)
}

/// True for framework types the generated module imports instead of declaring.
pub fn is_framework_type(name: &str) -> bool {
    TEMPLATES
        .iter()
        .any(|t| t.kind == TemplateKind::Struct && t.is_imported && t.label == name)
}

/// A fresh node id: `<prefix>-<millis>-<5 base36 chars>`.
pub fn fresh_id(prefix: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let mut rng = rand::rng();
    let suffix: String = (0..5)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect();
    format!("{}-{}-{}", prefix, now.as_millis(), suffix)
}

impl Template {
    /// Places this template on the canvas as a new node.
    pub fn instantiate(&self, position: serde_json::Value) -> UiNode {
        self.instantiate_with_id(fresh_id(self.kind.id_prefix()), position)
    }

    pub fn instantiate_with_id(&self, id: String, position: serde_json::Value) -> UiNode {
        let members: Vec<UiField> = self
            .members
            .iter()
            .map(|(name, type_name)| UiField {
                name: name.to_string(),
                type_name: type_name.to_string(),
            })
            .collect();

        let mut data = UiNodeData {
            label: self.label.to_string(),
            is_imported: self.is_imported,
            abilities: self.abilities,
            ..Default::default()
        };
        match self.kind {
            TemplateKind::Struct => data.fields = Some(members),
            TemplateKind::Function => data.params = Some(members),
            TemplateKind::Init => {
                data.coin_name = Some(String::new());
                data.coin_symbol = Some(String::new());
                data.coin_decimals = Some(serde_json::json!(9));
            }
        }

        UiNode {
            id,
            node_type: Some(self.kind.node_type().to_string()),
            position,
            data,
            hidden: false,
        }
    }
}
