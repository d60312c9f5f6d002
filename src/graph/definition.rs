use super::Handle;

/// The complete, canonical graph of one Move module, ready for compilation.
/// This is the target structure for any editor or import format conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// A single box placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDefinition {
    pub id: String,
    /// Canonical machine name, e.g. `TreasuryCap` or `coin::mint`.
    pub label: String,
    /// Display-only name shown in the editor.
    pub custom_title: Option<String>,
    pub kind: NodeKind,
}

/// What a node contributes to the emitted module.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Struct(StructSpec),
    Function(FunctionSpec),
    Init(InitConfig),
    /// Presentational nodes (the hidden module root, plain labels) that the
    /// compiler ignores.
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructSpec {
    /// Declaration order is significant.
    pub fields: Vec<FieldDefinition>,
    pub abilities: Abilities,
    /// Pre-existing framework types are never declared.
    pub is_imported: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionSpec {
    /// Positional: `params[i]` is wired through the `param-<i>` slot.
    pub params: Vec<FieldDefinition>,
}

/// Currency settings carried by the initializer node. Empty values fall back
/// to [`crate::defaults::CodegenDefaults`] at emission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitConfig {
    pub coin_name: String,
    pub coin_symbol: String,
    pub coin_decimals: Option<u8>,
    pub coin_description: String,
}

/// A `name: type` pair, used both for struct fields and function parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub type_name: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Ability flags of a struct, each independently toggleable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abilities {
    pub key: bool,
    pub store: bool,
    pub copy: bool,
    pub drop: bool,
}

impl Abilities {
    /// What the editor assumes when a struct carries no ability map.
    pub const KEY_STORE: Abilities = Abilities {
        key: true,
        store: true,
        copy: false,
        drop: false,
    };

    pub const DROP_ONLY: Abilities = Abilities {
        key: false,
        store: false,
        copy: false,
        drop: true,
    };

    /// Enabled ability names in canonical `key, store, copy, drop` order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("key", self.key),
            ("store", self.store),
            ("copy", self.copy),
            ("drop", self.drop),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.key || self.store || self.copy || self.drop)
    }
}

/// A directed connector between two node slots.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDefinition {
    pub source: String,
    pub source_handle: Handle,
    pub target: String,
    pub target_handle: Handle,
}

impl GraphDefinition {
    /// First node with the given id.
    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn struct_nodes(&self) -> impl Iterator<Item = (&NodeDefinition, &StructSpec)> {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Struct(spec) => Some((n, spec)),
            _ => None,
        })
    }

    pub fn function_nodes(&self) -> impl Iterator<Item = (&NodeDefinition, &FunctionSpec)> {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Function(spec) => Some((n, spec)),
            _ => None,
        })
    }

    pub fn init_nodes(&self) -> impl Iterator<Item = (&NodeDefinition, &InitConfig)> {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Init(config) => Some((n, config)),
            _ => None,
        })
    }

    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a EdgeDefinition> {
        self.edges.iter().filter(move |e| e.target == node_id)
    }

    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a EdgeDefinition> {
        self.edges.iter().filter(move |e| e.source == node_id)
    }
}
