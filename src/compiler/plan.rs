use super::intent::FunctionIntent;
use super::witness::Witness;
use crate::graph::{Abilities, FieldDefinition};

/// A graph analysed and classified, ready for text emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulePlan {
    /// Sanitized; used for both the address alias and the module name.
    pub module_name: String,
    pub witness: Witness,
    pub structs: Vec<StructPlan>,
    /// No user struct is named after the witness, so one is appended.
    pub synthesize_witness: bool,
    /// An NFT mint exists but no struct node, imported or not, is named `SimpleNFT`.
    pub synthesize_nft: bool,
    pub init: Option<InitPlan>,
    pub functions: Vec<FunctionPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructPlan {
    pub node_id: String,
    pub name: String,
    pub abilities: Abilities,
    pub fields: Vec<FieldDefinition>,
    pub is_witness: bool,
}

/// Initializer settings with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct InitPlan {
    pub node_id: String,
    pub witness: String,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPlan {
    pub node_id: String,
    pub name: String,
    pub intent: FunctionIntent,
    pub params: Vec<ResolvedParam>,
    /// An outgoing edge reaches a transfer node. Informational only; bodies
    /// always transfer to the sender.
    pub feeds_transfer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParam {
    pub name: String,
    pub declared_type: String,
    pub resolved_type: String,
}

impl FunctionPlan {
    /// First parameter whose resolved type satisfies `predicate`.
    pub fn param_where(&self, predicate: impl Fn(&ResolvedParam) -> bool) -> Option<&ResolvedParam> {
        self.params.iter().find(|p| predicate(p))
    }

    pub fn param_named(&self, name: &str) -> Option<&ResolvedParam> {
        self.param_where(|p| p.name == name)
    }
}
