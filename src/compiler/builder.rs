use super::intent::{FunctionIntent, IntentRegistry};
use super::plan::{FunctionPlan, InitPlan, ModulePlan, ResolvedParam, StructPlan};
use super::types::resolve_param_type;
use super::witness::{Witness, find_single_init, resolve_witness};
use crate::defaults::CodegenDefaults;
use crate::error::CompileError;
use crate::graph::{Abilities, FunctionSpec, GraphDefinition, InitConfig, NodeDefinition, NodeKind, StructSpec};
use crate::palette;
use crate::sanitize;
use ahash::{AHashMap, AHashSet};
use tracing::{debug, warn};

/// Name of the NFT struct the NFT mint body constructs.
pub const NFT_STRUCT_NAME: &str = "SimpleNFT";

const UID_TYPE: &str = "UID";

/// Responsible for turning a `GraphDefinition` into a classified `ModulePlan`.
/// Never mutates the graph.
pub(super) struct PlanBuilder<'a> {
    graph: &'a GraphDefinition,
    defaults: &'a CodegenDefaults,
    intents: &'a IntentRegistry,
    nodes_by_id: AHashMap<&'a str, &'a NodeDefinition>,
}

impl<'a> PlanBuilder<'a> {
    pub(super) fn new(
        graph: &'a GraphDefinition,
        defaults: &'a CodegenDefaults,
        intents: &'a IntentRegistry,
    ) -> Self {
        let mut nodes_by_id = AHashMap::new();
        for node in &graph.nodes {
            // First occurrence wins, matching lookup-by-id on the canvas.
            nodes_by_id.entry(node.id.as_str()).or_insert(node);
        }
        Self {
            graph,
            defaults,
            intents,
            nodes_by_id,
        }
    }

    pub(super) fn build(&self, module_name: &str) -> Result<ModulePlan, CompileError> {
        let witness = resolve_witness(self.graph, self.defaults)?;
        let structs = self.plan_structs(&witness);
        let functions = self.plan_functions(&witness);

        let synthesize_witness = !structs.iter().any(|s| s.is_witness);
        // Any struct node named `SimpleNFT` suppresses the synthesized one,
        // including an imported node that is never declared.
        let synthesize_nft = functions.iter().any(|f| f.intent == FunctionIntent::MintNft)
            && !self
                .graph
                .struct_nodes()
                .any(|(node, _)| sanitize::declaration_name(&node.label) == NFT_STRUCT_NAME);

        let init = find_single_init(self.graph)?.and_then(|node| match &node.kind {
            NodeKind::Init(config) => Some(self.plan_init(node, config, &witness)),
            _ => None,
        });

        Ok(ModulePlan {
            module_name: sanitize::module_name(module_name),
            witness,
            structs,
            synthesize_witness,
            synthesize_nft,
            init,
            functions,
        })
    }

    fn plan_structs(&self, witness: &Witness) -> Vec<StructPlan> {
        let mut declared = AHashSet::new();
        let mut plans = Vec::new();

        for (node, spec) in self.graph.struct_nodes() {
            if spec.is_imported {
                continue;
            }
            let name = sanitize::declaration_name(&node.label);
            if palette::is_framework_type(&name) {
                warn!(node = %node.id, name = %name, "struct named after a framework type is not declared");
                continue;
            }
            if !declared.insert(name.clone()) {
                warn!(node = %node.id, name = %name, "duplicate struct declaration skipped");
                continue;
            }
            plans.push(Self::plan_struct(node, spec, name, witness));
        }
        plans
    }

    fn plan_struct(node: &NodeDefinition, spec: &StructSpec, name: String, witness: &Witness) -> StructPlan {
        if name != witness.name {
            return StructPlan {
                node_id: node.id.clone(),
                name,
                abilities: spec.abilities,
                fields: spec.fields.clone(),
                is_witness: false,
            };
        }

        // Witness types carry no data; the editor's default `id: UID` goes.
        let uid_index = spec.fields.iter().position(|f| f.type_name.trim() == UID_TYPE);
        let fields = spec
            .fields
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != uid_index)
            .map(|(_, f)| f.clone())
            .collect();

        StructPlan {
            node_id: node.id.clone(),
            name,
            abilities: Abilities::DROP_ONLY,
            fields,
            is_witness: true,
        }
    }

    fn plan_init(&self, node: &NodeDefinition, config: &InitConfig, witness: &Witness) -> InitPlan {
        let or_default = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        InitPlan {
            node_id: node.id.clone(),
            witness: witness.name.clone(),
            decimals: config.coin_decimals.unwrap_or(self.defaults.coin_decimals),
            symbol: or_default(&config.coin_symbol, &self.defaults.coin_symbol),
            name: or_default(&config.coin_name, &self.defaults.coin_name),
            description: or_default(&config.coin_description, &self.defaults.coin_description),
        }
    }

    fn plan_functions(&self, witness: &Witness) -> Vec<FunctionPlan> {
        self.graph
            .function_nodes()
            .map(|(node, spec)| self.plan_function(node, spec, witness))
            .collect()
    }

    fn plan_function(&self, node: &NodeDefinition, spec: &FunctionSpec, witness: &Witness) -> FunctionPlan {
        let intent = self.intents.classify(&node.label);
        let params = spec
            .params
            .iter()
            .map(|p| ResolvedParam {
                name: p.name.clone(),
                declared_type: p.type_name.clone(),
                resolved_type: resolve_param_type(&p.type_name, &witness.name),
            })
            .collect();
        let feeds_transfer = self.feeds_transfer(&node.id);

        debug!(
            node = %node.id,
            label = %node.label,
            %intent,
            feeds_transfer,
            "function classified"
        );

        FunctionPlan {
            node_id: node.id.clone(),
            name: sanitize::callable_name(&node.label),
            intent,
            params,
            feeds_transfer,
        }
    }

    /// Whether any outgoing edge of `node_id` reaches a node labeled as a transfer.
    fn feeds_transfer(&self, node_id: &str) -> bool {
        self.graph.outgoing(node_id).any(|edge| {
            self.nodes_by_id
                .get(edge.target.as_str())
                .is_some_and(|target| target.label.contains("transfer"))
        })
    }
}
