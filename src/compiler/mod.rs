use crate::codegen;
use crate::defaults::CodegenDefaults;
use crate::error::CompileError;
use crate::graph::{GraphDefinition, IntoGraph};
use crate::ui::UiGraph;

mod builder;
pub mod intent;
pub mod plan;
pub mod types;
pub mod witness;

pub use builder::NFT_STRUCT_NAME;
pub use intent::{FunctionIntent, IntentRegistry, classify_label};
pub use plan::*;
pub use types::resolve_param_type;
pub use witness::{Witness, WitnessSource, resolve_witness};

use builder::PlanBuilder;

/// The two text artifacts of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPackage {
    pub module_name: String,
    /// Move source of the module.
    pub source: String,
    /// `Move.toml` of the package.
    pub manifest: String,
}

/// Compiles one module graph into Move source and a package manifest.
///
/// Compilation only reads the graph, so one `Compiler` can be invoked any
/// number of times and always produces identical output.
pub struct Compiler {
    module_name: String,
    graph: GraphDefinition,
    defaults: CodegenDefaults,
    intents: IntentRegistry,
}

pub struct CompilerBuilder {
    module_name: String,
    graph: GraphDefinition,
    defaults: CodegenDefaults,
    intents: IntentRegistry,
}

impl CompilerBuilder {
    pub fn new(module_name: &str, graph: GraphDefinition) -> Self {
        Self {
            module_name: module_name.to_string(),
            graph,
            defaults: CodegenDefaults::default(),
            intents: IntentRegistry::new(),
        }
    }
    pub fn with_defaults(mut self, defaults: CodegenDefaults) -> Self {
        self.defaults = defaults;
        self
    }
    /// Generate the body of `intent` for functions labeled exactly `label`.
    pub fn with_intent_mapping(mut self, label: &str, intent: FunctionIntent) -> Self {
        self.intents.insert(label, intent);
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            module_name: self.module_name,
            graph: self.graph,
            defaults: self.defaults,
            intents: self.intents,
        }
    }
}

impl Compiler {
    pub fn builder(module_name: &str, graph: GraphDefinition) -> CompilerBuilder {
        CompilerBuilder::new(module_name, graph)
    }

    /// Builds a compiler straight from the editor's graph JSON.
    pub fn from_json(module_name: &str, graph_json: &str) -> Result<Self, CompileError> {
        let ui_graph: UiGraph =
            serde_json::from_str(graph_json).map_err(|e| CompileError::JsonParseError(e.to_string()))?;
        Ok(Self::builder(module_name, ui_graph.into_graph()?).build())
    }

    pub fn graph(&self) -> &GraphDefinition {
        &self.graph
    }

    pub fn defaults(&self) -> &CodegenDefaults {
        &self.defaults
    }

    /// Analyses and classifies the graph without emitting text.
    pub fn plan(&self) -> Result<ModulePlan, CompileError> {
        PlanBuilder::new(&self.graph, &self.defaults, &self.intents).build(&self.module_name)
    }

    pub fn compile(&self) -> Result<GeneratedPackage, CompileError> {
        let plan = self.plan()?;
        let source = codegen::emit_module(&plan, &self.defaults);
        let manifest = codegen::emit_manifest(&plan.module_name, &self.defaults);
        tracing::debug!(
            module = %plan.module_name,
            structs = plan.structs.len(),
            functions = plan.functions.len(),
            has_init = plan.init.is_some(),
            "module compiled"
        );
        Ok(GeneratedPackage {
            module_name: plan.module_name,
            source,
            manifest,
        })
    }
}
