use crate::compiler::{Compiler, GeneratedPackage};
use crate::defaults::CodegenDefaults;
use crate::error::{CompileError, GraphConversionError, ProjectError};
use crate::graph::IntoGraph;
use crate::ui::UiGraph;
use serde::{Deserialize, Serialize};
use std::fs;

pub const PROJECT_VERSION: &str = "1.0";
/// Id of the hidden node that carries the module name on the canvas.
pub const MODULE_ROOT_ID: &str = "module-root";

/// A saved editor session: one or more modules, each its own canvas.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub version: String,
    pub modules: Vec<ModuleTab>,
}

/// One module tab. Nodes and edges are kept as the editor wrote them so that
/// presentation fields survive a load/save cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModuleTab {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<serde_json::Value>,
    #[serde(default)]
    pub edges: Vec<serde_json::Value>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    /// A project with a single empty `my_coin` module.
    pub fn new() -> Self {
        Self {
            version: PROJECT_VERSION.to_string(),
            modules: vec![ModuleTab::empty("mod-1", "my_coin")],
        }
    }

    pub fn from_file(path: &str) -> Result<Self, ProjectError> {
        let content = fs::read_to_string(path).map_err(|source| ProjectError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &str) -> Result<(), ProjectError> {
        fs::write(path, self.to_json()?).map_err(|source| ProjectError::Io {
            path: path.to_string(),
            source,
        })
    }

    pub fn module(&self, name: &str) -> Result<&ModuleTab, ProjectError> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ProjectError::ModuleNotFound(name.to_string()))
    }

    fn module_mut(&mut self, name: &str) -> Result<&mut ModuleTab, ProjectError> {
        self.modules
            .iter_mut()
            .find(|m| m.name == name)
            .ok_or_else(|| ProjectError::ModuleNotFound(name.to_string()))
    }

    /// Appends an empty module named `module_<n>` and returns its name.
    pub fn add_module(&mut self) -> String {
        let mut n = self.modules.len() + 1;
        while self
            .modules
            .iter()
            .any(|m| m.name == format!("module_{}", n) || m.id == format!("mod-{}", n))
        {
            n += 1;
        }
        let name = format!("module_{}", n);
        self.modules.push(ModuleTab::empty(&format!("mod-{}", n), &name));
        name
    }

    pub fn rename_module(&mut self, name: &str, new_name: &str) -> Result<(), ProjectError> {
        self.module_mut(name)?.name = new_name.to_string();
        Ok(())
    }

    pub fn remove_module(&mut self, name: &str) -> Result<ModuleTab, ProjectError> {
        let index = self
            .modules
            .iter()
            .position(|m| m.name == name)
            .ok_or_else(|| ProjectError::ModuleNotFound(name.to_string()))?;
        if self.modules.len() <= 1 {
            return Err(ProjectError::LastModule);
        }
        Ok(self.modules.remove(index))
    }

    /// Resets a module's canvas to the bare module root.
    pub fn clear_module(&mut self, name: &str) -> Result<(), ProjectError> {
        let module = self.module_mut(name)?;
        module.nodes = vec![module_root_node(&module.name)];
        module.edges.clear();
        Ok(())
    }

    /// Replaces a module's canvas wholesale, e.g. with an imported graph.
    pub fn replace_graph(&mut self, name: &str, graph: &UiGraph) -> Result<(), ProjectError> {
        let nodes = graph
            .nodes
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = graph
            .edges
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let module = self.module_mut(name)?;
        module.nodes = nodes;
        module.edges = edges;
        Ok(())
    }
}

impl ModuleTab {
    fn empty(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            nodes: vec![module_root_node(name)],
            edges: Vec::new(),
        }
    }

    /// The editor graph of this module.
    pub fn graph(&self) -> Result<UiGraph, GraphConversionError> {
        let value = serde_json::json!({ "nodes": self.nodes, "edges": self.edges });
        serde_json::from_value(value)
            .map_err(|e| GraphConversionError::ValidationError(format!("module '{}': {}", self.name, e)))
    }

    /// Compiles this module with the given defaults.
    pub fn export(&self, defaults: &CodegenDefaults) -> Result<GeneratedPackage, CompileError> {
        let graph = self.graph()?.into_graph()?;
        Compiler::builder(&self.name, graph)
            .with_defaults(defaults.clone())
            .build()
            .compile()
    }
}

fn module_root_node(module_name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": MODULE_ROOT_ID,
        "type": "default",
        "position": { "x": -100, "y": -100 },
        "data": { "label": module_name, "type": "moduleName" },
        "hidden": true,
    })
}
