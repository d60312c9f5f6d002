//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! movesketch crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use movesketch::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let project = Project::from_file("path/to/move_project.json")?;
//! let module = project.module("my_coin")?;
//! let package = module.export(&CodegenDefaults::default())?;
//!
//! std::fs::write("sources/my_coin.move", &package.source)?;
//! std::fs::write("Move.toml", &package.manifest)?;
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{Compiler, FunctionIntent, GeneratedPackage, ModulePlan};
pub use crate::defaults::CodegenDefaults;

// Graph model
pub use crate::graph::{
    Abilities, EdgeDefinition, FieldDefinition, FunctionSpec, GraphDefinition, Handle, InitConfig,
    IntoGraph, NodeDefinition, NodeKind, StructSpec,
};
pub use crate::ui::UiGraph;

// Persistence and import
pub use crate::import::{GraphOracle, Importer};
pub use crate::project::{ModuleTab, Project};

// Error types
pub use crate::error::{CompileError, GraphConversionError, ImportError, ProjectError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
