//! # MoveSketch - Visual Graph to Sui Move Compiler
//!
//! **MoveSketch** turns a canvas of typed boxes (structs, functions, and a coin
//! initializer) wired together with typed connectors into the source of a Sui
//! Move module plus its `Move.toml`. Compilation is a pure function of
//! `(module name, nodes, edges)`: the graph is read, classified into a
//! [`compiler::ModulePlan`], and emitted as text.
//!
//! ## Core Workflow
//!
//! 1.  **Load the graph**: deserialize the editor's JSON into [`ui::UiGraph`], or
//!     implement [`graph::IntoGraph`] for your own canvas format.
//! 2.  **Convert**: `into_graph()` yields the canonical [`graph::GraphDefinition`].
//! 3.  **Compile**: `Compiler::builder(name, graph).build().compile()` returns a
//!     [`compiler::GeneratedPackage`] with the Move source and the manifest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use movesketch::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph_json = r#"{
//!         "nodes": [
//!             { "id": "s-1", "type": "structNode",
//!               "data": { "label": "MY_COIN", "fields": [], "abilities": { "drop": true } } },
//!             { "id": "i-1", "type": "initNode",
//!               "data": { "label": "CoinInit", "coinName": "My Coin", "coinSymbol": "MYC" } },
//!             { "id": "f-1", "type": "functionNode",
//!               "data": { "label": "coin::mint", "params": [
//!                   { "name": "cap", "type": "&mut TreasuryCap" },
//!                   { "name": "amount", "type": "u64" },
//!                   { "name": "ctx", "type": "&mut TxContext" } ] } }
//!         ],
//!         "edges": [
//!             { "source": "s-1", "sourceHandle": "obj-main",
//!               "target": "i-1", "targetHandle": "witness-input" }
//!         ]
//!     }"#;
//!
//!     let graph = UiGraph::from_json(graph_json)?.into_graph()?;
//!     let package = Compiler::builder("my_coin", graph).build().compile()?;
//!
//!     println!("{}", package.source);
//!     println!("{}", package.manifest);
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod compiler;
pub mod defaults;
pub mod error;
pub mod graph;
pub mod import;
pub mod palette;
pub mod prelude;
pub mod project;
pub mod sanitize;
pub mod ui;

#[cfg(feature = "python-bindings")]
mod python;
