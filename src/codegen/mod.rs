//! Text emission. Every emitter maps part of a [`ModulePlan`] to a list of
//! top-level fragments; [`emit_module`] joins them once.
//!
//! [`ModulePlan`]: crate::compiler::ModulePlan

pub mod functions;
pub mod init;
pub mod manifest;
pub mod module;
pub mod structs;

pub use functions::{emit_function, emit_functions};
pub use init::emit_init;
pub use manifest::emit_manifest;
pub use module::emit_module;
pub use structs::emit_structs;

/// One level of indentation inside the module block.
pub(crate) const INDENT: &str = "    ";
/// Statement indentation inside a function body.
pub(crate) const BODY_INDENT: &str = "        ";
