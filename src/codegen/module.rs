use super::{INDENT, emit_functions, emit_init, emit_structs};
use crate::compiler::ModulePlan;
use crate::defaults::CodegenDefaults;

/// Framework modules every generated module imports.
pub const IMPORTS: &[&str] = &[
    "sui::object::{Self, UID}",
    "sui::transfer",
    "sui::tx_context::{Self, TxContext}",
    "sui::coin::{Self, TreasuryCap, Coin}",
    "sui::url::{Self, Url}",
    "std::option",
    "std::string::{Self, String}",
];

/// Assembles the full module: header, imports, structs, init, functions.
pub fn emit_module(plan: &ModulePlan, defaults: &CodegenDefaults) -> String {
    let mut fragments = emit_structs(plan);
    fragments.extend(plan.init.as_ref().map(emit_init));
    fragments.extend(emit_functions(plan, defaults));

    let mut out = header(&plan.module_name);
    for fragment in &fragments {
        out.push_str(fragment);
        out.push('\n');
    }
    out.push('}');
    out
}

fn header(module_name: &str) -> String {
    let mut out = format!("module {}::{} {{\n", module_name, module_name);
    for import in IMPORTS {
        out.push_str(&format!("{}use {};\n", INDENT, import));
    }
    out.push('\n');
    out
}
