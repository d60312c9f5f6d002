use super::{BODY_INDENT, INDENT};
use crate::compiler::{ModulePlan, NFT_STRUCT_NAME, StructPlan};
use crate::graph::{Abilities, FieldDefinition};
use itertools::Itertools;

/// Struct declarations in emission order: user structs, then the synthesized
/// witness, then the synthesized NFT struct.
pub fn emit_structs(plan: &ModulePlan) -> Vec<String> {
    let mut fragments: Vec<String> = plan
        .structs
        .iter()
        .map(|s| declaration(&s.name, &s.abilities, &s.fields))
        .collect();

    if plan.synthesize_witness {
        fragments.push(declaration(&plan.witness.name, &Abilities::DROP_ONLY, &[]));
    }
    if plan.synthesize_nft {
        fragments.push(nft_declaration());
    }
    fragments
}

/// A single declared struct.
pub fn emit_struct(plan: &StructPlan) -> String {
    declaration(&plan.name, &plan.abilities, &plan.fields)
}

fn nft_declaration() -> String {
    let fields = [
        FieldDefinition::new("id", "UID"),
        FieldDefinition::new("name", "String"),
        FieldDefinition::new("url", "Url"),
    ];
    declaration(NFT_STRUCT_NAME, &Abilities::KEY_STORE, &fields)
}

fn declaration(name: &str, abilities: &Abilities, fields: &[FieldDefinition]) -> String {
    let ability_clause = if abilities.is_empty() {
        String::new()
    } else {
        format!(" has {}", abilities.enabled().join(", "))
    };

    if fields.is_empty() {
        return format!("{}struct {}{} {{}}\n", INDENT, name, ability_clause);
    }

    let body = fields
        .iter()
        .map(|f| format!("{}{}: {},\n", BODY_INDENT, f.name, f.type_name))
        .join("");
    format!("{}struct {}{} {{\n{}{}}}\n", INDENT, name, ability_clause, body, INDENT)
}
