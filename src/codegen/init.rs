use super::{BODY_INDENT, INDENT};
use crate::compiler::InitPlan;

/// The module initializer: creates the currency, freezes its metadata and
/// hands the treasury capability to the publisher.
///
/// Symbol, name and description are placed into byte-string literals verbatim.
pub fn emit_init(init: &InitPlan) -> String {
    let args = [
        "witness".to_string(),
        init.decimals.to_string(),
        format!("b\"{}\"", init.symbol),
        format!("b\"{}\"", init.name),
        format!("b\"{}\"", init.description),
        "option::none()".to_string(),
        "ctx".to_string(),
    ];
    let arg_indent = format!("{}{}", BODY_INDENT, INDENT);

    let mut out = format!(
        "{}fun init(witness: {}, ctx: &mut TxContext) {{\n",
        INDENT, init.witness
    );
    out.push_str(&format!(
        "{}let (treasury, metadata) = coin::create_currency(\n",
        BODY_INDENT
    ));
    let last = args.len() - 1;
    for (i, arg) in args.iter().enumerate() {
        let separator = if i == last { "" } else { "," };
        out.push_str(&format!("{}{}{}\n", arg_indent, arg, separator));
    }
    out.push_str(&format!("{});\n", BODY_INDENT));
    out.push_str(&format!("{}transfer::public_freeze_object(metadata);\n", BODY_INDENT));
    out.push_str(&format!(
        "{}transfer::public_transfer(treasury, tx_context::sender(ctx));\n",
        BODY_INDENT
    ));
    out.push_str(&format!("{}}}\n", INDENT));
    out
}
