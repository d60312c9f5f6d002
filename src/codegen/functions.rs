use super::{BODY_INDENT, INDENT};
use crate::compiler::{FunctionIntent, FunctionPlan, ModulePlan, NFT_STRUCT_NAME, ResolvedParam};
use crate::defaults::CodegenDefaults;
use itertools::Itertools;

pub fn emit_functions(plan: &ModulePlan, defaults: &CodegenDefaults) -> Vec<String> {
    plan.functions
        .iter()
        .map(|f| emit_function(f, defaults))
        .collect()
}

/// One `public entry fun` with the body chosen by the function's intent.
pub fn emit_function(function: &FunctionPlan, defaults: &CodegenDefaults) -> String {
    let params = function
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.resolved_type))
        .join(", ");

    let body = match function.intent {
        FunctionIntent::MintCoin => mint_coin_body(function),
        FunctionIntent::MintNft => mint_nft_body(function),
        FunctionIntent::Transfer => transfer_body(function),
        FunctionIntent::Unrecognized => vec![defaults.placeholder_body.clone()],
    };

    let mut out = format!("{}public entry fun {}({}) {{\n", INDENT, function.name, params);
    for line in body {
        out.push_str(BODY_INDENT);
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("{}}}\n", INDENT));
    out
}

fn mint_coin_body(function: &FunctionPlan) -> Vec<String> {
    let cap = treasury_param(function).unwrap_or("cap");
    let amount = name_of(function.param_where(|p| p.resolved_type == "u64")).unwrap_or("amount");
    let ctx = context_param(function);
    vec![
        format!("let coin = coin::mint({}, {}, {});", cap, amount, ctx),
        format!("transfer::public_transfer(coin, tx_context::sender({}));", ctx),
    ]
}

fn mint_nft_body(function: &FunctionPlan) -> Vec<String> {
    let name = name_of(function.param_named("name")).unwrap_or("name");
    let url = name_of(function.param_named("url")).unwrap_or("url");
    let ctx = context_param(function);

    let mut lines = Vec::new();
    // The capability is accepted but the body never touches it.
    if let Some(cap) = treasury_param(function) {
        lines.push(format!("let _ = {};", cap));
    }
    lines.extend([
        format!("let nft = {} {{", NFT_STRUCT_NAME),
        format!("{}id: object::new({}),", INDENT, ctx),
        format!("{}name: string::utf8({}),", INDENT, name),
        format!("{}url: url::new_unsafe_from_bytes({})", INDENT, url),
        "};".to_string(),
        format!("transfer::public_transfer(nft, tx_context::sender({}));", ctx),
    ]);
    lines
}

fn transfer_body(function: &FunctionPlan) -> Vec<String> {
    let recipient = name_of(function.param_where(|p| p.resolved_type == "address")).unwrap_or("recipient");
    let object = name_of(function.param_where(|p| {
        p.resolved_type != "address" && !p.resolved_type.contains("TxContext")
    }))
    .unwrap_or("obj");
    vec![format!("transfer::public_transfer({}, {});", object, recipient)]
}

fn treasury_param(function: &FunctionPlan) -> Option<&str> {
    name_of(function.param_where(|p| p.resolved_type.contains("TreasuryCap")))
}

fn context_param(function: &FunctionPlan) -> &str {
    name_of(function.param_where(|p| p.resolved_type.contains("TxContext"))).unwrap_or("ctx")
}

fn name_of(param: Option<&ResolvedParam>) -> Option<&str> {
    param.map(|p| p.name.as_str())
}
