//! Tests for the individual text emitters.
mod common;
use common::*;
use movesketch::codegen::{self, structs::emit_struct};
use movesketch::compiler::ModulePlan;
use movesketch::prelude::*;

fn plan(graph: GraphDefinition) -> ModulePlan {
    Compiler::builder("my_coin", graph)
        .build()
        .plan()
        .expect("Failed to plan graph")
}

#[test]
fn test_struct_with_fields_in_declaration_order() {
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-0", "MY_COIN", &[], Abilities::DROP_ONLY),
            struct_node(
                "s-1",
                "Vault",
                &[("id", "UID"), ("owner", "address"), ("balance", "u64")],
                Abilities::KEY_STORE,
            ),
        ],
        edges: vec![],
    };
    let plan = plan(graph);
    let vault = emit_struct(&plan.structs[1]);
    assert_eq!(
        vault,
        "    struct Vault has key, store {\n        id: UID,\n        owner: address,\n        balance: u64,\n    }\n"
    );
}

#[test]
fn test_struct_ability_clause_order_and_empty() {
    let all = Abilities {
        key: true,
        store: true,
        copy: true,
        drop: true,
    };
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-0", "MY_COIN", &[], Abilities::DROP_ONLY),
            struct_node("s-1", "Everything", &[("v", "u8")], all),
            struct_node("s-2", "Nothing", &[], Abilities::default()),
        ],
        edges: vec![],
    };
    let fragments = codegen::emit_structs(&plan(graph));
    assert_eq!(fragments.len(), 3);
    assert!(fragments[1].starts_with("    struct Everything has key, store, copy, drop {\n"));
    assert_eq!(fragments[2], "    struct Nothing {}\n");
}

#[test]
fn test_field_types_are_not_substituted() {
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-0", "MY_COIN", &[], Abilities::DROP_ONLY),
            struct_node("s-1", "Holder", &[("coin", "Coin<T>")], Abilities::KEY_STORE),
        ],
        edges: vec![],
    };
    let fragments = codegen::emit_structs(&plan(graph));
    assert!(fragments[1].contains("        coin: Coin<T>,\n"));
}

#[test]
fn test_synthesized_structs_follow_user_structs() {
    let graph = GraphDefinition {
        nodes: vec![
            imported_struct_node("s-cap", "TreasuryCap"),
            function_node(
                "f-1",
                "nft::mint",
                &[("name", "vector<u8>"), ("url", "vector<u8>"), ("ctx", "&mut TxContext")],
            ),
        ],
        edges: vec![],
    };
    let fragments = codegen::emit_structs(&plan(graph));
    assert_eq!(
        fragments,
        vec![
            "    struct MY_COIN has drop {}\n".to_string(),
            "    struct SimpleNFT has key, store {\n        id: UID,\n        name: String,\n        url: Url,\n    }\n"
                .to_string(),
        ]
    );
}

#[test]
fn test_init_uses_defaults() {
    let plan = plan(create_coin_graph());
    let init = codegen::emit_init(plan.init.as_ref().unwrap());
    let expected = "    fun init(witness: MY_COIN, ctx: &mut TxContext) {\n\
                    \x20       let (treasury, metadata) = coin::create_currency(\n\
                    \x20           witness,\n\
                    \x20           9,\n\
                    \x20           b\"SYM\",\n\
                    \x20           b\"My Coin\",\n\
                    \x20           b\"\",\n\
                    \x20           option::none(),\n\
                    \x20           ctx\n\
                    \x20       );\n\
                    \x20       transfer::public_freeze_object(metadata);\n\
                    \x20       transfer::public_transfer(treasury, tx_context::sender(ctx));\n\
                    \x20   }\n";
    assert_eq!(init, expected);
}

#[test]
fn test_init_uses_configured_values() {
    let mut graph = create_coin_graph();
    graph.nodes[1].kind = NodeKind::Init(InitConfig {
        coin_name: "Gold".to_string(),
        coin_symbol: "GLD".to_string(),
        coin_decimals: Some(2),
        coin_description: "Shiny".to_string(),
    });
    let init = codegen::emit_init(plan(graph).init.as_ref().unwrap());
    assert!(init.contains("            2,\n"));
    assert!(init.contains("            b\"GLD\",\n"));
    assert!(init.contains("            b\"Gold\",\n"));
    assert!(init.contains("            b\"Shiny\",\n"));
}

#[test]
fn test_mint_coin_function() {
    let mut graph = create_coin_graph();
    graph.nodes.push(mint_coin_node("f-1"));
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert_eq!(
        function,
        "    public entry fun coin_mint(cap: &mut TreasuryCap<MY_COIN>, amount: u64, ctx: &mut TxContext) {\n\
         \x20       let coin = coin::mint(cap, amount, ctx);\n\
         \x20       transfer::public_transfer(coin, tx_context::sender(ctx));\n\
         \x20   }\n"
    );
}

#[test]
fn test_mint_coin_uses_declared_parameter_names() {
    let mut graph = create_coin_graph();
    graph.nodes.push(function_node(
        "f-1",
        "coin::mint",
        &[("treasury", "TreasuryCap<T>"), ("value", "u64"), ("context", "TxContext")],
    ));
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert!(function.contains(
        "coin_mint(treasury: &mut TreasuryCap<MY_COIN>, value: u64, context: &mut TxContext)"
    ));
    assert!(function.contains("let coin = coin::mint(treasury, value, context);"));
    assert!(function.contains("tx_context::sender(context)"));
}

#[test]
fn test_mint_nft_function() {
    let graph = GraphDefinition {
        nodes: vec![function_node(
            "f-1",
            "nft::mint",
            &[("name", "vector<u8>"), ("url", "vector<u8>"), ("ctx", "&mut TxContext")],
        )],
        edges: vec![],
    };
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert_eq!(
        function,
        "    public entry fun nft_mint(name: vector<u8>, url: vector<u8>, ctx: &mut TxContext) {\n\
         \x20       let nft = SimpleNFT {\n\
         \x20           id: object::new(ctx),\n\
         \x20           name: string::utf8(name),\n\
         \x20           url: url::new_unsafe_from_bytes(url)\n\
         \x20       };\n\
         \x20       transfer::public_transfer(nft, tx_context::sender(ctx));\n\
         \x20   }\n"
    );
}

#[test]
fn test_mint_nft_discards_unused_capability() {
    let graph = GraphDefinition {
        nodes: vec![function_node(
            "f-1",
            "nft::mint",
            &[
                ("cap", "&mut TreasuryCap"),
                ("name", "vector<u8>"),
                ("url", "vector<u8>"),
                ("ctx", "&mut TxContext"),
            ],
        )],
        edges: vec![],
    };
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert!(function.contains("        let _ = cap;\n        let nft = SimpleNFT {\n"));
}

#[test]
fn test_transfer_function() {
    let graph = GraphDefinition {
        nodes: vec![function_node(
            "f-1",
            "transfer::transfer",
            &[("obj", "T"), ("recipient", "address")],
        )],
        edges: vec![],
    };
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert_eq!(
        function,
        "    public entry fun transfer_transfer(obj: Coin<MY_COIN>, recipient: address) {\n\
         \x20       transfer::public_transfer(obj, recipient);\n\
         \x20   }\n"
    );
}

#[test]
fn test_unrecognized_function_uses_placeholder() {
    let graph = GraphDefinition {
        nodes: vec![function_node("f-1", "event::emit", &[("event", "T")])],
        edges: vec![],
    };
    let defaults = CodegenDefaults {
        placeholder_body: "// write me".to_string(),
        ..Default::default()
    };
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &defaults);
    assert_eq!(
        function,
        "    public entry fun event_emit(event: Coin<MY_COIN>) {\n        // write me\n    }\n"
    );
}

#[test]
fn test_function_without_params() {
    let graph = GraphDefinition {
        nodes: vec![function_node("f-1", "Reset", &[])],
        edges: vec![],
    };
    let plan = plan(graph);
    let function = codegen::emit_function(&plan.functions[0], &CodegenDefaults::default());
    assert!(function.starts_with("    public entry fun reset() {\n"));
}

#[test]
fn test_manifest() {
    let manifest = codegen::emit_manifest("my_coin", &CodegenDefaults::default());
    assert_eq!(
        manifest,
        "[package]\n\
         name = \"my_coin\"\n\
         version = \"0.0.1\"\n\
         \n\
         [dependencies]\n\
         Sui = { git = \"https://github.com/MystenLabs/sui.git\", subdir = \"crates/sui-framework/packages/sui-framework\", rev = \"framework/testnet\" }\n\
         \n\
         [addresses]\n\
         my_coin = \"0x0\"\n"
    );
}

#[test]
fn test_manifest_respects_overrides() {
    let defaults = CodegenDefaults {
        framework_rev: "framework/mainnet".to_string(),
        package_version: "1.2.0".to_string(),
        ..Default::default()
    };
    let manifest = codegen::emit_manifest("vault", &defaults);
    assert!(manifest.contains("version = \"1.2.0\"\n"));
    assert!(manifest.contains("rev = \"framework/mainnet\""));
    assert!(manifest.ends_with("vault = \"0x0\"\n"));
}
