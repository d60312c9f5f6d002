//! Tests for graph analysis: witness resolution, classification and planning.
mod common;
use common::*;
use movesketch::compiler::{IntentRegistry, WitnessSource, classify_label, resolve_witness};
use movesketch::prelude::*;

fn plan(graph: GraphDefinition) -> ModulePlan {
    Compiler::builder("my_coin", graph)
        .build()
        .plan()
        .expect("Failed to plan graph")
}

#[test]
fn test_witness_from_init_connection() {
    let mut graph = create_coin_graph();
    // A user struct declared earlier must not win over the connected one.
    graph
        .nodes
        .insert(0, struct_node("s-0", "Config", &[("id", "UID")], Abilities::KEY_STORE));

    let witness = resolve_witness(&graph, &CodegenDefaults::default()).unwrap();
    assert_eq!(witness.name, "MY_COIN");
    assert_eq!(
        witness.source,
        WitnessSource::Connected {
            node_id: "s-1".to_string()
        }
    );
}

#[test]
fn test_witness_edge_without_handle_counts() {
    let mut graph = create_coin_graph();
    graph.edges = vec![EdgeDefinition {
        source: "s-1".to_string(),
        source_handle: Handle::ObjectMain,
        target: "i-1".to_string(),
        target_handle: Handle::Unspecified,
    }];
    let witness = resolve_witness(&graph, &CodegenDefaults::default()).unwrap();
    assert!(matches!(witness.source, WitnessSource::Connected { .. }));
}

#[test]
fn test_witness_falls_back_to_first_struct() {
    let graph = GraphDefinition {
        nodes: vec![
            imported_struct_node("s-cap", "TreasuryCap"),
            struct_node("s-1", "GOLD", &[], Abilities::DROP_ONLY),
            struct_node("s-2", "SILVER", &[], Abilities::DROP_ONLY),
        ],
        edges: vec![],
    };
    let witness = resolve_witness(&graph, &CodegenDefaults::default()).unwrap();
    assert_eq!(witness.name, "GOLD");
    assert_eq!(
        witness.source,
        WitnessSource::FirstStruct {
            node_id: "s-1".to_string()
        }
    );
}

#[test]
fn test_witness_ignores_connected_framework_type() {
    let graph = GraphDefinition {
        nodes: vec![
            imported_struct_node("s-cap", "TreasuryCap"),
            struct_node("s-1", "GOLD", &[], Abilities::DROP_ONLY),
            init_node("i-1"),
        ],
        edges: vec![witness_edge("s-cap", "i-1")],
    };
    let witness = resolve_witness(&graph, &CodegenDefaults::default()).unwrap();
    assert_eq!(witness.name, "GOLD");
}

#[test]
fn test_witness_default_when_nothing_eligible() {
    let graph = GraphDefinition {
        nodes: vec![imported_struct_node("s-cap", "TreasuryCap"), init_node("i-1")],
        edges: vec![],
    };
    let defaults = CodegenDefaults {
        witness_name: "FALLBACK".to_string(),
        ..Default::default()
    };
    let witness = resolve_witness(&graph, &defaults).unwrap();
    assert_eq!(witness.name, "FALLBACK");
    assert_eq!(witness.source, WitnessSource::Default);
}

#[test]
fn test_multiple_init_nodes_rejected() {
    let mut graph = create_coin_graph();
    graph.nodes.push(init_node("i-2"));

    let result = Compiler::builder("my_coin", graph).build().compile();
    assert_eq!(
        result.unwrap_err(),
        CompileError::MultipleInitNodes {
            first: "i-1".to_string(),
            second: "i-2".to_string()
        }
    );
}

#[test]
fn test_ambiguous_witness_rejected() {
    let mut graph = create_coin_graph();
    graph
        .nodes
        .push(struct_node("s-2", "OTHER_COIN", &[], Abilities::DROP_ONLY));
    graph.edges.push(witness_edge("s-2", "i-1"));

    let err = Compiler::builder("my_coin", graph)
        .build()
        .compile()
        .unwrap_err();
    match err {
        CompileError::AmbiguousWitness {
            init_node_id,
            sources,
        } => {
            assert_eq!(init_node_id, "i-1");
            assert_eq!(sources, vec!["s-1".to_string(), "s-2".to_string()]);
        }
        other => panic!("Expected AmbiguousWitness, got {:?}", other),
    }
}

#[test]
fn test_edges_into_other_handles_are_not_witness() {
    let mut graph = create_coin_graph();
    graph.nodes.push(mint_coin_node("f-1"));
    graph.edges.push(edge("s-1", "obj-main", "f-1", "param-0"));

    let witness = resolve_witness(&graph, &CodegenDefaults::default()).unwrap();
    assert_eq!(witness.name, "MY_COIN");
}

#[test]
fn test_classify_builtin_labels() {
    assert_eq!(classify_label("coin::mint"), FunctionIntent::MintCoin);
    assert_eq!(classify_label("Coin::Mint_Reward"), FunctionIntent::MintCoin);
    assert_eq!(classify_label("nft::mint"), FunctionIntent::MintNft);
    assert_eq!(classify_label("transfer::transfer"), FunctionIntent::Transfer);
    assert_eq!(classify_label("transfer::public_transfer"), FunctionIntent::Transfer);
    assert_eq!(classify_label("transfer transfer"), FunctionIntent::Transfer);
    assert_eq!(classify_label("transfer::share_object"), FunctionIntent::Unrecognized);
    assert_eq!(classify_label("burn::custom"), FunctionIntent::Unrecognized);
}

#[test]
fn test_mint_coin_takes_precedence_over_nft() {
    // Both rule sets match; the coin rule is checked first.
    assert_eq!(classify_label("coin::mint_nft::wrap"), FunctionIntent::MintCoin);
}

#[test]
fn test_mint_markers_require_namespace() {
    assert_eq!(classify_label("nft::mint_coinflip"), FunctionIntent::MintNft);
    assert_eq!(classify_label("mint_coin"), FunctionIntent::Unrecognized);
    assert_eq!(classify_label("mint_nft_badge"), FunctionIntent::Unrecognized);
}

#[test]
fn test_intent_registry_mapping_overrides_rules() {
    let mut registry = IntentRegistry::new();
    registry.insert("reward::issue", FunctionIntent::MintCoin);
    registry.insert("coin::mint", FunctionIntent::Unrecognized);

    assert_eq!(registry.classify("reward::issue"), FunctionIntent::MintCoin);
    assert_eq!(registry.classify("coin::mint"), FunctionIntent::Unrecognized);
    assert_eq!(registry.classify("nft::mint"), FunctionIntent::MintNft);
}

#[test]
fn test_builder_intent_mapping_reaches_codegen() {
    let graph = GraphDefinition {
        nodes: vec![function_node(
            "f-1",
            "reward::issue",
            &[("cap", "&mut TreasuryCap"), ("amount", "u64"), ("ctx", "&mut TxContext")],
        )],
        edges: vec![],
    };
    let package = Compiler::builder("rewards", graph)
        .with_intent_mapping("reward::issue", FunctionIntent::MintCoin)
        .build()
        .compile()
        .unwrap();
    assert!(package.source.contains("public entry fun reward_issue("));
    assert!(package.source.contains("let coin = coin::mint(cap, amount, ctx);"));
}

#[test]
fn test_plan_skips_imported_and_framework_structs() {
    let graph = GraphDefinition {
        nodes: vec![
            imported_struct_node("s-cap", "TreasuryCap"),
            // Not flagged imported, but still a framework name.
            struct_node("s-coin", "Coin", &[("value", "u64")], Abilities::KEY_STORE),
            struct_node("s-1", "Vault", &[("id", "UID")], Abilities::KEY_STORE),
        ],
        edges: vec![],
    };
    let plan = plan(graph);
    let names: Vec<_> = plan.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Vault"]);
}

#[test]
fn test_plan_duplicate_struct_names_first_wins() {
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-1", "Vault", &[("id", "UID")], Abilities::KEY_STORE),
            struct_node("s-2", "Vault", &[("id", "UID"), ("value", "u64")], Abilities::KEY_STORE),
        ],
        edges: vec![],
    };
    let plan = plan(graph);
    // `Vault` is also the fallback witness, so it is planned as the witness.
    assert_eq!(plan.structs.len(), 1);
    assert_eq!(plan.structs[0].node_id, "s-1");
}

#[test]
fn test_plan_witness_struct_loses_uid_and_gets_drop() {
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-1", "MY_COIN", &[("id", "UID"), ("tag", "u8")], Abilities::KEY_STORE),
            init_node("i-1"),
        ],
        edges: vec![witness_edge("s-1", "i-1")],
    };
    let plan = plan(graph);
    let witness = &plan.structs[0];
    assert!(witness.is_witness);
    assert_eq!(witness.abilities, Abilities::DROP_ONLY);
    assert_eq!(witness.fields, vec![FieldDefinition::new("tag", "u8")]);
    assert!(!plan.synthesize_witness);
}

#[test]
fn test_plan_init_applies_defaults() {
    let plan = plan(create_coin_graph());
    let init = plan.init.expect("init planned");
    assert_eq!(init.witness, "MY_COIN");
    assert_eq!(init.decimals, 9);
    assert_eq!(init.symbol, "SYM");
    assert_eq!(init.name, "My Coin");
    assert_eq!(init.description, "");
}

#[test]
fn test_plan_init_keeps_zero_decimals() {
    let mut graph = create_coin_graph();
    graph.nodes[1].kind = NodeKind::Init(InitConfig {
        coin_decimals: Some(0),
        ..Default::default()
    });
    let init = plan(graph).init.unwrap();
    assert_eq!(init.decimals, 0);
}

#[test]
fn test_plan_feeds_transfer_flag() {
    let graph = GraphDefinition {
        nodes: vec![
            mint_coin_node("f-1"),
            function_node("f-2", "transfer::transfer", &[("obj", "T"), ("recipient", "address")]),
        ],
        edges: vec![edge("f-1", "return-val", "f-2", "param-0")],
    };
    let plan = plan(graph);
    assert!(plan.functions[0].feeds_transfer);
    assert!(!plan.functions[1].feeds_transfer);
}

#[test]
fn test_plan_synthesizes_nft_only_when_needed() {
    let nft_mint = function_node(
        "f-1",
        "nft::mint",
        &[("name", "vector<u8>"), ("url", "vector<u8>"), ("ctx", "&mut TxContext")],
    );
    let plan_without = plan(GraphDefinition {
        nodes: vec![nft_mint.clone()],
        edges: vec![],
    });
    assert!(plan_without.synthesize_nft);

    let plan_with = plan(GraphDefinition {
        nodes: vec![
            struct_node("s-1", "MY_COIN", &[], Abilities::DROP_ONLY),
            struct_node(
                "s-nft",
                "SimpleNFT",
                &[("id", "UID"), ("name", "String"), ("url", "Url")],
                Abilities::KEY_STORE,
            ),
            nft_mint,
        ],
        edges: vec![],
    });
    assert!(!plan_with.synthesize_nft);
}

#[test]
fn test_imported_nft_struct_is_neither_declared_nor_synthesized() {
    let graph = GraphDefinition {
        nodes: vec![
            struct_node("s-1", "MY_COIN", &[], Abilities::DROP_ONLY),
            imported_struct_node("s-nft", "SimpleNFT"),
            function_node(
                "f-1",
                "nft::mint",
                &[("name", "vector<u8>"), ("url", "vector<u8>"), ("ctx", "&mut TxContext")],
            ),
        ],
        edges: vec![],
    };
    assert!(!plan(graph.clone()).synthesize_nft);

    let source = compile("my_coin", graph).source;
    assert!(!source.contains("struct SimpleNFT"));
    assert!(source.contains("let nft = SimpleNFT {"));
}

#[test]
fn test_compiler_from_json() {
    let compiler = Compiler::from_json("my_coin", &create_coin_graph_json())
        .expect("Failed to create compiler");
    assert_eq!(compiler.graph().init_nodes().count(), 1);

    let bad = Compiler::from_json("my_coin", "{ not json");
    assert!(matches!(bad, Err(CompileError::JsonParseError(_))));
}
