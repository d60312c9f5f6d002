use clap::Parser;
use movesketch::palette::{self, Template, TemplateKind};
use movesketch::project::Project;
use movesketch::ui::{UiEdge, UiGraph, UiNode};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Generate random MoveSketch projects for exercising the exporter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated project to
    #[arg(short, long, default_value = "generated_project.json")]
    output: String,

    /// Number of modules in the project
    #[arg(long, default_value_t = 1)]
    modules: usize,

    /// Minimum number of nodes per module
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// Maximum number of nodes per module
    #[arg(long, default_value_t = 12)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let mut project = Project::new();
    for _ in 1..cli.modules {
        project.add_module();
    }

    let names: Vec<String> = project.modules.iter().map(|m| m.name.clone()).collect();
    for name in &names {
        let count = rng.random_range(cli.min..=cli.max);
        let graph = generate_graph(&mut rng, count);
        println!(
            "-> Module '{}': {} nodes, {} edges",
            name,
            graph.nodes.len(),
            graph.edges.len()
        );
        project.replace_graph(name, &graph)?;
    }

    project.save(&cli.output)?;
    println!("Successfully generated and saved project to '{}'", cli.output);
    Ok(())
}

/// Random palette nodes, at most one init node, optionally wired to a witness.
fn generate_graph(rng: &mut impl Rng, count: usize) -> UiGraph {
    let candidates: Vec<&Template> = palette::templates()
        .iter()
        .filter(|t| t.kind != TemplateKind::Init)
        .collect();

    let mut nodes: Vec<UiNode> = Vec::with_capacity(count + 2);
    for i in 0..count {
        let Some(template) = candidates.choose(rng) else {
            break;
        };
        let id = format!("{}-gen-{}", template.kind.id_prefix(), i);
        let position = serde_json::json!({ "x": rng.random_range(0..1200), "y": rng.random_range(0..800) });
        nodes.push(template.instantiate_with_id(id, position));
    }

    let mut edges = Vec::new();
    if rng.random_bool(0.7) {
        let witness_id = "s-gen-witness".to_string();
        let mut witness = blank_struct(&witness_id);
        witness.data.label = "GEN_COIN".to_string();
        witness.data.fields = Some(Vec::new());
        nodes.push(witness);

        if let Some(init_template) = palette::find("CoinInit") {
            let init = init_template.instantiate_with_id("i-gen-init".to_string(), serde_json::Value::Null);
            edges.push(UiEdge {
                id: Some(format!("e-{}-{}", witness_id, init.id)),
                source: witness_id,
                source_handle: Some("obj-main".to_string()),
                target: init.id.clone(),
                target_handle: Some("witness-input".to_string()),
            });
            nodes.push(init);
        }
    }

    UiGraph { nodes, edges }
}

fn blank_struct(id: &str) -> UiNode {
    UiNode {
        id: id.to_string(),
        node_type: Some("structNode".to_string()),
        position: serde_json::Value::Null,
        data: Default::default(),
        hidden: false,
    }
}
