use clap::{Parser, Subcommand};
use movesketch::compiler::ModulePlan;
use movesketch::import;
use movesketch::palette;
use movesketch::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Compile MoveSketch projects into Sui Move packages
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export a module of a project as `sources/<module>.move` and `Move.toml`
    Export {
        /// Path to the project JSON file
        project: String,
        /// Module to export (defaults to the first module)
        #[arg(short, long)]
        module: Option<String>,
        /// Output package directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// JSON file overriding code generation defaults
        #[arg(short, long)]
        defaults: Option<String>,
        /// Print the source and manifest instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Install an import response (the oracle's JSON answer) into a project
    Import {
        /// Path to the oracle response
        response: String,
        /// Project file to update (created when missing)
        #[arg(short, long, default_value = "move_project.json")]
        project: String,
        /// Module whose canvas is replaced (defaults to the first module)
        #[arg(short, long)]
        module: Option<String>,
    },
    /// Report the resolved witness and function intents of every module
    Check {
        /// Path to the project JSON file
        project: String,
    },
    /// List the built-in node templates
    Palette,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Export {
            project,
            module,
            out,
            defaults,
            stdout,
        } => handle_export(&project, module.as_deref(), &out, defaults.as_deref(), stdout),
        Commands::Import {
            response,
            project,
            module,
        } => handle_import(&response, &project, module.as_deref()),
        Commands::Check { project } => handle_check(&project),
        Commands::Palette => {
            handle_palette();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn select_module<'a>(project: &'a Project, name: Option<&str>) -> Result<&'a ModuleTab> {
    match name {
        Some(name) => Ok(project.module(name)?),
        None => project
            .modules
            .first()
            .ok_or_else(|| "project contains no modules".into()),
    }
}

fn handle_export(
    project_path: &str,
    module: Option<&str>,
    out: &Path,
    defaults_path: Option<&str>,
    stdout: bool,
) -> Result<()> {
    let start = Instant::now();
    let project = Project::from_file(project_path)?;
    let module = select_module(&project, module)?;
    let defaults = match defaults_path {
        Some(path) => CodegenDefaults::from_file(path)?,
        None => CodegenDefaults::default(),
    };

    let package = module.export(&defaults)?;

    if stdout {
        println!("{}", package.source);
        println!();
        print!("{}", package.manifest);
    } else {
        let sources = out.join("sources");
        fs::create_dir_all(&sources)?;
        let source_path = sources.join(format!("{}.move", package.module_name));
        fs::write(&source_path, &package.source)?;
        fs::write(out.join("Move.toml"), &package.manifest)?;
        info!("Wrote {}", source_path.display());
        info!("Wrote {}", out.join("Move.toml").display());
    }
    info!(
        "Exported module '{}' in {:?}",
        package.module_name,
        start.elapsed()
    );
    Ok(())
}

fn handle_import(response_path: &str, project_path: &str, module: Option<&str>) -> Result<()> {
    let response = fs::read_to_string(response_path)?;
    let imported = import::accept_response(&response)?;

    let mut project = if Path::new(project_path).exists() {
        Project::from_file(project_path)?
    } else {
        warn!("Project '{}' not found, starting a new one", project_path);
        Project::new()
    };
    let target = select_module(&project, module)?.name.clone();
    project.replace_graph(&target, &imported.ui)?;
    project.save(project_path)?;

    println!(
        "Imported {} nodes and {} edges ({} inferred) into module '{}'",
        imported.ui.nodes.len(),
        imported.ui.edges.len(),
        imported.inferred_edges,
        target
    );
    Ok(())
}

fn handle_check(project_path: &str) -> Result<()> {
    let project = Project::from_file(project_path)?;
    for module in &project.modules {
        let graph = module.graph()?.into_graph()?;
        match Compiler::builder(&module.name, graph).build().plan() {
            Ok(plan) => print_plan(&plan),
            Err(e) => println!("{}: error: {}", module.name, e),
        }
    }
    Ok(())
}

fn print_plan(plan: &ModulePlan) {
    println!("{}:", plan.module_name);
    println!("  witness: {} ({:?})", plan.witness.name, plan.witness.source);
    println!("  structs: {}", plan.structs.len());
    println!("  init: {}", if plan.init.is_some() { "yes" } else { "no" });
    for function in &plan.functions {
        println!("  fun {} -> {}", function.name, function.intent);
    }
}

fn handle_palette() {
    let mut category = "";
    for template in palette::templates() {
        if template.category != category {
            category = template.category;
            println!("{}", category);
        }
        let imported = if template.is_imported { " (imported)" } else { "" };
        println!(
            "  {:<24} {:<10} {}{}",
            template.label,
            format!("{:?}", template.kind),
            template.description,
            imported
        );
    }
}
