use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::{bfs_levels, count_faces, from_rotations, validate, EdgeStore, StoreCfg};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod report;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Inspect planar rotation systems: dump edge records, layer by BFS")]
struct Cmd {
    /// Edge slots reserved before the store starts growing
    #[arg(long, default_value_t = 16)]
    capacity: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the diagnostic line of every edge
    Dump {
        #[arg(long)]
        input: PathBuf,
    },
    /// Breadth-first levels from a root vertex
    Levels {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0)]
        root: u32,
        /// Optional JSON report path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and build revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = StoreCfg {
        initial_capacity: cmd.capacity,
        ..StoreCfg::default()
    };
    match cmd.action {
        Action::Dump { input } => dump(&input, cfg),
        Action::Levels { input, root, out } => levels(&input, root, out.as_deref(), cfg),
        Action::Report => print_report(),
    }
}

/// Store built from `input`, plus the vertex count the input declares.
fn load_store(input: &Path, cfg: StoreCfg) -> Result<(EdgeStore, usize)> {
    let rotations = load::read_rotations(input)?;
    let store = from_rotations(&rotations, cfg)
        .with_context(|| format!("building rotation system from {}", input.display()))?;
    validate(&store).context("rotation system failed validation")?;
    tracing::info!(
        input = %input.display(),
        vertices = rotations.len(),
        edges = store.size(),
        capacity = store.capacity(),
        "loaded"
    );
    Ok((store, rotations.len()))
}

fn dump(input: &Path, cfg: StoreCfg) -> Result<()> {
    let (store, _) = load_store(input, cfg)?;
    for line in store.string_lines() {
        println!("{line}");
    }
    Ok(())
}

fn levels(input: &Path, root: u32, out: Option<&Path>, cfg: StoreCfg) -> Result<()> {
    let (store, vertices) = load_store(input, cfg)?;
    let lv = bfs_levels(&store, root, vertices)?;
    let faces = count_faces(&store);
    tracing::info!(root, depth = lv.depth(), reached = lv.reached(), faces, "levels");
    for (l, size) in lv.layer_sizes.iter().enumerate() {
        println!("level {l}: {size}");
    }

    if let Some(out) = out {
        let summary = report::LevelsReport {
            code_rev: report::code_rev(),
            input: input.display().to_string(),
            root,
            vertices,
            edges: store.size(),
            faces,
            depth: lv.depth(),
            layer_sizes: lv.layer_sizes.clone(),
            level: lv.level.clone(),
        };
        report::write_json(out, &summary)?;
        tracing::info!(out = %out.display(), "report written");
    }
    Ok(())
}

fn print_report() -> Result<()> {
    let obj = serde_json::json!({
        "planar": planar::VERSION,
        "code_rev": report::code_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
