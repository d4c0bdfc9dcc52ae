use cargo_depgraph::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Analyze the dependency graph of a crates.io package
#[derive(Parser, Debug)]
#[command(name = "cargo-depgraph")]
#[command(version)]
#[command(
    about = "Dependency graph analyzer for crates.io packages",
    long_about = "Crawls the dependency graph of a published crate (or reads an offline fixture), \
                  renders it as a tree, reports diamond dependencies and cycles, and computes \
                  a load order."
)]
pub struct Args {
    /// Crate name (registry mode) or root node name (fixture mode)
    pub name: String,

    /// Exact version of the root crate; required unless --fixture is given
    #[arg(id = "crate_version", value_name = "VERSION", required_unless_present = "fixture")]
    pub version: Option<String>,

    /// Maximum depth to expand (0 = unbounded)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Read the adjacency structure from a fixture file instead of the registry
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Base URL of a crates.io-compatible API
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Path to a config file (defaults to ./cargo-depgraph.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
