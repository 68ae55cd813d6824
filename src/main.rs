//! Gateviz - logic circuit visualizer
//!
//! Reads a circuit from stdin (or a file) and renders it with Graphviz.
//!
//! # Usage
//!
//! ```bash
//! gateviz < input.txt
//! gateviz input.txt -T svg -o adder.gv
//! ```

use std::path::PathBuf;

use clap::Parser;
use gateviz::{
    dsl,
    error::Result,
    render::{DEFAULT_FORMAT, DEFAULT_PROGRAM, DEFAULT_SOURCE_PATH},
    Digraph, GraphvizRenderer, RenderOptions, Renderer,
};

/// Render a gate-level circuit description as a Graphviz graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuit description file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Path of the DOT source file; the image is written beside it
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    output: PathBuf,

    /// Image format passed to `dot -T`
    #[arg(short = 'T', long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Graphviz executable
    #[arg(long = "dot", value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    program: String,

    /// Only write the DOT source, do not run Graphviz
    #[arg(long)]
    source_only: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Parse the whole circuit before touching the output files
    let ast = match &args.input {
        Some(path) => dsl::parse_file(path)?,
        None => dsl::parse_reader(std::io::stdin().lock())?,
    };

    let graph = Digraph::from_ast(&ast);

    let renderer = GraphvizRenderer::new(RenderOptions {
        source_path: args.output,
        format: args.format,
        program: args.program,
        source_only: args.source_only,
    });
    renderer.render(&graph)?;

    Ok(())
}
