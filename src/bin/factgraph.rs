//! factgraph CLI: writes graph records as fact files.
//!
//! Usage:
//!   factgraph write --schema schema.yaml --output out [--nodes n.jsonl] [--edges e.jsonl]
//!   factgraph edge-types --schema schema.yaml
//!   factgraph check --schema schema.yaml [--nodes n.jsonl] [--edges e.jsonl]
//!
//! Record files are JSON Lines, one record per line:
//!   {"id": "BRCA1", "label": "gene", "properties": {...}}
//!   {"source_id": "BRCA1", "target_id": "CL:0000066", "label": "expressed_in", "properties": {...}}

use clap::{Args, Parser, Subcommand};
use factgraph::{Edge, FactWriter, Node, SchemaIndex, SchemaMapping, WriterConfig};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "factgraph",
    version,
    about = "Schema-driven graph to fact serializer"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append node and edge records to fact files
    Write(WriteArgs),
    /// Print the resolved edge-type table
    EdgeTypes {
        /// Schema mapping (YAML, or JSON by extension)
        #[arg(long)]
        schema: PathBuf,
    },
    /// Report record labels that are not declared in the schema
    Check {
        /// Schema mapping (YAML, or JSON by extension)
        #[arg(long)]
        schema: PathBuf,
        #[command(flatten)]
        records: RecordFiles,
    },
}

#[derive(Args)]
struct RecordFiles {
    /// Node record file (JSON Lines); may be repeated
    #[arg(long)]
    nodes: Vec<PathBuf>,
    /// Edge record file (JSON Lines); may be repeated
    #[arg(long)]
    edges: Vec<PathBuf>,
}

#[derive(Args)]
struct WriteArgs {
    /// Schema mapping (YAML, or JSON by extension)
    #[arg(long)]
    schema: PathBuf,
    /// Writer config file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output root directory (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Sub-directory under the output root for this batch
    #[arg(long)]
    prefix: Option<PathBuf>,
    /// Property key to leave out; may be repeated
    #[arg(long)]
    exclude: Vec<String>,
    /// Fact file extension (overrides config)
    #[arg(long)]
    extension: Option<String>,
    /// Fail instead of creating a missing prefix directory
    #[arg(long)]
    no_create_dirs: bool,
    #[command(flatten)]
    records: RecordFiles,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_index(schema: &Path) -> Result<SchemaIndex, String> {
    let mapping = SchemaMapping::from_path(schema)
        .map_err(|e| format!("Failed to load schema: {}", e))?;
    Ok(SchemaIndex::build(&mapping))
}

/// Read every record from a JSON Lines file.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, String> {
    let file = File::open(path).map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
    serde_json::Deserializer::from_reader(BufReader::new(file))
        .into_iter::<T>()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| format!("invalid record in '{}': {}", path.display(), e))
}

fn build_config(args: &WriteArgs) -> Result<WriterConfig, String> {
    let mut config = match &args.config {
        Some(path) => WriterConfig::from_path(path).map_err(|e| format!("Failed to load config: {}", e))?,
        None => WriterConfig::default(),
    };
    if let Some(output) = &args.output {
        config = config.with_output_dir(output);
    }
    if let Some(extension) = &args.extension {
        config = config.with_extension(extension);
    }
    for key in &args.exclude {
        config = config.exclude(key);
    }
    if args.no_create_dirs {
        config = config.with_create_dirs(false);
    }
    Ok(config)
}

fn cmd_write(args: &WriteArgs) -> i32 {
    let result = (|| -> Result<(), String> {
        let index = load_index(&args.schema)?;
        let config = build_config(args)?;
        let writer = FactWriter::new(index, config).map_err(|e| e.to_string())?;
        let prefix = args.prefix.as_deref();

        for path in &args.records.nodes {
            let nodes: Vec<Node> = read_records(path)?;
            let summary = writer.write_nodes(&nodes, prefix).map_err(|e| e.to_string())?;
            println!(
                "{}: {} nodes, {} facts -> {}",
                path.display(),
                summary.records,
                summary.lines,
                summary.path.display()
            );
        }
        for path in &args.records.edges {
            let edges: Vec<Edge> = read_records(path)?;
            let summary = writer.write_edges(&edges, prefix).map_err(|e| e.to_string())?;
            println!(
                "{}: {} edges, {} facts -> {}",
                path.display(),
                summary.records,
                summary.lines,
                summary.path.display()
            );
        }
        Ok(())
    })();

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_edge_types(schema: &Path) -> i32 {
    let index = match load_index(schema) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if index.edge_type_count() == 0 {
        println!("No edge types defined.");
        return 0;
    }
    println!("{:<32}  {:<24}  {:<24}  {}", "LABEL", "SOURCE", "TARGET", "OUTPUT LABEL");
    println!("{}", "-".repeat(100));
    for (label, info) in index.edge_types() {
        println!(
            "{:<32}  {:<24}  {:<24}  {}",
            label,
            info.source_type,
            info.target_type,
            info.output_label.as_deref().unwrap_or("-")
        );
    }
    0
}

fn cmd_check(schema: &Path, records: &RecordFiles) -> i32 {
    let result = (|| -> Result<usize, String> {
        let index = load_index(schema)?;
        let mut missing = 0;

        for path in &records.nodes {
            for node in read_records::<Node>(path)? {
                if !index.has_node_label(node.local_label()) {
                    println!("{}: node label '{}' not in schema", path.display(), node.label);
                    missing += 1;
                }
            }
        }
        for path in &records.edges {
            for edge in read_records::<Edge>(path)? {
                if index.edge_type(&edge.label).is_none() {
                    println!("{}: edge label '{}' not in schema", path.display(), edge.label);
                    missing += 1;
                }
            }
        }
        Ok(missing)
    })();

    match result {
        Ok(0) => {
            println!("All record labels found in schema.");
            0
        }
        Ok(missing) => {
            eprintln!("{} record(s) with undeclared labels", missing);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let code = match &cli.command {
        Commands::Write(args) => cmd_write(args),
        Commands::EdgeTypes { schema } => cmd_edge_types(schema),
        Commands::Check { schema, records } => cmd_check(schema, records),
    };
    std::process::exit(code);
}
