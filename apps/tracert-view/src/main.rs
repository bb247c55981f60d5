mod source;
mod table;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use source::FileNodeSource;
use std::fs;
use std::path::PathBuf;
use tracert_hops::hop_sequence;
use tracert_model::{TraceParams, TracertResponse};
use tracert_ui::{initialize, Dom, MemoryDom, SelectorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tracert-view", version, about = "Aggregated traceroute viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Hops(HopsArgs),
    Groups(GroupsArgs),
}

#[derive(Args)]
#[command(about = "Print a saved /api/tracert result hop by hop")]
struct HopsArgs {
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    desc: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
#[command(about = "Render the group selector from a saved /api/nodes body")]
struct GroupsArgs {
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Click this option after rendering.
    #[arg(long)]
    select: Option<String>,

    /// Print the hop data request for the selected group.
    #[arg(long)]
    dst: Option<String>,

    #[arg(long, default_value_t = 0)]
    node_num: i32,

    #[arg(long, default_value = "group")]
    name: String,

    #[arg(long, default_value = "All")]
    all_label: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hops(args) => run_hops(args),
        Commands::Groups(args) => run_groups(args),
    }
}

fn run_hops(args: HopsArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.in_path)
        .with_context(|| format!("failed to read input {:?}", args.in_path))?;
    let response: TracertResponse = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse tracert result {:?}", args.in_path))?;
    let hops = response
        .data
        .ok_or_else(|| anyhow!("tracert result {:?} carries no hop data", args.in_path))?;

    let records = hop_sequence(&hops, args.desc)?;
    tracing::info!(ttls = hops.len(), records = records.len(), "loaded hop map");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", table::render_hop_table(&records));
    }
    Ok(())
}

fn run_groups(args: GroupsArgs) -> Result<()> {
    let config = SelectorConfig {
        radio_name: args.name.clone(),
        radio_id: args.name,
        all_label: args.all_label,
        ..SelectorConfig::default()
    };
    let dom = MemoryDom::new();
    let container = dom.create_element("div", &config.container_id);
    let source = FileNodeSource::new(args.in_path);

    let selector = pollster::block_on(initialize(&source, &dom, container, config))?;

    if let Some(wanted) = &args.select {
        let option = selector
            .options()
            .iter()
            .find(|option| &option.value == wanted)
            .ok_or_else(|| anyhow!("no option named {wanted:?}"))?;
        dom.click(&option.element);
        if let Some(selection) = selector.selection() {
            tracing::info!(selection = %selection, "selected group");
        }
    }

    for option in selector.options() {
        let mark = if dom.is_checked(&option.element) { "x" } else { " " };
        println!("({mark}) {}", option.value);
    }

    if let Some(dst) = &args.dst {
        let selection = selector
            .selection()
            .ok_or_else(|| anyhow!("no option is checked"))?;
        let params = TraceParams::for_selection(dst, &selection, args.node_num);
        println!("{}", serde_json::to_string_pretty(&params)?);
    }
    Ok(())
}
