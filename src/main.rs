use cardforge::api;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render sales records as a grid of business cards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// CSV file with Segment,Country,Product,Discount Band,Units Sold,Sales
    /// columns. Defaults to the built-in sample.
    #[arg(global = true, short, long)]
    data: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Render(cmd::render::RenderArgs),
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚀 Initializing CardForge...");

    let records = api::load_dataset(cli.data.as_deref()).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Render(cmd::render::RenderArgs::default()));

    let result = match command {
        Commands::Render(args) => cmd::render::run(args, &records),
        Commands::Inspect(args) => cmd::inspect::run(args, &records),
    };

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}
