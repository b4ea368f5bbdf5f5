mod commands;
mod display;
mod input;
mod logging;
mod output;
mod view;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::positioning::{CounterArgs, MatrixArgs};
use commands::roi::{ImpactArgs, RoiArgs, SweepArgs};
use view::{Section, ViewState};

/// ROI projection and competitive positioning for AI-assisted fraud investigation
#[derive(Parser)]
#[command(
    name = "fraud-roi",
    version,
    about = "ROI projection and competitive positioning for AI-assisted fraud investigation",
    long_about = "Projects the cost of false-positive alert workload on a fraud analyst team \
                  and the savings from agent-assisted investigation, with exact decimal \
                  arithmetic. Also prints the approach comparison matrix, counter-positioning \
                  and the 30-day plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Project false-positive cost and agent savings for a team
    Roi(RoiArgs),
    /// Summarise freed capacity as redeployable analysts or recovered hours
    Impact(ImpactArgs),
    /// Sweep one input across its range, holding the others fixed
    Sweep(SweepArgs),
    /// Score manual, rules, ML and agent approaches across buyer attributes
    Matrix(MatrixArgs),
    /// Show counter-positioning against each incumbent approach
    Counter(CounterArgs),
    /// Show the 30-day plan
    Plan,
    /// Show the industry benchmarks behind the model
    Benchmarks,
    /// Print version information
    Version,
}

impl Commands {
    fn section(&self) -> Option<Section> {
        match self {
            Commands::Roi(_) | Commands::Impact(_) | Commands::Sweep(_) => Some(Section::Roi),
            Commands::Matrix(_) | Commands::Counter(_) => Some(Section::Positioning),
            Commands::Plan | Commands::Benchmarks => Some(Section::Plan),
            Commands::Version => None,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut view = ViewState::default();
    if let Some(section) = cli.command.section() {
        view.select_section(section);
        tracing::debug!(?section, "section selected");
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Roi(args) => commands::roi::run_roi(args),
        Commands::Impact(args) => commands::roi::run_impact(args),
        Commands::Sweep(args) => commands::roi::run_sweep(args),
        Commands::Matrix(args) => commands::positioning::run_matrix(args, &mut view),
        Commands::Counter(args) => commands::positioning::run_counter(args, &mut view),
        Commands::Plan => commands::content::run_plan(),
        Commands::Benchmarks => commands::content::run_benchmarks(),
        Commands::Version => {
            println!("fraud-roi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
