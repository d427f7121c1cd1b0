//! # Takeoff CLI
//!
//! Runs the take-off engine on input records stored as JSON.
//!
//! ```text
//! takeoff calc kitchen.json
//! takeoff calc bath.json --covering WALL_TILE --json
//! takeoff validate bath.json
//! takeoff formats
//! takeoff project casa-lima.json --dot
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use takeoff_core::format::format_decimal;
use takeoff_core::specs::MOSAIC_FORMATS;
use takeoff_core::validation::check_all;
use takeoff_core::{
    calculate_with, CoveringType, DecimalSeparator, EngineSettings, Environment, Inputs, Project, TakeoffResult,
};

#[derive(Parser, Debug)]
#[command(name = "takeoff")]
#[command(version)]
#[command(about = "Material take-off for tiles, stone, pavers and vinyl")]
#[command(arg_required_else_help(true))]
struct Cli {
    /// Engine settings file (.toml or .json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log engine decisions (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print quantities with a decimal comma
    #[arg(long, global = true, conflicts_with = "dot")]
    comma: bool,

    /// Print quantities with a decimal point
    #[arg(long, global = true)]
    dot: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the materials for one input record
    Calc {
        /// Input record (JSON)
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long, short = 'j')]
        json: bool,

        /// Override the covering type (e.g. FLOOR, WALL_TILE, MARBLE)
        #[arg(long)]
        covering: Option<String>,

        /// Override the environment (e.g. DRY, WET)
        #[arg(long)]
        environment: Option<String>,
    },

    /// Run the form validation steps and report each one
    Validate {
        /// Input record (JSON)
        input: PathBuf,
    },

    /// List the supported mosaic formats
    Formats,

    /// Calculate every room of a project and print the shopping list
    Project {
        /// Project file (JSON)
        file: PathBuf,

        /// Print the results as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => EngineSettings::load_from_file(path)?,
        None => EngineSettings::default(),
    };

    match &cli.command {
        Command::Calc {
            input,
            json,
            covering,
            environment,
        } => {
            let mut inputs = read_inputs(input)?;
            if let Some(covering) = covering {
                inputs.covering = Some(CoveringType::from_str_flexible(covering)?);
            }
            if let Some(environment) = environment {
                inputs.environment = Some(Environment::from_str_flexible(environment)?);
            }
            let result = calculate_with(&inputs, &settings)?;
            info!(items = result.items.len(), "take-off complete");
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result, separator(&cli, &settings));
            }
        }
        Command::Validate { input } => {
            let inputs = read_inputs(input)?;
            let inputs = settings.apply_defaults(&inputs);
            let mut failed = false;
            for (step, check) in check_all(&inputs) {
                let mark = if check.ok { "ok  " } else { "FAIL" };
                match &check.message {
                    Some(message) => println!("[{}] {:<18} {}", mark, step.to_string(), message),
                    None => println!("[{}] {}", mark, step),
                }
                failed |= !check.ok;
            }
            if failed {
                bail!("input record did not pass validation");
            }
        }
        Command::Formats => {
            println!(
                "{:<10} {:>12} {:>12} {:>14} {:>10}",
                "Code", "Piece (cm)", "Sheet (cm)", "Pieces/sheet", "Thick (mm)"
            );
            for format in MOSAIC_FORMATS.iter() {
                println!(
                    "{:<10} {:>12} {:>12} {:>14} {:>10}",
                    format.code,
                    format!("{}x{}", format.piece_length_cm, format.piece_width_cm),
                    format!("{}x{}", format.sheet_length_cm, format.sheet_width_cm),
                    format.pieces_per_sheet(),
                    format.thickness_mm
                );
            }
        }
        Command::Project { file, json } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read project file {}", file.display()))?;
            let mut project = Project::from_json(&content)?;
            if cli.config.is_some() {
                project.settings = settings;
            }
            debug!(rooms = project.room_count(), "project loaded");

            let takeoffs = project.calculate_rooms();
            let list = Project::shopping_list(&takeoffs);
            if *json {
                let output = serde_json::json!({ "rooms": takeoffs, "shopping_list": list });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            let sep = separator(&cli, &project.settings);
            println!("{} · {} · {}", project.meta.client, project.meta.site, project.meta.author);
            for takeoff in &takeoffs {
                println!();
                println!("== {} ==", takeoff.label);
                match (&takeoff.result, &takeoff.error) {
                    (Some(result), _) => print_result(result, sep),
                    (None, Some(err)) => println!("  skipped: {}", err),
                    (None, None) => {}
                }
            }
            println!();
            println!("== Shopping list ==");
            for item in &list {
                println!("{:<56} {:>12} {}", item.name, item.display_quantity(sep), item.unit.symbol());
            }
        }
    }
    Ok(())
}

/// Install the fmt subscriber on stderr so JSON output stays clean.
fn init_logging(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

fn read_inputs(path: &Path) -> Result<Inputs> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))?;
    let inputs = Inputs::from_json(&content).with_context(|| format!("Invalid input record in {}", path.display()))?;
    Ok(inputs)
}

fn separator(cli: &Cli, settings: &EngineSettings) -> DecimalSeparator {
    if cli.dot {
        DecimalSeparator::Dot
    } else if cli.comma {
        DecimalSeparator::Comma
    } else {
        settings.decimal_separator
    }
}

fn print_result(result: &TakeoffResult, sep: DecimalSeparator) {
    let header = &result.header;
    println!("{} · {}", header.covering, header.environment);
    println!(
        "Area {} m² · waste {}%",
        format_decimal(header.area_m2, 2, sep),
        format_decimal(header.waste_pct, 1, sep)
    );
    if let Some(joint) = header.joint_mm {
        println!("Joint {} mm", format_decimal(joint, 1, sep));
    }
    if let Some(method) = header.setting_method {
        println!("Setting method {:?}", method);
    }
    println!();
    for item in &result.items {
        println!("{:<56} {:>12} {}", item.name, item.display_quantity(sep), item.unit.symbol());
        if let Some(note) = &item.note {
            println!("    {}", note);
        }
    }
}
