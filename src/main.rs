//! cutlistkit CLI - cut lists from scene descriptions

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cutlistkit::report::render_text;
use cutlistkit::{
    default_config_path, discover_file, init_logging, load_config, CutlistConfig, Discovery,
    LengthUnit, Selection, BUILD_DATE, VERSION,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cutlistkit")]
#[command(version, about = "Cut lists for furniture models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover the parts of a scene and print the cut list
    List {
        /// Scene description (JSON)
        scene: PathBuf,
        /// Config file (.toml or .json); defaults to the user config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Top-level entity ids to include (default: everything visible)
        #[arg(short, long, value_delimiter = ',')]
        select: Vec<u64>,
        /// Override the display unit (mm, cm, m, in, ft)
        #[arg(short, long)]
        unit: Option<LengthUnit>,
        /// Sort parts by name
        #[arg(long)]
        sorted: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a config file with the default settings
    InitConfig {
        /// Output file (.toml or .json); defaults to the user config file
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!(version = VERSION, build = BUILD_DATE, "cutlistkit");

    match cli.command {
        Commands::List {
            scene,
            config,
            select,
            unit,
            sorted,
            json,
        } => {
            let mut config = load_config(config.as_deref()).context("loading config")?;
            if let Some(unit) = unit {
                config.display.unit = unit;
            }
            config.list_all_sorted |= sorted;

            let selection = if select.is_empty() {
                Selection::All
            } else {
                Selection::of(select)
            };

            let discovery = discover_file(&scene, config, &selection)
                .with_context(|| format!("processing {}", scene.display()))?;
            match discovery {
                Discovery::Parts(report) if json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Discovery::Parts(report) => print!("{}", render_text(&report)),
                Discovery::NoParts { skipped } => {
                    bail!(
                        "no parts found in the selection ({} node(s) skipped)",
                        skipped.len()
                    );
                }
            }
        }
        Commands::InitConfig { output } => {
            let path = match output {
                Some(path) => path,
                None => default_config_path()?,
            };
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
            CutlistConfig::default().save_to_file(&path)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}
