//! Command line front end for the cellular automaton simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_modes::{
    config::{CliOverrides, OutputFormat, Settings},
    control::parse_key_script,
    game_of_life::RuleFamily,
    presentation::Palette,
    session::{simulate, survey},
    utils::{ColorOutput, ReportFormatter},
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "life_modes")]
#[command(about = "Two-state cellular automaton simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one world headlessly
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Rule family: index, name or rule string (overrides config)
        #[arg(short, long)]
        rule: Option<RuleFamily>,

        /// Initial live density (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generation budget (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Screen width in display units (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Screen height in display units (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Cell size in display units (overrides config)
        #[arg(long)]
        cell_size: Option<usize>,

        /// Output format: text, json or visual (overrides config)
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Comma separated keys replayed before running, e.g. "m,down,enter"
        #[arg(short, long)]
        keys: Option<String>,

        /// Print every frame
        #[arg(long)]
        show_frames: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run every rule family from the same starting grid
    Survey {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generation budget (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Cell size in display units (overrides config)
        #[arg(long)]
        cell_size: Option<usize>,

        /// Output format: text or json (overrides config)
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the rule families and their transition tables
    Rules,

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "visual" => Ok(OutputFormat::Visual),
        other => Err(format!("unknown format '{}', expected text, json or visual", other)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rule,
            density,
            seed,
            generations,
            width,
            height,
            cell_size,
            format,
            keys,
            show_frames,
            verbose,
        } => {
            init_tracing(verbose);
            let overrides = CliOverrides {
                rule_family: rule,
                density,
                seed,
                generations,
                screen_width: width,
                screen_height: height,
                cell_size,
                format,
            };
            run_command(config, overrides, keys, show_frames, verbose)
        }
        Commands::Survey {
            config,
            seed,
            generations,
            cell_size,
            format,
            verbose,
        } => {
            init_tracing(verbose);
            let overrides = CliOverrides {
                seed,
                generations,
                cell_size,
                format,
                ..Default::default()
            };
            survey_command(config, overrides)
        }
        Commands::Rules => {
            init_tracing(false);
            print!("{}", ReportFormatter::format_rules_table());
            Ok(())
        }
        Commands::Setup { directory, force } => {
            init_tracing(false);
            setup_command(directory, force)
        }
    }
}

/// Load the config file if present, apply overrides and validate
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path.to_path_buf())
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    keys: Option<String>,
    show_frames: bool,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let keys = match keys {
        Some(script) => parse_key_script(&script).context("Failed to parse key script")?,
        None => Vec::new(),
    };

    if verbose {
        let layout = settings.layout()?;
        println!("Configuration:");
        println!("  Rule family: {}", settings.simulation.rule_family);
        println!("  Grid: {}x{} cells of size {}", layout.columns, layout.rows, layout.cell_size);
        println!("  Initial density: {}", settings.simulation.initial_density);
        println!("  Generations: {}", settings.simulation.generations);
        println!();
    }

    let format = settings.output.format;
    let show_frames = show_frames || settings.output.show_frames || format == OutputFormat::Visual;
    let palette = Palette::hue_wheel();

    println!("{}", ColorOutput::info("▶ Running simulation..."));
    let start_time = Instant::now();
    let result = simulate(&settings, &keys, |world| {
        if !show_frames {
            return;
        }
        println!("Generation {}:", world.generation());
        match format {
            OutputFormat::Visual => print!("{}", ReportFormatter::format_world_visual(world, &palette)),
            OutputFormat::Text | OutputFormat::Json => {
                print!("{}", ReportFormatter::format_grid_compact(world.grid()))
            }
        }
    });
    let report = match result {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{}", ColorOutput::error(&format!("❌ Simulation failed: {:#}", error)));
            return Err(error.context("Simulation failed"));
        }
    };
    info!(seconds = start_time.elapsed().as_secs_f64(), "simulation complete");

    match format {
        OutputFormat::Json => println!("{}", report.to_json().context("Failed to serialize report")?),
        OutputFormat::Text | OutputFormat::Visual => println!("\n{}", ReportFormatter::format_report(&report)),
    }

    if report.died_out() {
        println!("{}", ColorOutput::warning("The grid died out"));
    } else {
        println!("{}", ColorOutput::success("✅ Run complete"));
    }

    Ok(())
}

fn survey_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    println!("{}", ColorOutput::info("🔬 Surveying all rule families..."));
    let start_time = Instant::now();
    let reports = survey(&settings).context("Survey failed")?;

    match settings.output.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).context("Failed to serialize survey")?;
            println!("{}", json);
        }
        OutputFormat::Text | OutputFormat::Visual => {
            println!("\n{}", ReportFormatter::format_survey_summary(&reports));
        }
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Surveyed {} families in {:.3}s",
            reports.len(),
            start_time.elapsed().as_secs_f64()
        ))
    );
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up configuration..."));

    let config_dir = directory.join("config");
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Small torus that fits a terminal
    let mut terminal_config = Settings::default();
    terminal_config.display.screen_width = 480;
    terminal_config.display.screen_height = 280;
    terminal_config.display.cell_size = 8;
    terminal_config.simulation.seed = Some(42);
    terminal_config.simulation.generations = 60;
    terminal_config.output.format = OutputFormat::Visual;
    terminal_config.to_file(&examples_dir.join("terminal.yaml"))?;

    // Dense Day & Night start
    let mut day_night_config = Settings::default();
    day_night_config.simulation.rule_family = RuleFamily::DayAndNight;
    day_night_config.simulation.initial_density = 0.5;
    day_night_config.simulation.generations = 500;
    day_night_config.to_file(&examples_dir.join("day_night.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/examples/terminal.yaml");
    println!("3. Compare rules: cargo run -- survey --generations 100");

    Ok(())
}
