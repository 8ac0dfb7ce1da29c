use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fightstats::api::state::AppState;
use fightstats::calculate::RatingEngine;
use fightstats::config::AppConfig;
use fightstats::models::{CombinationRecord, FighterRecord, WeightClassBaseline};
use fightstats::storage::{SnapshotStore, StorageConfig};

#[derive(Parser)]
#[command(name = "fightstats")]
#[command(about = "Fighter performance ratings from combat-sports tracking data")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall rating, categories, style and archetype for a fighter
    Rate {
        /// Fighter code
        code: String,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Cage, clinch and ground movement ratings for a fighter
    Movement {
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Record splits, signature strikes and takedown usage
    Breakdown { code: String },

    /// Opponent difficulty for every tracked fight
    Difficulty {
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Per-corner stats for a single fight
    Fight {
        /// Fight code
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Most used and most absorbed combinations
    Combos {
        code: String,

        /// Keep only combinations with at least this many punches
        #[arg(long, default_value_t = 0)]
        min_punches: usize,

        #[arg(long)]
        json: bool,
    },

    /// Comparison rates for a weight class
    Baseline {
        /// Weight class name (case-insensitive)
        name: String,
    },

    /// Rate every fighter and append reports to derived/ratings.jsonl
    Derive {
        /// Compute and summarise without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = if cli.config.exists() {
        AppConfig::from_file(&cli.config)
            .with_context(|| format!("loading {}", cli.config.display()))?
    } else {
        AppConfig::default()
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

fn load_fighter(
    store: &SnapshotStore,
    code: &str,
) -> Result<(FighterRecord, Option<WeightClassBaseline>)> {
    let fighter = store
        .find_fighter(code)?
        .ok_or_else(|| anyhow!("No fighter with code {}", code))?;
    let baseline = store.baseline_for(&fighter)?;
    Ok((fighter, baseline))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(cli.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!cli.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting fightstats v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let store = SnapshotStore::new(StorageConfig::new(config.data_dir.clone()));
    let engine = RatingEngine::new(config.reference);

    match cli.command {
        Commands::Rate { code, json } => {
            let (fighter, baseline) = load_fighter(&store, &code)?;
            let overall = engine.overall(&fighter, baseline.as_ref());

            if json {
                return print_json(&overall);
            }

            let c = &overall.categories;
            println!("=== {} ({}) ===", fighter.display_name(), fighter.fighter_code);
            if let Some(class) = &baseline {
                println!("Weight class:  {}", class.name);
            } else {
                println!("Weight class:  (no baseline)");
            }
            println!("Overall:       {}", overall.rating);
            println!("Style:         {}", overall.style);
            println!("Archetype:     {}", overall.archetype);
            println!("Bonus:         +{}", overall.specialist_bonus);
            println!();
            println!("Striking:      {}", c.striking);
            println!("Takedowns:     {}", c.takedowns);
            println!("Defense:       {}", c.defense);
            println!("Aggression:    {}", c.aggression);
            println!("Finishes:      {}", c.finishes);
            println!("Position:      {}", c.position);
            println!();
            println!("Strengths:     {}", overall.strengths.join(", "));
            println!("Weaknesses:    {}", overall.weaknesses.join(", "));
        }
        Commands::Movement { code, json } => {
            let (fighter, baseline) = load_fighter(&store, &code)?;
            let movement = engine.movement(&fighter, baseline.as_ref());

            if json {
                return print_json(&movement);
            }

            println!("=== {} movement ===", fighter.display_name());
            println!("Cage:          {}", movement.cage);
            println!("Clinch:        {}", movement.clinch);
            println!("Ground:        {}", movement.ground);
            println!("Grade:         {}", movement.overall_movement_grade);
            println!("Dominant:      {}", movement.dominant);
            println!("Archetype:     {}", movement.archetype);
        }
        Commands::Breakdown { code } => {
            let (fighter, baseline) = load_fighter(&store, &code)?;
            print_json(&engine.breakdown(&fighter, baseline.as_ref()))?;
        }
        Commands::Difficulty { code, json } => {
            let (fighter, baseline) = load_fighter(&store, &code)?;
            let fights = store.fights_for(&fighter.fighter_code)?;
            let opponents = store.opponents_of(&fighter.fighter_code, &fights)?;
            tracing::info!(
                "Scoring {} fights against {} known opponents",
                fights.len(),
                opponents.len()
            );

            let combined =
                engine.difficulty(&fighter.fighter_code, &fights, &opponents, baseline.as_ref());

            if json {
                return print_json(&combined);
            }

            println!("=== {} opponent difficulty ===", fighter.display_name());
            for fight in &combined.fights {
                let method = fight.method.map(|m| m.code()).unwrap_or("?");
                println!(
                    "  {:<10} vs {:<10} {} {:>3} R{} -> {:>3} ({})",
                    fight.fight_code,
                    fight.opponent_code,
                    if fight.won { "W" } else { "L" },
                    method,
                    fight.actual_rounds,
                    fight.score,
                    fight.description,
                );
            }
            println!();
            println!("Fights scored: {}", combined.total_fights);
            println!("Record:        {}-{}", combined.wins, combined.losses);
            println!("Average:       {} ({})", combined.average_score, combined.description);
            println!(
                "Wins avg:      {}   Losses avg: {}",
                combined.win_breakdown.average_score, combined.loss_breakdown.average_score
            );
        }
        Commands::Fight { code, json } => {
            let fight = store
                .find_fight(&code)?
                .ok_or_else(|| anyhow!("No fight with code {}", code))?;
            let fighter_a = store.find_fighter(&fight.fighter_a)?;
            let fighter_b = store.find_fighter(&fight.fighter_b)?;
            let baseline = store.baseline_for_fight(&fight, fighter_a.as_ref())?;
            let report =
                engine.fight_report(&fight, fighter_a.as_ref(), fighter_b.as_ref(), baseline.as_ref());

            if json {
                return print_json(&report);
            }

            let method = report.method.map(|m| m.code()).unwrap_or("?");
            println!("=== Fight {} ===", report.fight_code);
            println!(
                "Result:        {} R{} ({:.1} min)",
                method, report.actual_rounds, report.minutes
            );
            println!("Class pace:    {:.2}/min", report.class_strikes_per_minute);
            for corner in [&report.fighter_a, &report.fighter_b] {
                println!();
                println!(
                    "{} {}",
                    corner.fighter_name.as_deref().unwrap_or(&corner.fighter_code),
                    if corner.won { "(W)" } else { "(L)" }
                );
                if !corner.stats_recorded {
                    println!("  (no stats recorded)");
                    continue;
                }
                println!(
                    "  Strikes:     {} ({:.2}/min, {:+.0}% vs class)",
                    corner.strikes_landed, corner.strikes_per_minute, corner.class_difference_pct
                );
                println!(
                    "  Takedowns:   {}/{} ({:.0}%)",
                    corner.takedowns_landed, corner.takedown_attempts, corner.takedown_success_pct
                );
                println!(
                    "  Ratings:     striking {}  takedowns {}",
                    corner.ratings.striking, corner.ratings.takedowns
                );
                for insight in &corner.insights {
                    println!("  {:<18} {:>6.1} ({:?})", insight.label, insight.value, insight.trend);
                }
            }
        }
        Commands::Combos {
            code,
            min_punches,
            json,
        } => {
            let (fighter, _) = load_fighter(&store, &code)?;
            let record = store
                .combinations_for(&fighter.fighter_code)?
                .unwrap_or_else(|| CombinationRecord::new(&fighter.fighter_code));
            let analysis = engine.combos(&record, min_punches);

            if json {
                return print_json(&analysis);
            }

            for (title, side) in [("Thrown", &analysis.thrown), ("Absorbed", &analysis.absorbed)] {
                println!("=== {} {} ===", fighter.display_name(), title.to_lowercase());
                if side.top.is_empty() {
                    println!("  No Data");
                }
                for (i, combo) in side.top.iter().enumerate() {
                    println!(
                        "  {:>2}. {:>5.1}%  x{:<4} {}",
                        i + 1,
                        combo.percentage,
                        combo.count,
                        combo.combo
                    );
                }
                println!();
            }
        }
        Commands::Baseline { name } => {
            let class = store
                .find_weight_class(&name)?
                .ok_or_else(|| anyhow!("No weight class named {}", name))?;
            print_json(&engine.baseline_rates(Some(&class)))?;
        }
        Commands::Derive { dry_run } => {
            tracing::info!("Computing ratings for every fighter...");
            let fighters = store.fighters()?;
            let classes = store.weight_classes()?;

            let reports: Vec<_> = fighters
                .iter()
                .map(|fighter| {
                    let baseline = fighter
                        .weight_class
                        .as_deref()
                        .and_then(|name| classes.iter().find(|c| c.matches_name(name)));
                    if baseline.is_none() {
                        tracing::warn!(
                            "No baseline for {} ({:?}); using neutral comparisons",
                            fighter.fighter_code,
                            fighter.weight_class
                        );
                    }
                    engine.report(fighter, baseline)
                })
                .collect();

            let with_baseline = reports.iter().filter(|r| r.baseline_found).count();
            println!("Fighters rated:   {}", reports.len());
            println!("With baseline:    {}", with_baseline);

            if dry_run {
                println!("\n(dry run - no data written to disk)");
            } else {
                let written = store.append_reports(&reports)?;
                println!(
                    "Reports written:  {} -> {}",
                    written,
                    store.config().ratings_path().display()
                );
            }
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::from_config(&config);
            let app = fightstats::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
