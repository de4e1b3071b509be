use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siege_board::calculate::{extract_player_series, extract_series, select_podium};
use siege_board::config::AppConfig;
use siege_board::models::{PodiumEntry, Scope, TimeSeriesPoint};
use siege_board::storage::SampleStore;
use siege_board::views::{
    boss_board, format_dps, format_last_update, player_label, BossBoard, LeaderboardTable,
};

#[derive(Parser)]
#[command(name = "siege-board")]
#[command(about = "Siege DPS leaderboards, podiums and personal bests")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./siege-board.toml")]
    config: PathBuf,

    /// Record file to load (overrides `data_file` from the config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print view models as JSON instead of tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bosses present in the data
    Bosses,

    /// List classes present in the data
    Classes,

    /// Show one leaderboard
    Leaderboard {
        /// Boss to rank (defaults to the configured boss)
        #[arg(long)]
        boss: Option<String>,

        /// Restrict to one class; omit for the combined board
        #[arg(long)]
        class: Option<String>,
    },

    /// Show the top-3 podium
    Podium {
        #[arg(long)]
        boss: Option<String>,
    },

    /// DPS-over-time series for comparison
    Series {
        #[arg(long)]
        boss: Option<String>,

        /// Player to include (repeatable; defaults to the configured comparison)
        #[arg(long = "player")]
        players: Vec<String>,

        /// Include every player for the boss
        #[arg(long, conflicts_with = "players")]
        all: bool,
    },

    /// Full dashboard: podium, combined and per-class boards
    Board {
        #[arg(long)]
        boss: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            cli.json_logs
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.json_logs)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    tracing::info!("Starting siege-board v{}", env!("CARGO_PKG_VERSION"));

    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
    let store = SampleStore::open(&data_file)
        .with_context(|| format!("failed to load samples from {}", data_file.display()))?;

    let default_boss = || config.dashboard.default_boss.clone();

    match cli.command {
        Commands::Bosses => print_list(cli.json, &store.bosses())?,

        Commands::Classes => print_list(cli.json, &store.classes())?,

        Commands::Leaderboard { boss, class } => {
            let boss = boss.unwrap_or_else(default_boss);
            let scope = match class {
                Some(class) => Scope::class(boss.as_str(), class),
                None => Scope::boss(boss.as_str()),
            };
            let table = LeaderboardTable::for_scope(&store, &scope);

            if cli.json {
                print_json(&table)?;
            } else {
                println!("{}", boss);
                print_table(&table);
            }
        }

        Commands::Podium { boss } => {
            let boss = boss.unwrap_or_else(default_boss);
            let podium = select_podium(&store, &boss);

            if cli.json {
                print_json(&podium)?;
            } else {
                print_podium(&podium);
            }
        }

        Commands::Series { boss, players, all } => {
            let boss = boss.unwrap_or_else(default_boss);
            let players = if all {
                Vec::new()
            } else if players.is_empty() {
                config.dashboard.compare_players.clone()
            } else {
                players
            };

            if let [player] = players.as_slice() {
                let points = extract_player_series(&store, &boss, player);
                if cli.json {
                    print_json(&points)?;
                } else {
                    print_series(player, &points);
                }
            } else {
                let series = extract_series(&store, &boss, &players);
                if cli.json {
                    print_json(&series)?;
                } else if series.is_empty() {
                    println!("No data for {}", boss);
                } else {
                    for (player, points) in &series {
                        print_series(player, points);
                    }
                }
            }
        }

        Commands::Board { boss } => {
            let boss = boss.unwrap_or_else(default_boss);
            let board = boss_board(&store, &boss);

            if cli.json {
                print_json(&board)?;
            } else {
                print_board(&board);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(json: bool, items: &[String]) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", item);
    }
    Ok(())
}

fn print_board(board: &BossBoard) {
    println!("=== {} ===", board.boss);
    if let Some(ts) = &board.last_update {
        println!("{}", format_last_update(ts));
    }
    println!();

    print_podium(&board.podium);
    for table in board.tables() {
        println!();
        print_table(table);
    }
}

fn print_podium(podium: &[PodiumEntry]) {
    if podium.is_empty() {
        println!("No podium yet");
        return;
    }
    for step in podium {
        println!("{}  {:<24} {:>12}", step.medal.icon(), step.player, format_dps(step.dps));
    }
}

fn print_table(table: &LeaderboardTable) {
    println!("--- {} ---", table.title);
    if table.entries.is_empty() {
        println!("(no data)");
        return;
    }

    let show_class = table.class.is_none();
    for entry in &table.entries {
        let class = if show_class {
            format!("{:<12}", entry.class.as_deref().unwrap_or("-"))
        } else {
            String::new()
        };
        println!(
            "{:>4}  {:<32} {}{:>12}",
            entry.rank,
            player_label(entry),
            class,
            format_dps(entry.dps)
        );
    }
}

fn print_series(player: &str, points: &[TimeSeriesPoint]) {
    println!("--- {} ---", player);
    for point in points {
        println!(
            "{}  {:>12}",
            point.timestamp.format("%b %d, %H:%M"),
            format_dps(point.dps)
        );
    }
}
