//! Fooddash CLI - Command-line interface for the Food Waste Management Dashboard

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use fooddash::config::{self, DashboardConfig};
use fooddash::dashboard::{self, Question, Tab};
use fooddash::ui::{self, Icons, Spinner};
use fooddash::{Session, Table};
use owo_colors::OwoColorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fooddash")]
#[command(version)]
#[command(about = "Food Waste Management Dashboard - reporting over providers, receivers, listings and claims")]
#[command(long_about = r#"
Fooddash loads four CSV datasets into a local SQLite file and answers a
fixed set of questions about them:
  • How many providers and receivers are there in each city?
  • Which receivers claim the most food?
  • What share of claims are completed, pending or canceled?

Example usage:
  fooddash --data-dir ./data load
  fooddash dashboard --tab claims
  fooddash contacts --city "New Jessica"
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Directory holding providers.csv, receivers.csv, food_listings.csv and claims.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Load the CSV sources into the database, replacing each table
    Load,

    /// Show the four summary counts
    Summary,

    /// Render one dashboard tab, or all of them
    Dashboard {
        /// Tab to render (home, providers, listings, claims, insights)
        #[arg(short, long)]
        tab: Option<String>,

        /// City for the provider contact lookup
        #[arg(long)]
        city: Option<String>,
    },

    /// Answer a single dashboard question
    Query {
        /// Question name, e.g. top-receivers (use --list to see all)
        name: Option<String>,

        /// City for provider-contacts
        #[arg(long)]
        city: Option<String>,

        /// List available questions
        #[arg(short, long)]
        list: bool,
    },

    /// Contact details of providers in a city
    Contacts {
        /// City name (exact match)
        #[arg(long)]
        city: String,
    },

    /// Print a whole table
    Show {
        /// Table name (providers, receivers, food_listings, claims)
        table: String,
    },

    /// Serve the dashboard as a JSON API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    fn is_human(&self) -> bool {
        *self == OutputMode::Human
    }
}

fn emit_success<T: Serialize>(mode: OutputMode, command: &str, data: T) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        let envelope = serde_json::json!({
            "ok": true,
            "command": command,
            "data": data,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let file = config::load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        if file.is_none() {
            anyhow::bail!("config file not found: {}", path.display());
        }
    }
    Ok(file
        .unwrap_or_default()
        .with_overrides(cli.database.clone(), cli.data_dir.clone()))
}

/// Write the default config, honouring `--config`, `--database` and `--data-dir`
fn init_config(cli: &Cli, force: bool) -> anyhow::Result<(PathBuf, DashboardConfig)> {
    let path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let defaults = DashboardConfig {
        database: Some(cli.database.clone().unwrap_or_else(|| PathBuf::from(config::DEFAULT_DATABASE))),
        data_dir: Some(cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))),
        ..Default::default()
    };
    config::write_config(&path, &defaults, force)?;
    Ok((path, defaults))
}

fn start_session(config: &DashboardConfig, mode: OutputMode) -> anyhow::Result<Session> {
    let spinner = mode
        .is_human()
        .then(|| Spinner::new(&format!("Loading {}", config.database_path().display())));
    let session = Session::start(config)?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    for failed in session.report().failures() {
        tracing::warn!("Table {} unavailable for this session", failed.table);
    }
    Ok(session)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    match &cli.command {
        Commands::Init { force } => {
            let (path, defaults) = init_config(&cli, *force)?;
            if mode.is_human() {
                ui::success(&format!("Wrote {}", path.display()));
            }
            emit_success(mode, "init", &defaults)?;
        }

        Commands::Load => {
            let config = resolve_config(&cli)?;
            let sources = config.sources();
            if sources.is_empty() {
                anyhow::bail!("no sources configured (pass --data-dir or set [sources] in the config)");
            }
            let session = start_session(&config, mode)?;
            if mode.is_human() {
                ui::header(&format!("Loading into {}", config.database_path().display()));
                ui::load_report(session.report());
                let stats = session.store().stats()?;
                println!("{} {}", Icons::STATS, stats);
            }
            emit_success(mode, "load", session.report())?;
        }

        Commands::Summary => {
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            let counts = session.catalog().summary_counts()?;
            if mode.is_human() {
                ui::banner(
                    &format!("{}", "Food Waste Management Dashboard".bold()),
                    &format!("{} {}", Icons::DATABASE, config.database_path().display()),
                );
                ui::tiles(&counts);
            }
            emit_success(mode, "summary", counts)?;
        }

        Commands::Dashboard { tab, city } => {
            let tabs: Vec<Tab> = match tab {
                Some(t) => vec![t.parse()?],
                None => Tab::all().to_vec(),
            };
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            let catalog = session.catalog();
            let views: Vec<_> = tabs
                .into_iter()
                .map(|t| dashboard::render_tab(&catalog, t, city.as_deref()))
                .collect();
            if mode.is_human() {
                for view in &views {
                    ui::tab(view);
                }
            }
            emit_success(mode, "dashboard", &views)?;
        }

        Commands::Query { name, city, list } => {
            let Some(name) = name.as_deref().filter(|_| !*list) else {
                if mode.is_human() {
                    ui::section("Questions");
                    for q in Question::all() {
                        ui::summary_row(&format!("{:<26}", q.as_str()), q.title());
                    }
                }
                let names: Vec<_> = Question::all().iter().map(|q| q.as_str()).collect();
                return emit_success(mode, "query", names);
            };
            let question: Question = name.parse()?;
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            let panel = question.panel(&session.catalog(), city.as_deref());
            if mode.is_human() {
                ui::panel(&panel);
            }
            emit_success(mode, "query", &panel)?;
        }

        Commands::Contacts { city } => {
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            let contacts = session.catalog().provider_contacts(city)?;
            if mode.is_human() {
                ui::section(&format!("Providers in {}", city));
                if contacts.is_empty() {
                    ui::no_data("No providers found");
                }
                for c in &contacts {
                    println!("  {} {} {}", Icons::PHONE, c.name.bold(), c.contact);
                }
            }
            emit_success(mode, "contacts", &contacts)?;
        }

        Commands::Show { table } => {
            let table: Table = table.parse()?;
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            match dashboard::snapshot(session.store(), table) {
                Ok(rs) => {
                    if mode.is_human() {
                        ui::section(table.label());
                        println!("{}", ui::result_table(&rs));
                        ui::summary_row("Rows:", &rs.len().to_string());
                    }
                    emit_success(mode, "show", &rs)?;
                }
                Err(e @ fooddash::Error::NoData(_)) => {
                    if mode.is_human() {
                        ui::no_data(&e.to_string());
                        return Ok(());
                    }
                    return Err(e.into());
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Serve { port } => {
            let config = resolve_config(&cli)?;
            let session = start_session(&config, mode)?;
            if mode.is_human() {
                ui::load_report(session.report());
            }
            fooddash::server::start_server(*port, session).await?;
        }
    }

    Ok(())
}
