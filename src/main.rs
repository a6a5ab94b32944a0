//! Wellcheck CLI
//!
//! Command-line front end for the wellness dashboard:
//! - Show the stats panel and every tab
//! - List mood entries, journal entries, activities and goals
//! - Log new records
//! - Generate a default config file

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wellcheck::config::{generate_default_config, Config, LoggingConfig};
use wellcheck::dashboard::Lists;
use wellcheck::{
    render_text, Activity, ApiClient, DashboardClient, Entity, EntityKind, FormValues, Goal,
    JournalEntry, ListQuery, ListState, Listed, MoodEntry, StatsPanel, ToastKind,
};

#[derive(Parser)]
#[command(name = "wellcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wellness check-ins from the terminal")]
#[command(long_about = "Wellcheck tracks mood, journal entries, activities and goals.\nIt talks to a wellness backend over its REST API.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the stats panel and every tab
    Dashboard,

    /// Show the stats panel
    Stats,

    /// Mood check-ins
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Activities
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Copy)]
pub struct Paging {
    /// Records to skip
    #[arg(long)]
    pub skip: Option<u32>,
    /// Maximum records to return
    #[arg(long)]
    pub limit: Option<u32>,
}

impl Paging {
    fn query(self) -> ListQuery {
        ListQuery {
            skip: self.skip,
            limit: self.limit,
            include_completed: None,
        }
    }
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// List mood entries
    List {
        #[command(flatten)]
        paging: Paging,
    },
    /// Log a mood check-in
    Add {
        /// Overall mood (1-10)
        #[arg(long)]
        level: i64,
        /// Energy level (1-10)
        #[arg(long)]
        energy: Option<i64>,
        /// Stress level (1-10)
        #[arg(long)]
        stress: Option<i64>,
        /// Hours of sleep
        #[arg(long)]
        sleep: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// List journal entries
    List {
        #[command(flatten)]
        paging: Paging,
    },
    /// Write a journal entry
    Add {
        #[arg(long)]
        content: String,
        #[arg(long)]
        title: Option<String>,
        /// Mood before writing (1-10)
        #[arg(long)]
        before: Option<i64>,
        /// Mood after writing (1-10)
        #[arg(long)]
        after: Option<i64>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// List activities
    List {
        #[command(flatten)]
        paging: Paging,
    },
    /// Log an activity
    Add {
        /// Activity type (meditation, exercise, reading, ...)
        #[arg(long = "type")]
        activity_type: String,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<i64>,
        #[arg(long)]
        description: Option<String>,
        /// Mood impact (-5 to +5)
        #[arg(long, allow_negative_numbers = true)]
        impact: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// List goals
    List {
        #[command(flatten)]
        paging: Paging,
        /// Hide completed goals
        #[arg(long)]
        active_only: bool,
    },
    /// Create a goal
    Add {
        #[arg(long)]
        title: String,
        /// Goal type (daily, weekly, monthly, long_term)
        #[arg(long = "type")]
        goal_type: String,
        #[arg(long)]
        description: Option<String>,
        /// Target value
        #[arg(long)]
        target: Option<f64>,
        /// Progress so far
        #[arg(long)]
        current: Option<f64>,
        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    // Config search runs before the real subscriber exists
    let mut config = tracing::subscriber::with_default(bootstrap_subscriber(), || {
        match &cli.config {
            Some(path) => Config::load_with_env(path),
            None => Ok(Config::load_default()),
        }
    })?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(api = %config.api.base_url, "Wellcheck v{}", env!("CARGO_PKG_VERSION"));

    let settings = config.dashboard_settings()?;
    let client = ApiClient::new(&config.api.base_url)?;
    let mut dashboard = DashboardClient::new(client, settings);
    let format = cli.format;

    match cli.command {
        Commands::Dashboard => {
            dashboard.start().await;
            print_dashboard(&dashboard, format)?;
        }

        Commands::Stats => {
            dashboard.load_stats().await;
            print_stats(dashboard.stats(), format)?;
        }

        Commands::Mood { action } => match action {
            MoodAction::List { paging } => {
                list::<MoodEntry>(&mut dashboard, paging.query(), format).await?;
            }
            MoodAction::Add {
                level,
                energy,
                stress,
                sleep,
                notes,
            } => {
                let values = form_values([
                    ("mood_level", Some(level.to_string())),
                    ("energy_level", energy.map(|v| v.to_string())),
                    ("stress_level", stress.map(|v| v.to_string())),
                    ("sleep_hours", sleep.map(|v| v.to_string())),
                    ("notes", notes),
                ]);
                add::<MoodEntry>(&mut dashboard, &values, format).await?;
            }
        },

        Commands::Journal { action } => match action {
            JournalAction::List { paging } => {
                list::<JournalEntry>(&mut dashboard, paging.query(), format).await?;
            }
            JournalAction::Add {
                content,
                title,
                before,
                after,
                tags,
            } => {
                let values = form_values([
                    ("content", Some(content)),
                    ("title", title),
                    ("mood_before", before.map(|v| v.to_string())),
                    ("mood_after", after.map(|v| v.to_string())),
                    ("tags", tags),
                ]);
                add::<JournalEntry>(&mut dashboard, &values, format).await?;
            }
        },

        Commands::Activity { action } => match action {
            ActivityAction::List { paging } => {
                list::<Activity>(&mut dashboard, paging.query(), format).await?;
            }
            ActivityAction::Add {
                activity_type,
                duration,
                description,
                impact,
                notes,
            } => {
                let values = form_values([
                    ("activity_type", Some(activity_type)),
                    ("duration_minutes", duration.map(|v| v.to_string())),
                    ("description", description),
                    ("mood_impact", impact.map(|v| v.to_string())),
                    ("notes", notes),
                ]);
                add::<Activity>(&mut dashboard, &values, format).await?;
            }
        },

        Commands::Goal { action } => match action {
            GoalAction::List {
                paging,
                active_only,
            } => {
                let query = ListQuery {
                    include_completed: active_only.then_some(false),
                    ..paging.query()
                };
                list::<Goal>(&mut dashboard, query, format).await?;
            }
            GoalAction::Add {
                title,
                goal_type,
                description,
                target,
                current,
                date,
            } => {
                let values = form_values([
                    ("title", Some(title)),
                    ("goal_type", Some(goal_type)),
                    ("description", description),
                    ("target_value", target.map(|v| v.to_string())),
                    ("current_value", current.map(|v| v.to_string())),
                    ("target_date", date),
                ]);
                add::<Goal>(&mut dashboard, &values, format).await?;
            }
        },

        // Written before any config is loaded
        Commands::Config { .. } => {}
    }

    // Toasts go to stderr so table/json/csv output stays clean
    let mut failed = false;
    for toast in dashboard.toasts_mut().drain() {
        match toast.kind {
            ToastKind::Success => eprintln!("✓ {}", toast.message),
            ToastKind::Error => {
                failed = true;
                eprintln!("✗ {}", toast.message);
            }
        }
    }
    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wellcheck={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Warnings only, until the configured level is known
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wellcheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

/// Form values from the flags that were given
fn form_values<const N: usize>(fields: [(&'static str, Option<String>); N]) -> FormValues {
    fields
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}

async fn list<E: Listed>(
    dashboard: &mut DashboardClient<ApiClient>,
    query: ListQuery,
    format: OutputFormat,
) -> anyhow::Result<()> {
    dashboard.set_query(E::KIND, query);
    dashboard.load::<E>().await;
    print_list(dashboard.list::<E>(), format)
}

async fn add<E: Listed>(
    dashboard: &mut DashboardClient<ApiClient>,
    values: &FormValues,
    format: OutputFormat,
) -> anyhow::Result<()> {
    dashboard.show_form(E::KIND);
    dashboard.fill_form(E::KIND, values);

    // Failures are already on the toast stack
    if dashboard.create::<E>().await.is_ok() {
        print_list(dashboard.list::<E>(), format)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct DashboardOutput<'a> {
    stats: Option<&'a wellcheck::DashboardStats>,
    mood: &'a [MoodEntry],
    journal: &'a [JournalEntry],
    activities: &'a [Activity],
    goals: &'a [Goal],
}

fn print_dashboard(
    dashboard: &DashboardClient<ApiClient>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let lists = dashboard.lists();

    match format {
        OutputFormat::Json => {
            let output = DashboardOutput {
                stats: dashboard.stats().stats(),
                mood: lists.mood.records(),
                journal: lists.journal.records(),
                activities: lists.activities.records(),
                goals: lists.goals.records(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            // One block per view, each introduced by a `# <tab>` line
            println!("# stats");
            print_stats(dashboard.stats(), format)?;
            for kind in EntityKind::ALL {
                println!();
                println!("# {}", kind.tab_name());
                print_kind(lists, kind, format)?;
            }
        }
        OutputFormat::Table => {
            print_stats(dashboard.stats(), format)?;

            // Active tab first, then the rest in tab order
            let active = dashboard.tabs().active();
            let order = std::iter::once(active)
                .chain(EntityKind::ALL.into_iter().filter(|k| *k != active));
            for kind in order {
                println!();
                println!("{} {}", kind.icon(), kind.label());
                println!("{}", "-".repeat(40));
                print_kind(lists, kind, format)?;
            }
        }
    }
    Ok(())
}

fn print_kind(lists: &Lists, kind: EntityKind, format: OutputFormat) -> anyhow::Result<()> {
    match kind {
        EntityKind::Mood => print_list(&lists.mood, format),
        EntityKind::Journal => print_list(&lists.journal, format),
        EntityKind::Activity => print_list(&lists.activities, format),
        EntityKind::Goal => print_list(&lists.goals, format),
    }
}

fn print_stats(panel: &StatsPanel, format: OutputFormat) -> anyhow::Result<()> {
    let display = panel.display();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&display)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.serialize(&display)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            println!("{:<18} {}", "Total Entries", display.total_entries);
            println!("{:<18} {}", "Average Mood", display.avg_mood);
            println!("{:<18} {}", "Journal Entries", display.journal_entries);
            println!("{:<18} {}", "Active Goals", display.active_goals);
        }
    }
    Ok(())
}

fn print_list<E: Entity>(state: &ListState<E>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(state.records())?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for record in state.records() {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => match state {
            ListState::Idle | ListState::Loading => {}
            ListState::Empty => println!("{}", E::KIND.empty_message()),
            ListState::Populated(records) => {
                for record in records {
                    println!("{}", render_text(&record.card()));
                }
            }
        },
    }
    Ok(())
}
