use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use athletics_points::config::{self, Config, ScoreSheet};
use athletics_points::output::{self, ScoredSheet};
use athletics_points::performance::RawPerformance;
use athletics_points::scoring::{self, EventFailure};
use athletics_points::tables::{self, event_label, ScoringTables};
use athletics_points::Category;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score performances and print per-event points and the total
    Score {
        /// Category to score in (overrides the sheet and the config default)
        #[arg(short = 'k', long, value_enum)]
        category: Option<Category>,

        /// YAML score sheet to read performances from
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Fail on the first bad performance instead of counting it as 0
        #[arg(long)]
        strict: bool,

        /// Performances as EVENT=VALUE, e.g. 60m=8.45 ver=4.41 800m=2:31.4
        #[arg(value_name = "EVENT=VALUE")]
        performances: Vec<String>,
    },
    /// List the events of a category in display order
    Events {
        #[arg(short = 'k', long, value_enum)]
        category: Option<Category>,
    },
    /// List the scoring categories
    Categories,
    /// Write a blank score sheet for a category
    Init {
        /// Where to write the sheet
        path: PathBuf,

        #[arg(short = 'k', long, value_enum)]
        category: Option<Category>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "athletics-points")]
#[command(about = "Athletics points calculator for combined events and competitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/athletics-points/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let tables = ScoringTables::standard();
    if let Err(errors) = tables::validate_tables(&tables) {
        eprintln!("Scoring table errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match cli.command {
        Commands::Score {
            category,
            sheet,
            format,
            strict,
            performances,
        } => run_score(
            &tables,
            &config,
            category,
            sheet,
            format,
            strict,
            &performances,
        ),
        Commands::Events { category } => {
            let category = category.or(config.default_category);
            run_events(&tables, category)
        }
        Commands::Categories => {
            for category in Category::ALL {
                println!("{:<28}{}", category.key(), category.label());
            }
            EXIT_SUCCESS
        }
        Commands::Init {
            path,
            category,
            force,
        } => {
            let Some(category) = category.or(config.default_category) else {
                eprintln!("No category given. Pass --category or set default_category in the config.");
                std::process::exit(EXIT_CONFIG);
            };
            match config::write_template(&path, &tables, category, force) {
                Ok(()) => {
                    println!("Wrote {} sheet to {}", category, path.display());
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Failed to write sheet: {:#}", e);
                    EXIT_CONFIG
                }
            }
        }
    };

    std::process::exit(code);
}

fn run_score(
    tables: &ScoringTables,
    config: &Config,
    category: Option<Category>,
    sheet_path: Option<PathBuf>,
    format: Format,
    strict: bool,
    pairs: &[String],
) -> i32 {
    let mut sheet = match sheet_path {
        Some(path) => match config::load_sheet(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Sheet error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
        None => ScoreSheet::default(),
    };

    // Command-line entries override the sheet
    for pair in pairs {
        let Some((event, value)) = pair.split_once('=') else {
            eprintln!("Expected EVENT=VALUE, got '{}'", pair);
            return EXIT_INPUT;
        };
        sheet.performances.insert(
            event.trim().to_string(),
            RawPerformance::from(value.trim()),
        );
    }

    let Some(category) = category.or(sheet.category).or(config.default_category) else {
        eprintln!("No category given. Pass --category, set it in the sheet, or set default_category in the config.");
        return EXIT_CONFIG;
    };

    let performances = sheet.attempted();
    for event in scoring::unrecognized_events(tables, &performances, category) {
        warn!(%category, event = %event, "event is not scored in this category, skipping");
    }

    let strict = strict || config.strict.unwrap_or(false);
    let (result, failures): (_, Vec<EventFailure>) = if strict {
        match scoring::total_score(tables, &performances, category) {
            Ok(r) => (r, Vec::new()),
            Err(e) => {
                eprintln!("Scoring error: {}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        scoring::total_score_lenient(tables, &performances, category)
    };
    debug!(%category, total = result.total, events = result.per_event.len(), "scored sheet");

    let scored = ScoredSheet {
        athlete: sheet.athlete.as_deref(),
        category,
        performances: &performances,
        result: &result,
        failures: &failures,
    };

    match format {
        Format::Table => {
            let use_colors = config.colors.unwrap_or_else(output::should_use_colors);
            println!("{}", output::format_score_table(&scored, use_colors));
            for failure in &failures {
                eprintln!("  ! {}: {}", event_label(&failure.event), failure.error);
            }
        }
        Format::Tsv => println!("{}", output::format_tsv(&scored)),
        Format::Json => match output::format_json(&scored) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return EXIT_INPUT;
            }
        },
    }

    EXIT_SUCCESS
}

fn run_events(tables: &ScoringTables, category: Option<Category>) -> i32 {
    let Some(category) = category else {
        eprintln!("No category given. Pass --category or set default_category in the config.");
        return EXIT_CONFIG;
    };

    let table = tables.table(category);
    println!("{} ({})", category.label(), table.name());
    for &event in table.display_order() {
        let hint = table.unit(event).map(|u| u.input_hint()).unwrap_or("");
        println!("  {:<16}{:<28}{}", event, event_label(event), hint);
    }
    EXIT_SUCCESS
}
