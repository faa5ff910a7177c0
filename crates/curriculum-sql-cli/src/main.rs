//! curriculum-sql CLI - PostgreSQL INSERT generation for curriculum lessons.

use clap::{Args, Parser, Subcommand};
use curriculum_sql::{Config, CurriculumError, GenerationSummary, Generator, SubjectConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "curriculum-sql")]
#[command(about = "Generate PostgreSQL INSERT statements from curriculum lesson JSON")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file (built-in 9th/11th grade ELA run if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate INSERT statements for every configured subject
    Generate {
        #[command(flatten)]
        sources: SourceArgs,

        /// Override target table
        #[arg(long)]
        table: Option<String>,

        /// Write SQL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and order every subject without emitting SQL
    Validate {
        #[command(flatten)]
        sources: SourceArgs,

        /// Print the summary as JSON
        #[arg(long)]
        output_json: bool,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Override directory that subject files are resolved against
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Subject to process as KEY=FILE; repeat for more (replaces configured subjects)
    #[arg(long = "subject", value_name = "KEY=FILE")]
    subjects: Vec<SubjectConfig>,
}

impl SourceArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(dir) = self.data_dir {
            config = config.with_data_dir(dir);
        }
        if !self.subjects.is_empty() {
            config = config.with_subjects(self.subjects);
        }
        config
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), CurriculumError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Generate {
            sources,
            table,
            output,
        } => {
            let mut config = sources.apply(config);
            if let Some(table) = table {
                config = config.with_table(table);
            }

            let generator = Generator::new(config)?;
            // Nothing is written until every subject has rendered.
            let rendered = generator.render()?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered.sql.as_bytes())?;
                    info!("Wrote SQL to {:?}", path);
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    out.write_all(rendered.sql.as_bytes())?;
                    out.flush()?;
                }
            }

            info!(
                "Generated {} lessons across {} subjects",
                rendered.summary.total_lessons,
                rendered.summary.subjects.len()
            );
        }

        Commands::Validate {
            sources,
            output_json,
        } => {
            let generator = Generator::new(sources.apply(config))?;
            let summary = generator.validate()?;

            if output_json {
                println!("{}", summary.to_json()?);
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &GenerationSummary) {
    println!("Validation completed successfully");
    for subject in &summary.subjects {
        match (&subject.first_day, &subject.last_day) {
            (Some(first), Some(last)) => println!(
                "  {}: {} lessons ({} .. {})",
                subject.subject, subject.lessons, first, last
            ),
            _ => println!("  {}: {} lessons", subject.subject, subject.lessons),
        }
    }
    println!("  Total: {} lessons", summary.total_lessons);
}

/// Logs go to stderr so stdout carries only SQL.
fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
