use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use writing_grader::config::{self, Config};
use writing_grader::scoring::{self, Lexicon, LexiconConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Grade, bar chart, statistics and advice
    Text,
    /// Report, grade and advice as JSON
    Json,
    /// One tab-separated line for scripting
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade a passage (default if no subcommand)
    Analyze {
        /// File to read; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective keyword lexicon as YAML
    Lexicon,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "writing-grader")]
#[command(about = "Grade a passage of writing and get advice", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/writing-grader/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Analyze {
        file: None,
        format: OutputFormat::Text,
    });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = command {
        let path = match config_path.map_or_else(config::get_config_path, Ok) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Config written to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let start_time = Instant::now();

    // Load config
    if cli.verbose {
        match &config_path {
            Some(p) => eprintln!("Loading config from {}", p.display()),
            None => eprintln!("Loading config from default location"),
        }
    }
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let lexicon = build_lexicon(&config, cli.verbose);

    match command {
        Commands::Lexicon => match serde_saphyr::to_string(&lexicon.to_config()) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Failed to serialize lexicon: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Analyze { file, format } => {
            let text = match writing_grader::input::read_passage(file.as_deref()) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if writing_grader::input::is_blank(&text) {
                eprintln!("Nothing to grade: the passage is empty.");
                std::process::exit(EXIT_INPUT);
            }

            if cli.verbose {
                eprintln!("Read {} bytes", text.len());
            }

            let report = scoring::evaluate_with(&text, &lexicon);
            let grade = scoring::classify_grade(report.composite_score);
            let advice = scoring::generate_advice(&report);

            let output = match format {
                OutputFormat::Text => {
                    let palette = if !cli.no_color && writing_grader::output::should_use_colors() {
                        Some(writing_grader::output::Palette::detect())
                    } else {
                        None
                    };
                    writing_grader::output::format_report(
                        &report,
                        &grade,
                        &advice,
                        palette.as_ref(),
                        writing_grader::output::bar_width_for_terminal(),
                    )
                }
                OutputFormat::Json => {
                    match writing_grader::output::format_json(&report, &grade, &advice) {
                        Ok(json) => json,
                        Err(e) => {
                            eprintln!("{:#}", e);
                            std::process::exit(EXIT_INPUT);
                        }
                    }
                }
                OutputFormat::Tsv => writing_grader::output::format_tsv(&report, &grade),
            };
            println!("{}", output);

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Graded {} words in {} sentences in {:?}",
                    report.total_words,
                    report.total_sentences,
                    start_time.elapsed()
                );
            }
        }
        Commands::Init { .. } => unreachable!("init handled before config load"),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Validate and compile the configured lexicon, exiting on config errors.
fn build_lexicon(config: &Config, verbose: bool) -> Lexicon {
    let lexicon_config = config.lexicon.clone().unwrap_or_default();

    if let Err(errors) = scoring::validate_lexicon(&lexicon_config) {
        eprintln!("Lexicon config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let lexicon = match Lexicon::from_config(&lexicon_config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if verbose {
        let resolved: LexiconConfig = lexicon.to_config();
        eprintln!("Lexicon match mode: {:?}", lexicon.match_mode);
        for (name, terms) in resolved.categories() {
            eprintln!("  {}: {} terms", name, terms.len());
        }
    }

    lexicon
}
