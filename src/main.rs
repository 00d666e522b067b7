use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use job_score::scoring::{PolicyConstants, RateParsing, ScoreError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_UNDEFINED: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// "Score is 3/5 - 60.0"
    Text,
    /// Pretty-printed JSON with per-criterion outcomes
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "job-score")]
#[command(about = "Score how fair a job is from a JSON file of survey answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the JSON answers file
    answers: PathBuf,

    /// Enable verbose logging and print a per-criterion breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/job-score/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Override the maximum acceptable overtime in hours
    #[arg(long)]
    max_overtime: Option<f64>,

    /// Override the minimum acceptable hourly rate
    #[arg(long)]
    min_wage: Option<f64>,

    /// Score an hourly rate that doesn't parse as 0.0 instead of skipping it
    #[arg(long)]
    zero_unparsed_rate: bool,
}

impl Cli {
    fn apply_overrides(&self, policy: &mut PolicyConstants) {
        if let Some(max_overtime) = self.max_overtime {
            policy.max_overtime = max_overtime;
        }
        if let Some(min_wage) = self.min_wage {
            policy.min_wage = min_wage;
        }
        if self.zero_unparsed_rate {
            policy.rate_parsing = RateParsing::Zero;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = job_score::telemetry::init(job_score::telemetry::default_level(cli.verbose)) {
        eprintln!("Logging disabled: {}", e);
    }

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = match job_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let mut policy = config.policy;
    cli.apply_overrides(&mut policy);
    if let Err(errors) = job_score::scoring::validate_policy(&policy) {
        eprintln!("Policy config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    debug!(?policy, "effective policy");

    if !cli.answers.exists() {
        eprintln!("File '{}' does not exist.", cli.answers.display());
        std::process::exit(EXIT_INPUT);
    }

    let content = match fs::read_to_string(&cli.answers) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", cli.answers.display(), e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let record = match job_score::decode_answers(&content, policy.rate_parsing) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to parse JSON file: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    debug!(?record, "decoded answers");

    let result = match job_score::evaluate(&record, &policy) {
        Ok(r) => r,
        Err(ScoreError::UndefinedResult) => {
            eprintln!("Cannot score: {}", ScoreError::UndefinedResult);
            std::process::exit(EXIT_UNDEFINED);
        }
    };

    match cli.format {
        Format::Text => {
            println!("{}", job_score::output::format_summary(&result));
            if cli.verbose {
                let use_colors = job_score::output::should_use_colors();
                println!("{}", job_score::output::format_breakdown(&result, use_colors));
            }
        }
        Format::Json => match job_score::output::format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
