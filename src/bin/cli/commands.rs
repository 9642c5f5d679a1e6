//! Command Execution Logic
//!
//! This module contains the command implementations behind each subcommand:
//! name generation, single-name scoring, lexicon listing and configuration
//! management.

use crate::cli::args::*;
use crate::cli::output::*;
use owo_colors::OwoColorize;
use startup_namer::{IndustryLexicon, NamerConfig, NamingEngine, NamingRequest, Technique};
use std::path::Path;
use tabled::{settings::Style as TableStyle, Table, Tabled};
use tracing::{debug, info};

/// Load configuration from file or use defaults
pub fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<NamerConfig> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            NamerConfig::from_yaml_file(path)?
        }
        None => NamerConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Load a lexicon file, or the built-in lexicon when none is given
pub fn load_lexicon(lexicon_path: Option<&Path>) -> anyhow::Result<IndustryLexicon> {
    match lexicon_path {
        Some(path) => {
            info!("Loading lexicon from {}", path.display());
            Ok(IndustryLexicon::from_yaml_file(path)?)
        }
        None => Ok(IndustryLexicon::builtin()),
    }
}

fn build_engine(source: &SourceArgs, config: NamerConfig) -> anyhow::Result<NamingEngine> {
    let lexicon = load_lexicon(source.lexicon.as_deref())?;
    Ok(NamingEngine::new(config, lexicon)?)
}

/// Generate ranked names from keywords
pub fn generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.source.config.as_deref())?;

    if let Some(limit) = args.limit {
        config.output.max_results = limit;
    }
    if args.no_relaxed_retry {
        config.filter.relaxed_retry = false;
    }

    let engine = build_engine(&args.source, config)?;

    let mut request = NamingRequest::new(args.keywords);
    request.industry = args.industry;
    request.style = args.style;
    request.description = args.description;
    if !args.techniques.is_empty() {
        request.techniques = Some(args.techniques.into_iter().map(Technique::from).collect());
    }
    debug!("Request: {:?}", request);

    let results = engine.generate(&request);
    println!("{}", render_results(&results, args.format)?);

    Ok(())
}

/// Score a single name
pub fn score_command(args: ScoreArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.source.config.as_deref())?;
    let engine = build_engine(&args.source, config)?;

    let evaluation = engine.evaluate_name(&args.name, &args.industry);
    println!("{}", render_evaluation(&evaluation, args.format)?);

    Ok(())
}

/// List industries in the lexicon
pub fn industries_command(args: IndustriesArgs) -> anyhow::Result<()> {
    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    println!("{}", render_industries(&lexicon, args.format)?);
    Ok(())
}

/// Print default configuration
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default startup-namer configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: startup-namer generate --config your-config.yml <keywords>".dimmed()
    );
    println!();

    let config = NamerConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        eprintln!(
            "{} {}",
            "Configuration file already exists:".red(),
            args.output.display()
        );
        eprintln!("   Use --force to overwrite or choose a different name with --output");
        std::process::exit(1);
    }

    NamerConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "Next steps:".bright_blue().bold());
    println!("   1. Edit the configuration file to tune generation and filtering");
    println!(
        "   2. Generate with: {}",
        format!(
            "startup-namer generate --config {} <keywords>",
            args.output.display()
        )
        .cyan()
    );

    println!();
    println!("{}", "Key settings you can customize:".bright_blue().bold());

    #[derive(Tabled)]
    struct CustomizationRow {
        setting: String,
        description: String,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "generation.techniques".to_string(),
            description: "Techniques run when a request names none".to_string(),
        },
        CustomizationRow {
            setting: "scoring.weights".to_string(),
            description: "Weights of the five scored dimensions (sum to 1.0)".to_string(),
        },
        CustomizationRow {
            setting: "filter.thresholds".to_string(),
            description: "Minimum scores and length bounds for results".to_string(),
        },
        CustomizationRow {
            setting: "output.max_results".to_string(),
            description: "Number of names returned per request".to_string(),
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)) {
        Ok(config) => {
            println!("{}", "Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "Configuration validation failed:".red(), e);
            println!();
            println!("{}", "Common issues:".bright_blue().bold());
            println!("   - Check YAML syntax (indentation, colons, quotes)");
            println!("   - Scoring weights must be non-negative and sum to 1.0");
            println!("   - Thresholds must lie between 0 and 10");
            println!();
            println!(
                "{}",
                "Tip: Use 'startup-namer print-default-config' to see valid format".dimmed()
            );
            std::process::exit(1);
        }
    };

    display_config_summary(&config);

    if args.verbose {
        println!("{}", serde_yaml::to_string(&config)?);
    }

    Ok(())
}

fn display_config_summary(config: &NamerConfig) {
    #[derive(Tabled)]
    struct SummaryRow {
        setting: String,
        value: String,
    }

    let techniques: Vec<String> = config
        .generation
        .techniques
        .iter()
        .map(ToString::to_string)
        .collect();

    let rows = vec![
        SummaryRow {
            setting: "Techniques".to_string(),
            value: techniques.join(", "),
        },
        SummaryRow {
            setting: "Default keyword".to_string(),
            value: config.generation.default_keyword.clone(),
        },
        SummaryRow {
            setting: "Min overall score".to_string(),
            value: format!("{:.1}", config.filter.thresholds.min_overall),
        },
        SummaryRow {
            setting: "Relaxed retry".to_string(),
            value: config.filter.relaxed_retry.to_string(),
        },
        SummaryRow {
            setting: "Max results".to_string(),
            value: config.output.max_results.to_string(),
        },
    ];

    println!("{}", "Configuration Summary".bright_blue().bold());
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();
}
