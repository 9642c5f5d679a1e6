//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and output enums used by the startup-namer binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use startup_namer::Technique;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rule-based startup name generator and brandability scorer
#[derive(Parser)]
#[command(name = "startup-namer")]
#[command(version = VERSION)]
#[command(about = "Startup Namer - brandable name generation and scoring")]
#[command(long_about = "
Generate ranked, brandable startup names from a few keywords and an industry,
or score a name you already have in mind.

Common Usage:

  # Generate names for a SaaS product
  startup-namer generate flow data --industry saas

  # Feed a description to the contextual technique and show a table
  startup-namer generate ledger --industry fintech \\
      --description \"automated bookkeeping for freelancers\" --format table

  # Only blends and invented words, top 10
  startup-namer generate pixel --technique portmanteau --technique invented --limit 10

  # Score an existing name
  startup-namer score FlowSync --industry saas

  # List the built-in industries
  startup-namer industries
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ranked name suggestions from keywords
    Generate(GenerateArgs),

    /// Score a single name against an industry
    Score(ScoreArgs),

    /// List industry profiles in the lexicon
    Industries(IndustriesArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a startup-namer configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Shared configuration and lexicon sources
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Configuration file (YAML)
    #[arg(short, long, env = "STARTUP_NAMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Industry lexicon file (YAML) replacing the built-in lexicon
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Seed keywords
    #[arg(value_name = "KEYWORDS")]
    pub keywords: Vec<String>,

    /// Industry tag (tech, saas, fintech, ...)
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Style hint used in descriptions (modern, classic, creative, ...)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Business description for the contextual technique
    #[arg(short, long)]
    pub description: Option<String>,

    /// Restrict generation to these techniques (repeatable)
    #[arg(short, long = "technique", value_enum)]
    pub techniques: Vec<TechniqueArg>,

    /// Maximum number of names to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Do not retry with relaxed thresholds when nothing passes
    #[arg(long)]
    pub no_relaxed_retry: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Name to score
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Industry tag to score against
    #[arg(short, long, default_value = "tech")]
    pub industry: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct IndustriesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Industry lexicon file (YAML) replacing the built-in lexicon
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".startup-namer.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON envelope `{success, data}`
    Json,
    /// YAML format output
    Yaml,
    /// Human-readable table
    Table,
    /// Comma-separated values
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TechniqueArg {
    Metaphorical,
    Emotional,
    Portmanteau,
    Invented,
    Cultural,
    Compound,
    Neologism,
    Contextual,
}

impl From<TechniqueArg> for Technique {
    fn from(arg: TechniqueArg) -> Self {
        match arg {
            TechniqueArg::Metaphorical => Technique::Metaphorical,
            TechniqueArg::Emotional => Technique::Emotional,
            TechniqueArg::Portmanteau => Technique::Portmanteau,
            TechniqueArg::Invented => Technique::Invented,
            TechniqueArg::Cultural => Technique::Cultural,
            TechniqueArg::Compound => Technique::Compound,
            TechniqueArg::Neologism => Technique::Neologism,
            TechniqueArg::Contextual => Technique::Contextual,
        }
    }
}
