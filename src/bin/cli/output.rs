//! Output Formatting and Display Functions
//!
//! Renders naming results, single-name evaluations and the industry list in
//! the formats accepted by `--format`.

use crate::cli::args::OutputFormat;
use owo_colors::OwoColorize;
use startup_namer::{IndustryLexicon, NameEvaluation, NamingResults, ScoredName};
use tabled::{settings::Style as TableStyle, Table, Tabled};

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "#")]
    rank: usize,
    name: String,
    overall: String,
    memorability: String,
    pronunciation: String,
    uniqueness: String,
    brandability: String,
    #[tabled(rename = "market")]
    market_appeal: String,
    technique: String,
}

#[derive(Tabled)]
struct ScoreRow {
    score: String,
    value: String,
}

#[derive(Tabled)]
struct IndustryRow {
    industry: String,
    aliases: String,
    metaphors: String,
    exemplars: String,
}

fn technique_label(name: &ScoredName) -> String {
    name.technique
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Quote a CSV field when it contains a separator, quote or newline.
pub fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

const CSV_HEADER: &str = "rank,name,overall_score,memorability,pronunciation,uniqueness,brandability,market_appeal,creativity,technique,industry,description";

fn csv_line(rank: usize, name: &ScoredName) -> String {
    let s = &name.scores;
    [
        rank.to_string(),
        csv_field(&name.name),
        format!("{:.1}", name.overall_score),
        format!("{:.1}", s.memorability),
        format!("{:.1}", s.pronunciation),
        format!("{:.1}", s.uniqueness),
        format!("{:.1}", s.brandability),
        format!("{:.1}", s.market_appeal),
        format!("{:.1}", s.creativity),
        technique_label(name),
        csv_field(&name.industry),
        csv_field(&name.description),
    ]
    .join(",")
}

/// Render generation results.
pub fn render_results(results: &NamingResults, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&results.clone().into_response())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&results.clone().into_response())?),
        OutputFormat::Csv => {
            let mut lines = vec![CSV_HEADER.to_string()];
            lines.extend(
                results
                    .names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| csv_line(i + 1, name)),
            );
            Ok(lines.join("\n"))
        }
        OutputFormat::Table => Ok(results_table(results)),
    }
}

fn results_table(results: &NamingResults) -> String {
    let meta = &results.metadata;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}\n",
        "Names for".bright_blue().bold(),
        meta.keywords.join(", ").cyan(),
        format!("({}, {})", meta.industry, meta.style).dimmed()
    ));

    if results.is_empty() {
        out.push_str(&format!(
            "{}\n",
            "No names passed the quality filter. Try different keywords.".yellow()
        ));
        return out;
    }

    let rows: Vec<NameRow> = results
        .names
        .iter()
        .enumerate()
        .map(|(i, n)| NameRow {
            rank: i + 1,
            name: n.name.clone(),
            overall: format!("{:.1}", n.overall_score),
            memorability: format!("{:.1}", n.scores.memorability),
            pronunciation: format!("{:.1}", n.scores.pronunciation),
            uniqueness: format!("{:.1}", n.scores.uniqueness),
            brandability: format!("{:.1}", n.scores.brandability),
            market_appeal: format!("{:.1}", n.scores.market_appeal),
            technique: technique_label(n),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    out.push_str(&format!("{table}\n"));

    out.push_str(&format!(
        "{}\n",
        format!(
            "{} candidates, {} unique, {} passed, {} shown{}",
            meta.total_candidates,
            meta.unique_candidates,
            meta.passed_filter,
            meta.returned,
            if meta.relaxed_retry_applied {
                " (relaxed thresholds)"
            } else {
                ""
            }
        )
        .dimmed()
    ));

    if let Some(top) = results.top() {
        out.push_str(&format!("\n{} {}\n", "Top pick:".bright_green().bold(), top.name.bold()));
        out.push_str(&format!("   {}\n", top.description));
        out.push_str(&format!("   {}\n", top.reasoning.dimmed()));
    }

    out
}

/// Render a single-name evaluation.
pub fn render_evaluation(evaluation: &NameEvaluation, format: OutputFormat) -> anyhow::Result<String> {
    let scored = &evaluation.scored;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(evaluation)?),
        OutputFormat::Csv => Ok(format!("{}\n{}", CSV_HEADER, csv_line(1, scored))),
        OutputFormat::Table => {
            let mut rows: Vec<ScoreRow> = scored
                .scores
                .labelled()
                .iter()
                .map(|(label, value)| ScoreRow {
                    score: (*label).to_string(),
                    value: format!("{value:.1}"),
                })
                .collect();
            rows.push(ScoreRow {
                score: "overall".to_string(),
                value: format!("{:.1}", scored.overall_score),
            });

            let mut table = Table::new(rows);
            table.with(TableStyle::rounded());

            let verdict = if evaluation.passes_filter {
                format!("{}", "passes the quality filter".green())
            } else if evaluation.avoid_hit {
                format!("{}", "rejected: matches an avoid pattern".red())
            } else {
                format!("{}", "below the quality thresholds".yellow())
            };

            Ok(format!(
                "{} {} {}\n{table}\n{verdict}\n{}\n",
                "Scoring".bright_blue().bold(),
                scored.name.cyan(),
                format!("({})", scored.industry).dimmed(),
                scored.reasoning
            ))
        }
    }
}

/// Render the lexicon's industry list.
pub fn render_industries(lexicon: &IndustryLexicon, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&lexicon.to_file())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&lexicon.to_file())?),
        OutputFormat::Csv => {
            let mut lines = vec!["industry,aliases,metaphors,emotions,exemplars".to_string()];
            for profile in lexicon.profiles() {
                let spec = profile.spec();
                lines.push(
                    [
                        csv_field(profile.tag()),
                        csv_field(&spec.aliases.join(" ")),
                        csv_field(&spec.metaphors.join(" ")),
                        csv_field(&spec.emotions.join(" ")),
                        csv_field(&spec.exemplars.join(" ")),
                    ]
                    .join(","),
                );
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Table => {
            let rows: Vec<IndustryRow> = lexicon
                .profiles()
                .map(|p| IndustryRow {
                    industry: if p.tag() == lexicon.default_profile().tag() {
                        format!("{} (default)", p.tag())
                    } else {
                        p.tag().to_string()
                    },
                    aliases: p.spec().aliases.join(", "),
                    metaphors: p.metaphors().join(", "),
                    exemplars: p.exemplars().join(", "),
                })
                .collect();

            let mut table = Table::new(rows);
            table.with(TableStyle::rounded());
            Ok(format!(
                "{}\n   Found {} industries\n\n{table}\n",
                "Industry Profiles".bright_blue().bold(),
                lexicon.len()
            ))
        }
    }
}
