//! Dedupe, filter and rank stages of the naming pipeline.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::config::FilterThresholds;
use crate::core::phonetics::{capitalize, char_len};
use crate::core::scoring::{QualityScorer, ScoreSet};
use crate::generators::{NameCandidate, Technique};
use crate::lexicon::IndustryProfile;

/// A candidate promoted to display casing and scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Display-cased name
    pub name: String,
    /// Technique that produced the name
    pub technique: Technique,
    /// Sub-scores
    pub scores: ScoreSet,
    /// Weighted overall score
    pub overall: f64,
}

/// Drop case-insensitive duplicates, keeping the first occurrence and
/// therefore the technique that ran first.
pub fn dedupe_candidates(candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
    let mut unique: IndexMap<String, NameCandidate> = IndexMap::with_capacity(candidates.len());
    for candidate in candidates {
        unique
            .entry(candidate.raw_name.to_lowercase())
            .or_insert(candidate);
    }
    unique.into_values().collect()
}

/// Capitalize and score each candidate.
pub fn score_candidates(
    candidates: &[NameCandidate],
    scorer: &QualityScorer,
    profile: &IndustryProfile,
) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .map(|candidate| {
            let name = capitalize(&candidate.raw_name);
            let scores = scorer.score(&name, Some(candidate.technique), profile);
            let overall = scorer.overall(&scores);
            ScoredCandidate {
                name,
                technique: candidate.technique,
                scores,
                overall,
            }
        })
        .collect()
}

/// Whether a scored name meets every threshold and avoids the industry's
/// avoid patterns. Works for generated and externally supplied names alike.
pub fn passes_filter(
    name: &str,
    scores: &ScoreSet,
    overall: f64,
    profile: &IndustryProfile,
    thresholds: &FilterThresholds,
) -> bool {
    let len = char_len(name);
    overall >= thresholds.min_overall
        && scores.memorability >= thresholds.min_memorability
        && scores.pronunciation >= thresholds.min_pronunciation
        && (thresholds.min_length..=thresholds.max_length).contains(&len)
        && !profile.avoids(name)
}

impl ScoredCandidate {
    /// [`passes_filter`] applied to this candidate.
    pub fn passes(&self, profile: &IndustryProfile, thresholds: &FilterThresholds) -> bool {
        passes_filter(&self.name, &self.scores, self.overall, profile, thresholds)
    }
}

/// Ranking order: overall, then brandability, then uniqueness, all descending.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.overall
        .total_cmp(&a.overall)
        .then_with(|| b.scores.brandability.total_cmp(&a.scores.brandability))
        .then_with(|| b.scores.uniqueness.total_cmp(&a.scores.uniqueness))
}

/// Filter, stable-sort and truncate to `cap`. Ties keep generation order.
pub fn filter_and_rank(
    scored: &[ScoredCandidate],
    profile: &IndustryProfile,
    thresholds: &FilterThresholds,
    cap: usize,
) -> Vec<ScoredCandidate> {
    let mut survivors: Vec<ScoredCandidate> = scored
        .iter()
        .filter(|c| c.passes(profile, thresholds))
        .cloned()
        .collect();

    debug!(
        "{} of {} candidates passed the filter (min overall {})",
        survivors.len(),
        scored.len(),
        thresholds.min_overall
    );

    survivors.sort_by(rank_order);
    survivors.truncate(cap);
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::IndustryLexicon;

    fn scored(name: &str, overall: f64, brandability: f64, uniqueness: f64) -> ScoredCandidate {
        ScoredCandidate {
            name: name.to_string(),
            technique: Technique::Compound,
            scores: ScoreSet {
                memorability: 9.0,
                pronunciation: 9.0,
                uniqueness,
                brandability,
                market_appeal: 9.0,
                creativity: 7.0,
            },
            overall,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_technique() {
        let candidates = vec![
            NameCandidate::new("ForgeFlow", Technique::Metaphorical),
            NameCandidate::new("flowforge", Technique::Metaphorical),
            NameCandidate::new("forgeflow", Technique::Compound),
        ];
        let unique = dedupe_candidates(candidates);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].raw_name, "ForgeFlow");
        assert_eq!(unique[0].technique, Technique::Metaphorical);
    }

    #[test]
    fn test_score_candidates_capitalizes() {
        let lexicon = IndustryLexicon::builtin();
        let out = score_candidates(
            &[NameCandidate::new("astraflow", Technique::Cultural)],
            &QualityScorer::default(),
            lexicon.lookup("tech"),
        );
        assert_eq!(out[0].name, "Astraflow");
        assert_eq!(out[0].technique, Technique::Cultural);
    }

    #[test]
    fn test_filter_enforces_thresholds() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("fintech");
        let thresholds = FilterThresholds::standard();

        assert!(scored("LedgerMint", 8.0, 9.0, 8.0).passes(profile, &thresholds));
        assert!(!scored("LedgerMint", 6.9, 9.0, 8.0).passes(profile, &thresholds));
        assert!(!scored("Ab", 8.0, 9.0, 8.0).passes(profile, &thresholds));
        assert!(!scored("ScamVault", 8.0, 9.0, 8.0).passes(profile, &thresholds));

        let mut weak = scored("LedgerMint", 8.0, 9.0, 8.0);
        weak.scores.pronunciation = 5.5;
        assert!(!weak.passes(profile, &thresholds));
    }

    #[test]
    fn test_filter_accepts_names_without_a_technique() {
        let lexicon = IndustryLexicon::builtin();
        let gaming = lexicon.lookup("gaming");
        let thresholds = FilterThresholds::standard();
        let scores = scored("x", 8.0, 9.0, 8.0).scores;

        assert!(passes_filter("QuestForge", &scores, 8.0, gaming, &thresholds));
        assert!(!passes_filter("PayToWinQuest", &scores, 8.0, gaming, &thresholds));
    }

    #[test]
    fn test_rank_order_and_stability() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("tech");
        let input = vec![
            scored("Alpha", 8.0, 9.0, 8.0),
            scored("Bravo", 9.0, 8.0, 8.0),
            scored("Charlie", 8.0, 9.5, 8.0),
            scored("Delta", 8.0, 9.0, 8.5),
            scored("Echo", 8.0, 9.0, 8.0),
        ];
        let ranked = filter_and_rank(&input, profile, &FilterThresholds::standard(), 50);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bravo", "Charlie", "Delta", "Alpha", "Echo"]);
    }

    #[test]
    fn test_filter_and_rank_truncates() {
        let lexicon = IndustryLexicon::builtin();
        let input: Vec<ScoredCandidate> = (0..10)
            .map(|i| scored(&format!("Name{i}"), 8.0, 9.0, 8.0))
            .collect();
        let ranked = filter_and_rank(&input, lexicon.lookup("tech"), &FilterThresholds::standard(), 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "Name0");
    }
}
