//! Brandability scoring.
//!
//! [`QualityScorer`] rates a display-cased name on six heuristics, each
//! clamped to [1, 10] and rounded to one decimal. Five of them fold into the
//! weighted overall score; creativity is reported but never weighted. The
//! scorer is a pure function of the name, its technique and the industry
//! profile: there is no randomness anywhere.

use serde::{Deserialize, Serialize};

use crate::core::config::ScoreWeights;
use crate::core::phonetics::{
    char_len, consonant_runs, contains_any, has_alliteration, has_repeated_bigram, is_vowel,
    syllable_count, vowel_ratio,
};
use crate::generators::Technique;
use crate::lexicon::IndustryProfile;

/// Lowest possible sub-score.
pub const MIN_SCORE: f64 = 1.0;
/// Highest possible sub-score.
pub const MAX_SCORE: f64 = 10.0;

/// Everyday words that make poor standalone brands.
const COMMON_WORDS: &[&str] = &[
    "the", "and", "data", "flow", "cloud", "app", "web", "tech", "hub", "sync", "stack", "build",
    "craft", "forge", "scale", "base", "core", "code", "time", "home", "work", "life", "good",
    "best",
];

/// Terms that tie a brand to a single product shape.
const NARROW_TERMS: &[&str] = &["app", "web", "site", "blog", "shop"];

/// Letter pairs rare enough in English to read as distinctive.
const RARE_PAIRS: &[&str] = &["zr", "vx", "qz", "nx", "rx", "zy"];

const DIGRAPHS: &[&str] = &["ch", "sh", "th", "ph", "ck", "ng"];

/// Combinations many non-native speakers find hard to say.
const HARD_COMBINATIONS: &[&str] = &["th", "zh", "tch", "dge"];

/// Clamp to [1, 10] and round to one decimal, halves away from zero.
pub fn round_score(value: f64) -> f64 {
    let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
    // The epsilon keeps sums like 8.45 (stored as 8.4499..) rounding up.
    (((clamped * 10.0) + 1e-9).round() / 10.0).clamp(MIN_SCORE, MAX_SCORE)
}

/// The six sub-scores of a name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    /// Length, rhythm and repetition
    pub memorability: f64,
    /// Consonant clusters and vowel balance
    pub pronunciation: f64,
    /// Distance from everyday words
    pub uniqueness: f64,
    /// Visual, domain and emotional fit
    pub brandability: f64,
    /// Industry resonance and international ease
    pub market_appeal: f64,
    /// Reported only; excluded from the overall score
    pub creativity: f64,
}

impl ScoreSet {
    /// Weighted sub-scores in weight order.
    pub fn weighted_components(&self) -> [f64; 5] {
        [
            self.memorability,
            self.pronunciation,
            self.uniqueness,
            self.brandability,
            self.market_appeal,
        ]
    }

    /// All six sub-scores with their wire names.
    pub fn labelled(&self) -> [(&'static str, f64); 6] {
        [
            ("memorability", self.memorability),
            ("pronunciation", self.pronunciation),
            ("uniqueness", self.uniqueness),
            ("brandability", self.brandability),
            ("marketAppeal", self.market_appeal),
            ("creativity", self.creativity),
        ]
    }
}

/// Heuristic name scorer.
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    weights: ScoreWeights,
}

impl QualityScorer {
    /// Create a scorer with the given overall-score weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Weights used for the overall score.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score a display-cased name. `technique` is `None` for names that did
    /// not come from a generator; they receive no creativity bonus.
    pub fn score(
        &self,
        name: &str,
        technique: Option<Technique>,
        profile: &IndustryProfile,
    ) -> ScoreSet {
        let lower = name.to_lowercase();
        ScoreSet {
            memorability: round_score(memorability(name)),
            pronunciation: round_score(pronunciation(&lower)),
            uniqueness: round_score(uniqueness(name, &lower, profile)),
            brandability: round_score(brandability(name, &lower, profile)),
            market_appeal: round_score(market_appeal(&lower, profile)),
            creativity: round_score(creativity(&lower, technique, profile)),
        }
    }

    /// Weighted overall score, rounded and clamped like the sub-scores.
    pub fn overall(&self, scores: &ScoreSet) -> f64 {
        let total: f64 = scores
            .weighted_components()
            .iter()
            .zip(self.weights.as_array())
            .map(|(score, weight)| score * weight)
            .sum();
        round_score(total)
    }
}

fn memorability(name: &str) -> f64 {
    let len = char_len(name);
    let mut score = 10.0;

    if len > 12 {
        score -= 1.5;
    }
    if len > 15 {
        score -= 2.0;
    }
    if len < 4 {
        score -= 2.0;
    }

    match syllable_count(name) {
        2..=3 => score += 0.5,
        n if n > 4 => score -= 1.5,
        _ => {}
    }

    if has_repeated_bigram(name) {
        score += 0.5;
    }
    if has_alliteration(name) {
        score += 0.5;
    }

    score
}

fn pronunciation(lower: &str) -> f64 {
    let mut score = 10.0;

    score -= 1.5 * consonant_runs(lower, 3) as f64;

    let ratio = vowel_ratio(lower);
    if !(0.2..=0.8).contains(&ratio) {
        score -= 2.0;
    }

    if contains_any(lower, DIGRAPHS) {
        score += 0.5;
    }

    score
}

fn uniqueness(name: &str, lower: &str, profile: &IndustryProfile) -> f64 {
    let mut score = 8.0;

    if COMMON_WORDS.contains(&lower) {
        score -= 3.0;
    }
    if profile.avoids(name) {
        score -= 2.0;
    }
    if contains_any(lower, RARE_PAIRS) {
        score += 0.5;
    }

    score
}

fn brandability(name: &str, lower: &str, profile: &IndustryProfile) -> f64 {
    let len = char_len(name);
    let mut score = 8.0;

    // visual appeal
    if (5..=12).contains(&len) && name.chars().any(is_vowel) {
        score += 0.5;
    }

    // domain potential
    if len <= 15 && len > 0 && name.chars().all(char::is_alphanumeric) {
        score += 0.5;
    }

    if contains_any(lower, profile.emotions()) {
        score += 0.5;
    }

    if contains_any(lower, NARROW_TERMS) {
        score -= 1.5;
    } else {
        score += 0.5;
    }

    score
}

fn market_appeal(lower: &str, profile: &IndustryProfile) -> f64 {
    let mut score = 8.0;

    if contains_any(lower, profile.emotions()) || contains_any(lower, profile.metaphors()) {
        score += 1.5;
    }

    if contains_any(lower, HARD_COMBINATIONS) {
        score -= 0.5;
    } else {
        score += 0.5;
    }

    score
}

fn creativity(lower: &str, technique: Option<Technique>, profile: &IndustryProfile) -> f64 {
    let base = 7.0;
    let Some(technique) = technique else {
        return base;
    };

    let bonus = match technique {
        Technique::Portmanteau if (6..=10).contains(&char_len(lower)) => 1.5,
        Technique::Invented | Technique::Neologism if contains_any(lower, RARE_PAIRS) => 1.5,
        Technique::Metaphorical | Technique::Compound | Technique::Contextual
            if contains_any(lower, profile.metaphors()) =>
        {
            1.0
        }
        Technique::Cultural => 1.0,
        Technique::Emotional => 0.5,
        _ => 0.0,
    };

    base + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::IndustryLexicon;
    use approx::assert_relative_eq;

    fn score(name: &str, technique: Option<Technique>, industry: &str) -> ScoreSet {
        let lexicon = IndustryLexicon::builtin();
        QualityScorer::default().score(name, technique, lexicon.lookup(industry))
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(8.45), 8.5);
        assert_eq!(round_score(8.44), 8.4);
        assert_eq!(round_score(12.0), 10.0);
        assert_eq!(round_score(-3.0), 1.0);
    }

    #[test]
    fn test_flowsync_scores() {
        let scores = score("FlowSync", Some(Technique::Metaphorical), "saas");
        // two syllables push memorability past the cap
        assert_relative_eq!(scores.memorability, 10.0);
        assert_relative_eq!(scores.pronunciation, 10.0);
        assert_relative_eq!(scores.uniqueness, 8.0);
        assert_relative_eq!(scores.brandability, 9.5);
        assert_relative_eq!(scores.market_appeal, 10.0);
        assert_relative_eq!(scores.creativity, 8.0);
        assert_relative_eq!(QualityScorer::default().overall(&scores), 9.5);
    }

    #[test]
    fn test_overall_uses_weights() {
        let scorer = QualityScorer::default();
        let scores = ScoreSet {
            memorability: 10.0,
            pronunciation: 8.5,
            uniqueness: 8.0,
            brandability: 9.0,
            market_appeal: 10.0,
            creativity: 1.0,
        };
        // 2.5 + 1.7 + 1.6 + 1.8 + 1.5 = 9.1
        assert_relative_eq!(scorer.overall(&scores), 9.1);
    }

    #[test]
    fn test_common_word_penalized() {
        let scores = score("Data", None, "tech");
        assert_relative_eq!(scores.uniqueness, 5.0);
    }

    #[test]
    fn test_avoid_hit_penalized() {
        let scores = score("RiskyVault", None, "fintech");
        assert_relative_eq!(scores.uniqueness, 6.0);
    }

    #[test]
    fn test_rare_pair_rewarded() {
        let scores = score("Zrlow", Some(Technique::Invented), "tech");
        assert_relative_eq!(scores.uniqueness, 8.5);
        assert_relative_eq!(scores.creativity, 8.5);
    }

    #[test]
    fn test_narrow_term_penalized() {
        let narrow = score("BoldApp", None, "tech");
        let broad = score("BoldAxe", None, "tech");
        assert_relative_eq!(broad.brandability - narrow.brandability, 2.0);
    }

    #[test]
    fn test_hard_combination_lowers_market_appeal() {
        let scores = score("Thimble", None, "food");
        assert_relative_eq!(scores.market_appeal, 7.5);
    }

    #[test]
    fn test_long_names_lose_memorability() {
        let scores = score("Supercalifragilistic", None, "tech");
        assert!(scores.memorability < 7.0);
    }

    #[test]
    fn test_unattributed_names_get_base_creativity() {
        let scores = score("Astraflow", None, "tech");
        assert_relative_eq!(scores.creativity, 7.0);
    }

    #[test]
    fn test_scores_stay_in_bounds_for_degenerate_input() {
        let lexicon = IndustryLexicon::builtin();
        let scorer = QualityScorer::default();
        for name in ["", "x", "bcdfghjklmnpqrstvwxz", "aeiouaeiouaeiouaeiou", "-_-"] {
            let scores = scorer.score(name, None, lexicon.lookup("tech"));
            for (label, value) in scores.labelled() {
                assert!((1.0..=10.0).contains(&value), "{label} = {value} for {name:?}");
            }
            let overall = scorer.overall(&scores);
            assert!((1.0..=10.0).contains(&overall));
        }
    }
}
