//! Human-readable description and reasoning for ranked names.
//!
//! Template choice is keyed on a stable hash of the name, so the same name
//! always receives the same wording.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::core::scoring::ScoreSet;
use crate::generators::Technique;
use crate::lexicon::IndustryProfile;

/// Sub-score at or above which a strength is called out.
pub const STRENGTH_THRESHOLD: f64 = 8.5;

/// Description and reasoning for one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDescription {
    /// Template-based one-sentence description
    pub description: String,
    /// Strengths, technique and industry positioning
    pub reasoning: String,
}

fn templates(technique: Option<Technique>) -> &'static [&'static str] {
    match technique {
        Some(Technique::Metaphorical) => &[
            "{name} borrows an image from {industry} to give a {style} brand a story to tell.",
            "{name} pairs your idea with a vivid {industry} metaphor for a {style} feel.",
            "A {style} metaphor-driven name that puts {industry} imagery up front.",
        ],
        Some(Technique::Emotional) => &[
            "{name} leads with the feeling customers should take away from a {style} {industry} brand.",
            "An emotionally warm, {style} name built around what {industry} customers value.",
        ],
        Some(Technique::Portmanteau) => &[
            "{name} fuses two ideas into a single compact, {style} word.",
            "A {style} blend that reads as one word while keeping both roots visible.",
            "{name} merges your keywords with {industry} vocabulary into a fresh coinage.",
        ],
        Some(Technique::Invented) => &[
            "{name} is a coined word with room to define its own meaning in {industry}.",
            "An invented, {style} name that is easy to own across domains and handles.",
        ],
        Some(Technique::Cultural) => &[
            "{name} draws on classical roots for a timeless, {style} sound.",
            "A name with mythic undertones that lends a {style} {industry} brand some gravitas.",
        ],
        Some(Technique::Compound) => &[
            "{name} states plainly what you build, in a {style} compound form.",
            "A straightforward {style} compound name that {industry} buyers grasp at once.",
        ],
        Some(Technique::Neologism) => &[
            "{name} reshapes a familiar root into an unfamiliar, {style} word.",
            "A neologism that hints at its origin while sounding new to {industry}.",
            "{name} trims and re-suffixes a keyword for a distinctive {style} identity.",
        ],
        Some(Technique::Contextual) => &[
            "{name} comes straight from how you describe the product, set against {industry} imagery.",
            "A {style} name grounded in your own description of the business.",
        ],
        None => &[
            "{name} evaluated as a {style} name for the {industry} space.",
        ],
    }
}

fn technique_clause(technique: Option<Technique>) -> Option<&'static str> {
    let clause = match technique? {
        Technique::Metaphorical => "Metaphor gives the name a story customers can retell.",
        Technique::Emotional => "Emotional language builds an immediate connection.",
        Technique::Portmanteau => "Blending keeps both ideas in a single word.",
        Technique::Invented => "An invented word is easier to trademark and search for.",
        Technique::Cultural => "Classical roots lend a sense of permanence.",
        Technique::Compound => "A compound name makes the offering obvious.",
        Technique::Neologism => "A neologism is short, ownable and hints at its root.",
        Technique::Contextual => "It reflects the product description directly.",
    };
    Some(clause)
}

fn strengths(scores: &ScoreSet) -> Vec<&'static str> {
    [
        (scores.memorability, "highly memorable"),
        (scores.pronunciation, "easy to pronounce"),
        (scores.uniqueness, "distinctive"),
        (scores.brandability, "strong brand potential"),
        (scores.market_appeal, "broad market appeal"),
    ]
    .into_iter()
    .filter(|(score, _)| *score >= STRENGTH_THRESHOLD)
    .map(|(_, label)| label)
    .collect()
}

fn join_phrases(phrases: &[&str]) -> String {
    match phrases {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Build the description and reasoning for a scored name.
pub fn describe(
    name: &str,
    style: &str,
    technique: Option<Technique>,
    scores: &ScoreSet,
    profile: &IndustryProfile,
) -> NameDescription {
    let variants = templates(technique);
    let index = (xxh3_64(name.to_lowercase().as_bytes()) % variants.len() as u64) as usize;
    let description = variants[index]
        .replace("{name}", name)
        .replace("{style}", style)
        .replace("{industry}", profile.tag());

    let mut sentences = Vec::new();
    let strong = strengths(scores);
    if strong.is_empty() {
        sentences.push(format!("{name} is a balanced candidate without a standout strength."));
    } else {
        sentences.push(format!("{name} is {}.", join_phrases(&strong)));
    }
    if let Some(clause) = technique_clause(technique) {
        sentences.push(clause.to_string());
    }
    if !profile.positioning().is_empty() {
        sentences.push(format!(
            "For {}, the name {}.",
            profile.tag(),
            profile.positioning()
        ));
    }

    NameDescription {
        description,
        reasoning: sentences.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::IndustryLexicon;

    fn scores(value: f64) -> ScoreSet {
        ScoreSet {
            memorability: value,
            pronunciation: value,
            uniqueness: value,
            brandability: value,
            market_appeal: value,
            creativity: value,
        }
    }

    #[test]
    fn test_description_is_deterministic() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("saas");
        let a = describe("FlowSync", "modern", Some(Technique::Metaphorical), &scores(9.0), profile);
        let b = describe("FlowSync", "modern", Some(Technique::Metaphorical), &scores(9.0), profile);
        assert_eq!(a, b);
    }

    #[test]
    fn test_description_fills_placeholders() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("fintech");
        for technique in Technique::all() {
            let text = describe("Vaultly", "classic", Some(technique), &scores(7.0), profile);
            assert!(!text.description.contains('{'), "{}", text.description);
        }
    }

    #[test]
    fn test_reasoning_lists_strengths() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("saas");
        let mut set = scores(7.0);
        set.memorability = 9.0;
        set.pronunciation = 8.5;
        let text = describe("FlowHub", "modern", Some(Technique::Compound), &set, profile);
        assert!(text
            .reasoning
            .starts_with("FlowHub is highly memorable and easy to pronounce."));
        assert!(text.reasoning.contains("compound"));
        assert!(text.reasoning.ends_with(&format!("the name {}.", profile.positioning())));
    }

    #[test]
    fn test_reasoning_without_strengths() {
        let lexicon = IndustryLexicon::builtin();
        let text = describe("Plain", "modern", None, &scores(6.0), lexicon.lookup("tech"));
        assert!(text.reasoning.contains("balanced candidate"));
    }

    #[test]
    fn test_join_phrases() {
        assert_eq!(join_phrases(&["a"]), "a");
        assert_eq!(join_phrases(&["a", "b", "c"]), "a, b and c");
    }
}
