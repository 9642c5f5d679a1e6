//! Word-combining techniques: metaphorical, emotional, compound, contextual.
//!
//! These generators join whole words in capitalized form ("FlowSync"), so
//! their raw names already carry display casing.

use crate::api::request::PreparedRequest;
use crate::core::phonetics::capitalize;
use crate::lexicon::IndustryProfile;

use super::{NameCandidate, NameGenerator, Technique};

const METAPHOR_SUFFIXES: &[&str] = &["Labs", "Works", "Tech"];
const EMOTION_SUFFIXES: &[&str] = &["Flow", "Sync", "Hub"];
const BUSINESS_SUFFIXES: &[&str] = &[
    "Labs",
    "Works",
    "Tech",
    "Systems",
    "Solutions",
    "Platform",
    "Engine",
];

/// Filler words never used as description concepts.
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "their", "there", "these", "those", "which", "while", "would",
    "could", "should", "other", "being", "because", "startup", "company", "business",
    "platform", "people",
];

/// Shortest description word treated as a concept.
const MIN_CONTEXT_WORD: usize = 5;

// Shared by metaphorical and emotional: W+K and K+W per keyword, then W+suffix.
fn cross_with_keywords(
    words: &[String],
    keywords: &[String],
    suffixes: &[&str],
    technique: Technique,
) -> Vec<NameCandidate> {
    let mut out = Vec::with_capacity(words.len() * (keywords.len() * 2 + suffixes.len()));
    for word in words {
        let word = capitalize(word);
        for keyword in keywords {
            let keyword = capitalize(keyword);
            out.push(NameCandidate::new(format!("{word}{keyword}"), technique));
            out.push(NameCandidate::new(format!("{keyword}{word}"), technique));
        }
        for suffix in suffixes {
            out.push(NameCandidate::new(format!("{word}{suffix}"), technique));
        }
    }
    out
}

/// Industry metaphors combined with keywords: "ForgeFlow", "FlowForge", "ForgeLabs".
#[derive(Debug, Default, Clone, Copy)]
pub struct MetaphoricalGenerator;

impl NameGenerator for MetaphoricalGenerator {
    fn technique(&self) -> Technique {
        Technique::Metaphorical
    }

    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate> {
        cross_with_keywords(
            profile.metaphors(),
            &request.keywords,
            METAPHOR_SUFFIXES,
            self.technique(),
        )
    }
}

/// Industry emotion words combined with keywords: "SwiftData", "ClearHub".
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionalGenerator;

impl NameGenerator for EmotionalGenerator {
    fn technique(&self) -> Technique {
        Technique::Emotional
    }

    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate> {
        cross_with_keywords(
            profile.emotions(),
            &request.keywords,
            EMOTION_SUFFIXES,
            self.technique(),
        )
    }
}

/// Keywords with business suffixes, then metaphor-keyword pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompoundGenerator;

impl NameGenerator for CompoundGenerator {
    fn technique(&self) -> Technique {
        Technique::Compound
    }

    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        for keyword in &request.keywords {
            let keyword = capitalize(keyword);
            for suffix in BUSINESS_SUFFIXES {
                out.push(NameCandidate::new(format!("{keyword}{suffix}"), self.technique()));
            }
            for metaphor in profile.metaphors() {
                out.push(NameCandidate::new(
                    format!("{}{keyword}", capitalize(metaphor)),
                    self.technique(),
                ));
            }
        }
        out
    }
}

/// Concept words from the description crossed with industry metaphors.
#[derive(Debug, Clone, Copy)]
pub struct ContextualGenerator {
    max_words: usize,
}

impl ContextualGenerator {
    /// Generator using at most `max_words` concept words.
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Distinct, lowercase concept words in order of appearance.
    pub fn concept_words(&self, description: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for word in description
            .split(|c: char| !c.is_alphabetic())
            .map(str::to_lowercase)
        {
            if words.len() >= self.max_words {
                break;
            }
            if word.chars().count() >= MIN_CONTEXT_WORD
                && !STOPWORDS.contains(&word.as_str())
                && !words.contains(&word)
            {
                words.push(word);
            }
        }
        words
    }
}

impl Default for ContextualGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}

impl NameGenerator for ContextualGenerator {
    fn technique(&self) -> Technique {
        Technique::Contextual
    }

    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate> {
        let Some(description) = request.description.as_deref() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for word in self.concept_words(description) {
            let word = capitalize(&word);
            for metaphor in profile.metaphors() {
                out.push(NameCandidate::new(
                    format!("{word}{}", capitalize(metaphor)),
                    self.technique(),
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::IndustryLexicon;

    fn request(keywords: &[&str], description: Option<&str>) -> PreparedRequest {
        PreparedRequest {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            description: description.map(str::to_string),
            ..PreparedRequest::default()
        }
    }

    fn names(candidates: &[NameCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.raw_name.as_str()).collect()
    }

    #[test]
    fn test_metaphorical_shape() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("saas");
        let out = MetaphoricalGenerator.generate(&request(&["flow"], None), profile);

        // 8 metaphors x (2 per keyword + 3 suffixes)
        assert_eq!(out.len(), 8 * 5);
        assert_eq!(&names(&out)[..5], &["SyncFlow", "FlowSync", "SyncLabs", "SyncWorks", "SyncTech"]);
        assert!(out.iter().all(|c| c.technique == Technique::Metaphorical));
    }

    #[test]
    fn test_emotional_uses_emotion_suffixes() {
        let lexicon = IndustryLexicon::builtin();
        let out = EmotionalGenerator.generate(&request(&["data"], None), lexicon.lookup("tech"));
        let names = names(&out);
        assert!(names.contains(&"BoldData"));
        assert!(names.contains(&"DataBold"));
        assert!(names.contains(&"SwiftHub"));
    }

    #[test]
    fn test_compound_suffixes_then_metaphors() {
        let lexicon = IndustryLexicon::builtin();
        let out = CompoundGenerator.generate(&request(&["flow"], None), lexicon.lookup("fintech"));
        let names = names(&out);
        assert_eq!(names[0], "FlowLabs");
        assert_eq!(names[6], "FlowEngine");
        assert_eq!(names[7], "VaultFlow");
        assert_eq!(out.len(), 7 + 8);
    }

    #[test]
    fn test_contextual_without_description_is_empty() {
        let lexicon = IndustryLexicon::builtin();
        let out = ContextualGenerator::default().generate(&request(&["flow"], None), lexicon.lookup("tech"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_concept_words_filtering() {
        let generator = ContextualGenerator::new(5);
        let words = generator.concept_words(
            "A platform which helps teams track, track and forecast inventory for people",
        );
        assert_eq!(words, vec!["helps", "teams", "track", "forecast", "inventory"]);
    }

    #[test]
    fn test_concept_words_limit() {
        let generator = ContextualGenerator::new(2);
        let words = generator.concept_words("alpha bravo charlie delta");
        assert_eq!(words, vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_contextual_crosses_with_metaphors() {
        let lexicon = IndustryLexicon::builtin();
        let profile = lexicon.lookup("tech");
        let out = ContextualGenerator::default()
            .generate(&request(&["flow"], Some("smarter invoices")), profile);
        assert_eq!(out.len(), 2 * profile.metaphors().len());
        assert_eq!(out[0].raw_name, "SmarterBolt");
    }
}
