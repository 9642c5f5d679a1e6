//! Industry lexicon: the vocabulary each industry contributes to naming.
//!
//! A lexicon maps an industry tag to an [`IndustryProfile`] holding metaphor
//! words, emotion words, avoid patterns, exemplar brands, blend terms and a
//! positioning clause. Lexicons are ordinary values: the engine receives one
//! at construction, so tests and the CLI can swap in their own (see
//! [`IndustryLexicon::from_yaml_file`]) without touching global state.
//!
//! Lookup never fails. Tags are matched case-insensitively, then against
//! profile aliases, and anything unresolved falls back to the default
//! profile (`tech` for the built-in lexicon).

mod builtin;

use std::collections::HashMap;
use std::path::PathBuf;

use aho_corasick::AhoCorasick;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{NamerError, Result, ResultExt};
use crate::core::phonetics::strip_to_alphanumeric;

/// Shortest avoid-pattern fragment that is matched. Shorter pieces such as
/// "to" or "pay" in "pay-to-win" would reject far too many names.
pub const MIN_AVOID_FRAGMENT: usize = 4;

/// Serializable vocabulary for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Theme words evoking the industry
    pub metaphors: Vec<String>,
    /// Emotion/value words associated with trusted brands in the industry
    pub emotions: Vec<String>,
    /// Patterns whose fragments disqualify a name
    #[serde(default)]
    pub avoid_patterns: Vec<String>,
    /// Real-world brands, for documentation and display only
    #[serde(default)]
    pub exemplars: Vec<String>,
    /// Industry terms blended with keywords by the portmanteau technique
    #[serde(default)]
    pub terms: Vec<String>,
    /// Clause completing "For <industry>, the name ..." in reasoning text
    #[serde(default)]
    pub positioning: String,
    /// Alternative tags resolving to this profile
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Case-insensitive, punctuation-blind matcher over avoid-pattern fragments.
#[derive(Debug, Clone)]
pub struct AvoidMatcher {
    fragments: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl AvoidMatcher {
    /// Each pattern contributes its punctuation-stripped whole form plus the
    /// fragments of at least [`MIN_AVOID_FRAGMENT`] characters it splits into.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut fragments: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let whole = strip_to_alphanumeric(pattern);
            let parts = pattern
                .split(|c: char| !c.is_alphanumeric())
                .map(str::to_lowercase)
                .filter(|f| f.chars().count() >= MIN_AVOID_FRAGMENT);

            for fragment in std::iter::once(whole).chain(parts) {
                if !fragment.is_empty() && !fragments.contains(&fragment) {
                    fragments.push(fragment);
                }
            }
        }

        let automaton = if fragments.is_empty() {
            None
        } else {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(&fragments)
                .ok()
        };

        Self {
            fragments,
            automaton,
        }
    }

    /// Fragments the matcher looks for, lowercased.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Whether `name` contains any fragment once punctuation is stripped.
    pub fn is_match(&self, name: &str) -> bool {
        if self.fragments.is_empty() {
            return false;
        }
        let stripped = strip_to_alphanumeric(name);
        match &self.automaton {
            Some(automaton) => automaton.is_match(&stripped),
            None => self.fragments.iter().any(|f| stripped.contains(f.as_str())),
        }
    }
}

/// A resolved industry profile ready for generation and scoring.
#[derive(Debug, Clone)]
pub struct IndustryProfile {
    tag: String,
    spec: ProfileSpec,
    avoid: AvoidMatcher,
}

impl IndustryProfile {
    /// Build a profile, lowercasing every vocabulary word.
    pub fn new(tag: impl Into<String>, spec: ProfileSpec) -> Self {
        let lower = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        let spec = ProfileSpec {
            metaphors: lower(&spec.metaphors),
            emotions: lower(&spec.emotions),
            terms: lower(&spec.terms),
            aliases: lower(&spec.aliases),
            ..spec
        };
        let avoid = AvoidMatcher::new(&spec.avoid_patterns);

        Self {
            tag: tag.into().to_lowercase(),
            spec,
            avoid,
        }
    }

    /// Canonical industry tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Metaphor words, lowercase.
    pub fn metaphors(&self) -> &[String] {
        &self.spec.metaphors
    }

    /// Emotion words, lowercase.
    pub fn emotions(&self) -> &[String] {
        &self.spec.emotions
    }

    /// Blend terms, lowercase.
    pub fn terms(&self) -> &[String] {
        &self.spec.terms
    }

    /// Exemplar brand names.
    pub fn exemplars(&self) -> &[String] {
        &self.spec.exemplars
    }

    /// Positioning clause for reasoning text.
    pub fn positioning(&self) -> &str {
        &self.spec.positioning
    }

    /// Underlying serializable vocabulary.
    pub fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    /// Whether `name` hits one of this industry's avoid patterns.
    pub fn avoids(&self, name: &str) -> bool {
        self.avoid.is_match(name)
    }

    /// The avoid matcher for this profile.
    pub fn avoid_matcher(&self) -> &AvoidMatcher {
        &self.avoid
    }
}

/// On-disk lexicon format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Tag of the profile unresolved lookups fall back to
    pub default_industry: String,
    /// Profiles keyed by industry tag, in display order
    pub industries: IndexMap<String, ProfileSpec>,
}

/// Industry tag to profile mapping with a guaranteed fallback.
#[derive(Debug, Clone)]
pub struct IndustryLexicon {
    profiles: IndexMap<String, IndustryProfile>,
    aliases: HashMap<String, String>,
    default: IndustryProfile,
}

impl IndustryLexicon {
    /// The lexicon shipped with the crate: ten industries, `tech` as default.
    pub fn builtin() -> Self {
        Self::assemble(builtin::lexicon_file())
    }

    /// Build a lexicon from its file representation after validating it.
    pub fn from_file(file: LexiconFile) -> Result<Self> {
        validate_lexicon_file(&file)?;
        Ok(Self::assemble(file))
    }

    /// Parse and validate a YAML lexicon.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: LexiconFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    /// Load and validate a YAML lexicon from disk.
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let file: LexiconFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;
        Self::from_file(file)
    }

    /// File representation of this lexicon.
    pub fn to_file(&self) -> LexiconFile {
        LexiconFile {
            default_industry: self.default.tag.clone(),
            industries: self
                .profiles
                .iter()
                .map(|(tag, profile)| (tag.clone(), profile.spec.clone()))
                .collect(),
        }
    }

    // Callers guarantee the default tag names one of the industries: the
    // built-in data is covered by tests, loaded files go through validation.
    fn assemble(file: LexiconFile) -> Self {
        let default_tag = normalize_tag(&file.default_industry);
        let mut profiles = IndexMap::new();
        let mut aliases = HashMap::new();

        for (tag, spec) in file.industries {
            let profile = IndustryProfile::new(normalize_tag(&tag), spec);
            for alias in &profile.spec.aliases {
                aliases.insert(normalize_tag(alias), profile.tag.clone());
            }
            profiles.insert(profile.tag.clone(), profile);
        }

        let default = profiles
            .get(&default_tag)
            .cloned()
            .unwrap_or_else(|| IndustryProfile::new(default_tag, builtin::fallback_spec()));

        Self {
            profiles,
            aliases,
            default,
        }
    }

    /// Resolve a tag to its profile; never fails.
    pub fn lookup(&self, industry: &str) -> &IndustryProfile {
        self.resolve(industry).0
    }

    /// Resolve a tag, also reporting whether the default was substituted.
    pub fn resolve(&self, industry: &str) -> (&IndustryProfile, bool) {
        let tag = normalize_tag(industry);
        if let Some(profile) = self.profiles.get(&tag) {
            return (profile, false);
        }
        if let Some(profile) = self.aliases.get(&tag).and_then(|t| self.profiles.get(t)) {
            return (profile, false);
        }
        debug!(
            "Unknown industry '{}', falling back to '{}'",
            industry, self.default.tag
        );
        (&self.default, true)
    }

    /// The fallback profile.
    pub fn default_profile(&self) -> &IndustryProfile {
        &self.default
    }

    /// All profiles in lexicon order.
    pub fn profiles(&self) -> impl Iterator<Item = &IndustryProfile> {
        self.profiles.values()
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the lexicon has no profiles of its own.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for IndustryLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Canonical form of an industry tag: trimmed, lowercase, `_` and spaces as `-`.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

fn validate_lexicon_file(file: &LexiconFile) -> Result<()> {
    if file.industries.is_empty() {
        return Err(NamerError::lexicon("lexicon defines no industries"));
    }

    let default_tag = normalize_tag(&file.default_industry);
    if !file
        .industries
        .keys()
        .any(|tag| normalize_tag(tag) == default_tag)
    {
        return Err(NamerError::lexicon_industry(
            "default industry is not defined in the lexicon",
            file.default_industry.clone(),
        ));
    }

    for (tag, spec) in &file.industries {
        if spec.metaphors.iter().all(|w| w.trim().is_empty()) {
            return Err(NamerError::lexicon_industry(
                "profile needs at least one metaphor",
                tag.clone(),
            ));
        }
        if spec.emotions.iter().all(|w| w.trim().is_empty()) {
            return Err(NamerError::lexicon_industry(
                "profile needs at least one emotion word",
                tag.clone(),
            ));
        }
    }

    Ok(())
}
