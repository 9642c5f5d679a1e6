//! Candidate name generators.
//!
//! Each naming technique is a [`NameGenerator`] producing raw candidates from
//! a normalized request and an industry profile. Generators are independent
//! and side-effect free; the engine runs them in registry order and the
//! first technique to produce a name owns it after deduplication, so the
//! order of [`Technique::all`] is part of the observable behaviour.

pub mod lexical;
pub mod morphology;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::request::PreparedRequest;
use crate::core::config::GenerationConfig;
use crate::core::errors::NamerError;
use crate::lexicon::IndustryProfile;

pub use lexical::{CompoundGenerator, ContextualGenerator, EmotionalGenerator, MetaphoricalGenerator};
pub use morphology::{
    blend, CulturalGenerator, InventedGenerator, NeologismGenerator, PortmanteauGenerator,
};

/// Naming technique that produced a candidate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    /// Industry metaphor combined with a keyword
    Metaphorical,
    /// Industry emotion word combined with a keyword
    Emotional,
    /// Blend of two words
    Portmanteau,
    /// Keyword with invented prefixes, suffixes or phonetic twists
    Invented,
    /// Keyword with classical or mythic affixes
    Cultural,
    /// Keyword with a business suffix or metaphor
    Compound,
    /// Truncated keyword stem with unusual affixes
    Neologism,
    /// Concept word from the description combined with a metaphor
    Contextual,
}

impl Technique {
    /// Every technique, in generation order.
    pub fn all() -> Vec<Technique> {
        vec![
            Technique::Metaphorical,
            Technique::Emotional,
            Technique::Portmanteau,
            Technique::Invented,
            Technique::Cultural,
            Technique::Compound,
            Technique::Neologism,
            Technique::Contextual,
        ]
    }

    /// Wire name of the technique.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Metaphorical => "metaphorical",
            Technique::Emotional => "emotional",
            Technique::Portmanteau => "portmanteau",
            Technique::Invented => "invented",
            Technique::Cultural => "cultural",
            Technique::Compound => "compound",
            Technique::Neologism => "neologism",
            Technique::Contextual => "contextual",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = NamerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Technique::all()
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                NamerError::validation_field(
                    format!("Unknown naming technique: '{}'", s),
                    "technique",
                )
            })
    }
}

/// A raw candidate before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCandidate {
    /// Name as generated; display casing is applied later
    pub raw_name: String,
    /// Technique that produced it
    pub technique: Technique,
}

impl NameCandidate {
    /// Create a candidate.
    pub fn new(raw_name: impl Into<String>, technique: Technique) -> Self {
        Self {
            raw_name: raw_name.into(),
            technique,
        }
    }
}

/// Interface implemented by every naming technique.
pub trait NameGenerator: Send + Sync {
    /// Technique this generator implements.
    fn technique(&self) -> Technique;

    /// Produce candidates for a request. Must be deterministic and may
    /// return an empty list.
    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate>;
}

/// Build the generator for one technique.
pub fn generator_for(technique: Technique, config: &GenerationConfig) -> Box<dyn NameGenerator> {
    match technique {
        Technique::Metaphorical => Box::new(MetaphoricalGenerator),
        Technique::Emotional => Box::new(EmotionalGenerator),
        Technique::Portmanteau => Box::new(PortmanteauGenerator::new(
            config.min_blend_length,
            config.max_blend_length,
        )),
        Technique::Invented => Box::new(InventedGenerator),
        Technique::Cultural => Box::new(CulturalGenerator),
        Technique::Compound => Box::new(CompoundGenerator),
        Technique::Neologism => Box::new(NeologismGenerator),
        Technique::Contextual => Box::new(ContextualGenerator::new(config.max_context_words)),
    }
}

/// Generators keyed by technique, in [`Technique::all`] order.
pub type GeneratorRegistry = IndexMap<Technique, Box<dyn NameGenerator>>;

/// Build one generator per technique.
pub fn registry(config: &GenerationConfig) -> GeneratorRegistry {
    Technique::all()
        .into_iter()
        .map(|t| (t, generator_for(t, config)))
        .collect()
}
