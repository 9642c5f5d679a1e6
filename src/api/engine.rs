//! Main naming engine implementation.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::api::request::{NamingRequest, PreparedRequest};
use crate::api::results::{NameEvaluation, NamingMetadata, NamingResults, ScoredName};
use crate::core::config::{FilterThresholds, GenerationConfig, NamerConfig};
use crate::core::description::describe;
use crate::core::errors::Result;
use crate::core::pipeline::{
    dedupe_candidates, filter_and_rank, passes_filter, score_candidates, ScoredCandidate,
};
use crate::core::scoring::QualityScorer;
use crate::generators::{registry, GeneratorRegistry, NameCandidate, Technique};
use crate::lexicon::{IndustryLexicon, IndustryProfile};

/// Main naming engine.
///
/// Owns a validated configuration, the industry lexicon and one generator per
/// technique. Generation is synchronous and touches no shared mutable state,
/// so an engine can be shared by reference across threads.
pub struct NamingEngine {
    config: NamerConfig,
    lexicon: IndustryLexicon,
    scorer: QualityScorer,
    generators: GeneratorRegistry,
}

impl NamingEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: NamerConfig, lexicon: IndustryLexicon) -> Result<Self> {
        config.validate()?;

        let scorer = QualityScorer::new(config.scoring.weights.clone());
        let generators = registry(&config.generation);

        debug!(
            "Naming engine ready: {} industries, default '{}'",
            lexicon.len(),
            lexicon.default_profile().tag()
        );

        Ok(Self {
            config,
            lexicon,
            scorer,
            generators,
        })
    }

    /// Engine with the default configuration and the built-in lexicon.
    pub fn with_defaults() -> Self {
        Self {
            scorer: QualityScorer::default(),
            generators: registry(&GenerationConfig::default()),
            config: NamerConfig::default(),
            lexicon: IndustryLexicon::builtin(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &NamerConfig {
        &self.config
    }

    /// Lexicon in use
    pub fn lexicon(&self) -> &IndustryLexicon {
        &self.lexicon
    }

    /// Run the full pipeline for a request. Never fails; an empty name list
    /// is a normal outcome.
    pub fn generate(&self, request: &NamingRequest) -> NamingResults {
        let prepared = PreparedRequest::prepare(request, &self.config.generation);
        let (profile, industry_fallback) = self.lexicon.resolve(&prepared.industry);
        if industry_fallback {
            warn!(
                "Industry '{}' is not in the lexicon; using '{}'",
                prepared.industry,
                profile.tag()
            );
        }

        info!(
            "Generating names for {:?} in '{}' ({} techniques)",
            prepared.keywords,
            profile.tag(),
            prepared.techniques.len()
        );

        let (candidates, technique_counts) = self.generate_candidates(&prepared, profile);
        let total_candidates = candidates.len();

        let unique = dedupe_candidates(candidates);
        debug!(
            "Deduplicated {} candidates to {}",
            total_candidates,
            unique.len()
        );

        let scored = score_candidates(&unique, &self.scorer, profile);
        let cap = self.config.output.max_results;

        let mut relaxed_retry_applied = false;
        let mut passed = Self::count_passing(&scored, profile, &self.config.filter.thresholds);
        let mut ranked = filter_and_rank(&scored, profile, &self.config.filter.thresholds, cap);

        if ranked.is_empty() && self.config.filter.relaxed_retry && !scored.is_empty() {
            warn!(
                "No names passed the standard filter for {:?}; retrying with relaxed thresholds",
                prepared.keywords
            );
            passed = Self::count_passing(&scored, profile, &self.config.filter.relaxed);
            ranked = filter_and_rank(&scored, profile, &self.config.filter.relaxed, cap);
            relaxed_retry_applied = true;
        }

        let names: Vec<ScoredName> = ranked
            .into_iter()
            .map(|candidate| self.to_scored_name(candidate, &prepared.style, profile))
            .collect();

        info!(
            "Returning {} names ({} passed of {} unique)",
            names.len(),
            passed,
            unique.len()
        );

        NamingResults {
            metadata: NamingMetadata {
                keywords: prepared.keywords.clone(),
                keyword_substituted: prepared.keyword_substituted,
                industry: profile.tag().to_string(),
                industry_fallback,
                style: prepared.style.clone(),
                total_candidates,
                unique_candidates: unique.len(),
                passed_filter: passed,
                returned: names.len(),
                technique_counts,
                relaxed_retry_applied,
            },
            names,
        }
    }

    /// Raw candidates from every requested technique, in run order.
    pub fn generate_candidates(
        &self,
        prepared: &PreparedRequest,
        profile: &IndustryProfile,
    ) -> (Vec<NameCandidate>, IndexMap<Technique, usize>) {
        let mut candidates = Vec::new();
        let mut counts = IndexMap::new();

        for technique in &prepared.techniques {
            let Some(generator) = self.generators.get(technique) else {
                continue;
            };
            let produced = generator.generate(prepared, profile);
            debug!("{} produced {} candidates", technique, produced.len());
            counts.insert(*technique, produced.len());
            candidates.extend(produced);
        }

        (candidates, counts)
    }

    /// Score and describe an arbitrary name against an industry.
    pub fn score_name(&self, name: &str, industry: &str) -> ScoredName {
        self.evaluate_name(name, industry).scored
    }

    /// Score a name and report whether it would survive the standard filter.
    pub fn evaluate_name(&self, name: &str, industry: &str) -> NameEvaluation {
        let profile = self.lexicon.lookup(industry);
        let name = name.trim();
        let scores = self.scorer.score(name, None, profile);
        let overall = self.scorer.overall(&scores);
        let text = describe(
            name,
            &self.config.generation.default_style,
            None,
            &scores,
            profile,
        );

        let passes = passes_filter(
            name,
            &scores,
            overall,
            profile,
            &self.config.filter.thresholds,
        );

        NameEvaluation {
            scored: ScoredName {
                name: name.to_string(),
                scores,
                overall_score: overall,
                description: text.description,
                reasoning: text.reasoning,
                technique: None,
                industry: profile.tag().to_string(),
            },
            passes_filter: passes,
            avoid_hit: profile.avoids(name),
        }
    }

    fn count_passing(
        scored: &[ScoredCandidate],
        profile: &IndustryProfile,
        thresholds: &FilterThresholds,
    ) -> usize {
        scored
            .iter()
            .filter(|c| c.passes(profile, thresholds))
            .count()
    }

    fn to_scored_name(
        &self,
        candidate: ScoredCandidate,
        style: &str,
        profile: &IndustryProfile,
    ) -> ScoredName {
        let text = describe(
            &candidate.name,
            style,
            Some(candidate.technique),
            &candidate.scores,
            profile,
        );
        ScoredName {
            name: candidate.name,
            scores: candidate.scores,
            overall_score: candidate.overall,
            description: text.description,
            reasoning: text.reasoning,
            technique: Some(candidate.technique),
            industry: profile.tag().to_string(),
        }
    }
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
