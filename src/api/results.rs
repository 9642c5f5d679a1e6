//! Result types returned by the naming engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::scoring::ScoreSet;
use crate::generators::Technique;

/// A ranked, described name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredName {
    /// Display-cased name
    pub name: String,
    /// Sub-scores
    pub scores: ScoreSet,
    /// Weighted overall score
    pub overall_score: f64,
    /// One-sentence description
    pub description: String,
    /// Why the name scored as it did
    pub reasoning: String,
    /// Technique that produced the name; `None` for externally supplied names
    pub technique: Option<Technique>,
    /// Resolved industry tag
    pub industry: String,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingMetadata {
    /// Keywords after normalization and default substitution
    pub keywords: Vec<String>,
    /// Whether the default keyword was substituted
    pub keyword_substituted: bool,
    /// Resolved industry tag
    pub industry: String,
    /// Whether the requested industry fell back to the default profile
    pub industry_fallback: bool,
    /// Style used in descriptions
    pub style: String,
    /// Raw candidates produced by all generators
    pub total_candidates: usize,
    /// Candidates left after case-insensitive dedupe
    pub unique_candidates: usize,
    /// Candidates passing the quality filter
    pub passed_filter: usize,
    /// Names returned after truncation
    pub returned: usize,
    /// Raw candidates per technique, in run order
    pub technique_counts: IndexMap<Technique, usize>,
    /// Whether the relaxed thresholds were used
    pub relaxed_retry_applied: bool,
}

/// Ranked names plus run metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingResults {
    /// Ranked names, best first
    pub names: Vec<ScoredName>,
    /// Run statistics
    pub metadata: NamingMetadata,
}

impl NamingResults {
    /// Number of names returned
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no name survived filtering
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Best-ranked name, if any
    pub fn top(&self) -> Option<&ScoredName> {
        self.names.first()
    }

    /// Wrap in the success envelope used by the web API
    pub fn into_response(self) -> NamingResponse {
        NamingResponse {
            success: true,
            data: self,
        }
    }
}

/// `{ "success": true, "data": { "names": [...], "metadata": {...} } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingResponse {
    /// Always `true` for a completed generation
    pub success: bool,
    /// The results
    pub data: NamingResults,
}

/// A single name scored on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEvaluation {
    /// Scores and text for the name
    #[serde(flatten)]
    pub scored: ScoredName,
    /// Whether the name would survive the standard filter
    pub passes_filter: bool,
    /// Whether the name hits one of the industry's avoid patterns
    pub avoid_hit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoredName {
        ScoredName {
            name: "FlowSync".to_string(),
            scores: ScoreSet {
                memorability: 10.0,
                pronunciation: 10.0,
                uniqueness: 8.0,
                brandability: 9.5,
                market_appeal: 10.0,
                creativity: 8.0,
            },
            overall_score: 9.5,
            description: "d".to_string(),
            reasoning: "r".to_string(),
            technique: Some(Technique::Metaphorical),
            industry: "saas".to_string(),
        }
    }

    #[test]
    fn test_scored_name_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["overallScore"], 9.5);
        assert_eq!(value["scores"]["marketAppeal"], 10.0);
        assert_eq!(value["technique"], "metaphorical");
    }

    #[test]
    fn test_response_envelope() {
        let results = NamingResults {
            names: vec![sample()],
            metadata: NamingMetadata::default(),
        };
        let value = serde_json::to_value(results.into_response()).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["names"][0]["name"], "FlowSync");
        assert!(value["data"]["metadata"]["relaxedRetryApplied"].is_boolean());
    }
}
