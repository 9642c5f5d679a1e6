//! Naming request types.

use serde::{Deserialize, Serialize};

use crate::core::config::GenerationConfig;
use crate::generators::Technique;

/// A naming request as received from a caller.
///
/// Every field is optional on the wire; missing keywords are replaced by the
/// configured default keyword and a missing industry resolves to the
/// lexicon's default profile.
///
/// ```
/// use startup_namer::NamingRequest;
///
/// let request = NamingRequest::new(["flow", "data"])
///     .with_industry("saas")
///     .with_style("modern");
/// assert_eq!(request.keywords.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingRequest {
    /// Seed keywords, case-insensitive
    pub keywords: Vec<String>,
    /// Industry tag
    pub industry: Option<String>,
    /// Style hint used in descriptions
    pub style: Option<String>,
    /// Free-text business description for the contextual technique
    pub description: Option<String>,
    /// Techniques to run; `None` runs the configured set
    pub techniques: Option<Vec<Technique>>,
}

impl NamingRequest {
    /// Request for the given keywords with every other field defaulted.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the industry tag
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the style hint
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the business description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict generation to the given techniques
    pub fn with_techniques(mut self, techniques: Vec<Technique>) -> Self {
        self.techniques = Some(techniques);
        self
    }
}

/// A request after normalization, as seen by the generators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedRequest {
    /// Lowercase alphanumeric keywords, distinct, never empty after `prepare`
    pub keywords: Vec<String>,
    /// Industry tag as supplied, or empty
    pub industry: String,
    /// Style hint, defaulted
    pub style: String,
    /// Trimmed description, `None` when blank
    pub description: Option<String>,
    /// Techniques to run, distinct, in run order
    pub techniques: Vec<Technique>,
    /// Whether the default keyword replaced an empty keyword list
    pub keyword_substituted: bool,
}

impl PreparedRequest {
    /// Normalize a request. Never fails: unusable keywords are dropped and
    /// the default keyword substituted when none remain.
    pub fn prepare(request: &NamingRequest, config: &GenerationConfig) -> Self {
        let mut keywords: Vec<String> = Vec::new();
        for keyword in &request.keywords {
            let normalized = normalize_keyword(keyword);
            if !normalized.is_empty() && !keywords.contains(&normalized) {
                keywords.push(normalized);
            }
        }

        let keyword_substituted = keywords.is_empty();
        if keyword_substituted {
            let fallback = normalize_keyword(&config.default_keyword);
            keywords.push(if fallback.is_empty() {
                "startup".to_string()
            } else {
                fallback
            });
        }

        let style = request
            .style
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(config.default_style.as_str())
            .to_string();

        let description = request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let requested = request
            .techniques
            .as_ref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&config.techniques);
        let mut techniques: Vec<Technique> = Vec::with_capacity(requested.len());
        for &technique in requested {
            if !techniques.contains(&technique) {
                techniques.push(technique);
            }
        }

        Self {
            keywords,
            industry: request.industry.clone().unwrap_or_default(),
            style,
            description,
            techniques,
            keyword_substituted,
        }
    }
}

/// Trim, lowercase and keep alphanumeric characters only.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_normalized_and_deduped() {
        let request = NamingRequest::new(["  Flow ", "DATA!", "flow", "--", ""]);
        let prepared = PreparedRequest::prepare(&request, &GenerationConfig::default());
        assert_eq!(prepared.keywords, vec!["flow", "data"]);
        assert!(!prepared.keyword_substituted);
    }

    #[test]
    fn test_empty_keywords_substitute_default() {
        let prepared =
            PreparedRequest::prepare(&NamingRequest::default(), &GenerationConfig::default());
        assert_eq!(prepared.keywords, vec!["startup"]);
        assert!(prepared.keyword_substituted);
        assert_eq!(prepared.style, "modern");
    }

    #[test]
    fn test_blank_description_is_none() {
        let request = NamingRequest::new(["flow"]).with_description("   ");
        let prepared = PreparedRequest::prepare(&request, &GenerationConfig::default());
        assert!(prepared.description.is_none());
    }

    #[test]
    fn test_techniques_default_to_config() {
        let prepared =
            PreparedRequest::prepare(&NamingRequest::new(["flow"]), &GenerationConfig::default());
        assert_eq!(prepared.techniques, Technique::all());

        let request = NamingRequest::new(["flow"]).with_techniques(vec![
            Technique::Invented,
            Technique::Portmanteau,
            Technique::Invented,
        ]);
        let prepared = PreparedRequest::prepare(&request, &GenerationConfig::default());
        assert_eq!(
            prepared.techniques,
            vec![Technique::Invented, Technique::Portmanteau]
        );
    }

    #[test]
    fn test_request_deserializes_from_camel_case_json() {
        let json = r#"{"keywords":["flow"],"industry":"saas","techniques":["portmanteau"]}"#;
        let request: NamingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.industry.as_deref(), Some("saas"));
        assert_eq!(request.techniques, Some(vec![Technique::Portmanteau]));
        assert!(request.style.is_none());
    }
}
