//! Word-shaping techniques: portmanteau, invented, cultural, neologism.
//!
//! These generators splice fragments below word level and emit lowercase raw
//! names; display casing is applied once when a candidate is scored.

use crate::api::request::PreparedRequest;
use crate::lexicon::IndustryProfile;

use super::{NameCandidate, NameGenerator, Technique};

const INVENTED_PREFIXES: &[&str] = &["neo", "pro", "meta", "ultra", "hyper", "omni", "zen", "flux"];
const INVENTED_SUFFIXES: &[&str] = &["ify", "ize", "ly", "io", "ax", "ex", "ix", "on"];
const PHONETIC_PREFIXES: &[&str] = &["qu", "zr", "vx", "zy", "nx", "rx"];

const CULTURAL_PREFIXES: &[&str] = &["astra", "nova", "terra", "aqua", "ignis", "aero", "vita", "lux"];
const CULTURAL_SUFFIXES: &[&str] = &["os", "is", "us", "on", "ia", "ys"];

const NEOLOGISM_PREFIXES: &[&str] = &["zi", "qu", "vr", "nx", "zy", "rx"];
const NEOLOGISM_SUFFIXES: &[&str] = &["ly", "fy", "io", "ax", "ex", "on"];

/// Blend two words: the first 60% of `a` (rounded up) followed by `b` from
/// its 40% mark (rounded down). Works on characters, not bytes.
pub fn blend(a: &str, b: &str) -> String {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let head = (3 * a_len + 4) / 5;
    let tail_start = (2 * b_len) / 5;

    a.chars()
        .take(head)
        .chain(b.chars().skip(tail_start))
        .collect()
}

fn affixed(
    out: &mut Vec<NameCandidate>,
    keyword: &str,
    prefixes: &[&str],
    suffixes: &[&str],
    technique: Technique,
) {
    for prefix in prefixes {
        out.push(NameCandidate::new(format!("{prefix}{keyword}"), technique));
    }
    for suffix in suffixes {
        out.push(NameCandidate::new(format!("{keyword}{suffix}"), technique));
    }
}

/// Blends of keywords with industry terms and with each other.
#[derive(Debug, Clone, Copy)]
pub struct PortmanteauGenerator {
    min_length: usize,
    max_length: usize,
}

impl PortmanteauGenerator {
    /// Generator keeping blends whose length lies in `min_length..=max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    fn push_blend(&self, out: &mut Vec<NameCandidate>, a: &str, b: &str) {
        let blended = blend(a, b);
        let len = blended.chars().count();
        if (self.min_length..=self.max_length).contains(&len) {
            out.push(NameCandidate::new(blended, Technique::Portmanteau));
        }
    }
}

impl Default for PortmanteauGenerator {
    fn default() -> Self {
        Self::new(4, 15)
    }
}

impl NameGenerator for PortmanteauGenerator {
    fn technique(&self) -> Technique {
        Technique::Portmanteau
    }

    fn generate(&self, request: &PreparedRequest, profile: &IndustryProfile) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        let keywords = &request.keywords;

        for keyword in keywords {
            for term in profile.terms() {
                self.push_blend(&mut out, keyword, term);
                self.push_blend(&mut out, term, keyword);
            }
        }

        for (i, first) in keywords.iter().enumerate() {
            for second in &keywords[i + 1..] {
                self.push_blend(&mut out, first, second);
            }
        }

        out
    }
}

/// Invented words: coined prefixes and suffixes plus phonetic onset swaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct InventedGenerator;

impl NameGenerator for InventedGenerator {
    fn technique(&self) -> Technique {
        Technique::Invented
    }

    fn generate(&self, request: &PreparedRequest, _profile: &IndustryProfile) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        for keyword in &request.keywords {
            affixed(
                &mut out,
                keyword,
                INVENTED_PREFIXES,
                INVENTED_SUFFIXES,
                self.technique(),
            );

            let mut chars = keyword.chars();
            if chars.next().is_some() && !chars.as_str().is_empty() {
                let rest = chars.as_str();
                for prefix in PHONETIC_PREFIXES {
                    out.push(NameCandidate::new(format!("{prefix}{rest}"), self.technique()));
                }
            }
        }
        out
    }
}

/// Classical and mythic affixes: "astraflow", "flowia".
#[derive(Debug, Default, Clone, Copy)]
pub struct CulturalGenerator;

impl NameGenerator for CulturalGenerator {
    fn technique(&self) -> Technique {
        Technique::Cultural
    }

    fn generate(&self, request: &PreparedRequest, _profile: &IndustryProfile) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        for keyword in &request.keywords {
            affixed(
                &mut out,
                keyword,
                CULTURAL_PREFIXES,
                CULTURAL_SUFFIXES,
                self.technique(),
            );
        }
        out
    }
}

/// Truncated stems with unusual affixes: "zyflo", "floly".
#[derive(Debug, Default, Clone, Copy)]
pub struct NeologismGenerator;

impl NameGenerator for NeologismGenerator {
    fn technique(&self) -> Technique {
        Technique::Neologism
    }

    fn generate(&self, request: &PreparedRequest, _profile: &IndustryProfile) -> Vec<NameCandidate> {
        let mut out = Vec::new();
        for keyword in &request.keywords {
            let stem_len = keyword.chars().count().saturating_sub(1);
            if stem_len < 2 {
                continue;
            }
            let stem: String = keyword.chars().take(stem_len).collect();
            affixed(
                &mut out,
                &stem,
                NEOLOGISM_PREFIXES,
                NEOLOGISM_SUFFIXES,
                self.technique(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::IndustryLexicon;

    fn request(keywords: &[&str]) -> PreparedRequest {
        PreparedRequest {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..PreparedRequest::default()
        }
    }

    fn names(candidates: &[NameCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.raw_name.as_str()).collect()
    }

    #[test]
    fn test_blend_proportions() {
        // ceil(4 * 0.6) = 3, floor(4 * 0.4) = 1
        assert_eq!(blend("flow", "data"), "floata");
        // ceil(5 * 0.6) = 3, floor(5 * 0.4) = 2
        assert_eq!(blend("cloud", "stack"), "cloack");
        assert_eq!(blend("a", "b"), "ab");
        assert_eq!(blend("", ""), "");
    }

    #[test]
    fn test_blend_counts_chars_not_bytes() {
        assert_eq!(blend("café", "data"), "cafata");
    }

    #[test]
    fn test_portmanteau_respects_length_window() {
        let lexicon = IndustryLexicon::builtin();
        let out = PortmanteauGenerator::default().generate(&request(&["flow", "data"]), lexicon.lookup("saas"));
        assert!(!out.is_empty());
        for candidate in &out {
            let len = candidate.raw_name.chars().count();
            assert!((4..=15).contains(&len), "{} out of window", candidate.raw_name);
        }
        assert!(names(&out).contains(&"floata"));
    }

    #[test]
    fn test_portmanteau_drops_short_blends() {
        let lexicon = IndustryLexicon::builtin();
        let generator = PortmanteauGenerator::new(5, 15);
        // "ab" x "fin" blends to "abin" and "fiab", both too short
        let out = generator.generate(&request(&["ab"]), lexicon.lookup("fintech"));
        assert!(out.len() < 2 * lexicon.lookup("fintech").terms().len());
        assert!(out.iter().all(|c| c.raw_name.chars().count() >= 5));
        assert!(!names(&out).contains(&"abin"));
    }

    #[test]
    fn test_invented_shapes() {
        let lexicon = IndustryLexicon::builtin();
        let out = InventedGenerator.generate(&request(&["flow"]), lexicon.lookup("tech"));
        let names = names(&out);
        assert_eq!(out.len(), 8 + 8 + 6);
        assert!(names.contains(&"neoflow"));
        assert!(names.contains(&"flowify"));
        assert!(names.contains(&"zrlow"));
    }

    #[test]
    fn test_invented_skips_phonetic_for_single_char() {
        let lexicon = IndustryLexicon::builtin();
        let out = InventedGenerator.generate(&request(&["x"]), lexicon.lookup("tech"));
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn test_cultural_shapes() {
        let lexicon = IndustryLexicon::builtin();
        let out = CulturalGenerator.generate(&request(&["data"]), lexicon.lookup("tech"));
        let names = names(&out);
        assert_eq!(out.len(), 14);
        assert_eq!(names[0], "astradata");
        assert_eq!(names[13], "datays");
    }

    #[test]
    fn test_neologism_uses_stem() {
        let lexicon = IndustryLexicon::builtin();
        let out = NeologismGenerator.generate(&request(&["flow", "ai"]), lexicon.lookup("tech"));
        let names = names(&out);
        assert_eq!(out.len(), 12);
        assert!(names.contains(&"ziflo"));
        assert!(names.contains(&"floly"));
        assert!(!names.iter().any(|n| n.contains("ai")));
    }
}
