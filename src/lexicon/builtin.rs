//! Vocabulary tables for the built-in lexicon.

use indexmap::IndexMap;

use super::{LexiconFile, ProfileSpec};

pub(super) const DEFAULT_INDUSTRY: &str = "tech";

struct ProfileTable {
    tag: &'static str,
    metaphors: &'static [&'static str],
    emotions: &'static [&'static str],
    avoid_patterns: &'static [&'static str],
    exemplars: &'static [&'static str],
    terms: &'static [&'static str],
    positioning: &'static str,
    aliases: &'static [&'static str],
}

const PROFILES: &[ProfileTable] = &[
    ProfileTable {
        tag: "tech",
        metaphors: &["bolt", "spark", "pulse", "nexus", "orbit", "forge", "beacon", "vector"],
        emotions: &["bold", "bright", "swift", "smart", "clear", "agile"],
        avoid_patterns: &["outdated-legacy", "clunky-slow", "boring-generic"],
        exemplars: &["Stripe", "Twilio", "Vercel", "Figma"],
        terms: &["tech", "data", "code", "byte", "logic", "core"],
        positioning: "signals technical ambition without tying the brand to one product",
        aliases: &["technology", "software", "dev", "developer-tools"],
    },
    ProfileTable {
        tag: "ai",
        metaphors: &["mind", "neuron", "spark", "lens", "oracle", "cortex", "synapse", "prism"],
        emotions: &["smart", "curious", "clever", "insight", "vision", "genius"],
        avoid_patterns: &["robot-overlord", "skynet", "dystopia"],
        exemplars: &["OpenAI", "Anthropic", "Cohere", "Jasper"],
        terms: &["mind", "brain", "logic", "neural", "data", "learn"],
        positioning: "suggests intelligence that people can trust",
        aliases: &["ml", "machine-learning", "artificial-intelligence"],
    },
    ProfileTable {
        tag: "saas",
        metaphors: &["sync", "hub", "stack", "forge", "craft", "build", "scale", "cloud"],
        emotions: &[
            "effortless",
            "intuitive",
            "empowered",
            "frictionless",
            "streamlined",
            "dependable",
        ],
        avoid_patterns: &["complex-enterprise", "boring-corporate", "generic-software"],
        exemplars: &["Slack", "Notion", "Airtable", "Zapier"],
        terms: &["cloud", "stack", "suite", "desk", "base", "flow"],
        positioning: "fits a product teams adopt daily and recommend",
        aliases: &["software-as-a-service", "b2b", "productivity"],
    },
    ProfileTable {
        tag: "fintech",
        metaphors: &["vault", "ledger", "anchor", "compass", "harbor", "summit", "mint", "bridge"],
        emotions: &["trust", "secure", "steady", "clear", "prime", "smart"],
        avoid_patterns: &["risky-gambling", "quick-rich", "scam-debt"],
        exemplars: &["Stripe", "Plaid", "Revolut", "Wise"],
        terms: &["pay", "fund", "coin", "cash", "bank", "fin"],
        positioning: "conveys the stability customers expect from their money",
        aliases: &["finance", "financial", "banking", "payments", "fin-tech"],
    },
    ProfileTable {
        tag: "healthcare",
        metaphors: &["pulse", "heart", "haven", "beacon", "bloom", "vital", "harbor", "care"],
        emotions: &["caring", "gentle", "trusted", "calm", "hope", "whole"],
        avoid_patterns: &["sick-disease", "pain-death", "clinical-cold"],
        exemplars: &["Oscar", "Headspace", "Zocdoc", "Calm"],
        terms: &["care", "health", "med", "well", "vita", "cure"],
        positioning: "feels warm and reassuring to patients and clinicians alike",
        aliases: &["health", "medical", "healthtech", "wellness"],
    },
    ProfileTable {
        tag: "ecommerce",
        metaphors: &["cart", "market", "bazaar", "basket", "bloom", "spark", "harbor", "loop"],
        emotions: &["delight", "joy", "fresh", "vivid", "happy", "easy"],
        avoid_patterns: &["cheap-knockoff", "spammy-offers"],
        exemplars: &["Shopify", "Etsy", "Glossier", "Warby"],
        terms: &["shop", "cart", "buy", "deal", "store", "mart"],
        positioning: "invites shoppers in and keeps them coming back",
        aliases: &["e-commerce", "retail", "commerce", "shopping"],
    },
    ProfileTable {
        tag: "education",
        metaphors: &["scholar", "lantern", "compass", "atlas", "quest", "summit", "spark", "path"],
        emotions: &["curious", "bright", "inspire", "wise", "growth", "bold"],
        avoid_patterns: &["boring-lecture", "rote-cramming"],
        exemplars: &["Duolingo", "Coursera", "Khan", "Quizlet"],
        terms: &["learn", "edu", "mind", "skill", "study", "tutor"],
        positioning: "promises growth to learners of every age",
        aliases: &["edtech", "learning", "school", "e-learning"],
    },
    ProfileTable {
        tag: "sustainability",
        metaphors: &["leaf", "terra", "tide", "grove", "solar", "root", "canopy", "ember"],
        emotions: &["pure", "fresh", "renew", "vital", "kind", "green"],
        avoid_patterns: &["toxic-waste", "smog-pollution", "greenwash"],
        exemplars: &["Patagonia", "Allbirds", "Tesla", "Ecosia"],
        terms: &["eco", "green", "terra", "sol", "leaf", "earth"],
        positioning: "speaks to customers who care about the planet",
        aliases: &["green", "climate", "cleantech", "eco"],
    },
    ProfileTable {
        tag: "gaming",
        metaphors: &["quest", "pixel", "arcade", "legend", "realm", "forge", "blitz", "nova"],
        emotions: &["epic", "wild", "bold", "thrill", "fierce", "play"],
        avoid_patterns: &["pay-to-win", "lootbox-scam", "grind-fest"],
        exemplars: &["Riot", "Discord", "Twitch", "Valve"],
        terms: &["play", "game", "quest", "level", "pixel", "arena"],
        positioning: "carries the energy players expect from a new title",
        aliases: &["games", "esports", "game-dev"],
    },
    ProfileTable {
        tag: "food",
        metaphors: &[
            "harvest", "hearth", "orchard", "spice", "kettle", "table", "garden", "pantry",
        ],
        emotions: &["fresh", "savory", "cozy", "zesty", "wholesome", "joy"],
        avoid_patterns: &["greasy-junk", "stale-bland"],
        exemplars: &["Sweetgreen", "HelloFresh", "Oatly", "Chobani"],
        terms: &["food", "feast", "bite", "chef", "fresh", "dish"],
        positioning: "makes the product sound good enough to eat",
        aliases: &["foodtech", "restaurant", "grocery", "beverage"],
    },
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl ProfileTable {
    fn to_spec(&self) -> ProfileSpec {
        ProfileSpec {
            metaphors: owned(self.metaphors),
            emotions: owned(self.emotions),
            avoid_patterns: owned(self.avoid_patterns),
            exemplars: owned(self.exemplars),
            terms: owned(self.terms),
            positioning: self.positioning.to_string(),
            aliases: owned(self.aliases),
        }
    }
}

pub(super) fn lexicon_file() -> LexiconFile {
    let industries: IndexMap<String, ProfileSpec> = PROFILES
        .iter()
        .map(|table| (table.tag.to_string(), table.to_spec()))
        .collect();

    LexiconFile {
        default_industry: DEFAULT_INDUSTRY.to_string(),
        industries,
    }
}

/// Vocabulary used if a lexicon's default tag is somehow missing.
pub(super) fn fallback_spec() -> ProfileSpec {
    PROFILES[0].to_spec()
}
