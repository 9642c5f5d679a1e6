//! # Startup Namer: Rule-Based Brand Name Generation
//!
//! A deterministic engine that turns a handful of keywords, an industry and a
//! style hint into a ranked list of brandable startup names. It combines:
//!
//! - **Industry Lexicons**: metaphors, emotion words, blend terms and avoid
//!   patterns per industry, injected as plain values
//! - **Candidate Generators**: eight naming techniques from metaphor pairs to
//!   portmanteau blends and invented words
//! - **Quality Scoring**: six heuristic sub-scores folded into a weighted
//!   overall score
//! - **Filter & Rank**: threshold filtering, avoid-pattern rejection and
//!   stable multi-key ranking
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       NamingEngine (api)                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Normalize → Generate → Dedupe → Score → Filter → Rank → Describe │
//! ├───────────────┬───────────────┬──────────────┬───────────────┤
//! │  generators   │  core         │  lexicon     │  config       │
//! │ • lexical     │ • scoring     │ • profiles   │ • generation  │
//! │ • morphology  │ • pipeline    │ • avoid      │ • scoring     │
//! │               │ • description │   matching   │ • filter      │
//! └───────────────┴───────────────┴──────────────┴───────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use startup_namer::{NamingEngine, NamingRequest};
//!
//! let engine = NamingEngine::with_defaults();
//! let request = NamingRequest::new(["flow", "data"])
//!     .with_industry("saas")
//!     .with_style("modern");
//!
//! let results = engine.generate(&request);
//! assert!(results.len() <= 50);
//! for name in &results.names {
//!     println!("{} ({:.1})", name.name, name.overall_score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Memory allocator selection (mutually exclusive)
#[cfg(all(feature = "mimalloc", not(feature = "jemalloc")))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(all(feature = "jemalloc", not(feature = "mimalloc")))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

// Core algorithms and shared infrastructure
pub mod core {
    //! Core scoring algorithms, pipeline stages and configuration.

    pub mod config;
    pub mod description;
    pub mod errors;
    pub mod phonetics;
    pub mod pipeline;
    pub mod scoring;
}

// Naming techniques
pub mod generators;

// Industry vocabulary
pub mod lexicon;

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod request;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::NamingEngine;
pub use api::request::NamingRequest;
pub use api::results::{NameEvaluation, NamingMetadata, NamingResponse, NamingResults, ScoredName};
pub use core::config::NamerConfig;
pub use core::errors::{NamerError, Result, ResultExt};
pub use core::scoring::ScoreSet;
pub use generators::Technique;
pub use lexicon::{IndustryLexicon, IndustryProfile};
