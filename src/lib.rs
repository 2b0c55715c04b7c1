//! # Soussou Morph: Numeral Morphological Analysis Engine
//!
//! Explains how Soussou numerals (1-9999) are built: positional
//! decomposition, pattern labels, construction steps, and a laid-out
//! decomposition tree of the canonical text.
//!
//! ## Components
//!
//! 1. **Decomposer** - splits a number into thousands/hundreds/tens/units
//!    - `decompose(1204, &config)` → `{thousands: 1, hundreds: 2, units: 4}`
//! 2. **Pattern Classifier** - base-number, teen/additive, decade-multiple,
//!    centesimal, connector-usage; plus a difficulty tier
//! 3. **Construction Steps** - "Thousands: 1 × 1000", ... highest tier first
//! 4. **Tree Builder** - splits canonical text around the connector `nŭn`
//! 5. **Similarity Scorer** - recursive longest-common-substring percentage
//!
//! Canonical text comes from a [`LookupProvider`]: a dataset table, the
//! rule-based generator, or both chained.
//!
//! ## Example Usage
//!
//! ```
//! use soussou_morph::NumeralAnalyzer;
//!
//! let analyzer = NumeralAnalyzer::default();
//! let result = analyzer.analyze(1004)?;
//!
//! assert_eq!(result.canonical_text.as_deref(), Some("wúlù kérén nŭn náání"));
//! assert_eq!(result.tree.children.len(), 2);
//!
//! let score = analyzer.score("wulu keren nun naani", "wúlù kérén nŭn náání");
//! assert!(score.percentage > 0.0 && score.percentage < 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod decompose;
pub mod lexicon;
pub mod lookup;
pub mod rules;
pub mod similarity;
pub mod steps;
pub mod tree;
pub mod types;

// Re-export main types and functions for convenience
pub use analyzer::NumeralAnalyzer;
pub use config::{EngineConfig, LayoutConfig, DEFAULT_CONNECTOR};
pub use decompose::decompose;
pub use lexicon::{tag_morphemes, Lexicon};
pub use lookup::{FallbackLookup, LookupProvider, MapLookup, RuleBasedLookup};
pub use rules::PatternClassifier;
pub use similarity::{classify_mismatch, normalize, score, translations_match, validate_answer};
pub use steps::{explain, generate_steps};
pub use tree::TreeBuilder;
pub use types::{
    AnalysisError, AnalysisResult, AnswerCheck, ConfigError, ConstructionStep, DifficultyTier,
    LookupError, MismatchKind, MorphologicalNode, NumberMagnitudes, PatternLabel, RangeOutcome,
    SimilarityScore, Tier, TransportError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
