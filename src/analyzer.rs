// Soussou Morph Analyzer
// Main API that orchestrates all components into one AnalysisResult

use crate::config::EngineConfig;
use crate::decompose::decompose;
use crate::lookup::{LookupProvider, RuleBasedLookup};
use crate::rules::PatternClassifier;
use crate::similarity::{normalize, score, validate_answer};
use crate::steps::{explain, generate_steps};
use crate::tree::TreeBuilder;
use crate::types::{
    AnalysisError, AnalysisResult, AnswerCheck, ConfigError, DifficultyTier, SimilarityScore,
    TransportError,
};
use rand::Rng;

/// Numeral analysis engine
///
/// Combines all components:
/// - Positional decomposition (tier magnitudes)
/// - Pattern classification (labels + difficulty)
/// - Construction steps and explanation
/// - Tree building (connector segments + layout)
/// - Canonical text lookup through a pluggable provider
pub struct NumeralAnalyzer<P: LookupProvider = RuleBasedLookup> {
    config: EngineConfig,
    classifier: PatternClassifier,
    tree_builder: TreeBuilder,
    provider: P,
}

impl<P: LookupProvider> NumeralAnalyzer<P> {
    /// Create an analyzer over a lookup provider
    ///
    /// # Arguments
    /// * `config` - Range, connector, layout and lexicon
    /// * `provider` - Source of canonical text
    ///
    /// # Returns
    /// The analyzer, or the `ConfigError` from `EngineConfig::validate`
    pub fn new(config: EngineConfig, provider: P) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            classifier: PatternClassifier::new(&config),
            tree_builder: TreeBuilder::new(&config),
            config,
            provider,
        })
    }

    /// Analyze one number
    ///
    /// # Returns
    /// The full result, or `OutOfRange` when the number lies outside the
    /// configured bounds. An unknown number is not an error: the result has
    /// no canonical text and a root-only tree.
    pub fn analyze(&self, number: u32) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(number, "analyzing");

        let magnitudes = decompose(number, &self.config)?;

        let canonical_text = self.canonical_text(number);
        if canonical_text.is_none() {
            tracing::warn!(number, "no canonical text available");
        }
        let text = canonical_text.as_deref();

        let result = AnalysisResult {
            number,
            magnitudes,
            difficulty: PatternClassifier::difficulty(number),
            pattern_labels: self.classifier.classify(number, text),
            construction_steps: generate_steps(&magnitudes),
            tree: self.tree_builder.build(number, text),
            explanation: explain(number, text),
            canonical_text,
        };

        tracing::debug!(
            number,
            labels = result.pattern_labels.len(),
            steps = result.construction_steps.len(),
            "analysis complete"
        );
        Ok(result)
    }

    /// Analyze several numbers, one result per input in order
    pub fn analyze_batch(&self, numbers: &[u32]) -> Vec<Result<AnalysisResult, AnalysisError>> {
        numbers.iter().map(|&n| self.analyze(n)).collect()
    }

    /// Similarity between a proposed answer and the canonical text
    ///
    /// Both sides are normalized before scoring.
    pub fn score(&self, proposed: &str, canonical: &str) -> SimilarityScore {
        score(&normalize(proposed), &normalize(canonical))
    }

    /// Validate a proposed answer for a number
    ///
    /// # Returns
    /// `Ok(None)` when the number has no canonical text to compare against
    pub fn validate(
        &self,
        proposed: &str,
        number: u32,
    ) -> Result<Option<AnswerCheck>, AnalysisError> {
        decompose(number, &self.config)?;

        Ok(self.canonical_text(number).map(|canonical| {
            validate_answer(
                proposed,
                &canonical,
                &self.config.lexicon,
                &self.config.connector,
            )
        }))
    }

    /// Pick a uniformly random number within a difficulty tier
    ///
    /// The tier range is clamped to the configured bounds. Returns `None`
    /// when the two do not overlap.
    pub fn random_number<R: Rng + ?Sized>(&self, tier: DifficultyTier, rng: &mut R) -> Option<u32> {
        let (low, high) = tier.range();
        let low = low.max(self.config.min_number);
        let high = high.min(self.config.max_number);
        if low > high {
            return None;
        }
        Some(rng.gen_range(low..=high))
    }

    /// Provider text, with blank text treated as unknown
    fn canonical_text(&self, number: u32) -> Option<String> {
        self.provider
            .lookup(number)
            .filter(|text| !text.trim().is_empty())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl NumeralAnalyzer<RuleBasedLookup> {
    /// Analyzer backed by the rule-based generator
    pub fn with_rules(config: EngineConfig) -> Result<Self, ConfigError> {
        let provider = RuleBasedLookup::new(&config);
        Self::new(config, provider)
    }
}

impl Default for NumeralAnalyzer<RuleBasedLookup> {
    fn default() -> Self {
        Self::with_rules(EngineConfig::default()).expect("default engine config is valid")
    }
}

impl AnalysisResult {
    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// MessagePack encoding with field names
    pub fn to_msgpack(&self) -> Result<Vec<u8>, TransportError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, TransportError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}
