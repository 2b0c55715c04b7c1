// Soussou Morph Pattern Classifier
// Labels numbers with linguistic pattern families and difficulty tiers

use crate::config::EngineConfig;
use crate::types::{DifficultyTier, PatternLabel, RangeOutcome};

/// Pattern classifier
///
/// Determines which numeral formation rules apply to a number and,
/// when canonical text is known, whether it uses the connector.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    connector: String,
}

impl PatternClassifier {
    /// Create a classifier for the configured connector token
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            connector: config.connector.clone(),
        }
    }

    /// Classify a number with its pattern labels
    ///
    /// # Arguments
    /// * `number` - The number being analyzed
    /// * `canonical_text` - Its canonical text, if known
    ///
    /// # Returns
    /// Zero, one or two labels: at most one numeric-range label, followed by
    /// `ConnectorUsage` when the text contains the connector
    pub fn classify(&self, number: u32, canonical_text: Option<&str>) -> Vec<PatternLabel> {
        let mut labels = Vec::with_capacity(2);

        if let Some(label) = Self::classify_range(number).label() {
            labels.push(label);
        }

        if let Some(text) = canonical_text {
            if self.uses_connector(text) {
                labels.push(PatternLabel::ConnectorUsage);
            }
        }

        labels
    }

    /// Classify multiple (number, text) pairs in batch
    pub fn classify_batch(&self, pairs: &[(u32, Option<String>)]) -> Vec<Vec<PatternLabel>> {
        pairs
            .iter()
            .map(|(number, text)| self.classify(*number, text.as_deref()))
            .collect()
    }

    /// Whether the text contains the connector token
    pub fn uses_connector(&self, text: &str) -> bool {
        text.contains(self.connector.as_str())
    }

    /// Numeric-range rule, first match wins
    ///
    /// 21-89 non-multiples of ten match no rule and come back `Unlabeled`.
    pub fn classify_range(number: u32) -> RangeOutcome {
        match number {
            n if n <= 10 => RangeOutcome::Labeled(PatternLabel::BaseNumber),
            11..=19 => RangeOutcome::Labeled(PatternLabel::TeenAdditive),
            n if n % 10 == 0 && n <= 90 => RangeOutcome::Labeled(PatternLabel::DecadeMultiple),
            n if n >= 100 => RangeOutcome::Labeled(PatternLabel::Centesimal),
            _ => RangeOutcome::Unlabeled,
        }
    }

    /// Difficulty tier of a number
    pub fn difficulty(number: u32) -> DifficultyTier {
        match number {
            0..=20 => DifficultyTier::Easy,
            21..=100 => DifficultyTier::Medium,
            101..=1000 => DifficultyTier::Hard,
            _ => DifficultyTier::VeryHard,
        }
    }

    /// Check if a number falls under a specific numeric-range label
    pub fn matches_label(number: u32, label: PatternLabel) -> bool {
        Self::classify_range(number) == RangeOutcome::Labeled(label)
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
