// Soussou Morph Type Definitions
// Core data model for numeral analysis and the error taxonomy

use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use thiserror::Error;

/// Positional magnitude tiers, highest place value first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Thousands,
    Hundreds,
    Tens,
    Units,
}

impl Tier {
    /// All tiers in descending order of place value
    pub const DESCENDING: [Tier; 4] = [Tier::Thousands, Tier::Hundreds, Tier::Tens, Tier::Units];

    /// Place value of the tier (1000, 100, 10, 1)
    pub fn place_value(self) -> u32 {
        match self {
            Tier::Thousands => 1000,
            Tier::Hundreds => 100,
            Tier::Tens => 10,
            Tier::Units => 1,
        }
    }

    /// Lowercase tier name as used in serialized results
    pub fn name(self) -> &'static str {
        match self {
            Tier::Thousands => "thousands",
            Tier::Hundreds => "hundreds",
            Tier::Tens => "tens",
            Tier::Units => "units",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-tier magnitude digits of a number
///
/// A tier whose digit is zero is absent: the fields are `Option<NonZeroU8>`
/// so a zero-valued entry cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NumberMagnitudes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thousands: Option<NonZeroU8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hundreds: Option<NonZeroU8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tens: Option<NonZeroU8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<NonZeroU8>,
}

impl NumberMagnitudes {
    /// Build from four digits, highest tier first
    ///
    /// Returns `None` if any digit is greater than 9.
    pub fn from_digits(thousands: u8, hundreds: u8, tens: u8, units: u8) -> Option<Self> {
        if [thousands, hundreds, tens, units].iter().any(|d| *d > 9) {
            return None;
        }
        Some(Self {
            thousands: NonZeroU8::new(thousands),
            hundreds: NonZeroU8::new(hundreds),
            tens: NonZeroU8::new(tens),
            units: NonZeroU8::new(units),
        })
    }

    /// Magnitude digit of a tier, `None` when the tier is absent
    pub fn get(&self, tier: Tier) -> Option<u8> {
        let slot = match tier {
            Tier::Thousands => self.thousands,
            Tier::Hundreds => self.hundreds,
            Tier::Tens => self.tens,
            Tier::Units => self.units,
        };
        slot.map(NonZeroU8::get)
    }

    pub(crate) fn set(&mut self, tier: Tier, magnitude: u8) {
        let slot = NonZeroU8::new(magnitude);
        match tier {
            Tier::Thousands => self.thousands = slot,
            Tier::Hundreds => self.hundreds = slot,
            Tier::Tens => self.tens = slot,
            Tier::Units => self.units = slot,
        }
    }

    /// Present tiers with their digits, highest place value first
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u8)> + '_ {
        Tier::DESCENDING
            .into_iter()
            .filter_map(move |tier| self.get(tier).map(|m| (tier, m)))
    }

    /// Reconstruct the integer: `Σ magnitude × place_value`
    pub fn value(&self) -> u32 {
        self.iter()
            .map(|(tier, m)| u32::from(m) * tier.place_value())
            .sum()
    }

    /// Number of non-zero tiers (0-4)
    pub fn tier_count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tier_count() == 0
    }
}

/// Linguistic pattern labels, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    /// Numbers up to 10
    #[serde(rename = "base-number")]
    BaseNumber,
    /// 11-19, formed additively on ten
    #[serde(rename = "teen/additive")]
    TeenAdditive,
    /// Multiples of ten up to 90
    #[serde(rename = "decade-multiple")]
    DecadeMultiple,
    /// 100 and above
    #[serde(rename = "centesimal")]
    Centesimal,
    /// Canonical text contains the connector token
    #[serde(rename = "connector-usage")]
    ConnectorUsage,
}

impl PatternLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternLabel::BaseNumber => "base-number",
            PatternLabel::TeenAdditive => "teen/additive",
            PatternLabel::DecadeMultiple => "decade-multiple",
            PatternLabel::Centesimal => "centesimal",
            PatternLabel::ConnectorUsage => "connector-usage",
        }
    }

    /// Whether this label describes a numeric range (at most one applies)
    pub fn is_numeric_range(self) -> bool {
        !matches!(self, PatternLabel::ConnectorUsage)
    }
}

impl std::fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the numeric-range rule
///
/// `Unlabeled` covers 21-89 non-multiples of ten, which no range rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    Labeled(PatternLabel),
    Unlabeled,
}

impl RangeOutcome {
    pub fn label(self) -> Option<PatternLabel> {
        match self {
            RangeOutcome::Labeled(label) => Some(label),
            RangeOutcome::Unlabeled => None,
        }
    }
}

/// Learning difficulty of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyTier {
    /// 1-20
    Easy,
    /// 21-100
    Medium,
    /// 101-1000
    Hard,
    /// 1001 and above
    VeryHard,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::VeryHard,
    ];

    /// Inclusive number range covered by the tier
    pub fn range(self) -> (u32, u32) {
        match self {
            DifficultyTier::Easy => (1, 20),
            DifficultyTier::Medium => (21, 100),
            DifficultyTier::Hard => (101, 1000),
            DifficultyTier::VeryHard => (1001, 9999),
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyTier::Easy => write!(f, "Easy"),
            DifficultyTier::Medium => write!(f, "Medium"),
            DifficultyTier::Hard => write!(f, "Hard"),
            DifficultyTier::VeryHard => write!(f, "VeryHard"),
        }
    }
}

impl std::str::FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "medium" => Ok(DifficultyTier::Medium),
            "hard" => Ok(DifficultyTier::Hard),
            "very-hard" | "veryhard" | "very_hard" => Ok(DifficultyTier::VeryHard),
            other => Err(format!("unknown difficulty tier '{}'", other)),
        }
    }
}

/// One action in building a numeral, highest tier first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStep {
    /// 1-based position in the sequence
    pub step_number: usize,
    pub tier: Tier,
    pub magnitude: u8,
    /// `magnitude × place_value`
    pub value: u32,
    /// Human-readable template, e.g. "Thousands: 1 × 1000"
    pub description: String,
}

/// Role of a whitespace-delimited token inside a numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeKind {
    /// Base word for a digit 1-9
    Unit(u8),
    Ten,
    Twenty,
    /// Word forming decades 30-90
    TenFormer,
    Hundred,
    Thousand,
    Connector,
    Unknown,
}

/// A tagged token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub kind: MorphemeKind,
    pub text: String,
}

/// Rendering coordinates of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

/// Node of the decomposition tree
///
/// The root holds the whole number and its text; each child holds one
/// connector-delimited segment. The tree owns its children outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphologicalNode {
    pub value: u32,
    pub text: Option<String>,
    /// Whitespace tokens of this node's text, tagged
    pub tokens: Vec<Morpheme>,
    /// Depth in the tree (root = 0)
    pub level: usize,
    pub position: NodePosition,
    pub children: Vec<MorphologicalNode>,
}

impl MorphologicalNode {
    /// Create a childless node at the origin
    pub fn leaf(value: u32, text: Option<String>, tokens: Vec<Morpheme>, level: usize) -> Self {
        Self {
            value,
            text,
            tokens,
            level,
            position: NodePosition::default(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk over every node
    pub fn walk(&self) -> Vec<&MorphologicalNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// Everything known about one number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub number: u32,
    /// `None` when the lookup provider has no text for the number
    pub canonical_text: Option<String>,
    pub magnitudes: NumberMagnitudes,
    pub difficulty: DifficultyTier,
    pub pattern_labels: Vec<PatternLabel>,
    pub construction_steps: Vec<ConstructionStep>,
    pub tree: MorphologicalNode,
    pub explanation: String,
}

impl AnalysisResult {
    /// Whether canonical text was available for the number
    pub fn is_available(&self) -> bool {
        self.canonical_text.is_some()
    }

    pub fn has_label(&self, label: PatternLabel) -> bool {
        self.pattern_labels.contains(&label)
    }
}

/// Similarity between two strings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub matched_chars: usize,
    /// 0.0 - 100.0
    pub percentage: f64,
}

/// Why a proposed translation differs from the canonical one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    Exact,
    LengthMismatch,
    MissingConnector,
    ExtraConnector,
    MissingMorpheme(String),
    ExtraMorpheme(String),
    Other,
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::Exact => write!(f, "exact"),
            MismatchKind::LengthMismatch => write!(f, "length_mismatch"),
            MismatchKind::MissingConnector => write!(f, "missing_connector"),
            MismatchKind::ExtraConnector => write!(f, "extra_connector"),
            MismatchKind::MissingMorpheme(m) => write!(f, "missing_{}", m),
            MismatchKind::ExtraMorpheme(m) => write!(f, "extra_{}", m),
            MismatchKind::Other => write!(f, "other"),
        }
    }
}

/// Result of validating a proposed answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCheck {
    /// Equal after normalization
    pub is_correct: bool,
    pub score: SimilarityScore,
    pub mismatch: MismatchKind,
}

/// Analysis request errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Number {number} is out of range: expected {min}..={max}")]
    OutOfRange { number: u32, min: u32, max: u32 },
}

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Duplicate entry for number {number} on line {line}")]
    Duplicate { number: u32, line: usize },

    #[error("Snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid range {min}..={max}: bounds must satisfy 1 <= min <= max <= 9999")]
    InvalidRange { min: u32, max: u32 },

    #[error("Connector token must not be empty")]
    EmptyConnector,
}

/// Result transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MessagePack encoding failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decoding failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
