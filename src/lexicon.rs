// Soussou Morph Lexicon
// Morpheme inventory and token tagging

use crate::types::{Morpheme, MorphemeKind};
use serde::{Deserialize, Serialize};

/// Morpheme inventory used to generate and tag numerals
///
/// Defaults to Soussou. Override through `EngineConfig::lexicon` to reuse the
/// engine for another language with the same composition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Base words for 1-9, index 0 = one
    pub units: [String; 9],
    /// 10
    pub ten: String,
    /// 20
    pub twenty: String,
    /// Decade former for 30-90 ("tòngó sàxán" = 30)
    pub ten_former: String,
    /// 100
    pub hundred: String,
    /// 1000
    pub thousand: String,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            units: [
                "kérén".to_string(),
                "fírín".to_string(),
                "sàxán".to_string(),
                "náání".to_string(),
                "súlí".to_string(),
                "sénní".to_string(),
                "sólófèré".to_string(),
                "sólómásàxán".to_string(),
                "sólómánáání".to_string(),
            ],
            ten: "fuú".to_string(),
            twenty: "m̀ɔx̀ɔǵɛŋ".to_string(),
            ten_former: "tòngó".to_string(),
            hundred: "k̀ɛḿɛ".to_string(),
            thousand: "wúlù".to_string(),
        }
    }
}

impl Lexicon {
    /// Base word for a digit 1-9
    pub fn unit(&self, digit: u8) -> Option<&str> {
        match digit {
            1..=9 => Some(self.units[usize::from(digit - 1)].as_str()),
            _ => None,
        }
    }

    /// Structural morphemes checked when classifying a wrong answer,
    /// in checking order
    pub fn structural(&self) -> [&str; 5] {
        [
            self.ten.as_str(),
            self.twenty.as_str(),
            self.ten_former.as_str(),
            self.hundred.as_str(),
            self.thousand.as_str(),
        ]
    }

    /// Identify a single token
    pub fn kind_of(&self, token: &str, connector: &str) -> MorphemeKind {
        if token == connector {
            return MorphemeKind::Connector;
        }
        if let Some(idx) = self.units.iter().position(|u| u == token) {
            return MorphemeKind::Unit(idx as u8 + 1);
        }
        match token {
            t if t == self.ten => MorphemeKind::Ten,
            t if t == self.twenty => MorphemeKind::Twenty,
            t if t == self.ten_former => MorphemeKind::TenFormer,
            t if t == self.hundred => MorphemeKind::Hundred,
            t if t == self.thousand => MorphemeKind::Thousand,
            _ => MorphemeKind::Unknown,
        }
    }
}

/// Split text on whitespace and tag every token
pub fn tag_morphemes(text: &str, lexicon: &Lexicon, connector: &str) -> Vec<Morpheme> {
    text.split_whitespace()
        .map(|token| Morpheme {
            kind: lexicon.kind_of(token, connector),
            text: token.to_string(),
        })
        .collect()
}
