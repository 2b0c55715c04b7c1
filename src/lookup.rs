// Soussou Morph Lookup Providers
// Canonical text sources: dataset map, rule-based generator, and fallback chaining

use crate::config::{EngineConfig, MAX_SUPPORTED};
use crate::lexicon::Lexicon;
use crate::types::LookupError;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;

/// Source of canonical numeral text
///
/// `None` means the number is unknown to this provider.
pub trait LookupProvider: Send + Sync {
    fn lookup(&self, number: u32) -> Option<String>;
}

impl<P: LookupProvider + ?Sized> LookupProvider for Box<P> {
    fn lookup(&self, number: u32) -> Option<String> {
        (**self).lookup(number)
    }
}

/// In-memory number → text table
#[derive(Debug, Clone, Default)]
pub struct MapLookup {
    entries: FxHashMap<u32, String>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (number, text) pairs; later pairs overwrite earlier ones
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(n, t)| (n, t.into())).collect(),
        }
    }

    /// Parse the `;`-delimited dataset format
    ///
    /// # Format
    /// ```text
    /// Nombre;Traduction_soussou
    /// 1;kérén
    /// 11;fuú nŭn kérén
    /// ```
    /// The header line is optional. Blank lines are skipped.
    pub fn from_dataset<R: BufRead>(reader: R) -> Result<Self, LookupError> {
        let mut entries = FxHashMap::default();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() {
                continue;
            }

            let (number_field, text_field) =
                line.split_once(';').ok_or_else(|| LookupError::Parse {
                    line: line_no,
                    reason: "missing ';' separator".to_string(),
                })?;

            let number = match number_field.trim().parse::<u32>() {
                Ok(n) => n,
                // header
                Err(_) if entries.is_empty() && line_no == 1 => continue,
                Err(e) => {
                    return Err(LookupError::Parse {
                        line: line_no,
                        reason: format!("invalid number '{}': {}", number_field.trim(), e),
                    })
                }
            };

            let text = text_field.trim();
            if text.is_empty() {
                return Err(LookupError::Parse {
                    line: line_no,
                    reason: format!("empty translation for {}", number),
                });
            }

            if entries.insert(number, text.to_string()).is_some() {
                return Err(LookupError::Duplicate {
                    number,
                    line: line_no,
                });
            }
        }

        tracing::info!(entries = entries.len(), "loaded numeral dataset");
        Ok(Self { entries })
    }

    pub fn from_dataset_str(content: &str) -> Result<Self, LookupError> {
        Self::from_dataset(content.as_bytes())
    }

    pub fn from_dataset_file(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_dataset(std::io::BufReader::new(file))
    }

    /// Encode the table as a bincode snapshot
    pub fn to_snapshot(&self) -> Result<Vec<u8>, LookupError> {
        Ok(bincode::serialize(&self.entries)?)
    }

    /// Decode a bincode snapshot
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, LookupError> {
        let entries: FxHashMap<u32, String> = bincode::deserialize(bytes)?;
        Ok(Self { entries })
    }

    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), LookupError> {
        std::fs::write(path, self.to_snapshot()?)?;
        Ok(())
    }

    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let bytes = std::fs::read(path)?;
        Self::from_snapshot(&bytes)
    }

    pub fn insert(&mut self, number: u32, text: impl Into<String>) -> Option<String> {
        self.entries.insert(number, text.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known numbers in ascending order
    pub fn numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.entries.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl LookupProvider for MapLookup {
    fn lookup(&self, number: u32) -> Option<String> {
        self.entries.get(&number).cloned()
    }
}

/// Generates canonical text from the lexicon and composition rules
///
/// - 1-9: base words; 10 and 20 have their own words
/// - 11-19, 21-29: ten / twenty, connector, unit
/// - 30-90: decade former + unit of the tens digit, connector + unit if any
/// - hundreds: hundred word, followed by the multiplier when above one
/// - thousands: thousand word + multiplier
/// - a remainder under ten after a hundreds/thousands head is joined
///   by the connector, larger remainders by a space
#[derive(Debug, Clone)]
pub struct RuleBasedLookup {
    lexicon: Lexicon,
    connector: String,
}

impl RuleBasedLookup {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            lexicon: config.lexicon.clone(),
            connector: config.connector.clone(),
        }
    }

    /// Canonical text for 1-9999, `None` otherwise
    pub fn generate(&self, number: u32) -> Option<String> {
        if number == 0 || number > MAX_SUPPORTED {
            return None;
        }
        Some(self.compose(number))
    }

    fn compose(&self, number: u32) -> String {
        let c = &self.connector;
        match number {
            1..=9 => self.word(number).to_string(),
            10 => self.lexicon.ten.clone(),
            11..=19 => format!("{} {} {}", self.lexicon.ten, c, self.word(number - 10)),
            20 => self.lexicon.twenty.clone(),
            21..=29 => format!("{} {} {}", self.lexicon.twenty, c, self.word(number - 20)),
            30..=99 => {
                let decade = format!("{} {}", self.lexicon.ten_former, self.word(number / 10));
                match number % 10 {
                    0 => decade,
                    units => format!("{} {} {}", decade, c, self.word(units)),
                }
            }
            100..=999 => {
                let hundreds = number / 100;
                let head = if hundreds == 1 {
                    self.lexicon.hundred.clone()
                } else {
                    format!("{} {}", self.lexicon.hundred, self.word(hundreds))
                };
                self.join_remainder(head, number % 100)
            }
            _ => {
                let head = format!("{} {}", self.lexicon.thousand, self.word(number / 1000));
                self.join_remainder(head, number % 1000)
            }
        }
    }

    fn join_remainder(&self, head: String, remainder: u32) -> String {
        match remainder {
            0 => head,
            1..=9 => format!("{} {} {}", head, self.connector, self.compose(remainder)),
            _ => format!("{} {}", head, self.compose(remainder)),
        }
    }

    /// Base word for a digit known to be 1-9
    fn word(&self, digit: u32) -> &str {
        &self.lexicon.units[(digit - 1) as usize]
    }
}

impl Default for RuleBasedLookup {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl LookupProvider for RuleBasedLookup {
    fn lookup(&self, number: u32) -> Option<String> {
        self.generate(number)
    }
}

/// Try `primary`, then `secondary`
#[derive(Debug, Clone)]
pub struct FallbackLookup<P, S> {
    primary: P,
    secondary: S,
}

impl<P: LookupProvider, S: LookupProvider> FallbackLookup<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: LookupProvider, S: LookupProvider> LookupProvider for FallbackLookup<P, S> {
    fn lookup(&self, number: u32) -> Option<String> {
        self.primary
            .lookup(number)
            .or_else(|| self.secondary.lookup(number))
    }
}
