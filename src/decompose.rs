// Soussou Morph Positional Decomposer
// Splits an integer into thousands / hundreds / tens / units magnitudes

use crate::config::{EngineConfig, MAX_SUPPORTED};
use crate::types::{AnalysisError, NumberMagnitudes, Tier};

/// Decompose a number into its non-zero tier magnitudes
///
/// Walks the tiers from the highest place value down; a tier is recorded only
/// when its digit is non-zero.
///
/// # Examples
/// ```
/// # use soussou_morph::decompose::decompose;
/// # use soussou_morph::config::EngineConfig;
/// # use soussou_morph::types::Tier;
/// let m = decompose(1204, &EngineConfig::default()).unwrap();
/// assert_eq!(m.get(Tier::Thousands), Some(1));
/// assert_eq!(m.get(Tier::Tens), None);
/// assert_eq!(m.value(), 1204);
/// ```
pub fn decompose(number: u32, config: &EngineConfig) -> Result<NumberMagnitudes, AnalysisError> {
    check_range(number, config)?;
    decompose_digits(number).ok_or(AnalysisError::OutOfRange {
        number,
        min: config.min_number,
        max: config.max_number,
    })
}

/// Reject numbers outside the configured range, never clamping
///
/// Numbers above `MAX_SUPPORTED` are rejected even when the configured
/// maximum is larger.
pub fn check_range(number: u32, config: &EngineConfig) -> Result<(), AnalysisError> {
    if config.in_range(number) && number <= MAX_SUPPORTED {
        Ok(())
    } else {
        Err(AnalysisError::OutOfRange {
            number,
            min: config.min_number,
            max: config.max_number,
        })
    }
}

/// Tier split without the configured range check
///
/// `None` above `MAX_SUPPORTED`, which has no thousands digit to hold it.
pub(crate) fn decompose_digits(number: u32) -> Option<NumberMagnitudes> {
    if number > MAX_SUPPORTED {
        return None;
    }

    let mut magnitudes = NumberMagnitudes::default();
    let mut remainder = number;

    for tier in Tier::DESCENDING {
        let place = tier.place_value();
        let magnitude = remainder / place;
        if magnitude > 0 {
            magnitudes.set(tier, magnitude as u8);
            remainder %= place;
        }
    }

    Some(magnitudes)
}

/// Value contributed by each present tier (`magnitude × place_value`),
/// highest first
pub fn tier_values(magnitudes: &NumberMagnitudes) -> Vec<u32> {
    magnitudes
        .iter()
        .map(|(tier, m)| u32::from(m) * tier.place_value())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_full_number() {
        let m = decompose(1234, &config()).unwrap();
        let tiers: Vec<(Tier, u8)> = m.iter().collect();
        assert_eq!(
            tiers,
            vec![
                (Tier::Thousands, 1),
                (Tier::Hundreds, 2),
                (Tier::Tens, 3),
                (Tier::Units, 4)
            ]
        );
    }

    #[test]
    fn test_zero_tiers_omitted() {
        let m = decompose(10, &config()).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![(Tier::Tens, 1)]);
        assert_eq!(m.units, None);

        let m = decompose(100, &config()).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![(Tier::Hundreds, 1)]);

        let m = decompose(9009, &config()).unwrap();
        assert_eq!(
            m.iter().collect::<Vec<_>>(),
            vec![(Tier::Thousands, 9), (Tier::Units, 9)]
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            decompose(0, &config()),
            Err(AnalysisError::OutOfRange {
                number: 0,
                min: 1,
                max: 9999
            })
        );
        assert!(decompose(10_000, &config()).is_err());
    }

    #[test]
    fn test_configured_bounds() {
        let mut cfg = config();
        cfg.max_number = 99;
        assert!(decompose(99, &cfg).is_ok());
        assert!(matches!(
            decompose(100, &cfg),
            Err(AnalysisError::OutOfRange { max: 99, .. })
        ));
    }

    #[test]
    fn test_oversized_config_never_truncates() {
        let mut cfg = config();
        cfg.max_number = 20_000;
        assert_eq!(
            decompose(12_345, &cfg),
            Err(AnalysisError::OutOfRange {
                number: 12_345,
                min: 1,
                max: 20_000
            })
        );
        assert_eq!(decompose_digits(10_000), None);
        assert_eq!(decompose_digits(9999).map(|m| m.value()), Some(9999));
    }

    #[test]
    fn test_tier_values() {
        let m = decompose(3050, &config()).unwrap();
        assert_eq!(tier_values(&m), vec![3000, 50]);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(decompose(4711, &config()), decompose(4711, &config()));
    }
}
