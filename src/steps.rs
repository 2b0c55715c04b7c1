// Soussou Morph Construction Steps
// Turns tier magnitudes into ordered construction actions and a summary line

use crate::types::{ConstructionStep, NumberMagnitudes, Tier};

/// Generate construction steps, highest tier first
///
/// One step per non-zero tier. Empty magnitudes give an empty list.
///
/// # Examples
/// ```
/// # use soussou_morph::steps::generate_steps;
/// # use soussou_morph::types::NumberMagnitudes;
/// let m = NumberMagnitudes::from_digits(0, 2, 0, 5).unwrap();
/// let steps = generate_steps(&m);
/// assert_eq!(steps[0].description, "Hundreds: 2 × 100");
/// assert_eq!(steps[1].description, "Units: 5");
/// ```
pub fn generate_steps(magnitudes: &NumberMagnitudes) -> Vec<ConstructionStep> {
    magnitudes
        .iter()
        .enumerate()
        .map(|(idx, (tier, magnitude))| ConstructionStep {
            step_number: idx + 1,
            tier,
            magnitude,
            value: u32::from(magnitude) * tier.place_value(),
            description: describe(tier, magnitude),
        })
        .collect()
}

/// Fixed per-tier template
fn describe(tier: Tier, magnitude: u8) -> String {
    match tier {
        Tier::Thousands => format!("Thousands: {} × 1000", magnitude),
        Tier::Hundreds => format!("Hundreds: {} × 100", magnitude),
        Tier::Tens => format!("Tens: {} × 10", magnitude),
        Tier::Units => format!("Units: {}", magnitude),
    }
}

/// One-line structural summary of a number
///
/// Splits on the highest place value present (10, 100, 1000) and appends the
/// canonical text, or notes that none is available.
///
/// # Examples
/// ```
/// # use soussou_morph::steps::explain;
/// assert_eq!(
///     explain(11, Some("fuú nŭn kérén")),
///     "Compound number: 11 = 10 + 1 → 'fuú nŭn kérén'"
/// );
/// ```
pub fn explain(number: u32, canonical_text: Option<&str>) -> String {
    let structure = match number {
        0..=10 => format!("Base number: {}", number),
        11..=19 => format!("Compound number: {} = 10 + {}", number, number - 10),
        20..=99 => split_on(number, 10, "Decade"),
        100..=999 => split_on(number, 100, "Hundreds"),
        _ => split_on(number, 1000, "Thousands"),
    };

    match canonical_text {
        Some(text) => format!("{} → '{}'", structure, text),
        None => format!("{} → no canonical text available", structure),
    }
}

fn split_on(number: u32, place: u32, multiple_name: &str) -> String {
    let head = number / place;
    let rest = number % place;
    if rest == 0 {
        format!("{}: {} = {} × {}", multiple_name, number, head, place)
    } else {
        format!("Compound number: {} = {} + {}", number, head * place, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose_digits;

    #[test]
    fn test_full_sequence() {
        let steps = generate_steps(&decompose_digits(1234).unwrap());
        let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Thousands: 1 × 1000",
                "Hundreds: 2 × 100",
                "Tens: 3 × 10",
                "Units: 4"
            ]
        );
        let numbers: Vec<usize> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_tiers_produce_no_step() {
        let steps = generate_steps(&decompose_digits(2007).unwrap());
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].tier, Tier::Thousands);
        assert_eq!(steps[0].value, 2000);
        assert_eq!(steps[1].tier, Tier::Units);
        assert_eq!(steps[1].step_number, 2);
    }

    #[test]
    fn test_empty_magnitudes() {
        assert!(generate_steps(&NumberMagnitudes::default()).is_empty());
    }

    #[test]
    fn test_explain_ranges() {
        assert_eq!(explain(7, Some("sólófèré")), "Base number: 7 → 'sólófèré'");
        assert_eq!(explain(40, None), "Decade: 40 = 4 × 10 → no canonical text available");
        assert_eq!(explain(35, None), "Compound number: 35 = 30 + 5 → no canonical text available");
        assert_eq!(explain(300, None), "Hundreds: 300 = 3 × 100 → no canonical text available");
        assert_eq!(explain(1004, Some("wúlù kérén nŭn náání")), "Compound number: 1004 = 1000 + 4 → 'wúlù kérén nŭn náání'");
        assert_eq!(explain(5000, None), "Thousands: 5000 = 5 × 1000 → no canonical text available");
    }
}
