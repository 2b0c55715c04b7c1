// Soussou Morph Similarity Scorer
// Recursive longest-common-substring similarity and answer validation

use crate::lexicon::Lexicon;
use crate::types::{AnswerCheck, MismatchKind, SimilarityScore};
use regex::Regex;
use std::sync::OnceLock;

/// Score two strings that the caller has already normalized
///
/// Lengths are counted in Unicode scalar values, so each accented letter
/// counts once.
///
/// # Examples
/// ```
/// # use soussou_morph::similarity::score;
/// let s = score("world", "word");
/// assert_eq!(s.matched_chars, 4);
/// assert!((s.percentage - 800.0 / 9.0).abs() < 1e-9);
/// ```
pub fn score(a: &str, b: &str) -> SimilarityScore {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let matched_chars = similar_chars(&a, &b);
    let total = a.len() + b.len();
    let percentage = if total == 0 {
        0.0
    } else {
        (matched_chars * 2) as f64 / total as f64 * 100.0
    };

    SimilarityScore {
        matched_chars,
        percentage,
    }
}

/// Matched character count
///
/// Takes the first longest common substring, then repeats on the pieces
/// left of it and the pieces right of it. Left and right are never mixed.
/// Pending pieces live on an explicit stack, so deep splits cannot
/// overflow the call stack.
pub fn similar_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(a, b)];

    while let Some((a, b)) = pending.pop() {
        if a.is_empty() || b.is_empty() {
            continue;
        }

        let (pos_a, pos_b, len) = longest_common_substring(a, b);
        if len == 0 {
            continue;
        }

        matched += len;
        pending.push((&a[..pos_a], &b[..pos_b]));
        pending.push((&a[pos_a + len..], &b[pos_b + len..]));
    }

    matched
}

/// First longest common substring as `(start_in_a, start_in_b, length)`
///
/// Ties go to the earliest start in `a`, then the earliest start in `b`.
/// O(n·m) time with two rows of run lengths, O(m) memory.
pub fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let m = b.len();
    if a.is_empty() || m == 0 {
        return (0, 0, 0);
    }

    // row[j + 1] = length of the common run ending at a[i], b[j]
    let mut prev = vec![0usize; m + 1];
    let mut row = vec![0usize; m + 1];
    let mut best = (0, 0, 0);

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            let len = if ca == cb { prev[j] + 1 } else { 0 };
            row[j + 1] = len;
            // equal-length runs end in the same order they start
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut prev, &mut row);
    }
    best
}

fn whitespace_runs() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Trim, lowercase and collapse whitespace runs to a single space
pub fn normalize(text: &str) -> String {
    whitespace_runs()
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// Equality after normalization
pub fn translations_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Classify how a proposed translation departs from the expected one
///
/// Checks, in order: exact match, word count, connector presence, then each
/// structural morpheme (ten, twenty, ten-former, hundred, thousand).
pub fn classify_mismatch(
    expected: &str,
    proposed: &str,
    lexicon: &Lexicon,
    connector: &str,
) -> MismatchKind {
    let expected = normalize(expected);
    let proposed = normalize(proposed);

    if expected == proposed {
        return MismatchKind::Exact;
    }

    if expected.split_whitespace().count() != proposed.split_whitespace().count() {
        return MismatchKind::LengthMismatch;
    }

    match (expected.contains(connector), proposed.contains(connector)) {
        (true, false) => return MismatchKind::MissingConnector,
        (false, true) => return MismatchKind::ExtraConnector,
        _ => {}
    }

    for morpheme in lexicon.structural() {
        let morpheme = morpheme.to_lowercase();
        match (expected.contains(&morpheme), proposed.contains(&morpheme)) {
            (true, false) => return MismatchKind::MissingMorpheme(morpheme),
            (false, true) => return MismatchKind::ExtraMorpheme(morpheme),
            _ => {}
        }
    }

    MismatchKind::Other
}

/// Validate a proposed answer against the canonical text
pub fn validate_answer(
    proposed: &str,
    canonical: &str,
    lexicon: &Lexicon,
    connector: &str,
) -> AnswerCheck {
    let proposed_norm = normalize(proposed);
    let canonical_norm = normalize(canonical);

    AnswerCheck {
        is_correct: proposed_norm == canonical_norm,
        score: score(&proposed_norm, &canonical_norm),
        mismatch: classify_mismatch(canonical, proposed, lexicon, connector),
    }
}
