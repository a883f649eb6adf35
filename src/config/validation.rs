//! Deck validation: missing-key aggregation and unknown-key detection with
//! Levenshtein suggestions.
//!
//! Two-pass parse approach: the raw TOML is first read into a `toml::Value`,
//! its keys compared against the required deck key set, and warnings emitted
//! with "did you mean?" suggestions for anything unrecognized. Only then does
//! serde deserialize the typed deck. Warnings never break a working deck;
//! missing keys are collected into one aggregated error by the caller.

use std::collections::HashSet;

use super::well_input::REQUIRED_KEYS;

/// A non-fatal deck warning (typo, unrecognized key).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Deck Keys
// ============================================================================

/// The complete set of valid deck keys.
///
/// The deck is flat: every key lives at the top level of the TOML document.
pub fn known_deck_keys() -> HashSet<&'static str> {
    REQUIRED_KEYS.iter().copied().collect()
}

/// Top-level keys present in a parsed deck.
pub fn deck_keys(value: &toml::Value) -> Vec<String> {
    match value.as_table() {
        Some(table) => table.keys().cloned().collect(),
        None => Vec::new(),
    }
}

/// Required keys absent from a parsed deck, in deck order.
pub fn missing_deck_keys(value: &toml::Value) -> Vec<String> {
    let present: HashSet<String> = deck_keys(value).into_iter().collect();
    REQUIRED_KEYS
        .iter()
        .filter(|k| !present.contains(**k))
        .map(|k| (*k).to_string())
        .collect()
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 2.
///
/// Deck keys are short (`q`, `gt`, `h3r`), so a wider search radius would
/// match almost anything; 2 keeps suggestions honest. Candidates are scanned
/// in deck order and the first minimum wins, so ties resolve deterministically.
pub fn suggest_correction(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in REQUIRED_KEYS {
        let dist = levenshtein(unknown, k);
        if dist <= 2 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((k, dist));
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Return warnings for any unrecognized deck keys.
///
/// This does NOT fail on unknown keys — it only warns. Decks carrying extra
/// bookkeeping keys keep working.
pub fn validate_unknown_keys(value: &toml::Value) -> Vec<ValidationWarning> {
    let known = known_deck_keys();
    let mut warnings = Vec::new();

    for key in deck_keys(value) {
        if !known.contains(key.as_str()) {
            let suggestion = suggest_correction(&key);
            let message = format!("Unknown deck key '{key}'");
            warnings.push(ValidationWarning {
                field: key,
                message,
                suggestion,
            });
        }
    }

    warnings
}
