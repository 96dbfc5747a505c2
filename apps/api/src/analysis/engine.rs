//! Scoring engine: document text in, `Analysis` out.
//!
//! Algorithm:
//! 1. Lower-case the document once.
//! 2. Classify each vocabulary keyword as found or missing (substring containment).
//! 3. Detect the four formatting signals; `formatting_score` = 25 per signal.
//! 4. keyword_score = min(matches / 28 × 100, 100)
//! 5. ats_score = round(keyword_score × 0.6 + formatting_score × 0.4), clamped to 0–100
//! 6. skill_gaps = first 10 missing keywords; strengths / suggestions by ordered checks.

use serde::{Deserialize, Serialize};

use crate::analysis::feedback::{build_strengths, build_suggestions};
use crate::analysis::keywords::{scan_keywords, KEYWORDS};
use crate::analysis::signals::FormattingSignals;

const KEYWORD_WEIGHT: f64 = 0.6;
const FORMATTING_WEIGHT: f64 = 0.4;
/// Maximum number of missing keywords reported as skill gaps.
pub const MAX_SKILL_GAPS: usize = 10;

/// Result of scoring one resume. Created fresh per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub ats_score: u32,        // 0 – 100
    pub keyword_matches: u32,  // 0 – 28
    pub formatting_score: u32, // 0, 25, 50, 75 or 100
    pub strengths: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Scores a resume. Total over every string, including the empty one.
pub fn analyze(text: &str) -> Analysis {
    let text_lower = text.to_lowercase();

    let coverage = scan_keywords(&text_lower);
    let keyword_matches = coverage.matches();

    let signals = FormattingSignals::detect(&text_lower);
    let formatting_score = signals.score();

    let ats_score = combine_scores(keyword_score(keyword_matches), formatting_score);

    let skill_gaps = coverage
        .missing
        .iter()
        .take(MAX_SKILL_GAPS)
        .map(|k| k.to_string())
        .collect();

    Analysis {
        ats_score,
        keyword_matches: keyword_matches as u32,
        formatting_score,
        strengths: build_strengths(&signals, keyword_matches),
        skill_gaps,
        suggestions: build_suggestions(&signals, keyword_matches, text.encode_utf16().count()),
    }
}

/// Percentage of the vocabulary present, capped at 100.
fn keyword_score(keyword_matches: usize) -> f64 {
    (keyword_matches as f64 / KEYWORDS.len() as f64 * 100.0).min(100.0)
}

fn combine_scores(keyword_score: f64, formatting_score: u32) -> u32 {
    let weighted = keyword_score * KEYWORD_WEIGHT + formatting_score as f64 * FORMATTING_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u32
}
