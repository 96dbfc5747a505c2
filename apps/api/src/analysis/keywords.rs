/// The fixed ATS vocabulary. Order is significant: it drives both the
/// iteration order and the truncation order of `skill_gaps`.
pub const KEYWORDS: [&str; 28] = [
    "experience",
    "education",
    "skills",
    "project",
    "work",
    "management",
    "development",
    "design",
    "analysis",
    "leadership",
    "communication",
    "team",
    "agile",
    "scrum",
    "git",
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "database",
    "api",
    "cloud",
    "aws",
    "azure",
    "docker",
    "kubernetes",
];

/// Partition of the vocabulary into keywords present in and absent from a document.
/// Both lists keep vocabulary order.
#[derive(Debug, Clone, Default)]
pub struct KeywordCoverage {
    pub found: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl KeywordCoverage {
    pub fn matches(&self) -> usize {
        self.found.len()
    }
}

/// Classifies every vocabulary keyword as found or missing by plain substring
/// containment. `text_lower` must already be lower-cased.
///
/// Matching is literal: "java" is found inside "javascript",
/// "api" inside "rapid".
pub fn scan_keywords(text_lower: &str) -> KeywordCoverage {
    let mut coverage = KeywordCoverage::default();
    for &keyword in KEYWORDS.iter() {
        if text_lower.contains(keyword) {
            coverage.found.push(keyword);
        } else {
            coverage.missing.push(keyword);
        }
    }
    coverage
}
