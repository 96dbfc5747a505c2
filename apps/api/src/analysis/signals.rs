use std::sync::OnceLock;

use regex::Regex;

/// Points contributed to `formatting_score` by each signal that fires.
pub const POINTS_PER_SIGNAL: u32 = 25;

const CONTACT_PATTERN: &str = r"email|phone|linkedin|github";
const EDUCATION_PATTERN: &str = r"education|degree|university|college|bachelor|master";
const EXPERIENCE_PATTERN: &str = r"experience|worked|developed|managed|led";
const SKILLS_PATTERN: &str = r"skills|proficient|expertise|familiar";

struct SignalPatterns {
    contact: Regex,
    education: Regex,
    experience: Regex,
    skills: Regex,
}

fn patterns() -> &'static SignalPatterns {
    static PATTERNS: OnceLock<SignalPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SignalPatterns {
        contact: compile(CONTACT_PATTERN),
        education: compile(EDUCATION_PATTERN),
        experience: compile(EXPERIENCE_PATTERN),
        skills: compile(SKILLS_PATTERN),
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are fixed literal alternations.
    Regex::new(pattern).expect("formatting signal pattern must compile")
}

/// The four section-presence heuristics. Each is an independent unanchored
/// search, so "led" also fires inside "skilled" or "called".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingSignals {
    pub has_contact_info: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
}

impl FormattingSignals {
    /// `text_lower` must already be lower-cased; the patterns are lower-case only.
    pub fn detect(text_lower: &str) -> Self {
        let p = patterns();
        Self {
            has_contact_info: p.contact.is_match(text_lower),
            has_education: p.education.is_match(text_lower),
            has_experience: p.experience.is_match(text_lower),
            has_skills: p.skills.is_match(text_lower),
        }
    }

    pub fn count(&self) -> u32 {
        [
            self.has_contact_info,
            self.has_education,
            self.has_experience,
            self.has_skills,
        ]
        .iter()
        .filter(|&&fired| fired)
        .count() as u32
    }

    /// One of 0, 25, 50, 75, 100.
    pub fn score(&self) -> u32 {
        self.count() * POINTS_PER_SIGNAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signals_on_empty_text() {
        let signals = FormattingSignals::detect("");
        assert_eq!(signals, FormattingSignals::default());
        assert_eq!(signals.score(), 0);
    }

    #[test]
    fn test_each_signal_independent() {
        let contact = FormattingSignals::detect("find me on github");
        assert!(contact.has_contact_info);
        assert!(!contact.has_education);
        assert!(!contact.has_experience);
        assert!(!contact.has_skills);
        assert_eq!(contact.score(), 25);

        let education = FormattingSignals::detect("master of science");
        assert!(education.has_education);
        assert_eq!(education.count(), 1);
    }

    #[test]
    fn test_unanchored_match_inside_words() {
        // "led" inside "skilled"; "skills" is absent but "skilled" is not a skills keyword
        let signals = FormattingSignals::detect("highly skilled");
        assert!(signals.has_experience);
        assert!(!signals.has_skills);
    }

    #[test]
    fn test_all_signals_score_100() {
        let signals =
            FormattingSignals::detect("email: a@b.c; university degree; worked at x; skills: rust");
        assert_eq!(signals.count(), 4);
        assert_eq!(signals.score(), 100);
    }
}
