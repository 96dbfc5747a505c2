use crate::analysis::signals::FormattingSignals;

/// More matches than this earns "Good keyword coverage".
pub const GOOD_COVERAGE_THRESHOLD: usize = 15;
/// Fewer matches than this asks for more keywords.
pub const LOW_COVERAGE_THRESHOLD: usize = 10;
/// Documents shorter than this many UTF-16 code units are asked to expand.
pub const MIN_CONTENT_UNITS: usize = 500;

pub const STRENGTH_CONTACT: &str = "Contact information present";
pub const STRENGTH_EDUCATION: &str = "Education section included";
pub const STRENGTH_EXPERIENCE: &str = "Work experience detailed";
pub const STRENGTH_SKILLS: &str = "Skills section present";
pub const STRENGTH_COVERAGE: &str = "Good keyword coverage";

pub const SUGGEST_CONTACT: &str = "Add contact information (email, phone, LinkedIn)";
pub const SUGGEST_EDUCATION: &str = "Include education details";
pub const SUGGEST_EXPERIENCE: &str = "Add work experience section";
pub const SUGGEST_SKILLS: &str = "Include a dedicated skills section";
pub const SUGGEST_KEYWORDS: &str = "Add more industry-relevant keywords";
pub const SUGGEST_EXPAND: &str = "Expand resume content with more details";

/// Strengths in check order. May be empty; the fallback text is a display concern.
pub fn build_strengths(signals: &FormattingSignals, keyword_matches: usize) -> Vec<String> {
    let checks = [
        (signals.has_contact_info, STRENGTH_CONTACT),
        (signals.has_education, STRENGTH_EDUCATION),
        (signals.has_experience, STRENGTH_EXPERIENCE),
        (signals.has_skills, STRENGTH_SKILLS),
        (keyword_matches > GOOD_COVERAGE_THRESHOLD, STRENGTH_COVERAGE),
    ];
    collect_fired(&checks)
}

/// Suggestions in check order. `text_len` is the untrimmed input length in UTF-16 code units.
pub fn build_suggestions(
    signals: &FormattingSignals,
    keyword_matches: usize,
    text_len: usize,
) -> Vec<String> {
    let checks = [
        (!signals.has_contact_info, SUGGEST_CONTACT),
        (!signals.has_education, SUGGEST_EDUCATION),
        (!signals.has_experience, SUGGEST_EXPERIENCE),
        (!signals.has_skills, SUGGEST_SKILLS),
        (keyword_matches < LOW_COVERAGE_THRESHOLD, SUGGEST_KEYWORDS),
        (text_len < MIN_CONTENT_UNITS, SUGGEST_EXPAND),
    ];
    collect_fired(&checks)
}

fn collect_fired(checks: &[(bool, &str)]) -> Vec<String> {
    checks
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, label)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_signals() -> FormattingSignals {
        FormattingSignals {
            has_contact_info: true,
            has_education: true,
            has_experience: true,
            has_skills: true,
        }
    }

    #[test]
    fn test_no_signals_no_strengths() {
        assert!(build_strengths(&FormattingSignals::default(), 0).is_empty());
    }

    #[test]
    fn test_coverage_threshold_is_strictly_greater_than_15() {
        let signals = FormattingSignals::default();
        assert!(build_strengths(&signals, 15).is_empty());
        assert_eq!(build_strengths(&signals, 16), vec![STRENGTH_COVERAGE]);
    }

    #[test]
    fn test_strengths_keep_check_order() {
        let strengths = build_strengths(&all_signals(), 20);
        assert_eq!(
            strengths,
            vec![
                STRENGTH_CONTACT,
                STRENGTH_EDUCATION,
                STRENGTH_EXPERIENCE,
                STRENGTH_SKILLS,
                STRENGTH_COVERAGE,
            ]
        );
    }

    #[test]
    fn test_keyword_suggestion_threshold_is_strictly_less_than_10() {
        let with_9 = build_suggestions(&all_signals(), 9, 1000);
        assert_eq!(with_9, vec![SUGGEST_KEYWORDS]);
        let with_10 = build_suggestions(&all_signals(), 10, 1000);
        assert!(with_10.is_empty());
    }

    #[test]
    fn test_length_threshold_at_500_chars() {
        assert_eq!(
            build_suggestions(&all_signals(), 20, 499),
            vec![SUGGEST_EXPAND]
        );
        assert!(build_suggestions(&all_signals(), 20, 500).is_empty());
    }

    #[test]
    fn test_all_six_suggestions_in_order() {
        let suggestions = build_suggestions(&FormattingSignals::default(), 0, 0);
        assert_eq!(
            suggestions,
            vec![
                SUGGEST_CONTACT,
                SUGGEST_EDUCATION,
                SUGGEST_EXPERIENCE,
                SUGGEST_SKILLS,
                SUGGEST_KEYWORDS,
                SUGGEST_EXPAND,
            ]
        );
    }
}
