//! Informal/formal signal pattern sets.
//!
//! Each set is unioned into a single alternation before matching, so one
//! span can never count under two different sub-patterns of the same set.
//! Patterns are compiled once and reused for every call.

use std::sync::OnceLock;

use regex::Regex;

/// Informal signal union. Word branches are case-insensitive; the ALL-CAPS
/// branch stays case-sensitive.
const INFORMAL_PATTERN: &str = concat!(
    // Fillers and chat abbreviations
    r"(?i:\b(gonna|wanna|gotta|kinda|sorta|dunno|ya|yep|nope|yeah|nah|lol|omg|btw|idk|imo|tbh|fyi|asap|bc|cuz|cos|cya)\b)",
    "|",
    // Negated contractions
    r"(?i:\b(ain't|can't|won't|don't|isn't|aren't|wasn't|weren't|haven't|hadn't|doesn't|didn't|couldn't|wouldn't|shouldn't)\b)",
    "|",
    // Multiple exclamation marks
    r"[!]{2,}",
    "|",
    // Multiple question marks
    r"[?]{2,}",
    "|",
    // Excessive ellipsis
    r"\.{3,}",
    "|",
    // ALL CAPS words (shouting)
    r"\b[A-Z]{4,}\b",
);

/// Formal marker union: connectives, legal/academic register, academic
/// verbs, and formal modals.
const FORMAL_PATTERN: &str = concat!(
    r"(?i)",
    r"\b(furthermore|moreover|consequently|therefore|thus|hence|accordingly|nevertheless|nonetheless|notwithstanding)\b",
    "|",
    r"\b(regarding|concerning|pertaining|pursuant|herein|thereof|whereby|whereas|albeit)\b",
    "|",
    r"\b(demonstrate|indicate|suggest|propose|conclude|analyse|analyze|investigate|examine|assess|evaluate)\b",
    "|",
    r"\b(shall|may|would|could|ought)\b",
);

fn informal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INFORMAL_PATTERN).expect("informal pattern set compiles"))
}

fn formal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FORMAL_PATTERN).expect("formal pattern set compiles"))
}

/// Count informal signal occurrences in `text`.
pub fn informal_hits(text: &str) -> u32 {
    informal_regex().find_iter(text).count() as u32
}

/// Count formal marker occurrences in `text`.
pub fn formal_hits(text: &str) -> u32 {
    formal_regex().find_iter(text).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_informal_words_match_case_insensitively() {
        assert_eq!(informal_hits("Gonna do it, KINDA"), 2);
    }

    #[test]
    fn test_contractions_count() {
        assert_eq!(informal_hits("don't can't won't"), 3);
    }

    #[test]
    fn test_punctuation_runs_count_once_per_run() {
        // A run matches once regardless of its length.
        assert_eq!(informal_hits("what!!!! really???"), 2);
        assert_eq!(informal_hits("hmm....."), 1);
    }

    #[test]
    fn test_all_caps_requires_actual_uppercase() {
        assert_eq!(informal_hits("this text is lowercase"), 0);
        assert_eq!(informal_hits("this is URGENT"), 1);
        // Three-letter caps are too short to count as shouting.
        assert_eq!(informal_hits("the USA team"), 0);
    }

    #[test]
    fn test_union_never_double_counts_a_span() {
        // "don't" could only ever match the contraction branch once.
        assert_eq!(informal_hits("don't"), 1);
    }

    #[test]
    fn test_formal_markers() {
        assert_eq!(formal_hits("Furthermore, we shall examine it."), 3);
        assert_eq!(formal_hits("nothing fancy here"), 0);
    }

    #[test]
    fn test_formal_marker_needs_word_boundary() {
        // "demonstrably" is not "demonstrate".
        assert_eq!(formal_hits("demonstrably"), 0);
    }
}
