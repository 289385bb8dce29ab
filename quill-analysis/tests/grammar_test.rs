//! Grammar shaping tests — spelling filter, span slicing, suggestion cap,
//! failure behavior.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use quill_analysis::grammar::GrammarChecker;
use quill_core::config::AnalysisConfig;
use quill_core::traits::test_helpers::{
    raw_match, FailingGrammarEngine, StaticGrammarEngine, StubGrammarProvider,
    UnavailableGrammarProvider,
};
use quill_core::traits::RawGrammarMatch;

fn checker_with(matches: Vec<RawGrammarMatch>) -> GrammarChecker {
    let engine = Arc::new(StaticGrammarEngine::new(matches));
    GrammarChecker::new(Box::new(StubGrammarProvider::new(engine)))
}

// ---- Empty input returns no issues and touches nothing ----

#[test]
fn empty_input_skips_engine() {
    let provider = UnavailableGrammarProvider::new();
    let attempts = provider.attempt_counter();
    let checker = GrammarChecker::new(Box::new(provider));

    assert!(checker.check("").is_empty());
    assert!(checker.check("   \n").is_empty());
    assert_eq!(attempts.load(Ordering::SeqCst), 0);
}

// ---- Unavailable engine degrades to an empty list, acquired once ----

#[test]
fn unavailable_engine_yields_empty() {
    let provider = UnavailableGrammarProvider::new();
    let attempts = provider.attempt_counter();
    let checker = GrammarChecker::new(Box::new(provider));

    for _ in 0..3 {
        assert!(checker.check("The cats is sleeping.").is_empty());
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

// ---- Spelling-family rules never appear in output ----

#[test]
fn spelling_rules_are_filtered_out() {
    let checker = checker_with(vec![
        raw_match("MORFOLOGIK_RULE_EN_US", 0, 3),
        raw_match("SUBJECT_VERB_AGREEMENT", 9, 2),
        raw_match("MORFOLOGIK_RULE_EN_GB", 4, 4),
    ]);

    let issues = checker.check("The cats is sleeping.");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, "SUBJECT_VERB_AGREEMENT");
    assert!(issues.iter().all(|i| !i.rule_id.starts_with("MORFOLOGIK_RULE")));
}

// ---- bad_word is sliced from the original input by character offsets ----

#[test]
fn bad_word_comes_from_input_text() {
    let mut m = raw_match("SUBJECT_VERB_AGREEMENT", 9, 2);
    // An engine-supplied text field must not leak through.
    m.context = "…cats WAS sleeping…".to_string();
    let checker = checker_with(vec![m]);

    let text = "The cats is sleeping.";
    let issues = checker.check(text);
    assert_eq!(issues[0].bad_word, "is");
    assert_eq!(issues[0].bad_word, text.chars().skip(9).take(2).collect::<String>());
}

#[test]
fn bad_word_slicing_is_char_based() {
    // "café " puts a multi-byte char before the flagged span.
    let text = "café is nice";
    let checker = checker_with(vec![raw_match("AGREEMENT", 5, 2)]);

    let issues = checker.check(text);
    assert_eq!(issues[0].bad_word, "is");
    assert_eq!(issues[0].offset, 5);
    assert_eq!(issues[0].length, 2);
}

// ---- Replacements cap at 3, order preserved ----

#[test]
fn replacements_are_capped_in_order() {
    let mut m = raw_match("STYLE_RULE", 0, 3);
    m.replacements = vec![
        "first".to_string(),
        "second".to_string(),
        "third".to_string(),
        "fourth".to_string(),
    ];
    let checker = checker_with(vec![m]);

    let issues = checker.check("teh quick fox");
    assert_eq!(issues[0].replacements.len(), 3);
    assert_eq!(issues[0].replacements[0], "first");
    assert_eq!(issues[0].replacements[2], "third");
}

#[test]
fn fewer_replacements_pass_through() {
    let mut m = raw_match("STYLE_RULE", 0, 3);
    m.replacements = vec!["the".to_string()];
    let checker = checker_with(vec![m]);

    let issues = checker.check("teh quick fox");
    assert_eq!(issues[0].replacements.len(), 1);
}

// ---- Output keeps the engine's document order ----

#[test]
fn issue_order_matches_engine_order() {
    let checker = checker_with(vec![
        raw_match("RULE_B", 10, 2),
        raw_match("RULE_A", 0, 3),
        raw_match("RULE_C", 4, 5),
    ]);

    let issues = checker.check("teh quick fox jumps over");
    let order: Vec<&str> = issues.iter().map(|i| i.rule_id.as_str()).collect();
    assert_eq!(order, ["RULE_B", "RULE_A", "RULE_C"]);
}

// ---- Invocation failure is swallowed ----

#[test]
fn engine_failure_yields_empty() {
    let engine = Arc::new(FailingGrammarEngine);
    let provider = StubGrammarProvider::new(engine);
    let acquisitions = provider.acquisition_counter();
    let checker = GrammarChecker::new(Box::new(provider));

    assert!(checker.check("The cats is sleeping.").is_empty());
    assert!(checker.check("Another sentence here.").is_empty());
    assert_eq!(acquisitions.load(Ordering::SeqCst), 1, "handle stays cached");
}

// ---- Config overrides ----

#[test]
fn custom_replacement_cap_and_prefix() {
    let mut m1 = raw_match("SPELL_CHECK_RULE", 0, 3);
    m1.replacements = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let mut m2 = raw_match("GRAMMAR_RULE", 4, 5);
    m2.replacements = vec!["x".to_string(), "y".to_string(), "z".to_string()];

    let engine = Arc::new(StaticGrammarEngine::new(vec![m1, m2]));
    let config = AnalysisConfig {
        max_replacements: Some(2),
        spelling_rule_prefix: Some("SPELL_".to_string()),
        ..Default::default()
    };
    let checker = GrammarChecker::with_config(Box::new(StubGrammarProvider::new(engine)), &config);

    let issues = checker.check("teh quick fox");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, "GRAMMAR_RULE");
    assert_eq!(issues[0].replacements.len(), 2);
}
