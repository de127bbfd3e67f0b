use crate::*;
use crate::script::*;
use serde_json::json;

// ========== Chain ==========

#[test]
fn test_chain_from_iter() {
    let chain: Chain = ["a", "b"].into_iter().collect();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.utterances()[1], "b");
}

#[test]
fn test_chain_from_json() {
    let chain = Chain::from_json(&json!(["おはよう", "おはようございます"])).unwrap();
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_chain_from_json_not_array() {
    let err = Chain::from_json(&json!({"text": "hi"})).unwrap_err();
    assert!(matches!(err, SieveError::MalformedInput(_)));
}

#[test]
fn test_chain_from_json_non_text_utterance() {
    let err = Chain::from_json(&json!(["hello", 42])).unwrap_err();
    assert!(err.to_string().contains("utterance 1"));
}

#[test]
fn test_chain_serde_transparent() {
    let chain: Chain = ["x", "y"].into_iter().collect();
    assert_eq!(serde_json::to_string(&chain).unwrap(), r#"["x","y"]"#);
}

#[test]
fn test_chain_map_keeps_length() {
    let chain: Chain = ["ab", "cd", "ef"].into_iter().collect();
    let upper = chain.map(|s| s.to_uppercase());
    assert_eq!(upper.len(), 3);
    assert_eq!(upper.utterances()[2], "EF");
}

// ========== Verdict ==========

#[test]
fn test_verdict_accessors() {
    let chain: Chain = ["a"].into_iter().collect();
    let ok = Verdict::Accepted(chain.clone());
    assert!(ok.is_accepted());
    assert_eq!(ok.accepted(), Some(&chain));
    assert!(ok.rejection().is_none());

    let no = Verdict::Rejected(Rejection::predicate(FilterKind::Emoticon));
    assert!(!no.is_accepted());
    assert_eq!(no.rejection().unwrap().filter, FilterKind::Emoticon);
    assert!(no.into_accepted().is_none());
}

#[test]
fn test_rejection_malformed() {
    let r = Rejection::malformed(FilterKind::TokenCount, "boom");
    assert!(r.is_malformed());
    assert!(r.to_string().contains("TokenCountFilter"));
    assert!(!Rejection::predicate(FilterKind::Length).is_malformed());
}

#[test]
fn test_filter_kind_names() {
    assert_eq!(FilterKind::LanguageScript.to_string(), "LanguageScriptFilter");
    assert_eq!(FilterKind::JaccardRedundancy.name(), "JaccardRedundancyFilter");
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = SieveConfig::default();
    assert!(c.pipeline.apply_normalization);
    assert_eq!(c.pipeline.max_hold, 1000);
    assert_eq!((c.token_count.min_len, c.token_count.max_len), (6, 29));
    assert_eq!(c.jaccard.threshold, 0.5);
    assert_eq!(c.normalizer.newline_policy, NewlinePolicy::Period);
    assert_eq!(c.preprocess.max_chars, 140);
}

#[test]
fn test_config_partial_json() {
    let c = SieveConfig::from_json_str(
        r#"{"jaccard": {"threshold": 0.7}, "normalizer": {"newline_policy": "space"}}"#,
    )
    .unwrap();
    assert_eq!(c.jaccard.threshold, 0.7);
    assert_eq!(c.jaccard.min_unique_ratio, 0.5);
    assert_eq!(c.normalizer.newline_policy, NewlinePolicy::Space);
    assert_eq!(c.normalizer.whitespace_policy, WhitespacePolicy::Remove);
    assert_eq!(c.token_count.max_len, 29);
}

#[test]
fn test_config_rejects_inverted_bounds() {
    let err = SieveConfig::from_json_str(r#"{"token_count": {"min_len": 10, "max_len": 3}}"#).unwrap_err();
    assert!(matches!(err, SieveError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_threshold_out_of_range() {
    let err = SieveConfig::from_json_str(r#"{"jaccard": {"threshold": 1.5}}"#).unwrap_err();
    assert!(err.to_string().contains("jaccard.threshold"));
}

#[test]
fn test_config_bad_json() {
    let err = SieveConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, SieveError::Serialization(_)));
}

#[test]
fn test_config_missing_file() {
    let err = SieveConfig::from_json_file("/nonexistent/sieve.json").unwrap_err();
    assert!(matches!(err, SieveError::Io(_)));
}

#[test]
fn test_bounds_inclusive() {
    let b = TokenCountConfig::default();
    assert!(b.contains(6));
    assert!(b.contains(29));
    assert!(!b.contains(5));
    assert!(!b.contains(30));
}

// ========== Script ==========

#[test]
fn test_script_blocks() {
    assert!(is_japanese('あ'));
    assert!(is_japanese('ア'));
    assert!(is_japanese('ｱ'));
    assert!(is_japanese('猫'));
    assert!(is_japanese('ー'));
    assert!(!is_japanese('a'));
    assert!(!is_japanese('！'));
    assert!(!is_japanese('。'));
}

#[test]
fn test_script_letters_exclude_marks() {
    assert!(is_japanese_letter('つ'));
    assert!(is_japanese_letter('ﾉ'));
    assert!(!is_japanese_letter('ー'));
    assert!(!is_japanese_letter('゜'));
    assert!(!is_japanese_letter('ﾟ'));
    assert!(!is_japanese_letter('・'));
}

#[test]
fn test_contains_japanese() {
    assert!(contains_japanese("Twitterのユーザー"));
    assert!(!contains_japanese("I want to do a massive implementation."));
}

// ========== Tokenizers ==========

#[test]
fn test_char_tokenizer_skips_whitespace() {
    let tokens = CharTokenizer.tokenize("猫 かわいい").unwrap();
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_whitespace_tokenizer() {
    let tokens = WhitespaceTokenizer.tokenize("python と pytorch が 大好き").unwrap();
    assert_eq!(tokens, vec!["python", "と", "pytorch", "が", "大好き"]);
}

#[test]
fn test_script_run_tokenizer() {
    let tokens = ScriptRunTokenizer.tokenize("pythonとpytorchが大好き！").unwrap();
    assert_eq!(tokens, vec!["python", "と", "pytorch", "が", "大好", "き", "！"]);
}

#[test]
fn test_script_run_tokenizer_katakana_long_vowel() {
    let tokens = ScriptRunTokenizer.tokenize("ユーザー名").unwrap();
    assert_eq!(tokens, vec!["ユーザー", "名"]);
}

#[test]
fn test_tokenizer_through_reference() {
    let boxed: Box<dyn Tokenizer> = Box::new(WhitespaceTokenizer);
    assert_eq!(boxed.tokenize("a b").unwrap().len(), 2);
    assert_eq!(boxed.name(), "whitespace");
}
