use serde_json::json;
use tempfile::TempDir;

use solepulse_core::config::SentimentConfig;
use solepulse_core::traits::ContextualScorer;
use solepulse_contextual::{
    default_scorer, resolve_model_dir, FakeScorer, LabelMap, TransformerScorer, UnavailableScorer,
};

#[test]
fn fake_scorer_is_deterministic_and_bounded() {
    let scorer = FakeScorer::new("fake");
    let texts = vec![
        "these Dunks are fire".to_string(),
        "these Dunks are fire".to_string(),
        "laces snapped on day one".to_string(),
        String::new(),
    ];
    let scores = scorer.score_batch(&texts).expect("fake scores");
    assert_eq!(scores.len(), 4);
    assert_eq!(scores[0], scores[1]);
    assert_eq!(scores[3], 0.0);
    assert!(scores.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert_eq!(scorer.score("these Dunks are fire").unwrap(), scores[0]);
}

#[test]
fn unavailable_scorer_reports_unavailable() {
    let scorer = UnavailableScorer::new("none", "no runtime");
    let err = scorer.score_batch(&["text".to_string()]).unwrap_err();
    assert!(err.is_unavailable());
    assert!(scorer.score_batch(&[]).unwrap().is_empty());
    assert!(scorer.score("text").unwrap_err().is_unavailable());
}

#[test]
fn unavailable_scorer_scores_blank_snippets_as_zero() {
    let scorer = UnavailableScorer::new("none", "no runtime");
    assert_eq!(scorer.score("").unwrap(), 0.0);
    assert_eq!(scorer.score("   ").unwrap(), 0.0);
    assert_eq!(scorer.score_batch(&[String::new(), " \n".to_string()]).unwrap(), vec![0.0, 0.0]);
}

#[test]
fn missing_model_is_reported_on_first_use_not_construction() {
    let tmp = TempDir::new().unwrap();
    let scorer = TransformerScorer::new("org/missing-model", tmp.path().join("missing"), 4);
    assert_eq!(scorer.model_id(), "org/missing-model");

    let err = scorer.score("this should try to load").unwrap_err();
    assert!(err.is_unavailable(), "got {err:?}");
    // the failure is remembered
    let err = scorer.score_batch(&["again".to_string()]).unwrap_err();
    assert!(err.is_unavailable());
}

#[test]
fn empty_snippets_do_not_load_the_model() {
    let tmp = TempDir::new().unwrap();
    let scorer = TransformerScorer::new("org/missing-model", tmp.path().join("missing"), 4);
    assert_eq!(scorer.score("   ").unwrap(), 0.0);
    assert_eq!(scorer.score_batch(&[String::new(), " ".to_string()]).unwrap(), vec![0.0, 0.0]);
}

#[test]
fn label_map_reads_id2label() {
    let map = LabelMap::from_model_config(&json!({
        "id2label": {"0": "negative", "1": "neutral", "2": "positive"}
    }))
    .unwrap();
    assert_eq!(map, LabelMap { num_labels: 3, positive: 2, negative: 0 });
    assert!((map.polarity(&[0.1, 0.2, 0.7]) - 0.6).abs() < 1e-6);

    let generic = LabelMap::from_model_config(&json!({
        "id2label": {"0": "LABEL_0", "1": "LABEL_1", "2": "LABEL_2"}
    }))
    .unwrap();
    assert_eq!(generic, LabelMap::default());

    let swapped = LabelMap::from_model_config(&json!({"id2label": {"0": "POS", "1": "NEG"}})).unwrap();
    assert_eq!((swapped.num_labels, swapped.positive, swapped.negative), (2, 0, 1));

    let descriptive = LabelMap::from_model_config(&json!({
        "id2label": {"0": "Very_Negative", "1": "neutral", "2": "mostly positive"}
    }))
    .unwrap();
    assert_eq!(descriptive, LabelMap { num_labels: 3, positive: 2, negative: 0 });

    assert_eq!(LabelMap::from_model_config(&json!({})).unwrap(), LabelMap::default());
    assert!(LabelMap::from_model_config(&json!({"id2label": {"0": "joy", "1": "anger"}})).is_err());
}

#[test]
fn model_dir_prefers_settings() {
    let settings =
        SentimentConfig { model_dir: Some("/opt/models/sentiment".to_string()), ..SentimentConfig::default() };
    assert_eq!(resolve_model_dir(&settings), std::path::PathBuf::from("/opt/models/sentiment"));
}

#[test]
fn default_scorer_honours_fake_switch() {
    std::env::set_var("APP_USE_FAKE_SENTIMENT", "1");
    let settings = SentimentConfig::default();
    let scorer = default_scorer(&settings);
    assert_eq!(scorer.model_id(), settings.transformer_model);
    assert!(scorer.score("fresh pair").is_ok());
}
