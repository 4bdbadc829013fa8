use std::fs;

use figment::providers::{Format, Toml};
use figment::Figment;
use tempfile::TempDir;

use solepulse_core::config::{resolve_with_base, Config, SentimentConfig, DEFAULT_TRANSFORMER_MODEL};
use solepulse_core::registry::{AliasRegistry, ChannelRegistry, IntentRegistry, ModelCatalog};
use solepulse_core::types::{InputRecord, IntentResult, SentimentLabel};

fn config_from(toml: &str) -> Config {
    Config::from_figment(Figment::new().merge(Toml::string(toml)))
}

#[test]
fn sentiment_defaults_without_any_source() {
    let settings = config_from("").sentiment().expect("defaults");
    assert_eq!(settings, SentimentConfig::default());
    assert_eq!(settings.context_window, 15);
    assert_eq!(settings.transformer_batch_size, 32);
    assert_eq!(settings.transformer_model, DEFAULT_TRANSFORMER_MODEL);
    assert!((settings.transformer_weight - 0.6).abs() < 1e-6);
    assert!((settings.lexicon_weight - 0.4).abs() < 1e-6);
}

#[test]
fn partial_table_keeps_remaining_defaults() {
    let settings = config_from("[sentiment]\ncontext_window = 5\ntransformer_weight = 0.8\n")
        .sentiment()
        .expect("partial table");
    assert_eq!(settings.context_window, 5);
    assert!((settings.transformer_weight - 0.8).abs() < 1e-6);
    assert!((settings.lexicon_weight - 0.4).abs() < 1e-6);
    assert_eq!(settings.model_dir, None);
}

#[test]
fn config_file_on_disk_is_read() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[sentiment]\nmodel_dir = \"models/sentiment\"\ntransformer_batch_size = 8\n").unwrap();

    let config = Config::from_figment(Figment::new().merge(Toml::file(&path)));
    let settings = config.sentiment().expect("file config");
    assert_eq!(settings.transformer_batch_size, 8);
    assert_eq!(settings.model_dir.as_deref(), Some("models/sentiment"));
    let window: usize = config.get("sentiment.context_window").unwrap_or(15);
    assert_eq!(window, 15);
}

#[test]
fn invalid_settings_are_rejected() {
    for toml in [
        "[sentiment]\ntransformer_weight = -0.1\n",
        "[sentiment]\npositive_threshold = 1.5\n",
        "[sentiment]\npositive_threshold = -0.2\nnegative_threshold = 0.2\n",
        "[sentiment]\ntransformer_batch_size = 0\n",
        "[sentiment]\ntransformer_model = \"  \"\n",
        "[sentiment]\ncontext_window = \"wide\"\n",
    ] {
        assert!(config_from(toml).sentiment().is_err(), "accepted {toml:?}");
    }
}

#[test]
fn labels_follow_thresholds() {
    let settings = SentimentConfig::default();
    assert_eq!(settings.label(0.05), SentimentLabel::Positive);
    assert_eq!(settings.label(0.8), SentimentLabel::Positive);
    assert_eq!(settings.label(0.0), SentimentLabel::Neutral);
    assert_eq!(settings.label(0.049), SentimentLabel::Neutral);
    assert_eq!(settings.label(-0.05), SentimentLabel::Negative);
    assert_eq!(settings.label(-1.0), SentimentLabel::Negative);
}

#[test]
fn relative_paths_resolve_against_base() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(resolve_with_base(tmp.path(), "models"), tmp.path().join("models"));
    assert_eq!(resolve_with_base(tmp.path(), "/opt/models"), std::path::PathBuf::from("/opt/models"));
}

#[test]
fn default_registries_are_populated() {
    assert_eq!(AliasRegistry::default().len(), 10);
    assert!(AliasRegistry::default().get("Nike").is_some());
    let catalog = ModelCatalog::default();
    assert!(!catalog.is_empty());
    assert!(catalog.entries().iter().all(|e| e.reference_price >= 0.0 && !e.aliases.is_empty()));
    let channels = ChannelRegistry::default();
    assert_eq!(channels.channel_for_domain("stockx.com"), Some("StockX"));
    assert_eq!(channels.channel_for_keyword("foot locker"), Some("Foot Locker"));
    assert_eq!(
        IntentRegistry::default().priority(),
        vec![
            "completed_purchase",
            "marketplace",
            "selling",
            "seeking_purchase",
            "purchase_consideration",
            "availability_info",
            "price_discussion",
        ]
    );
}

#[test]
fn registry_from_entries_normalises_input() {
    let brands =
        AliasRegistry::from_entries([("Acme", vec!["Acme", " "]), ("Zed", vec!["Zed"]), ("Acme", vec!["ACME Co"])]);
    assert_eq!(brands.len(), 2);
    assert_eq!(brands.entries()[0].canonical, "Acme");
    assert_eq!(brands.entries()[0].aliases, vec!["ACME Co".to_string()]);

    let channels = ChannelRegistry::from_entries([("WWW.Shop.Test", "Shop")], [(" Shop Keyword ", "Shop")]);
    assert_eq!(channels.channel_for_domain("shop.test"), Some("Shop"));
    assert_eq!(channels.channel_for_keyword("shop keyword"), Some("Shop"));
}

#[test]
fn intent_result_primary_is_first_match() {
    let empty = IntentResult::from_matches(Vec::new());
    assert_eq!(empty, IntentResult::none());
    assert!(empty.primary_intent.is_none());

    let result = IntentResult::from_matches(vec![
        ("marketplace".to_string(), vec!["WTS".to_string()]),
        ("price_discussion".to_string(), vec!["paid $200".to_string()]),
    ]);
    assert_eq!(result.primary_intent.as_deref(), Some("marketplace"));
    assert_eq!(result.all_intents, vec!["marketplace".to_string(), "price_discussion".to_string()]);
    assert_eq!(result.matched_patterns["price_discussion"], vec!["paid $200".to_string()]);
}

#[test]
fn input_record_accepts_export_field_names() {
    let record: InputRecord =
        serde_json::from_str(r#"{"id":"p1","full_text":"hello","extracted_urls":["https://goat.com"]}"#).unwrap();
    assert_eq!(record, InputRecord::new("p1", "hello").with_urls(vec!["https://goat.com".to_string()]));

    let bare: InputRecord = serde_json::from_str(r#"{"id":"p2"}"#).unwrap();
    assert!(bare.text.is_empty());
    assert!(bare.urls.is_empty());
}
