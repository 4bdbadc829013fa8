use solepulse_core::registry::{ModelCatalog, ModelEntry};
use solepulse_detect::ModelDetector;

fn detector() -> ModelDetector {
    ModelDetector::with_defaults().expect("model detector")
}

fn entry(name: &str, brand: &str, price: f64, aliases: &[&str]) -> ModelEntry {
    ModelEntry {
        canonical: name.to_string(),
        brand: brand.to_string(),
        reference_price: price,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

#[test]
fn full_alias_wins_over_contained_alias() {
    let mentions = detector().detect("Air Jordan 1 review");
    assert_eq!(mentions.len(), 1);
    let m = &mentions[0];
    assert_eq!(m.canonical, "Air Jordan 1");
    assert_eq!(m.alias, "Air Jordan 1");
    assert_eq!((m.start, m.end), (0, 12));
}

#[test]
fn longer_alias_is_found_within_entity() {
    let mentions = detector().detect("the Yeezy Boost 350 still slaps");
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].canonical, "Yeezy 350");
    assert_eq!(mentions[0].surface, "Yeezy Boost 350");
}

#[test]
fn model_spans_never_overlap() {
    let d = detector();
    let texts = [
        "Air Jordan 1 vs Jordan 1s vs AJ1, plus a Dunk Low and SB Dunk Low",
        "New Balance 990v6 or NB 990 or just 990, maybe the 550",
        "Air Max 90, AM 90, Air Max TN and Air Max Plus",
    ];
    for text in texts {
        let mentions = d.detect(text);
        for (i, a) in mentions.iter().enumerate() {
            for b in &mentions[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?} in {text:?}");
            }
        }
        assert!(mentions.windows(2).all(|w| w[0].start <= w[1].start));
    }
}

#[test]
fn every_registered_alias_resolves() {
    let catalog = ModelCatalog::default();
    let d = ModelDetector::new(&catalog).expect("model detector");
    for e in catalog.entries() {
        for alias in &e.aliases {
            let text = format!("honestly the {alias} pair was fine");
            let models = d.detect_models(&text);
            assert!(models.contains(&e.canonical), "alias {alias:?} did not resolve to {}: {models:?}", e.canonical);
        }
    }
}

#[test]
fn mentions_carry_brand_and_reference_price() {
    let mentions = detector().detect("Just copped the Nike Dunk Low in my size!");
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].brand.as_deref(), Some("Nike"));
    assert_eq!(mentions[0].reference_price, Some(110.0));
}

#[test]
fn earlier_catalog_entry_wins_across_models() {
    let catalog = ModelCatalog::from_entries([
        entry("Runner X", "Acme", 99.0, &["Runner"]),
        entry("Runner X Pro", "Acme", 149.0, &["Runner X Pro"]),
    ]);
    let d = ModelDetector::new(&catalog).expect("model detector");
    assert_eq!(d.detect_models("the Runner X Pro is here"), vec!["Runner X".to_string()]);
}

#[test]
fn detect_models_deduplicates() {
    let models = detector().detect_models("AF1 or Air Force 1? Samba. Also AF1.");
    assert_eq!(models, vec!["Air Force 1".to_string(), "Samba".to_string()]);
}

#[test]
fn price_reference_exposes_catalog() {
    let d = detector();
    let info = d.info("Dunk Low").expect("dunk low in catalog");
    assert_eq!(info.brand, "Nike");
    assert_eq!(info.reference_price, 110.0);
    assert!(d.info("Made Up 9000").is_none());
    let first = d.price_reference().next().expect("non-empty catalog");
    assert_eq!(first, ("Air Jordan 1", "Nike", 180.0));
    assert_eq!(d.price_reference().count(), ModelCatalog::default().len());
}

#[test]
fn negative_prices_are_clamped() {
    let catalog = ModelCatalog::from_entries([entry("Freebie", "Acme", -5.0, &["Freebie"])]);
    assert_eq!(catalog.get("Freebie").map(|e| e.reference_price), Some(0.0));
}

#[test]
fn non_ascii_text_reports_character_offsets() {
    let mentions = detector().detect("Café Dunk Low");
    assert_eq!((mentions[0].start, mentions[0].end), (5, 13));
}

#[test]
fn empty_text_yields_nothing() {
    assert!(detector().detect("").is_empty());
    assert!(detector().detect_models("").is_empty());
}
