use solepulse_core::registry::AliasRegistry;
use solepulse_detect::BrandDetector;

fn detector() -> BrandDetector {
    BrandDetector::new(&AliasRegistry::default(), 5).expect("brand detector")
}

#[test]
fn direct_brand_name() {
    assert!(detector().detect_brands("I love Nike shoes").contains(&"Nike".to_string()));
}

#[test]
fn aliases_resolve_to_canonical_brand() {
    let d = detector();
    let brands = d.detect_brands("The Three Stripes collab is sick");
    assert_eq!(brands, vec!["Adidas".to_string()]);
    assert!(d.detect_brands("Way of Wade 10 just dropped").contains(&"Li-Ning".to_string()));
    assert!(d.detect_brands("UA Curry 11 is underrated").contains(&"Under Armour".to_string()));
    assert!(d.detect_brands("Yeezy 350 just restocked").contains(&"Adidas".to_string()));
}

#[test]
fn short_alias_does_not_match_inside_longer_word() {
    for text in ["an ultralight design", "a casual and unusual design, quality matters"] {
        let brands = detector().detect_brands(text);
        assert!(!brands.contains(&"Under Armour".to_string()), "{text:?} gave {brands:?}");
    }
}

#[test]
fn every_registered_alias_resolves() {
    let registry = AliasRegistry::default();
    let d = BrandDetector::new(&registry, 15).expect("brand detector");
    for entry in registry.entries() {
        for alias in &entry.aliases {
            let text = format!("honestly the {alias} pair was fine");
            let brands = d.detect_brands(&text);
            assert!(
                brands.contains(&entry.canonical),
                "alias {alias:?} did not resolve to {}: {brands:?}",
                entry.canonical
            );
        }
    }
}

#[test]
fn overlapping_brand_mentions_are_all_kept() {
    let mentions = detector().detect("Air Jordan drops are wild");
    let aliases: Vec<&str> = mentions.iter().map(|m| m.mention.alias.as_str()).collect();
    assert!(aliases.contains(&"Air Jordan"));
    assert!(aliases.contains(&"Jordan"));
    assert!(mentions.windows(2).all(|w| w[0].mention.start <= w[1].mention.start));
}

#[test]
fn detect_brands_deduplicates_in_first_occurrence_order() {
    let brands = detector().detect_brands("Adidas or Nike? Nike every time, sorry Adidas");
    assert_eq!(brands, vec!["Adidas".to_string(), "Nike".to_string()]);
}

#[test]
fn context_window_splits_before_and_after() {
    let d = BrandDetector::new(&AliasRegistry::default(), 2).expect("brand detector");
    let mentions = d.detect("one two three Nike four five six");
    assert_eq!(mentions.len(), 1);
    let ctx = &mentions[0].context;
    assert_eq!(ctx.before, vec!["two", "three"]);
    assert_eq!(ctx.after, vec!["four", "five"]);
    assert_eq!(ctx.text, "two three Nike four five");
}

#[test]
fn context_window_is_clamped_to_text_bounds() {
    let d = BrandDetector::new(&AliasRegistry::default(), 10).expect("brand detector");
    let mentions = d.detect("Puma rules");
    assert_eq!(mentions[0].context.text, "Puma rules");
    assert!(mentions[0].context.before.is_empty());
    assert_eq!(mentions[0].context.after, vec!["rules"]);
}

#[test]
fn mention_offsets_are_character_based() {
    let mentions = detector().detect("Très cool Nike");
    let nike = &mentions[0].mention;
    assert_eq!((nike.start, nike.end), (10, 14));
    assert_eq!(nike.surface, "Nike");
}

#[test]
fn matching_is_case_insensitive_and_keeps_surface_form() {
    let mentions = detector().detect("NIKE and adidas");
    assert_eq!(mentions[0].mention.canonical, "Nike");
    assert_eq!(mentions[0].mention.surface, "NIKE");
    assert_eq!(mentions[1].mention.canonical, "Adidas");
}

#[test]
fn custom_registry_is_honoured() {
    let registry = AliasRegistry::from_entries([("Acme", vec!["Acme", "Roadrunner Co"])]);
    let d = BrandDetector::new(&registry, 3).expect("brand detector");
    assert_eq!(d.detect_brands("roadrunner co makes Nike look slow"), vec!["Acme".to_string()]);
}

#[test]
fn empty_text_yields_nothing() {
    let d = detector();
    assert!(d.detect("").is_empty());
    assert!(d.detect_brands("   ").is_empty());
}

#[test]
fn case_variant_aliases_each_produce_a_mention() {
    let d = detector();
    let puma = d.detect("I love my Puma kicks");
    assert_eq!(puma.len(), 2);
    assert!(puma.iter().all(|bm| bm.brand() == "Puma" && bm.mention.start == 10));
    assert_eq!(d.detect("ASICS running shoes").len(), 2);
    assert_eq!(d.detect_brands("I love my Puma kicks"), vec!["Puma".to_string()]);
}
