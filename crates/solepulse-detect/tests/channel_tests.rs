use solepulse_core::registry::ChannelRegistry;
use solepulse_detect::channels::domain_from_url;
use solepulse_detect::{extract_urls, ChannelDetector};

fn detector() -> ChannelDetector {
    ChannelDetector::with_defaults().expect("channel detector")
}

const NO_URLS: &[&str] = &[];

#[test]
fn channel_from_url_domain() {
    let channels = detector().detect("", &["https://www.stockx.com/air-jordan-1"]);
    assert_eq!(channels, vec!["StockX".to_string()]);
}

#[test]
fn channel_from_text_keyword() {
    let channels = detector().detect("Got mine from Foot Locker yesterday", NO_URLS);
    assert_eq!(channels, vec!["Foot Locker".to_string()]);
}

#[test]
fn url_and_keyword_for_same_channel_are_deduplicated() {
    let channels = detector().detect("Check StockX for prices", &["https://stockx.com/x"]);
    assert_eq!(channels, vec!["StockX".to_string()]);
}

#[test]
fn url_channels_come_before_keyword_channels() {
    let channels = detector().detect("saw them on eBay first", &["https://goat.com/sneakers/x", "http://kith.com/a"]);
    assert_eq!(channels, vec!["GOAT".to_string(), "Kith".to_string(), "eBay".to_string()]);
}

#[test]
fn subdomains_are_matched_exactly() {
    let channels = detector().detect("", &["https://consortium.adidas.com/release", "https://adidas.com/samba"]);
    assert_eq!(channels, vec!["Adidas Consortium".to_string(), "Adidas Direct".to_string()]);
}

#[test]
fn unknown_and_malformed_urls_contribute_nothing() {
    let d = detector();
    assert!(d.detect_from_urls(&["https://example.org/page", "http://", "not a url at all"]).is_empty());
    assert!(d.detect("", NO_URLS).is_empty());
}

#[test]
fn keywords_respect_word_boundaries() {
    let channels = detector().detect_from_text("the goatee guy sold them on goat");
    assert_eq!(channels, vec!["GOAT".to_string()]);
    assert!(detector().detect_from_text("goatee only").is_empty());
}

#[test]
fn domain_normalisation() {
    assert_eq!(domain_from_url("https://WWW.Nike.com/launch").as_deref(), Some("nike.com"));
    assert_eq!(domain_from_url("stockx.com/buy").as_deref(), Some("stockx.com"));
    assert_eq!(domain_from_url("   "), None);
}

#[test]
fn inline_urls_are_extracted() {
    let urls = extract_urls("copped (https://www.nike.com/launch/t/dunk) and see http://goat.com/x.");
    assert_eq!(urls[0], "https://www.nike.com/launch/t/dunk");
    assert!(urls[1].starts_with("http://goat.com/x"));
    assert!(extract_urls("no links here").is_empty());
}

#[test]
fn empty_keyword_registry_matches_nothing() {
    let registry = ChannelRegistry::from_entries([("shop.test", "Test Shop")], Vec::<(String, String)>::new());
    let d = ChannelDetector::new(&registry).expect("channel detector");
    assert!(d.detect_from_text("anything at all").is_empty());
    assert_eq!(d.detect_from_urls(&["https://www.shop.test/a"]), vec!["Test Shop".to_string()]);
}
