//! Library API integration tests
use referent_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

#[test]
fn test_extract_realistic_article() {
    let html = read_fixture("article.html");
    let article = extract(&html);

    assert_eq!(
        article.title,
        "Researchers Demonstrate Practical Quantum Error Correction"
    );
    assert_eq!(article.date, "2024-05-02T09:00:00Z");
    assert!(article.content.contains("quantum error correction"));
    assert!(article.content.contains("logical qubit"));
}

#[test]
fn test_extract_drops_chrome_and_ads() {
    let html = read_fixture("article.html");
    let article = extract(&html);

    assert!(!article.content.contains("Subscribe today"));
    assert!(!article.content.contains("analytics"));
    assert!(!article.content.contains("trackScrollDepth"));
    assert!(!article.content.contains("All rights reserved"));
    assert!(!article.content.contains("Related stories"));
}

#[test]
fn test_extract_content_is_single_line() {
    let html = read_fixture("article.html");
    let article = extract(&html);
    assert!(!article.content.contains('\n'));
    assert!(!article.content.contains("  "));
}

#[test]
fn test_extract_short_body_fallback() {
    let html = read_fixture("short_body.html");
    let article = extract(&html);

    assert_eq!(article.title, "Stub");
    assert_eq!(article.date, NOT_FOUND);
    assert_eq!(article.content, "Coming soon.");
}

#[test]
fn test_extract_empty_page_yields_sentinels() {
    let html = read_fixture("empty_content.html");
    let article = extract(&html);

    assert_eq!(article.title, NOT_FOUND);
    assert_eq!(article.date, NOT_FOUND);
    assert_eq!(article.content, NOT_FOUND);
}

#[test]
fn test_extract_never_fails_on_arbitrary_bytes() {
    for garbage in ["", "<", "}{", "<html><body></html>", "\u{feff}<p>bom</p>"] {
        let article = extract(garbage);
        assert!(!article.title.is_empty());
        assert!(!article.date.is_empty());
        assert!(!article.content.is_empty());
    }
}

#[test]
fn test_parsed_article_serialization() {
    let html = read_fixture("short_body.html");
    let article = extract(&html);

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["title"], "Stub");
    assert_eq!(json["date"], NOT_FOUND);
    assert_eq!(json["content"], "Coming soon.");
}

#[test]
fn test_translation_round_trip_is_not_retranslated() {
    // An artifact prompt built from already-translated text must not ask the
    // generation service to translate again.
    let builder = PromptBuilder::new();
    let translated = "Заголовок: Прорыв\n\nТекст: Российский перевод статьи.";

    let prompt = builder.artifact(Action::Telegram, translated, Some("https://example.com/a"));
    assert!(prompt.user.contains(translated));
    assert!(!prompt.user.to_lowercase().contains("translate to russian"));
    assert!(prompt.system.contains("УЖЕ ПЕРЕВЕДЕННЫЙ"));
}

#[test]
fn test_labeled_translation_input() {
    let html = read_fixture("article.html");
    let article = extract(&html);
    let labeled = label_for_translation(&article);

    assert!(labeled.starts_with("Заголовок: "));
    assert!(labeled.contains("Дата: 2024-05-02T09:00:00Z"));
    assert!(labeled.contains("Текст: "));
}
