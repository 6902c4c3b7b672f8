use std::collections::HashSet;

use nutscan_core::i18n::{Language, TextKey, EN, TR};

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[test]
fn test_every_key_is_translated_in_both_languages() {
    for key in TextKey::ALL {
        assert!(!EN.get(key).trim().is_empty(), "missing English text for {}", key.name());
        assert!(!TR.get(key).trim().is_empty(), "missing Turkish text for {}", key.name());
    }
}

#[test]
fn test_key_names_are_unique() {
    let names: HashSet<_> = TextKey::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), TextKey::ALL.len());
    assert!(names.contains("anomalyHeatmapDesc"));
}

#[test]
fn test_lookup_matches_fields() {
    assert_eq!(EN.get(TextKey::AnalyzeButton), EN.analyze_button);
    assert_eq!(TR.get(TextKey::AnomalyDetected), "ANOMALİ TESPİT EDİLDİ");
    assert_eq!(Language::Tr.strings().threshold, "Eşik");
    assert_eq!(Language::En.strings().threshold, "Threshold");
}

#[test]
fn test_heatmap_description_prefix_is_left_open() {
    for lang in Language::ALL {
        let desc = lang.strings().anomaly_heatmap_desc;
        assert!(desc.ends_with(':'), "{lang}: {desc}");
        assert_eq!(desc.matches('(').count(), 1);
        assert_eq!(desc.matches(')').count(), 0);
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[test]
fn test_default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn test_toggle_is_an_involution() {
    assert_eq!(Language::En.toggled(), Language::Tr);
    assert_eq!(Language::Tr.toggled(), Language::En);
    for lang in Language::ALL {
        assert_eq!(lang.toggled().toggled(), lang);
    }
}

#[test]
fn test_language_parse_and_display() {
    assert_eq!("en".parse::<Language>(), Ok(Language::En));
    assert_eq!(" TR ".parse::<Language>(), Ok(Language::Tr));
    assert!("de".parse::<Language>().is_err());
    assert_eq!(Language::Tr.to_string(), "tr");
}
