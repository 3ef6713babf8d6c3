use gherkinfmt_lib::catalog::{
    CatalogError, GherkinRole, KeywordCatalog, Language, detect_language_header, resolve_catalog, resolve_catalog_code,
};
use gherkinfmt_lib::types::IndentLevel;

#[test]
fn test_every_role_has_a_literal_in_every_language() {
    for language in Language::ALL {
        let catalog = resolve_catalog(language);
        for role in GherkinRole::ALL {
            assert!(
                !catalog.literals(role).is_empty(),
                "{role} has no literal in {}",
                language.name()
            );
        }
    }
}

#[test]
fn test_markers_are_shared_across_languages() {
    for language in Language::ALL {
        let catalog = resolve_catalog(language);
        assert_eq!(catalog.literals(GherkinRole::Comment), &["#"]);
        assert_eq!(catalog.literals(GherkinRole::Tag), &["@"]);
        assert_eq!(catalog.classify("# note"), Some(GherkinRole::Comment));
        assert_eq!(catalog.classify("@smoke"), Some(GherkinRole::Tag));
    }
}

#[test]
fn test_resolve_catalog_code() {
    assert_eq!(resolve_catalog_code("en").unwrap().language(), Language::English);
    assert_eq!(resolve_catalog_code(" FR ").unwrap().language(), Language::French);
    assert_eq!(resolve_catalog_code("français").unwrap().language(), Language::French);

    let err = resolve_catalog_code("de").unwrap_err();
    assert_eq!(err, CatalogError::InvalidLanguage("de".to_string()));
    assert_eq!(err.to_string(), "Invalid language 'de'. Supported languages: en, fr");
}

#[test]
fn test_resolve_catalog_returns_shared_instance() {
    let a = resolve_catalog(Language::French);
    let b = resolve_catalog(Language::French);
    assert!(std::ptr::eq(a, b));
    assert_eq!(*a, KeywordCatalog::new(Language::French));
}

#[test]
fn test_priority_tiers() {
    let catalog = resolve_catalog(Language::English);
    assert_eq!(catalog.classify("@wip Feature: x"), Some(GherkinRole::Tag));
    assert_eq!(catalog.classify("# Scenario: x"), Some(GherkinRole::Comment));
    assert_eq!(catalog.classify("Scenario Outline: x"), Some(GherkinRole::ScenarioOutline));
    assert_eq!(catalog.classify("Scenario: x"), Some(GherkinRole::Scenario));
    assert_eq!(catalog.classify("Examples:"), Some(GherkinRole::Examples));
    assert_eq!(catalog.classify("<param> only"), None);
}

#[test]
fn test_prefix_matching_not_substring() {
    let catalog = resolve_catalog(Language::English);
    assert_eq!(catalog.classify("the user is Given a token"), None);
    assert_eq!(catalog.classify("Givenchy is a brand"), None);
    assert_eq!(catalog.classify("Feature without colon"), None);
    assert_eq!(catalog.classify("scenario: lowercase"), None);
}

#[test]
fn test_role_levels() {
    assert_eq!(GherkinRole::Feature.indent_level(), Some(IndentLevel::TOP));
    assert_eq!(GherkinRole::Rule.indent_level(), Some(IndentLevel::SCENARIO));
    assert_eq!(GherkinRole::Examples.indent_level(), Some(IndentLevel::STEP));
    assert_eq!(GherkinRole::But.indent_level(), Some(IndentLevel::STEP));
    assert_eq!(GherkinRole::Tag.indent_level(), None);
    assert_eq!(GherkinRole::Comment.indent_level(), None);
}

#[test]
fn test_french_accents_and_elisions() {
    let catalog = resolve_catalog(Language::French);
    assert_eq!(catalog.classify("Etant donné un panier"), Some(GherkinRole::Given));
    assert_eq!(catalog.classify("Étant donnée une liste"), Some(GherkinRole::Given));
    assert_eq!(catalog.classify("Sachant qu'il pleut"), Some(GherkinRole::Given));
    assert_eq!(catalog.classify("Et qu'il vente"), Some(GherkinRole::And));
    assert_eq!(catalog.classify("Plan du scénario: x"), Some(GherkinRole::ScenarioOutline));
    assert_eq!(catalog.classify("Exemples:"), Some(GherkinRole::Examples));
    assert_eq!(catalog.classify("Exemple: x"), Some(GherkinRole::Scenario));
}

#[test]
fn test_parameters() {
    let catalog = resolve_catalog(Language::English);
    let params: Vec<&str> = catalog.parameters("Given <user> pays <amount> at < 5").collect();
    assert_eq!(params, vec!["user", "amount"]);
}

#[test]
fn test_detect_language_header() {
    assert_eq!(detect_language_header(&["", "# language: fr", "Fonctionnalité: x"]), Some("fr"));
    assert_eq!(detect_language_header(&["#language:en"]), Some("en"));
    assert_eq!(detect_language_header(&["Feature: x", "# language: fr"]), None);
}
