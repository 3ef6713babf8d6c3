//! End-to-end formatter behavior through the public library API

use gherkinfmt_lib::catalog::{Language, resolve_catalog};
use gherkinfmt_lib::config::Config;
use gherkinfmt_lib::format::{FormatOptions, IndentStyle, LineFormatter, format_lines, remove_multiple_spaces};
use gherkinfmt_lib::types::IndentSize;
use gherkinfmt_lib::{format_document, format_text};
use pretty_assertions::assert_eq;

fn en(lines: &[&str]) -> Vec<String> {
    format_lines(lines, resolve_catalog(Language::English))
}

fn fr(lines: &[&str]) -> Vec<String> {
    format_lines(lines, resolve_catalog(Language::French))
}

#[test]
fn test_calculator_feature() {
    let input = [
        "Feature: Calculator",
        "",
        "Scenario: Add",
        "Given a",
        "And b",
        "When c",
        "Then d",
    ];
    assert_eq!(
        en(&input),
        vec![
            "Feature: Calculator",
            "",
            "\tScenario: Add",
            "\t\tGiven a",
            "\t\tAnd b",
            "\t\tWhen c",
            "\t\tThen d",
        ]
    );
}

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(en(&[]).is_empty());
}

#[test]
fn test_tag_prefix_beats_step_keyword() {
    let output = en(&["Feature: f", "Scenario: s", "Given x", "@mytag Given something"]);
    assert_eq!(output[3], "\t\t@mytag Given something");
}

#[test]
fn test_comment_after_step_inherits_step_level() {
    let output = en(&["Scenario: s", "When x", "# why"]);
    assert_eq!(output, vec!["\tScenario: s", "\t\tWhen x", "\t\t# why"]);
}

#[test]
fn test_examples_table_alignment() {
    let output = en(&[
        "Scenario Outline: login",
        "Given <username> logs in with <password>",
        "Examples:",
        "|username|password|",
        "|john|pass123|",
        "|mary|pass456|",
    ]);
    assert_eq!(
        output,
        vec![
            "\tScenario Outline: login",
            "\t\tGiven <username> logs in with <password>",
            "\t\tExamples:",
            "\t\t\t| username | password |",
            "\t\t\t| john     | pass123  |",
            "\t\t\t| mary     | pass456  |",
        ]
    );
}

#[test]
fn test_table_block_is_not_resumed_after_interruption() {
    let output = en(&["Examples:", "|a|b|", "Then done", "|c|d|"]);
    assert_eq!(output, vec!["\t\tExamples:", "\t\t\t| a | b |", "\t\tThen done", "|c|d|"]);
}

#[test]
fn test_table_flushed_at_end_of_input() {
    let output = en(&["Examples:", "| x |", "|longer|"]);
    assert_eq!(output, vec!["\t\tExamples:", "\t\t\t| x      |", "\t\t\t| longer |"]);
}

#[test]
fn test_ragged_rows_keep_their_own_cell_count() {
    let output = en(&["Examples:", "|a|b|c|", "|dddd|e|", "|f|"]);
    assert_eq!(
        output,
        vec![
            "\t\tExamples:",
            "\t\t\t| a    | b | c |",
            "\t\t\t| dddd | e |",
            "\t\t\t| f    |",
        ]
    );
}

#[test]
fn test_remove_multiple_spaces_keeps_one_space_at_edges() {
    assert_eq!(remove_multiple_spaces("  toto titi    tutu   "), " toto titi tutu ");
}

#[test]
fn test_inner_whitespace_is_collapsed_before_classification() {
    assert_eq!(en(&["Scenario:   spaced    out"]), vec!["\tScenario: spaced out"]);
}

#[test]
fn test_wildcard_step_is_step_level() {
    assert_eq!(en(&["Scenario: s", "* anything goes"]), vec!["\tScenario: s", "\t\t* anything goes"]);
}

#[test]
fn test_synonyms_share_levels() {
    let output = en(&["Example: one", "Scenario Template: two", "Scenarios:"]);
    assert_eq!(output, vec!["\tExample: one", "\tScenario Template: two", "\t\tScenarios:"]);
}

#[test]
fn test_language_catalogs_are_exclusive() {
    assert_eq!(fr(&["Étant donné un nombre"]), vec!["\t\tÉtant donné un nombre"]);
    assert_eq!(fr(&["Given a number"]), vec!["Given a number"]);
    assert_eq!(en(&["Étant donné un nombre"]), vec!["Étant donné un nombre"]);
}

#[test]
fn test_french_elision() {
    assert_eq!(
        fr(&["Scénario: s", "Et qu'il pleut", "Lorsqu'on sort"]),
        vec!["\tScénario: s", "\t\tEt qu'il pleut", "\t\tLorsqu'on sort"]
    );
}

#[test]
fn test_idempotent_on_formatted_document() {
    let catalog = resolve_catalog(Language::English);
    let input = [
        "@billing",
        "Feature: Billing",
        "  Rule: refunds",
        "    Background:",
        "      Given a customer",
        "    Scenario Outline: refund <amount>",
        "      # amounts",
        "      When they ask for <amount>",
        "      Examples:",
        "        |amount|ok|",
        "        |10|yes|",
        "        |1000|no|",
    ];
    let once = format_lines(&input, catalog);
    let twice = format_lines(&once, catalog);
    assert_eq!(once, twice);
}

#[test]
fn test_space_indentation_option() {
    let options = FormatOptions {
        indent: IndentStyle::Spaces(IndentSize::new(2).unwrap()),
        data_tables: false,
    };
    let output = LineFormatter::new(resolve_catalog(Language::English), options).format(&["Scenario: s", "Given x"]);
    assert_eq!(output, vec!["  Scenario: s", "    Given x"]);
}

#[test]
fn test_format_document_preserves_crlf_and_trailing_newline() {
    let catalog = resolve_catalog(Language::English);
    let formatted = format_document("Feature: f\r\nScenario: s\r\n", catalog, FormatOptions::default());
    assert_eq!(formatted, "Feature: f\r\n\tScenario: s\r\n");
}

#[test]
fn test_format_text_honors_language_header() {
    let formatted = format_text("# language: fr\nScénario: s\nSoit x\n", &Config::default()).unwrap();
    assert_eq!(formatted, "# language: fr\n\tScénario: s\n\t\tSoit x\n");
}
