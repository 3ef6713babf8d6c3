use super::GherkinRole;

pub(super) const KEYWORDS: &[(GherkinRole, &[&str])] = &[
    (GherkinRole::Feature, &["Feature", "Business Need", "Ability"]),
    (GherkinRole::Background, &["Background"]),
    (GherkinRole::Rule, &["Rule"]),
    (GherkinRole::Scenario, &["Scenario", "Example"]),
    (GherkinRole::ScenarioOutline, &["Scenario Outline", "Scenario Template"]),
    (GherkinRole::Examples, &["Examples", "Scenarios"]),
    (GherkinRole::Given, &["Given", "*"]),
    (GherkinRole::When, &["When", "*"]),
    (GherkinRole::Then, &["Then", "*"]),
    (GherkinRole::And, &["And", "*"]),
    (GherkinRole::But, &["But", "*"]),
];
