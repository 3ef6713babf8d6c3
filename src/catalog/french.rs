use super::GherkinRole;

pub(super) const KEYWORDS: &[(GherkinRole, &[&str])] = &[
    (GherkinRole::Feature, &["Fonctionnalité"]),
    (GherkinRole::Background, &["Contexte"]),
    (GherkinRole::Rule, &["Règle"]),
    (GherkinRole::Scenario, &["Scénario", "Exemple"]),
    (GherkinRole::ScenarioOutline, &["Plan du scénario", "Plan du Scénario"]),
    (GherkinRole::Examples, &["Exemples"]),
    (
        GherkinRole::Given,
        &[
            "Soit",
            "Sachant que",
            "Sachant qu'",
            "Sachant",
            "Étant donné que",
            "Étant donné qu'",
            "Étant donné",
            "Étant donnée",
            "Étant donnés",
            "Étant données",
            "Etant donné que",
            "Etant donné qu'",
            "Etant donné",
            "Etant donnée",
            "Etant donnés",
            "Etant données",
            "*",
        ],
    ),
    (GherkinRole::When, &["Quand", "Lorsque", "Lorsqu'", "*"]),
    (GherkinRole::Then, &["Alors", "Donc", "*"]),
    (GherkinRole::And, &["Et que", "Et qu'", "Et", "*"]),
    (GherkinRole::But, &["Mais que", "Mais qu'", "Mais", "*"]),
];
