//!
//! Keyword catalogs: the literal keyword spellings recognized for each Gherkin grammar role,
//! one immutable catalog per supported language.
//!
//! Catalogs are built once, on first use, and shared by reference afterwards. The universal
//! comment (`#`) and tag (`@`) markers are merged into every catalog at construction time.

mod english;
mod french;
mod header;

pub use header::detect_language_header;

use phf::phf_map;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use crate::types::IndentLevel;

/// Errors raised while resolving a keyword catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid language '{0}'. Supported languages: {supported}", supported = Language::supported_codes())]
    InvalidLanguage(String),
}

/// Abstract grammar role of a Gherkin line or token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GherkinRole {
    Feature,
    Background,
    Rule,
    Scenario,
    ScenarioOutline,
    Examples,
    Given,
    When,
    Then,
    And,
    But,
    Tag,
    Comment,
    DelimitedParameter,
}

/// How a role's literals are matched against the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    /// Literal must be followed by `:` (`Feature:`, `Examples:`)
    Block,
    /// Literal must be followed by whitespace or end of line, unless it ends in an elision (`qu'`)
    Step,
    /// Bare prefix (`#`, `@`)
    Marker,
    /// Appears inside a line (`<name>`); never classifies a whole line
    Inline,
}

impl GherkinRole {
    pub const ALL: [GherkinRole; 14] = [
        GherkinRole::Feature,
        GherkinRole::Background,
        GherkinRole::Rule,
        GherkinRole::Scenario,
        GherkinRole::ScenarioOutline,
        GherkinRole::Examples,
        GherkinRole::Given,
        GherkinRole::When,
        GherkinRole::Then,
        GherkinRole::And,
        GherkinRole::But,
        GherkinRole::Tag,
        GherkinRole::Comment,
        GherkinRole::DelimitedParameter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GherkinRole::Feature => "Feature",
            GherkinRole::Background => "Background",
            GherkinRole::Rule => "Rule",
            GherkinRole::Scenario => "Scenario",
            GherkinRole::ScenarioOutline => "ScenarioOutline",
            GherkinRole::Examples => "Examples",
            GherkinRole::Given => "Given",
            GherkinRole::When => "When",
            GherkinRole::Then => "Then",
            GherkinRole::And => "And",
            GherkinRole::But => "But",
            GherkinRole::Tag => "Tag",
            GherkinRole::Comment => "Comment",
            GherkinRole::DelimitedParameter => "DelimitedParameter",
        }
    }

    pub fn kind(self) -> RoleKind {
        match self {
            GherkinRole::Feature
            | GherkinRole::Background
            | GherkinRole::Rule
            | GherkinRole::Scenario
            | GherkinRole::ScenarioOutline
            | GherkinRole::Examples => RoleKind::Block,
            GherkinRole::Given | GherkinRole::When | GherkinRole::Then | GherkinRole::And | GherkinRole::But => {
                RoleKind::Step
            }
            GherkinRole::Tag | GherkinRole::Comment => RoleKind::Marker,
            GherkinRole::DelimitedParameter => RoleKind::Inline,
        }
    }

    /// Fixed nesting depth of the role. Tags and comments have none: they inherit the depth of
    /// the most recent structural line.
    pub fn indent_level(self) -> Option<IndentLevel> {
        match self {
            GherkinRole::Feature => Some(IndentLevel::TOP),
            GherkinRole::Background | GherkinRole::Rule | GherkinRole::Scenario | GherkinRole::ScenarioOutline => {
                Some(IndentLevel::SCENARIO)
            }
            GherkinRole::Examples
            | GherkinRole::Given
            | GherkinRole::When
            | GherkinRole::Then
            | GherkinRole::And
            | GherkinRole::But => Some(IndentLevel::STEP),
            GherkinRole::Tag | GherkinRole::Comment | GherkinRole::DelimitedParameter => None,
        }
    }

    pub fn is_step(self) -> bool {
        self.kind() == RoleKind::Step
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GherkinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification tiers, highest priority first. The first tier with a match wins.
const CLASSIFICATION_TIERS: &[&[GherkinRole]] = &[
    &[GherkinRole::Comment, GherkinRole::Tag],
    &[GherkinRole::Feature],
    &[
        GherkinRole::Background,
        GherkinRole::Rule,
        GherkinRole::ScenarioOutline,
        GherkinRole::Scenario,
    ],
    &[
        GherkinRole::Examples,
        GherkinRole::Given,
        GherkinRole::When,
        GherkinRole::Then,
        GherkinRole::And,
        GherkinRole::But,
    ],
];

const COMMENT_MARKER: &str = "#";
const TAG_MARKER: &str = "@";
const PARAMETER_MARKER: &str = "<";

static PARAMETER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^<>\s][^<>]*)>").unwrap());

/// Supported catalog languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

static LANGUAGE_CODES: phf::Map<&'static str, Language> = phf_map! {
    "en" => Language::English,
    "english" => Language::English,
    "fr" => Language::French,
    "french" => Language::French,
    "français" => Language::French,
};

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// ISO 639-1 code, as written in a `# language:` header
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
        }
    }

    fn supported_codes() -> String {
        Self::ALL.iter().map(|l| l.code()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGE_CODES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| CatalogError::InvalidLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Literal keyword spellings per role for one language.
///
/// Never mutated after construction; obtain shared instances with [`resolve_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    language: Language,
    literals: [Vec<&'static str>; GherkinRole::ALL.len()],
}

impl KeywordCatalog {
    /// Build a catalog for `language`, merging in the language-independent markers.
    pub fn new(language: Language) -> Self {
        let table = match language {
            Language::English => english::KEYWORDS,
            Language::French => french::KEYWORDS,
        };

        let mut literals: [Vec<&'static str>; GherkinRole::ALL.len()] = Default::default();
        for (role, spellings) in table {
            literals[role.index()].extend_from_slice(spellings);
        }
        literals[GherkinRole::Comment.index()].push(COMMENT_MARKER);
        literals[GherkinRole::Tag.index()].push(TAG_MARKER);
        literals[GherkinRole::DelimitedParameter.index()].push(PARAMETER_MARKER);

        debug_assert!(literals.iter().all(|l| !l.is_empty()), "every role needs a literal");
        log::debug!("Built {} keyword catalog", language.name());

        Self { language, literals }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Literal spellings recognized for `role`, in declaration order
    pub fn literals(&self, role: GherkinRole) -> &[&'static str] {
        &self.literals[role.index()]
    }

    /// All (role, literal) pairs that start a line, skipping the `*` wildcard and the
    /// inline parameter marker. A literal shared by several roles is reported once.
    pub fn keywords(&self) -> impl Iterator<Item = (GherkinRole, &'static str)> + '_ {
        let mut seen = Vec::new();
        GherkinRole::ALL
            .into_iter()
            .filter(|role| role.kind() != RoleKind::Inline)
            .flat_map(move |role| self.literals(role).iter().map(move |lit| (role, *lit)))
            .filter(move |(_, lit)| {
                if *lit == "*" || seen.contains(lit) {
                    return false;
                }
                seen.push(*lit);
                true
            })
    }

    /// Classify a normalized line by its leading keyword.
    ///
    /// Tiers are tried in priority order (markers, feature, scenario-level, step-level). Inside
    /// a tier the longest matching literal wins, so `Scenario Outline:` is never mistaken for
    /// `Scenario:`.
    pub fn classify(&self, line: &str) -> Option<GherkinRole> {
        let line = line.trim_start();
        if line.is_empty() {
            return None;
        }

        for tier in CLASSIFICATION_TIERS {
            let mut best: Option<(GherkinRole, usize)> = None;
            for &role in *tier {
                for literal in self.literals(role) {
                    if keyword_matches(role.kind(), line, literal)
                        && best.is_none_or(|(_, len)| literal.len() > len)
                    {
                        best = Some((role, literal.len()));
                    }
                }
            }
            if let Some((role, _)) = best {
                return Some(role);
            }
        }

        None
    }

    /// Names of the `<parameter>` placeholders appearing in `line`.
    pub fn parameters<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        PARAMETER_RE
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }
}

fn keyword_matches(kind: RoleKind, line: &str, literal: &str) -> bool {
    let Some(rest) = line.strip_prefix(literal) else {
        return false;
    };
    match kind {
        RoleKind::Block => rest.starts_with(':'),
        RoleKind::Step => literal.ends_with('\'') || rest.is_empty() || rest.starts_with(char::is_whitespace),
        RoleKind::Marker => true,
        RoleKind::Inline => false,
    }
}

static ENGLISH: LazyLock<KeywordCatalog> = LazyLock::new(|| KeywordCatalog::new(Language::English));
static FRENCH: LazyLock<KeywordCatalog> = LazyLock::new(|| KeywordCatalog::new(Language::French));

/// Shared catalog for `language`, built on first use.
pub fn resolve_catalog(language: Language) -> &'static KeywordCatalog {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
    }
}

/// Shared catalog for a language code such as `"en"` or `"fr"`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidLanguage`] for codes outside the supported set.
pub fn resolve_catalog_code(code: &str) -> Result<&'static KeywordCatalog, CatalogError> {
    code.parse::<Language>().map(resolve_catalog)
}
