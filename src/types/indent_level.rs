use std::fmt;

/// Nesting depth of a formatted line.
///
/// Every recognized line sits at one of three structural depths; rows of an
/// aligned table sit one level below the keyword that introduced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndentLevel(u8);

impl IndentLevel {
    /// `Feature:` lines
    pub const TOP: IndentLevel = IndentLevel(0);
    /// `Background:`, `Rule:`, `Scenario:` and `Scenario Outline:` lines
    pub const SCENARIO: IndentLevel = IndentLevel(1);
    /// Steps and `Examples:` lines
    pub const STEP: IndentLevel = IndentLevel(2);
    /// Rows of an aligned table
    pub const TABLE: IndentLevel = IndentLevel(3);

    pub fn depth(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
