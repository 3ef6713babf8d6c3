//!
//! The Gherkin line formatter: re-indents every line according to its grammar role and
//! re-flows pipe-delimited tables into aligned columns.
//!
//! Formatting is a single forward pass. The only carried state is the running indent level
//! (inherited by comments and tags) and the table currently being collected.

pub mod table;
pub mod whitespace;

pub use table::TableBlock;
pub use whitespace::{normalize_line, remove_multiple_spaces};

use crate::catalog::{GherkinRole, KeywordCatalog};
use crate::types::{IndentLevel, IndentSize};
use crate::utils::line_ending::split_lines;

/// Character(s) emitted per indentation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces(IndentSize),
}

impl IndentStyle {
    pub fn indent(self, level: IndentLevel) -> String {
        match self {
            IndentStyle::Tab => "\t".repeat(level.depth()),
            IndentStyle::Spaces(size) => " ".repeat(level.depth() * size.as_usize()),
        }
    }
}

/// Knobs that change the formatter's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub indent: IndentStyle,
    /// Also align data tables that directly follow a step
    pub data_tables: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableMode {
    Off,
    /// A table may start on the next pipe line
    Armed,
    Collecting,
}

/// Formats Gherkin lines against one keyword catalog.
#[derive(Debug, Clone)]
pub struct LineFormatter<'a> {
    catalog: &'a KeywordCatalog,
    options: FormatOptions,
}

impl<'a> LineFormatter<'a> {
    pub fn new(catalog: &'a KeywordCatalog, options: FormatOptions) -> Self {
        Self { catalog, options }
    }

    pub fn format<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut pass = FormatPass::new(self, lines.len());
        for line in lines {
            pass.feed(line.as_ref());
        }
        pass.finish()
    }
}

struct FormatPass<'f, 'a> {
    formatter: &'f LineFormatter<'a>,
    output: Vec<String>,
    current_level: IndentLevel,
    mode: TableMode,
    table: TableBlock,
}

impl<'f, 'a> FormatPass<'f, 'a> {
    fn new(formatter: &'f LineFormatter<'a>, capacity: usize) -> Self {
        Self {
            formatter,
            output: Vec::with_capacity(capacity),
            current_level: IndentLevel::TOP,
            mode: TableMode::Off,
            table: TableBlock::new(),
        }
    }

    fn feed(&mut self, raw: &str) {
        let line = normalize_line(raw);

        if self.mode == TableMode::Collecting {
            if line.contains('|') {
                self.table.push_row(&line);
                return;
            }
            self.flush_table();
        }

        if self.mode == TableMode::Armed && line.contains('|') {
            self.mode = TableMode::Collecting;
            self.table.push_row(&line);
            return;
        }

        if line.is_empty() {
            self.output.push(String::new());
            return;
        }

        match self.formatter.catalog.classify(&line) {
            Some(GherkinRole::Comment) => {
                self.emit(self.current_level, &line);
            }
            Some(GherkinRole::Tag) => {
                self.emit(self.current_level, &line);
                self.mode = TableMode::Off;
            }
            Some(role) => {
                let level = role.indent_level().unwrap_or(IndentLevel::TOP);
                self.emit(level, &line);
                self.current_level = level;
                self.mode = if self.opens_table(role) {
                    TableMode::Armed
                } else {
                    TableMode::Off
                };
            }
            None => {
                self.emit(IndentLevel::TOP, &line);
                self.mode = TableMode::Off;
            }
        }
    }

    fn opens_table(&self, role: GherkinRole) -> bool {
        role == GherkinRole::Examples || (self.formatter.options.data_tables && role.is_step())
    }

    fn emit(&mut self, level: IndentLevel, line: &str) {
        let indent = self.formatter.options.indent.indent(level);
        self.output.push(format!("{indent}{line}"));
    }

    fn flush_table(&mut self) {
        let indent = self.formatter.options.indent.indent(IndentLevel::TABLE);
        log::trace!("Aligning table of {} rows", self.table.len());
        let rows = self.table.drain(&indent);
        self.output.extend(rows);
        self.mode = TableMode::Off;
    }

    fn finish(mut self) -> Vec<String> {
        if self.mode == TableMode::Collecting {
            self.flush_table();
        }
        self.output
    }
}

/// Format `lines` with the default options (tab indentation, Examples tables only).
pub fn format_lines<S: AsRef<str>>(lines: &[S], catalog: &KeywordCatalog) -> Vec<String> {
    LineFormatter::new(catalog, FormatOptions::default()).format(lines)
}

/// Format a whole document. Each line keeps its own line break, and a leading byte-order
/// mark and trailing newline survive.
pub fn format_document(content: &str, catalog: &KeywordCatalog, options: FormatOptions) -> String {
    let split = split_lines(content);
    let formatted = LineFormatter::new(catalog, options).format(&split.lines);
    split.rejoin(&formatted)
}
