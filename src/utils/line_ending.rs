//! Line-ending handling. Formatting works on bare lines; the break that ended each
//! line is restored when the formatted lines are joined back together.

/// Byte-order mark some editors write at the start of UTF-8 files
pub const BOM: char = '\u{feff}';

/// A document split into lines, keeping the break that terminated each one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLines<'a> {
    /// Leading byte-order mark, removed from the first line
    pub bom: bool,
    pub lines: Vec<&'a str>,
    /// `breaks[i]` terminates `lines[i]`; the last line has none
    pub breaks: Vec<&'static str>,
}

/// Split `content` on `\n`, recording `\r\n` or `\n` per line.
pub fn split_lines(content: &str) -> SplitLines<'_> {
    let (bom, content) = match content.strip_prefix(BOM) {
        Some(rest) => (true, rest),
        None => (false, content),
    };

    let mut lines = Vec::new();
    let mut breaks = Vec::new();
    let mut pieces = content.split('\n').peekable();
    while let Some(piece) = pieces.next() {
        if pieces.peek().is_none() {
            lines.push(piece);
            break;
        }
        match piece.strip_suffix('\r') {
            Some(line) => {
                lines.push(line);
                breaks.push("\r\n");
            }
            None => {
                lines.push(piece);
                breaks.push("\n");
            }
        }
    }

    SplitLines { bom, lines, breaks }
}

impl SplitLines<'_> {
    /// Join replacement lines using the recorded breaks and byte-order mark.
    pub fn rejoin<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::new();
        if self.bom {
            out.push(BOM);
        }
        for (i, line) in lines.iter().enumerate() {
            out.push_str(line.as_ref());
            if let Some(eol) = self.breaks.get(i) {
                out.push_str(eol);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_records_each_break() {
        let split = split_lines("a\r\nb\nc");
        assert_eq!(split.lines, vec!["a", "b", "c"]);
        assert_eq!(split.breaks, vec!["\r\n", "\n"]);
        assert!(!split.bom);
    }

    #[test]
    fn test_trailing_newline_leaves_empty_last_line() {
        let split = split_lines("a\n");
        assert_eq!(split.lines, vec!["a", ""]);
        assert_eq!(split.rejoin(&split.lines), "a\n");

        let split = split_lines("");
        assert_eq!(split.lines, vec![""]);
        assert_eq!(split.rejoin(&split.lines), "");
    }

    #[test]
    fn test_rejoin_keeps_mixed_breaks() {
        let content = "Feature: f\r\nScenario: s\nGiven g\r\n";
        let split = split_lines(content);
        assert_eq!(split.rejoin(&split.lines), content);
        assert_eq!(split.rejoin(&["x", "y", "z", ""]), "x\r\ny\nz\r\n");
    }

    #[test]
    fn test_bom_is_stripped_and_restored() {
        let split = split_lines("\u{feff}# language: fr\nx");
        assert!(split.bom);
        assert_eq!(split.lines, vec!["# language: fr", "x"]);
        assert_eq!(split.rejoin(&split.lines), "\u{feff}# language: fr\nx");
    }
}
