use serde::Serialize;

/// Fixed summary sentence that heads every explanation.
pub const SUMMARY: &str = "This code was analyzed line-by-line. Comments, definitions, assignments, and calls were highlighted.";

const COMMENT_MARKERS: [&str; 2] = ["#", "//"];
const DEFINITION_KEYWORDS: [&str; 3] = ["def ", "function ", "class "];

/// Heuristic category of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Comment,
    Definition,
    Assignment,
    Call,
}

impl LineKind {
    /// Suffix appended to the annotated line, including its leading space.
    pub fn tag(&self) -> &'static str {
        match self {
            LineKind::Comment => " (comment)",
            LineKind::Definition => " (defines a function or class)",
            LineKind::Assignment => " (assigns a value)",
            LineKind::Call => " (likely a statement or function call)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    /// 1-based line number.
    pub number: usize,
    /// The line exactly as submitted.
    pub text: String,
    pub kind: Option<LineKind>,
}

impl AnnotatedLine {
    pub fn render(&self) -> String {
        let tag = self.kind.map(|k| k.tag()).unwrap_or("");
        format!("{:>3}: {}{}", self.number, self.text, tag)
    }
}

/// Classify a line; the first matching rule wins.
pub fn classify_line(line: &str) -> Option<LineKind> {
    let stripped = line.trim();

    if COMMENT_MARKERS.iter().any(|m| stripped.starts_with(m)) {
        return Some(LineKind::Comment);
    }
    if DEFINITION_KEYWORDS.iter().any(|k| stripped.contains(k)) {
        return Some(LineKind::Definition);
    }
    if stripped.contains('=')
        && !stripped.contains("==")
        && !stripped.starts_with("==")
        && !stripped.starts_with("!==")
    {
        return Some(LineKind::Assignment);
    }
    // The terminator is looked up on the raw line, the parentheses on the trimmed one.
    if stripped.contains('(') && stripped.contains(')') && line.contains(';') {
        return Some(LineKind::Call);
    }
    None
}

/// Split on every universal line boundary, dropping the terminators.
///
/// A trailing terminator does not produce an empty final line, and `\r\n`
/// counts as a single boundary.
pub fn split_lines(code: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = code.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(&code[start..idx]);
        let mut end = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                end = next_idx + 1;
            }
        }
        start = end;
    }

    if start < code.len() {
        lines.push(&code[start..]);
    }
    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

pub fn annotate_lines(code: &str) -> Vec<AnnotatedLine> {
    split_lines(code)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| AnnotatedLine {
            number: idx + 1,
            text: line.to_string(),
            kind: classify_line(line),
        })
        .collect()
}

/// Build the textual explanation report for `code`.
///
/// `language` is accepted for API symmetry; classification does not use it.
pub fn explain_code(code: &str, _language: &str) -> String {
    let annotated: Vec<String> = annotate_lines(code).iter().map(|l| l.render()).collect();
    format!("{}\n\n{}", SUMMARY, annotated.join("\n"))
}
