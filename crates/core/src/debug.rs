//! Superficial structural checks.
//!
//! Python source goes through a real parse of the Python grammar. Every other
//! language only gets delimiter counting plus a best-effort semicolon hint.
//! Neither is a tokenizer: delimiters inside strings and comments count too.

use std::sync::LazyLock;

use regex::Regex;
use rustpython_parser::{parse, Mode};
use serde::{Deserialize, Serialize};

pub const PYTHON_OK_SUGGESTION: &str =
    "No syntax errors detected. Consider logic checks or unit tests.";
pub const PYTHON_ERROR_SUGGESTION: &str =
    "Check for missing colons, unmatched quotes/parentheses, or bad indentation.";
pub const UNBALANCED_SUGGESTION: &str =
    "Ensure all parentheses/braces/brackets are properly closed.";
pub const NO_ISSUES_SUGGESTION: &str =
    "No obvious structural issues found. If it fails, check your toolchain or run-time errors.";
pub const MISSING_SEMICOLONS_ISSUE: &str = "Missing semicolons may cause compile errors.";

static PRINTLN_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"System\.out\.println\(").expect("valid println regex"));

/// Outcome of a debug run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugReport {
    pub issues: Vec<String>,
    pub suggestion: String,
}

/// First syntax error reported by the Python parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub message: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, in characters.
    pub column: usize,
}

impl std::fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Python SyntaxError: {} at line {}, col {}",
            self.message, self.line, self.column
        )
    }
}

/// Signed open-minus-close counts for each delimiter pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterBalance {
    pub paren: i64,
    pub brace: i64,
    pub bracket: i64,
}

impl DelimiterBalance {
    pub fn count(code: &str) -> Self {
        let mut balance = Self::default();
        for ch in code.chars() {
            match ch {
                '(' => balance.paren += 1,
                ')' => balance.paren -= 1,
                '{' => balance.brace += 1,
                '}' => balance.brace -= 1,
                '[' => balance.bracket += 1,
                ']' => balance.bracket -= 1,
                _ => {}
            }
        }
        balance
    }

    pub fn is_balanced(&self) -> bool {
        self.paren == 0 && self.brace == 0 && self.bracket == 0
    }

    pub fn describe(&self) -> String {
        format!(
            "Unbalanced delimiters: ()={}, {{}}={}, []={}",
            self.paren, self.brace, self.bracket
        )
    }
}

/// Parse `code` with the Python grammar and report the first error, if any.
pub fn check_python_syntax(code: &str) -> Result<(), SyntaxIssue> {
    match parse(code, Mode::Module, "<input>") {
        Ok(_) => Ok(()),
        Err(err) => {
            let (line, column) = line_and_column(code, u32::from(err.offset) as usize);
            Err(SyntaxIssue {
                message: err.error.to_string(),
                line,
                column,
            })
        }
    }
}

/// 1-based line and character column of a byte offset.
fn line_and_column(code: &str, offset: usize) -> (usize, usize) {
    let before = code.get(..offset.min(code.len())).unwrap_or(code);
    let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

fn wants_semicolon_hint(language: &str) -> bool {
    // javascript is excluded.
    matches!(language, "java" | "cpp")
}

/// Run the structural checks for `language` over `code`.
///
/// `language` must already be lowercase; unknown values get the generic checks.
pub fn debug_code(code: &str, language: &str) -> DebugReport {
    if language == "python" {
        return match check_python_syntax(code) {
            Ok(()) => DebugReport {
                issues: Vec::new(),
                suggestion: PYTHON_OK_SUGGESTION.to_string(),
            },
            Err(issue) => DebugReport {
                issues: vec![issue.to_string()],
                suggestion: PYTHON_ERROR_SUGGESTION.to_string(),
            },
        };
    }

    let mut report = DebugReport::default();

    let balance = DelimiterBalance::count(code);
    if !balance.is_balanced() {
        report.issues.push(balance.describe());
        report.suggestion = UNBALANCED_SUGGESTION.to_string();
    }

    if wants_semicolon_hint(language) && PRINTLN_CALL.is_match(code) && !code.contains(';') {
        report.issues.push(MISSING_SEMICOLONS_ISSUE.to_string());
    }

    if report.issues.is_empty() {
        report.suggestion = NO_ISSUES_SUGGESTION.to_string();
    }

    report
}
