/// Languages the snippet selector knows about, in display order.
pub const SUPPORTED_LANGS: [&str; 4] = ["python", "javascript", "cpp", "java"];

/// Language assumed when a request omits one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// A language with its own snippet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
    Cpp,
    Java,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// Carries the rejected identifier as submitted.
    #[error("Unsupported language")]
    Unsupported(String),
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Cpp,
        Language::Java,
    ];

    /// Parse a wire identifier, ignoring case.
    pub fn parse(value: &str) -> Result<Self, LanguageError> {
        match value.to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "cpp" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            _ => Err(LanguageError::Unsupported(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

/// Normalize the `language` field of an incoming request.
///
/// A missing value falls back to [`DEFAULT_LANGUAGE`]; anything present is
/// lowercased but otherwise passed through, supported or not.
pub fn normalize_language(language: Option<&str>) -> String {
    language.unwrap_or(DEFAULT_LANGUAGE).to_lowercase()
}
