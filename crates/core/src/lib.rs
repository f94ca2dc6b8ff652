//! Core library for codepal
//!
//! This crate is the **Functional Core** of the codepal application, following
//! the Functional Core - Imperative Shell pattern.
//!
//! - **`codepal_core`** (this crate): pure string transformations, zero I/O
//! - **`codepal`**: CLI and HTTP server (the Imperative Shell)
//!
//! Every function here is a deterministic function of its arguments plus the
//! static language and snippet tables; there is no shared mutable state.
//!
//! # Module Organization
//!
//! - [`languages`]: the supported-language table and request normalization
//! - [`snippets`]: keyword-driven snippet selection ("generate")
//! - [`explain`]: line-by-line annotation ("explain")
//! - [`debug`]: parse and delimiter checks ("debug")
//! - [`page`]: the landing page markup
//!
//! # Example Usage
//!
//! ```rust
//! use codepal_core::{debug::debug_code, snippets::generate_code};
//!
//! let code = generate_code("build me a calculator", "python");
//! assert!(code.contains("def add(a, b)"));
//!
//! let report = debug_code("foo(bar", "javascript");
//! assert_eq!(report.issues.len(), 1);
//! ```

pub mod debug;
pub mod explain;
pub mod languages;
pub mod page;
pub mod snippets;

pub use languages::{normalize_language, Language, LanguageError, SUPPORTED_LANGS};
