use crate::prelude::{eprintln, println, *};
use codepal_core::explain::{annotate_lines, explain_code, AnnotatedLine, LineKind};
use codepal_core::normalize_language;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct ExplainOptions {
    /// File to explain; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language of the code (informational only)
    #[arg(short, long, default_value = "python")]
    pub language: String,

    /// Render the annotations as a table
    #[arg(long, conflicts_with = "json")]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ExplainOptions, global: crate::Global) -> Result<()> {
    let code = crate::input::read_source(options.file.as_deref()).await?;
    let language = normalize_language(Some(options.language.as_str()));

    if global.verbose {
        eprintln!("Explaining {} bytes of {}", code.len(), language);
        eprintln!();
    }

    if options.json {
        let value = serde_json::json!({
            "explanation": explain_code(&code, &language),
            "lines": annotate_lines(&code),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if options.table {
        output_table(&annotate_lines(&code));
    } else {
        println!("{}", explain_code(&code, &language));
    }

    Ok(())
}

fn kind_label(kind: Option<LineKind>) -> String {
    match kind {
        Some(LineKind::Comment) => "comment".dimmed().to_string(),
        Some(LineKind::Definition) => "definition".green().to_string(),
        Some(LineKind::Assignment) => "assignment".cyan().to_string(),
        Some(LineKind::Call) => "call".yellow().to_string(),
        None => String::new(),
    }
}

fn output_table(lines: &[AnnotatedLine]) {
    let mut table = new_table();
    table.add_row(prettytable::row!["#".bold(), "Kind".bold(), "Line".bold()]);

    for line in lines {
        table.add_row(prettytable::row![
            line.number,
            kind_label(line.kind),
            line.text
        ]);
    }

    table.printstd();
}
