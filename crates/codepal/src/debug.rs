use crate::prelude::{eprintln, println, *};
use codepal_core::debug::{debug_code, DebugReport};
use codepal_core::normalize_language;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct DebugOptions {
    /// File to check; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language of the code; `python` gets a real parse
    #[arg(short, long, default_value = "python")]
    pub language: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: DebugOptions, global: crate::Global) -> Result<()> {
    let code = crate::input::read_source(options.file.as_deref()).await?;
    let language = normalize_language(Some(options.language.as_str()));

    if global.verbose {
        eprintln!("Checking {} bytes of {}", code.len(), language);
        eprintln!();
    }

    let report = debug_code(&code, &language);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output_formatted(&report);
    }

    Ok(())
}

fn output_formatted(report: &DebugReport) {
    if report.issues.is_empty() {
        println!("{}", "No obvious issues found.".green());
    } else {
        for issue in &report.issues {
            println!("{} {}", "•".red(), issue);
        }
    }

    println!();
    println!("{} {}", "Suggestion:".bold(), report.suggestion);
}
