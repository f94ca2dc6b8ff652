use crate::prelude::{eprintln, println, *};
use codepal_core::snippets::{generate_for, select_topic};
use codepal_core::Language;

/// CLI mirror of [`Language`].
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LanguageArg {
    Python,
    Javascript,
    Cpp,
    Java,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Python => Language::Python,
            LanguageArg::Javascript => Language::JavaScript,
            LanguageArg::Cpp => Language::Cpp,
            LanguageArg::Java => Language::Java,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// Free-text description of the program, e.g. "a fizzbuzz loop"
    #[arg(value_name = "PROMPT", default_value = "")]
    pub prompt: String,

    /// Target language
    #[arg(short, long, value_enum, default_value = "python")]
    pub language: LanguageArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let language = Language::from(options.language);

    if global.verbose {
        eprintln!("Language: {}", language);
        eprintln!("Topic: {}", select_topic(&options.prompt, language));
        eprintln!();
    }

    let code = generate_for(&options.prompt, language);

    if options.json {
        let value = serde_json::json!({ "code": code });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        anstream::print!("{code}");
    }

    Ok(())
}
