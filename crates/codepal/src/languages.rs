use crate::prelude::{println, *};
use codepal_core::SUPPORTED_LANGS;

#[derive(Debug, clap::Args)]
pub struct LanguagesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: LanguagesOptions, _global: crate::Global) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(&SUPPORTED_LANGS)?);
    } else {
        for lang in SUPPORTED_LANGS {
            println!("{lang}");
        }
    }

    Ok(())
}
