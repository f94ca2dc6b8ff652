use crate::prelude::*;
use clap::Parser;

mod debug;
mod error;
mod explain;
mod generate;
mod input;
mod languages;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "A tiny code assistant: canned snippets, line annotations and structural checks"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CODEPAL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the web UI and JSON API
    Serve(crate::server::ServeOptions),

    /// Print a canned snippet for a prompt
    Generate(crate::generate::GenerateOptions),

    /// Annotate source code line by line
    Explain(crate::explain::ExplainOptions),

    /// Run structural checks over source code
    Debug(crate::debug::DebugOptions),

    /// List the languages snippets exist for
    Languages(crate::languages::LanguagesOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::Explain(options) => crate::explain::run(options, app.global).await,
        SubCommands::Debug(options) => crate::debug::run(options, app.global).await,
        SubCommands::Languages(options) => crate::languages::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
