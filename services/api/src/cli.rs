use crate::demo::{run_demo, run_profiles, run_validate, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gazette_validation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Gazette Document Validation",
    about = "Score supporting documents for gazette applications and serve the validation API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a local text file against a document type's check profile
    Validate(ValidateArgs),
    /// List the check profile registered for every document type
    Profiles,
    /// Run the built-in sample documents through the validator
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
        Command::Profiles => run_profiles(),
        Command::Demo => run_demo(),
    }
}
