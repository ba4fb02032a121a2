use crate::demo::{run_chat, run_demo, run_score, ChatArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shamba_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ShambaScore",
    about = "Run the ShambaScore credit scoring service and demos from the command line",
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
    /// Score a farmer profile or a CSV dataset and print the result
    Score(ScoreArgs),
    /// Send one utterance to the advisory assistant and print the reply
    Chat(ChatArgs),
    /// Run an end-to-end CLI demo covering scoring and the assistant
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Chat(args) => run_chat(args),
        Command::Demo(args) => run_demo(args),
    }
}
