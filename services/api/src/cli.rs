use crate::demo::{run_demo, run_filter, run_quiz, DemoArgs, FilterArgs, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use money_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Money Match",
    about = "Serve and exercise the government subsidy matching engine from the command line",
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
    /// Filter the subsidy catalog by home-page facet selections
    Filter(FilterArgs),
    /// Rank the subsidy catalog against a full set of quiz answers
    Quiz(QuizArgs),
    /// Walk a canned visitor through the filters and the quiz
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
        Command::Filter(args) => run_filter(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Demo(args) => run_demo(args),
    }
}
