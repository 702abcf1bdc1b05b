use crate::demo::{run_demo, run_route, run_search, DemoArgs, RouteArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dento_care::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dento Care Assistant",
    about = "Run the Dento patient assistant service or try its routing from the command line",
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
    /// Route a single patient message and print the suggested reply
    Route(RouteArgs),
    /// Search the doctor, clinic and article directory
    Search(SearchArgs),
    /// Play a scripted conversation with every assistant
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
        Command::Route(args) => run_route(args),
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
