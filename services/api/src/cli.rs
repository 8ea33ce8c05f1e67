use crate::demo::{run_browse, run_demo, BrowseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use listing_map::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Map",
    about = "Browse, bookmark, and publish real-estate listings from the command line",
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
    /// Inspect the listing catalog
    Listings {
        #[command(subcommand)]
        command: ListingsCommand,
    },
    /// Walk through publishing, bookmarking, and deleting a listing
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ListingsCommand {
    /// Print catalog listings matching the given filters
    Browse(BrowseArgs),
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
        Command::Listings {
            command: ListingsCommand::Browse(args),
        } => run_browse(args),
        Command::Demo(args) => run_demo(args),
    }
}
