use crate::demo::{run_demo, run_simulate, DemoArgs, SimulateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use founder_sim::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Founder Decision Simulator",
    about = "Simulate founder decisions and serve the simulator over HTTP",
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
    /// Simulate one decision against the sandbox company
    Simulate(SimulateArgs),
    /// Project a sequence of decisions across several quarters
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
        Command::Simulate(args) => run_simulate(args),
        Command::Demo(args) => run_demo(args),
    }
}
