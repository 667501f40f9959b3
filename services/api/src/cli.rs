use crate::demo::{run_demo, run_roi_estimate, DemoArgs, RoiEstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use partner_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Program Matchmaker",
    about = "Demonstrate and run the partner program matchmaker from the command line",
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
    /// Project partnership economics for stakeholder demos
    Roi {
        #[command(subcommand)]
        command: RoiCommand,
    },
    /// Run an end-to-end CLI demo covering the assessment, matching, and ROI surfaces
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RoiCommand {
    /// Estimate revenue, break-even, and twelve-month return for a partnership
    Estimate(RoiEstimateArgs),
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
        Command::Roi {
            command: RoiCommand::Estimate(args),
        } => run_roi_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}
