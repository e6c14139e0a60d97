use anyhow::Result;
use clap::Parser;
use sleepdash::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            path,
            format,
            output,
            disorders,
            config,
        } => sleepdash::commands::report::handle_report(
            sleepdash::commands::report::ReportConfig {
                path,
                format,
                output,
                disorders,
                config,
            },
        ),
        Commands::Dash {
            path,
            disorders,
            config,
        } => sleepdash::commands::dash::handle_dash(sleepdash::commands::dash::DashConfig {
            path,
            disorders,
            config,
        }),
        Commands::Init { force } => sleepdash::commands::init::init_config(force),
    }
}
