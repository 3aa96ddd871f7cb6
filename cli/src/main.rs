mod commands;
mod exit_codes;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, deploy, info};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let result: anyhow::Result<u8> = match commands.command {
        Commands::Info => {
            print::header("local system", cfg.quiet);
            info::info(&cfg).map(|()| exit_codes::OK)
        }
        Commands::Deploy(args) => {
            print::header("preparing deployment", cfg.quiet);
            deploy::deploy(args, &cfg).await
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(exit_codes::INTERNAL)
        }
    }
}
