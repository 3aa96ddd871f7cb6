pub mod deploy;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use wadeploy_common::config::Config;

use deploy::DeployArgs;

#[derive(Parser)]
#[command(name = "wadeploy")]
#[command(version, about = "Deploys PowerStruxWAConfig.txt to a local or remote ReportHTML module.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; the final status line is always printed
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Skip the version banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the identities and paths this machine resolves to
    #[command(alias = "i")]
    Info,
    /// Copy the configuration file to a target host
    #[command(alias = "d")]
    Deploy(DeployArgs),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_banner: self.no_banner,
        }
    }
}
