use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use colored::*;

use crate::exit_codes;
use crate::terminal::{colors, print};
use wadeploy_common::config::{Config, DEFAULT_PROBE_TIMEOUT_MS, DeployConfig};
use wadeploy_common::deploy::DeploymentRequest;
use wadeploy_common::deploy::gate::{GateId, GateOutcome};
use wadeploy_common::deploy::report::{DeploymentReport, Verdict};
use wadeploy_common::deploy::target::TargetHost;
use wadeploy_core::workflow::DeploymentEngine;

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path to PowerStruxWAConfig.txt
    pub source: PathBuf,

    /// Host to deploy to: localhost, this machine's name or address, or a remote host
    #[arg(short, long, default_value_t)]
    pub target: TargetHost,

    /// TCP 445 probe timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT_MS)]
    pub timeout: u64,

    /// Use this directory instead of the standard local ReportHTML module directory
    #[arg(long)]
    pub local_install_dir: Option<PathBuf>,
}

impl DeployArgs {
    pub fn deploy_config(&self) -> anyhow::Result<DeployConfig> {
        if self.timeout == 0 {
            anyhow::bail!("--timeout must be greater than zero");
        }

        let mut deploy_cfg =
            DeployConfig::default().with_probe_timeout(Duration::from_millis(self.timeout));
        if let Some(dir) = &self.local_install_dir {
            deploy_cfg = deploy_cfg.with_local_install_dir(dir);
        }
        Ok(deploy_cfg)
    }
}

pub async fn deploy(args: DeployArgs, cfg: &Config) -> anyhow::Result<u8> {
    let deploy_cfg: DeployConfig = args.deploy_config()?;
    let request = DeploymentRequest::new(args.target, args.source);
    let engine: DeploymentEngine = wadeploy_core::system_engine(deploy_cfg);

    let start_time: Instant = Instant::now();
    let report: DeploymentReport = engine.run(&request).await;

    deployment_ends(&report, start_time.elapsed(), cfg);
    println!("{}", status_line(&report));

    Ok(exit_codes::for_report(&report))
}

fn deployment_ends(report: &DeploymentReport, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("gate summary", cfg.quiet);
    print::as_tree_one_level(gate_details(report));

    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = match &report.verdict {
        Verdict::Deployed { .. } => {
            format!("Deployment to {} confirmed in {elapsed}", report.target.as_str().bold().green())
        }
        Verdict::Halted { failure } => {
            print::print_status(format!("{}", failure.detail.color(colors::TEXT_DEFAULT)));
            print::print_status(format!("Next step: {}", failure.kind.remedy()));
            format!(
                "Deployment halted at gate {} after {elapsed}",
                failure.gate().number().to_string().bold().red()
            )
        }
    };

    print::fat_separator();
    print::centerln(&output);
}

fn gate_details(report: &DeploymentReport) -> Vec<(String, ColoredString)> {
    GateId::ORDER
        .iter()
        .map(|gate| {
            let value: ColoredString = match report.outcome(*gate) {
                Some(GateOutcome::Passed) => "passed".green(),
                Some(GateOutcome::Skipped) => "skipped".yellow(),
                Some(GateOutcome::Failed(failure)) => failure.kind.to_string().red().bold(),
                None => "not evaluated".dimmed(),
            };
            (format!("{} {gate}", gate.number()), value)
        })
        .collect()
}

/// One line on stdout that scripts driving several hosts can split into
/// `key=value` pairs. Free-form values are double-quoted.
pub fn status_line(report: &DeploymentReport) -> String {
    let target: String = single_line(report.target.as_str());
    match &report.verdict {
        Verdict::Deployed { destination } => format!(
            "status=deployed target=\"{target}\" destination=\"{}\"",
            single_line(&destination.display().to_string())
        ),
        Verdict::Halted { failure } => format!(
            "status=halted target=\"{target}\" gate={} kind={} code={} reason=\"{}\"",
            failure.gate(),
            failure.kind,
            exit_codes::for_failure(failure.kind),
            single_line(&failure.detail)
        ),
    }
}

fn single_line(detail: &str) -> String {
    detail
        .replace(['\r', '\n'], " ")
        .replace('"', "'")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
