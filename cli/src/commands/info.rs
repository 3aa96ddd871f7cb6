use colored::*;

use crate::terminal::{
    colors,
    print::{self, GLOBAL_KEY_WIDTH},
};
use wadeploy_common::config::{Config, DeployConfig};
use wadeploy_common::deploy::identity::LocalIdentitySet;
use wadeploy_common::ports::EnvironmentProbe;
use wadeploy_core::system::SystemProbe;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    GLOBAL_KEY_WIDTH.set(14);

    let probe = SystemProbe::default();
    let deploy_cfg = DeployConfig::default();

    print_local_system(&probe);
    print_identities(&probe.local_identities(), cfg);
    print_install_paths(&deploy_cfg, cfg);

    print::end_of_program();
    Ok(())
}

fn print_local_system(probe: &SystemProbe) {
    let hostname: String = SystemProbe::hostname().unwrap_or_else(|| String::from("unknown"));
    print::aligned_line("Hostname", hostname);

    let elevated: ColoredString = if probe.is_elevated() {
        "yes".green().bold()
    } else {
        "no (deploy will halt at the privilege gate)".yellow()
    };
    print::aligned_line("Elevated", elevated);
}

fn print_identities(identities: &LocalIdentitySet, cfg: &Config) {
    print::header("local identities", cfg.quiet);
    let details: Vec<(String, ColoredString)> = identities
        .iter()
        .enumerate()
        .map(|(idx, identity)| (idx.to_string(), identity.color(colors::PRIMARY)))
        .collect();
    print::as_tree_one_level(details);
}

fn print_install_paths(deploy_cfg: &DeployConfig, cfg: &Config) {
    print::header("install paths", cfg.quiet);
    let local: String = deploy_cfg.local_install_dir.display().to_string();
    let remote: String = format!(
        r"\\<host>\{}\{}",
        deploy_cfg.admin_share, deploy_cfg.remote_install_suffix
    );
    print::aligned_line("Local", local);
    print::aligned_line("Remote", remote);
    print::aligned_line("Remote port", deploy_cfg.remote_port.to_string());
    print::aligned_line("File name", deploy_cfg.required_file_name.as_str());
}
