use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::deploy::identity::Locality;
use crate::deploy::target::TargetHost;

/// The only file name the consuming reporting module loads.
pub const REQUIRED_FILE_NAME: &str = "PowerStruxWAConfig.txt";

/// Install directory used when the target resolves to this machine.
pub const LOCAL_INSTALL_DIR: &str = r"C:\Program Files\WindowsPowerShell\Modules\ReportHTML";

/// Same directory as [`LOCAL_INSTALL_DIR`], relative to the root of the system volume.
pub const REMOTE_INSTALL_SUFFIX: &str = r"Program Files\WindowsPowerShell\Modules\ReportHTML";

/// Default administrative share exposing the remote system volume.
pub const ADMIN_SHARE: &str = "c$";

/// SMB port that the administrative share is served on.
pub const REMOTE_PORT: u16 = 445;

pub const LOOPBACK_ALIAS: &str = "localhost";

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS);

/// Terminal behaviour flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses banner, headers and progress output.
    ///
    /// The final status line is always printed.
    pub quiet: u8,
    pub verbose: u8,
    pub no_banner: bool,
}

/// Deployment literals and the two values the command line may override.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub required_file_name: String,
    pub local_install_dir: PathBuf,
    pub remote_install_suffix: String,
    pub admin_share: String,
    pub remote_port: u16,
    pub loopback_alias: String,
    pub probe_timeout: Duration,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            required_file_name: REQUIRED_FILE_NAME.to_string(),
            local_install_dir: PathBuf::from(LOCAL_INSTALL_DIR),
            remote_install_suffix: REMOTE_INSTALL_SUFFIX.to_string(),
            admin_share: ADMIN_SHARE.to_string(),
            remote_port: REMOTE_PORT,
            loopback_alias: LOOPBACK_ALIAS.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl DeployConfig {
    pub fn with_local_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_install_dir = dir.into();
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// `\\<host>\c$\Program Files\WindowsPowerShell\Modules\ReportHTML`
    pub fn remote_install_dir(&self, host: &TargetHost) -> PathBuf {
        PathBuf::from(format!(
            r"\\{}\{}\{}",
            host.as_str(),
            self.admin_share,
            self.remote_install_suffix
        ))
    }

    pub fn install_dir(&self, locality: Locality, host: &TargetHost) -> PathBuf {
        match locality {
            Locality::Local => self.local_install_dir.clone(),
            Locality::Remote => self.remote_install_dir(host),
        }
    }

    pub fn destination_file(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(&self.required_file_name)
    }

    /// Compares the final path component against the required name.
    ///
    /// Windows filesystems are case-insensitive, so the comparison follows suit there.
    pub fn is_required_file_name(&self, source: &Path) -> bool {
        let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if cfg!(windows) {
            name.eq_ignore_ascii_case(&self.required_file_name)
        } else {
            name == self.required_file_name
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
