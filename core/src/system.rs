use is_root::is_root;
use sysinfo::{System, SystemExt};

use wadeploy_common::config::LOOPBACK_ALIAS;
use wadeploy_common::deploy::identity::LocalIdentitySet;
use wadeploy_common::network::interface;
use wadeploy_common::ports::EnvironmentProbe;

/// Reads identities and privilege straight from the operating system.
pub struct SystemProbe {
    loopback_alias: String,
}

impl SystemProbe {
    pub fn new(loopback_alias: impl Into<String>) -> Self {
        Self {
            loopback_alias: loopback_alias.into(),
        }
    }

    pub fn hostname() -> Option<String> {
        let hostname: Option<String> = System::new().host_name();
        if hostname.is_none() {
            tracing::warn!("Could not determine the local hostname");
        }
        hostname
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new(LOOPBACK_ALIAS)
    }
}

impl EnvironmentProbe for SystemProbe {
    fn local_identities(&self) -> LocalIdentitySet {
        let hostname: Option<String> = Self::hostname();
        LocalIdentitySet::from_parts(
            interface::bound_addresses(),
            hostname.as_deref(),
            &self.loopback_alias,
        )
    }

    /// Root on Unix, an elevated token on Windows.
    fn is_elevated(&self) -> bool {
        is_root()
    }
}
