//! # Local Identity
//!
//! The set of strings treated as "this machine" when classifying a target:
//! every address bound to a local interface, the machine's own name, and the
//! loopback alias. Membership is exact string equality. Nothing is resolved,
//! so an alias that is not literally present (a DNS name for a local
//! address, say) classifies as remote.

use std::collections::BTreeSet;
use std::fmt;
use std::net::IpAddr;

use crate::deploy::target::TargetHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locality {
    Local,
    Remote,
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locality::Local => f.write_str("local"),
            Locality::Remote => f.write_str("remote"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalIdentitySet {
    identities: BTreeSet<String>,
}

impl LocalIdentitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from its three sources. A missing hostname is tolerated.
    pub fn from_parts<I>(addrs: I, hostname: Option<&str>, loopback_alias: &str) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let mut set = Self::new();
        for addr in addrs {
            set.insert_addr(addr);
        }
        if let Some(name) = hostname {
            set.insert(name);
        }
        set.insert(loopback_alias);
        set
    }

    pub fn insert(&mut self, identity: impl Into<String>) {
        let identity: String = identity.into();
        if !identity.is_empty() {
            self.identities.insert(identity);
        }
    }

    pub fn insert_addr(&mut self, addr: IpAddr) {
        self.identities.insert(addr.to_string());
    }

    pub fn contains(&self, host: &TargetHost) -> bool {
        self.identities.contains(host.as_str())
    }

    pub fn classify(&self, host: &TargetHost) -> Locality {
        if self.contains(host) {
            Locality::Local
        } else {
            Locality::Remote
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
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
