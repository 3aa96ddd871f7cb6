use std::collections::BTreeSet;
use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};

/// Every address bound to any interface on this machine, loopback and down links included.
pub fn bound_addresses() -> BTreeSet<IpAddr> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    tracing::debug!("Identified {} network interface(s)", interfaces.len());
    collect_addresses(&interfaces)
}

fn collect_addresses(interfaces: &[NetworkInterface]) -> BTreeSet<IpAddr> {
    interfaces
        .iter()
        .flat_map(|iface| iface.ips.iter().map(|net| net.ip()))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
