use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{Instrument, info_span};

use wadeploy_common::ports::ConnectivityProbe;

/// Full TCP handshake against `host:port`. Refused, unresolvable and timed out all count as unreachable.
pub struct TcpProbe;

#[async_trait::async_trait]
impl ConnectivityProbe for TcpProbe {
    async fn probe(&self, host: &str, port: u16, probe_timeout: Duration) -> bool {
        let span = info_span!("tcp_probe", indicatif.pb_show = true, host, port);
        handshake_probe(host, port, probe_timeout).instrument(span).await
    }
}

pub async fn handshake_probe(host: &str, port: u16, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(err)) => {
            tracing::debug!("connect to {host}:{port} failed: {err}");
            false
        }
        Err(_elapsed) => {
            tracing::debug!("connect to {host}:{port} timed out after {probe_timeout:?}");
            false
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
