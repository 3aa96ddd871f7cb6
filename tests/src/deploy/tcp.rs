//! The real TCP probe wired into the pipeline, against listeners on loopback.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use wadeploy_common::config::DeployConfig;
use wadeploy_common::deploy::DeploymentRequest;
use wadeploy_common::deploy::gate::{FailureKind, GateId, GateOutcome};
use wadeploy_common::deploy::identity::LocalIdentitySet;
use wadeploy_core::network::tcp::TcpProbe;
use wadeploy_core::testing::{FakeEnvironment, FakeFileSystem};
use wadeploy_core::workflow::DeploymentEngine;

/// An environment where `127.0.0.1` is not one of our identities, so it classifies as remote.
fn loopback_as_remote() -> Arc<FakeEnvironment> {
    let identities = LocalIdentitySet::from_parts(Vec::new(), Some("WORKSTATION7"), "localhost");
    Arc::new(FakeEnvironment::with_identities(identities, true))
}

fn engine_on_port(port: u16) -> DeploymentEngine {
    let mut cfg = DeployConfig::default().with_probe_timeout(Duration::from_secs(2));
    cfg.remote_port = port;
    DeploymentEngine::new(
        cfg,
        loopback_as_remote(),
        Arc::new(TcpProbe),
        Arc::new(FakeFileSystem::new()),
    )
}

fn request() -> DeploymentRequest {
    DeploymentRequest::new("127.0.0.1".parse().unwrap(), "/tmp/PowerStruxWAConfig.txt")
}

#[tokio::test]
async fn listening_port_passes_connectivity() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let report = engine_on_port(port).run(&request()).await;

    assert_eq!(
        report.outcome(GateId::RemoteConnectivity),
        Some(&GateOutcome::Passed)
    );
    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::InstallPathInaccessible)
    );
}

#[tokio::test]
async fn closed_port_fails_connectivity() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let report = engine_on_port(port).run(&request()).await;

    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::RemoteUnreachable)
    );
    assert_eq!(report.install_dir, None);
}
