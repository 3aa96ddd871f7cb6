//! End-to-end runs of the standard gate pipeline against a real temporary
//! filesystem. Environment and connectivity are faked; everything else is
//! the production adapter.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use wadeploy_common::config::DeployConfig;
use wadeploy_common::deploy::DeploymentRequest;
use wadeploy_common::deploy::gate::{FailureKind, GateId, GateOutcome};
use wadeploy_common::deploy::identity::Locality;
use wadeploy_common::deploy::report::{DeploymentReport, Verdict};
use wadeploy_common::ports::DeployFileSystem;
use wadeploy_core::fs::LocalFileSystem;
use wadeploy_core::testing::{FakeConnectivity, FakeEnvironment};
use wadeploy_core::workflow::DeploymentEngine;

const FILE_NAME: &str = "PowerStruxWAConfig.txt";

struct Fixture {
    _source_dir: TempDir,
    install_dir: TempDir,
    source: PathBuf,
}

impl Fixture {
    fn new(file_name: &str, contents: &str) -> Self {
        let source_dir = tempfile::tempdir().unwrap();
        let install_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join(file_name);
        std::fs::write(&source, contents).unwrap();
        Self {
            _source_dir: source_dir,
            install_dir,
            source,
        }
    }

    fn config(&self) -> DeployConfig {
        DeployConfig::default().with_local_install_dir(self.install_dir.path())
    }

    fn destination(&self) -> PathBuf {
        self.install_dir.path().join(FILE_NAME)
    }

    fn request(&self, target: &str) -> DeploymentRequest {
        DeploymentRequest::new(target.parse().unwrap(), &self.source)
    }

    fn install_dir_is_empty(&self) -> bool {
        std::fs::read_dir(self.install_dir.path()).unwrap().next().is_none()
    }
}

/// Deletes every file right after copying it, as a concurrent cleaner would.
struct VanishingFileSystem;

#[async_trait::async_trait]
impl DeployFileSystem for VanishingFileSystem {
    async fn is_accessible_dir(&self, path: &Path) -> bool {
        LocalFileSystem.is_accessible_dir(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        LocalFileSystem.exists(path).await
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let bytes = LocalFileSystem.copy_file(from, to).await?;
        tokio::fs::remove_file(to).await?;
        Ok(bytes)
    }
}

async fn run(
    fixture: &Fixture,
    target: &str,
    env: Arc<FakeEnvironment>,
    net: Arc<FakeConnectivity>,
    fs: Arc<dyn DeployFileSystem>,
) -> DeploymentReport {
    let engine = DeploymentEngine::new(fixture.config(), env, net, fs);
    engine.run(&fixture.request(target)).await
}

#[tokio::test]
async fn scenario_a_local_deploy_is_verified() {
    let fixture = Fixture::new(FILE_NAME, "X");
    let net = Arc::new(FakeConnectivity::unreachable());

    let report = run(
        &fixture,
        "localhost",
        Arc::new(FakeEnvironment::elevated()),
        net.clone(),
        Arc::new(LocalFileSystem),
    )
    .await;

    assert_eq!(
        report.verdict,
        Verdict::Deployed {
            destination: fixture.destination()
        }
    );
    assert_eq!(report.locality, Some(Locality::Local));
    assert_eq!(report.evaluated(), GateId::ORDER.to_vec());
    assert!(net.probes().is_empty());
    assert_eq!(std::fs::read_to_string(fixture.destination()).unwrap(), "X");
}

#[tokio::test]
async fn scenario_b_wrong_name_halts_immediately() {
    let fixture = Fixture::new("config.txt", "X");
    let env = Arc::new(FakeEnvironment::elevated());
    let net = Arc::new(FakeConnectivity::reachable());

    let report = run(
        &fixture,
        "localhost",
        env.clone(),
        net.clone(),
        Arc::new(LocalFileSystem),
    )
    .await;

    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::InvalidFilename)
    );
    assert_eq!(report.evaluated(), vec![GateId::FilenameIdentity]);
    assert_eq!(env.privilege_calls(), 0);
    assert_eq!(env.identity_calls(), 0);
    assert!(net.probes().is_empty());
    assert!(fixture.install_dir_is_empty());
}

#[tokio::test]
async fn scenario_c_unreachable_remote_never_touches_paths() {
    let fixture = Fixture::new(FILE_NAME, "X");
    let net = Arc::new(FakeConnectivity::unreachable());

    let report = run(
        &fixture,
        "Host01",
        Arc::new(FakeEnvironment::elevated()),
        net.clone(),
        Arc::new(LocalFileSystem),
    )
    .await;

    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::RemoteUnreachable)
    );
    assert_eq!(net.probes(), vec![("Host01".to_string(), 445)]);
    assert_eq!(report.install_dir, None);
    assert_eq!(report.outcome(GateId::InstallPathAccessibility), None);
    assert!(fixture.install_dir_is_empty());
}

#[tokio::test]
async fn scenario_d_inaccessible_share_prevents_copy() {
    let fixture = Fixture::new(FILE_NAME, "X");

    let report = run(
        &fixture,
        "Host01",
        Arc::new(FakeEnvironment::elevated()),
        Arc::new(FakeConnectivity::reachable()),
        Arc::new(LocalFileSystem),
    )
    .await;

    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::InstallPathInaccessible)
    );
    assert_eq!(
        report.install_dir,
        Some(fixture.config().remote_install_dir(&"Host01".parse().unwrap()))
    );
    assert_eq!(report.outcome(GateId::Copy), None);
    assert!(fixture.install_dir_is_empty());
}

#[tokio::test]
async fn scenario_e_file_removed_before_verification() {
    let fixture = Fixture::new(FILE_NAME, "X");

    let report = run(
        &fixture,
        "localhost",
        Arc::new(FakeEnvironment::elevated()),
        Arc::new(FakeConnectivity::reachable()),
        Arc::new(VanishingFileSystem),
    )
    .await;

    assert_eq!(report.outcome(GateId::Copy), Some(&GateOutcome::Passed));
    assert_eq!(
        report.failure().map(|f| f.kind),
        Some(FailureKind::VerificationFailed)
    );
    assert!(!fixture.destination().exists());
}

#[tokio::test]
async fn unprivileged_caller_halts_for_any_target() {
    for target in ["localhost", "Host01"] {
        let fixture = Fixture::new(FILE_NAME, "X");
        let net = Arc::new(FakeConnectivity::reachable());

        let report = run(
            &fixture,
            target,
            Arc::new(FakeEnvironment::unprivileged()),
            net.clone(),
            Arc::new(LocalFileSystem),
        )
        .await;

        assert_eq!(
            report.failure().map(|f| f.kind),
            Some(FailureKind::InsufficientPrivilege)
        );
        assert!(net.probes().is_empty());
        assert!(fixture.install_dir_is_empty());
    }
}

#[tokio::test]
async fn redeploy_overwrites_with_same_end_state() {
    let fixture = Fixture::new(FILE_NAME, "X");
    std::fs::write(fixture.destination(), "stale").unwrap();

    for _ in 0..2 {
        let report = run(
            &fixture,
            "localhost",
            Arc::new(FakeEnvironment::elevated()),
            Arc::new(FakeConnectivity::reachable()),
            Arc::new(LocalFileSystem),
        )
        .await;

        assert!(report.is_deployed(), "{:?}", report.verdict);
        assert_eq!(std::fs::read_to_string(fixture.destination()).unwrap(), "X");
    }
}

#[tokio::test]
async fn missing_source_is_a_copy_failure() {
    let fixture = Fixture::new(FILE_NAME, "X");
    std::fs::remove_file(&fixture.source).unwrap();

    let report = run(
        &fixture,
        "localhost",
        Arc::new(FakeEnvironment::elevated()),
        Arc::new(FakeConnectivity::reachable()),
        Arc::new(LocalFileSystem),
    )
    .await;

    assert_eq!(report.failure().map(|f| f.kind), Some(FailureKind::CopyFailed));
    assert!(fixture.install_dir_is_empty());
}
