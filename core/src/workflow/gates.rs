use std::path::PathBuf;
use std::sync::Arc;

use wadeploy_common::deploy::gate::{FailureKind, GateId, GateOutcome};
use wadeploy_common::deploy::identity::{LocalIdentitySet, Locality};
use wadeploy_common::ports::{ConnectivityProbe, DeployFileSystem, EnvironmentProbe};

use super::{DeploymentContext, Gate};

/// Gates 1 through 7 in evaluation order.
pub fn standard(
    env: Arc<dyn EnvironmentProbe>,
    net: Arc<dyn ConnectivityProbe>,
    fs: Arc<dyn DeployFileSystem>,
) -> Vec<Box<dyn Gate>> {
    vec![
        Box::new(FilenameIdentityGate),
        Box::new(PrivilegeGate::new(env.clone())),
        Box::new(LocalityGate::new(env)),
        Box::new(ConnectivityGate::new(net)),
        Box::new(InstallPathGate::new(fs.clone())),
        Box::new(CopyGate::new(fs.clone())),
        Box::new(VerificationGate::new(fs)),
    ]
}

pub struct FilenameIdentityGate;

#[async_trait::async_trait]
impl Gate for FilenameIdentityGate {
    fn id(&self) -> GateId {
        GateId::FilenameIdentity
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        let source = &ctx.request.source;
        if ctx.config.is_required_file_name(source) {
            return GateOutcome::Passed;
        }

        let found = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        GateOutcome::fail(
            FailureKind::InvalidFilename,
            format!(
                "source file must be named {}, got '{found}'",
                ctx.config.required_file_name
            ),
        )
    }
}

pub struct PrivilegeGate {
    env: Arc<dyn EnvironmentProbe>,
}

impl PrivilegeGate {
    pub fn new(env: Arc<dyn EnvironmentProbe>) -> Self {
        Self { env }
    }
}

#[async_trait::async_trait]
impl Gate for PrivilegeGate {
    fn id(&self) -> GateId {
        GateId::Privilege
    }

    async fn evaluate(&self, _ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        if self.env.is_elevated() {
            GateOutcome::Passed
        } else {
            GateOutcome::fail(
                FailureKind::InsufficientPrivilege,
                "administrative rights are required to write the install directory",
            )
        }
    }
}

/// Never fails. Records whether the target is this machine.
pub struct LocalityGate {
    env: Arc<dyn EnvironmentProbe>,
}

impl LocalityGate {
    pub fn new(env: Arc<dyn EnvironmentProbe>) -> Self {
        Self { env }
    }
}

#[async_trait::async_trait]
impl Gate for LocalityGate {
    fn id(&self) -> GateId {
        GateId::LocalityClassification
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        let identities: LocalIdentitySet = self.env.local_identities();
        let locality: Locality = identities.classify(&ctx.request.target);
        tracing::info!(
            "{} is {locality} ({} local identities)",
            ctx.request.target,
            identities.len()
        );
        ctx.locality = Some(locality);
        GateOutcome::Passed
    }
}

pub struct ConnectivityGate {
    net: Arc<dyn ConnectivityProbe>,
}

impl ConnectivityGate {
    pub fn new(net: Arc<dyn ConnectivityProbe>) -> Self {
        Self { net }
    }
}

#[async_trait::async_trait]
impl Gate for ConnectivityGate {
    fn id(&self) -> GateId {
        GateId::RemoteConnectivity
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        if ctx.locality != Some(Locality::Remote) {
            return GateOutcome::Skipped;
        }

        let host = ctx.request.target.as_str();
        let port = ctx.config.remote_port;
        if self.net.probe(host, port, ctx.config.probe_timeout).await {
            tracing::info!("{host}:{port} is reachable");
            GateOutcome::Passed
        } else {
            GateOutcome::fail(
                FailureKind::RemoteUnreachable,
                format!(
                    "{host}:{port} did not accept a connection within {} ms",
                    ctx.config.probe_timeout.as_millis()
                ),
            )
        }
    }
}

/// Resolves the install directory for the classified target, then checks it is reachable.
pub struct InstallPathGate {
    fs: Arc<dyn DeployFileSystem>,
}

impl InstallPathGate {
    pub fn new(fs: Arc<dyn DeployFileSystem>) -> Self {
        Self { fs }
    }
}

#[async_trait::async_trait]
impl Gate for InstallPathGate {
    fn id(&self) -> GateId {
        GateId::InstallPathAccessibility
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        let Some(locality) = ctx.locality else {
            return GateOutcome::fail(
                FailureKind::InstallPathInaccessible,
                "target was not classified before resolving the install path",
            );
        };

        let install_dir: PathBuf = ctx.config.install_dir(locality, &ctx.request.target);
        ctx.install_dir = Some(install_dir.clone());

        if self.fs.is_accessible_dir(&install_dir).await {
            GateOutcome::Passed
        } else {
            GateOutcome::fail(
                FailureKind::InstallPathInaccessible,
                format!("{} does not exist or cannot be accessed", install_dir.display()),
            )
        }
    }
}

pub struct CopyGate {
    fs: Arc<dyn DeployFileSystem>,
}

impl CopyGate {
    pub fn new(fs: Arc<dyn DeployFileSystem>) -> Self {
        Self { fs }
    }
}

#[async_trait::async_trait]
impl Gate for CopyGate {
    fn id(&self) -> GateId {
        GateId::Copy
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        let Some(install_dir) = ctx.install_dir.as_deref() else {
            return GateOutcome::fail(FailureKind::CopyFailed, "no install directory was resolved");
        };

        let destination: PathBuf = ctx.config.destination_file(install_dir);
        match self.fs.copy_file(&ctx.request.source, &destination).await {
            Ok(bytes) => {
                tracing::info!("Copied {bytes} bytes to {}", destination.display());
                ctx.destination = Some(destination);
                GateOutcome::Passed
            }
            Err(err) => GateOutcome::fail(
                FailureKind::CopyFailed,
                format!(
                    "copying {} to {} failed: {err}",
                    ctx.request.source.display(),
                    destination.display()
                ),
            ),
        }
    }
}

pub struct VerificationGate {
    fs: Arc<dyn DeployFileSystem>,
}

impl VerificationGate {
    pub fn new(fs: Arc<dyn DeployFileSystem>) -> Self {
        Self { fs }
    }
}

#[async_trait::async_trait]
impl Gate for VerificationGate {
    fn id(&self) -> GateId {
        GateId::PostCopyVerification
    }

    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome {
        let Some(install_dir) = ctx.install_dir.as_deref() else {
            return GateOutcome::fail(
                FailureKind::VerificationFailed,
                "no install directory was resolved",
            );
        };

        // Derived from the install directory, independent of the copy result.
        let expected: PathBuf = ctx.config.destination_file(install_dir);
        if self.fs.exists(&expected).await {
            GateOutcome::Passed
        } else {
            ctx.destination = None;
            GateOutcome::fail(
                FailureKind::VerificationFailed,
                format!("{} is missing after the copy reported success", expected.display()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeConnectivity, FakeEnvironment};
    use wadeploy_common::config::DeployConfig;
    use wadeploy_common::deploy::DeploymentRequest;

    fn request(target: &str, source: &str) -> DeploymentRequest {
        DeploymentRequest::new(target.parse().unwrap(), source)
    }

    #[tokio::test]
    async fn filename_gate_names_the_offending_file() {
        let cfg = DeployConfig::default();
        let req = request("localhost", "/tmp/config.txt");
        let mut ctx = DeploymentContext::new(&req, &cfg);

        let outcome = FilenameIdentityGate.evaluate(&mut ctx).await;

        match outcome {
            GateOutcome::Failed(failure) => {
                assert_eq!(failure.kind, FailureKind::InvalidFilename);
                assert!(failure.detail.contains("config.txt"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn locality_gate_records_classification() {
        let cfg = DeployConfig::default();
        let req = request("Host01", "/tmp/PowerStruxWAConfig.txt");
        let mut ctx = DeploymentContext::new(&req, &cfg);
        let gate = LocalityGate::new(Arc::new(FakeEnvironment::elevated()));

        assert_eq!(gate.evaluate(&mut ctx).await, GateOutcome::Passed);
        assert_eq!(ctx.locality, Some(Locality::Remote));
    }

    #[tokio::test]
    async fn connectivity_gate_skips_unclassified_and_local() {
        let cfg = DeployConfig::default();
        let req = request("localhost", "/tmp/PowerStruxWAConfig.txt");
        let net = Arc::new(FakeConnectivity::unreachable());
        let gate = ConnectivityGate::new(net.clone());

        let mut ctx = DeploymentContext::new(&req, &cfg);
        assert_eq!(gate.evaluate(&mut ctx).await, GateOutcome::Skipped);

        ctx.locality = Some(Locality::Local);
        assert_eq!(gate.evaluate(&mut ctx).await, GateOutcome::Skipped);
        assert!(net.probes().is_empty());
    }

    #[tokio::test]
    async fn connectivity_gate_uses_configured_port_and_timeout() {
        let cfg = DeployConfig::default().with_probe_timeout(std::time::Duration::from_millis(250));
        let req = request("Host01", "/tmp/PowerStruxWAConfig.txt");
        let net = Arc::new(FakeConnectivity::unreachable());
        let gate = ConnectivityGate::new(net.clone());
        let mut ctx = DeploymentContext::new(&req, &cfg);
        ctx.locality = Some(Locality::Remote);

        let outcome = gate.evaluate(&mut ctx).await;

        assert!(outcome.is_failed());
        assert_eq!(net.probes(), vec![("Host01".to_string(), 445)]);
        assert_eq!(net.timeouts(), vec![std::time::Duration::from_millis(250)]);
    }
}
