//! # Deployment Workflow Engine
//!
//! Runs an ordered list of [`Gate`]s against a [`DeploymentRequest`]. Every
//! outcome is recorded; the first [`GateOutcome::Failed`] halts the run and
//! nothing after it is evaluated.
//!
//! State discovered along the way (locality, install directory, destination
//! file) travels in a [`DeploymentContext`] so later gates only see what
//! earlier gates established.

pub mod gates;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{Instrument, info_span};

use wadeploy_common::config::DeployConfig;
use wadeploy_common::deploy::DeploymentRequest;
use wadeploy_common::deploy::gate::{FailureKind, GateFailure, GateId, GateOutcome};
use wadeploy_common::deploy::identity::Locality;
use wadeploy_common::deploy::report::{DeploymentReport, Verdict};
use wadeploy_common::ports::{ConnectivityProbe, DeployFileSystem, EnvironmentProbe};

#[derive(Debug)]
pub struct DeploymentContext<'a> {
    pub request: &'a DeploymentRequest,
    pub config: &'a DeployConfig,
    pub locality: Option<Locality>,
    pub install_dir: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

impl<'a> DeploymentContext<'a> {
    pub fn new(request: &'a DeploymentRequest, config: &'a DeployConfig) -> Self {
        Self {
            request,
            config,
            locality: None,
            install_dir: None,
            destination: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Gate: Send + Sync {
    fn id(&self) -> GateId;
    async fn evaluate(&self, ctx: &mut DeploymentContext<'_>) -> GateOutcome;
}

pub struct DeploymentEngine {
    config: DeployConfig,
    gates: Vec<Box<dyn Gate>>,
}

impl DeploymentEngine {
    /// The standard seven-gate pipeline wired to the given ports.
    pub fn new(
        config: DeployConfig,
        env: Arc<dyn EnvironmentProbe>,
        net: Arc<dyn ConnectivityProbe>,
        fs: Arc<dyn DeployFileSystem>,
    ) -> Self {
        Self {
            config,
            gates: gates::standard(env, net, fs),
        }
    }

    pub fn with_gates(config: DeployConfig, gates: Vec<Box<dyn Gate>>) -> Self {
        Self { config, gates }
    }

    pub fn gate_order(&self) -> Vec<GateId> {
        self.gates.iter().map(|gate| gate.id()).collect()
    }

    pub async fn run(&self, request: &DeploymentRequest) -> DeploymentReport {
        let mut ctx = DeploymentContext::new(request, &self.config);
        let mut trail: Vec<(GateId, GateOutcome)> = Vec::with_capacity(self.gates.len());
        let mut halted: Option<GateFailure> = None;

        for gate in &self.gates {
            let id: GateId = gate.id();
            let span = info_span!("gate", id = %id, n = id.number());
            tracing::debug!(parent: &span, "evaluating gate {} ({id})", id.number());

            let outcome: GateOutcome = gate.evaluate(&mut ctx).instrument(span.clone()).await;

            match &outcome {
                GateOutcome::Passed => tracing::info!(parent: &span, "{id} passed"),
                GateOutcome::Skipped => tracing::info!(parent: &span, "{id} skipped"),
                GateOutcome::Failed(failure) => {
                    tracing::error!(parent: &span, "{id} failed: {}", failure.detail);
                    halted = Some(failure.clone());
                }
            }

            trail.push((id, outcome));
            if halted.is_some() {
                break;
            }
        }

        let verdict: Verdict = match (halted, ctx.destination.clone()) {
            (Some(failure), _) => Verdict::Halted { failure },
            (None, Some(destination)) => Verdict::Deployed { destination },
            (None, None) => Verdict::Halted {
                failure: GateFailure::new(
                    FailureKind::VerificationFailed,
                    "workflow finished without copying a file",
                ),
            },
        };

        DeploymentReport {
            target: request.target.clone(),
            locality: ctx.locality,
            install_dir: ctx.install_dir,
            trail,
            verdict,
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
