use std::path::PathBuf;

use crate::deploy::gate::{GateFailure, GateId, GateOutcome};
use crate::deploy::identity::Locality;
use crate::deploy::target::TargetHost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The destination file was seen after the copy.
    Deployed { destination: PathBuf },
    Halted { failure: GateFailure },
}

/// Everything one run of the workflow observed, in evaluation order.
#[derive(Debug, Clone)]
pub struct DeploymentReport {
    pub target: TargetHost,
    pub locality: Option<Locality>,
    pub install_dir: Option<PathBuf>,
    pub trail: Vec<(GateId, GateOutcome)>,
    pub verdict: Verdict,
}

impl DeploymentReport {
    pub fn is_deployed(&self) -> bool {
        matches!(self.verdict, Verdict::Deployed { .. })
    }

    pub fn failure(&self) -> Option<&GateFailure> {
        match &self.verdict {
            Verdict::Halted { failure } => Some(failure),
            Verdict::Deployed { .. } => None,
        }
    }

    /// Gates that produced an outcome, in the order they ran.
    pub fn evaluated(&self) -> Vec<GateId> {
        self.trail.iter().map(|(gate, _)| *gate).collect()
    }

    pub fn outcome(&self, gate: GateId) -> Option<&GateOutcome> {
        self.trail
            .iter()
            .find(|(id, _)| *id == gate)
            .map(|(_, outcome)| outcome)
    }
}
