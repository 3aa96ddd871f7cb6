//! # Deployment Models
//!
//! * [`target::TargetHost`]: the host a single invocation deploys to.
//! * [`identity::LocalIdentitySet`]: the strings that mean "this machine".
//! * [`gate`]: gate identifiers, outcomes and the failure taxonomy.
//! * [`report::DeploymentReport`]: the trail of gate outcomes and the final verdict.

pub mod gate;
pub mod identity;
pub mod report;
pub mod target;

use std::path::PathBuf;

use target::TargetHost;

/// The two inputs of one deployment.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub target: TargetHost,
    pub source: PathBuf,
}

impl DeploymentRequest {
    pub fn new(target: TargetHost, source: impl Into<PathBuf>) -> Self {
        Self {
            target,
            source: source.into(),
        }
    }
}
