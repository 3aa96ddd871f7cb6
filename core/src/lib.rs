//! # wadeploy core
//!
//! * **[`workflow`]**: the gate pipeline that validates and performs a deployment.
//! * **[`system`]**, **[`network`]**, **[`fs`]**: the operating-system side of each port.

pub mod fs;
pub mod network;
pub mod system;
pub mod workflow;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::sync::Arc;

use wadeploy_common::config::DeployConfig;

use crate::fs::LocalFileSystem;
use crate::network::tcp::TcpProbe;
use crate::system::SystemProbe;
use crate::workflow::DeploymentEngine;

/// Engine wired to the real machine.
pub fn system_engine(config: DeployConfig) -> DeploymentEngine {
    let env = Arc::new(SystemProbe::new(config.loopback_alias.clone()));
    DeploymentEngine::new(config, env, Arc::new(TcpProbe), Arc::new(LocalFileSystem))
}
