//! # Outbound Ports
//!
//! Contracts for everything the workflow touches outside its own memory.
//! Concrete implementations live in `wadeploy-core`; tests supply fakes.
//!
//! ## Rules
//! 1. All items here must be traits.
//! 2. Methods report I/O problems as values, never by panicking.

use std::io;
use std::path::Path;
use std::time::Duration;

use crate::deploy::identity::LocalIdentitySet;

/// Ambient facts about the machine the tool runs on.
pub trait EnvironmentProbe: Send + Sync {
    fn local_identities(&self) -> LocalIdentitySet;
    fn is_elevated(&self) -> bool;
}

#[async_trait::async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// `true` if a TCP connection to `host:port` is established within `timeout`.
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> bool;
}

#[async_trait::async_trait]
pub trait DeployFileSystem: Send + Sync {
    /// `true` if `path` exists, is a directory, and its metadata can be read.
    async fn is_accessible_dir(&self, path: &Path) -> bool;

    async fn exists(&self, path: &Path) -> bool;

    /// Copies `from` to the file path `to`, replacing anything already there.
    async fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64>;
}
