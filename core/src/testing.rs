//! In-memory port implementations that record every call.

use std::collections::BTreeSet;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wadeploy_common::deploy::identity::LocalIdentitySet;
use wadeploy_common::ports::{ConnectivityProbe, DeployFileSystem, EnvironmentProbe};

pub const FAKE_HOSTNAME: &str = "WORKSTATION7";

pub struct FakeEnvironment {
    identities: LocalIdentitySet,
    elevated: bool,
    identity_calls: AtomicUsize,
    privilege_calls: AtomicUsize,
}

impl FakeEnvironment {
    /// Loopback, `192.168.0.32`, `WORKSTATION7` and `localhost`.
    pub fn new(elevated: bool) -> Self {
        let addrs = [
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V4(Ipv4Addr::new(192, 168, 0, 32)),
        ];
        Self::with_identities(
            LocalIdentitySet::from_parts(addrs, Some(FAKE_HOSTNAME), "localhost"),
            elevated,
        )
    }

    pub fn with_identities(identities: LocalIdentitySet, elevated: bool) -> Self {
        Self {
            identities,
            elevated,
            identity_calls: AtomicUsize::new(0),
            privilege_calls: AtomicUsize::new(0),
        }
    }

    pub fn elevated() -> Self {
        Self::new(true)
    }

    pub fn unprivileged() -> Self {
        Self::new(false)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    pub fn privilege_calls(&self) -> usize {
        self.privilege_calls.load(Ordering::SeqCst)
    }
}

impl EnvironmentProbe for FakeEnvironment {
    fn local_identities(&self) -> LocalIdentitySet {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        self.identities.clone()
    }

    fn is_elevated(&self) -> bool {
        self.privilege_calls.fetch_add(1, Ordering::SeqCst);
        self.elevated
    }
}

pub struct FakeConnectivity {
    reachable: bool,
    probes: Mutex<Vec<(String, u16, Duration)>>,
}

impl FakeConnectivity {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            probes: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            probes: Mutex::new(Vec::new()),
        }
    }

    pub fn probes(&self) -> Vec<(String, u16)> {
        self.lock()
            .iter()
            .map(|(host, port, _)| (host.clone(), *port))
            .collect()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.lock().iter().map(|(_, _, timeout)| *timeout).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, u16, Duration)>> {
        self.probes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl ConnectivityProbe for FakeConnectivity {
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> bool {
        self.lock().push((host.to_string(), port, timeout));
        self.reachable
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsAccessibleDir(PathBuf),
    Exists(PathBuf),
    CopyFile(PathBuf, PathBuf),
}

#[derive(Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    calls: Vec<Call>,
}

/// Directories are declared up front; a successful copy creates the destination file
/// unless [`FakeFileSystem::dropping_copies`] is set.
#[derive(Default)]
pub struct FakeFileSystem {
    state: Mutex<FsState>,
    copy_error: Option<io::ErrorKind>,
    drop_copies: bool,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, dir: impl AsRef<Path>) -> Self {
        self.lock().dirs.insert(dir.as_ref().to_path_buf());
        self
    }

    pub fn failing_copy(mut self, kind: io::ErrorKind) -> Self {
        self.copy_error = Some(kind);
        self
    }

    /// Copies succeed but the file is gone before anyone looks.
    pub fn dropping_copies(mut self) -> Self {
        self.drop_copies = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FsState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl DeployFileSystem for FakeFileSystem {
    async fn is_accessible_dir(&self, path: &Path) -> bool {
        let mut state = self.lock();
        state.calls.push(Call::IsAccessibleDir(path.to_path_buf()));
        state.dirs.contains(path)
    }

    async fn exists(&self, path: &Path) -> bool {
        let mut state = self.lock();
        state.calls.push(Call::Exists(path.to_path_buf()));
        state.files.contains(path) || state.dirs.contains(path)
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut state = self.lock();
        state
            .calls
            .push(Call::CopyFile(from.to_path_buf(), to.to_path_buf()));

        if let Some(kind) = self.copy_error {
            return Err(io::Error::new(kind, format!("{kind}")));
        }
        if !self.drop_copies {
            state.files.insert(to.to_path_buf());
        }
        Ok(1)
    }
}
