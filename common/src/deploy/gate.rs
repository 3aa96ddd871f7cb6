//! # Gates
//!
//! Identifiers for the seven workflow steps, the tagged result each step
//! returns, and the failure taxonomy. Every failure kind belongs to exactly
//! one gate and is terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GateId {
    FilenameIdentity,
    Privilege,
    LocalityClassification,
    RemoteConnectivity,
    InstallPathAccessibility,
    Copy,
    PostCopyVerification,
}

impl GateId {
    /// Canonical evaluation order.
    pub const ORDER: [GateId; 7] = [
        GateId::FilenameIdentity,
        GateId::Privilege,
        GateId::LocalityClassification,
        GateId::RemoteConnectivity,
        GateId::InstallPathAccessibility,
        GateId::Copy,
        GateId::PostCopyVerification,
    ];

    /// 1-based position in [`GateId::ORDER`].
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GateId::FilenameIdentity => "filename-identity",
            GateId::Privilege => "privilege",
            GateId::LocalityClassification => "locality-classification",
            GateId::RemoteConnectivity => "remote-connectivity",
            GateId::InstallPathAccessibility => "install-path-accessibility",
            GateId::Copy => "copy",
            GateId::PostCopyVerification => "post-copy-verification",
        }
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidFilename,
    InsufficientPrivilege,
    RemoteUnreachable,
    InstallPathInaccessible,
    CopyFailed,
    VerificationFailed,
}

impl FailureKind {
    pub fn gate(self) -> GateId {
        match self {
            FailureKind::InvalidFilename => GateId::FilenameIdentity,
            FailureKind::InsufficientPrivilege => GateId::Privilege,
            FailureKind::RemoteUnreachable => GateId::RemoteConnectivity,
            FailureKind::InstallPathInaccessible => GateId::InstallPathAccessibility,
            FailureKind::CopyFailed => GateId::Copy,
            FailureKind::VerificationFailed => GateId::PostCopyVerification,
        }
    }

    /// What the operator has to do before re-invoking.
    pub fn remedy(self) -> &'static str {
        match self {
            FailureKind::InvalidFilename => "rename or resupply the source file",
            FailureKind::InsufficientPrivilege => "re-run from an elevated shell",
            FailureKind::RemoteUnreachable => "check the host is up and TCP 445 is not filtered",
            FailureKind::InstallPathInaccessible => "check the share permissions and that the directory exists",
            FailureKind::CopyFailed => "check free space, permissions and the network link",
            FailureKind::VerificationFailed => "check for processes removing the file or a share dropping writes",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A terminal gate failure with a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct GateFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl GateFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn gate(&self) -> GateId {
        self.kind.gate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    /// The gate does not apply on this branch (connectivity on a local target).
    Skipped,
    Failed(GateFailure),
}

impl GateOutcome {
    pub fn fail(kind: FailureKind, detail: impl Into<String>) -> Self {
        GateOutcome::Failed(GateFailure::new(kind, detail))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GateOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_matches_numbering() {
        for (idx, gate) in GateId::ORDER.iter().enumerate() {
            assert_eq!(gate.number(), idx + 1);
        }
    }

    #[test]
    fn every_failure_kind_maps_to_a_distinct_gate() {
        let kinds = [
            FailureKind::InvalidFilename,
            FailureKind::InsufficientPrivilege,
            FailureKind::RemoteUnreachable,
            FailureKind::InstallPathInaccessible,
            FailureKind::CopyFailed,
            FailureKind::VerificationFailed,
        ];
        let gates: HashSet<GateId> = kinds.iter().map(|k| k.gate()).collect();
        assert_eq!(gates.len(), kinds.len());
        assert!(!gates.contains(&GateId::LocalityClassification));
    }

    #[test]
    fn failure_displays_kind_and_detail() {
        let failure = GateFailure::new(FailureKind::RemoteUnreachable, "Host01:445 timed out");
        assert_eq!(failure.to_string(), "RemoteUnreachable: Host01:445 timed out");
        assert_eq!(failure.gate(), GateId::RemoteConnectivity);
    }
}
