//! Stable exit codes for `wadeploy`. Clap reserves 2 for usage errors.

use wadeploy_common::deploy::gate::FailureKind;
use wadeploy_common::deploy::report::{DeploymentReport, Verdict};

/// The file was copied and seen at the destination.
pub const OK: u8 = 0;
/// Anything outside the gate pipeline (bad arguments, terminal setup).
pub const INTERNAL: u8 = 1;
pub const INVALID_FILENAME: u8 = 10;
pub const INSUFFICIENT_PRIVILEGE: u8 = 11;
pub const REMOTE_UNREACHABLE: u8 = 12;
pub const INSTALL_PATH_INACCESSIBLE: u8 = 13;
pub const COPY_FAILED: u8 = 14;
pub const VERIFICATION_FAILED: u8 = 15;

pub fn for_failure(kind: FailureKind) -> u8 {
    match kind {
        FailureKind::InvalidFilename => INVALID_FILENAME,
        FailureKind::InsufficientPrivilege => INSUFFICIENT_PRIVILEGE,
        FailureKind::RemoteUnreachable => REMOTE_UNREACHABLE,
        FailureKind::InstallPathInaccessible => INSTALL_PATH_INACCESSIBLE,
        FailureKind::CopyFailed => COPY_FAILED,
        FailureKind::VerificationFailed => VERIFICATION_FAILED,
    }
}

pub fn for_report(report: &DeploymentReport) -> u8 {
    match &report.verdict {
        Verdict::Deployed { .. } => OK,
        Verdict::Halted { failure } => for_failure(failure.kind),
    }
}
